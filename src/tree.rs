//! A mutable Binary Search Tree over a single totally ordered value type.
//! Operations that one would expect to modify the tree (e.g. [`Tree::insert`]
//! or [`Tree::delete`]) do so in place.
//!
//! Beyond search the tree produces its values as [`List`]s in four linear
//! orders and answers predecessor/successor queries within each depth-first
//! order. One generic resolver, [`Tree::order_cessor`], drives all six of
//! those queries.
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//!
//! // The inorder sequence is the ascending sort of the tree's values.
//! assert_eq!(tree.inorder(), [1, 3, 4, 5, 7, 8, 9].into_iter().collect());
//!
//! // Deleting the root promotes its inorder predecessor.
//! tree.delete(&5);
//! assert!(tree.get_node(&5).is_none());
//! assert_eq!(tree.inorder(), [1, 3, 4, 7, 8, 9].into_iter().collect());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::list::List;

/// Tie-break for deleting a node with both children: the replacement value is
/// always drawn from the left subtree, i.e. the inorder predecessor. Deletion
/// never promotes from the right when a left subtree exists.
const TWO_CHILD_SPLICE: Cessor = Cessor::Predecessor;

/// A Binary Search Tree. This can be used for inserting, finding, and
/// deleting values, for producing the values in the four traversal orders,
/// and for traversal-order predecessor/successor queries.
///
/// An empty tree is a [`Leaf`][Tree::Leaf]; there is no sentinel node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

/// A `Node` has a value that is used for searching/sorting and exclusively
/// owns its two children, although those children may be
/// [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

/// Which neighbor of a value to resolve within a traversal's linear order.
/// Passed to [`Tree::order_cessor`] to select between the two directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cessor {
    /// The value immediately before the target in the traversal's output.
    Predecessor,
    /// The value immediately after the target in the traversal's output.
    Successor,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns the root node of this (sub)tree, if there is one.
    pub fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Gets the height of the tree: the number of levels of nodes along the
    /// longest root-to-leaf path. An empty tree has height 0 and a tree
    /// holding only the root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        fn at_level<T>(tree: &Tree<T>, level: usize) -> usize {
            match tree {
                Tree::Leaf => level,
                Tree::Node(n) => {
                    let left = at_level(&n.left, level + 1);
                    let right = at_level(&n.right, level + 1);
                    left.max(right)
                }
            }
        }
        at_level(self, 0)
    }

    /// Gets the total number of nodes in the tree.
    pub fn count_nodes(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.count_nodes() + n.right.count_nodes(),
        }
    }

    /// Inserts a value into the tree, keeping the search-order invariant.
    /// Inserting a value that is already present is a no-op; the existing
    /// node is not replaced. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.count_nodes(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self {
            Self::Leaf => *self = Self::Node(Node::new(value)),
            Self::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.insert(value),
                Ordering::Equal => {}
                Ordering::Greater => n.right.insert(value),
            },
        }
    }

    /// Potentially finds the node holding the given value, descending left or
    /// right by comparison. If no node holds the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.get_node(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.get_node(&42).is_none());
    /// ```
    pub fn get_node(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.get_node(value),
                Ordering::Equal => Some(n),
                Ordering::Greater => n.right.get_node(value),
            },
        }
    }

    fn get_node_mut(&mut self, value: &T) -> Option<&mut Node<T>>
    where
        T: Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.get_node_mut(value),
                Ordering::Equal => Some(n),
                Ordering::Greater => n.right.get_node_mut(value),
            },
        }
    }

    /// Gets the preorder of the tree: each node's value before the values of
    /// its left subtree, then those of its right subtree.
    pub fn preorder(&self) -> List<T>
    where
        T: Clone,
    {
        match self {
            Self::Leaf => List::new(),
            Self::Node(n) => {
                let mut order = List::new();
                order.push_back(n.value.clone());
                order.concat(n.left.preorder());
                order.concat(n.right.preorder());
                order
            }
        }
    }

    /// Gets the inorder of the tree: the values of each node's left subtree,
    /// then the node's value, then the values of its right subtree. By the
    /// search-order invariant this is the ascending sort of all values in the
    /// tree.
    pub fn inorder(&self) -> List<T>
    where
        T: Clone,
    {
        match self {
            Self::Leaf => List::new(),
            Self::Node(n) => {
                let mut order = n.left.inorder();
                order.push_back(n.value.clone());
                order.concat(n.right.inorder());
                order
            }
        }
    }

    /// Gets the postorder of the tree: the values of each node's left
    /// subtree, then those of its right subtree, then the node's value.
    pub fn postorder(&self) -> List<T>
    where
        T: Clone,
    {
        match self {
            Self::Leaf => List::new(),
            Self::Node(n) => {
                let mut order = n.left.postorder();
                order.concat(n.right.postorder());
                order.push_back(n.value.clone());
                order
            }
        }
    }

    /// Gets the level order of the tree: breadth-first from the root, each
    /// level left to right.
    pub fn level_order(&self) -> List<T>
    where
        T: Clone,
    {
        let mut order = List::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.node() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            order.push_back(node.value.clone());
            if let Some(left) = node.left.node() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.node() {
                queue.push_back(right);
            }
        }
        order
    }

    /// Finds the node whose value is adjacent to `value` within the linear
    /// order produced by `order_fn`, on the side selected by `cessor`. This
    /// is the generic resolver behind the six concrete
    /// predecessor/successor queries like [`Tree::inorder_predecessor`].
    ///
    /// Returns `None` when `value` is not in the tree or when it has no
    /// neighbor on that side (it is first or last in the traversal's output).
    pub fn order_cessor<F>(&self, value: &T, order_fn: F, cessor: Cessor) -> Option<&Node<T>>
    where
        T: Ord + Clone,
        F: Fn(&Self) -> List<T>,
    {
        let order = order_fn(self);
        let occurrence = order.nth_occurrence(value, 1)?;
        let adjacent = match cessor {
            Cessor::Predecessor => order.predecessor_of_nth_occurrence(occurrence, 1),
            Cessor::Successor => order.successor_of_nth_occurrence(occurrence, 1),
        }?;
        self.get_node(adjacent)
    }

    /// Finds the node visited immediately before `value` in preorder. This is
    /// adjacency in the preorder output, which depends on the shape of the
    /// tree; it is *not* the numerically previous value.
    pub fn preorder_predecessor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::preorder, Cessor::Predecessor)
    }

    /// Finds the node visited immediately after `value` in preorder. This is
    /// adjacency in the preorder output, which depends on the shape of the
    /// tree; it is *not* the numerically next value.
    pub fn preorder_successor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::preorder, Cessor::Successor)
    }

    /// Finds the node holding the largest value smaller than `value`, i.e.
    /// the value immediately before `value` in the ascending sort of the
    /// tree's values. The smallest value in the tree has no predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 8] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.inorder_predecessor(&5).map(|n| n.value()), Some(&3));
    /// assert!(tree.inorder_predecessor(&3).is_none());
    /// ```
    pub fn inorder_predecessor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::inorder, Cessor::Predecessor)
    }

    /// Finds the node holding the smallest value larger than `value`, i.e.
    /// the value immediately after `value` in the ascending sort of the
    /// tree's values. The largest value in the tree has no successor.
    pub fn inorder_successor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::inorder, Cessor::Successor)
    }

    /// Finds the node visited immediately before `value` in postorder. This
    /// is adjacency in the postorder output, which depends on the shape of
    /// the tree; it is *not* the numerically previous value.
    pub fn postorder_predecessor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::postorder, Cessor::Predecessor)
    }

    /// Finds the node visited immediately after `value` in postorder. This is
    /// adjacency in the postorder output, which depends on the shape of the
    /// tree; it is *not* the numerically next value.
    pub fn postorder_successor(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord + Clone,
    {
        self.order_cessor(value, Self::postorder, Cessor::Successor)
    }

    /// Finds the node whose left or right child holds `value`. Returns `None`
    /// when `value` is the root's value or is not in the tree.
    ///
    /// The search checks both immediate children for a match and otherwise
    /// descends on the side the search-order invariant dictates. It assumes
    /// that invariant holds; there is no defensive full scan for trees that
    /// violate it.
    pub fn parent_of(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let n = self.node()?;
        if n.value == *value {
            return None;
        }
        if let Some(left) = n.left.node() {
            if left.value == *value {
                return Some(n);
            }
            if *value < n.value {
                return n.left.parent_of(value);
            }
        }
        if let Some(right) = n.right.node() {
            if right.value == *value {
                return Some(n);
            }
            if *value > n.value {
                return n.right.parent_of(value);
            }
        }
        None
    }

    /// Mutable twin of [`Tree::parent_of`], used by deletion to reach the
    /// child slot that has to be rewritten.
    fn parent_of_mut(&mut self, value: &T) -> Option<&mut Node<T>>
    where
        T: Ord,
    {
        let n = match self {
            Self::Leaf => return None,
            Self::Node(n) => n,
        };
        if n.value == *value {
            return None;
        }
        let child_match = n.left.node().is_some_and(|left| left.value == *value)
            || n.right.node().is_some_and(|right| right.value == *value);
        if child_match {
            return Some(n);
        }
        if *value < n.value && n.left.is_node() {
            return n.left.parent_of_mut(value);
        }
        if *value > n.value && n.right.is_node() {
            return n.right.parent_of_mut(value);
        }
        None
    }

    /// Deletes the node holding `value` from the tree, if it exists,
    /// preserving the search-order invariant. Deleting a value that is not in
    /// the tree is a no-op.
    ///
    /// A leaf node is simply unlinked from its parent. A node with a left
    /// subtree (whether or not it also has a right one - left always takes
    /// precedence) takes over the value of its inorder predecessor,
    /// and the predecessor's node is spliced out with its own left subtree
    /// reattached in its place. A node with only a right subtree does the
    /// symmetric thing with its inorder successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(value);
    /// }
    ///
    /// // The root has both children, so its inorder predecessor 4 is
    /// // promoted into the root position.
    /// tree.delete(&5);
    /// assert_eq!(tree.preorder(), [4, 3, 1, 8, 7, 9].into_iter().collect());
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord + Clone,
    {
        let (has_left, has_right) = match self.get_node(value) {
            Some(node) => (node.left.is_node(), node.right.is_node()),
            None => return,
        };

        if !has_left && !has_right {
            self.delete_leaf(value);
        } else {
            let cessor = if has_left && has_right {
                TWO_CHILD_SPLICE
            } else if has_left {
                Cessor::Predecessor
            } else {
                Cessor::Successor
            };
            self.promote_and_splice(value, cessor);
        }
    }

    /// Unlinks a childless node by clearing its parent's child slot. The slot
    /// must be cleared before the node goes away, otherwise the parent would
    /// be left referencing a dead child.
    fn delete_leaf(&mut self, value: &T)
    where
        T: Ord,
    {
        match self.parent_of_mut(value) {
            Some(parent) => {
                if parent.left.node().is_some_and(|left| left.value == *value) {
                    *parent.left = Tree::Leaf;
                } else {
                    *parent.right = Tree::Leaf;
                }
            }
            // No parent: the target is the root and the only node.
            None => *self = Tree::Leaf,
        }
    }

    /// Overwrites the target node's value with that of its inorder
    /// predecessor or successor (the donor) and splices the donor's node out
    /// of the tree.
    ///
    /// A predecessor donor is the rightmost node of the target's left subtree
    /// and so has no right child, but its left subtree must survive the
    /// splice; it is reattached to the slot the donor occupied. A successor
    /// donor mirrors this with its right subtree.
    fn promote_and_splice(&mut self, value: &T, cessor: Cessor)
    where
        T: Ord + Clone,
    {
        let donor = match cessor {
            Cessor::Predecessor => self.inorder_predecessor(value),
            Cessor::Successor => self.inorder_successor(value),
        };
        let donor_value = match donor {
            Some(node) => node.value.clone(),
            // The target has a subtree on the donor's side, so a donor always
            // exists; nothing to do if the tree says otherwise.
            None => return,
        };

        let parent = match self.parent_of_mut(&donor_value) {
            Some(parent) => parent,
            // The donor sits below the target and so is never the root.
            None => return,
        };
        let slot = if parent
            .left
            .node()
            .is_some_and(|left| left.value == donor_value)
        {
            &mut parent.left
        } else {
            &mut parent.right
        };
        let spliced = std::mem::take(slot);
        if let Tree::Node(donor) = *spliced {
            *slot = match cessor {
                Cessor::Predecessor => donor.left,
                Cessor::Successor => donor.right,
            };
        }

        if let Some(target) = self.get_node_mut(value) {
            target.value = donor_value;
        }
    }
}

impl<T> Node<T> {
    /// Construct a new childless `Node` with the given `value`.
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left subtree.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// This node's right subtree.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }
}
