//! A singly linked list of values in a fixed order. The [tree][crate::tree]
//! materializes its traversals as `List`s and resolves traversal-order
//! predecessor/successor queries through the occurrence lookups here.
//!
//! # Examples
//!
//! ```
//! use bstree::list::List;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.nth_occurrence(&1, 2), Some(&1));
//! assert_eq!(list.successor_of_nth_occurrence(&1, 1), Some(&2));
//! ```

use std::fmt;

/// An ordered, possibly-empty, singly linked sequence of values.
pub struct List<T> {
    head: Option<Box<ListNode<T>>>,
}

#[derive(Clone)]
struct ListNode<T> {
    value: T,
    next: Option<Box<ListNode<T>>>,
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts a value at the head of the list.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(ListNode {
            value,
            next: self.head.take(),
        }));
    }

    /// Appends a value at the tail of the list.
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { value, next: None }));
    }

    /// Appends `other`'s values after this list's values. `other` is consumed
    /// and its nodes are reused, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::list::List;
    ///
    /// let mut left: List<i32> = [1, 2].into_iter().collect();
    /// let right = [3, 4].into_iter().collect();
    /// left.concat(right);
    ///
    /// assert_eq!(left, [1, 2, 3, 4].into_iter().collect());
    /// ```
    pub fn concat(&mut self, mut other: List<T>) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = other.head.take();
    }

    /// Finds the `n`th occurrence (1-based) of `value`, returning a reference
    /// to it. Returns `None` when `n` is 0 or the list holds fewer than `n`
    /// occurrences.
    pub fn nth_occurrence(&self, value: &T, n: usize) -> Option<&T>
    where
        T: PartialEq,
    {
        if n == 0 {
            return None;
        }
        let mut seen = 0;
        for item in self.iter() {
            if item == value {
                seen += 1;
                if seen == n {
                    return Some(item);
                }
            }
        }
        None
    }

    /// Finds the value immediately before the `n`th occurrence (1-based) of
    /// `value`. Returns `None` when that occurrence doesn't exist or sits at
    /// the head of the list.
    pub fn predecessor_of_nth_occurrence(&self, value: &T, n: usize) -> Option<&T>
    where
        T: PartialEq,
    {
        if n == 0 {
            return None;
        }
        let mut seen = 0;
        let mut previous = None;
        for item in self.iter() {
            if item == value {
                seen += 1;
                if seen == n {
                    return previous;
                }
            }
            previous = Some(item);
        }
        None
    }

    /// Finds the value immediately after the `n`th occurrence (1-based) of
    /// `value`. Returns `None` when that occurrence doesn't exist or sits at
    /// the tail of the list.
    pub fn successor_of_nth_occurrence(&self, value: &T, n: usize) -> Option<&T>
    where
        T: PartialEq,
    {
        if n == 0 {
            return None;
        }
        let mut seen = 0;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            let next = current.next.as_deref();
            if current.value == *value {
                seen += 1;
                if seen == n {
                    return next.map(|successor| &successor.value);
                }
            }
            node = next;
        }
        None
    }

    /// Returns an iterator over references to the list's values, head to
    /// tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Drop for List<T> {
    // The derived drop would recurse once per node and could blow the stack
    // on a long list, so walk the nodes iteratively instead.
    fn drop(&mut self) {
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut cursor = &mut list.head;
        for value in iter {
            cursor = &mut cursor.insert(Box::new(ListNode { value, next: None })).next;
        }
        list
    }
}

/// A borrowing iterator over a [`List`], created by [`List::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
