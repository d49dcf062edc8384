use core::ops::Bound::{Excluded, Included, Unbounded};

use super::BTree;
use crate::less::Less;

/// Callback-driven scans.
///
/// Each scan calls `visit` once per item, in order, until `visit` returns `false`
/// or the range is exhausted. Nothing is visited after the first `false`. Scans
/// keep no state between calls and use `O(height)` stack.
impl<T, C: Less<T>> BTree<T, C> {
    /// Visits every item in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = (1..=5).collect();
    /// let mut seen = Vec::new();
    /// tree.ascend(|&item| {
    ///     seen.push(item);
    ///     item < 3
    /// });
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn ascend<F>(&self, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.ascend(Unbounded, Unbounded, visit);
    }

    /// Visits the items `>= start` in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = (1..=5).collect();
    /// let mut seen = Vec::new();
    /// tree.ascend_greater_or_equal(&3, |&item| {
    ///     seen.push(item);
    ///     true
    /// });
    /// assert_eq!(seen, [3, 4, 5]);
    /// ```
    pub fn ascend_greater_or_equal<F>(&self, start: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.ascend(Included(start), Unbounded, visit);
    }

    /// Visits the items `< end` in increasing order.
    pub fn ascend_less_than<F>(&self, end: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.ascend(Unbounded, Excluded(end), visit);
    }

    /// Visits the items in `[start, end)` in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = (0..10).collect();
    /// let mut seen = Vec::new();
    /// tree.ascend_range(&2, &5, |&item| {
    ///     seen.push(item);
    ///     true
    /// });
    /// assert_eq!(seen, [2, 3, 4]);
    /// ```
    pub fn ascend_range<F>(&self, start: &T, end: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.ascend(Included(start), Excluded(end), visit);
    }

    /// Visits every item in decreasing order.
    pub fn descend<F>(&self, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.descend(Unbounded, Unbounded, visit);
    }

    /// Visits the items `<= start` in decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = (1..=5).collect();
    /// let mut seen = Vec::new();
    /// tree.descend_less_or_equal(&3, |&item| {
    ///     seen.push(item);
    ///     true
    /// });
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub fn descend_less_or_equal<F>(&self, start: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.descend(Included(start), Unbounded, visit);
    }

    /// Visits the items `> end` in decreasing order.
    pub fn descend_greater_than<F>(&self, end: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.descend(Unbounded, Excluded(end), visit);
    }

    /// Visits the items in `(end, start]` in decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = (0..10).collect();
    /// let mut seen = Vec::new();
    /// tree.descend_range(&7, &4, |&item| {
    ///     seen.push(item);
    ///     true
    /// });
    /// assert_eq!(seen, [7, 6, 5]);
    /// ```
    pub fn descend_range<F>(&self, start: &T, end: &T, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.descend(Included(start), Excluded(end), visit);
    }
}
