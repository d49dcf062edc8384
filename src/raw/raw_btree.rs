use core::ops::Bound;

use super::node::{Node, SearchResult, Target};
use super::shared::SharedNode;
use crate::degree::Degree;
use crate::less::Less;

/// The core B-tree implementation backing `BTree`.
pub(crate) struct RawBTree<T, C> {
    /// Root node, if the tree is non-empty. Possibly shared with clones.
    root: Option<SharedNode<T>>,
    /// Branching factor bounding every node's item count.
    degree: Degree,
    /// Total number of items in the tree.
    len: usize,
    /// Ordering that places and identifies items.
    less: C,
}

impl<T, C> RawBTree<T, C> {
    /// Creates a new, empty tree.
    pub(crate) fn new(degree: Degree, less: C) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(degree = degree.get(), "creating tree");

        Self {
            root: None,
            degree,
            len: 0,
            less,
        }
    }

    /// Returns the number of items in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the branching factor.
    pub(crate) const fn degree(&self) -> Degree {
        self.degree
    }

    /// Returns the ordering.
    pub(crate) const fn less(&self) -> &C {
        &self.less
    }

    /// Returns the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the number of levels; zero for an empty tree.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root();
        while let Some(node) = current {
            height += 1;
            current = node.children().first().map(|child| &**child);
        }
        height
    }

    /// Drops every item. Nodes still referenced by a clone stay alive there.
    pub(crate) fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, "clearing tree");

        self.root = None;
        self.len = 0;
    }

    /// Returns the first item.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while !node.is_leaf() {
            node = node.child(0);
        }
        node.items().first()
    }

    /// Returns the last item.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while !node.is_leaf() {
            node = node.child(node.item_count());
        }
        node.items().last()
    }
}

impl<T, C: Less<T>> RawBTree<T, C> {
    /// Returns the stored item equal to `item`.
    pub(crate) fn get(&self, item: &T) -> Option<&T> {
        let mut node = self.root()?;
        loop {
            match node.search(item, &self.less) {
                SearchResult::Found(index) => return Some(node.item(index)),
                SearchResult::NotFound(index) => {
                    if node.is_leaf() {
                        return None;
                    }
                    node = node.child(index);
                }
            }
        }
    }

    /// Visits items in increasing order from `lower` up to `upper` while `visit`
    /// returns true.
    pub(crate) fn ascend<F>(&self, lower: Bound<&T>, upper: Bound<&T>, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        if let Some(root) = self.root() {
            ascend_node(root, lower, upper, &self.less, &mut visit);
        }
    }

    /// Visits items in decreasing order from `upper` down to `lower` while `visit`
    /// returns true.
    pub(crate) fn descend<F>(&self, upper: Bound<&T>, lower: Bound<&T>, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        if let Some(root) = self.root() {
            descend_node(root, upper, lower, &self.less, &mut visit);
        }
    }
}

impl<T: Clone, C: Less<T>> RawBTree<T, C> {
    /// Inserts an item, returning the equal item it replaced.
    pub(crate) fn insert(&mut self, item: T) -> Option<T> {
        let max_items = self.degree.max_items();

        let Some(mut root) = self.root.take() else {
            self.root = Some(SharedNode::new(Node::leaf(item)));
            self.len = 1;
            return None;
        };

        // A full root splits up front; this is the only way the tree grows taller.
        if root.item_count() >= max_items {
            let (median, right) = root.make_mut().split(max_items / 2);
            root = SharedNode::new(Node::internal(median, root, SharedNode::new(right)));

            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.len, "split root");
        }

        let replaced = root.make_mut().insert(item, max_items, &self.less);
        self.root = Some(root);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Removes the item picked out by `target`.
    pub(crate) fn remove(&mut self, target: Target<'_, T>) -> Option<T> {
        let root = self.root.as_mut()?;
        let removed = root.make_mut().remove(target, self.degree.min_items(), &self.less);

        // An emptied root hands over to its only child, or the tree becomes empty.
        if root.item_count() == 0 {
            self.root = root.make_mut().pop_child();

            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.len, "collapsed root");
        }

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

impl<T, C: Clone> Clone for RawBTree<T, C> {
    /// Shares the root with the new tree; nodes are copied lazily on mutation.
    fn clone(&self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, "cloning tree");

        Self {
            root: self.root.clone(),
            degree: self.degree,
            len: self.len,
            less: self.less.clone(),
        }
    }
}

/// Returns true if `item` lies beyond the upper end of an ascending scan.
fn above<T, C: Less<T>>(item: &T, upper: Bound<&T>, less: &C) -> bool {
    match upper {
        Bound::Unbounded => false,
        Bound::Included(upper) => less.less(upper, item),
        Bound::Excluded(upper) => !less.less(item, upper),
    }
}

/// Returns true if `item` lies beyond the lower end of a descending scan.
fn below<T, C: Less<T>>(item: &T, lower: Bound<&T>, less: &C) -> bool {
    match lower {
        Bound::Unbounded => false,
        Bound::Included(lower) => less.less(item, lower),
        Bound::Excluded(lower) => !less.less(lower, item),
    }
}

/// In-order walk of one subtree. Returns false once the scan must stop.
///
/// Only the leftmost path is searched for `lower`; every later child lies wholly
/// above it.
fn ascend_node<T, C, F>(node: &Node<T>, lower: Bound<&T>, upper: Bound<&T>, less: &C, visit: &mut F) -> bool
where
    C: Less<T>,
    F: FnMut(&T) -> bool,
{
    let items = node.items();
    let start = match lower {
        Bound::Unbounded => 0,
        Bound::Included(lower) => items.partition_point(|item| less.less(item, lower)),
        Bound::Excluded(lower) => items.partition_point(|item| !less.less(lower, item)),
    };

    let mut lower = lower;
    for (index, item) in items.iter().enumerate().skip(start) {
        if !node.is_leaf() && !ascend_node(node.child(index), lower, upper, less, visit) {
            return false;
        }
        lower = Bound::Unbounded;

        if above(item, upper, less) || !visit(item) {
            return false;
        }
    }

    node.is_leaf() || ascend_node(node.child(items.len()), lower, upper, less, visit)
}

/// Reverse in-order walk of one subtree. Returns false once the scan must stop.
fn descend_node<T, C, F>(node: &Node<T>, upper: Bound<&T>, lower: Bound<&T>, less: &C, visit: &mut F) -> bool
where
    C: Less<T>,
    F: FnMut(&T) -> bool,
{
    let items = node.items();
    let end = match upper {
        Bound::Unbounded => items.len(),
        Bound::Included(upper) => items.partition_point(|item| !less.less(upper, item)),
        Bound::Excluded(upper) => items.partition_point(|item| less.less(item, upper)),
    };

    if !node.is_leaf() && !descend_node(node.child(end), upper, lower, less, visit) {
        return false;
    }

    for (index, item) in items[..end].iter().enumerate().rev() {
        if below(item, lower, less) || !visit(item) {
            return false;
        }
        if !node.is_leaf() && !descend_node(node.child(index), Bound::Unbounded, lower, less, visit) {
            return false;
        }
    }

    true
}
