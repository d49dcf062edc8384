use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use super::shared::SharedNode;
use crate::less::Less;

/// A B-tree node: sorted items and, for internal nodes, `items.len() + 1` children.
///
/// Unlike a B+tree, items live at every level. Child `i` holds the items that sort
/// between `items[i - 1]` and `items[i]`.
#[derive(Clone)]
pub(crate) struct Node<T> {
    items: Vec<T>,
    // Empty for leaves.
    children: Vec<SharedNode<T>>,
}

/// Result of searching for an item in a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// An equal item was found at the given index.
    Found(usize),
    /// No equal item; index is where it would be inserted.
    NotFound(usize),
}

/// Which item a removal is aimed at.
pub(crate) enum Target<'a, T> {
    Item(&'a T),
    Min,
    Max,
}

impl<T> Clone for Target<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Target<'_, T> {}

impl<T> Node<T> {
    /// Creates a leaf holding a single item.
    ///
    /// Storage grows with the items actually held, never with the degree.
    pub(crate) fn leaf(item: T) -> Self {
        Self {
            items: vec![item],
            children: Vec::new(),
        }
    }

    /// Creates a root over two halves of a split node.
    pub(crate) fn internal(median: T, left: SharedNode<T>, right: SharedNode<T>) -> Self {
        Self {
            items: vec![median],
            children: vec![left, right],
        }
    }

    /// Returns true if this node has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of items in this node.
    #[inline]
    pub(crate) fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the item at the given index.
    #[inline]
    pub(crate) fn item(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Returns all items.
    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the child at the given index.
    #[inline]
    pub(crate) fn child(&self, index: usize) -> &Node<T> {
        &self.children[index]
    }

    /// Returns all children.
    pub(crate) fn children(&self) -> &[SharedNode<T>] {
        &self.children
    }

    /// Locates `item` with a binary search under `less`.
    #[inline]
    pub(crate) fn search<C>(&self, item: &T, less: &C) -> SearchResult
    where
        C: Less<T>,
    {
        let index = self.items.partition_point(|probe| less.less(probe, item));
        if index < self.items.len() && !less.less(item, &self.items[index]) {
            SearchResult::Found(index)
        } else {
            SearchResult::NotFound(index)
        }
    }

    /// Inserts an item at the given position.
    #[cfg(test)]
    pub(crate) fn insert_item(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Detaches the last child. An emptied root hands its only child up this way;
    /// a leaf yields `None`.
    pub(crate) fn pop_child(&mut self) -> Option<SharedNode<T>> {
        self.children.pop()
    }

    /// Splits this node around `items[at]`. Returns (`median`, `right`).
    ///
    /// The left half keeps `items[..at]` and `children[..=at]`; the right half takes
    /// the rest.
    pub(crate) fn split(&mut self, at: usize) -> (T, Node<T>) {
        let right_items = self.items.split_off(at + 1);

        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(at + 1)
        };

        let median = self.items.pop().expect("`Node::split()` - `at` is out of bounds!");
        let right = Node {
            items: right_items,
            children: right_children,
        };
        (median, right)
    }

    /// Appends the separator from the parent and all of `right`.
    pub(crate) fn merge_with_right(&mut self, separator: T, mut right: Node<T>) {
        self.items.push(separator);
        self.items.append(&mut right.items);
        self.children.append(&mut right.children);
    }
}

impl<T: Clone> Node<T> {
    /// Returns exclusive access to a child, copying it first if it is shared.
    #[inline]
    fn child_mut(&mut self, index: usize) -> &mut Node<T> {
        self.children[index].make_mut()
    }

    /// Inserts `item` into this subtree, replacing an equal item if one exists.
    ///
    /// Full children are split before the descent, so this node must have room.
    pub(crate) fn insert<C>(&mut self, item: T, max_items: usize, less: &C) -> Option<T>
    where
        C: Less<T>,
    {
        let mut index = match self.search(&item, less) {
            SearchResult::Found(index) => return Some(mem::replace(&mut self.items[index], item)),
            SearchResult::NotFound(index) => index,
        };

        if self.is_leaf() {
            self.items.insert(index, item);
            return None;
        }

        if self.children[index].item_count() >= max_items {
            self.split_child(index, max_items);
            let median = &self.items[index];
            if less.less(median, &item) {
                index += 1;
            } else if !less.less(&item, median) {
                return Some(mem::replace(&mut self.items[index], item));
            }
        }

        self.child_mut(index).insert(item, max_items, less)
    }

    /// Splits the full child at `index`, promoting its median into this node.
    fn split_child(&mut self, index: usize, max_items: usize) {
        let (median, right) = self.child_mut(index).split(max_items / 2);
        self.items.insert(index, median);
        self.children.insert(index + 1, SharedNode::new(right));
    }

    /// Removes `target` from this subtree.
    ///
    /// Children at the minimum are grown before the descent, so this node must hold
    /// more than `min_items` items unless it is the root.
    pub(crate) fn remove<C>(&mut self, target: Target<'_, T>, min_items: usize, less: &C) -> Option<T>
    where
        C: Less<T>,
    {
        let (index, found) = match target {
            Target::Max => {
                if self.is_leaf() {
                    return self.items.pop();
                }
                (self.items.len(), false)
            }
            Target::Min => {
                if self.is_leaf() {
                    return if self.items.is_empty() {
                        None
                    } else {
                        Some(self.items.remove(0))
                    };
                }
                (0, false)
            }
            Target::Item(item) => match self.search(item, less) {
                SearchResult::Found(index) => {
                    if self.is_leaf() {
                        return Some(self.items.remove(index));
                    }
                    (index, true)
                }
                SearchResult::NotFound(index) => {
                    if self.is_leaf() {
                        return None;
                    }
                    (index, false)
                }
            },
        };

        if self.children[index].item_count() <= min_items {
            self.grow_child(index, min_items);
            // The child layout changed; search again from this node.
            return self.remove(target, min_items, less);
        }

        let child = self.child_mut(index);
        if found {
            // Replace the separator with its predecessor, the maximum of the left subtree.
            let predecessor = child.remove(Target::Max, min_items, less)?;
            return Some(mem::replace(&mut self.items[index], predecessor));
        }
        child.remove(target, min_items, less)
    }

    /// Brings the child at `index` above `min_items`, by rotation through a sibling
    /// with a spare item or by merging with a sibling.
    fn grow_child(&mut self, index: usize, min_items: usize) {
        if index > 0 && self.children[index - 1].item_count() > min_items {
            self.rotate_from_left(index);
        } else if index < self.items.len() && self.children[index + 1].item_count() > min_items {
            self.rotate_from_right(index);
        } else if index < self.items.len() {
            self.merge_children(index);
        } else {
            self.merge_children(index - 1);
        }
    }

    /// Moves the left sibling's last item up and the separator down into `children[index]`.
    fn rotate_from_left(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index);
        let donor = left[index - 1].make_mut();
        let child = right[0].make_mut();

        let stolen = donor.items.pop().expect("`Node::rotate_from_left()` - donor is empty!");
        let separator = mem::replace(&mut self.items[index - 1], stolen);
        child.items.insert(0, separator);
        if let Some(grandchild) = donor.children.pop() {
            child.children.insert(0, grandchild);
        }
    }

    /// Moves the right sibling's first item up and the separator down into `children[index]`.
    fn rotate_from_right(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index + 1);
        let child = left[index].make_mut();
        let donor = right[0].make_mut();

        let stolen = donor.items.remove(0);
        let separator = mem::replace(&mut self.items[index], stolen);
        child.items.push(separator);
        if !donor.children.is_empty() {
            child.children.push(donor.children.remove(0));
        }
    }

    /// Merges `children[index + 1]` and `items[index]` into `children[index]`.
    fn merge_children(&mut self, index: usize) {
        let separator = self.items.remove(index);
        let right = self.children.remove(index + 1).into_node();
        self.child_mut(index).merge_with_right(separator, right);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::less::Natural;
    use alloc::vec;

    fn leaf_of(items: &[i32]) -> Node<i32> {
        Node {
            items: items.to_vec(),
            children: Vec::new(),
        }
    }

    fn internal_of(items: &[i32], children: Vec<Node<i32>>) -> Node<i32> {
        Node {
            items: items.to_vec(),
            children: children.into_iter().map(SharedNode::new).collect(),
        }
    }

    fn child_items(node: &Node<i32>, index: usize) -> &[i32] {
        node.child(index).items()
    }

    #[test]
    fn search_reports_insertion_points() {
        let node = leaf_of(&[10, 20, 30]);
        assert_eq!(node.search(&5, &Natural), SearchResult::NotFound(0));
        assert_eq!(node.search(&10, &Natural), SearchResult::Found(0));
        assert_eq!(node.search(&25, &Natural), SearchResult::NotFound(2));
        assert_eq!(node.search(&30, &Natural), SearchResult::Found(2));
        assert_eq!(node.search(&35, &Natural), SearchResult::NotFound(3));
    }

    #[test]
    fn split_leaf_promotes_median() {
        let mut node = leaf_of(&[1, 2, 3, 4, 5]);
        let (median, right) = node.split(2);
        assert_eq!(median, 3);
        assert_eq!(node.items(), &[1, 2]);
        assert_eq!(right.items(), &[4, 5]);
        assert!(right.is_leaf());
    }

    #[test]
    fn split_internal_partitions_children() {
        let mut node = internal_of(
            &[10, 20, 30],
            vec![leaf_of(&[5]), leaf_of(&[15]), leaf_of(&[25]), leaf_of(&[35])],
        );
        let (median, right) = node.split(1);
        assert_eq!(median, 20);
        assert_eq!(node.items(), &[10]);
        assert_eq!(node.children().len(), 2);
        assert_eq!(right.items(), &[30]);
        assert_eq!(right.children().len(), 2);
        assert_eq!(child_items(&right, 0), &[25]);
        assert_eq!(child_items(&right, 1), &[35]);
    }

    #[test]
    fn insert_splits_full_child_before_descending() {
        // Degree 2: at most three items per node.
        let mut node = internal_of(&[10], vec![leaf_of(&[1, 2, 3]), leaf_of(&[11])]);
        assert_eq!(node.insert(4, 3, &Natural), None);
        assert_eq!(node.items(), &[2, 10]);
        assert_eq!(child_items(&node, 0), &[1]);
        assert_eq!(child_items(&node, 1), &[3, 4]);
        assert_eq!(child_items(&node, 2), &[11]);
    }

    #[test]
    fn insert_replaces_promoted_median() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1, 2, 3]), leaf_of(&[11])]);
        assert_eq!(node.insert(2, 3, &Natural), Some(2));
        assert_eq!(node.items(), &[2, 10]);
        assert_eq!(child_items(&node, 0), &[1]);
        assert_eq!(child_items(&node, 1), &[3]);
    }

    #[test]
    fn remove_rotates_from_left() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1, 2]), leaf_of(&[11])]);
        assert_eq!(node.remove(Target::Item(&11), 1, &Natural), Some(11));
        assert_eq!(node.items(), &[2]);
        assert_eq!(child_items(&node, 0), &[1]);
        assert_eq!(child_items(&node, 1), &[10]);
    }

    #[test]
    fn remove_rotates_from_right() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1]), leaf_of(&[11, 12])]);
        assert_eq!(node.remove(Target::Min, 1, &Natural), Some(1));
        assert_eq!(node.items(), &[11]);
        assert_eq!(child_items(&node, 0), &[10]);
        assert_eq!(child_items(&node, 1), &[12]);
    }

    #[test]
    fn remove_merges_minimal_siblings() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1]), leaf_of(&[11])]);
        assert_eq!(node.remove(Target::Max, 1, &Natural), Some(11));
        assert!(node.items().is_empty());
        assert_eq!(node.children().len(), 1);
        assert_eq!(child_items(&node, 0), &[1, 10]);
    }

    #[test]
    fn remove_internal_hit_uses_predecessor() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1, 2, 3]), leaf_of(&[11, 12])]);
        assert_eq!(node.remove(Target::Item(&10), 1, &Natural), Some(10));
        assert_eq!(node.items(), &[3]);
        assert_eq!(child_items(&node, 0), &[1, 2]);
        assert_eq!(child_items(&node, 1), &[11, 12]);
    }

    #[test]
    fn remove_missing_item_returns_none() {
        let mut node = internal_of(&[10], vec![leaf_of(&[1, 2]), leaf_of(&[11, 12])]);
        assert_eq!(node.remove(Target::Item(&5), 1, &Natural), None);
        assert_eq!(node.items(), &[10]);
    }

    #[test]
    fn rotation_carries_grandchildren() {
        let left = internal_of(
            &[3, 6],
            vec![leaf_of(&[1, 2]), leaf_of(&[4, 5]), leaf_of(&[7, 8])],
        );
        let right = internal_of(&[20], vec![leaf_of(&[11, 12]), leaf_of(&[21, 22])]);
        let mut root = internal_of(&[10], vec![left, right]);

        root.grow_child(1, 1);
        assert_eq!(root.items(), &[6]);
        assert_eq!(child_items(&root, 0), &[3]);
        assert_eq!(child_items(&root, 1), &[10, 20]);
        assert_eq!(child_items(root.child(1), 0), &[7, 8]);
        assert_eq!(root.child(0).children().len(), 2);
        assert_eq!(root.child(1).children().len(), 3);
    }
}
