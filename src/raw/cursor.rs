use smallvec::SmallVec;

use super::node::Node;

/// Path element for tracking a lazy walk.
struct Frame<'a, T> {
    /// The node at this level.
    node: &'a Node<T>,
    /// Front: index of the next item to yield. Back: count of items not yet yielded.
    index: usize,
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}

/// Type alias for a path through the tree (stack of frames, root first).
type Path<'a, T> = SmallVec<[Frame<'a, T>; 16]>;

/// A double-ended in-order walk holding one root-to-leaf path per end.
pub(crate) struct Cursor<'a, T> {
    front: Path<'a, T>,
    back: Path<'a, T>,
    /// Items between the two ends; the ends never cross.
    remaining: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor over a tree holding `len` items.
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut cursor = Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            cursor.descend_front(root);
            cursor.descend_back(root);
        }
        cursor
    }

    /// Returns the number of items left to yield.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    fn descend_front(&mut self, mut node: &'a Node<T>) {
        loop {
            self.front.push(Frame { node, index: 0 });
            if node.is_leaf() {
                break;
            }
            node = node.child(0);
        }
    }

    fn descend_back(&mut self, mut node: &'a Node<T>) {
        loop {
            let index = node.item_count();
            self.back.push(Frame { node, index });
            if node.is_leaf() {
                break;
            }
            node = node.child(index);
        }
    }

    pub(crate) fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let frame = self.front.last_mut()?;
            let Frame { node, index } = *frame;
            if index < node.item_count() {
                frame.index += 1;
                if !node.is_leaf() {
                    self.descend_front(node.child(index + 1));
                }
                self.remaining -= 1;
                return Some(node.item(index));
            }
            self.front.pop();
        }
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let frame = self.back.last_mut()?;
            let Frame { node, index } = *frame;
            if index > 0 {
                frame.index -= 1;
                if !node.is_leaf() {
                    self.descend_back(node.child(index - 1));
                }
                self.remaining -= 1;
                return Some(node.item(index - 1));
            }
            self.back.pop();
        }
    }
}
