use alloc::sync::Arc;
use core::ops::Deref;

use super::node::Node;

/// An owning link to a child node that may also be reachable from a cloned tree.
///
/// Reads go straight through [`Deref`]. Every mutation must enter through
/// [`SharedNode::make_mut`], which copies the node (but not its subtree) when
/// another tree still holds it.
#[repr(transparent)]
pub(crate) struct SharedNode<T>(Arc<Node<T>>);

impl<T> SharedNode<T> {
    #[inline]
    pub(crate) fn new(node: Node<T>) -> Self {
        Self(Arc::new(node))
    }

    /// Returns true if another tree also references this node.
    #[cfg(test)]
    pub(crate) fn is_shared(&self) -> bool {
        Arc::strong_count(&self.0) > 1
    }

    /// Returns true if both links point at the same allocation.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> SharedNode<T> {
    /// Returns exclusive access to the node, copying it first if it is shared.
    ///
    /// The copy clones the items and bumps the refcount of each child, so only
    /// the nodes along a mutating path are ever duplicated.
    #[inline]
    pub(crate) fn make_mut(&mut self) -> &mut Node<T> {
        Arc::make_mut(&mut self.0)
    }

    /// Unwraps the node, copying it if another tree still references it.
    #[inline]
    pub(crate) fn into_node(self) -> Node<T> {
        Arc::unwrap_or_clone(self.0)
    }
}

impl<T> Clone for SharedNode<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for SharedNode<T> {
    type Target = Node<T>;

    #[inline]
    fn deref(&self) -> &Node<T> {
        &self.0
    }
}
