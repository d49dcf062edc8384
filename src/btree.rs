use core::fmt;

use crate::degree::Degree;
use crate::error::Result;
use crate::less::{Less, Natural};
use crate::raw::{RawBTree, Target};

mod iter;
mod traverse;

pub use iter::Iter;

/// An ordered set of unique items kept in a B-tree.
///
/// Items are placed by a comparator `C` chosen when the tree is built: [`Natural`]
/// for types implementing [`Ord`], or any closure `Fn(&T, &T) -> bool` returning
/// whether its first argument sorts before its second. Two items are the same
/// item when neither sorts before the other; inserting one replaces the other.
///
/// The degree `t` (see [`Degree`]) bounds every node other than the root to between
/// `t - 1` and `2t - 1` items. Lookups, insertions and removals visit `O(log_t n)`
/// nodes.
///
/// It is a logic error for the comparator to be inconsistent, or for an item to be
/// modified in a way that changes its position while it is in the tree. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `BTree` that observed it and not result in undefined
/// behavior. This could include panics, incorrect results and lost items.
///
/// # Cloning
///
/// [`Clone`] takes `O(1)` time: the clone shares every node with the original.
/// A later mutation of either tree copies just the nodes on the path it touches,
/// which is why mutating methods require `T: Clone`. Shared nodes are
/// reference-counted atomically, so clones may be sent to other threads.
///
/// # Examples
///
/// ```
/// use ordtree::BTree;
///
/// let mut tree = BTree::with_degree(2).unwrap();
/// for key in [5, 3, 8, 1, 4, 7, 2, 6] {
///     tree.replace_or_insert(key);
/// }
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7, 8]);
///
/// assert_eq!(tree.delete(&5), Some(5));
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.get(&5), None);
/// ```
///
/// Ordering by a field with a closure:
///
/// ```
/// use ordtree::BTree;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User { id: u32, name: &'static str }
///
/// let mut users = BTree::with_comparator(8, |a: &User, b: &User| a.id < b.id).unwrap();
/// users.replace_or_insert(User { id: 2, name: "bob" });
/// users.replace_or_insert(User { id: 1, name: "alice" });
///
/// let old = users.replace_or_insert(User { id: 2, name: "robert" });
/// assert_eq!(old.map(|u| u.name), Some("bob"));
/// assert_eq!(users.len(), 2);
/// ```
pub struct BTree<T, C = Natural> {
    raw: RawBTree<T, C>,
}

impl<T: Ord> BTree<T> {
    /// Creates an empty tree in [`Ord`] order with [`Degree::DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.replace_or_insert("b");
    /// tree.replace_or_insert("a");
    /// assert_eq!(tree.min(), Some(&"a"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_degree(Degree::DEFAULT, Natural)
    }

    /// Creates an empty tree in [`Ord`] order with the given degree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`](crate::Error::InvalidDegree) if `degree` is
    /// below [`Degree::MIN`], or [`Error::DegreeTooLarge`](crate::Error::DegreeTooLarge)
    /// if it is above [`Degree::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{BTree, Error};
    ///
    /// assert!(BTree::<u8>::with_degree(4).is_ok());
    /// assert_eq!(
    ///     BTree::<u8>::with_degree(1).err(),
    ///     Some(Error::InvalidDegree { degree: 1, min: 2 }),
    /// );
    /// ```
    pub fn with_degree(degree: usize) -> Result<Self> {
        Ok(Self::from_degree(Degree::new(degree)?, Natural))
    }
}

impl<T, C: Less<T>> BTree<T, C> {
    /// Creates an empty tree ordered by `less`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`](crate::Error::InvalidDegree) if `degree` is
    /// below [`Degree::MIN`], or [`Error::DegreeTooLarge`](crate::Error::DegreeTooLarge)
    /// if it is above [`Degree::MAX`].
    pub fn with_comparator(degree: usize, less: C) -> Result<Self> {
        Ok(Self::from_degree(Degree::new(degree)?, less))
    }

    /// Creates an empty tree from an already validated degree.
    #[must_use]
    pub fn from_degree(degree: Degree, less: C) -> Self {
        BTree {
            raw: RawBTree::new(degree, less),
        }
    }

    /// Returns the stored item equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.get(&2), Some(&2));
    /// assert_eq!(tree.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, key: &T) -> Option<&T> {
        self.raw.get(key)
    }

    /// Returns `true` if the tree holds an item equal to `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.raw.get(key).is_some()
    }
}

impl<T: Clone, C: Less<T>> BTree<T, C> {
    /// Adds `item`, replacing and returning an equal item if one was present.
    ///
    /// The length only grows when nothing was replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.replace_or_insert(37), None);
    /// assert_eq!(tree.replace_or_insert(37), Some(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn replace_or_insert(&mut self, item: T) -> Option<T> {
        self.raw.insert(item)
    }

    /// Removes and returns the item equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let mut tree: BTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete(&mut self, key: &T) -> Option<T> {
        self.raw.remove(Target::Item(key))
    }

    /// Removes and returns the first item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let mut tree: BTree<_> = [2, 1].into_iter().collect();
    /// assert_eq!(tree.delete_min(), Some(1));
    /// assert_eq!(tree.delete_min(), Some(2));
    /// assert_eq!(tree.delete_min(), None);
    /// ```
    pub fn delete_min(&mut self) -> Option<T> {
        self.raw.remove(Target::Min)
    }

    /// Removes and returns the last item, or `None` if the tree is empty.
    pub fn delete_max(&mut self) -> Option<T> {
        self.raw.remove(Target::Max)
    }
}

impl<T, C> BTree<T, C> {
    /// Returns the number of items in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Returns the degree the tree was built with.
    #[must_use]
    pub const fn degree(&self) -> Degree {
        self.raw.degree()
    }

    /// Returns the comparator.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.less()
    }

    /// Returns the number of levels in the tree, zero when empty.
    ///
    /// Every leaf sits at this depth.
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the first item in sort order.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the last item in sort order.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Removes every item.
    ///
    /// Nodes shared with a clone remain valid in that clone.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a double-ended iterator over the items in sort order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree: BTree<_> = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.root(), self.raw.len())
    }
}

impl<T, C: Clone> Clone for BTree<T, C> {
    /// Returns a copy-on-write snapshot in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let mut original: BTree<_> = (0..100).collect();
    /// let snapshot = original.clone();
    /// original.delete(&50);
    ///
    /// assert_eq!(original.len(), 99);
    /// assert_eq!(snapshot.len(), 100);
    /// assert!(snapshot.contains(&50));
    /// ```
    fn clone(&self) -> Self {
        BTree { raw: self.raw.clone() }
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone, C: Less<T>> Extend<T> for BTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.replace_or_insert(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Less<T>> Extend<&'a T> for BTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord + Clone> FromIterator<T> for BTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Clone, const N: usize> From<[T; N]> for BTree<T> {
    /// Builds a tree in [`Ord`] order; later duplicates replace earlier ones.
    ///
    /// ```
    /// use ordtree::BTree;
    ///
    /// let tree = BTree::from([3, 1, 2, 1]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a BTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
