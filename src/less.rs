/// A strict ordering over `T`, supplied once when a tree is built.
///
/// Two items `a` and `b` are considered equal when neither `less(a, b)` nor
/// `less(b, a)` holds. Equal items replace one another on insertion.
///
/// The ordering must be irreflexive, transitive and deterministic. It is a logic
/// error for it to violate these rules, or for an item's ordering to change while
/// it is stored in a tree. The resulting behavior is not specified but is confined
/// to the affected tree: it may include panics, incorrect results or lost items,
/// never undefined behavior.
///
/// Any closure `Fn(&T, &T) -> bool` is an ordering:
///
/// ```
/// use ordtree::BTree;
///
/// let mut tree = BTree::with_comparator(2, |a: &i32, b: &i32| b < a).unwrap();
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub trait Less<T: ?Sized> {
    /// Returns `true` if `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The ordering given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Less<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
