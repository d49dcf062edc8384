use crate::error::{Error, Result};

/// The branching factor `t` of a [`BTree`](crate::BTree).
///
/// Every node other than the root holds between `t - 1` and `2t - 1` items, and
/// every internal node has one more child than it has items.
///
/// # Examples
///
/// ```
/// use ordtree::Degree;
///
/// let degree = Degree::new(3).unwrap();
/// assert_eq!(degree.min_items(), 2);
/// assert_eq!(degree.max_items(), 5);
///
/// assert!(Degree::new(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Degree(usize);

impl Degree {
    /// The smallest accepted degree.
    pub const MIN: usize = 2;

    /// The largest accepted degree; `2t - 1` items must stay countable.
    pub const MAX: usize = usize::MAX / 2;

    /// The degree used by [`BTree::new`](crate::BTree::new).
    pub const DEFAULT: Self = Self(32);

    /// Validates `degree`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if `degree` is below [`Degree::MIN`], or
    /// [`Error::DegreeTooLarge`] if it is above [`Degree::MAX`].
    pub const fn new(degree: usize) -> Result<Self> {
        if degree < Self::MIN {
            return Err(Error::InvalidDegree {
                degree,
                min: Self::MIN,
            });
        }
        if degree > Self::MAX {
            return Err(Error::DegreeTooLarge {
                degree,
                max: Self::MAX,
            });
        }
        Ok(Self(degree))
    }

    /// Returns the raw degree.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Most items a node may hold, `2t - 1`.
    #[must_use]
    pub const fn max_items(self) -> usize {
        self.0 * 2 - 1
    }

    /// Fewest items a non-root node may hold, `t - 1`.
    #[must_use]
    pub const fn min_items(self) -> usize {
        self.0 - 1
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Degree {
    type Error = Error;

    fn try_from(degree: usize) -> Result<Self> {
        Self::new(degree)
    }
}

impl From<Degree> for usize {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}
