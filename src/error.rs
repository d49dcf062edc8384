use thiserror::Error;

/// A specialized [`Result`](core::result::Result) type for tree construction.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced when configuring a [`BTree`](crate::BTree).
///
/// Lookups and removals never fail: a missing item is reported as `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested degree leaves no slack for merging nodes.
    #[error("invalid degree {degree}: must be at least {min}")]
    InvalidDegree {
        /// The degree that was requested.
        degree: usize,
        /// The smallest degree accepted.
        min: usize,
    },
    /// The requested degree would overflow a node's item bound.
    #[error("invalid degree {degree}: must be at most {max}")]
    DegreeTooLarge {
        /// The degree that was requested.
        degree: usize,
        /// The largest degree accepted.
        max: usize,
    },
}
