//! Positional index into the filtered view.

use std::fmt;

/// A position in the currently displayed employees.
///
/// Stored zero-based; user input and messages are one-based.
///
/// # Example
///
/// ```
/// use roster_engine::commands::Index;
///
/// let index = Index::from_one_based(2).unwrap();
/// assert_eq!(index.zero_based(), 1);
/// assert!(Index::from_one_based(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a zero-based position.
    pub fn from_zero_based(position: usize) -> Self {
        Self(position)
    }

    /// Creates an index from a one-based position; `None` for zero.
    pub fn from_one_based(position: usize) -> Option<Self> {
        position.checked_sub(1).map(Self)
    }

    /// Returns the zero-based position.
    pub fn zero_based(self) -> usize {
        self.0
    }

    /// Returns the one-based position.
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_round_trip() {
        let index = Index::from_one_based(5).unwrap();
        assert_eq!(index.one_based(), 5);
        assert_eq!(index, Index::from_zero_based(4));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Index::from_zero_based(0).to_string(), "1");
    }
}
