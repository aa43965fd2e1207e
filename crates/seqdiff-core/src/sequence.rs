//! Shared sequence handles.
//!
//! A [`Sequence`] is an immutable snapshot of elements behind an `Arc`.
//! Cloning a handle is cheap and keeps its identity; building a new one from
//! data always yields a fresh identity, even when the contents are equal.
//! [`Matcher`](crate::matcher::Matcher) relies on this to decide whether a
//! reassignment must drop its memoized alignment.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply cloned sequence of elements with handle identity.
pub struct Sequence<T> {
    items: Arc<[T]>,
}

impl<T> Sequence<T> {
    /// Wrap a vector as a new sequence handle.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Borrow the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// True when both handles were cloned from the same assignment.
    ///
    /// This is identity, not value equality: two sequences built separately
    /// from equal data are not the same handle.
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

/// Character-level view of a string, one element per `char`.
impl From<&str> for Sequence<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_identity() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let alias = seq.clone();
        assert!(seq.is_same(&alias));
    }

    #[test]
    fn test_equal_values_are_distinct_handles() {
        let first = Sequence::new(vec!["x", "y"]);
        let second = Sequence::new(vec!["x", "y"]);
        assert_eq!(first, second);
        assert!(!first.is_same(&second));
    }

    #[test]
    fn test_empty_sequences_are_distinct_handles() {
        let first: Sequence<u8> = Sequence::default();
        let second: Sequence<u8> = Sequence::default();
        assert!(!first.is_same(&second));
    }

    #[test]
    fn test_str_becomes_char_sequence() {
        let seq = Sequence::from("héllo");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq[1], 'é');
    }
}
