//! Tracking whether a value is newly inserted or was already present.
//!
//! Vertex insertion reports [`Seen::Old`] when a duplicate name collapses
//! onto an existing vertex.

/// An enum to track whether a value is newly discovered or previously seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen<T> {
    /// A value that is being encountered for the first time
    New(T),
    /// A value that has been seen before
    Old(T),
}

impl<T> Seen<T> {
    /// Extracts the inner value regardless of whether it's new or old.
    pub fn any(self) -> T {
        match self {
            Seen::New(x) => x,
            Seen::Old(x) => x,
        }
    }

    pub fn is_old(&self) -> bool {
        matches!(self, Seen::Old(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Seen;

    #[test]
    fn accessors() {
        assert_eq!(Seen::New(3).any(), 3);
        assert_eq!(Seen::Old(4).any(), 4);
        assert!(Seen::Old(()).is_old());
        assert!(!Seen::New(()).is_old());
    }
}
