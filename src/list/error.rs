use std::error::Error;
use std::fmt;

/// The error type for bounds-checked list operations.
///
/// There is a single error kind in this crate: an attempt to access,
/// advance past, or remove at the end position (the sentinel node), or to
/// read from an empty list. The variants record which boundary was hit so
/// callers and tests can tell the triggers apart.
///
/// # Examples
///
/// ```
/// use circular_list::{List, OutOfRangeError};
///
/// let list = List::<i32>::new();
/// assert_eq!(list.front(), Err(OutOfRangeError::EmptyList));
/// assert_eq!(
///     list.cursor_end().current(),
///     Err(OutOfRangeError::DereferenceEnd),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRangeError {
    /// Dereferencing a cursor at the end position.
    DereferenceEnd,
    /// Advancing a cursor that is already at the end position.
    AdvanceEnd,
    /// Reading or removing from an empty list.
    EmptyList,
    /// Removing at the end position of a non-empty list.
    EraseEnd,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            OutOfRangeError::DereferenceEnd => "cannot dereference the end position",
            OutOfRangeError::AdvanceEnd => "cannot advance past the end position",
            OutOfRangeError::EmptyList => "the list is empty",
            OutOfRangeError::EraseEnd => "cannot remove the end position",
        };
        f.write_str(message)
    }
}

impl Error for OutOfRangeError {}

#[cfg(test)]
mod tests {
    use super::OutOfRangeError;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            OutOfRangeError::DereferenceEnd.to_string(),
            "cannot dereference the end position"
        );
        assert_eq!(
            OutOfRangeError::AdvanceEnd.to_string(),
            "cannot advance past the end position"
        );
        assert_eq!(OutOfRangeError::EmptyList.to_string(), "the list is empty");
        assert_eq!(
            OutOfRangeError::EraseEnd.to_string(),
            "cannot remove the end position"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error>(_: E) {}
        assert_error(OutOfRangeError::EmptyList);
    }
}
