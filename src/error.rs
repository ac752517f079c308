use std::fmt;

/// Errors reported by [`List`](crate::List) and the insertion adapters.
///
/// Every variant is a caller error: it is reported at the call that broke a
/// precondition, and the container is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The list is empty, so there is no current element.
    Empty,
    /// The end sentinel was dereferenced, advanced, or used as a cursor
    /// target in a non-empty list.
    EndOfList,
    /// The node a [`Position`](crate::Position) referred to has been deleted.
    StalePosition,
    /// A positional insertion into an indexed container was past its end.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "no current element: the list is empty"),
            ListError::EndOfList => write!(f, "the end position has no element"),
            ListError::StalePosition => {
                write!(f, "the position refers to a node that has been deleted")
            }
            ListError::IndexOutOfBounds { index, len } => write!(
                f,
                "insertion index {} is out of bounds for a sequence of length {}",
                index, len
            ),
        }
    }
}

impl std::error::Error for ListError {}
