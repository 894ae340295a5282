use std::fmt;

/// Errors surfaced by the fallible [`DynamicArray`](crate::DynamicArray) API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Backing storage could not be obtained, or the requested size overflows.
    AllocationFailure,

    /// An index outside `[0, len)` was used.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Logical length of the array at the time of the call.
        len: usize,
    },

    /// `pop` or `shift` was called on an array with no live elements.
    EmptyContainerAccess,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::AllocationFailure => write!(f, "Allocation failed"),
            ArrayError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of bounds: index {} but length is {}", index, len)
            }
            ArrayError::EmptyContainerAccess => write!(f, "Cannot remove from an empty array"),
        }
    }
}

impl std::error::Error for ArrayError {}
