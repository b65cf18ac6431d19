//! Structured buffer errors

use thiserror::Error;

/// Errors raised by [`Layout`](super::Layout) and
/// [`StructuredBuffer`](super::StructuredBuffer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Appended record does not match the layout size
    #[error("Invalid entry: {given} floats given, but {expected} floats needed")]
    InvalidEntryLayout {
        /// Floats supplied
        given: usize,
        /// Floats the layout requires
        expected: usize,
    },

    /// Append while every slot has been written since the last rewind
    #[error("Buffer overflow: capacity of {capacity} entries exhausted")]
    Overflow {
        /// Capacity in records
        capacity: usize,
    },

    /// Layout with no sub-ranges or a zero-width sub-range
    #[error("Invalid layout: {0:?}")]
    InvalidLayout(Vec<usize>),

    /// Total storage for the requested capacity does not fit in memory
    #[error("Buffer capacity of {capacity} entries of {byte_length} bytes is too large")]
    CapacityTooLarge {
        /// Requested capacity in records
        capacity: usize,
        /// Bytes per record
        byte_length: usize,
    },

    /// Buffer created with room for no records
    #[error("Buffer capacity must be greater than 0")]
    ZeroCapacity,
}

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;
