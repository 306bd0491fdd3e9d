use thiserror::Error;

/// Errors returned by [`PackedBitArray`](crate::PackedBitArray) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitArrayError {
    /// A concrete bit position fell outside `[0, capacity)`.
    #[error("Bit position {position} out of range for capacity {capacity}")]
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// Capacity of the array that rejected it.
        capacity: usize,
    },

    /// A bit string contained a character other than `'0'` or `'1'`.
    #[error("Invalid bit digit {found:?} at index {index}")]
    InvalidDigit {
        /// Character index of the offending digit.
        index: usize,
        /// The offending character.
        found: char,
    },
}
