// src/common.rs

use core::fmt;

/// Cause code handed to a [`Reporter`](crate::report::Reporter).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    InvalidInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Length is zero or has more than one bit set.
    NotPowerOfTwo,
    /// Length does not fit in the 32-bit index word.
    LengthOutOfRange,
    /// Input or output holds fewer than `length` samples.
    BufferTooSmall,
    /// In-place buffer length differs from the transform length.
    SizeMismatch,
}

impl FftError {
    /// Every failure is an invalid-input failure; the variant only says which
    /// precondition was violated.
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }

    pub const fn message(&self) -> &'static str {
        match self {
            FftError::NotPowerOfTwo => "Given array length is not a power of 2",
            FftError::LengthOutOfRange => "Given array length does not fit in a 32-bit index",
            FftError::BufferTooSmall => "Input or output buffer is shorter than the given length",
            FftError::SizeMismatch => "Data buffer size does not match FFT size",
        }
    }
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Out-of-place and in-place forward transform over a sample type `T`.
pub trait Transform<T> {
    fn transform(&self, input: &[T], output: &mut [T]) -> Result<(), FftError>;
    fn transform_in_place(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, FftError};

    #[test]
    fn every_error_is_invalid_input() {
        for err in [
            FftError::NotPowerOfTwo,
            FftError::LengthOutOfRange,
            FftError::BufferTooSmall,
            FftError::SizeMismatch,
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn display_matches_message() {
        let err = FftError::NotPowerOfTwo;
        assert_eq!(err.to_string(), "Given array length is not a power of 2");
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid input");
    }
}
