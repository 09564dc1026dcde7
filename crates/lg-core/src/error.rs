use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    InvalidStride,
    EmptyDimensions,
    InvalidKernel { side: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::EmptyDimensions => write!(f, "grid dimensions must be non-zero"),
            Self::InvalidKernel { side, len } => {
                write!(
                    f,
                    "invalid kernel: side {side} must be odd and non-zero with {} taps, got {len}",
                    side * side
                )
            }
        }
    }
}

impl std::error::Error for Error {}
