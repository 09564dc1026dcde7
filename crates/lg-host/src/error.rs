use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    InvalidDimensions { width: i32, height: i32 },
    InvalidStride { stride: i32, width: i32 },
    BufferTooSmall { expected: usize, actual: usize },
    GradientMismatch { expected: (usize, usize), actual: (usize, usize) },
    Grid(lg_core::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid frame dimensions {width}x{height}")
            }
            Self::InvalidStride { stride, width } => {
                write!(f, "row stride {stride} is smaller than width {width}")
            }
            Self::BufferTooSmall { expected, actual } => {
                write!(f, "buffer too small: need {expected} bytes, got {actual}")
            }
            Self::GradientMismatch { expected, actual } => write!(
                f,
                "gradient source produced {}x{}, frame is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::Grid(err) => write!(f, "grid error: {err}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<lg_core::Error> for HostError {
    fn from(err: lg_core::Error) -> Self {
        Self::Grid(err)
    }
}
