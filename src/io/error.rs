//! Error types for canvas construction, synthesis passes, and image export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Colour arity disagrees with the canvas channel count on a write
    ChannelMismatch {
        /// Channel count of the canvas being written
        expected: usize,
        /// Channel count of the supplied colour
        actual: usize,
    },

    /// Canvas dimensions are unusable
    InvalidDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
        /// Requested channel count
        channels: usize,
        /// Explanation of why the dimensions are invalid
        reason: &'static str,
    },

    /// Explicit-coordinate access outside the canvas bounds
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Canvas height
        rows: usize,
        /// Canvas width
        cols: usize,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Malformed palette, seed, or metric configuration
    Config {
        /// Description of what is wrong with the configuration
        reason: String,
    },

    /// Failed to save a rendered canvas to disk
    Export {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelMismatch { expected, actual } => {
                write!(
                    f,
                    "Colour has {actual} channel(s) but the canvas expects {expected}"
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                channels,
                reason,
            } => {
                write!(
                    f,
                    "Invalid canvas dimensions {width}x{height} with {channels} channel(s): {reason}"
                )
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Pixel ({row}, {col}) is outside the {rows}x{cols} canvas"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Config { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::Export { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<image::ImageError> for SynthesisError {
    fn from(err: image::ImageError) -> Self {
        Self::Export {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> SynthesisError {
    SynthesisError::Config {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_channel_mismatch() {
        let err = SynthesisError::ChannelMismatch {
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Colour has 1 channel(s) but the canvas expects 3"
        );
    }

    #[test]
    fn test_export_error_exposes_source() {
        use std::error::Error;

        let io_err = std::io::Error::other("disk full");
        let err = SynthesisError::FileSystem {
            path: PathBuf::from("/tmp/out.png"),
            operation: "create directory",
            source: io_err,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("scale", &0, &"must be at least 1");
        match err {
            SynthesisError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "scale");
                assert_eq!(value, "0");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }
}
