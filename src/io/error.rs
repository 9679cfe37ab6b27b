//! Error types for generation, encoding, and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Drawing surface could not be allocated for the requested dimensions
    ///
    /// Fatal for the single generation call that hit it; other calls in a
    /// batch are unaffected.
    ContextAcquisition {
        /// Requested canvas width in pixels
        width: u32,
        /// Requested canvas height in pixels
        height: u32,
    },

    /// Raster could not be serialized to the output payload format
    Encoding {
        /// Target format ("png" or "jpeg")
        format: &'static str,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Encoder completed without producing any payload bytes
    EmptyPayload {
        /// Target format ("png" or "jpeg")
        format: &'static str,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color literal is not a valid `#RRGGBB` string
    InvalidColor {
        /// The offending color string
        value: String,
        /// Explanation of the malformation
        reason: &'static str,
    },

    /// File system operation failure during export
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContextAcquisition { width, height } => {
                write!(f, "Failed to acquire a {width}x{height} drawing surface")
            }
            Self::Encoding { format, source } => {
                write!(f, "Failed to encode raster as {format}: {source}")
            }
            Self::EmptyPayload { format } => {
                write!(f, "Encoder produced no {format} payload bytes")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color literal '{value}': {reason}")
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

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
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
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an encoding error for the given payload format
pub const fn encoding_error(format: &'static str, source: image::ImageError) -> GenerationError {
    GenerationError::Encoding { format, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_context_acquisition() {
        let err = GenerationError::ContextAcquisition {
            width: 4500,
            height: 3000,
        };
        assert_eq!(
            err.to_string(),
            "Failed to acquire a 4500x3000 drawing surface"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("shape_count_min", &9, &"must not exceed shape_count_max");
        match err {
            GenerationError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "shape_count_min");
                assert_eq!(value, "9");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
