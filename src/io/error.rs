//! Error types for chart generation, rendering, and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all chart operations
#[derive(Debug)]
pub enum ChartError {
    /// Requested design is not in the registry
    UnknownDesign {
        /// The name that failed lookup
        name: String,
    },

    /// Requested palette is not in the registry
    UnknownPalette {
        /// The name that failed lookup
        name: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Render geometry outside sane bounds
    InvalidDimensions {
        /// Requested cell size in pixels
        cell: u32,
        /// Requested gridline thickness in pixels
        gridline: u32,
        /// Explanation of the failing bound
        reason: &'static str,
    },

    /// Grid holds an index the supplied palette cannot cover
    PaletteBound {
        /// The out-of-range index
        index: usize,
        /// Number of colors available
        colors: usize,
    },

    /// Failed to encode or save a generated image
    ImageExport {
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

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDesign { name } => {
                write!(f, "Unknown design '{name}'")
            }
            Self::UnknownPalette { name } => {
                write!(f, "Unknown palette '{name}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidDimensions {
                cell,
                gridline,
                reason,
            } => {
                write!(
                    f,
                    "Invalid render dimensions (cell {cell}px, gridline {gridline}px): {reason}"
                )
            }
            Self::PaletteBound { index, colors } => {
                write!(
                    f,
                    "Grid index {index} exceeds the {colors} available palette colors"
                )
            }
            Self::ImageExport { path, source } => {
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

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<std::io::Error> for ChartError {
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
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ChartError {
    ChartError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_design_display() {
        let err = ChartError::UnknownDesign {
            name: "not_a_design".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown design 'not_a_design'");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("color_count", &9, &"must be between 3 and 7");
        match err {
            ChartError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "color_count");
                assert_eq!(value, "9");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
