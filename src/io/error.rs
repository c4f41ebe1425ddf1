//! Error types for sequence generation, corpus loading and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sequence generation operations
#[derive(Debug)]
pub enum SequenceError {
    /// Requested digit sequence is empty, out of range, or has no glyph in the corpus
    InvalidDigitInput {
        /// Description of what's wrong with the digits
        reason: String,
    },

    /// Spacing range bounds are malformed
    InvalidSpacingRange {
        /// Lower bound supplied for every gap
        min_gap: usize,
        /// Upper bound supplied for every gap
        max_gap: usize,
        /// Explanation of why the range is rejected
        reason: String,
    },

    /// Requested width cannot be filled under the spacing constraints
    ///
    /// `min_width` and `max_width` describe the feasible interval so the
    /// caller can pick a valid width and try again.
    InfeasibleWidth {
        /// Quantity the bounds apply to, such as the image width or the gap space
        measure: &'static str,
        /// Width (or leftover space) that was requested
        requested: usize,
        /// Smallest width that satisfies the constraints
        min_width: usize,
        /// Largest width that satisfies the constraints
        max_width: usize,
    },

    /// Equidistant spacing requested but leftover space is not evenly divisible
    NonIntegerSplit {
        /// Leftover space to be split between the gaps
        available_space: usize,
        /// Number of gaps sharing the space
        gaps: usize,
    },

    /// Image and label files disagree on the number of entries
    CorpusMismatch {
        /// Entry count declared by the image file
        images: usize,
        /// Entry count declared by the label file
        labels: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Corpus data doesn't follow the IDX layout
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to save generated image to disk
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

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigitInput { reason } => {
                write!(f, "Invalid digit input: {reason}")
            }
            Self::InvalidSpacingRange {
                min_gap,
                max_gap,
                reason,
            } => {
                write!(f, "Invalid spacing range ({min_gap}, {max_gap}): {reason}")
            }
            Self::InfeasibleWidth {
                measure,
                requested,
                min_width,
                max_width,
            } => {
                write!(
                    f,
                    "{measure} {requested} cannot be filled by the spacing range; \
                     it must be within (min: {min_width}, max: {max_width})"
                )
            }
            Self::NonIntegerSplit {
                available_space,
                gaps,
            } => {
                write!(
                    f,
                    "No integer split of {available_space} pixels across {gaps} gaps"
                )
            }
            Self::CorpusMismatch { images, labels } => {
                write!(
                    f,
                    "Number of images does not match the number of labels \
                     (images: {images}, labels: {labels})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
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

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sequence generation results
pub type Result<T> = std::result::Result<T, SequenceError>;

impl From<image::ImageError> for SequenceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SequenceError {
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
) -> SequenceError {
    SequenceError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid digit input error
pub fn invalid_digits(reason: &impl ToString) -> SequenceError {
    SequenceError::InvalidDigitInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> SequenceError {
    SequenceError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
