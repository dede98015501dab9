//! Error types for result extraction.
//!
//! Two layers are kept apart: [`ResolveError`] describes why one calculation
//! record could not supply a value and is absorbed by the assembler, while
//! [`Error`] reports a caller mistake that aborts the whole request.

use crate::model::path::UnsupportedDepth;
use crate::model::series::Axis;
use thiserror::Error;

/// Why a single record failed to yield a value for a key path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A key along the path is absent, or the node holding it is not a mapping.
    #[error("key '{key}' not found at depth {depth}")]
    MissingKey {
        /// The key that could not be followed.
        key: String,
        /// 1-based position of the key within the path.
        depth: usize,
    },

    /// The path ends on a value that is not a number.
    #[error("value at key '{key}' is not numeric")]
    NotNumeric {
        /// Terminal key of the lookup.
        key: String,
    },

    /// The path has a depth other than 1, 3, or 5.
    #[error(transparent)]
    UnsupportedDepth(#[from] UnsupportedDepth),

    /// The calculation index cannot serve as an iteration number.
    #[error("calculation index '{0}' is not an integer")]
    InvalidIndex(String),
}

impl ResolveError {
    pub(crate) fn missing(key: &str, depth: usize) -> Self {
        Self::MissingKey {
            key: key.to_string(),
            depth,
        }
    }

    pub(crate) fn not_numeric(key: &str) -> Self {
        Self::NotNumeric {
            key: key.to_string(),
        }
    }
}

/// Request-level failures of series assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A requested key path can never resolve, whatever the data.
    #[error("{axis} series path '{path}' cannot be resolved: {source}")]
    UnsupportedPath {
        /// Axis group the path was requested for.
        axis: Axis,
        /// Textual form of the offending path.
        path: String,
        source: UnsupportedDepth,
    },

    /// Paths, legends, and enabled flags of a selection differ in length.
    #[error(
        "series selection is inconsistent: {paths} paths, {legends} legends, {flags} enabled flags"
    )]
    SelectionLength {
        paths: usize,
        legends: usize,
        flags: usize,
    },
}
