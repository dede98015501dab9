use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("the '{0}' format cannot be read as {1}")]
    UnsupportedFormat(Format, &'static str),

    #[error("failed to convert data model: {0}")]
    Conversion(String),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn conversion(details: impl Into<String>) -> Self {
        Self::Conversion(details.into())
    }
}
