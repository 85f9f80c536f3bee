//! 序列核心的错误类型。

use thiserror::Error;

/// Errors raised by the sequence core.
///
/// An anchor that is not found is not an error: the locators return an
/// empty window instead.
#[derive(Debug, Error)]
pub enum SeqError {
    #[error("unknown base '{}' at position {position}", char::from(*.base))]
    UnknownBase { base: u8, position: usize },

    #[error("sequence has no recognized bases")]
    EmptySequence,

    #[error("invalid anchor pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("formatting report: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("row {row}: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: Box<SeqError>,
    },
}

impl SeqError {
    pub(crate) fn in_row(self, row: usize) -> Self {
        SeqError::MalformedRow {
            row,
            source: Box::new(self),
        }
    }
}
