use crate::record::SourceRange;
use ctk_data::{Pc, SourceId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceMapError {
    #[error("malformed source map entry {entry}: {reason}")]
    MalformedSourceMap { entry: usize, reason: Malformed },

    #[error("instruction {pc} recorded twice")]
    DuplicateRecord { pc: Pc },

    #[error("instruction {pc} recorded but only {instruction_count} instructions were emitted")]
    RecordOutOfRange { pc: Pc, instruction_count: u32 },

    #[error("instruction {pc} refers to source {source_id}, which was never registered")]
    UnknownSource { pc: Pc, source_id: SourceId },

    #[error(
        "instruction {pc} maps to {range} which lies outside the {source_len} byte source {source_id}"
    )]
    RangeOutOfBounds { pc: Pc, range: SourceRange, source_id: SourceId, source_len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("expected at most 4 fields, found {found}")]
    TooManyFields { found: usize },

    #[error("{field} field {text:?} is not an integer")]
    InvalidInteger { field: &'static str, text: String },
}

pub type Result<T> = std::result::Result<T, SourceMapError>;
