//! Instruction-to-source debug maps.
//!
//! Code generation pushes one [`InstructionRecord`] per emitted instruction into a
//! [`SourceMapRecorder`]. Finishing the recorder produces a [`SourceMapArtifact`], whose
//! `pc_pos_map_compressed` field uses the `;`-joined encoding implemented by
//! [`compress_source_map`] and read back by [`expand_source_map`].

mod artifact;
mod compress;
mod error;
mod expand;
mod record;
mod recorder;
mod sources;


pub use crate::{
    artifact::{LineIndex, LineSpan, SourceMapArtifact},
    compress::{compress_entries, compress_source_map},
    error::{Malformed, Result, SourceMapError},
    expand::{ExpandedEntry, expand_source_map},
    record::{AstRef, InstructionRecord, JumpKind, SourceRange, reasons},
    recorder::SourceMapRecorder,
    sources::{SourceFile, SourceRegistry},
};
