//! The `source_map` compiler output consumed by debuggers and other external tooling.

use crate::{
    compress::compress_with,
    error::{Result, SourceMapError},
    record::{AstRef, InstructionRecord, JumpKind, SourceRange},
    sources::SourceRegistry,
};
use ctk_data::{IndexVec, Pc, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Line/column extent of a source range. Lines are 1-based, columns are 0-based byte offsets and
/// the end is exclusive. Serialized as `[start_line, start_col, end_line, end_col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32, u32, u32)", into = "(u32, u32, u32, u32)")]
pub struct LineSpan {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl From<(u32, u32, u32, u32)> for LineSpan {
    fn from((start_line, start_col, end_line, end_col): (u32, u32, u32, u32)) -> Self {
        Self { start_line, start_col, end_line, end_col }
    }
}

impl From<LineSpan> for (u32, u32, u32, u32) {
    fn from(span: LineSpan) -> Self {
        (span.start_line, span.start_col, span.end_line, span.end_col)
    }
}

/// Byte offset to line/column lookup for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts, len: source.len() }
    }

    /// `(line, column)` of `offset`, `None` past the end of the text.
    pub fn position(&self, offset: usize) -> Option<(u32, u32)> {
        if offset > self.len {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let col = offset - self.line_starts[line - 1];
        Some((u32::try_from(line).ok()?, u32::try_from(col).ok()?))
    }

    pub fn span(&self, start: usize, end: usize) -> Option<LineSpan> {
        let (start_line, start_col) = self.position(start)?;
        let (end_line, end_col) = self.position(end)?;
        Some(LineSpan { start_line, start_col, end_line, end_col })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapArtifact {
    pub pc_pos_map: BTreeMap<Pc, LineSpan>,
    pub pc_pos_map_compressed: String,
    pub pc_jump_map: BTreeMap<Pc, JumpKind>,
    pub error_map: BTreeMap<Pc, String>,
    pub pc_ast_map: BTreeMap<Pc, AstRef>,
    pub pc_ast_map_item_keys: (String, String),
}

impl SourceMapArtifact {
    /// Builds the artifact for `instruction_count` emitted instructions. A record's range points
    /// into the file of its AST reference, or into [`SourceRegistry::MAIN`] when it has none.
    pub fn build(
        records: &BTreeMap<Pc, InstructionRecord>,
        instruction_count: u32,
        sources: &SourceRegistry,
    ) -> Result<Self> {
        let lines: IndexVec<SourceId, LineIndex> =
            sources.iter().map(|file| LineIndex::new(&file.text)).collect();
        let mut pc_pos_map = BTreeMap::new();
        let mut pc_jump_map = BTreeMap::new();
        let mut error_map = BTreeMap::new();
        let mut pc_ast_map = BTreeMap::new();

        for (&pc, record) in records {
            if pc.get() >= instruction_count {
                return Err(SourceMapError::RecordOutOfRange { pc, instruction_count });
            }
            if let Some((start, end)) = byte_bounds(record.range) {
                let source_id = record.ast.map_or(SourceRegistry::MAIN, |ast| ast.source_id);
                let file_lines = lines
                    .get(source_id)
                    .ok_or(SourceMapError::UnknownSource { pc, source_id })?;
                let span = file_lines.span(start, end).ok_or(SourceMapError::RangeOutOfBounds {
                    pc,
                    range: record.range,
                    source_id,
                    source_len: file_lines.len,
                })?;
                pc_pos_map.insert(pc, span);
            }
            if let Some(jump) = record.jump {
                pc_jump_map.insert(pc, jump);
            }
            if let Some(reason) = &record.error {
                error_map.insert(pc, reason.clone());
            }
            if let Some(ast) = record.ast {
                pc_ast_map.insert(pc, ast);
            }
        }

        let pc_pos_map_compressed = compress_with(instruction_count, |pc| {
            records.get(&pc).map(|record| (record.range, record.jump))
        });

        let (source_key, node_key) = AstRef::ITEM_KEYS;
        Ok(Self {
            pc_pos_map,
            pc_pos_map_compressed,
            pc_jump_map,
            error_map,
            pc_ast_map,
            pc_ast_map_item_keys: (source_key.to_owned(), node_key.to_owned()),
        })
    }
}

fn byte_bounds(range: SourceRange) -> Option<(usize, usize)> {
    match range {
        SourceRange::Span { start, length } => {
            let start = start as usize;
            Some((start, start.saturating_add(length as usize)))
        }
        SourceRange::Unknown => None,
    }
}
