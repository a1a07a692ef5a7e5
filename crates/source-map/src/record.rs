//! Per-instruction debug records produced during code generation.

use ctk_data::{NodeId, SourceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of the source text an instruction was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceRange {
    /// The instruction has no associated source (e.g. compiler generated glue).
    #[default]
    Unknown,
    /// `start..start + length`
    Span { start: u32, length: u32 },
}

impl SourceRange {
    /// Rendering of [`SourceRange::Unknown`] in the compressed map.
    pub const UNKNOWN_ENTRY: &'static str = "-1:-1:-1";

    pub fn new(start: u32, length: u32) -> Self {
        SourceRange::Span { start, length }
    }

    pub fn is_known(self) -> bool {
        matches!(self, SourceRange::Span { .. })
    }

    /// Exclusive end offset.
    pub fn end(self) -> Option<u64> {
        match self {
            SourceRange::Unknown => None,
            SourceRange::Span { start, length } => Some(u64::from(start) + u64::from(length)),
        }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRange::Unknown => f.write_str(Self::UNKNOWN_ENTRY),
            SourceRange::Span { start, length } => write!(f, "{start}:{length}"),
        }
    }
}

/// Classification of a jump instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    /// Return-like transfer out of the current frame.
    #[serde(rename = "o")]
    Outgoing,
    /// Jump into an internally generated subroutine.
    #[serde(rename = "i")]
    Internal,
}

impl JumpKind {
    /// Inverse of [`JumpKind::code`]. Other codes found in foreign maps (e.g. `-`) yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "o" => Some(JumpKind::Outgoing),
            "i" => Some(JumpKind::Internal),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            JumpKind::Outgoing => "o",
            JumpKind::Internal => "i",
        }
    }
}

impl fmt::Display for JumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies the syntax node an instruction belongs to. Serialized as `[source_id, node_id]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(SourceId, NodeId)", into = "(SourceId, NodeId)")]
pub struct AstRef {
    pub source_id: SourceId,
    pub node_id: NodeId,
}

impl AstRef {
    /// Schema label for the serialized pair.
    pub const ITEM_KEYS: (&'static str, &'static str) = ("source_id", "node_id");

    pub fn new(source_id: SourceId, node_id: NodeId) -> Self {
        Self { source_id, node_id }
    }
}

impl From<(SourceId, NodeId)> for AstRef {
    fn from((source_id, node_id): (SourceId, NodeId)) -> Self {
        Self { source_id, node_id }
    }
}

impl From<AstRef> for (SourceId, NodeId) {
    fn from(ast: AstRef) -> Self {
        (ast.source_id, ast.node_id)
    }
}

/// Reason strings attached to instructions that can revert.
pub mod reasons {
    pub const SAFE_ADD: &str = "safeadd";
    pub const SAFE_SUB: &str = "safesub";
    pub const SAFE_MUL: &str = "safemul";
    pub const SAFE_DIV: &str = "safediv";
    pub const SAFE_MOD: &str = "safemod";
    pub const FALLBACK_FUNCTION: &str = "fallback function";
    pub const USER_REVERT: &str = "user revert with reason";
    pub const USER_ASSERT: &str = "user assert";
}

/// Everything known about one emitted instruction. Built once by the code generator and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstructionRecord {
    pub range: SourceRange,
    pub jump: Option<JumpKind>,
    pub error: Option<String>,
    pub ast: Option<AstRef>,
}

impl InstructionRecord {
    pub fn new(range: SourceRange) -> Self {
        Self { range, ..Default::default() }
    }

    pub fn with_jump(mut self, jump: JumpKind) -> Self {
        self.jump = Some(jump);
        self
    }

    pub fn with_error(mut self, reason: impl Into<String>) -> Self {
        self.error = Some(reason.into());
        self
    }

    pub fn with_ast(mut self, ast: AstRef) -> Self {
        self.ast = Some(ast);
        self
    }
}
