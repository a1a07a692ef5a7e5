//! Cross-checking of `pc_ast_map` references against the syntax trees they point into.

use crate::NodeIdIndex;
use ctk_data::{IndexSlice, Pc, SourceId};
use ctk_source_map::AstRef;
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No syntax tree was supplied for the source id.
    UnknownSource,
    /// The tree exists but no node declares the id.
    UnknownNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedRef {
    pub pc: Pc,
    pub ast: AstRef,
    pub reason: UnresolvedReason,
}

impl fmt::Display for UnresolvedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let AstRef { source_id, node_id } = self.ast;
        match self.reason {
            UnresolvedReason::UnknownSource => {
                write!(f, "pc {}: source {source_id} has no syntax tree", self.pc)
            }
            UnresolvedReason::UnknownNode => {
                write!(f, "pc {}: node {node_id} not found in source {source_id}", self.pc)
            }
        }
    }
}

/// Outcome of [`validate_ast_map`]. Unresolved references are data, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AstMapReport {
    pub checked: usize,
    pub unresolved: Vec<UnresolvedRef>,
}

impl AstMapReport {
    pub fn is_valid(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl fmt::Display for AstMapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.checked - self.unresolved.len();
        writeln!(f, "{resolved}/{} ast references resolved", self.checked)?;
        for unresolved in &self.unresolved {
            writeln!(f, "  {unresolved}")?;
        }
        Ok(())
    }
}

/// Checks every entry of `pc_ast_map` against the index of the source it names. `indices` holds
/// one index per source id.
pub fn validate_ast_map(
    pc_ast_map: &BTreeMap<Pc, AstRef>,
    indices: &IndexSlice<SourceId, [NodeIdIndex<'_>]>,
) -> AstMapReport {
    let mut report = AstMapReport { checked: pc_ast_map.len(), unresolved: Vec::new() };
    for (&pc, &ast) in pc_ast_map {
        let reason = match indices.get(ast.source_id) {
            None => UnresolvedReason::UnknownSource,
            Some(index) if !index.contains(ast.node_id) => UnresolvedReason::UnknownNode,
            Some(_) => continue,
        };
        let unresolved = UnresolvedRef { pc, ast, reason };
        tracing::warn!(%unresolved, "unresolved ast reference");
        report.unresolved.push(unresolved);
    }
    report
}
