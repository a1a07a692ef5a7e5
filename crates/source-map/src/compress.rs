//! Serialization of per-instruction positions into the compressed map string.
//!
//! Every instruction slot `0..instruction_count` gets one `;`-separated entry. Entries are always
//! fully explicit: `start:length`, the `-1:-1:-1` sentinel for slots without a position, and a
//! trailing `:o`/`:i` when the instruction is a classified jump. Positions recorded at or beyond
//! `instruction_count` are not part of the emitted code and are left out.

use crate::{
    expand::ExpandedEntry,
    record::{JumpKind, SourceRange},
};
use ctk_data::Pc;
use std::{collections::BTreeMap, fmt::Write};

pub fn compress_source_map(
    positions: &BTreeMap<Pc, SourceRange>,
    jumps: &BTreeMap<Pc, JumpKind>,
    instruction_count: u32,
) -> String {
    let compressed = compress_with(instruction_count, |pc| {
        positions.get(&pc).map(|&range| (range, jumps.get(&pc).copied()))
    });
    tracing::debug!(instruction_count, bytes = compressed.len(), "compressed source map");
    compressed
}

/// Re-encodes decoded entries in the fully explicit form. Depth is not part of the explicit form
/// and is dropped along with jump codes other than `o` and `i`.
pub fn compress_entries(entries: &[ExpandedEntry]) -> String {
    let instruction_count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    compress_with(instruction_count, |pc| {
        entries.get(pc.get() as usize).map(|entry| (entry.range(), entry.jump_kind()))
    })
}

/// `lookup` yields the recorded range and jump for a slot, `None` for unrecorded slots.
pub(crate) fn compress_with(
    instruction_count: u32,
    lookup: impl Fn(Pc) -> Option<(SourceRange, Option<JumpKind>)>,
) -> String {
    let mut out = String::with_capacity(instruction_count as usize * 8);
    for i in 0..instruction_count {
        if i > 0 {
            out.push(';');
        }
        match lookup(Pc::new(i)) {
            None => out.push_str(SourceRange::UNKNOWN_ENTRY),
            Some((range, jump)) => {
                write!(out, "{range}").expect("writing to a String cannot fail");
                if let Some(jump) = jump {
                    write!(out, ":{jump}").expect("writing to a String cannot fail");
                }
            }
        }
    }
    out
}
