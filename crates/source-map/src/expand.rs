//! Expansion of compressed maps back into one explicit tuple per instruction.
//!
//! Maps written by other encoders delta-encode their entries. Each entry is
//! `start:length:depth:jump`, and a field can be in one of three states:
//!
//! | state | start / length / depth | jump |
//! |---|---|---|
//! | non-empty | literal integer | literal code |
//! | empty (`::`) | previous entry's value | previous entry's value |
//! | absent (entry ends early) | previous entry's value | no jump |
//!
//! A jump is never carried over from an entry that simply stops early; only an explicitly empty
//! fourth field inherits it. A single trailing `;` terminates the map rather than adding an entry.
//!
//! Fields are positional, so a three-field `start:length:o` entry (as written by the compressor for
//! a jump on a span) reads `o` as a depth and is rejected.

use crate::{
    error::{Malformed, Result, SourceMapError},
    record::{JumpKind, SourceRange},
};
use serde::{Deserialize, Serialize};

const MAX_FIELDS: usize = 4;
const NUMERIC_FIELDS: [&str; 3] = ["start", "length", "depth"];

/// One instruction's decoded entry. Serialized as `[start, length, depth, jump]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "EntryTuple", into = "EntryTuple")]
pub struct ExpandedEntry {
    pub start: Option<i64>,
    pub length: Option<i64>,
    pub depth: Option<i64>,
    pub jump: Option<String>,
}

type EntryTuple = (Option<i64>, Option<i64>, Option<i64>, Option<String>);

impl From<EntryTuple> for ExpandedEntry {
    fn from((start, length, depth, jump): EntryTuple) -> Self {
        Self { start, length, depth, jump }
    }
}

impl From<ExpandedEntry> for EntryTuple {
    fn from(entry: ExpandedEntry) -> Self {
        (entry.start, entry.length, entry.depth, entry.jump)
    }
}

impl ExpandedEntry {
    pub fn new(start: i64, length: i64, depth: i64, jump: Option<&str>) -> Self {
        Self {
            start: Some(start),
            length: Some(length),
            depth: Some(depth),
            jump: jump.map(str::to_owned),
        }
    }

    /// The byte range, or [`SourceRange::Unknown`] when start or length is missing, negative or too
    /// large.
    pub fn range(&self) -> SourceRange {
        let field = |value: Option<i64>| value.and_then(|v| u32::try_from(v).ok());
        match (field(self.start), field(self.length)) {
            (Some(start), Some(length)) => SourceRange::new(start, length),
            _ => SourceRange::Unknown,
        }
    }

    pub fn jump_kind(&self) -> Option<JumpKind> {
        self.jump.as_deref().and_then(JumpKind::from_code)
    }

    fn numeric_mut(&mut self, index: usize) -> &mut Option<i64> {
        match index {
            0 => &mut self.start,
            1 => &mut self.length,
            2 => &mut self.depth,
            _ => unreachable!("only three numeric fields"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field<'a> {
    Absent,
    Empty,
    Value(&'a str),
}

impl<'a> Field<'a> {
    fn at(fields: &[&'a str], index: usize) -> Self {
        match fields.get(index) {
            None => Field::Absent,
            Some(&"") => Field::Empty,
            Some(&text) => Field::Value(text),
        }
    }
}

/// Carries the previously decoded entry across `step` calls.
#[derive(Debug, Default)]
struct Expander {
    previous: ExpandedEntry,
    entries: Vec<ExpandedEntry>,
}

impl Expander {
    fn step(&mut self, index: usize, raw: &str) -> Result<()> {
        let fields: Vec<&str> = raw.split(':').collect();
        if fields.len() > MAX_FIELDS {
            return Err(SourceMapError::MalformedSourceMap {
                entry: index,
                reason: Malformed::TooManyFields { found: fields.len() },
            });
        }

        // Start from the previous entry so inheritance is the default for numeric fields.
        let mut entry = self.previous.clone();
        for (i, name) in NUMERIC_FIELDS.into_iter().enumerate() {
            if let Field::Value(text) = Field::at(&fields, i) {
                let value = text.parse::<i64>().map_err(|_| SourceMapError::MalformedSourceMap {
                    entry: index,
                    reason: Malformed::InvalidInteger { field: name, text: text.to_owned() },
                })?;
                *entry.numeric_mut(i) = Some(value);
            }
        }
        entry.jump = match Field::at(&fields, 3) {
            Field::Absent => None,
            Field::Empty => self.previous.jump.take(),
            Field::Value(code) => Some(code.to_owned()),
        };

        self.previous = entry.clone();
        self.entries.push(entry);
        Ok(())
    }
}

/// Decodes a compressed map into one entry per instruction.
pub fn expand_source_map(compressed: &str) -> Result<Vec<ExpandedEntry>> {
    let body = compressed.strip_suffix(';').unwrap_or(compressed);
    let mut expander = Expander::default();
    if !compressed.is_empty() {
        for (index, raw) in body.split(';').enumerate() {
            expander.step(index, raw)?;
        }
    }
    tracing::debug!(entries = expander.entries.len(), "expanded source map");
    Ok(expander.entries)
}
