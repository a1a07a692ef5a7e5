use crate::{
    artifact::SourceMapArtifact,
    error::{Result, SourceMapError},
    record::InstructionRecord,
    sources::SourceRegistry,
};
use ctk_data::Pc;
use std::collections::{BTreeMap, btree_map::Entry};

/// Collects one [`InstructionRecord`] per emitted instruction while code is being generated.
#[derive(Debug, Default, Clone)]
pub struct SourceMapRecorder {
    records: BTreeMap<Pc, InstructionRecord>,
}

impl SourceMapRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pc: Pc, record: InstructionRecord) -> Result<()> {
        match self.records.entry(pc) {
            Entry::Occupied(_) => Err(SourceMapError::DuplicateRecord { pc }),
            Entry::Vacant(slot) => {
                tracing::trace!(%pc, range = %record.range, "recorded instruction");
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending instruction order.
    pub fn iter(&self) -> impl Iterator<Item = (Pc, &InstructionRecord)> {
        self.records.iter().map(|(&pc, record)| (pc, record))
    }

    /// Closes recording once `instruction_count` instructions have been emitted and builds the
    /// artifact against the registered `sources`.
    pub fn finish(
        self,
        instruction_count: u32,
        sources: &SourceRegistry,
    ) -> Result<SourceMapArtifact> {
        let artifact = SourceMapArtifact::build(&self.records, instruction_count, sources)?;
        tracing::debug!(
            instruction_count,
            recorded = self.records.len(),
            jumps = artifact.pc_jump_map.len(),
            errors = artifact.error_map.len(),
            "finished source map"
        );
        Ok(artifact)
    }
}
