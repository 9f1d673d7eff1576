// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::image::SegmentKind;

/// Names and size of the two memories being initialised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryLayout {
    /// Array receiving the words before the delimiter.
    pub instruction_memory_name: String,
    /// Array receiving the words after the delimiter.
    pub data_memory_name: String,
    /// Slots of each memory that are zero filled when a segment is shorter.
    /// Longer segments are emitted in full.
    pub num_memory_slots: usize,
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            instruction_memory_name: "INSTR_MEM".to_string(),
            data_memory_name: "DATA_CONST_MEM".to_string(),
            num_memory_slots: 128,
        }
    }
}

impl MemoryLayout {
    pub fn memory_name(&self, kind: SegmentKind) -> &str {
        match kind {
            SegmentKind::Instruction => &self.instruction_memory_name,
            SegmentKind::Data => &self.data_memory_name,
        }
    }
}
