// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Statements making up a memory initialisation module, independent of how
//! they are printed.

use crate::image::{HexImage, SegmentKind};
use crate::layout::MemoryLayout;

pub const MODULE_NAME: &str = "memory_initialization";
pub const LOOP_COUNTER: &str = "i";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `memory[index] = 32'h<word>;`
    Assign {
        memory: String,
        index: usize,
        word: String,
    },
    /// Loop writing zero to every slot in `start..end`.
    ZeroFill {
        memory: String,
        counter: String,
        start: usize,
        end: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub title: String,
    pub statements: Vec<Statement>,
}

impl Region {
    pub fn assignments(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .filter(|stmt| matches!(stmt, Statement::Assign { .. }))
    }

    /// The zero-fill range of this region, if it has one.
    pub fn padding(&self) -> Option<(usize, usize)> {
        self.statements.iter().find_map(|stmt| match stmt {
            Statement::ZeroFill { start, end, .. } => Some((*start, *end)),
            Statement::Assign { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitModule {
    pub name: String,
    pub counter: String,
    pub regions: Vec<Region>,
}

impl InitModule {
    pub fn from_image(image: &HexImage, layout: &MemoryLayout) -> Self {
        let regions = [SegmentKind::Instruction, SegmentKind::Data]
            .into_iter()
            .map(|kind| Region {
                title: region_title(kind).to_string(),
                statements: lower_segment(
                    layout.memory_name(kind),
                    image.segment(kind),
                    layout.num_memory_slots,
                ),
            })
            .collect();

        Self {
            name: MODULE_NAME.to_string(),
            counter: LOOP_COUNTER.to_string(),
            regions,
        }
    }
}

fn region_title(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Instruction => "Instruction Memory Initialization",
        SegmentKind::Data => "Data Constant Memory Initialization",
    }
}

/// One assignment per word, followed by a zero fill up to `slots` when the
/// segment does not reach it.
pub fn lower_segment(memory: &str, words: &[String], slots: usize) -> Vec<Statement> {
    let mut statements: Vec<Statement> = words
        .iter()
        .enumerate()
        .map(|(index, word)| Statement::Assign {
            memory: memory.to_string(),
            index,
            word: word.clone(),
        })
        .collect();

    if words.len() < slots {
        statements.push(Statement::ZeroFill {
            memory: memory.to_string(),
            counter: LOOP_COUNTER.to_string(),
            start: words.len(),
            end: slots,
        });
    }

    statements
}
