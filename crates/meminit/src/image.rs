// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Loading of the textual hex image.

/// Line separating the instruction words from the data words.
pub const DATA_DELIMITER: &str = "DATA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Instruction,
    Data,
}

/// Hex words of one image, split at the delimiter.
///
/// Words are kept as the exact trimmed text of their line. Nothing checks that
/// they are valid hexadecimal digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexImage {
    pub instructions: Vec<String>,
    pub data: Vec<String>,
}

impl HexImage {
    /// Splits cleaned lines at the first delimiter. Any later delimiter lines
    /// are kept as ordinary data words.
    pub fn from_lines(mut lines: Vec<String>) -> Option<Self> {
        let split = find_delimiter(&lines)?;
        let data = lines.split_off(split + 1);
        lines.truncate(split);
        Some(Self {
            instructions: lines,
            data,
        })
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::from_lines(clean_lines(text))
    }

    pub fn segment(&self, kind: SegmentKind) -> &[String] {
        match kind {
            SegmentKind::Instruction => &self.instructions,
            SegmentKind::Data => &self.data,
        }
    }
}

/// Trims every line and drops the blank ones. `\n`, `\r\n` and a lone `\r`
/// all end a line.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn find_delimiter(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| line == DATA_DELIMITER)
}
