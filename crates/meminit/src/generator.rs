// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::image::HexImage;
use crate::ir::{InitModule, Region};
use crate::layout::MemoryLayout;
use crate::renderer::render_module;

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub instruction_words: usize,
    pub data_words: usize,
    pub instruction_padding: Option<(usize, usize)>,
    pub data_padding: Option<(usize, usize)>,
}

/// Render hex image text as a Verilog module. Returns `None` when the text has
/// no delimiter line.
pub fn generate(source: &str, layout: &MemoryLayout) -> Option<String> {
    let image = HexImage::parse(source)?;
    Some(render_module(&InitModule::from_image(&image, layout)))
}

/// Convert the hex image at `hex_file_path` and write the module to
/// `output_file_path`, replacing its contents.
///
/// The output file is only opened once the whole module has been rendered, so
/// an unreadable input or a missing delimiter leaves it untouched.
pub fn convert(
    hex_file_path: &Path,
    output_file_path: &Path,
    layout: &MemoryLayout,
) -> Result<ConversionSummary> {
    let source = fs::read_to_string(hex_file_path).map_err(|source| ConvertError::ReadInput {
        path: hex_file_path.to_path_buf(),
        source,
    })?;

    let image = HexImage::parse(&source).ok_or_else(|| ConvertError::MissingDelimiter {
        path: hex_file_path.to_path_buf(),
    })?;
    debug!(
        "{}: {} instruction words, {} data words",
        hex_file_path.display(),
        image.instructions.len(),
        image.data.len()
    );

    let module = InitModule::from_image(&image, layout);
    let summary = ConversionSummary {
        output_path: output_file_path.to_path_buf(),
        instruction_words: image.instructions.len(),
        data_words: image.data.len(),
        instruction_padding: module.regions.first().and_then(Region::padding),
        data_padding: module.regions.last().and_then(Region::padding),
    };
    debug!(
        "padding: {} {:?}, {} {:?}",
        layout.instruction_memory_name,
        summary.instruction_padding,
        layout.data_memory_name,
        summary.data_padding
    );

    fs::write(output_file_path, render_module(&module)).map_err(|source| {
        ConvertError::WriteOutput {
            path: output_file_path.to_path_buf(),
            source,
        }
    })?;
    info!("wrote {}", output_file_path.display());

    Ok(summary)
}
