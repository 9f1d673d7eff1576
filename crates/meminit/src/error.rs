// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a hex image
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read hex image {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no `DATA` delimiter line found in {}", .path.display())]
    MissingDelimiter { path: PathBuf },

    #[error("failed to write Verilog output {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
