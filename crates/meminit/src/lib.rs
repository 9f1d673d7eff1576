// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Conversion of hex memory images into Verilog memory initialisation modules.
//!
//! The pipeline is linear: [`image`] loads and splits the hex text at the
//! `DATA` delimiter, [`ir`] lowers each segment into slot assignments and
//! zero-fill loops, [`renderer`] prints the module and [`generator`] ties the
//! steps to the filesystem.

pub mod error;
pub mod generator;
pub mod image;
pub mod ir;
pub mod layout;
pub mod renderer;
pub mod writer;

pub use error::{ConvertError, Result};
pub use generator::{convert, generate, ConversionSummary};
pub use image::{HexImage, SegmentKind, DATA_DELIMITER};
pub use layout::MemoryLayout;
