use anyhow::Context;
use clap::Args;
use meminit::{ConversionSummary, MemoryLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_INPUT_PATH: &str = "instructions_data.hex";
pub const DEFAULT_OUTPUT_PATH: &str = "memory_initialization.v";

/// Everything a conversion run needs. Loaded from a TOML file with `--config`
/// and overridden by command line flags.
///
/// NOTE: the structured `layout` table must stay the last field for TOML
/// printing to work. Check with `--print-config` after changing this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Hex image to read.
    pub input_path: PathBuf,
    /// Verilog file to (over)write.
    pub output_path: PathBuf,

    /// BEGIN OF STRUCTURED OPTIONS. DO NOT ADD VALUE FIELDS AFTER THIS
    pub layout: MemoryLayout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            layout: MemoryLayout::default(),
        }
    }
}

impl Options {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to print config")
    }
}

/// Memory layout options
#[derive(Args, Debug, Default, Clone)]
#[clap(next_help_heading = "Memory Options")]
pub struct MemoryConfig {
    /// Name of the instruction memory array (default: INSTR_MEM)
    #[clap(long = "instr-mem", value_name = "NAME")]
    pub instruction_memory_name: Option<String>,

    /// Name of the data memory array (default: DATA_CONST_MEM)
    #[clap(long = "data-mem", value_name = "NAME")]
    pub data_memory_name: Option<String>,

    /// Number of slots to initialise in each memory (default: 128)
    #[clap(long = "slots", short = 's', value_name = "N")]
    pub num_memory_slots: Option<usize>,
}

impl MemoryConfig {
    fn apply(self, layout: &mut MemoryLayout) {
        if let Some(name) = self.instruction_memory_name {
            layout.instruction_memory_name = name;
        }
        if let Some(name) = self.data_memory_name {
            layout.data_memory_name = name;
        }
        if let Some(slots) = self.num_memory_slots {
            layout.num_memory_slots = slots;
        }
    }
}

/// Defaults, then the config file, then whatever was given on the command line.
pub fn resolve_options(
    config_path: Option<&Path>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    memory_config: MemoryConfig,
) -> anyhow::Result<Options> {
    let mut options = match config_path {
        Some(path) => Options::from_file(path)?,
        None => Options::default(),
    };

    if let Some(path) = input_path {
        options.input_path = path;
    }
    if let Some(path) = output_path {
        options.output_path = path;
    }
    memory_config.apply(&mut options.layout);

    debug!("resolved options: {:?}", options);
    Ok(options)
}

pub fn execute(options: &Options) -> anyhow::Result<ConversionSummary> {
    let summary = meminit::convert(&options.input_path, &options.output_path, &options.layout)?;
    println!(
        "Verilog code successfully written to {}",
        summary.output_path.display()
    );
    Ok(summary)
}
