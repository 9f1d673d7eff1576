use std::path::PathBuf;

use clap::*;
use colored::Colorize;
use hex_to_verilog::convert::{execute, resolve_options, MemoryConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Converts a hex memory image into a Verilog module that preloads the instruction and data memories. The image lists instruction words, a `DATA` line, then data words",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// Hex image to read (default: instructions_data.hex)
    pub input: Option<PathBuf>,

    /// Verilog file to write (default: memory_initialization.v)
    pub output: Option<PathBuf>,

    /// TOML file with conversion options; flags take precedence
    #[clap(long = "config", short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the effective options as TOML and exit
    #[clap(long = "print-config")]
    pub print_config: bool,

    /// Display debug logging
    #[clap(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Memory layout options
    #[clap(flatten)]
    pub memory_config: MemoryConfig,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = resolve_options(
        args.config.as_deref(),
        args.input,
        args.output,
        args.memory_config,
    )?;

    if args.print_config {
        println!("{}", options.to_toml()?);
        return Ok(());
    }

    execute(&options)?;
    Ok(())
}

fn main() {
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let args = Args::parse();
    init_tracing(args.verbose);

    debug!("hex-to-verilog version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(args) {
        let err = format!("{:?}", err);
        eprintln!("{}", err.bold().red());
        std::process::exit(1);
    }
}
