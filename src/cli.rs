//! Command-line driver glue for pack binaries.
//! A pack is an ordinary Rust binary that hands its description callback to
//! [`run`]; this module supplies argument parsing, pack-root discovery,
//! config loading and the single build invocation.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;

use crate::builder::{build, Builder};
use crate::config::load_config;
use crate::constants::PACK_META_FILE;
use crate::error::{default_error_handler, Error, Result};
use crate::logger::init_logger;

/// Command-line arguments for a packsmith binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "packsmith: declarative Minecraft datapack authoring", long_about = None)]
pub struct Args {
    /// Pack directory (defaults to the current directory)
    #[arg(value_name = "PACK_DIR")]
    pub pack_dir: Option<PathBuf>,

    /// Output root for the generated tree (defaults to the pack root)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Locates the pack root from a starting directory.
///
/// Accepts either the pack root itself (containing `pack.mcmeta`) or a
/// direct subdirectory of it, such as `src/`.
///
/// # Errors
/// * `Error::ConfigError` if no `pack.mcmeta` is found
pub fn find_pack_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();
    if start.join(PACK_META_FILE).is_file() {
        return Ok(start.to_path_buf());
    }
    if let Some(parent) = start.parent() {
        if parent.join(PACK_META_FILE).is_file() {
            return Ok(parent.to_path_buf());
        }
    }
    Err(Error::ConfigError(format!(
        "No {} found in {} or its parent; run from the pack root or pass a pack directory",
        PACK_META_FILE,
        start.display()
    )))
}

/// Runs one build for the given arguments: discovers the pack root, loads
/// its configuration and invokes `callback` with a fresh builder.
///
/// Re-entrant: an external watch loop may call this again after a source
/// change, each invocation gets isolated counters.
pub fn run_with_args<F>(args: &Args, callback: F) -> Result<()>
where
    F: FnOnce(&mut Builder) -> Result<()>,
{
    let start = match &args.pack_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let pack_root = find_pack_root(&start)?;
    let config = load_config(&pack_root)?;
    let output_root = args.output.clone().unwrap_or_else(|| pack_root.clone());
    debug!("Building pack {} into {}", pack_root.display(), output_root.display());
    build(output_root, &config, callback)
}

/// Main entry point for a pack binary.
///
/// Parses arguments, configures logging, runs the build once and reports
/// any failure through the default error handler.
pub fn run<F>(callback: F)
where
    F: FnOnce(&mut Builder) -> Result<()>,
{
    let args = get_args();
    init_logger(args.verbose);
    if let Err(err) = run_with_args(&args, callback) {
        default_error_handler(err);
    }
}
