use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "mask-refine",
    version,
    about = "Refine background-removal masks with color-aware brush strokes"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints dimensions and alpha coverage of an image as JSON.
    Info { input: PathBuf },
    /// Applies a mask to an image and writes the cut-out without editing.
    Apply {
        #[arg(long)]
        original: PathBuf,
        #[arg(long)]
        mask: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Replays a stroke script over a masked image and writes the result.
    Edit {
        #[arg(long)]
        original: PathBuf,
        #[arg(long)]
        mask: PathBuf,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct RasterInfo {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) visible_pixels: usize,
    pub(super) transparent_pixels: usize,
    pub(super) source: String,
}
