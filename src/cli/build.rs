//! Build command implementation.
//!
//! Composes every catalog asset and writes it as a PNG. Each run fully
//! regenerates every file; partially written output from an interrupted
//! run is simply overwritten next time.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::catalog;
use crate::error::{PxgenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::types::Palette;

/// Generate all sprite and tile assets
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory
    #[arg(long, short, default_value = "assets/sprites")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    fs::create_dir_all(&args.output).map_err(|e| PxgenError::Io {
        path: args.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let palette = Palette::game();

    let assets = catalog::all();
    for asset in assets {
        let canvas = asset.compose(&palette)?;
        let path = args.output.join(asset.filename());
        write_png(&canvas, &path, args.scale)?;
        printer.status(
            "Writing",
            &format!(
                "{} ({}x{})",
                display_path(&path),
                canvas.width(),
                canvas.height()
            ),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(assets.len(), "asset", "assets"),
            display_path(&args.output)
        ),
    );

    Ok(())
}
