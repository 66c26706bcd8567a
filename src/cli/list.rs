//! List command implementation.
//!
//! Prints the asset catalog: what the generator would build, without
//! touching the filesystem.

use clap::Args;
use serde::Serialize;

use crate::catalog;
use crate::error::Result;
use crate::output::Printer;
use crate::types::Palette;

/// List the assets the generator knows how to build
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the catalog as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    kind: catalog::AssetKind,
    file: String,
    width: u32,
    height: u32,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::game();

    let mut entries = Vec::new();
    for asset in catalog::all() {
        let canvas = asset.compose(&palette)?;
        entries.push(CatalogEntry {
            name: asset.name,
            kind: asset.kind,
            file: asset.filename(),
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries).expect("catalog serializes"));
        return Ok(());
    }

    for entry in &entries {
        printer.info(
            entry.kind.name(),
            &format!("{} ({}x{})", entry.name, entry.width, entry.height),
        );
    }

    Ok(())
}
