//! Tileset commands.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::tileset::REQUIRED_WIDTH;

use super::{open_session, read_input};

/// Load a tileset image
#[derive(Args, Debug)]
pub struct TilesetArgs {
    /// Image file to slice into the palette
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: TilesetArgs, config: &Config, printer: &Printer) -> Result<()> {
    let display = display_path(&args.file);

    if args.file.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning("Warning", &format!("{} does not have a .png extension", display));
    }

    printer.info("Loading", &display);
    let bytes = read_input(&args.file)?;

    let mut session = open_session(config);
    session.load_tileset(bytes)?;

    if let Some(tileset) = session.tileset() {
        let geometry = tileset.geometry();
        printer.info(
            "Sliced",
            &format!(
                "{}x{} image into {} ({}x{} grid)",
                REQUIRED_WIDTH,
                tileset.height(),
                plural(tileset.tile_count(), "tile", "tiles"),
                geometry.columns,
                geometry.rows
            ),
        );

        let blank = tileset.blank_tiles();
        if blank > 0 {
            printer.info("Noted", &format!("{} fully transparent", plural(blank, "tile is", "tiles are")));
        }
    }

    Ok(())
}

pub fn clear(config: &Config, printer: &Printer) -> Result<()> {
    let mut session = open_session(config);
    let had_tileset = session.tileset().is_some();
    session.remove_tileset();

    if had_tileset {
        printer.success("Removed", "tileset and placed tiles");
    } else {
        printer.info("Cleared", "no tileset was loaded");
    }
    Ok(())
}
