//! Cell and display editing commands.

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{Colour, TileIndex};

use super::open_session;

/// Paint a tile into a cell
#[derive(Args, Debug)]
pub struct PaintArgs {
    /// Cell column
    pub x: usize,

    /// Cell row
    pub y: usize,

    /// Palette index to paint
    #[arg(long, short)]
    pub tile: TileIndex,

    /// Layer to paint on
    #[arg(long, short, default_value = "0")]
    pub layer: usize,
}

/// Erase a cell
#[derive(Args, Debug)]
pub struct EraseArgs {
    /// Cell column
    pub x: usize,

    /// Cell row
    pub y: usize,

    /// Layer to erase from
    #[arg(long, short, default_value = "0")]
    pub layer: usize,
}

/// Clear a layer
#[derive(Args, Debug)]
pub struct ClearLayerArgs {
    /// Layer to clear
    pub layer: usize,
}

/// Set the background colour
#[derive(Args, Debug)]
pub struct BackgroundArgs {
    /// Colour as #RRGGBB or RRGGBB
    pub colour: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GridMode {
    On,
    Off,
}

/// Show or hide the grid overlay
#[derive(Args, Debug)]
pub struct GridArgs {
    #[arg(value_enum)]
    pub mode: GridMode,
}

pub fn paint(args: PaintArgs, config: &Config, printer: &Printer) -> Result<()> {
    let mut session = open_session(config);
    session.set_current_layer(args.layer)?;
    session.set_brush(args.tile)?;
    session.set_erase_mode(false);
    let change = session.paint(args.x, args.y)?;

    printer.change("Painted", &change, &format!("({}, {}) on layer {}", args.x, args.y, args.layer));
    Ok(())
}

pub fn erase(args: EraseArgs, config: &Config, printer: &Printer) -> Result<()> {
    let mut session = open_session(config);
    session.set_current_layer(args.layer)?;
    session.set_erase_mode(true);
    let change = session.paint(args.x, args.y)?;

    printer.change("Erased", &change, &format!("({}, {}) on layer {}", args.x, args.y, args.layer));
    Ok(())
}

pub fn clear_layer(args: ClearLayerArgs, config: &Config, printer: &Printer) -> Result<()> {
    let mut session = open_session(config);
    session.set_current_layer(args.layer)?;
    let change = session.clear_current_layer();

    printer.change("Cleared", &change, &format!("layer {}", args.layer));
    Ok(())
}

pub fn background(args: BackgroundArgs, config: &Config, printer: &Printer) -> Result<()> {
    let colour = Colour::from_hex(&args.colour)?;
    let mut session = open_session(config);
    let change = session.set_background(colour);

    printer.change("Background", &change, &colour.to_string());
    Ok(())
}

pub fn grid(args: GridArgs, config: &Config, printer: &Printer) -> Result<()> {
    let visible = args.mode == GridMode::On;
    let mut session = open_session(config);
    let change = session.set_grid_visible(visible);

    printer.change("Grid", &change, if visible { "visible" } else { "hidden" });
    Ok(())
}
