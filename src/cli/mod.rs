pub mod completions;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod show;
pub mod tileset;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::editor::EditorSession;
use crate::error::{Result, RoomError};
use crate::output::Printer;
use crate::persist::DirStore;

/// chili - Tile room editor
#[derive(Parser, Debug)]
#[command(name = "chili")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./chili.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default chili.yaml
    Init(init::InitArgs),

    /// Load a tileset image (128px wide, 8px tiles)
    Tileset(tileset::TilesetArgs),

    /// Remove the stored tileset and clear placed tiles
    ClearTileset,

    /// Paint a tile into a cell
    Paint(edit::PaintArgs),

    /// Erase a cell
    Erase(edit::EraseArgs),

    /// Clear every cell of one layer
    ClearLayer(edit::ClearLayerArgs),

    /// Set the room background colour
    Background(edit::BackgroundArgs),

    /// Show or hide the grid overlay
    Grid(edit::GridArgs),

    /// Replace the room from a project JSON file
    Import(import::ImportArgs),

    /// Export the room as project JSON or a C header
    Export(export::ExportArgs),

    /// Print a summary of the stored room
    Show,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Open the session stored under the configured storage directory.
pub fn open_session(config: &Config) -> EditorSession<DirStore> {
    EditorSession::open(DirStore::new(&config.storage))
}

/// Read a whole input file.
pub(crate) fn read_input(path: &std::path::Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| RoomError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Init(args) => init::run(args, printer),
        Commands::Tileset(args) => tileset::run(args, &config, printer),
        Commands::ClearTileset => tileset::clear(&config, printer),
        Commands::Paint(args) => edit::paint(args, &config, printer),
        Commands::Erase(args) => edit::erase(args, &config, printer),
        Commands::ClearLayer(args) => edit::clear_layer(args, &config, printer),
        Commands::Background(args) => edit::background(args, &config, printer),
        Commands::Grid(args) => edit::grid(args, &config, printer),
        Commands::Import(args) => import::run(args, &config, printer),
        Commands::Export(args) => export::run(args, &config, printer),
        Commands::Show => show::run(&config),
        Commands::Completions(args) => completions::run(args),
    }
}
