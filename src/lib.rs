//! chili - Tile room editor core
//!
//! Slices a fixed-width tileset image into a palette, edits a fixed-size,
//! multi-layer grid of tile indices, persists the session to a key/value
//! store, and exports rooms as project JSON or C static arrays.

pub mod cli;
pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod output;
pub mod persist;
pub mod tileset;
pub mod types;

pub use codec::{DecodedProject, ProjectDocument};
pub use config::Config;
pub use editor::{Change, ClipboardSink, EditorSession, LayerStore, LoadTicket};
pub use error::{Result, RoomError};
pub use persist::{DirStore, KeyValueStore, MemoryStore, Persistence};
pub use tileset::{PaletteGeometry, TileRect, Tileset, REQUIRED_WIDTH, TILE_SIZE};
pub use types::{
    Colour, EditorState, Grid, Project, TileIndex, CELL_COUNT, EMPTY, LAYER_COUNT, MAP_H, MAP_W,
};
