//! Session persistence.
//!
//! Saves the tileset, layers, background colour and grid flag to a
//! [`KeyValueStore`] after every persisted mutation, and restores them at
//! startup. Save failures are logged and swallowed: the in-memory session
//! stays authoritative.

mod store;

pub use store::{DirStore, KeyValueStore, MemoryStore};

use log::{debug, warn};

use crate::codec::project::parse_layers;
use crate::error::{Result, RoomError};
use crate::tileset::Tileset;
use crate::types::{Colour, EditorState, Grid, Project, TileIndex, LAYER_COUNT};

/// Tileset image as a data URL.
pub const TILESET_KEY: &str = "chili_tileset_image";

/// Layers as a JSON array of flat cell arrays.
pub const LAYERS_KEY: &str = "chili_map_layers";

/// Background colour as `#rrggbb`.
pub const BACKGROUND_KEY: &str = "chili_map_bg_color";

/// Grid visibility as `1` or `0`.
pub const GRID_KEY: &str = "chili_show_grid";

/// Values read back from storage. Absent or unreadable keys are `None`.
#[derive(Debug, Default)]
pub struct Restored {
    pub tileset: Option<Tileset>,
    pub layers: Option<[Grid; LAYER_COUNT]>,
    pub background: Option<Colour>,
    pub grid_visible: Option<bool>,
}

/// Writes session state to a key/value store.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Save everything. Returns false if any write failed.
    pub fn save(&mut self, project: &Project, state: &EditorState, tileset: Option<&Tileset>) -> bool {
        match self.try_save(project, state, tileset) {
            Ok(()) => {
                debug!("saved session state");
                true
            }
            Err(e) => {
                warn!("failed to save session state: {}", e);
                false
            }
        }
    }

    fn try_save(&mut self, project: &Project, state: &EditorState, tileset: Option<&Tileset>) -> Result<()> {
        if let Some(tileset) = tileset {
            self.store.set(TILESET_KEY, &tileset.data_url())?;
        }

        let layers: Vec<&[TileIndex]> = project.layers().iter().map(Grid::cells).collect();
        let layers = serde_json::to_string(&layers).map_err(|e| RoomError::Storage {
            key: LAYERS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(LAYERS_KEY, &layers)?;

        self.store.set(BACKGROUND_KEY, &state.background.to_string())?;
        self.store
            .set(GRID_KEY, if state.grid_visible { "1" } else { "0" })?;

        Ok(())
    }

    /// Drop the stored tileset image. Returns false if the removal failed.
    pub fn forget_tileset(&mut self) -> bool {
        match self.store.remove(TILESET_KEY) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to remove stored tileset: {}", e);
                false
            }
        }
    }

    /// Read back whatever is stored.
    pub fn restore(&self) -> Restored {
        let grid_visible = self.read(GRID_KEY).map(|v| v == "1");

        let background = self.read(BACKGROUND_KEY).and_then(|v| {
            Colour::from_hex(&v)
                .map_err(|e| warn!("ignoring stored background: {}", e))
                .ok()
        });

        let layers = self.read(LAYERS_KEY).and_then(|v| {
            let value: serde_json::Value = serde_json::from_str(&v)
                .map_err(|e| warn!("ignoring stored layers: {}", e))
                .ok()?;
            parse_layers(Some(&value))
                .map_err(|e| warn!("ignoring stored layers: {}", e))
                .ok()
        });

        let tileset = self.read(TILESET_KEY).and_then(|v| {
            Tileset::from_data_url(&v)
                .map_err(|e| warn!("ignoring stored tileset: {}", e))
                .ok()
        });

        Restored {
            tileset,
            layers,
            background,
            grid_visible,
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store
            .get(key)
            .map_err(|e| warn!("failed to read {}: {}", key, e))
            .ok()
            .flatten()
    }
}
