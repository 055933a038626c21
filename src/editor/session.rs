//! The editor session.
//!
//! [`EditorSession`] owns everything one editor works on: the layers and
//! editor state, the loaded tileset, and the persistence backend. It is
//! restored from storage when opened and saves itself after every command
//! that changes persisted state. UI code observes it through
//! [`EditorSession::subscribe`] instead of reading shared globals.

use log::{debug, warn};
use serde_json::Value;

use crate::codec::{self, ProjectDocument};
use crate::error::{Result, RoomError};
use crate::persist::{KeyValueStore, Persistence};
use crate::tileset::{PaletteGeometry, TileRect, Tileset};
use crate::types::{Colour, EditorState, Grid, Project, TileIndex};

use super::store::{Change, LayerStore};

/// Destination for copied export text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Identifies one tileset load request. Only the most recent request may
/// complete; older ones are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

type Listener = Box<dyn FnMut(&Change)>;

/// One editing session over a storage namespace.
pub struct EditorSession<S: KeyValueStore> {
    store: LayerStore,
    tileset: Option<Tileset>,
    persistence: Persistence<S>,
    listeners: Vec<Listener>,
    latest_load: u64,
}

impl<S: KeyValueStore> EditorSession<S> {
    /// Open a session, restoring any state found in `storage`.
    ///
    /// Restored layers are clamped to the restored tileset; with no usable
    /// tileset every stored index is cleared.
    pub fn open(storage: S) -> Self {
        let persistence = Persistence::new(storage);
        let restored = persistence.restore();

        let mut store = LayerStore::new();
        let tile_count = restored.tileset.as_ref().map_or(0, Tileset::tile_count);
        store.reconcile_tileset_change(tile_count);

        if let Some(layers) = restored.layers {
            store.replace_project(Project::from_layers(layers));
        }
        if let Some(background) = restored.background {
            store.set_background(background);
        }
        if let Some(visible) = restored.grid_visible {
            store.set_grid_visible(visible);
        }

        debug!("opened session with {} tiles", tile_count);

        Self {
            store,
            tileset: restored.tileset,
            persistence,
            listeners: Vec::new(),
            latest_load: 0,
        }
    }

    /// Register a callback for every applied change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -- Read interface --

    pub fn project(&self) -> &Project {
        self.store.project()
    }

    pub fn state(&self) -> &EditorState {
        self.store.state()
    }

    pub fn layer(&self, index: usize) -> Option<&Grid> {
        self.store.project().layer(index)
    }

    pub fn background(&self) -> Colour {
        self.store.state().background
    }

    pub fn tileset(&self) -> Option<&Tileset> {
        self.tileset.as_ref()
    }

    pub fn geometry(&self) -> Option<PaletteGeometry> {
        self.tileset.as_ref().map(Tileset::geometry)
    }

    pub fn tile_count(&self) -> usize {
        self.store.tile_count()
    }

    /// Source rectangle of a palette tile in the tileset image.
    pub fn tile_rect(&self, index: TileIndex) -> Option<TileRect> {
        self.geometry()?.source_rect(index)
    }

    pub fn storage(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_storage(self) -> S {
        self.persistence.into_inner()
    }

    // -- Edit commands --

    pub fn set_cell(&mut self, layer: usize, x: usize, y: usize, value: TileIndex) -> Result<Change> {
        let change = self.store.set_cell(layer, x, y, value)?;
        Ok(self.commit(change))
    }

    pub fn paint(&mut self, x: usize, y: usize) -> Result<Change> {
        let change = self.store.paint(x, y)?;
        Ok(self.commit(change))
    }

    pub fn set_brush(&mut self, index: TileIndex) -> Result<Change> {
        let change = self.store.set_brush(index)?;
        Ok(self.commit(change))
    }

    pub fn set_erase_mode(&mut self, erase: bool) -> Change {
        let change = self.store.set_erase_mode(erase);
        self.commit(change)
    }

    pub fn set_current_layer(&mut self, layer: usize) -> Result<Change> {
        let change = self.store.set_current_layer(layer)?;
        Ok(self.commit(change))
    }

    pub fn clear_current_layer(&mut self) -> Change {
        let change = self.store.clear_current_layer();
        self.commit(change)
    }

    pub fn set_background(&mut self, colour: Colour) -> Change {
        let change = self.store.set_background(colour);
        self.commit(change)
    }

    pub fn set_grid_visible(&mut self, visible: bool) -> Change {
        let change = self.store.set_grid_visible(visible);
        self.commit(change)
    }

    // -- Tileset --

    /// Start a tileset load. Issuing a new ticket invalidates older ones.
    pub fn begin_tileset_load(&mut self) -> LoadTicket {
        self.latest_load += 1;
        LoadTicket(self.latest_load)
    }

    /// Finish a tileset load started with [`begin_tileset_load`].
    ///
    /// A superseded ticket is ignored and returns [`Change::Unchanged`].
    /// Invalid images fail without touching the session.
    ///
    /// [`begin_tileset_load`]: EditorSession::begin_tileset_load
    pub fn complete_tileset_load(&mut self, ticket: LoadTicket, bytes: Vec<u8>) -> Result<Change> {
        if ticket.0 != self.latest_load {
            warn!(
                "discarding stale tileset load {} (latest is {})",
                ticket.0, self.latest_load
            );
            return Ok(Change::Unchanged);
        }

        let tileset = Tileset::decode(bytes)?;
        let tile_count = tileset.tile_count();

        self.tileset = Some(tileset);
        self.store.reconcile_tileset_change(tile_count);
        Ok(self.commit(Change::Tileset(Some(tile_count))))
    }

    /// Decode and install a tileset.
    pub fn load_tileset(&mut self, bytes: Vec<u8>) -> Result<Change> {
        let ticket = self.begin_tileset_load();
        self.complete_tileset_load(ticket, bytes)
    }

    /// Remove the tileset. Every placed tile is cleared and the brush reset.
    pub fn remove_tileset(&mut self) -> Change {
        // Pending loads must not resurrect a removed tileset
        self.latest_load += 1;
        self.tileset = None;
        self.store.reconcile_tileset_change(0);
        self.persistence.forget_tileset();
        self.commit(Change::Tileset(None))
    }

    // -- Import / export --

    /// Replace the project from a decoded JSON document.
    ///
    /// The document is fully validated first; on error nothing changes. The
    /// embedded tileset, if any, is ignored.
    pub fn import_project(&mut self, document: &Value) -> Result<Change> {
        let decoded = codec::decode(document)?;
        decoded.apply_settings(self.store.state_mut());
        let change = self.store.replace_project(decoded.project);
        Ok(self.commit(change))
    }

    /// Replace the project from JSON text.
    pub fn import_json(&mut self, text: &str) -> Result<Change> {
        let value: Value = serde_json::from_str(text).map_err(|e| RoomError::MalformedDocument {
            message: e.to_string(),
        })?;
        self.import_project(&value)
    }

    /// Build the project document, embedding the tileset when one is loaded.
    pub fn export_document(&self) -> ProjectDocument {
        codec::encode(
            self.store.project(),
            self.store.state(),
            self.tileset.as_ref().map(Tileset::data_url),
        )
    }

    pub fn export_json(&self) -> Result<String> {
        self.export_document().to_json()
    }

    pub fn export_c_array(&self) -> String {
        codec::render_c_array(self.store.project(), self.store.state(), self.store.tile_count())
    }

    /// Copy the C header text to a clipboard.
    pub fn copy_c_array(&self, clipboard: Option<&mut dyn ClipboardSink>) -> Result<()> {
        let clipboard = clipboard.ok_or(RoomError::ClipboardUnavailable)?;
        clipboard.write_text(&self.export_c_array())
    }

    /// Persist if needed and notify listeners.
    fn commit(&mut self, change: Change) -> Change {
        if change == Change::Unchanged {
            return change;
        }

        if change.is_persisted() {
            self.persistence
                .save(self.store.project(), self.store.state(), self.tileset.as_ref());
        }

        for listener in &mut self.listeners {
            listener(&change);
        }

        change
    }
}
