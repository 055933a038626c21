//! Layered grid editing.
//!
//! [`LayerStore`] owns the project and editor state and applies every edit
//! command. Each command validates its input before mutating anything and
//! reports what happened as a [`Change`].

use log::debug;

use crate::error::{Result, RoomError};
use crate::types::{
    in_palette, Colour, EditorState, Grid, Project, TileIndex, EMPTY, LAYER_COUNT, MAP_H, MAP_W,
};

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Nothing was modified.
    Unchanged,
    Cell {
        layer: usize,
        x: usize,
        y: usize,
        value: TileIndex,
    },
    LayerCleared {
        layer: usize,
    },
    /// Layers were clamped to a new palette size.
    Reconciled {
        tile_count: usize,
        cleared: usize,
    },
    Brush(TileIndex),
    EraseMode(bool),
    CurrentLayer(usize),
    Background(Colour),
    GridVisible(bool),
    /// Every layer was replaced at once.
    ProjectReplaced,
    /// A tileset was loaded (`Some(tile_count)`) or removed (`None`).
    Tileset(Option<usize>),
}

impl Change {
    /// Whether this change alters persisted state.
    pub fn is_persisted(&self) -> bool {
        matches!(
            self,
            Change::Cell { .. }
                | Change::LayerCleared { .. }
                | Change::Reconciled { .. }
                | Change::Background(_)
                | Change::GridVisible(_)
                | Change::ProjectReplaced
                | Change::Tileset(_)
        )
    }
}

/// The layers plus brush, erase, layer selection and display state.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    project: Project,
    state: EditorState,
    tile_count: usize,
}

impl LayerStore {
    /// Create an empty store with no palette.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Size of the palette indices are validated against.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Write a value into a layer.
    ///
    /// `value` must be [`EMPTY`] or address a tile in the current palette.
    /// Writing the value a cell already holds is [`Change::Unchanged`].
    pub fn set_cell(&mut self, layer: usize, x: usize, y: usize, value: TileIndex) -> Result<Change> {
        check_layer(layer)?;
        if x >= MAP_W || y >= MAP_H {
            return Err(RoomError::CellOutOfBounds { x, y });
        }
        if value != EMPTY && !in_palette(value, self.tile_count) {
            return Err(RoomError::InvalidTileIndex {
                value,
                tile_count: self.tile_count,
            });
        }

        let grid = self.grid_mut(layer)?;
        if grid.get(x, y) == Some(value) {
            return Ok(Change::Unchanged);
        }
        grid.set(x, y, value);

        Ok(Change::Cell { layer, x, y, value })
    }

    /// Paint the current layer with the brush, or erase when erase mode is on.
    ///
    /// Painting with no brush selected does nothing.
    pub fn paint(&mut self, x: usize, y: usize) -> Result<Change> {
        let value = if self.state.erase_mode {
            EMPTY
        } else {
            self.state.brush
        };

        if !self.state.erase_mode && value == EMPTY {
            return Ok(Change::Unchanged);
        }

        self.set_cell(self.state.current_layer, x, y, value)
    }

    /// Select a palette index, or [`EMPTY`] for no brush.
    pub fn set_brush(&mut self, index: TileIndex) -> Result<Change> {
        if index != EMPTY && !in_palette(index, self.tile_count) {
            return Err(RoomError::InvalidTileIndex {
                value: index,
                tile_count: self.tile_count,
            });
        }
        if self.state.brush == index {
            return Ok(Change::Unchanged);
        }
        self.state.brush = index;
        Ok(Change::Brush(index))
    }

    pub fn set_erase_mode(&mut self, erase: bool) -> Change {
        if self.state.erase_mode == erase {
            return Change::Unchanged;
        }
        self.state.erase_mode = erase;
        Change::EraseMode(erase)
    }

    pub fn set_current_layer(&mut self, layer: usize) -> Result<Change> {
        check_layer(layer)?;
        if self.state.current_layer == layer {
            return Ok(Change::Unchanged);
        }
        self.state.current_layer = layer;
        Ok(Change::CurrentLayer(layer))
    }

    pub fn set_background(&mut self, colour: Colour) -> Change {
        if self.state.background == colour {
            return Change::Unchanged;
        }
        self.state.background = colour;
        Change::Background(colour)
    }

    pub fn set_grid_visible(&mut self, visible: bool) -> Change {
        if self.state.grid_visible == visible {
            return Change::Unchanged;
        }
        self.state.grid_visible = visible;
        Change::GridVisible(visible)
    }

    /// Reset the current layer to all [`EMPTY`]. Other layers are untouched.
    pub fn clear_current_layer(&mut self) -> Change {
        let layer = self.state.current_layer;
        if let Some(grid) = self.project.layer_mut(layer) {
            grid.clear();
        }
        debug!("cleared layer {}", layer);
        Change::LayerCleared { layer }
    }

    /// Adopt a new palette size, clearing every cell that no longer
    /// addresses a tile. Also drops a brush that fell out of range.
    pub fn reconcile_tileset_change(&mut self, tile_count: usize) -> Change {
        self.tile_count = tile_count;
        if !in_palette(self.state.brush, tile_count) {
            self.state.brush = EMPTY;
        }

        let cleared = self.project.clamp(tile_count);
        if cleared > 0 {
            debug!("cleared {} cells outside a palette of {}", cleared, tile_count);
        }
        Change::Reconciled {
            tile_count,
            cleared,
        }
    }

    /// Swap in a whole project, clamped to the current palette.
    pub fn replace_project(&mut self, project: Project) -> Change {
        self.project = project;
        self.project.clamp(self.tile_count);
        Change::ProjectReplaced
    }

    /// Mutable access to display settings for bulk updates such as import.
    pub(crate) fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    fn grid_mut(&mut self, layer: usize) -> Result<&mut Grid> {
        self.project
            .layer_mut(layer)
            .ok_or(RoomError::InvalidLayerIndex { index: layer })
    }
}

fn check_layer(layer: usize) -> Result<()> {
    if layer >= LAYER_COUNT {
        return Err(RoomError::InvalidLayerIndex { index: layer });
    }
    Ok(())
}
