//! The editable project and the editor state around it.

use super::colour::Colour;
use super::grid::{Grid, TileIndex, EMPTY};

/// Number of layers in every project.
pub const LAYER_COUNT: usize = 2;

/// All layers of a room. Layer 0 draws first, later layers draw on top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    layers: [Grid; LAYER_COUNT],
}

impl Project {
    /// Create a project with every layer empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project from exactly [`LAYER_COUNT`] grids.
    pub fn from_layers(layers: [Grid; LAYER_COUNT]) -> Self {
        Self { layers }
    }

    /// Get a layer by index.
    pub fn layer(&self, index: usize) -> Option<&Grid> {
        self.layers.get(index)
    }

    /// Get a mutable layer by index.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Grid> {
        self.layers.get_mut(index)
    }

    /// All layers in draw order.
    pub fn layers(&self) -> &[Grid; LAYER_COUNT] {
        &self.layers
    }

    /// Clamp every layer against `tile_count`. Returns the number of cells changed.
    pub fn clamp(&mut self, tile_count: usize) -> usize {
        self.layers.iter_mut().map(|l| l.clamp(tile_count)).sum()
    }
}

/// Editing state that is not part of the room structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Layer that edits apply to.
    pub current_layer: usize,

    /// Selected palette index, or [`EMPTY`] for no brush.
    pub brush: TileIndex,

    /// When set, painting writes [`EMPTY`] regardless of the brush.
    pub erase_mode: bool,

    /// Colour drawn behind all layers.
    pub background: Colour,

    /// Rendering hint for the cell grid overlay.
    pub grid_visible: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            current_layer: 0,
            brush: EMPTY,
            erase_mode: false,
            background: Colour::DEFAULT_BACKGROUND,
            grid_visible: true,
        }
    }
}
