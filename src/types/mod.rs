//! Core domain types for the room editor.
//!
//! This module contains the fundamental types used throughout the editor:
//! - `Grid` - One layer of row-major tile indices
//! - `Project` - The fixed set of layers making up a room
//! - `EditorState` - Brush, layer selection and display settings
//! - `Colour` - The room background colour

mod colour;
mod grid;
mod project;

pub use colour::Colour;
pub use grid::{in_palette, Grid, TileIndex, CELL_COUNT, EMPTY, MAP_H, MAP_W};
pub use project::{EditorState, Project, LAYER_COUNT};
