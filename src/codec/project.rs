//! JSON project documents.
//!
//! Encoding is lossless: layer values are written exactly as stored. Decoding
//! validates the document shape into a fresh [`Project`] before anything is
//! applied, so a rejected document never touches the caller's state.
//!
//! ```json
//! {
//!   "version": 1,
//!   "mapWidth": 16,
//!   "mapHeight": 16,
//!   "layers": [[[-1, 3, ...], ...], [[...], ...]],
//!   "backgroundColor": "#111111",
//!   "gridVisible": true,
//!   "tilesetDataURL": "data:image/png;base64,..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RoomError};
use crate::types::{
    Colour, EditorState, Grid, Project, TileIndex, CELL_COUNT, EMPTY, LAYER_COUNT, MAP_H, MAP_W,
};

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

/// A project document as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub version: u32,
    pub map_width: usize,
    pub map_height: usize,

    /// One `MAP_H` x `MAP_W` array of rows per layer.
    pub layers: Vec<Vec<Vec<TileIndex>>>,

    pub background_color: Colour,
    pub grid_visible: bool,

    /// Embedded tileset image. Written for reference, ignored on import.
    #[serde(
        rename = "tilesetDataURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tileset_data_url: Option<String>,
}

impl ProjectDocument {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RoomError::Parse {
            message: format!("Failed to serialize project: {}", e),
            help: None,
        })
    }

    /// Convert to a JSON value for [`decode`].
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| RoomError::Parse {
            message: format!("Failed to serialize project: {}", e),
            help: None,
        })
    }
}

/// Encode a project and its display settings.
pub fn encode(
    project: &Project,
    state: &EditorState,
    tileset_data_url: Option<String>,
) -> ProjectDocument {
    let layers = project
        .layers()
        .iter()
        .map(|grid| grid.rows().map(<[TileIndex]>::to_vec).collect())
        .collect();

    ProjectDocument {
        version: DOCUMENT_VERSION,
        map_width: MAP_W,
        map_height: MAP_H,
        layers,
        background_color: state.background,
        grid_visible: state.grid_visible,
        tileset_data_url,
    }
}

/// Result of a successful decode.
///
/// Optional fields are `None` when absent or unusable; the caller keeps its
/// current value in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedProject {
    pub project: Project,
    pub background: Option<Colour>,
    pub grid_visible: Option<bool>,
}

impl DecodedProject {
    /// Apply the decoded display settings to an editor state.
    pub fn apply_settings(&self, state: &mut EditorState) {
        if let Some(background) = self.background {
            state.background = background;
        }
        if let Some(visible) = self.grid_visible {
            state.grid_visible = visible;
        }
    }
}

/// Decode JSON text into a project.
pub fn decode_str(text: &str) -> Result<DecodedProject> {
    let value: Value = serde_json::from_str(text).map_err(|e| RoomError::MalformedDocument {
        message: e.to_string(),
    })?;
    decode(&value)
}

/// Decode a JSON value into a project.
///
/// Checks run in order: the value is an object, `layers` is an array, it
/// holds exactly [`LAYER_COUNT`] entries, and each entry flattens to
/// [`CELL_COUNT`] cells.
pub fn decode(value: &Value) -> Result<DecodedProject> {
    let object = value.as_object().ok_or_else(|| RoomError::MalformedDocument {
        message: "expected a JSON object".to_string(),
    })?;

    let layers = parse_layers(object.get("layers"))?;

    let background = object
        .get("backgroundColor")
        .and_then(Value::as_str)
        .and_then(|s| Colour::from_hex(s).ok());

    let grid_visible = object.get("gridVisible").and_then(Value::as_bool);

    Ok(DecodedProject {
        project: Project::from_layers(layers),
        background,
        grid_visible,
    })
}

/// Validate and flatten a `layers` value.
pub(crate) fn parse_layers(layers: Option<&Value>) -> Result<[Grid; LAYER_COUNT]> {
    let layers = layers
        .and_then(Value::as_array)
        .ok_or(RoomError::MissingLayers)?;

    if layers.len() != LAYER_COUNT {
        return Err(RoomError::LayerCountMismatch {
            expected: LAYER_COUNT,
            found: layers.len(),
        });
    }

    let grids = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| parse_layer(index, layer))
        .collect::<Result<Vec<Grid>>>()?;

    grids
        .try_into()
        .map_err(|grids: Vec<Grid>| RoomError::LayerCountMismatch {
            expected: LAYER_COUNT,
            found: grids.len(),
        })
}

/// Flatten one layer (1D, or 2D rows) and check its size.
fn parse_layer(index: usize, layer: &Value) -> Result<Grid> {
    let size_mismatch = |found| RoomError::LayerSizeMismatch {
        layer: index,
        expected: CELL_COUNT,
        found,
    };

    let entries = layer.as_array().ok_or_else(|| size_mismatch(0))?;

    let is_2d = entries.first().is_some_and(Value::is_array);
    let cells: Vec<TileIndex> = if is_2d {
        entries
            .iter()
            .flat_map(|entry| match entry {
                Value::Array(row) => row.iter().map(cell_value).collect::<Vec<_>>(),
                other => vec![cell_value(other)],
            })
            .collect()
    } else {
        entries.iter().map(cell_value).collect()
    };

    let found = cells.len();
    Grid::from_cells(cells).ok_or_else(|| size_mismatch(found))
}

/// Read a cell; anything that is not an index in `[-1, i32::MAX]` is empty.
fn cell_value(value: &Value) -> TileIndex {
    value
        .as_i64()
        .filter(|&v| v >= EMPTY as i64)
        .and_then(|v| TileIndex::try_from(v).ok())
        .unwrap_or(EMPTY)
}
