use miette::Diagnostic;
use thiserror::Error;

/// Main error type for room editor operations
#[derive(Error, Diagnostic, Debug)]
pub enum RoomError {
    #[error("Tileset must be {required} pixels wide and at most {required} tall, got {width}x{height}")]
    #[diagnostic(
        code(chili::tileset::dimensions),
        help("Export the tileset as a single fixed-width strip of 8px tiles")
    )]
    InvalidTilesetDimensions {
        width: u32,
        height: u32,
        required: u32,
    },

    #[error("Tile size {tile_size} does not evenly divide the tileset width {width}")]
    #[diagnostic(code(chili::tileset::tile_size))]
    TileSizeMismatch { tile_size: u32, width: u32 },

    #[error("Failed to decode tileset image: {message}")]
    #[diagnostic(code(chili::tileset::decode))]
    ImageDecode { message: String },

    #[error("Malformed project document: {message}")]
    #[diagnostic(code(chili::import::malformed))]
    MalformedDocument { message: String },

    #[error("Project document has no layers array")]
    #[diagnostic(code(chili::import::missing_layers))]
    MissingLayers,

    #[error("Project document has {found} layers, expected {expected}")]
    #[diagnostic(code(chili::import::layer_count))]
    LayerCountMismatch { expected: usize, found: usize },

    #[error("Layer {layer} has {found} cells, expected {expected}")]
    #[diagnostic(code(chili::import::layer_size))]
    LayerSizeMismatch {
        layer: usize,
        expected: usize,
        found: usize,
    },

    #[error("Layer index {index} is out of range")]
    #[diagnostic(code(chili::edit::layer))]
    InvalidLayerIndex { index: usize },

    #[error("Cell ({x}, {y}) is outside the room")]
    #[diagnostic(code(chili::edit::bounds))]
    CellOutOfBounds { x: usize, y: usize },

    #[error("Tile index {value} is not valid for a palette of {tile_count} tiles")]
    #[diagnostic(
        code(chili::edit::tile),
        help("Use -1 for an empty cell or load a tileset with more tiles")
    )]
    InvalidTileIndex { value: i32, tile_count: usize },

    #[error("No clipboard is available")]
    #[diagnostic(code(chili::export::clipboard), help("Write the export to a file instead"))]
    ClipboardUnavailable,

    #[error("Storage error for key '{key}': {message}")]
    #[diagnostic(code(chili::storage))]
    Storage { key: String, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(chili::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(chili::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RoomError>;
