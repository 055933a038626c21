//! Tileset slicing.
//!
//! A tileset is a single image exactly [`REQUIRED_WIDTH`] pixels wide and at
//! most that tall, cut into square tiles of [`TILE_SIZE`] pixels. Tiles are
//! numbered left to right, top to bottom.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::RgbaImage;
use serde::Serialize;

use crate::error::{Result, RoomError};
use crate::types::{in_palette, TileIndex};

/// Edge length of one tile in source pixels.
pub const TILE_SIZE: u32 = 8;

/// Required tileset width, and the maximum tileset height.
pub const REQUIRED_WIDTH: u32 = 128;

/// Palette layout derived from a tileset's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteGeometry {
    pub tile_size: u32,
    pub columns: u32,
    pub rows: u32,
}

/// A tile's source rectangle within the tileset image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PaletteGeometry {
    /// Number of addressable tiles.
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Source rectangle for a palette index, or `None` if it addresses no tile.
    pub fn source_rect(&self, index: TileIndex) -> Option<TileRect> {
        if !in_palette(index, self.tile_count()) {
            return None;
        }
        let index = index as u32;
        Some(TileRect {
            x: (index % self.columns) * self.tile_size,
            y: (index / self.columns) * self.tile_size,
            w: self.tile_size,
            h: self.tile_size,
        })
    }
}

/// Compute palette geometry for a tileset of the given pixel size.
pub fn slice(width: u32, height: u32) -> Result<PaletteGeometry> {
    slice_with_tile_size(width, height, TILE_SIZE)
}

fn slice_with_tile_size(width: u32, height: u32, tile_size: u32) -> Result<PaletteGeometry> {
    if width != REQUIRED_WIDTH || height > REQUIRED_WIDTH {
        return Err(RoomError::InvalidTilesetDimensions {
            width,
            height,
            required: REQUIRED_WIDTH,
        });
    }

    if tile_size == 0 || REQUIRED_WIDTH % tile_size != 0 {
        return Err(RoomError::TileSizeMismatch {
            tile_size,
            width: REQUIRED_WIDTH,
        });
    }

    Ok(PaletteGeometry {
        tile_size,
        columns: REQUIRED_WIDTH / tile_size,
        rows: height / tile_size,
    })
}

/// A decoded, validated tileset.
///
/// Keeps the original encoded bytes so the image can be persisted and
/// embedded in exports without re-encoding.
#[derive(Debug, Clone)]
pub struct Tileset {
    bytes: Vec<u8>,
    mime: &'static str,
    image: RgbaImage,
    geometry: PaletteGeometry,
}

impl Tileset {
    /// Decode raw image bytes and slice them into a palette.
    pub fn decode(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes).map_err(|e| RoomError::ImageDecode {
            message: e.to_string(),
        })?;

        let image = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| RoomError::ImageDecode {
                message: e.to_string(),
            })?
            .to_rgba8();

        let geometry = slice(image.width(), image.height())?;

        Ok(Self {
            bytes,
            mime: format.to_mime_type(),
            image,
            geometry,
        })
    }

    /// Decode a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let malformed = || RoomError::ImageDecode {
            message: "Not a base64 data URL".to_string(),
        };

        let rest = url.strip_prefix("data:").ok_or_else(malformed)?;
        let (header, payload) = rest.split_once(',').ok_or_else(malformed)?;
        if !header.ends_with(";base64") {
            return Err(malformed());
        }

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| RoomError::ImageDecode {
                message: format!("Invalid base64 payload: {}", e),
            })?;

        Self::decode(bytes)
    }

    /// Encode the original image bytes as a data URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    pub fn geometry(&self) -> PaletteGeometry {
        self.geometry
    }

    pub fn tile_count(&self) -> usize {
        self.geometry.tile_count()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Copy one tile out of the tileset.
    pub fn tile_image(&self, index: TileIndex) -> Option<RgbaImage> {
        let rect = self.geometry.source_rect(index)?;
        Some(image::imageops::crop_imm(&self.image, rect.x, rect.y, rect.w, rect.h).to_image())
    }

    /// Count tiles whose pixels are all fully transparent.
    pub fn blank_tiles(&self) -> usize {
        (0..self.tile_count() as TileIndex)
            .filter_map(|i| self.tile_image(i))
            .filter(is_fully_transparent)
            .count()
    }
}

/// Returns true if every pixel in the image has alpha == 0.
fn is_fully_transparent(img: &RgbaImage) -> bool {
    img.pixels().all(|p| p[3] == 0)
}
