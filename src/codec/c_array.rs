//! C header output.
//!
//! Writes the room as `#define` size/colour macros and one
//! `static const int` array per layer. The text depends only on the project,
//! the background colour and the palette size, so identical state always
//! produces identical bytes.

use crate::types::{in_palette, EditorState, Project, EMPTY, LAYER_COUNT, MAP_H, MAP_W};

/// Base name for the per-layer arrays (`roomMap_L0`, `roomMap_L1`, ...).
pub const ARRAY_BASE_NAME: &str = "roomMap";

const HEADER_COMMENT: &str = "// Generated by Chili Room Editor";

/// Render the C header text.
///
/// Cells that do not address a tile in a palette of `tile_count` tiles are
/// written as `-1`, whatever the stored value.
pub fn render(project: &Project, state: &EditorState, tile_count: usize) -> String {
    let mut output = String::new();

    output.push_str(HEADER_COMMENT);
    output.push('\n');
    output.push_str(&format!("#define ROOM_W {}\n", MAP_W));
    output.push_str(&format!("#define ROOM_H {}\n", MAP_H));
    output.push_str(&format!("#define LAYER_COUNT {}\n", LAYER_COUNT));
    output.push_str(&format!(
        "#define ROOM_BG_COLOR {}\n",
        state.background.to_c_literal()
    ));

    for (index, grid) in project.layers().iter().enumerate() {
        output.push_str(&format!(
            "static const int {}[ROOM_W*ROOM_H] = {{\n",
            array_name(index)
        ));

        for (y, row) in grid.rows().enumerate() {
            let values: Vec<String> = row
                .iter()
                .map(|&v| if in_palette(v, tile_count) { v } else { EMPTY })
                .map(|v| v.to_string())
                .collect();

            output.push_str("  ");
            output.push_str(&values.join(", "));
            if y + 1 < MAP_H {
                output.push(',');
            }
            output.push('\n');
        }

        output.push_str("};\n");
    }

    let names: Vec<String> = (0..LAYER_COUNT)
        .map(|i| format!("layer {} stored in {}", i, array_name(i)))
        .collect();
    output.push_str(&format!("\n// Access macro: {}, etc.\n", names.join(", ")));

    output
}

/// Array name for a layer.
pub fn array_name(layer: usize) -> String {
    format!("{}_L{}", ARRAY_BASE_NAME, layer)
}
