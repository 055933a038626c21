//! Show command implementation.
//!
//! Prints a summary of the stored room to stdout, with a small text preview
//! of each layer (`.` for empty cells, `#` for placed tiles).

use crate::config::Config;
use crate::editor::EditorSession;
use crate::error::Result;
use crate::output::plural;
use crate::persist::KeyValueStore;
use crate::types::{Grid, EMPTY, LAYER_COUNT};

use super::open_session;

pub fn run(config: &Config) -> Result<()> {
    let session = open_session(config);
    print!("{}", summary(&session));
    Ok(())
}

/// Build the summary text.
pub fn summary<S: KeyValueStore>(session: &EditorSession<S>) -> String {
    let mut out = String::new();

    match session.tileset() {
        Some(tileset) => {
            let g = tileset.geometry();
            out.push_str(&format!(
                "tileset: {}x{} ({}, {}x{})\n",
                tileset.width(),
                tileset.height(),
                plural(tileset.tile_count(), "tile", "tiles"),
                g.columns,
                g.rows
            ));
        }
        None => out.push_str("tileset: none\n"),
    }

    out.push_str(&format!("background: {}\n", session.background()));
    out.push_str(&format!(
        "grid: {}\n",
        if session.state().grid_visible { "on" } else { "off" }
    ));

    for index in 0..LAYER_COUNT {
        if let Some(grid) = session.layer(index) {
            out.push_str(&format!(
                "layer {}: {}\n",
                index,
                plural(grid.filled(), "tile", "tiles")
            ));
            out.push_str(&preview(grid));
        }
    }

    out
}

fn preview(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        out.push_str("  ");
        out.extend(row.iter().map(|&v| if v == EMPTY { '.' } else { '#' }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::temp_config;
    use crate::persist::MemoryStore;
    use crate::tileset::tests::png_bytes;
    use crate::types::MAP_H;

    #[test]
    fn test_summary_empty() {
        let session = EditorSession::open(MemoryStore::new());
        let text = summary(&session);
        assert!(text.starts_with("tileset: none\nbackground: #111111\ngrid: on\nlayer 0: 0 tiles\n"));
        assert_eq!(text.lines().count(), 3 + LAYER_COUNT * (1 + MAP_H));
    }

    #[test]
    fn test_summary_with_tiles() {
        let mut session = EditorSession::open(MemoryStore::new());
        session.load_tileset(png_bytes(128, 16)).unwrap();
        session.set_cell(0, 1, 0, 3).unwrap();

        let text = summary(&session);
        assert!(text.contains("tileset: 128x16 (32 tiles, 16x2)\n"));
        assert!(text.contains("layer 0: 1 tile\n  .#..............\n"));
    }

    #[test]
    fn test_run_with_empty_storage() {
        let (_dir, config) = temp_config();
        run(&config).unwrap();
    }
}
