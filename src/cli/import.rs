//! Import command implementation.
//!
//! Replaces the stored room with the layers of a project JSON file. The
//! currently loaded tileset is kept.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{Result, RoomError};
use crate::output::{display_path, Printer};

use super::{open_session, read_input};

/// Import a project JSON file
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Project file to import
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: ImportArgs, config: &Config, printer: &Printer) -> Result<()> {
    let display = display_path(&args.file);
    let bytes = read_input(&args.file)?;
    let text = String::from_utf8(bytes).map_err(|e| RoomError::MalformedDocument {
        message: e.to_string(),
    })?;

    let mut session = open_session(config);
    session.import_json(&text)?;

    printer.success("Imported", &display);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::temp_config;
    use crate::tileset::tests::png_bytes;
    use crate::types::EMPTY;

    #[test]
    fn test_import_keeps_tileset() {
        let (dir, config) = temp_config();
        open_session(&config).load_tileset(png_bytes(128, 8)).unwrap();

        let mut layer0 = vec![EMPTY; 256];
        layer0[0] = 3;
        layer0[1] = 40;
        let doc = serde_json::json!({
            "layers": [layer0, vec![EMPTY; 256]],
            "backgroundColor": "#010203",
        });
        let path = dir.path().join("room.json");
        std::fs::write(&path, doc.to_string()).unwrap();

        run(ImportArgs { file: path }, &config, &Printer::new()).unwrap();

        let session = open_session(&config);
        assert_eq!(session.tile_count(), 16);
        assert_eq!(session.layer(0).unwrap().get(0, 0), Some(3));
        assert_eq!(session.layer(0).unwrap().get(1, 0), Some(EMPTY));
        assert_eq!(session.background().to_string(), "#010203");
    }

    #[test]
    fn test_import_wrong_layer_count() {
        let (dir, config) = temp_config();
        let path = dir.path().join("room.json");
        std::fs::write(&path, r#"{"layers": [[0, 0, 0]]}"#).unwrap();

        let err = run(ImportArgs { file: path }, &config, &Printer::new()).unwrap_err();
        assert!(matches!(err, RoomError::LayerCountMismatch { found: 1, .. }));
    }
}
