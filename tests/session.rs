//! End-to-end session behaviour over a directory-backed store.

use std::io::Cursor;

use chili_room::codec;
use chili_room::persist::{BACKGROUND_KEY, GRID_KEY, LAYERS_KEY, TILESET_KEY};
use chili_room::{
    Change, Colour, DirStore, EditorSession, KeyValueStore, RoomError, EMPTY, LAYER_COUNT, MAP_H,
    MAP_W,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn tileset_png(height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(128, height, image::Rgba([10, 200, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

fn open(dir: &TempDir) -> EditorSession<DirStore> {
    EditorSession::open(DirStore::new(dir.path().join("state")))
}

#[test]
fn test_edit_reload_export() {
    let dir = TempDir::new().unwrap();

    {
        let mut session = open(&dir);
        session.load_tileset(tileset_png(64)).unwrap();
        session.set_brush(5).unwrap();
        session.paint(0, 0).unwrap();
        session.set_current_layer(1).unwrap();
        session.set_brush(127).unwrap();
        session.paint(MAP_W - 1, MAP_H - 1).unwrap();
        session.set_background(Colour::from_hex("#1a2b3c").unwrap());
    }

    let session = open(&dir);
    assert_eq!(session.tile_count(), 128);
    assert_eq!(session.layer(0).unwrap().get(0, 0), Some(5));
    assert_eq!(session.layer(1).unwrap().get(MAP_W - 1, MAP_H - 1), Some(127));

    // Brush, layer and erase selection are not persisted
    assert_eq!(session.state().brush, EMPTY);
    assert_eq!(session.state().current_layer, 0);

    let text = session.export_c_array();
    assert!(text.contains("#define ROOM_BG_COLOR 0x1A2B3C\n"));
    assert!(text.contains("static const int roomMap_L0[ROOM_W*ROOM_H] = {\n  5, -1,"));
    assert!(text.contains(", 127\n};\n\n// Access macro"));
    assert_eq!(text, open(&dir).export_c_array());
}

#[test]
fn test_stored_keys() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.load_tileset(tileset_png(8)).unwrap();
    session.set_grid_visible(false);

    let store = session.storage();
    assert!(store
        .get(TILESET_KEY)
        .unwrap()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(store.get(GRID_KEY).unwrap().as_deref(), Some("0"));
    assert_eq!(store.get(BACKGROUND_KEY).unwrap().as_deref(), Some("#111111"));

    let layers: Vec<Vec<i32>> =
        serde_json::from_str(&store.get(LAYERS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(layers.len(), LAYER_COUNT);
    assert!(layers.iter().all(|l| l.len() == MAP_W * MAP_H));
}

#[test]
fn test_json_round_trip_between_sessions() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();

    let mut source = open(&source_dir);
    source.load_tileset(tileset_png(128)).unwrap();
    for i in 0..MAP_W {
        source.set_cell(0, i, i, i as i32).unwrap();
        source.set_cell(1, MAP_W - 1 - i, i, 255 - i as i32).unwrap();
    }
    source.set_grid_visible(false);
    let json = source.export_json().unwrap();

    let mut target = open(&target_dir);
    target.load_tileset(tileset_png(128)).unwrap();
    assert_eq!(target.import_json(&json).unwrap(), Change::ProjectReplaced);
    assert_eq!(target.project(), source.project());
    assert!(!target.state().grid_visible);

    // And the import survived a reload
    assert_eq!(open(&target_dir).project(), source.project());

    let decoded = codec::decode_str(&json).unwrap();
    assert_eq!(&decoded.project, source.project());
}

#[test]
fn test_import_validation_order() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    let short: Vec<i32> = vec![0; 15];
    let err = session
        .import_project(&serde_json::json!({ "layers": [short] }))
        .unwrap_err();
    assert!(matches!(err, RoomError::LayerCountMismatch { .. }));

    let err = session
        .import_project(&serde_json::json!({ "layers": [vec![0; 256], short] }))
        .unwrap_err();
    assert!(matches!(err, RoomError::LayerSizeMismatch { layer: 1, .. }));
}

#[test]
fn test_removing_tileset_clears_tiles_across_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = open(&dir);
        session.load_tileset(tileset_png(16)).unwrap();
        session.set_cell(0, 1, 1, 3).unwrap();
        session.remove_tileset();
    }

    let session = open(&dir);
    assert!(session.tileset().is_none());
    assert!(session.layer(0).unwrap().is_empty());
}
