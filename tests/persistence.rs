use pixelfield::codec::{self, FormatError};
use pixelfield::editor::{Command, EditorState, RunLength};
use pixelfield::grid::{Cell, PixelGrid};
use pixelfield::raster::{self, RasterOptions, UnsetFill};
use pixelfield::storage::StorageError;

fn painted_grid() -> PixelGrid {
    let mut state = EditorState::new(PixelGrid::new(5, 4).unwrap());
    for n in [3, 4, 2] {
        state.apply(Command::PlaceRun(RunLength::new(n).unwrap()));
    }
    state.grid().clone()
}

#[test]
fn test_saved_field_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.json");
    let grid = painted_grid();

    codec::save(&path, &grid).unwrap();
    assert_eq!(codec::load(&path).unwrap(), grid);
    // No temp file left beside the target
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_field_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.json");
    let mut grid = PixelGrid::new(2, 1).unwrap();
    grid.set(0, 0, Cell::Black).unwrap();
    codec::save(&path, &grid).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "width": 2, "height": 1, "pixels": [true, null] })
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = codec::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }), "{err}");
}

#[test]
fn test_load_malformed_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"width": 2, "height": 2, "pixels": [true, false, null]}"#).unwrap();

    match codec::load(&path) {
        Err(StorageError::Format { source, .. }) => assert_eq!(
            source,
            FormatError::SizeMismatch {
                expected: 4,
                found: 3
            }
        ),
        other => panic!("expected a format error, got {other:?}"),
    }
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.json");
    let original = painted_grid();
    codec::save(&path, &original).unwrap();

    let missing_dir = dir.path().join("gone").join("field.json");
    assert!(codec::save(&missing_dir, &PixelGrid::new(1, 1).unwrap()).is_err());
    assert!(!missing_dir.exists());
    assert_eq!(codec::load(&path).unwrap(), original);
}

#[test]
fn test_png_export_scales_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.png");
    let grid = painted_grid();

    raster::export_png(&path, &grid, RasterOptions::new(3, UnsetFill::Transparent)).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (15, 12));
    // First run painted black, second white
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(2, 2).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(3 * 3, 0).0, [255, 255, 255, 255]);
    // Bottom row was never painted
    assert_eq!(image.get_pixel(0, 11).0[3], 0);
}
