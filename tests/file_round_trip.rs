use image::Rgba;
use raster_paint::canvas::Canvas;
use raster_paint::drawable::{Draw, factory};
use raster_paint::error::FileError;
use raster_paint::file_handler::{load_raster, save_raster};
use raster_paint::geometry::Point;
use raster_paint::raster::{self, BLACK, WHITE};
use raster_paint::stroke::StrokeStyle;

fn painted_canvas() -> Canvas {
    let mut canvas = Canvas::with_size(32, 24).unwrap();
    let mut pen = factory::create_freehand(StrokeStyle::new(Rgba([0, 128, 255, 255]), 3));
    pen.add_point(Point::new(2, 2));
    pen.add_point(Point::new(29, 20));
    canvas.add(pen);
    canvas
}

#[test]
fn test_png_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    let mut canvas = painted_canvas();
    let exported = canvas.export_raster();

    save_raster(&path, &exported).unwrap();
    let loaded = load_raster(&path).unwrap();

    assert_eq!(loaded, exported);
}

#[test]
fn test_jpeg_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.jpg");
    let image = raster::filled(16, 8, WHITE);

    save_raster(&path, &image).unwrap();
    let loaded = load_raster(&path).unwrap();

    assert_eq!(loaded.dimensions(), (16, 8));
    assert!(loaded.pixels().all(|p| p[3] == 255));
}

#[test]
fn test_open_into_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamp.bmp");
    save_raster(&path, &raster::filled(5, 5, BLACK)).unwrap();

    let mut canvas = painted_canvas();
    canvas.import_raster(load_raster(&path).unwrap());

    assert_eq!(canvas.drawables().len(), 1);
    assert_eq!(canvas.drawables()[0].kind(), "image");
    let exported = canvas.export_raster();
    assert_eq!(*exported.get_pixel(4, 4), BLACK);
    assert_eq!(*exported.get_pixel(20, 15), WHITE);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_raster(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, FileError::Io(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.tiff");
    let err = save_raster(&path, &raster::filled(2, 2, WHITE)).unwrap_err();
    assert!(matches!(err, FileError::UnsupportedFormat(_)));
    assert!(!path.exists());
}
