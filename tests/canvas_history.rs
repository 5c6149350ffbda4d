use std::sync::Arc;

use raster_paint::canvas::Canvas;
use raster_paint::drawable::{Draw, Drawable, factory};
use raster_paint::geometry::{PixelRect, Point};
use raster_paint::id_generator::DrawableId;
use raster_paint::raster::{self, BLACK, WHITE};
use raster_paint::stroke::StrokeStyle;

fn stroke(from: Point, to: Point) -> Drawable {
    let mut pen = factory::create_freehand(StrokeStyle::new(BLACK, 1));
    pen.add_point(from);
    pen.add_point(to);
    pen
}

fn ids(canvas: &Canvas) -> Vec<DrawableId> {
    canvas.drawables().iter().map(|d| d.id()).collect()
}

fn total(canvas: &Canvas) -> usize {
    canvas.drawables().len() + canvas.redo_len()
}

#[test]
fn test_add_clears_redo() {
    let mut canvas = Canvas::with_size(20, 20).unwrap();
    for y in 0..4 {
        canvas.add(stroke(Point::new(0, y), Point::new(19, y)));
    }
    canvas.undo();
    canvas.undo();
    assert_eq!(total(&canvas), 4);

    canvas.add(stroke(Point::new(0, 10), Point::new(19, 10)));
    assert_eq!(canvas.redo_len(), 0);
    assert_eq!(total(&canvas), 3);
}

#[test]
fn test_total_invariant_under_undo_redo() {
    let mut canvas = Canvas::with_size(20, 20).unwrap();
    for y in 0..5 {
        canvas.add(stroke(Point::new(0, y), Point::new(19, y)));
    }
    let ops = [true, true, false, true, true, true, true, true, false, false, false];
    for undo in ops {
        if undo {
            canvas.undo();
        } else {
            canvas.redo();
        }
        assert_eq!(total(&canvas), 5);
    }
}

#[test]
fn test_undo_then_redo_restores_list() {
    let mut canvas = Canvas::with_size(20, 20).unwrap();
    for y in 0..3 {
        canvas.add(stroke(Point::new(0, y), Point::new(19, y)));
    }
    let before = ids(&canvas);
    let pixels = canvas.export_raster();

    canvas.undo();
    assert_ne!(ids(&canvas), before);
    canvas.redo();

    assert_eq!(ids(&canvas), before);
    assert_eq!(canvas.export_raster(), pixels);
}

#[test]
fn test_undo_redo_on_empty_canvas_is_silent() {
    let mut canvas = Canvas::with_size(8, 8).unwrap();
    canvas.undo();
    canvas.redo();
    assert!(canvas.drawables().is_empty());
    assert_eq!(canvas.redo_len(), 0);
}

#[test]
fn test_render_surface_is_deterministic() {
    let mut canvas = Canvas::with_size(30, 30).unwrap();
    canvas.add(stroke(Point::new(0, 0), Point::new(29, 29)));
    let mut spray = factory::create_spray(StrokeStyle::new(BLACK, 12));
    spray.add_point(Point::new(15, 15));
    spray.add_point(Point::new(20, 10));
    canvas.add(spray);

    let first = canvas.render_surface(None);
    let second = canvas.render_surface(None);
    assert_eq!(first, second);
}

#[test]
fn test_export_excludes_trailing_marquee() {
    let mut canvas = Canvas::with_size(20, 20).unwrap();
    canvas.begin_gesture(factory::create_selection());
    canvas.extend_gesture(Point::new(2, 2));
    canvas.extend_gesture(Point::new(15, 15));
    canvas.end_gesture();

    canvas.redraw();
    assert_eq!(*canvas.surface().get_pixel(2, 2), BLACK);

    let exported = canvas.export_raster();
    assert!(exported.pixels().all(|p| *p == WHITE));
    assert!(canvas.drawables().is_empty());
    // the clipboard region outlives the marquee
    assert_eq!(
        canvas.selection(),
        Some(PixelRect::from_corners(Point::new(2, 2), Point::new(15, 15)))
    );
}

#[test]
fn test_extract_region_clamps_to_canvas() {
    let mut canvas = Canvas::with_size(20, 10).unwrap();
    canvas.add(stroke(Point::new(0, 5), Point::new(19, 5)));

    let inside = canvas.extract_region(PixelRect::from_corners(Point::new(12, 8), Point::new(2, 2)));
    assert_eq!(inside.dimensions(), (10, 6));
    assert_eq!(*inside.get_pixel(0, 3), BLACK);

    let overhanging = canvas.extract_region(PixelRect::from_corners(Point::new(15, -5), Point::new(40, 40)));
    assert_eq!(overhanging.dimensions(), (5, 10));

    let outside = canvas.extract_region(PixelRect::from_corners(Point::new(50, 50), Point::new(60, 60)));
    assert_eq!(outside.dimensions(), (0, 0));
}

#[test]
fn test_import_replaces_content() {
    let mut canvas = Canvas::with_size(10, 10).unwrap();
    canvas.add(stroke(Point::new(0, 0), Point::new(9, 9)));
    canvas.undo();

    canvas.import_raster(raster::filled(4, 4, BLACK));

    assert_eq!(canvas.drawables().len(), 1);
    assert_eq!(canvas.redo_len(), 0);
    let exported = canvas.export_raster();
    assert_eq!(exported.dimensions(), (10, 10));
    assert_eq!(*exported.get_pixel(3, 3), BLACK);
    assert_eq!(*exported.get_pixel(4, 4), WHITE);
}

#[test]
fn test_merge_preserves_pixels() {
    let mut canvas = Canvas::with_size(16, 16).unwrap();
    for y in (0..16).step_by(3) {
        canvas.add(stroke(Point::new(0, y), Point::new(15, 15 - y)));
    }
    canvas.undo();
    let before = canvas.export_raster();

    canvas.merge();

    assert_eq!(canvas.drawables().len(), 1);
    assert_eq!(canvas.redo_len(), 0);
    assert_eq!(canvas.export_raster(), before);
}

#[test]
fn test_merge_keeps_marquee_visible() {
    let mut canvas = Canvas::with_size(16, 16).unwrap();
    canvas.add(stroke(Point::new(0, 0), Point::new(15, 0)));
    canvas.begin_gesture(factory::create_selection());
    canvas.extend_gesture(Point::new(4, 4));
    canvas.extend_gesture(Point::new(10, 10));
    canvas.end_gesture();

    canvas.merge();

    assert_eq!(canvas.drawables().len(), 2);
    assert!(canvas.drawables()[1].is_temporary());
}

#[test]
fn test_stale_marquee_pruned_on_redraw() {
    let mut canvas = Canvas::with_size(16, 16).unwrap();
    canvas.begin_gesture(factory::create_selection());
    canvas.extend_gesture(Point::new(1, 1));
    canvas.extend_gesture(Point::new(5, 5));
    canvas.end_gesture();
    canvas.add(stroke(Point::new(0, 10), Point::new(15, 10)));

    canvas.redraw();

    assert_eq!(canvas.drawables().len(), 1);
    assert_eq!(*canvas.surface().get_pixel(1, 1), WHITE);
}

#[test]
fn test_shared_canvas_image_paste() {
    let shared = Canvas::with_size(8, 8).unwrap().into_shared();
    shared
        .lock()
        .add(factory::create_image(Arc::new(raster::filled(2, 2, BLACK)), Point::new(6, 6)));
    let exported = shared.lock().export_raster();
    assert_eq!(*exported.get_pixel(7, 7), BLACK);
    assert_eq!(*exported.get_pixel(5, 5), WHITE);
}
