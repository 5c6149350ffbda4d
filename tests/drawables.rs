use std::sync::Arc;

use image::{Rgba, RgbaImage};
use raster_paint::canvas::Canvas;
use raster_paint::drawable::{Draw, Drawable, RenderContext, factory};
use raster_paint::geometry::Point;
use raster_paint::raster::{self, BLACK, WHITE};
use raster_paint::stroke::StrokeStyle;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn render(drawable: &Drawable, width: u32, height: u32) -> RgbaImage {
    let mut surface = raster::filled(width, height, WHITE);
    let mut mask = raster::filled(width, height, WHITE);
    let mut ctx = RenderContext {
        background_mask: &mut mask,
    };
    drawable.render(&mut surface, Point::ZERO, &mut ctx);
    surface
}

fn with_points(mut drawable: Drawable, points: &[Point]) -> Drawable {
    for p in points {
        drawable.add_point(*p);
    }
    drawable
}

#[test]
fn test_spray_is_reproducible() {
    let points = [Point::new(10, 10), Point::new(18, 12), Point::new(25, 20)];
    let spray = with_points(factory::create_spray(StrokeStyle::new(BLACK, 16)), &points);

    let first = render(&spray, 40, 40);
    let second = render(&spray, 40, 40);

    assert_eq!(first, second);
    assert!(first.pixels().any(|p| *p == BLACK));
}

#[test]
fn test_two_sprays_differ() {
    let points = [Point::new(20, 20)];
    let a = with_points(factory::create_spray(StrokeStyle::new(BLACK, 20)), &points);
    let b = with_points(factory::create_spray(StrokeStyle::new(BLACK, 20)), &points);

    assert_ne!(render(&a, 40, 40), render(&b, 40, 40));
}

#[test]
fn test_spray_stays_inside_disc() {
    let spray = with_points(factory::create_spray(StrokeStyle::new(BLACK, 10)), &[Point::new(20, 20)]);
    let surface = render(&spray, 40, 40);

    for (x, y, pixel) in surface.enumerate_pixels() {
        if *pixel == BLACK {
            assert!((15..25).contains(&x) && (15..25).contains(&y), "dot at {x},{y}");
        }
    }
}

#[test]
fn test_eraser_outside_mask_leaves_surface() {
    let eraser = with_points(
        factory::create_eraser(StrokeStyle::new(BLACK, 6)),
        &[Point::new(50, 50), Point::new(-20, 3)],
    );
    let mut surface = raster::filled(10, 10, RED);
    let mut mask = raster::filled(10, 10, WHITE);
    let mut ctx = RenderContext {
        background_mask: &mut mask,
    };

    eraser.render(&mut surface, Point::ZERO, &mut ctx);

    assert!(surface.pixels().all(|p| *p == RED));
}

#[test]
fn test_eraser_restores_background() {
    let mut canvas = Canvas::with_size(20, 20).unwrap();
    canvas.add(with_points(
        factory::create_freehand(StrokeStyle::new(BLACK, 3)),
        &[Point::new(0, 10), Point::new(19, 10)],
    ));
    canvas.add(with_points(
        factory::create_eraser(StrokeStyle::new(BLACK, 6)),
        &[Point::new(10, 10)],
    ));

    let exported = canvas.export_raster();
    assert_eq!(*exported.get_pixel(10, 10), WHITE);
    assert_eq!(*exported.get_pixel(8, 10), WHITE);
    assert_eq!(*exported.get_pixel(2, 10), BLACK);
}

#[test]
fn test_pen_has_round_joints() {
    let pen = with_points(
        factory::create_freehand(StrokeStyle::new(BLACK, 7)),
        &[Point::new(10, 10), Point::new(30, 10), Point::new(30, 30)],
    );
    let surface = render(&pen, 40, 40);

    // caps extend past the first and last points, the corner is filled
    assert_eq!(*surface.get_pixel(7, 10), BLACK);
    assert_eq!(*surface.get_pixel(30, 33), BLACK);
    assert_eq!(*surface.get_pixel(32, 8), BLACK);
    assert_eq!(*surface.get_pixel(20, 20), WHITE);
}

#[test]
fn test_single_point_pen_is_a_dot() {
    let pen = with_points(factory::create_freehand(StrokeStyle::new(BLACK, 1)), &[Point::new(3, 4)]);
    let surface = render(&pen, 8, 8);
    assert_eq!(surface.pixels().filter(|p| **p == BLACK).count(), 1);
    assert_eq!(*surface.get_pixel(3, 4), BLACK);
}

#[test]
fn test_rectangle_collapses_and_normalizes() {
    let rect = with_points(
        factory::create_rectangle(StrokeStyle::new(BLACK, 1)),
        &[Point::new(10, 8), Point::new(4, 4), Point::new(2, 3)],
    );
    assert_eq!(rect.points(), &[Point::new(10, 8), Point::new(2, 3)]);

    let surface = render(&rect, 20, 20);
    assert_eq!(*surface.get_pixel(2, 3), BLACK);
    assert_eq!(*surface.get_pixel(10, 8), BLACK);
    assert_eq!(*surface.get_pixel(6, 3), BLACK);
    assert_eq!(*surface.get_pixel(6, 5), WHITE);
}

#[test]
fn test_ellipse_touches_bounding_box_midpoints() {
    let ellipse = with_points(
        factory::create_ellipse(StrokeStyle::new(BLACK, 1)),
        &[Point::new(2, 2), Point::new(22, 12)],
    );
    let surface = render(&ellipse, 30, 20);
    assert_eq!(*surface.get_pixel(22, 7), BLACK);
    assert_eq!(*surface.get_pixel(2, 7), BLACK);
    assert_eq!(*surface.get_pixel(12, 7), WHITE);
    assert_eq!(*surface.get_pixel(2, 2), WHITE);
}

#[test]
fn test_first_point_of_shape_is_doubled() {
    let shape = with_points(factory::create_ellipse(StrokeStyle::default()), &[Point::new(5, 5)]);
    assert_eq!(shape.points(), &[Point::new(5, 5), Point::new(5, 5)]);
}

#[test]
fn test_bucket_keeps_seed_and_caches_fill() {
    let mut base = raster::filled(12, 12, WHITE);
    raster::draw_line(&mut base, Point::new(6, 0), Point::new(6, 11), BLACK);
    let bucket = with_points(
        factory::create_flood_fill(StrokeStyle::new(RED, 1), Arc::new(base)),
        &[Point::new(2, 2), Point::new(9, 9)],
    );
    assert_eq!(bucket.points(), &[Point::new(2, 2)]);

    let mut mask = raster::filled(12, 12, WHITE);
    let mut first = raster::filled(12, 12, WHITE);
    let mut second = raster::filled(12, 12, WHITE);
    {
        let mut ctx = RenderContext {
            background_mask: &mut mask,
        };
        bucket.render(&mut first, Point::ZERO, &mut ctx);
        bucket.render(&mut second, Point::ZERO, &mut ctx);
    }

    assert_eq!(first, second);
    assert_eq!(*first.get_pixel(0, 0), RED);
    assert_eq!(*first.get_pixel(6, 3), BLACK);
    assert_eq!(*first.get_pixel(9, 9), WHITE);
    // the fill reached the mask too
    assert_eq!(*mask.get_pixel(0, 0), RED);
    assert_eq!(*mask.get_pixel(9, 9), WHITE);
}

#[test]
fn test_offset_moves_every_kind() {
    let rect = with_points(
        factory::create_rectangle(StrokeStyle::new(BLACK, 1)),
        &[Point::new(0, 0), Point::new(3, 3)],
    );
    let mut surface = raster::filled(10, 10, WHITE);
    let mut mask = raster::filled(10, 10, WHITE);
    let mut ctx = RenderContext {
        background_mask: &mut mask,
    };
    rect.render(&mut surface, Point::new(4, 5), &mut ctx);

    assert_eq!(*surface.get_pixel(4, 5), BLACK);
    assert_eq!(*surface.get_pixel(7, 8), BLACK);
    assert_eq!(*surface.get_pixel(0, 0), WHITE);
}

#[test]
fn test_extreme_points_are_clipped() {
    let far = [
        Point::new(i32::MAX, 5),
        Point::new(i32::MIN, 5),
        Point::new(5, i32::MAX),
        Point::new(i32::MIN, i32::MIN),
        Point::new(i32::MAX, i32::MAX),
    ];
    let style = StrokeStyle::new(RED, 3);
    let bitmap = Arc::new(raster::filled(4, 4, RED));

    for p in far {
        let drawables = [
            with_points(factory::create_freehand(style), &[p]),
            with_points(factory::create_spray(StrokeStyle::new(RED, 9)), &[p, p]),
            with_points(factory::create_eraser(style), &[p]),
            with_points(factory::create_rectangle(style), &[p, p]),
            with_points(factory::create_ellipse(style), &[p, p]),
            with_points(factory::create_selection(), &[p, p]),
            with_points(factory::create_flood_fill(style, Arc::new(raster::filled(10, 10, WHITE))), &[p]),
            factory::create_image(Arc::clone(&bitmap), p),
        ];
        for drawable in &drawables {
            let surface = render(drawable, 10, 10);
            assert!(surface.pixels().all(|px| *px == WHITE), "{} at {p:?}", drawable.kind());
        }
    }
}

#[test]
fn test_strokes_spanning_the_whole_range() {
    let pen = with_points(
        factory::create_freehand(StrokeStyle::new(RED, 3)),
        &[Point::new(i32::MIN, 5), Point::new(i32::MAX, 5)],
    );
    let surface = render(&pen, 10, 10);
    assert!((0..10).all(|x| *surface.get_pixel(x, 5) == RED));
    assert_eq!(*surface.get_pixel(5, 0), WHITE);

    let rect = with_points(
        factory::create_rectangle(StrokeStyle::new(RED, 3)),
        &[Point::new(0, 0), Point::new(i32::MAX, i32::MAX)],
    );
    let surface = render(&rect, 10, 10);
    assert_eq!(*surface.get_pixel(5, 0), RED);
    assert_eq!(*surface.get_pixel(0, 5), RED);
    assert_eq!(*surface.get_pixel(5, 5), WHITE);

    let marquee = with_points(factory::create_selection(), &[Point::new(i32::MIN, 0), Point::new(i32::MAX, 9)]);
    let surface = render(&marquee, 10, 10);
    assert!(surface.pixels().any(|px| *px == BLACK));
    assert_eq!(*surface.get_pixel(5, 5), WHITE);
}
