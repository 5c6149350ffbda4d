use crate::geometry::{Point, offset_point};

/// Replace the path with `[anchor, point]`, where the anchor is the first point
/// ever added. The first call yields `[point, point]`.
pub(crate) fn collapse_to_anchor(points: &mut Vec<Point>, point: Point) {
    let anchor = points.first().copied().unwrap_or(point);
    points.clear();
    points.push(anchor);
    points.push(point);
}

/// Map stored canvas-local points into the target surface's space
pub(crate) fn to_screen(points: &[Point], offset: Point) -> Vec<Point> {
    points.iter().map(|p| offset_point(*p, offset)).collect()
}

/// The anchor/current pair of a two-point drawable, translated by `offset`
pub(crate) fn corners(points: &[Point], offset: Point) -> Option<(Point, Point)> {
    match points {
        [first, second, ..] => Some((offset_point(*first, offset), offset_point(*second, offset))),
        _ => None,
    }
}
