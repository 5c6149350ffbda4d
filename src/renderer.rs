use image::RgbaImage;
use log::debug;

use crate::drawable::{Draw, Drawable, RenderContext, factory};
use crate::geometry::Point;

/// Paint every drawable in insertion order onto `surface`.
///
/// A temporary drawable only survives while it is the last one. Any earlier
/// temporary is swapped for a no-op during the pass and removed afterwards, so
/// the list is never mutated while it is being walked.
pub fn render_drawables(
    drawables: &mut Vec<Drawable>,
    surface: &mut RgbaImage,
    offset: Point,
    ctx: &mut RenderContext<'_>,
) {
    let last = drawables.len().saturating_sub(1);
    let mut stale = Vec::new();

    for (index, drawable) in drawables.iter_mut().enumerate() {
        if index != last && drawable.is_temporary() {
            *drawable = factory::create_noop();
            stale.push(index);
            continue;
        }
        drawable.render(surface, offset, ctx);
    }

    if !stale.is_empty() {
        debug!("Pruning {} stale temporary drawables", stale.len());
    }
    for index in stale.into_iter().rev() {
        drawables.remove(index);
    }
}
