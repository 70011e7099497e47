//! Drop-shadow layer: a blurred, offset silhouette behind a shape.

use image::imageops;

use crate::geometry::Rect;
use crate::types::Colour;

use super::draw::fill_rounded_rect;
use super::layer::Layer;

/// Build a canvas-sized shadow layer for `rect`.
///
/// The silhouette is offset by `(dx, dy)`, filled black at `opacity`, and
/// gaussian-blurred. The blur radius scales with the source image upstream
/// so shadows read consistently at any resolution. Composited first, the
/// result sits visually behind every opaque layer that follows.
pub fn shadow_layer(
    name: &'static str,
    canvas_w: u32,
    canvas_h: u32,
    rect: Rect,
    radius: i32,
    offset: (i32, i32),
    opacity: u8,
    blur: i32,
) -> Layer {
    let mut layer = Layer::new(name, canvas_w, canvas_h);
    fill_rounded_rect(
        &mut layer.image,
        rect.translate(offset.0, offset.1),
        radius,
        Colour::new(0, 0, 0, opacity),
    );

    // imageops::blur takes a sigma; a gaussian's visible radius is roughly
    // two sigmas, so halve the requested radius.
    let sigma = (blur.max(1) as f32) * 0.5;
    layer.image = imageops::blur(&layer.image, sigma);
    layer
}
