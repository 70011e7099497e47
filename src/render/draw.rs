//! Raster drawing primitives: gradients, antialiased rounded rectangles,
//! circles, and masked pastes.
//!
//! Edges are antialiased by evaluating a signed distance to the shape
//! boundary at each pixel centre and converting it to partial coverage, so
//! composited edges stay smooth at any scale.

use image::{GrayImage, Luma, RgbaImage};

use crate::geometry::Rect;
use crate::types::Colour;

/// Fill with a top-to-bottom gradient.
pub fn fill_vertical_gradient(img: &mut RgbaImage, top: Colour, bottom: Colour) {
    let (w, h) = img.dimensions();
    let denom = (h.saturating_sub(1)).max(1) as f32;
    for y in 0..h {
        let row = top.lerp(bottom, y as f32 / denom).to_rgba();
        for x in 0..w {
            img.get_pixel_mut(x, y).0 = row;
        }
    }
}

/// Fill with a left-to-right gradient.
pub fn fill_horizontal_gradient(img: &mut RgbaImage, left: Colour, right: Colour) {
    let (w, h) = img.dimensions();
    let denom = (w.saturating_sub(1)).max(1) as f32;
    for x in 0..w {
        let col = left.lerp(right, x as f32 / denom).to_rgba();
        for y in 0..h {
            img.get_pixel_mut(x, y).0 = col;
        }
    }
}

/// Signed distance from a point (relative to the rect centre) to a rounded
/// rectangle with half-extents `(hw, hh)` and corner radius `r`.
fn sd_rounded_rect(px: f32, py: f32, hw: f32, hh: f32, r: f32) -> f32 {
    let qx = px.abs() - (hw - r);
    let qy = py.abs() - (hh - r);
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    outside + qx.max(qy).min(0.0) - r
}

/// Distance-to-coverage: full inside, zero outside, partial on the boundary.
fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Clamp a requested radius to at most half the shorter dimension.
fn clamp_radius(radius: i32, w: i32, h: i32) -> f32 {
    (radius.max(0) as f32).min(w.min(h) as f32 / 2.0)
}

/// Produce a single-channel alpha mask: opaque inside a rounded rectangle
/// inscribed in `width x height`, transparent outside, antialiased edges.
/// A radius of zero yields a fully opaque rectangle.
pub fn rounded_mask(width: u32, height: u32, radius: i32) -> GrayImage {
    let r = clamp_radius(radius, width as i32, height as i32);
    let (hw, hh) = (width as f32 / 2.0, height as f32 / 2.0);

    GrayImage::from_fn(width, height, |x, y| {
        let px = x as f32 + 0.5 - hw;
        let py = y as f32 + 0.5 - hh;
        let cov = coverage(sd_rounded_rect(px, py, hw, hh, r));
        Luma([(cov * 255.0).round() as u8])
    })
}

/// Alpha-over a single pixel with `colour`, its alpha scaled by `cov`.
fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, colour: Colour, cov: f32) {
    let (w, h) = img.dimensions();
    if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
        return;
    }
    let sa = colour.a as f32 / 255.0 * cov;
    if sa <= 0.0 {
        return;
    }

    let dst = img.get_pixel_mut(x as u32, y as u32);
    let da = dst.0[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    let src = [colour.r as f32, colour.g as f32, colour.b as f32];
    for c in 0..3 {
        let blended = (src[c] * sa + dst.0[c] as f32 * da * (1.0 - sa)) / oa;
        dst.0[c] = blended.round() as u8;
    }
    dst.0[3] = (oa * 255.0).round() as u8;
}

/// Fill a rounded rectangle, blending over existing layer content.
pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: i32, colour: Colour) {
    if !rect.is_valid() {
        return;
    }
    let r = clamp_radius(radius, rect.w, rect.h);
    let (hw, hh) = (rect.w as f32 / 2.0, rect.h as f32 / 2.0);
    let (cx, cy) = (rect.x as f32 + hw, rect.y as f32 + hh);

    for y in rect.y - 1..=rect.bottom() {
        for x in rect.x - 1..=rect.right() {
            let d = sd_rounded_rect(x as f32 + 0.5 - cx, y as f32 + 0.5 - cy, hw, hh, r);
            blend_pixel(img, x, y, colour, coverage(d));
        }
    }
}

/// Stroke a rounded rectangle's outline, centred on the shape boundary.
pub fn stroke_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: i32, width: i32, colour: Colour) {
    if !rect.is_valid() || width <= 0 {
        return;
    }
    let r = clamp_radius(radius, rect.w, rect.h);
    let (hw, hh) = (rect.w as f32 / 2.0, rect.h as f32 / 2.0);
    let (cx, cy) = (rect.x as f32 + hw, rect.y as f32 + hh);
    let half = width as f32 / 2.0;
    let pad = width + 1;

    for y in rect.y - pad..=rect.bottom() + pad {
        for x in rect.x - pad..=rect.right() + pad {
            let d = sd_rounded_rect(x as f32 + 0.5 - cx, y as f32 + 0.5 - cy, hw, hh, r);
            let cov = (half + 0.5 - d.abs()).clamp(0.0, 1.0);
            blend_pixel(img, x, y, colour, cov);
        }
    }
}

/// Fill an antialiased circle.
pub fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, radius: i32, colour: Colour) {
    if radius <= 0 {
        return;
    }
    let r = radius as f32;
    for y in cy - radius - 1..=cy + radius + 1 {
        for x in cx - radius - 1..=cx + radius + 1 {
            let d = (x as f32 + 0.5 - cx as f32).hypot(y as f32 + 0.5 - cy as f32) - r;
            blend_pixel(img, x, y, colour, coverage(d));
        }
    }
}

/// Paste `src` at `(x, y)`, with each pixel's alpha scaled by `mask`.
/// `mask` must have the same dimensions as `src`.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, mask: &GrayImage, x: i32, y: i32) {
    debug_assert_eq!(src.dimensions(), mask.dimensions());
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let cov = mask.get_pixel(sx, sy).0[0] as f32 / 255.0;
        let [r, g, b, a] = pixel.0;
        blend_pixel(dst, x + sx as i32, y + sy as i32, Colour::new(r, g, b, a), cov);
    }
}

/// Multiply an image's alpha channel by a same-sized mask.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let m = mask.get_pixel(x, y).0[0] as u16;
        pixel.0[3] = ((pixel.0[3] as u16 * m) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]))
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let mut img = blank(4, 8);
        fill_vertical_gradient(&mut img, Colour::rgb(246, 248, 252), Colour::rgb(223, 228, 236));
        assert_eq!(img.get_pixel(0, 0).0, [246, 248, 252, 255]);
        assert_eq!(img.get_pixel(3, 7).0, [223, 228, 236, 255]);
    }

    #[test]
    fn test_horizontal_gradient_endpoints() {
        let mut img = blank(8, 4);
        fill_horizontal_gradient(&mut img, Colour::rgb(46, 48, 53), Colour::rgb(22, 23, 26));
        assert_eq!(img.get_pixel(0, 0).0, [46, 48, 53, 255]);
        assert_eq!(img.get_pixel(7, 3).0, [22, 23, 26, 255]);
    }

    #[test]
    fn test_single_row_gradient_does_not_divide_by_zero() {
        let mut img = blank(3, 1);
        fill_vertical_gradient(&mut img, Colour::BLACK, Colour::WHITE);
        assert_eq!(img.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn test_mask_radius_zero_is_plain_rectangle() {
        let mask = rounded_mask(8, 6, 0);
        assert!(mask.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_mask_rounds_corners() {
        let mask = rounded_mask(64, 64, 16);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(mask.get_pixel(63, 0).0[0], 0);
        assert_eq!(mask.get_pixel(32, 32).0[0], 255);
        // Edge midpoints are untouched by a 16px corner.
        assert_eq!(mask.get_pixel(0, 32).0[0], 255);
        assert_eq!(mask.get_pixel(32, 0).0[0], 255);
    }

    #[test]
    fn test_mask_full_radius_square_matches_circle() {
        // On a square with radius = side/2 the rounded rect degenerates to a
        // circle; compare against analytic circle coverage.
        let s = 48u32;
        let mask = rounded_mask(s, s, s as i32 / 2);
        let r = s as f32 / 2.0;
        for y in 0..s {
            for x in 0..s {
                let d = (x as f32 + 0.5 - r).hypot(y as f32 + 0.5 - r) - r;
                let expected = (coverage(d) * 255.0).round() as i32;
                let got = mask.get_pixel(x, y).0[0] as i32;
                assert!(
                    (expected - got).abs() <= 1,
                    "pixel ({}, {}): expected {}, got {}",
                    x,
                    y,
                    expected,
                    got
                );
            }
        }
    }

    #[test]
    fn test_mask_clamps_oversized_radius() {
        let mask = rounded_mask(10, 100, 500);
        assert_eq!(mask.get_pixel(5, 50).0[0], 255);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn test_fill_rounded_rect_interior_and_exterior() {
        let mut img = blank(32, 32);
        fill_rounded_rect(&mut img, Rect::new(8, 8, 16, 16), 4, Colour::rgb(200, 10, 10));
        assert_eq!(img.get_pixel(16, 16).0, [200, 10, 10, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        // Corner of the rect itself is rounded away.
        assert!(img.get_pixel(8, 8).0[3] < 255);
    }

    #[test]
    fn test_stroke_leaves_interior_untouched() {
        let mut img = blank(40, 40);
        stroke_rounded_rect(&mut img, Rect::new(4, 4, 32, 32), 6, 2, Colour::WHITE);
        assert_eq!(img.get_pixel(20, 20).0[3], 0);
        // Boundary pixels carry the stroke.
        assert!(img.get_pixel(20, 4).0[3] > 0);
        assert!(img.get_pixel(4, 20).0[3] > 0);
    }

    #[test]
    fn test_fill_circle() {
        let mut img = blank(21, 21);
        fill_circle(&mut img, 10, 10, 6, Colour::rgb(32, 48, 70));
        assert_eq!(img.get_pixel(10, 10).0, [32, 48, 70, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(10, 3).0[3], 0);
    }

    #[test]
    fn test_paste_masked_clips_corners() {
        let src = RgbaImage::from_pixel(16, 16, Rgba([50, 60, 70, 255]));
        let mask = rounded_mask(16, 16, 8);
        let mut dst = blank(32, 32);
        paste_masked(&mut dst, &src, &mask, 8, 8);

        assert_eq!(dst.get_pixel(16, 16).0, [50, 60, 70, 255]);
        // Source corner is masked off.
        assert_eq!(dst.get_pixel(8, 8).0[3], 0);
        // Outside the paste area nothing changes.
        assert_eq!(dst.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_paste_masked_clamps_to_canvas() {
        let src = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let mask = rounded_mask(8, 8, 0);
        let mut dst = blank(8, 8);
        // Partially off-canvas paste must not panic.
        paste_masked(&mut dst, &src, &mask, -4, -4);
        assert_eq!(dst.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn test_apply_alpha_mask() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let mask = rounded_mask(4, 4, 2);
        apply_alpha_mask(&mut img, &mask);
        assert!(img.get_pixel(0, 0).0[3] < 255);
        assert_eq!(img.get_pixel(2, 2).0[3], 255);
    }
}
