//! Device-frame renderer: a screenshot inside a rendered phone chassis.

use image::{imageops, RgbaImage};

use crate::error::Result;
use crate::geometry::{DevicePlan, Rect};
use crate::types::Colour;

use super::draw::{
    apply_alpha_mask, fill_circle, fill_horizontal_gradient, fill_rounded_rect,
    fill_vertical_gradient, paste_masked, rounded_mask, stroke_rounded_rect,
};
use super::layer::LayerStack;
use super::shadow::shadow_layer;

const BACKDROP_TOP: Colour = Colour::rgb(246, 248, 252);
const BACKDROP_BOTTOM: Colour = Colour::rgb(223, 228, 236);
const BODY_LEFT: Colour = Colour::rgb(46, 48, 53);
const BODY_RIGHT: Colour = Colour::rgb(22, 23, 26);
const BODY_EDGE: Colour = Colour::new(170, 174, 182, 140);
const BODY_SEAM: Colour = Colour::new(8, 8, 10, 180);
const CAVITY: Colour = Colour::rgb(4, 4, 5);
const ISLAND: Colour = Colour::rgb(7, 7, 8);
const LENS_OUTER: Colour = Colour::rgb(32, 48, 70);
const LENS_INNER: Colour = Colour::rgb(12, 16, 20);
const BUTTON: Colour = Colour::new(126, 130, 139, 220);
const HIGHLIGHT: Colour = Colour::new(255, 255, 255, 95);
const SHADOW_OPACITY: u8 = 120;

/// Render `source` inside a phone chassis on a soft gradient backdrop.
pub fn render_frame(source: &RgbaImage) -> Result<RgbaImage> {
    let plan = DevicePlan::new(source.width(), source.height())?;
    let mut base = RgbaImage::new(plan.canvas_w, plan.canvas_h);
    fill_vertical_gradient(&mut base, BACKDROP_TOP, BACKDROP_BOTTOM);
    Ok(layer_stack(source, &plan).composite(base))
}

/// Build the frame's layer stack in compositing order; the caller supplies
/// the backdrop it folds onto.
pub fn layer_stack(source: &RgbaImage, plan: &DevicePlan) -> LayerStack {
    let mut stack = LayerStack::new(plan.canvas_w, plan.canvas_h);

    stack.push(shadow_layer(
        "shadow",
        plan.canvas_w,
        plan.canvas_h,
        plan.phone,
        plan.body_radius,
        plan.shadow_offset,
        SHADOW_OPACITY,
        plan.shadow_blur,
    ));

    let body = stack.add("body");
    let chassis = render_chassis(plan);
    imageops::overlay(&mut body.image, &chassis, plan.phone.x as i64, plan.phone.y as i64);

    let cavity = stack.add("cavity");
    fill_rounded_rect(&mut cavity.image, plan.cavity, plan.cavity_radius, CAVITY);

    let screen = stack.add("screen");
    let mask = rounded_mask(plan.source_w, plan.source_h, plan.screen_radius);
    paste_masked(&mut screen.image, source, &mask, plan.screen.x, plan.screen.y);

    let island = stack.add("island");
    fill_rounded_rect(&mut island.image, plan.island, plan.island.h / 2, ISLAND);
    let (cx, cy) = plan.lens_center;
    fill_circle(&mut island.image, cx, cy, plan.lens_radius, LENS_OUTER);
    fill_circle(&mut island.image, cx, cy, plan.lens_radius / 2, LENS_INNER);

    let buttons = stack.add("buttons");
    for button in plan.buttons {
        fill_rounded_rect(&mut buttons.image, button, button.w, BUTTON);
    }

    let highlight = stack.add("highlight");
    stroke_rounded_rect(
        &mut highlight.image,
        plan.screen,
        plan.screen_radius,
        plan.highlight_stroke,
        HIGHLIGHT,
    );

    stack
}

/// The chassis body in its own coordinate space: metallic gradient clipped
/// to the rounded silhouette, with edge and seam strokes.
fn render_chassis(plan: &DevicePlan) -> RgbaImage {
    let w = plan.phone.w as u32;
    let h = plan.phone.h as u32;
    let mut body = RgbaImage::new(w, h);
    fill_horizontal_gradient(&mut body, BODY_LEFT, BODY_RIGHT);
    apply_alpha_mask(&mut body, &rounded_mask(w, h, plan.body_radius));

    stroke_rounded_rect(
        &mut body,
        Rect::new(1, 1, plan.phone.w - 2, plan.phone.h - 2),
        plan.body_radius,
        plan.edge_stroke,
        BODY_EDGE,
    );
    stroke_rounded_rect(
        &mut body,
        Rect::new(0, 0, plan.phone.w, plan.phone.h).inset(plan.shell),
        plan.seam_radius,
        plan.seam_stroke,
        BODY_SEAM,
    );
    body
}
