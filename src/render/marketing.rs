//! Marketing slide renderer: gradient backdrop, branding badge, wrapped
//! copy, and the screenshot embedded in a drop-shadowed panel.

use image::{imageops, imageops::FilterType, RgbaImage};

use crate::error::Result;
use crate::geometry::{MarketingPlan, Rect};
use crate::text::{wrap, FontBook, FontHandle, FontRole};
use crate::types::{Colour, Device, ShotDescriptor};

use super::draw::{fill_rounded_rect, fill_vertical_gradient, paste_masked, rounded_mask, stroke_rounded_rect};
use super::layer::LayerStack;
use super::shadow::shadow_layer;

const BADGE_FILL: Colour = Colour::new(255, 255, 255, 230);
const BADGE_TEXT: Colour = Colour::rgb(20, 25, 37);
const DEVICE_TEXT: Colour = Colour::rgb(244, 248, 255);
const HEADLINE_TEXT: Colour = Colour::WHITE;
const SUBTITLE_TEXT: Colour = Colour::rgb(236, 243, 255);
const PANEL_FILL: Colour = Colour::new(245, 248, 255, 252);
const PANEL_OUTLINE: Colour = Colour::new(255, 255, 255, 220);
const BORDER: Colour = Colour::new(210, 220, 238, 230);
const SHADOW_OPACITY: u8 = 85;
const MAX_TEXT_LINES: usize = 2;

/// Renders marketing slides. Owns the font cache so faces are parsed once
/// and shared across a whole batch.
pub struct MarketingRenderer {
    fonts: FontBook,
    badge_label: String,
}

impl MarketingRenderer {
    pub fn new(badge_label: impl Into<String>) -> Self {
        Self {
            fonts: FontBook::new(),
            badge_label: badge_label.into(),
        }
    }

    /// Compose one slide for `source` using the descriptor's palette and copy.
    pub fn render(
        &mut self,
        source: &RgbaImage,
        shot: &ShotDescriptor,
        device: Device,
    ) -> Result<RgbaImage> {
        let plan = MarketingPlan::new(source.width(), source.height())?;

        let mut base = RgbaImage::new(plan.canvas_w, plan.canvas_h);
        fill_vertical_gradient(&mut base, shot.palette.top, shot.palette.bottom);

        let mut stack = LayerStack::new(plan.canvas_w, plan.canvas_h);

        let badge_font = self.fonts.resolve(FontRole::Bold, plan.badge_font);
        let badge = Rect::new(
            plan.side_padding,
            plan.top_padding,
            badge_font.measure(&self.badge_label).round() as i32 + plan.badge_pad,
            plan.badge_height,
        );
        let layer = stack.add("badge");
        fill_rounded_rect(&mut layer.image, badge, badge.h / 2, BADGE_FILL);
        badge_font.draw(
            &mut layer.image,
            badge.x + plan.badge_inset_x,
            badge.y + plan.badge_inset_y + badge_font.ascent(),
            &self.badge_label,
            BADGE_TEXT,
        );

        let device_font = self.fonts.resolve(FontRole::Bold, plan.device_font);
        let label = device_caption(device);
        let layer = stack.add("device-label");
        device_font.draw(
            &mut layer.image,
            plan.canvas_w as i32 - plan.side_padding - device_font.measure(&label).round() as i32,
            badge.y + plan.badge_inset_y + device_font.ascent(),
            &label,
            DEVICE_TEXT,
        );

        let headline_font = self.fonts.resolve(FontRole::Bold, plan.headline_font);
        let layer = stack.add("headline");
        let headline_bottom = draw_block(
            &mut layer.image,
            &shot.headline,
            &headline_font,
            plan.side_padding,
            badge.bottom() + plan.text_gap,
            plan.text_width(),
            plan.headline_spacing,
            HEADLINE_TEXT,
        );

        let subtitle_font = self.fonts.resolve(FontRole::Regular, plan.subtitle_font);
        let layer = stack.add("subtitle");
        let subtitle_bottom = draw_block(
            &mut layer.image,
            &shot.subtitle,
            &subtitle_font,
            plan.side_padding,
            headline_bottom + plan.subtitle_gap,
            plan.text_width(),
            plan.subtitle_spacing,
            SUBTITLE_TEXT,
        );

        let panel = plan.panel_rect(subtitle_bottom)?;
        stack.push(shadow_layer(
            "panel-shadow",
            plan.canvas_w,
            plan.canvas_h,
            panel,
            plan.panel_radius,
            (plan.shadow_offset, plan.shadow_offset),
            SHADOW_OPACITY,
            plan.shadow_blur,
        ));

        let layer = stack.add("panel");
        fill_rounded_rect(&mut layer.image, panel, plan.panel_radius, PANEL_FILL);
        stroke_rounded_rect(&mut layer.image, panel, plan.panel_radius, plan.panel_stroke, PANEL_OUTLINE);

        let content = plan.content_rect(panel)?;
        let scale = f64::min(
            content.w as f64 / source.width() as f64,
            content.h as f64 / source.height() as f64,
        );
        let shot_w = ((source.width() as f64 * scale) as u32).max(1);
        let shot_h = ((source.height() as f64 * scale) as u32).max(1);
        let resized = imageops::resize(source, shot_w, shot_h, FilterType::Lanczos3);
        let embed = Rect::new(
            content.x + (content.w - shot_w as i32) / 2,
            content.y + (content.h - shot_h as i32) / 2,
            shot_w as i32,
            shot_h as i32,
        );
        let layer = stack.add("screenshot");
        let mask = rounded_mask(shot_w, shot_h, plan.screenshot_radius);
        paste_masked(&mut layer.image, &resized, &mask, embed.x, embed.y);

        let layer = stack.add("border");
        stroke_rounded_rect(&mut layer.image, embed, plan.screenshot_radius, plan.border_stroke, BORDER);

        Ok(stack.composite(base))
    }
}

/// Caption drawn in the slide's top-right corner, always uppercased.
fn device_caption(device: Device) -> String {
    device.label().to_uppercase()
}

/// Draw a wrapped text block and return the y coordinate below its last line.
#[allow(clippy::too_many_arguments)]
fn draw_block(
    img: &mut RgbaImage,
    text: &str,
    font: &FontHandle,
    x: i32,
    y: i32,
    max_width: i32,
    spacing: i32,
    colour: Colour,
) -> i32 {
    let lines = wrap(text, font, max_width as f32, MAX_TEXT_LINES);
    let mut top = y;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            top += spacing;
        }
        font.draw(img, x, top + font.ascent(), line, colour);
        top += font.line_height();
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GradientSpec;
    use image::Rgba;

    fn shot() -> ShotDescriptor {
        ShotDescriptor {
            source: "screenshot-2-sign-in.png".into(),
            slug: "sync-anywhere".into(),
            headline: "Sign in. Sync everywhere.".into(),
            subtitle: "Your notes follow you across every device.".into(),
            palette: GradientSpec {
                top: Colour::rgb(23, 89, 76),
                bottom: Colour::rgb(67, 170, 139),
            },
        }
    }

    fn source(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 40, 40, 255]))
    }

    #[test]
    fn test_slide_keeps_source_dimensions() {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        let out = renderer.render(&source(640, 1280), &shot(), Device::Iphone).unwrap();
        assert_eq!((out.width(), out.height()), (640, 1280));
    }

    #[test]
    fn test_backdrop_uses_descriptor_palette() {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        let out = renderer.render(&source(640, 1280), &shot(), Device::Iphone).unwrap();
        let top = out.get_pixel(2, 1).0;
        assert!((top[0] as i32 - 23).abs() <= 4, "got {top:?}");
        assert!((top[1] as i32 - 89).abs() <= 4, "got {top:?}");
        assert!((top[2] as i32 - 76).abs() <= 4, "got {top:?}");
    }

    #[test]
    fn test_panel_fill_shows_inside_panel_margin() {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        let plan = MarketingPlan::new(640, 1280).unwrap();
        let out = renderer.render(&source(640, 1280), &shot(), Device::Iphone).unwrap();
        // Probe between the panel stroke and the embedded screenshot. The
        // panel bottom edge is fixed, so sample just above it at centre x.
        let x = (plan.canvas_w / 2) as u32;
        let y = (plan.panel_bottom - plan.content_inset / 2) as u32;
        let px = out.get_pixel(x, y).0;
        assert!((px[0] as i32 - 245).abs() <= 8, "got {px:?}");
        assert!((px[2] as i32 - 255).abs() <= 8, "got {px:?}");
    }

    #[test]
    fn test_device_caption_is_uppercased() {
        assert_eq!(device_caption(Device::Iphone), "IPHONE");
        assert_eq!(device_caption(Device::Ipad), "IPAD");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        let a = renderer.render(&source(320, 640), &shot(), Device::Ipad).unwrap();
        let b = renderer.render(&source(320, 640), &shot(), Device::Ipad).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_text_overflow_surfaces_geometry_error() {
        // A wide, very short canvas leaves no room for the panel under the
        // headline block at any plausible font metric.
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        let err = renderer.render(&source(2000, 50), &shot(), Device::Iphone);
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_sized_source_is_rejected() {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        assert!(renderer.render(&RgbaImage::new(0, 0), &shot(), Device::Iphone).is_err());
    }
}
