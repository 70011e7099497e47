//! Proportional geometry for the marketing-slide renderer.
//!
//! The slide canvas has the same dimensions as the source screenshot; all
//! paddings, font sizes, and radii scale off those dimensions. The panel's
//! top edge depends on how much vertical space the wrapped text actually
//! consumed, so the plan exposes it as a function of that measurement
//! rather than a fixed field.

use crate::error::{Result, ShotError};

use super::Rect;

const SIDE_PADDING_RATIO: f64 = 0.055;
const TOP_PADDING_RATIO: f64 = 0.045;
const TEXT_GAP_RATIO: f64 = 0.018;
const BADGE_HEIGHT_RATIO: f64 = 0.05;
const BADGE_PAD_RATIO: f64 = 0.07;
const BADGE_INSET_X_RATIO: f64 = 0.028;
const BADGE_INSET_Y_RATIO: f64 = 0.17; // of badge height
const BADGE_FONT_RATIO: f64 = 0.027;
const BADGE_FONT_MIN: u32 = 26;
const HEADLINE_FONT_RATIO: f64 = 0.062;
const HEADLINE_FONT_MIN: u32 = 44;
const SUBTITLE_FONT_RATIO: f64 = 0.03;
const SUBTITLE_FONT_MIN: u32 = 26;
const DEVICE_FONT_RATIO: f64 = 0.025;
const DEVICE_FONT_MIN: u32 = 24;
const HEADLINE_SPACING_RATIO: f64 = 0.006;
const SUBTITLE_SPACING_RATIO: f64 = 0.004;
const SUBTITLE_GAP_RATIO: f64 = 0.012;
const PANEL_GAP_RATIO: f64 = 0.03;
const PANEL_BOTTOM_RATIO: f64 = 0.038;
const PANEL_RADIUS_RATIO: f64 = 0.05;
const PANEL_STROKE_RATIO: f64 = 0.003;
const CONTENT_INSET_RATIO: f64 = 0.028;
const SCREENSHOT_RADIUS_RATIO: f64 = 0.04;
const BORDER_STROKE_RATIO: f64 = 0.0025;
const SHADOW_OFFSET_RATIO: f64 = 0.006;
const SHADOW_OFFSET_MIN: i32 = 8;
const SHADOW_BLUR_RATIO: f64 = 0.008;
const SHADOW_BLUR_MIN: i32 = 6;

/// Derived geometry for one marketing slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketingPlan {
    pub canvas_w: u32,
    pub canvas_h: u32,

    pub side_padding: i32,
    pub top_padding: i32,
    /// Gap between the badge row and the headline block.
    pub text_gap: i32,

    pub badge_height: i32,
    /// Horizontal padding added around the measured badge label width.
    pub badge_pad: i32,
    pub badge_inset_x: i32,
    pub badge_inset_y: i32,

    pub badge_font: u32,
    pub headline_font: u32,
    pub subtitle_font: u32,
    pub device_font: u32,

    pub headline_spacing: i32,
    pub subtitle_spacing: i32,
    /// Gap between headline block and subtitle block.
    pub subtitle_gap: i32,
    /// Gap between subtitle block and the panel.
    pub panel_gap: i32,

    pub panel_bottom: i32,
    pub panel_radius: i32,
    pub panel_stroke: i32,
    pub content_inset: i32,
    pub screenshot_radius: i32,
    pub border_stroke: i32,

    pub shadow_offset: i32,
    pub shadow_blur: i32,
}

impl MarketingPlan {
    /// Plan slide geometry for a `width x height` canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ShotError::Geometry {
                message: format!("source image has degenerate dimensions {}x{}", width, height),
            });
        }

        let w = width as f64;
        let h = height as f64;
        let r = |v: f64| v.round() as i32;
        let badge_height = r(h * BADGE_HEIGHT_RATIO);

        Ok(Self {
            canvas_w: width,
            canvas_h: height,
            side_padding: r(w * SIDE_PADDING_RATIO),
            top_padding: r(h * TOP_PADDING_RATIO),
            text_gap: r(h * TEXT_GAP_RATIO),
            badge_height,
            badge_pad: r(w * BADGE_PAD_RATIO),
            badge_inset_x: r(w * BADGE_INSET_X_RATIO),
            badge_inset_y: r(badge_height as f64 * BADGE_INSET_Y_RATIO),
            badge_font: font_size(w, BADGE_FONT_RATIO, BADGE_FONT_MIN),
            headline_font: font_size(w, HEADLINE_FONT_RATIO, HEADLINE_FONT_MIN),
            subtitle_font: font_size(w, SUBTITLE_FONT_RATIO, SUBTITLE_FONT_MIN),
            device_font: font_size(w, DEVICE_FONT_RATIO, DEVICE_FONT_MIN),
            headline_spacing: r(h * HEADLINE_SPACING_RATIO),
            subtitle_spacing: r(h * SUBTITLE_SPACING_RATIO),
            subtitle_gap: r(h * SUBTITLE_GAP_RATIO),
            panel_gap: r(h * PANEL_GAP_RATIO),
            panel_bottom: height as i32 - r(h * PANEL_BOTTOM_RATIO),
            panel_radius: r(w * PANEL_RADIUS_RATIO),
            panel_stroke: r(w * PANEL_STROKE_RATIO).max(2),
            content_inset: r(w * CONTENT_INSET_RATIO),
            screenshot_radius: r(w * SCREENSHOT_RADIUS_RATIO),
            border_stroke: r(w * BORDER_STROKE_RATIO).max(2),
            shadow_offset: r(h * SHADOW_OFFSET_RATIO).max(SHADOW_OFFSET_MIN),
            shadow_blur: r(w * SHADOW_BLUR_RATIO).max(SHADOW_BLUR_MIN),
        })
    }

    /// Width available for wrapped text and the panel.
    pub fn text_width(&self) -> i32 {
        self.canvas_w as i32 - self.side_padding * 2
    }

    /// The device panel, given the bottom of the subtitle block.
    pub fn panel_rect(&self, text_bottom: i32) -> Result<Rect> {
        let top = text_bottom + self.panel_gap;
        let panel = Rect::new(
            self.side_padding,
            top,
            self.text_width(),
            self.panel_bottom - top,
        );
        if !panel.is_valid() {
            return Err(ShotError::Geometry {
                message: format!(
                    "panel rectangle is degenerate ({}x{}); text consumed the whole canvas",
                    panel.w, panel.h
                ),
            });
        }
        Ok(panel)
    }

    /// Inner rectangle of the panel where the screenshot is embedded.
    pub fn content_rect(&self, panel: Rect) -> Result<Rect> {
        let content = panel.inset(self.content_inset);
        if !content.is_valid() {
            return Err(ShotError::Geometry {
                message: format!(
                    "panel content rectangle is degenerate ({}x{})",
                    content.w, content.h
                ),
            });
        }
        Ok(content)
    }
}

/// Round `w * ratio`, clamped to a minimum point size.
fn font_size(w: f64, ratio: f64, min: u32) -> u32 {
    ((w * ratio).round() as u32).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_is_deterministic() {
        let a = MarketingPlan::new(1170, 2532).unwrap();
        let b = MarketingPlan::new(1170, 2532).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_measurements() {
        let plan = MarketingPlan::new(1170, 2532).unwrap();
        assert_eq!(plan.side_padding, 64);
        assert_eq!(plan.badge_height, 127);
        assert_eq!(plan.headline_font, 73);
        assert_eq!(plan.text_width(), 1170 - 128);
        assert_eq!(plan.panel_bottom, 2532 - 96);
    }

    #[test]
    fn test_font_floors_on_small_canvas() {
        let plan = MarketingPlan::new(200, 400).unwrap();
        assert_eq!(plan.badge_font, BADGE_FONT_MIN);
        assert_eq!(plan.headline_font, HEADLINE_FONT_MIN);
        assert_eq!(plan.subtitle_font, SUBTITLE_FONT_MIN);
        assert_eq!(plan.device_font, DEVICE_FONT_MIN);
    }

    #[test]
    fn test_panel_rect_from_text_bottom() {
        let plan = MarketingPlan::new(1170, 2532).unwrap();
        let panel = plan.panel_rect(800).unwrap();
        assert_eq!(panel.x, plan.side_padding);
        assert_eq!(panel.y, 800 + plan.panel_gap);
        assert_eq!(panel.bottom(), plan.panel_bottom);

        let content = plan.content_rect(panel).unwrap();
        assert_eq!(content, panel.inset(plan.content_inset));
    }

    #[test]
    fn test_degenerate_panel_is_invalid_geometry() {
        let plan = MarketingPlan::new(1170, 2532).unwrap();
        // Text bottom below the panel's fixed bottom edge leaves no room.
        assert!(matches!(
            plan.panel_rect(plan.panel_bottom + 10),
            Err(ShotError::Geometry { .. })
        ));
    }

    #[test]
    fn test_zero_dimension_is_invalid_geometry() {
        assert!(matches!(
            MarketingPlan::new(0, 10),
            Err(ShotError::Geometry { .. })
        ));
        assert!(matches!(
            MarketingPlan::new(10, 0),
            Err(ShotError::Geometry { .. })
        ));
    }
}
