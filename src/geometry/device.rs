//! Proportional geometry for the device-frame renderer.
//!
//! Every measurement is derived from the source screenshot's dimensions via
//! the ratio constants below, with minimum floors so tiny inputs stay
//! legible. The plan is a pure function of `(width, height)`: planning the
//! same input twice yields identical values.

use crate::error::{Result, ShotError};

use super::Rect;

// Tuning ratios. These are aesthetic constants; change them only with a
// visual check of the rendered output.
const BEZEL_RATIO: f64 = 0.055;
const BEZEL_MIN: i32 = 44;
const SHELL_RATIO: f64 = 0.010;
const SHELL_MIN: i32 = 10;
const PAD_X_RATIO: f64 = 0.19;
const PAD_X_MIN: i32 = 140;
const PAD_Y_RATIO: f64 = 0.09;
const PAD_Y_MIN: i32 = 170;
const BODY_RADIUS_RATIO: f64 = 0.14;
const SEAM_RADIUS_RATIO: f64 = 0.12;
const SCREEN_RADIUS_RATIO: f64 = 0.048;
const SCREEN_RADIUS_MIN: i32 = 44;
const CAVITY_MARGIN: i32 = 2;
const ISLAND_WIDTH_RATIO: f64 = 0.26;
const ISLAND_HEIGHT_RATIO: f64 = 0.029;
const ISLAND_HEIGHT_MIN: i32 = 52;
const ISLAND_TOP_RATIO: f64 = 0.20;
const ISLAND_TOP_MIN: i32 = 14;
const LENS_RADIUS_RATIO: f64 = 0.14;
const LENS_RADIUS_MIN: i32 = 6;
const LENS_INSET_RATIO: f64 = 0.7;
const BUTTON_WIDTH_RATIO: f64 = 0.004;
const BUTTON_WIDTH_MIN: i32 = 4;
const SHADOW_DX_RATIO: f64 = 0.008;
const SHADOW_DY_RATIO: f64 = 0.018;
const SHADOW_BLUR_RATIO: f64 = 0.03;
const SHADOW_BLUR_MIN: i32 = 18;
const EDGE_STROKE_RATIO: f64 = 0.003;
const SEAM_STROKE_RATIO: f64 = 0.0028;
const HIGHLIGHT_STROKE_RATIO: f64 = 0.0026;

/// Vertical spans of the side buttons as fractions of the chassis height:
/// (left edge?, start, end).
const BUTTONS: [(bool, f64, f64); 3] = [
    (false, 0.32, 0.52), // power, right edge
    (true, 0.24, 0.34),  // volume up
    (true, 0.38, 0.48),  // volume down
];

/// Derived geometry for one device-framed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePlan {
    pub source_w: u32,
    pub source_h: u32,

    /// Border between chassis edge and visible screen.
    pub bezel: i32,
    /// Thin outer rim suggesting metal edge thickness.
    pub shell: i32,

    /// Chassis rectangle in canvas coordinates.
    pub phone: Rect,
    pub canvas_w: u32,
    pub canvas_h: u32,

    pub body_radius: i32,
    pub seam_radius: i32,
    pub edge_stroke: i32,
    pub seam_stroke: i32,

    /// Screen rectangle (the pasted screenshot) in canvas coordinates.
    pub screen: Rect,
    pub screen_radius: i32,
    pub highlight_stroke: i32,

    /// Near-black backing slightly larger than the screen.
    pub cavity: Rect,
    pub cavity_radius: i32,

    pub island: Rect,
    pub lens_center: (i32, i32),
    pub lens_radius: i32,

    /// Side hardware buttons, thin width included in each rect.
    pub buttons: [Rect; 3],

    pub shadow_offset: (i32, i32),
    pub shadow_blur: i32,
}

impl DevicePlan {
    /// Plan the chassis geometry for a `width x height` screenshot.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ShotError::Geometry {
                message: format!("source image has degenerate dimensions {}x{}", width, height),
            });
        }

        let w = width as i32;
        let h = height as i32;

        let bezel = scaled(width, BEZEL_RATIO, BEZEL_MIN);
        let shell = scaled(width, SHELL_RATIO, SHELL_MIN);
        let phone_w = w + (bezel + shell) * 2;
        let phone_h = h + (bezel + shell) * 2;

        let pad_x = scaled(width, PAD_X_RATIO, PAD_X_MIN);
        let pad_y = scaled(height, PAD_Y_RATIO, PAD_Y_MIN);
        let canvas_w = (phone_w + pad_x * 2) as u32;
        let canvas_h = (phone_h + pad_y * 2) as u32;

        let phone = Rect::new(pad_x, pad_y, phone_w, phone_h);
        let body_radius = ratio(phone_w, BODY_RADIUS_RATIO);
        let seam_radius = ratio(phone_w, SEAM_RADIUS_RATIO);

        let screen = Rect::new(phone.x + shell + bezel, phone.y + shell + bezel, w, h);
        let screen_radius = scaled(width, SCREEN_RADIUS_RATIO, SCREEN_RADIUS_MIN);
        let cavity = screen.expand(CAVITY_MARGIN);
        let cavity_radius = screen_radius + 2 * CAVITY_MARGIN;

        let island_w = ratio(w, ISLAND_WIDTH_RATIO);
        let island_h = scaled(height, ISLAND_HEIGHT_RATIO, ISLAND_HEIGHT_MIN);
        let island = Rect::new(
            screen.x + (w - island_w) / 2,
            screen.y + scaled(bezel as u32, ISLAND_TOP_RATIO, ISLAND_TOP_MIN),
            island_w,
            island_h,
        );
        let lens_radius = scaled(island_h as u32, LENS_RADIUS_RATIO, LENS_RADIUS_MIN);
        let lens_center = (
            island.right() - ratio(island_h, LENS_INSET_RATIO),
            island.center_y(),
        );

        let side_w = scaled(width, BUTTON_WIDTH_RATIO, BUTTON_WIDTH_MIN);
        let buttons = BUTTONS.map(|(left, start, end)| {
            let x = if left {
                phone.x + 1 - side_w
            } else {
                phone.right() - shell - 1
            };
            let y0 = phone.y + ratio(phone_h, start);
            let y1 = phone.y + ratio(phone_h, end);
            Rect::new(x, y0, side_w, y1 - y0)
        });

        Ok(Self {
            source_w: width,
            source_h: height,
            bezel,
            shell,
            phone,
            canvas_w,
            canvas_h,
            body_radius,
            seam_radius,
            edge_stroke: scaled(width, EDGE_STROKE_RATIO, 2),
            seam_stroke: scaled(width, SEAM_STROKE_RATIO, 2),
            screen,
            screen_radius,
            highlight_stroke: scaled(width, HIGHLIGHT_STROKE_RATIO, 2),
            cavity,
            cavity_radius,
            island,
            lens_center,
            lens_radius,
            buttons,
            shadow_offset: (ratio(w, SHADOW_DX_RATIO), ratio(h, SHADOW_DY_RATIO)),
            shadow_blur: scaled(width, SHADOW_BLUR_RATIO, SHADOW_BLUR_MIN),
        })
    }
}

/// Round `base * ratio`.
fn ratio(base: i32, ratio: f64) -> i32 {
    (base as f64 * ratio).round() as i32
}

/// Round `base * ratio`, clamped to a minimum floor.
fn scaled(base: u32, r: f64, min: i32) -> i32 {
    ratio(base as i32, r).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_is_deterministic() {
        let a = DevicePlan::new(1170, 2532).unwrap();
        let b = DevicePlan::new(1170, 2532).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iphone_reference_dimensions() {
        // 1170x2532 is the 6.1" export size the pipeline was tuned against.
        let plan = DevicePlan::new(1170, 2532).unwrap();
        assert_eq!(plan.bezel, 64);
        assert_eq!(plan.shell, 12);
        assert_eq!(plan.phone.w, 1170 + 2 * (64 + 12));
        assert_eq!(plan.phone.w, 1322);
        assert_eq!(plan.screen.w, 1170);
        assert_eq!(plan.screen.h, 2532);
        // Screen sits shell+bezel inside the chassis on all sides.
        assert_eq!(plan.screen.x - plan.phone.x, 76);
        assert_eq!(plan.phone.right() - plan.screen.right(), 76);
    }

    #[test]
    fn test_floors_engage_on_small_input() {
        let plan = DevicePlan::new(64, 64).unwrap();
        assert_eq!(plan.bezel, BEZEL_MIN);
        assert_eq!(plan.shell, SHELL_MIN);
        assert_eq!(plan.screen_radius, SCREEN_RADIUS_MIN);
        assert_eq!(plan.island.h, ISLAND_HEIGHT_MIN);
        assert_eq!(plan.canvas_w, (64 + 2 * (44 + 10) + 2 * PAD_X_MIN) as u32);
    }

    #[test]
    fn test_linear_measurements_double_with_input() {
        // Dimensions chosen so every ratio product is integral, keeping
        // rounding out of the comparison; floors are inactive at this size.
        let plan = DevicePlan::new(5000, 10000).unwrap();
        let double = DevicePlan::new(10000, 20000).unwrap();

        assert_eq!(double.bezel, plan.bezel * 2);
        assert_eq!(double.shell, plan.shell * 2);
        assert_eq!(double.phone.x, plan.phone.x * 2);
        assert_eq!(double.phone.y, plan.phone.y * 2);
        assert_eq!(double.phone.w, plan.phone.w * 2);
        assert_eq!(double.canvas_w, plan.canvas_w * 2);
        assert_eq!(double.canvas_h, plan.canvas_h * 2);
        assert_eq!(double.screen_radius, plan.screen_radius * 2);
        assert_eq!(double.body_radius, plan.body_radius * 2);
        assert_eq!(double.island.w, plan.island.w * 2);
        assert_eq!(double.island.h, plan.island.h * 2);
        assert_eq!(double.shadow_blur, plan.shadow_blur * 2);
        assert_eq!(
            double.shadow_offset,
            (plan.shadow_offset.0 * 2, plan.shadow_offset.1 * 2)
        );
    }

    #[test]
    fn test_island_centred_in_screen() {
        let plan = DevicePlan::new(1170, 2532).unwrap();
        let left_gap = plan.island.x - plan.screen.x;
        let right_gap = plan.screen.right() - plan.island.right();
        assert!((left_gap - right_gap).abs() <= 1);
        // Lens sits near the right edge, inside the island.
        assert!(plan.lens_center.0 < plan.island.right());
        assert!(plan.lens_center.0 > plan.island.center_x());
    }

    #[test]
    fn test_buttons_hug_the_chassis_edges() {
        let plan = DevicePlan::new(1170, 2532).unwrap();
        let [power, vol_up, vol_down] = plan.buttons;
        assert!(power.x > plan.phone.center_x());
        assert!(vol_up.x < plan.phone.x);
        assert!(vol_down.y > vol_up.bottom());
        for b in plan.buttons {
            assert!(b.is_valid());
        }
    }

    #[test]
    fn test_zero_dimension_is_invalid_geometry() {
        assert!(matches!(
            DevicePlan::new(0, 100),
            Err(ShotError::Geometry { .. })
        ));
        assert!(matches!(
            DevicePlan::new(100, 0),
            Err(ShotError::Geometry { .. })
        ));
    }
}
