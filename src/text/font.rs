//! Font loading, caching, and glyph rasterization.
//!
//! System fonts are tried in preference order per role; when none of the
//! candidates exist (common in CI containers) the renderer falls back to the
//! embedded bitmap font so output stays deterministic everywhere.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use fontdue::{Font, FontSettings};
use image::RgbaImage;

use crate::types::Colour;

use super::builtin;

/// Weight class requested by a render pass. Each role has its own candidate
/// list so bold headlines and regular body text can come from different files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Bold,
    Regular,
}

const BOLD_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Avenir.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
];

enum FontFace {
    Truetype(Font),
    Builtin,
}

/// A face bound to a pixel size. Cheap to clone; the parsed font is shared.
#[derive(Clone)]
pub struct FontHandle {
    face: Arc<FontFace>,
    size: u32,
}

impl FontHandle {
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        match &*self.face {
            FontFace::Truetype(font) => text
                .chars()
                .map(|ch| font.metrics(ch, self.size as f32).advance_width)
                .sum(),
            FontFace::Builtin => builtin::measure(text, builtin::scale_for(self.size)),
        }
    }

    /// Distance from the top of a line box to the baseline.
    pub fn ascent(&self) -> i32 {
        match &*self.face {
            FontFace::Truetype(font) => {
                let lm = font
                    .horizontal_line_metrics(self.size as f32)
                    .map(|m| m.ascent)
                    .unwrap_or(self.size as f32 * 0.8);
                lm.round() as i32
            }
            FontFace::Builtin => builtin::GLYPH_H * builtin::scale_for(self.size),
        }
    }

    /// Vertical step between consecutive baselines.
    pub fn line_height(&self) -> i32 {
        match &*self.face {
            FontFace::Truetype(font) => {
                let lm = font.horizontal_line_metrics(self.size as f32);
                match lm {
                    Some(m) => (m.ascent - m.descent + m.line_gap).round() as i32,
                    None => (self.size as f32 * 1.2).round() as i32,
                }
            }
            FontFace::Builtin => {
                (builtin::GLYPH_H + builtin::DESCENT) * builtin::scale_for(self.size)
            }
        }
    }

    /// Draw one line of text with its baseline at `baseline`, blending
    /// glyph coverage over whatever is already in `img`.
    pub fn draw(&self, img: &mut RgbaImage, x: i32, baseline: i32, text: &str, colour: Colour) {
        match &*self.face {
            FontFace::Truetype(font) => {
                let mut pen = x as f32;
                for ch in text.chars() {
                    let (metrics, bitmap) = font.rasterize(ch, self.size as f32);
                    let glyph_x = pen.round() as i32 + metrics.xmin;
                    let glyph_y = baseline - (metrics.height as i32 + metrics.ymin);
                    for gy in 0..metrics.height {
                        for gx in 0..metrics.width {
                            let cov = bitmap[gy * metrics.width + gx];
                            if cov == 0 {
                                continue;
                            }
                            blend_coverage(
                                img,
                                glyph_x + gx as i32,
                                glyph_y + gy as i32,
                                colour,
                                cov as f32 / 255.0,
                            );
                        }
                    }
                    pen += metrics.advance_width;
                }
            }
            FontFace::Builtin => {
                builtin::draw_line(img, x, baseline, text, builtin::scale_for(self.size), colour)
            }
        }
    }
}

/// Blend `colour` into a single pixel with the given coverage, src-over.
pub(crate) fn blend_coverage(img: &mut RgbaImage, x: i32, y: i32, colour: Colour, cov: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let sa = colour.a as f32 / 255.0 * cov.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }
    for i in 0..3 {
        let s = [colour.r, colour.g, colour.b][i] as f32;
        let d = dst.0[i] as f32;
        dst.0[i] = ((s * sa + d * da * (1.0 - sa)) / out_a).round() as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}

/// Lazily-loaded font cache keyed by role and pixel size.
///
/// Candidate paths are probed once per role; the parsed `fontdue::Font` is
/// shared between all sizes of that role through `Arc`.
pub struct FontBook {
    faces: HashMap<FontRole, Arc<FontFace>>,
    handles: HashMap<(FontRole, u32), FontHandle>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
            handles: HashMap::new(),
        }
    }

    /// Resolve a handle for the role at a pixel size, loading on first use.
    pub fn resolve(&mut self, role: FontRole, size: u32) -> FontHandle {
        if let Some(handle) = self.handles.get(&(role, size)) {
            return handle.clone();
        }
        let face = self
            .faces
            .entry(role)
            .or_insert_with(|| Arc::new(load_face(role)))
            .clone();
        let handle = FontHandle { face, size };
        self.handles.insert((role, size), handle.clone());
        handle
    }
}

fn load_face(role: FontRole) -> FontFace {
    let candidates = match role {
        FontRole::Bold => BOLD_CANDIDATES,
        FontRole::Regular => REGULAR_CANDIDATES,
    };
    for path in candidates {
        if let Some(font) = try_load(Path::new(path)) {
            return FontFace::Truetype(font);
        }
    }
    FontFace::Builtin
}

fn try_load(path: &Path) -> Option<Font> {
    let bytes = fs::read(path).ok()?;
    Font::from_bytes(bytes, FontSettings::default()).ok()
}
