//! shotkit - App screenshot compositing pipeline
//!
//! A library for rendering raw app screenshots into device-framed PNGs and
//! finished marketing slides, deterministically and fully offline.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod geometry;
pub mod render;
pub mod text;
pub mod types;

pub use discovery::{natural_index, plan_shots, scan_screenshots, ShotJob, ShotPlan};
pub use error::{Result, ShotError};
pub use geometry::{DevicePlan, MarketingPlan, Rect};
pub use render::{render_frame, write_png, Layer, LayerStack, MarketingRenderer};
pub use text::{wrap, FontBook, FontHandle, FontRole};
pub use types::{builtin_deck, load_deck, validate_deck, Colour, Device, GradientSpec, ShotDescriptor};
