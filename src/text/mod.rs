//! Text measurement, wrapping, and glyph rendering.

pub mod builtin;
pub mod font;
pub mod layout;

pub use font::{FontBook, FontHandle, FontRole};
pub use layout::wrap;
