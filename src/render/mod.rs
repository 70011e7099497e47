//! Compositing primitives and the two render pipelines.

pub mod draw;
pub mod frame;
pub mod layer;
pub mod marketing;
pub mod png;
pub mod shadow;

pub use frame::render_frame;
pub use layer::{Layer, LayerStack};
pub use marketing::MarketingRenderer;
pub use png::write_png;
