//! Pure geometry planning: every layer's position and size derived from the
//! source image's dimensions. No I/O, no rendering.

pub mod device;
pub mod marketing;
pub mod rect;

pub use device::DevicePlan;
pub use marketing::MarketingPlan;
pub use rect::Rect;
