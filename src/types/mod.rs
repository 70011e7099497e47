//! Core value types shared across the pipelines.

pub mod colour;
pub mod deck;

pub use colour::Colour;
pub use deck::{builtin_deck, load_deck, validate_deck, Device, GradientSpec, ShotDescriptor};
