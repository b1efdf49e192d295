//! Core types: pixel geometry, physical dimensions, render configuration.
//!
//! Everything here is plain data shared by the card model, the geometry
//! engine and the text fitter.

pub mod config;
pub mod dimensions;
pub mod geometry;

pub use config::{GlyphPrecedence, RenderConfig};
pub use dimensions::{
    card_size, DrawSize, BORDER_CENTER_OFFSET, BORDER_START_OFFSET, CARD_SIZE, CARD_SIZE_PLAYTEST,
    DPI, DRAW_SIZE,
};
pub use geometry::{Rotation, RotationPair, Xy};
