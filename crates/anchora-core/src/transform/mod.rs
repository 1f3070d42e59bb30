//! Anchor-relative rectangles.
//!
//! A [`Rect`] stores its top-left corner and its size. Every accessor taking
//! a [`Referencial`] reads or writes as if that anchor were the origin.

mod pixel_quad;
mod rect;
mod referencial;
mod unit_based;

pub use pixel_quad::PixelQuad;
pub use rect::{AnchorConversion, Rect};
pub use referencial::{FlipAxis, Referencial};
pub use unit_based::UnitBased;
