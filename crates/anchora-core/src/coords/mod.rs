//! Coordinate spaces and the vectors that live in them.
//!
//! Conventions:
//! - Origin top-left
//! - +X right, +Y down
//! - Every space is a per-axis scale of world pixels (no translation)
//!
//! The process-wide [`ScaleContext`] holds the factors. Install it once at
//! startup and replace it whole on viewport resize.

mod scale;
mod unit_vector;
mod units;
mod vec2;
mod viewport;

pub use scale::{ScaleContext, ScaleContextCell};
pub use unit_vector::UnitVector;
pub use units::Units;
pub use vec2::Vec2;
pub use viewport::Viewport;
