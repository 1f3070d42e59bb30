//! Anchora core.
//!
//! Unit-tagged 2D vectors and rectangles addressed through nine anchor points.
//!
//! ```
//! use anchora_core::coords::{UnitVector, Units};
//! use anchora_core::transform::{Rect, Referencial};
//!
//! let mut panel = Rect::from_xywh(0.0, 0.0, 100.0, 100.0, Units::WorldPixels);
//! panel
//!     .set_anchor_point_position(UnitVector::new(150.0, 50.0, Units::WorldPixels), Referencial::BottomRight)
//!     .unwrap();
//! assert_eq!(panel.size(), UnitVector::new(150.0, 50.0, Units::WorldPixels));
//! assert_eq!(panel.position(Referencial::TopLeft), UnitVector::new(0.0, 0.0, Units::WorldPixels));
//! ```

pub mod coords;
pub mod logging;
pub mod transform;

mod error;

pub use error::TransformError;
