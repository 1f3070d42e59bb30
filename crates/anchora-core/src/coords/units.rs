use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// Coordinate space a [`UnitVector`](super::UnitVector) is expressed in.
///
/// Every space is a per-axis linear scale of [`Units::WorldPixels`], so the
/// same conversion applies to positions and to extents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Units {
    /// Resolution independent gameplay space.
    #[default]
    WorldUnits,
    /// Pixels of the simulated world, laid out against the reference surface.
    WorldPixels,
    /// Pixels of the current rendering surface.
    ViewPixels,
    /// Fraction of the current rendering surface, `0..1` per axis.
    ViewPercentage,
}

impl Units {
    pub const ALL: [Units; 4] = [
        Units::WorldUnits,
        Units::WorldPixels,
        Units::ViewPixels,
        Units::ViewPercentage,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Units::WorldUnits => "WorldUnits",
            Units::WorldPixels => "WorldPixels",
            Units::ViewPixels => "ViewPixels",
            Units::ViewPercentage => "ViewPercentage",
        }
    }

    /// `true` for spaces whose values depend on the current viewport.
    pub const fn is_view_relative(self) -> bool {
        matches!(self, Units::ViewPixels | Units::ViewPercentage)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Units {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| TransformError::UnknownUnit(s.to_owned()))
    }
}
