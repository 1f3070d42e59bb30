use std::fmt;
use std::str::FromStr;

use crate::coords::Vec2;
use crate::error::TransformError;

/// One of the nine anchor points of a rectangle.
///
/// Laid out row-major on a 3x3 grid starting at the top-left corner. Every
/// classification below is a table lookup indexed by the discriminant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Referencial {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Axis to mirror an anchor across.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlipAxis {
    /// Left <-> right.
    Horizontal,
    /// Top <-> bottom.
    Vertical,
    Both,
}

use Referencial::*;

const NAMES: [&str; 9] = [
    "TopLeft", "Top", "TopRight", "Left", "Center", "Right", "BottomLeft", "Bottom", "BottomRight",
];

const OFFSET_FRACTION: [Vec2; 9] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(1.0, 0.5),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(1.0, 1.0),
];

const OPPOSITE: [Referencial; 9] = [
    BottomRight, Bottom, BottomLeft, Right, Center, Left, TopRight, Top, TopLeft,
];

// +1 where the anchor sits at fraction 0, -1 at fraction 1, 0 on a midline.
const RESIZE_SIGN: [Vec2; 9] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(-1.0, -1.0),
];

impl Referencial {
    pub const ALL: [Referencial; 9] = [
        TopLeft, Top, TopRight, Left, Center, Right, BottomLeft, Bottom, BottomRight,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn from_grid(col: usize, row: usize) -> Referencial {
        Self::ALL[row * 3 + col]
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Distance from the top-left corner as a fraction of the size, per axis.
    #[inline]
    pub const fn offset_fraction(self) -> Vec2 {
        OFFSET_FRACTION[self.index()]
    }

    /// The anchor on the other side of the rectangle. `Center` maps to itself.
    #[inline]
    pub const fn opposite(self) -> Referencial {
        OPPOSITE[self.index()]
    }

    /// Per-axis multiplier turning `opposite - anchor` into a size.
    ///
    /// Zero on the axes the anchor does not constrain.
    #[inline]
    pub const fn resize_sign(self) -> Vec2 {
        RESIZE_SIGN[self.index()]
    }

    #[inline]
    pub fn constrains_x(self) -> bool {
        self.resize_sign().x != 0.0
    }

    #[inline]
    pub fn constrains_y(self) -> bool {
        self.resize_sign().y != 0.0
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        self.constrains_x() && self.constrains_y()
    }

    /// Edge midpoint: exactly one constrained axis.
    #[inline]
    pub fn is_on_side(self) -> bool {
        self.constrains_x() != self.constrains_y()
    }

    #[inline]
    pub fn is_center(self) -> bool {
        self == Center
    }

    #[inline]
    pub fn is_on_left_side(self) -> bool {
        self.offset_fraction().x == 0.0
    }

    #[inline]
    pub fn is_on_right_side(self) -> bool {
        self.offset_fraction().x == 1.0
    }

    #[inline]
    pub fn is_on_top_side(self) -> bool {
        self.offset_fraction().y == 0.0
    }

    #[inline]
    pub fn is_on_bottom_side(self) -> bool {
        self.offset_fraction().y == 1.0
    }

    /// Mirrors the anchor. Midline anchors stay put on the mirrored axis.
    pub const fn flip(self, axis: FlipAxis) -> Referencial {
        let col = self.index() % 3;
        let row = self.index() / 3;
        match axis {
            FlipAxis::Horizontal => Self::from_grid(2 - col, row),
            FlipAxis::Vertical => Self::from_grid(col, 2 - row),
            FlipAxis::Both => Self::from_grid(2 - col, 2 - row),
        }
    }
}

impl fmt::Display for Referencial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Referencial {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Referencial::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| TransformError::UnknownReferencial(s.to_owned()))
    }
}
