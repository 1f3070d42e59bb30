use crate::coords::{UnitVector, Units, Vec2};
use crate::error::TransformError;

use super::{PixelQuad, Referencial, UnitBased};

/// Direction of [`Rect::transform_anchor`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnchorConversion {
    /// Top-left position -> position of the anchor.
    FromCanonical,
    /// Position of the anchor -> top-left position.
    ToCanonical,
}

/// Axis-aligned rectangle with unit-tagged position and size.
///
/// `position` is always the top-left corner. `size` may live in another unit
/// and may be negative on either axis (a mirrored rectangle).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    position: UnitVector,
    size: UnitVector,
}

impl Rect {
    #[inline]
    pub const fn new(position: UnitVector, size: UnitVector) -> Self {
        Self { position, size }
    }

    #[inline]
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64, unit: Units) -> Self {
        Self {
            position: UnitVector::new(x, y, unit),
            size: UnitVector::new(w, h, unit),
        }
    }

    /// Shifts `vec` between the top-left corner and anchor `r`.
    ///
    /// The offset is `offset_fraction(r) * size`, with size expressed in
    /// `vec`'s unit. The result keeps `vec`'s unit.
    pub fn transform_anchor(
        &self,
        vec: UnitVector,
        r: Referencial,
        direction: AnchorConversion,
    ) -> UnitVector {
        let factor = match direction {
            AnchorConversion::FromCanonical => 1.0,
            AnchorConversion::ToCanonical => -1.0,
        };
        let offset = self.size.to(vec.unit) * r.offset_fraction() * factor;
        vec + offset
    }

    // ── position ──────────────────────────────────────────────────────────

    /// Position of anchor `r`, in the rectangle's working unit.
    #[inline]
    pub fn position(&self, r: Referencial) -> UnitVector {
        self.transform_anchor(self.position, r, AnchorConversion::FromCanonical)
    }

    /// Moves the rectangle so that anchor `r` lands on `value`.
    pub fn set_position(&mut self, value: UnitVector, r: Referencial) {
        let value = value.to(self.position.unit);
        self.position = self.transform_anchor(value, r, AnchorConversion::ToCanonical);
    }

    #[inline]
    pub fn x(&self, r: Referencial) -> f64 {
        self.position(r).x
    }

    #[inline]
    pub fn y(&self, r: Referencial) -> f64 {
        self.position(r).y
    }

    /// Horizontal counterpart of [`Rect::set_position`]; `x` is in the
    /// working unit.
    pub fn set_x(&mut self, x: f64, r: Referencial) {
        let anchored = self.position.with_x(x);
        self.position.x = self.transform_anchor(anchored, r, AnchorConversion::ToCanonical).x;
    }

    /// Vertical counterpart of [`Rect::set_position`]; `y` is in the working
    /// unit.
    pub fn set_y(&mut self, y: f64, r: Referencial) {
        let anchored = self.position.with_y(y);
        self.position.y = self.transform_anchor(anchored, r, AnchorConversion::ToCanonical).y;
    }

    /// Translates the rectangle. No anchor involved.
    #[inline]
    pub fn translate(&mut self, delta: UnitVector) {
        self.position += delta;
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> UnitVector {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Resizes while anchor `r` stays where it is.
    pub fn set_size(&mut self, size: UnitVector, r: Referencial) {
        let size = size.to(self.size.unit);
        self.resize_around(r, |current| *current = size);
    }

    /// Multiplies the size per axis while anchor `r` stays where it is.
    pub fn scale(&mut self, factor: Vec2, r: Referencial) {
        self.resize_around(r, |current| *current *= factor);
    }

    /// `width` is in the size's unit.
    pub fn set_width(&mut self, width: f64, r: Referencial) {
        self.resize_around(r, |current| current.x = width);
    }

    /// `height` is in the size's unit.
    pub fn set_height(&mut self, height: f64, r: Referencial) {
        self.resize_around(r, |current| current.y = height);
    }

    fn resize_around(&mut self, r: Referencial, resize: impl FnOnce(&mut UnitVector)) {
        let pinned = self.position(r);
        resize(&mut self.size);
        self.set_position(pinned, r);
    }

    /// Sign of width and height in {-1, 0, 1}. Negative means mirrored.
    #[inline]
    pub fn scale_factor(&self) -> Vec2 {
        self.size.sign()
    }

    // ── anchor points ─────────────────────────────────────────────────────

    /// Drags anchor `r` to `target`, keeping the opposite anchor fixed.
    ///
    /// Corners move both axes. Edge midpoints only move their own axis; the
    /// other axis keeps its position and extent. Dragging past the opposite
    /// anchor yields a negative size.
    ///
    /// `Center` has no opposite to pin and is rejected without touching the
    /// rectangle.
    pub fn set_anchor_point_position(
        &mut self,
        target: UnitVector,
        r: Referencial,
    ) -> Result<(), TransformError> {
        if r.is_center() {
            return Err(TransformError::UnanchoredReferencial {
                referencial: r,
                operation: "set_anchor_point_position",
            });
        }

        let unit = self.position.unit;
        let target = target.to(unit);
        let pinned = self.position(r.opposite());
        let stretched = ((pinned - target) * r.resize_sign()).to(self.size.unit);

        if r.constrains_x() {
            self.size.x = stretched.x;
        }
        if r.constrains_y() {
            self.size.y = stretched.y;
        }

        let fraction = r.offset_fraction();
        let size = self.size.to(unit);
        if r.constrains_x() {
            self.position.x = target.x - fraction.x * size.x;
        }
        if r.constrains_y() {
            self.position.y = target.y - fraction.y * size.y;
        }

        log::trace!("anchor {r} dragged to ({}, {}) {unit}", target.x, target.y);
        Ok(())
    }

    /// All nine anchors, row-major from the top-left, expressed in `unit`.
    pub fn anchor_points(&self, unit: Units) -> [(Referencial, UnitVector); 9] {
        Referencial::ALL.map(|r| (r, self.position(r).to(unit)))
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Axis-aligned overlap test.
    ///
    /// Both rectangles are compared in world pixels whatever their own units,
    /// so `a.intersects(&b) == b.intersects(&a)`. Touching edges do not count.
    /// Mirrored rectangles are compared by the area they cover.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (ca, ha) = self.center_and_half_extent(Units::WorldPixels);
        let (cb, hb) = other.center_and_half_extent(Units::WorldPixels);
        (ca.x - cb.x).abs() < ha.x + hb.x && (ca.y - cb.y).abs() < ha.y + hb.y
    }

    fn center_and_half_extent(&self, unit: Units) -> (UnitVector, UnitVector) {
        let size = self.size.to(unit);
        let center = self.position.to(unit) + size * 0.5;
        (center, size.abs() * 0.5)
    }

    /// Snapshot in display pixels for renderers.
    pub fn to_pixel_quad(&self) -> PixelQuad {
        let origin = self.position.to(Units::ViewPixels);
        let size = self.size.to(Units::ViewPixels);
        PixelQuad::new(
            [origin.x as f32, origin.y as f32],
            [size.x as f32, size.y as f32],
        )
    }
}

impl UnitBased for Rect {
    fn working_unit(&self) -> Units {
        self.position.unit
    }

    fn on_unit_changed(&mut self, unit: Units) {
        self.position = self.position.to(unit);
        self.size = self.size.to(unit);
    }
}
