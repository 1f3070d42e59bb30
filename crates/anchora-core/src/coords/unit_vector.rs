use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{ScaleContext, Units, Vec2};

/// 2D vector tagged with the coordinate space it is expressed in.
///
/// Binary operators never mix raw numbers from two spaces: the right operand is
/// converted into the left operand's unit first, and the result keeps the left
/// operand's unit.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitVector {
    pub x: f64,
    pub y: f64,
    pub unit: Units,
}

impl UnitVector {
    #[inline]
    pub const fn new(x: f64, y: f64, unit: Units) -> Self {
        Self { x, y, unit }
    }

    #[inline]
    pub const fn zero(unit: Units) -> Self {
        Self { x: 0.0, y: 0.0, unit }
    }

    #[inline]
    pub const fn from_vec2(v: Vec2, unit: Units) -> Self {
        Self { x: v.x, y: v.y, unit }
    }

    /// The raw pair, without its unit.
    #[inline]
    pub const fn raw(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Converts into `unit` using the process-wide [`ScaleContext`].
    #[inline]
    pub fn to(self, unit: Units) -> UnitVector {
        if unit == self.unit {
            return self;
        }
        self.to_in(unit, &ScaleContext::current())
    }

    /// Converts into `unit` using an explicit context.
    pub fn to_in(self, unit: Units, ctx: &ScaleContext) -> UnitVector {
        UnitVector::from_vec2(ctx.convert(self.raw(), self.unit, unit), unit)
    }

    #[inline]
    pub fn add_xy(self, x: f64, y: f64) -> UnitVector {
        UnitVector::new(self.x + x, self.y + y, self.unit)
    }

    #[inline]
    pub fn with_x(self, x: f64) -> UnitVector {
        UnitVector::new(x, self.y, self.unit)
    }

    #[inline]
    pub fn with_y(self, y: f64) -> UnitVector {
        UnitVector::new(self.x, y, self.unit)
    }

    /// Per-axis sign in {-1, 0, 1}.
    #[inline]
    pub fn sign(self) -> Vec2 {
        self.raw().sign()
    }

    #[inline]
    pub fn abs(self) -> UnitVector {
        UnitVector::new(self.x.abs(), self.y.abs(), self.unit)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compares after converting `other` into `self.unit`.
    pub fn approx_eq(self, other: UnitVector, eps: f64) -> bool {
        let other = other.to(self.unit);
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for UnitVector {
    /// Bare pairs are read as [`Units::WorldUnits`].
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        UnitVector::new(x, y, Units::WorldUnits)
    }
}

impl Add for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn add(self, rhs: UnitVector) -> UnitVector {
        let rhs = rhs.to(self.unit);
        UnitVector::new(self.x + rhs.x, self.y + rhs.y, self.unit)
    }
}

impl Sub for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn sub(self, rhs: UnitVector) -> UnitVector {
        let rhs = rhs.to(self.unit);
        UnitVector::new(self.x - rhs.x, self.y - rhs.y, self.unit)
    }
}

/// Component-wise product.
impl Mul for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn mul(self, rhs: UnitVector) -> UnitVector {
        let rhs = rhs.to(self.unit);
        UnitVector::new(self.x * rhs.x, self.y * rhs.y, self.unit)
    }
}

/// Component-wise scaling by a unitless factor.
impl Mul<Vec2> for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn mul(self, rhs: Vec2) -> UnitVector {
        UnitVector::new(self.x * rhs.x, self.y * rhs.y, self.unit)
    }
}

impl Mul<f64> for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn mul(self, rhs: f64) -> UnitVector {
        UnitVector::new(self.x * rhs, self.y * rhs, self.unit)
    }
}

impl Div<f64> for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn div(self, rhs: f64) -> UnitVector {
        UnitVector::new(self.x / rhs, self.y / rhs, self.unit)
    }
}

impl Neg for UnitVector {
    type Output = UnitVector;
    #[inline]
    fn neg(self) -> UnitVector {
        UnitVector::new(-self.x, -self.y, self.unit)
    }
}

impl AddAssign for UnitVector {
    #[inline]
    fn add_assign(&mut self, rhs: UnitVector) {
        *self = *self + rhs;
    }
}

impl SubAssign for UnitVector {
    #[inline]
    fn sub_assign(&mut self, rhs: UnitVector) {
        *self = *self - rhs;
    }
}

impl MulAssign for UnitVector {
    #[inline]
    fn mul_assign(&mut self, rhs: UnitVector) {
        *self = *self * rhs;
    }
}

impl MulAssign<Vec2> for UnitVector {
    #[inline]
    fn mul_assign(&mut self, rhs: Vec2) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for UnitVector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    const EPS: f64 = 1e-9;

    fn skewed() -> ScaleContext {
        ScaleContext::new(64.0, Viewport::new(1280.0, 720.0), Viewport::new(1000.0, 400.0))
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn round_trip_every_unit_pair() {
        let ctx = skewed();
        for from in Units::ALL {
            for to in Units::ALL {
                let v = UnitVector::new(12.5, -3.75, from);
                let back = v.to_in(to, &ctx).to_in(from, &ctx);
                assert_eq!(back.unit, from);
                assert!((back.x - v.x).abs() < EPS, "{from} -> {to}: {back:?}");
                assert!((back.y - v.y).abs() < EPS, "{from} -> {to}: {back:?}");
            }
        }
    }

    #[test]
    fn conversion_does_not_touch_source() {
        let v = UnitVector::new(1.0, 1.0, Units::WorldUnits);
        let px = v.to_in(Units::WorldPixels, &skewed());
        assert_eq!(v, UnitVector::new(1.0, 1.0, Units::WorldUnits));
        assert_eq!(px, UnitVector::new(64.0, 64.0, Units::WorldPixels));
    }

    #[test]
    fn to_same_unit_is_identity() {
        let v = UnitVector::new(7.0, 8.0, Units::ViewPixels);
        assert_eq!(v.to(Units::ViewPixels), v);
    }

    #[test]
    fn view_percentage_of_full_reference_is_one() {
        let v = UnitVector::new(1280.0, 720.0, Units::WorldPixels);
        let pct = v.to_in(Units::ViewPercentage, &skewed());
        assert!((pct.x - 1.0).abs() < EPS);
        assert!((pct.y - 1.0).abs() < EPS);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_converts_rhs_into_lhs_unit() {
        let lhs = UnitVector::new(10.0, 10.0, Units::WorldPixels);
        let rhs = UnitVector::new(0.5, 0.25, Units::WorldUnits);
        let expected = rhs.to(Units::WorldPixels);

        let sum = lhs + rhs;
        assert_eq!(sum.unit, Units::WorldPixels);
        assert!((sum.x - (10.0 + expected.x)).abs() < EPS);
        assert!((sum.y - (10.0 + expected.y)).abs() < EPS);
    }

    #[test]
    fn sub_keeps_lhs_unit() {
        let lhs = UnitVector::new(1.0, 1.0, Units::WorldUnits);
        let rhs = lhs.to(Units::ViewPixels);
        let diff = lhs - rhs;
        assert_eq!(diff.unit, Units::WorldUnits);
        assert!(diff.approx_eq(UnitVector::zero(Units::WorldUnits), EPS));
    }

    #[test]
    fn same_unit_arithmetic() {
        let a = UnitVector::new(2.0, 3.0, Units::WorldPixels);
        let b = UnitVector::new(4.0, -1.0, Units::WorldPixels);
        assert_eq!(a + b, UnitVector::new(6.0, 2.0, Units::WorldPixels));
        assert_eq!(a - b, UnitVector::new(-2.0, 4.0, Units::WorldPixels));
        assert_eq!(a * b, UnitVector::new(8.0, -3.0, Units::WorldPixels));
        assert_eq!(a * 2.0, UnitVector::new(4.0, 6.0, Units::WorldPixels));
        assert_eq!(a / 2.0, UnitVector::new(1.0, 1.5, Units::WorldPixels));
        assert_eq!(a * Vec2::new(-1.0, 0.0), UnitVector::new(-2.0, 0.0, Units::WorldPixels));
        assert_eq!(-a, UnitVector::new(-2.0, -3.0, Units::WorldPixels));
    }

    #[test]
    fn operators_leave_operands_untouched() {
        let a = UnitVector::new(2.0, 3.0, Units::WorldPixels);
        let b = UnitVector::new(1.0, 1.0, Units::WorldUnits);
        let _ = a + b;
        let _ = a * b;
        assert_eq!(a, UnitVector::new(2.0, 3.0, Units::WorldPixels));
        assert_eq!(b, UnitVector::new(1.0, 1.0, Units::WorldUnits));
    }

    #[test]
    fn assign_operators_match_binary_forms() {
        let a = UnitVector::new(2.0, 3.0, Units::WorldPixels);
        let b = UnitVector::new(0.01, 0.02, Units::WorldUnits);

        let mut v = a;
        v += b;
        assert_eq!(v, a + b);

        let mut v = a;
        v -= b;
        assert_eq!(v, a - b);

        let mut v = a;
        v *= Vec2::new(2.0, -1.0);
        assert_eq!(v, UnitVector::new(4.0, -3.0, Units::WorldPixels));

        let mut v = a;
        v *= 0.5;
        assert_eq!(v, UnitVector::new(1.0, 1.5, Units::WorldPixels));
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn add_xy_offsets_in_own_unit() {
        let v = UnitVector::new(1.0, 1.0, Units::ViewPercentage).add_xy(-0.25, 0.5);
        assert_eq!(v, UnitVector::new(0.75, 1.5, Units::ViewPercentage));
    }

    #[test]
    fn sign_and_abs() {
        let v = UnitVector::new(-4.0, 0.0, Units::WorldUnits);
        assert_eq!(v.sign(), Vec2::new(-1.0, 0.0));
        assert_eq!(v.abs(), UnitVector::new(4.0, 0.0, Units::WorldUnits));
    }

    #[test]
    fn bare_pair_is_world_units() {
        assert_eq!(UnitVector::from((1.0, 2.0)).unit, Units::WorldUnits);
    }

    #[test]
    fn approx_eq_across_units() {
        let v = UnitVector::new(0.5, 0.5, Units::WorldUnits);
        assert!(v.approx_eq(v.to(Units::ViewPercentage), EPS));
        assert!(!v.approx_eq(UnitVector::new(0.5, 0.5, Units::WorldPixels), EPS));
    }
}
