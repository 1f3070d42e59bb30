/// Size of a pixel surface.
///
/// Used both for the current display surface (display pixels) and for the
/// reference design surface that world pixels are laid out against.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
