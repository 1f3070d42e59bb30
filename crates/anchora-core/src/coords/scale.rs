use std::sync::{Once, PoisonError, RwLock};

use state::InitCell;

use super::{Units, Vec2, Viewport};
use crate::error::TransformError;

/// Conversion state shared by every [`UnitVector`](super::UnitVector).
///
/// - `world_scale`: world pixels per world unit
/// - `reference`: world-pixel size of the design surface
/// - `viewport`: current rendering surface, in display pixels
///
/// `WorldPixels` is the hub: every unit converts by a per-axis factor to
/// world pixels and back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleContext {
    pub world_scale: f64,
    pub reference: Viewport,
    pub viewport: Viewport,
}

impl Default for ScaleContext {
    /// 1920x1080 reference shown 1:1, one world unit spanning its height.
    fn default() -> Self {
        Self {
            world_scale: 1080.0,
            reference: Viewport::new(1920.0, 1080.0),
            viewport: Viewport::new(1920.0, 1080.0),
        }
    }
}

static GLOBAL: InitCell<ScaleContextCell> = InitCell::new();
static IMPLICIT_DEFAULT: Once = Once::new();

impl ScaleContext {
    #[inline]
    pub const fn new(world_scale: f64, reference: Viewport, viewport: Viewport) -> Self {
        Self { world_scale, reference, viewport }
    }

    #[inline]
    pub fn with_world_scale(mut self, world_scale: f64) -> Self {
        self.world_scale = world_scale;
        self
    }

    #[inline]
    pub fn with_reference(mut self, reference: Viewport) -> Self {
        self.reference = reference;
        self
    }

    #[inline]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Rejects contexts whose factors would divide by zero or go non-finite.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !(self.world_scale.is_finite() && self.world_scale > 0.0) {
            return Err(TransformError::InvalidScaleContext(format!(
                "world scale must be positive and finite, got {}",
                self.world_scale
            )));
        }
        if !self.reference.is_valid() {
            return Err(TransformError::InvalidScaleContext(format!(
                "reference surface {}x{} is not a valid size",
                self.reference.width, self.reference.height
            )));
        }
        if !self.viewport.is_valid() {
            return Err(TransformError::InvalidScaleContext(format!(
                "viewport {}x{} is not a valid size",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(())
    }

    /// World pixels covered by one `unit`, per axis.
    pub fn world_pixels_per(&self, unit: Units) -> Vec2 {
        match unit {
            Units::WorldUnits => Vec2::splat(self.world_scale),
            Units::WorldPixels => Vec2::splat(1.0),
            Units::ViewPixels => Vec2::new(
                self.reference.width / self.viewport.width,
                self.reference.height / self.viewport.height,
            ),
            Units::ViewPercentage => Vec2::new(self.reference.width, self.reference.height),
        }
    }

    /// Re-expresses the raw pair `v` from `from` into `to`.
    pub fn convert(&self, v: Vec2, from: Units, to: Units) -> Vec2 {
        if from == to {
            return v;
        }
        let src = self.world_pixels_per(from);
        let dst = self.world_pixels_per(to);
        Vec2::new(v.x * src.x / dst.x, v.y * src.y / dst.y)
    }

    /// Snapshot of the process-wide context.
    ///
    /// Falls back to [`ScaleContext::default`] until [`ScaleContext::install`]
    /// has been called. The fallback is reported once.
    pub fn current() -> ScaleContext {
        match GLOBAL.try_get() {
            Some(cell) => cell.snapshot(),
            None => {
                IMPLICIT_DEFAULT.call_once(|| {
                    log::warn!("scale context used before install; falling back to defaults");
                });
                ScaleContext::default()
            }
        }
    }

    /// Installs `self` as the process-wide context, replacing any previous one
    /// as a whole.
    pub fn install(self) -> Result<(), TransformError> {
        self.validate()?;
        if GLOBAL.set(ScaleContextCell::new_unchecked(self)) {
            log::debug!("scale context installed: {:?}", self);
        } else {
            let previous = installed_cell().replace(self)?;
            log::debug!("scale context replaced: {:?} -> {:?}", previous, self);
        }
        Ok(())
    }

    /// Swaps in a new viewport, keeping the rest of the process-wide context.
    ///
    /// Intended for window resize events.
    pub fn resize_viewport(viewport: Viewport) -> Result<(), TransformError> {
        match GLOBAL.try_get() {
            Some(cell) => {
                let previous = cell.set_viewport(viewport)?;
                log::debug!(
                    "viewport resized: {}x{} -> {}x{}",
                    previous.viewport.width,
                    previous.viewport.height,
                    viewport.width,
                    viewport.height
                );
                Ok(())
            }
            None => ScaleContext::default().with_viewport(viewport).install(),
        }
    }
}

/// The installed cell. `set` losing a race only means another thread is
/// still storing its cell, so wait for it to land.
fn installed_cell() -> &'static ScaleContextCell {
    loop {
        if let Some(cell) = GLOBAL.try_get() {
            return cell;
        }
        std::thread::yield_now();
    }
}

/// Lock-guarded [`ScaleContext`] that is only ever replaced as a whole.
///
/// Readers copy the value out, so a conversion never mixes fields from two
/// different contexts.
#[derive(Debug, Default)]
pub struct ScaleContextCell {
    inner: RwLock<ScaleContext>,
}

impl ScaleContextCell {
    pub fn new(ctx: ScaleContext) -> Result<Self, TransformError> {
        ctx.validate()?;
        Ok(Self::new_unchecked(ctx))
    }

    fn new_unchecked(ctx: ScaleContext) -> Self {
        Self { inner: RwLock::new(ctx) }
    }

    pub fn snapshot(&self) -> ScaleContext {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the whole context. Returns the previous one.
    pub fn replace(&self, ctx: ScaleContext) -> Result<ScaleContext, TransformError> {
        ctx.validate()?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *guard, ctx))
    }

    /// Replaces the viewport under a single write lock. Returns the previous
    /// context.
    pub fn set_viewport(&self, viewport: Viewport) -> Result<ScaleContext, TransformError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.with_viewport(viewport);
        next.validate()?;
        Ok(std::mem::replace(&mut *guard, next))
    }
}
