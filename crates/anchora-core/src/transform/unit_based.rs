use crate::coords::Units;

/// Geometry that has a working unit and re-expresses itself when it changes.
pub trait UnitBased {
    fn working_unit(&self) -> Units;

    /// Switches the working unit and lets the implementor recompute.
    fn set_working_unit(&mut self, unit: Units) {
        log::trace!("working unit {} -> {}", self.working_unit(), unit);
        self.on_unit_changed(unit);
    }

    /// Re-expresses stored values in `unit`. The geometry must not move.
    fn on_unit_changed(&mut self, unit: Units);
}
