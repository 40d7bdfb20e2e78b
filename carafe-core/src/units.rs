//! Temperature helpers built on `uom`.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension methods for `ThermodynamicTemperature`.
///
/// A `TemperatureInterval` (a temperature change) is a distinct quantity from
/// a `ThermodynamicTemperature` (a specific temperature value). Both are
/// converted to kelvin before they are combined, so inputs may use any
/// supported units.
pub trait TemperatureOps {
    /// Returns the temperature lowered by `interval`.
    ///
    /// A negative interval raises the temperature.
    #[must_use]
    fn cooled_by(self, interval: TemperatureInterval) -> Self;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn cooled_by(self, interval: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() - interval.get::<delta_kelvin>(),
        )
    }
}
