use carafe_core::Liquid;
use uom::si::{
    dynamic_viscosity::centipoise,
    f64::{DynamicViscosity, ThermodynamicTemperature},
};

/// Black coffee.
///
/// Only the temperature varies; every cup of coffee has a viscosity of
/// 3.4 cP and is black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coffee {
    pub temperature: ThermodynamicTemperature,
}

impl Coffee {
    /// Viscosity of coffee, in centipoise.
    pub const VISCOSITY_CP: f64 = 3.4;

    /// Color of coffee.
    pub const COLOR: &'static str = "Black";

    /// Creates coffee at the given temperature.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature) -> Self {
        Self { temperature }
    }
}

impl Liquid for Coffee {
    fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature = temperature;
    }

    fn viscosity(&self) -> DynamicViscosity {
        DynamicViscosity::new::<centipoise>(Self::VISCOSITY_CP)
    }

    fn color(&self) -> &str {
        Self::COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn fixed_properties() {
        let coffee = Coffee::new(ThermodynamicTemperature::new::<degree_celsius>(85.0));

        assert_relative_eq!(coffee.viscosity().get::<centipoise>(), 3.4, epsilon = 1e-12);
        assert_eq!(coffee.color(), "Black");
    }

    #[test]
    fn temperature_is_mutable() {
        let mut coffee = Coffee::new(ThermodynamicTemperature::new::<degree_celsius>(85.0));
        coffee.set_temperature(ThermodynamicTemperature::new::<degree_celsius>(60.0));

        assert_relative_eq!(
            coffee.temperature().get::<degree_celsius>(),
            60.0,
            epsilon = 1e-12
        );
    }
}
