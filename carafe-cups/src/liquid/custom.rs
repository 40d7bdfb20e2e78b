use carafe_core::Liquid;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, ThermodynamicTemperature},
};

use crate::LiquidError;

/// User-defined liquid.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomLiquid {
    temperature: ThermodynamicTemperature,
    viscosity: DynamicViscosity,
    color: String,
}

impl CustomLiquid {
    /// Creates a liquid with the given properties.
    ///
    /// # Errors
    ///
    /// Returns a [`LiquidError`] if the viscosity is negative or non-finite,
    /// or if the color is blank.
    pub fn new(
        temperature: ThermodynamicTemperature,
        viscosity: DynamicViscosity,
        color: impl Into<String>,
    ) -> Result<Self, LiquidError> {
        let mu = viscosity.get::<pascal_second>();
        if !mu.is_finite() {
            return Err(LiquidError::NonFiniteViscosity(mu));
        }
        if mu < 0.0 {
            return Err(LiquidError::NegativeViscosity(mu));
        }

        let color = color.into();
        if color.trim().is_empty() {
            return Err(LiquidError::EmptyColor);
        }

        Ok(Self {
            temperature,
            viscosity,
            color,
        })
    }
}

impl Liquid for CustomLiquid {
    fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature = temperature;
    }

    fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{dynamic_viscosity::centipoise, thermodynamic_temperature::degree_celsius};

    fn warm() -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(40.0)
    }

    #[test]
    fn valid_liquid() {
        let honey = CustomLiquid::new(
            warm(),
            DynamicViscosity::new::<pascal_second>(10.0),
            "Gold",
        )
        .unwrap();

        assert_eq!(honey.color(), "Gold");
        assert_eq!(honey.viscosity(), DynamicViscosity::new::<pascal_second>(10.0));
    }

    #[test]
    fn zero_viscosity_is_allowed() {
        let result = CustomLiquid::new(warm(), DynamicViscosity::new::<centipoise>(0.0), "Clear");
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_bad_viscosity() {
        let result = CustomLiquid::new(
            warm(),
            DynamicViscosity::new::<pascal_second>(-1.0),
            "Clear",
        );
        assert_eq!(result, Err(LiquidError::NegativeViscosity(-1.0)));

        let result = CustomLiquid::new(
            warm(),
            DynamicViscosity::new::<pascal_second>(f64::INFINITY),
            "Clear",
        );
        assert_eq!(result, Err(LiquidError::NonFiniteViscosity(f64::INFINITY)));
    }

    #[test]
    fn rejects_nan_viscosity() {
        let result = CustomLiquid::new(
            warm(),
            DynamicViscosity::new::<pascal_second>(f64::NAN),
            "Clear",
        );
        assert!(matches!(
            result,
            Err(LiquidError::NonFiniteViscosity(mu)) if mu.is_nan()
        ));
    }

    #[test]
    fn rejects_blank_color() {
        let result = CustomLiquid::new(warm(), DynamicViscosity::new::<centipoise>(1.0), "  ");
        assert_eq!(result, Err(LiquidError::EmptyColor));
    }
}
