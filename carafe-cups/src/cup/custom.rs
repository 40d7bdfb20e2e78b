use carafe_core::{Cup, Liquid};
use uom::{
    ConstZero,
    si::{f64::TemperatureInterval, temperature_interval::kelvin},
};

use super::pour;
use crate::CupError;

/// Configuration for a [`CustomCup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CupConfig {
    /// Temperature drop applied to the liquid on every fill.
    pub heat_loss: TemperatureInterval,
}

impl Default for CupConfig {
    /// A perfectly insulated cup.
    fn default() -> Self {
        Self {
            heat_loss: TemperatureInterval::ZERO,
        }
    }
}

impl CupConfig {
    /// Validates that the heat loss is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the heat loss is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        let loss = self.heat_loss.get::<kelvin>();
        if !loss.is_finite() || loss < 0.0 {
            return Err("heat_loss must be finite and non-negative");
        }
        Ok(())
    }
}

/// A cup made of whatever material its [`CupConfig`] describes.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomCup<L> {
    config: CupConfig,
    liquid: Option<L>,
}

impl<L> CustomCup<L> {
    /// Creates an empty cup with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CupError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: CupConfig) -> Result<Self, CupError> {
        config
            .validate()
            .map_err(|reason| CupError::InvalidConfig { reason })?;

        Ok(Self {
            config,
            liquid: None,
        })
    }

    /// Returns the configuration this cup was built with.
    #[must_use]
    pub fn config(&self) -> &CupConfig {
        &self.config
    }
}

impl<L: Liquid> Cup for CustomCup<L> {
    type Liquid = L;

    fn liquid(&self) -> Option<&L> {
        self.liquid.as_ref()
    }

    fn fill(&mut self, liquid: L) {
        self.liquid = Some(pour("custom", liquid, self.config.heat_loss));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::kelvin as abs_kelvin,
    };

    use crate::Coffee;

    fn coffee_at(kelvins: f64) -> Coffee {
        Coffee::new(ThermodynamicTemperature::new::<abs_kelvin>(kelvins))
    }

    #[test]
    fn default_config_keeps_temperature() {
        let mut cup = CustomCup::new(CupConfig::default()).unwrap();
        cup.fill(coffee_at(350.0));

        assert_relative_eq!(cup.liquid().unwrap().temperature().get::<abs_kelvin>(), 350.0);
    }

    #[test]
    fn configured_heat_loss_is_applied() {
        let config = CupConfig {
            heat_loss: TemperatureInterval::new::<delta_fahrenheit>(9.0),
        };
        let mut cup = CustomCup::new(config).unwrap();
        cup.fill(coffee_at(350.0));

        assert_relative_eq!(
            cup.liquid().unwrap().temperature().get::<abs_kelvin>(),
            345.0,
            epsilon = 1e-9
        );
        assert_eq!(cup.config(), &config);
    }

    #[test]
    fn rejects_invalid_heat_loss() {
        for loss in [-1.0, f64::NAN, f64::INFINITY] {
            let config = CupConfig {
                heat_loss: TemperatureInterval::new::<kelvin>(loss),
            };
            assert!(config.validate().is_err());
            assert_eq!(
                CustomCup::<Coffee>::new(config),
                Err(CupError::InvalidConfig {
                    reason: "heat_loss must be finite and non-negative",
                })
            );
        }
    }
}
