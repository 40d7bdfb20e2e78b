use uom::si::f64::{DynamicViscosity, ThermodynamicTemperature};

/// Capability of a liquid that can be poured into a [`Cup`].
///
/// Temperature is the only mutable property; viscosity and color are fixed
/// when the liquid is created.
///
/// [`Cup`]: crate::Cup
pub trait Liquid {
    /// Returns the current temperature.
    fn temperature(&self) -> ThermodynamicTemperature;

    /// Sets the temperature.
    fn set_temperature(&mut self, temperature: ThermodynamicTemperature);

    /// Returns the dynamic viscosity.
    fn viscosity(&self) -> DynamicViscosity;

    /// Returns the color name.
    fn color(&self) -> &str;
}
