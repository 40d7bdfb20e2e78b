use crate::{AnyCup, Liquid};

/// A vessel holding at most one liquid.
///
/// A cup starts empty. Each call to [`Cup::fill`] replaces whatever it held
/// before, after applying the cup's own deterministic change to the incoming
/// liquid's temperature. Viscosity and color always pass through unchanged.
///
/// ## Storing mixed cups
///
/// Cups with the same `Liquid` but different implementations are different
/// types. Use [`Cup::into_any()`] (or [`AnyCup::new()`]) to get a handle that
/// depends only on the liquid type:
///
/// ```
/// use carafe_core::{AnyCup, Cup, Liquid};
/// use uom::si::{
///     dynamic_viscosity::centipoise,
///     f64::{DynamicViscosity, ThermodynamicTemperature},
///     thermodynamic_temperature::kelvin,
/// };
///
/// struct Tea(f64);
///
/// impl Liquid for Tea {
///     fn temperature(&self) -> ThermodynamicTemperature {
///         ThermodynamicTemperature::new::<kelvin>(self.0)
///     }
///     fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
///         self.0 = temperature.get::<kelvin>();
///     }
///     fn viscosity(&self) -> DynamicViscosity {
///         DynamicViscosity::new::<centipoise>(1.0)
///     }
///     fn color(&self) -> &str {
///         "Amber"
///     }
/// }
///
/// #[derive(Default)]
/// struct Mug(Option<Tea>);
///
/// impl Cup for Mug {
///     type Liquid = Tea;
///
///     fn liquid(&self) -> Option<&Tea> {
///         self.0.as_ref()
///     }
///
///     fn fill(&mut self, liquid: Tea) {
///         self.0 = Some(liquid);
///     }
/// }
///
/// let mut cups: Vec<AnyCup<Tea>> = vec![Mug::default().into_any()];
/// cups[0].fill(Tea(350.0));
/// assert_eq!(cups[0].liquid().map(|tea| tea.0), Some(350.0));
/// ```
pub trait Cup {
    type Liquid: Liquid;

    /// Returns the liquid currently in the cup, or `None` if it was never filled.
    fn liquid(&self) -> Option<&Self::Liquid>;

    /// Fills the cup, replacing any liquid it already holds.
    ///
    /// Implementations may only change the liquid's temperature, and must do
    /// so the same way every time.
    fn fill(&mut self, liquid: Self::Liquid);

    /// Moves this cup into an [`AnyCup`] that hides its concrete type.
    fn into_any(self) -> AnyCup<Self::Liquid>
    where
        Self: Sized + 'static,
    {
        AnyCup::new(self)
    }
}
