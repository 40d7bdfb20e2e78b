use carafe_core::{Cup, Liquid};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

use super::pour;

/// A plastic cup, which takes 10 K from whatever is poured into it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlasticCup<L> {
    liquid: Option<L>,
}

impl<L> PlasticCup<L> {
    /// Temperature drop applied on every fill, in kelvins.
    pub const HEAT_LOSS_K: f64 = 10.0;

    /// Creates an empty cup.
    #[must_use]
    pub fn new() -> Self {
        Self { liquid: None }
    }
}

impl<L> Default for PlasticCup<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Liquid> Cup for PlasticCup<L> {
    type Liquid = L;

    fn liquid(&self) -> Option<&L> {
        self.liquid.as_ref()
    }

    fn fill(&mut self, liquid: L) {
        let loss = TemperatureInterval::new::<kelvin>(Self::HEAT_LOSS_K);
        self.liquid = Some(pour("plastic", liquid, loss));
    }
}
