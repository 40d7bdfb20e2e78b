use carafe_core::{Cup, Liquid};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

use super::pour;

/// A ceramic cup, which takes 1 K from whatever is poured into it.
#[derive(Debug, Clone, PartialEq)]
pub struct CeramicCup<L> {
    liquid: Option<L>,
}

impl<L> CeramicCup<L> {
    /// Temperature drop applied on every fill, in kelvins.
    pub const HEAT_LOSS_K: f64 = 1.0;

    /// Creates an empty cup.
    #[must_use]
    pub fn new() -> Self {
        Self { liquid: None }
    }
}

impl<L> Default for CeramicCup<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Liquid> Cup for CeramicCup<L> {
    type Liquid = L;

    fn liquid(&self) -> Option<&L> {
        self.liquid.as_ref()
    }

    fn fill(&mut self, liquid: L) {
        let loss = TemperatureInterval::new::<kelvin>(Self::HEAT_LOSS_K);
        self.liquid = Some(pour("ceramic", liquid, loss));
    }
}
