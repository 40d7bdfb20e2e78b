mod ceramic;
mod custom;
mod plastic;

pub use ceramic::CeramicCup;
pub use custom::{CupConfig, CustomCup};
pub use plastic::PlasticCup;

use carafe_core::{Liquid, units::TemperatureOps};
use tracing::trace;
use uom::si::{f64::TemperatureInterval, thermodynamic_temperature::kelvin};

/// Cools `liquid` by the heat it loses to a cup's walls.
fn pour<L: Liquid>(kind: &'static str, mut liquid: L, heat_loss: TemperatureInterval) -> L {
    let poured = liquid.temperature();
    let settled = poured.cooled_by(heat_loss);
    liquid.set_temperature(settled);

    trace!(
        cup = kind,
        poured_k = poured.get::<kelvin>(),
        settled_k = settled.get::<kelvin>(),
        "filled cup"
    );

    liquid
}
