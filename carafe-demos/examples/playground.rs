//! # Cups of Coffee
//!
//! Pours the same coffee into a ceramic cup and a plastic cup, stored side by
//! side as `AnyCup<Coffee>`, then does the same with a second collection built
//! through `Cup::into_any` that also holds a custom double-walled cup.
//!
//! ## Running the Example
//!
//! ```sh
//! RUST_LOG=trace cargo run --example playground
//! ```

use std::error::Error;

use carafe_core::{AnyCup, Cup, Liquid};
use carafe_cups::{CeramicCup, Coffee, CupConfig, CustomCup, PlasticCup};
use tracing::info;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Box<dyn Error>> {
    carafe_demos::init_tracing("info")?;

    let coffee = Coffee::new(ThermodynamicTemperature::new::<degree_celsius>(10.0));

    let mut cups_of_coffee: Vec<AnyCup<Coffee>> = vec![
        AnyCup::new(CeramicCup::<Coffee>::new()),
        AnyCup::new(PlasticCup::<Coffee>::new()),
    ];

    let double_walled = CustomCup::<Coffee>::new(CupConfig {
        heat_loss: TemperatureInterval::new::<kelvin>(0.5),
    })?;
    let mut more_cups: Vec<AnyCup<Coffee>> = vec![
        CeramicCup::<Coffee>::new().into_any(),
        PlasticCup::<Coffee>::new().into_any(),
        double_walled.into_any(),
    ];

    let collections = [
        ("cups_of_coffee", &mut cups_of_coffee),
        ("more_cups", &mut more_cups),
    ];

    for (name, cups) in collections {
        for (index, cup) in cups.iter_mut().enumerate() {
            cup.fill(coffee);

            if let Some(liquid) = cup.liquid() {
                info!(
                    collection = name,
                    index,
                    temperature_c = liquid.temperature().get::<degree_celsius>(),
                    color = liquid.color(),
                    "poured coffee"
                );
            }
        }
    }

    Ok(())
}
