//! Concrete liquids and cups for Carafe.

mod error;

pub mod cup;
pub mod liquid;

pub use cup::{CeramicCup, CupConfig, CustomCup, PlasticCup};
pub use error::{CupError, LiquidError};
pub use liquid::{Coffee, CustomLiquid};
