//! Liquid and cup capabilities for Carafe, with a type-erased cup handle.
//!
//! A [`Cup`] names the liquid it holds through an associated type, so two
//! different cup implementations are different types even when they hold the
//! same liquid. [`AnyCup`] hides the implementation and keeps only the liquid
//! type, which lets mixed cups live in one `Vec<AnyCup<L>>`.

mod any_cup;
mod cup;
mod liquid;

pub mod units;

pub use any_cup::AnyCup;
pub use cup::Cup;
pub use liquid::Liquid;
