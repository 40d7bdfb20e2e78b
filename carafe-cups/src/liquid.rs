mod coffee;
mod custom;

pub use coffee::Coffee;
pub use custom::CustomLiquid;
