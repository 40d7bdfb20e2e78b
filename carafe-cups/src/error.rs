use thiserror::Error;

/// Errors that may occur when creating a [`CustomLiquid`].
///
/// [`CustomLiquid`]: crate::CustomLiquid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiquidError {
    /// The viscosity was negative.
    #[error("viscosity must be non-negative, got {0} Pa·s")]
    NegativeViscosity(f64),

    /// The viscosity was NaN or infinite.
    ///
    /// A NaN payload never compares equal, so match on the variant instead of
    /// using `==` when the cause may be NaN.
    #[error("viscosity must be finite, got {0} Pa·s")]
    NonFiniteViscosity(f64),

    /// The color was empty or only whitespace.
    #[error("color must not be empty")]
    EmptyColor,
}

/// Errors that may occur when creating a cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CupError {
    /// The cup configuration failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
