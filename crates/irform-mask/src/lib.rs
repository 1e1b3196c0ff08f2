//! irform Input Masks
//!
//! Resolves mask configurations against a token table and applies them with
//! a [`MaskEngine`]. The free functions at the crate root use the
//! process-wide token table and the built-in [`PatternEngine`].
//!
//! ```
//! use irform_mask::{mask, pattern_mask};
//!
//! let card = pattern_mask("####-####-####-####");
//! assert_eq!(mask("6037991234567893", &card).unwrap(), "6037-9912-3456-7893");
//! ```

pub mod engine;
pub mod error;
pub mod number;
pub mod options;
pub mod token;

pub use engine::*;
pub use error::*;
pub use number::*;
pub use options::*;
pub use token::*;

/// Mask `value` with the global tokens and the built-in engine.
pub fn mask(value: &str, config: &MaskConfig) -> Result<String, MaskError> {
    mask_with(&PatternEngine, &global_tokens(), value, config)
}

/// Mask `value` with an explicit engine and token table.
pub fn mask_with<E: MaskEngine + ?Sized>(
    engine: &E,
    tokens: &TokenMap,
    value: &str,
    config: &MaskConfig,
) -> Result<String, MaskError> {
    let options = resolve_options(tokens, config)?;
    Ok(engine.transform(value, &options))
}

/// Configuration for a fixed pattern.
pub fn pattern_mask(definition: impl Into<Definition>) -> MaskConfig {
    MaskConfig::Pattern(definition.into())
}

/// Configuration wrapping a ready-made option bundle.
pub fn custom_mask(options: MaskOptions) -> MaskConfig {
    MaskConfig::Custom(options)
}

/// Configuration for a grouped numeric input.
pub fn numeric_mask(params: &NumberParams) -> Result<MaskConfig, MaskError> {
    number_options(params).map(MaskConfig::Custom)
}
