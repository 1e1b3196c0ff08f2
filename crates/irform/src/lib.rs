//! # irform
//!
//! Validation and input masking for Iranian forms: national code, IBAN (Sheba),
//! bank card, mobile and landline numbers, postal code, plus generic IP,
//! username and alphanumeric checks.
//!
//! ## Quick Start
//!
//! ```
//! use irform::{Config, Rule};
//!
//! let registry = irform::init(&Config::default()).unwrap();
//!
//! assert!(registry.test(&Rule::IranianNationalCode, "0499370899", None).is_ok());
//! assert!(registry.test(&Rule::IranianMobile, "12345", None).is_err());
//!
//! let card = irform::pattern_mask("####-####-####-####");
//! assert_eq!(irform::mask("6037991234567893", &card).unwrap(), "6037-9912-3456-7893");
//! ```
//!
//! ## Features
//!
//! - **`default`** - Validators, rule registry and masks
//! - **`nutype`** - Include pre-built validated types (IranianMobile, IranianIban, etc.)
//! - **`full`** - All features enabled
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports the component crates:
//!
//! - **`irform-validation`** - Predicates, numeric helpers and the rule registry
//! - **`irform-mask`** - Token table, mask resolution and the built-in engine
//! - **`irform-types`** - Pre-built validated types using nutype (optional)
//!
//! and adds the TOML configuration layer ([`Config`], [`init`]).

pub mod config;

use anyhow::{Context, Result};

pub use config::{Config, MaskSection};

// Re-export validation (always available)
pub use irform_validation as validation;
pub use irform_validation::{
    extract_numeric, format_number, parse_number, unify_separator, FieldValue, FileInfo,
    FileMeta, Rule, RuleError, RuleName, RuleRegistry,
};

// Re-export masks (always available)
pub use irform_mask as masks;
pub use irform_mask::{
    custom_mask, mask, numeric_mask, pattern_mask, register_token, MaskConfig, MaskError,
    NumberParams,
};

// Re-export types module (if feature enabled)
#[cfg(feature = "nutype")]
pub use irform_types as types;

/// Register every rule and the configured mask tokens.
///
/// Message overrides from `[messages]` replace the built-in defaults; an
/// unknown rule name there is an error. Tokens from `[mask.tokens]` go into
/// the global token table, so call this once during start-up.
pub fn init(config: &Config) -> Result<RuleRegistry> {
    let mut registry = RuleRegistry::with_all_rules();

    for (rule, message) in &config.messages {
        let name: RuleName = rule
            .parse()
            .with_context(|| format!("Invalid [messages] entry: {:?}", rule))?;
        registry.register(name, Some(message.as_str()));
    }

    for (token, pattern) in &config.mask.tokens {
        register_token(token, pattern)
            .with_context(|| format!("Invalid [mask.tokens] entry: {:?}", token))?;
    }

    tracing::info!(
        rules = registry.rule_names().len(),
        tokens = config.mask.tokens.len(),
        "irform initialised"
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_registers_all_rules() {
        let registry = init(&Config::default()).unwrap();
        assert_eq!(registry.rule_names().len(), RuleName::ALL.len());
        assert_eq!(registry.default_message(RuleName::IranianIban), Some("iban"));
    }

    #[test]
    fn test_init_applies_message_overrides() {
        let mut config = Config::default();
        config
            .messages
            .insert("iranianMobile".to_string(), "bad mobile".to_string());

        let registry = init(&config).unwrap();
        let err = registry.test(&Rule::IranianMobile, "123", None).unwrap_err();
        assert_eq!(err.to_string(), "bad mobile");
    }

    #[test]
    fn test_init_rejects_unknown_rule() {
        let mut config = Config::default();
        config.messages.insert("email".to_string(), "x".to_string());
        let err = init(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown rule `email`"));
    }

    #[test]
    fn test_init_registers_tokens() {
        let mut config = Config::default();
        config
            .mask
            .tokens
            .insert("init_vowel".to_string(), "[aeiou]".to_string());

        init(&config).unwrap();
        let masked = mask("xaybe", &pattern_mask("{init_vowel}{init_vowel}")).unwrap();
        assert_eq!(masked, "ae");
    }

    #[test]
    fn test_init_rejects_bad_token_pattern() {
        let mut config = Config::default();
        config
            .mask
            .tokens
            .insert("init_broken".to_string(), "[a-".to_string());
        assert!(init(&config).is_err());
    }
}
