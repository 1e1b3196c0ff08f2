//! irform Validation Core
//!
//! Pure predicates for Iranian form fields (national code, IBAN, bank card,
//! mobile, ...) and generic formats (IP, username, alphanumeric), the numeric
//! helpers they share, and a registry exposing them as named rules.
//!
//! Predicates take `Option<&str>` and never panic; each one decides for itself
//! whether an absent or empty value passes.

pub mod file;
pub mod iranian;
pub mod network;
pub mod numeric;
pub mod rule;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_rules;

// Re-export all validators
pub use file::*;
pub use iranian::*;
pub use network::*;
pub use numeric::*;
pub use rule::*;
pub use string::*;
