//! garde custom validators for the named rules
//!
//! Each function plugs into garde's `custom` hook and reports the rule's
//! default message key on failure.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//! use irform_validation::garde_rules;
//!
//! #[derive(Validate)]
//! struct SignupForm {
//!     #[garde(custom(garde_rules::iranian_mobile))]
//!     mobile: String,
//!
//!     #[garde(custom(garde_rules::alnum(&["-", "_"])))]
//!     handle: String,
//! }
//! ```

use crate::rule::{FieldValue, Rule, RuleRegistry};

fn check(rule: &Rule, value: &str) -> garde::Result {
    if rule.check(FieldValue::Text(Some(value))) {
        Ok(())
    } else {
        Err(garde::Error::new(rule.name().default_message()))
    }
}

fn owned(includes: &[&str]) -> Vec<String> {
    includes.iter().map(|s| s.to_string()).collect()
}

/// Letters and digits plus `includes`.
pub fn alnum<'a>(includes: &'a [&'a str]) -> impl FnOnce(&str, &()) -> garde::Result + 'a {
    move |value: &str, _ctx: &()| check(&Rule::Alnum { includes: owned(includes) }, value)
}

/// Letters, digits and Persian letters plus `includes`.
pub fn alnumfa<'a>(includes: &'a [&'a str]) -> impl FnOnce(&str, &()) -> garde::Result + 'a {
    move |value: &str, _ctx: &()| check(&Rule::AlnumFa { includes: owned(includes) }, value)
}

pub fn ip(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::Ip, value)
}

pub fn ip_port(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IpPort, value)
}

pub fn iranian_bank_card(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianBankCard, value)
}

pub fn iranian_iban(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianIban, value)
}

pub fn iranian_id_number(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianIdNumber, value)
}

pub fn iranian_mobile(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianMobile, value)
}

pub fn iranian_national_code(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianNationalCode, value)
}

pub fn iranian_phone(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianPhone, value)
}

pub fn iranian_postal_code(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::IranianPostalCode, value)
}

pub fn username(value: &str, _ctx: &()) -> garde::Result {
    check(&Rule::Username, value)
}

/// Any rule, reporting the message registered in `registry`.
///
/// ```ignore
/// #[garde(custom(garde_rules::registered(&REGISTRY, &Rule::IranianIban)))]
/// iban: String,
/// ```
pub fn registered<'a>(
    registry: &'a RuleRegistry,
    rule: &'a Rule,
) -> impl FnOnce(&str, &()) -> garde::Result + 'a {
    move |value: &str, _ctx: &()| {
        registry
            .test(rule, value, None)
            .map_err(|err| garde::Error::new(err.to_string()))
    }
}
