//! Validated newtypes for Iranian form fields
//!
//! Each type wraps a `String` and can only be constructed from a value the
//! matching `irform-validation` predicate accepts. Unlike the bare predicates,
//! which let an absent field pass for several rules, these types always
//! reject the empty string: a constructed value is a present, valid value.
//!
//! # Example
//!
//! ```
//! use irform_types::{IranianMobile, IranianNationalCode};
//!
//! assert!(IranianMobile::try_new("09121234567".to_string()).is_ok());
//! assert!(IranianNationalCode::try_new("0499370898".to_string()).is_err());
//! ```
//!
//! All types serialize as plain strings, so the same type can sit on a form
//! struct on the server and in WebAssembly.

use irform_validation::{
    is_valid_ip, is_valid_ip_port, is_valid_iranian_bank_card, is_valid_iranian_iban,
    is_valid_iranian_id_number, is_valid_iranian_mobile, is_valid_iranian_national_code,
    is_valid_iranian_phone, is_valid_iranian_postal_code, is_valid_username,
};
use nutype::nutype;

fn present(s: &str, predicate: fn(Option<&str>) -> bool) -> bool {
    !s.is_empty() && predicate(Some(s))
}

fn is_mobile(s: &str) -> bool {
    present(s, is_valid_iranian_mobile)
}

fn is_national_code(s: &str) -> bool {
    present(s, is_valid_iranian_national_code)
}

fn is_bank_card(s: &str) -> bool {
    present(s, is_valid_iranian_bank_card)
}

fn is_iban(s: &str) -> bool {
    present(s, is_valid_iranian_iban)
}

fn is_phone(s: &str) -> bool {
    present(s, is_valid_iranian_phone)
}

fn is_postal_code(s: &str) -> bool {
    present(s, is_valid_iranian_postal_code)
}

fn is_id_number(s: &str) -> bool {
    present(s, is_valid_iranian_id_number)
}

fn is_username(s: &str) -> bool {
    present(s, is_valid_username)
}

fn is_ip(s: &str) -> bool {
    present(s, is_valid_ip)
}

fn is_ip_port(s: &str) -> bool {
    present(s, is_valid_ip_port)
}

// =============================================================================
// Iranian identity and contact
// =============================================================================

/// Mobile number: 11 digits starting with `09`.
#[nutype(
    sanitize(trim),
    validate(predicate = is_mobile),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianMobile(String);

/// Landline: 11 digits, leading `0`, area code not starting with `0`.
#[nutype(
    sanitize(trim),
    validate(predicate = is_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianPhone(String);

/// Ten-digit national code with a valid check digit.
#[nutype(
    sanitize(trim),
    validate(predicate = is_national_code),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianNationalCode(String);

/// Birth certificate number, 1 to 10 digits.
#[nutype(
    sanitize(trim),
    validate(predicate = is_id_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianIdNumber(String);

/// Ten-digit postal code.
#[nutype(
    sanitize(trim),
    validate(predicate = is_postal_code),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianPostalCode(String);

// =============================================================================
// Banking
// =============================================================================

/// 16-digit bank card passing the Luhn check. Separators are allowed.
#[nutype(
    sanitize(trim),
    validate(predicate = is_bank_card),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianBankCard(String);

/// Sheba (IBAN) number, with or without the `IR` prefix.
#[nutype(
    sanitize(trim),
    validate(predicate = is_iban),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IranianIban(String);

// =============================================================================
// Accounts and network
// =============================================================================

/// ASCII letters, digits and underscore.
#[nutype(
    validate(predicate = is_username),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Username(String);

/// IPv4 or IPv6 address.
#[nutype(
    sanitize(trim),
    validate(predicate = is_ip),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IpAddress(String);

/// `address:port` with a port in 1..=65535.
#[nutype(
    sanitize(trim),
    validate(predicate = is_ip_port),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IpPort(String);
