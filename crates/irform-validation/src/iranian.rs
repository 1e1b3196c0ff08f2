//! Iranian identifier validators
//!
//! Every validator here runs on the digit-extracted form of its input, so
//! separators such as spaces and dashes are ignored.

use crate::numeric::extract_numeric;

const BANK_CARD_LEN: usize = 16;
const IBAN_DIGITS: usize = 24;
const IBAN_COUNTRY: &str = "IR";
const NATIONAL_CODE_LEN: usize = 10;
const POSTAL_CODE_LEN: usize = 10;
const ID_NUMBER_MAX_LEN: usize = 10;

/// Digit-extracted form of a present, non-empty input.
fn digits_of(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| extract_numeric(Some(v)))
}

/// Iranian bank card: exactly 16 digits passing the Luhn checksum.
///
/// Absent or empty input is invalid.
///
/// # Examples
/// ```
/// use irform_validation::is_valid_iranian_bank_card;
/// assert!(is_valid_iranian_bank_card(Some("6037-9912-3456-7893")));
/// assert!(!is_valid_iranian_bank_card(Some("6037-9912-3456-7894")));
/// ```
pub fn is_valid_iranian_bank_card(value: Option<&str>) -> bool {
    let Some(digits) = digits_of(value) else {
        return false;
    };

    digits.len() == BANK_CARD_LEN && luhn_checksum(&digits)
}

/// Luhn mod-10 check over a digit string: from the right, every second digit
/// is doubled (minus 9 when above 9) and the total must divide by 10.
fn luhn_checksum(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Iranian IBAN (شبا): `IR` followed by 24 digits with a valid mod-97 check.
///
/// The `IR` prefix is optional in the input. Absent or empty input is invalid.
pub fn is_valid_iranian_iban(value: Option<&str>) -> bool {
    let Some(digits) = digits_of(value) else {
        return false;
    };

    if digits.len() != IBAN_DIGITS {
        return false;
    }

    let iban = format!("{IBAN_COUNTRY}{digits}");
    let (head, tail) = iban.split_at(4);
    let rearranged = format!("{tail}{head}");

    iban_mod97(&rearranged) == Some(1)
}

/// Remainder of the IBAN numeric form modulo 97. Letters expand to their
/// two-digit value (`A` = 10 .. `Z` = 35); any other character is rejected.
fn iban_mod97(rearranged: &str) -> Option<u32> {
    rearranged.chars().try_fold(0u32, |acc, ch| match ch {
        '0'..='9' => Some((acc * 10 + ch.to_digit(10)?) % 97),
        'A'..='Z' => {
            let value = u32::from(ch) - 55;
            Some((acc * 100 + value) % 97)
        }
        _ => None,
    })
}

/// Iranian birth certificate number: 1 to 10 digits.
///
/// Absent or empty input is invalid.
pub fn is_valid_iranian_id_number(value: Option<&str>) -> bool {
    digits_of(value).is_some_and(|d| (1..=ID_NUMBER_MAX_LEN).contains(&d.len()))
}

/// Iranian national code (کد ملی): 10 digits with a weighted mod-11 check digit.
///
/// Absent or empty input is valid.
///
/// # Examples
/// ```
/// use irform_validation::is_valid_iranian_national_code;
/// assert!(is_valid_iranian_national_code(Some("0499370899")));
/// assert!(!is_valid_iranian_national_code(Some("0499370898")));
/// assert!(is_valid_iranian_national_code(None));
/// ```
pub fn is_valid_iranian_national_code(value: Option<&str>) -> bool {
    let Some(code) = digits_of(value) else {
        return true;
    };

    if code.len() != NATIONAL_CODE_LEN {
        return false;
    }

    let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();
    let check = digits[9];
    let sum: u32 = digits[..9]
        .iter()
        .zip((2u32..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    let remainder = sum % 11;

    if remainder < 2 {
        check == remainder
    } else {
        check == 11 - remainder
    }
}

/// Iranian mobile: `09` followed by 9 digits. Absent or empty input is invalid.
///
/// # Examples
/// ```
/// use irform_validation::is_valid_iranian_mobile;
/// assert!(is_valid_iranian_mobile(Some("0912-345-6789")));
/// assert!(!is_valid_iranian_mobile(Some("9123456789")));
/// ```
pub fn is_valid_iranian_mobile(value: Option<&str>) -> bool {
    digits_of(value).is_some_and(|d| d.len() == 11 && d.starts_with("09"))
}

/// Iranian landline: `0`, a non-zero area digit, then 9 digits.
///
/// Absent or empty input is invalid.
pub fn is_valid_iranian_phone(value: Option<&str>) -> bool {
    digits_of(value).is_some_and(|d| {
        let bytes = d.as_bytes();
        bytes.len() == 11 && bytes[0] == b'0' && bytes[1] != b'0'
    })
}

/// Iranian postal code: exactly 10 digits. Absent or empty input is invalid.
pub fn is_valid_iranian_postal_code(value: Option<&str>) -> bool {
    digits_of(value).is_some_and(|d| d.len() == POSTAL_CODE_LEN)
}
