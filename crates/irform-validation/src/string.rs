//! Character-class validators

use once_cell::sync::Lazy;
use regex::Regex;

/// Persian letters appended to the alphanumeric class by
/// [`is_alpha_numeric_with_persian`].
pub const PERSIAN_CHARS: &str = "\u{0600}-\u{06FF}\u{FB8A}\u{067E}\u{0686}\u{0698}\u{06AF}";

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username regex is valid"));

/// Escape caller-supplied extra characters so they can be embedded inside a
/// character class. `regex::escape` also covers the class operators `-`, `&`
/// and `~`.
fn escape_class_chars(includes: &[&str]) -> String {
    includes.iter().map(|extra| regex::escape(extra)).collect()
}

fn matches_class(value: &str, class: &str) -> bool {
    match Regex::new(&format!("^[{class}]+$")) {
        Ok(pattern) => pattern.is_match(value),
        Err(err) => {
            tracing::warn!(%err, "generated character class failed to compile");
            false
        }
    }
}

/// Latin letters and digits, plus any `includes` characters.
///
/// Absent or empty input is invalid.
///
/// # Examples
/// ```
/// use irform_validation::is_alpha_numeric;
/// assert!(is_alpha_numeric(Some("abc123"), &[]));
/// assert!(is_alpha_numeric(Some("abc-123"), &["-"]));
/// assert!(!is_alpha_numeric(Some("abc 123"), &[]));
/// assert!(!is_alpha_numeric(None, &[]));
/// ```
pub fn is_alpha_numeric(value: Option<&str>, includes: &[&str]) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return false;
    };

    let class = format!("a-zA-Z0-9{}", escape_class_chars(includes));
    matches_class(value, &class)
}

/// Latin letters, digits and Persian letters, plus any `includes` characters.
///
/// Absent or empty input is valid.
pub fn is_alpha_numeric_with_persian(value: Option<&str>, includes: &[&str]) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return true;
    };

    let class = format!("a-zA-Z0-9{PERSIAN_CHARS}{}", escape_class_chars(includes));
    matches_class(value, &class)
}

/// Letters, digits and underscores. Absent or empty input is valid.
pub fn is_valid_username(value: Option<&str>) -> bool {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => USERNAME_REGEX.is_match(v),
        None => true,
    }
}
