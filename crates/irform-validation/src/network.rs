//! IP address validators

use once_cell::sync::Lazy;
use regex::Regex;

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}$")
        .expect("IPv4 regex is valid")
});

// Simplified: full 8-group form, or "::" followed by up to five groups.
static IPV6_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(([0-9a-fA-F]{1,4}:){7}([0-9a-fA-F]{1,4}|:)|::([0-9a-fA-F]{1,4}:){0,5}([0-9a-fA-F]{1,4}|:))$",
    )
    .expect("IPv6 regex is valid")
});

fn matches_ip(ip: &str) -> bool {
    IPV4_REGEX.is_match(ip) || IPV6_REGEX.is_match(ip)
}

/// IPv4 dotted quad or simplified IPv6 literal. Absent or empty input is valid.
///
/// # Examples
/// ```
/// use irform_validation::is_valid_ip;
/// assert!(is_valid_ip(Some("192.168.1.1")));
/// assert!(is_valid_ip(Some("::1")));
/// assert!(!is_valid_ip(Some("256.0.0.1")));
/// ```
pub fn is_valid_ip(value: Option<&str>) -> bool {
    match value.filter(|v| !v.is_empty()) {
        Some(ip) => matches_ip(ip),
        None => true,
    }
}

/// `ip:port`, split on the last `:`. Absent or empty input is valid.
pub fn is_valid_ip_port(value: Option<&str>) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return true;
    };

    let Some((ip, port)) = value.rsplit_once(':') else {
        return false;
    };

    matches_ip(ip) && is_valid_port(port)
}

/// Port must be a whole number in `1..=65535`; `"8080.0"` counts as 8080,
/// and `0x`, `0o` and `0b` prefixed literals are read in their radix.
fn is_valid_port(port: &str) -> bool {
    let port = port.trim();
    if port.is_empty() {
        return false;
    }

    if let Some(parsed) = parse_radix_literal(port) {
        return parsed.is_some_and(|n| (1..=65535).contains(&n));
    }

    match port.parse::<f64>() {
        Ok(n) => n.is_finite() && n.fract() == 0.0 && (1.0..=65535.0).contains(&n),
        Err(_) => false,
    }
}

/// `Some(..)` when `literal` carries a radix prefix, holding the value if the
/// digits after it are valid. Signs are not allowed after the prefix.
fn parse_radix_literal(literal: &str) -> Option<Option<u64>> {
    let prefix = literal.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &literal[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }

    // overflow means far outside the port range
    Some(Some(u64::from_str_radix(digits, radix).unwrap_or(u64::MAX)))
}
