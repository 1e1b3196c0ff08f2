//! Numeric input masks
//!
//! Builds a [`MaskOptions`] bundle for free-length numbers with digit
//! grouping, an optional fraction and affixes such as a currency sign.

use irform_validation::group_thousands;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MaskError;
use crate::options::{Mask, MaskOptions};

/// Parameters for [`number_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberParams {
    /// Maximum fraction digits. `0` disallows a fraction.
    pub precision: usize,
    pub decimal_separator: char,
    pub thousand_separator: String,
    pub allow_negative: bool,
    pub prefix: String,
    pub postfix: String,
}

impl Default for NumberParams {
    fn default() -> Self {
        Self {
            precision: 0,
            decimal_separator: '.',
            thousand_separator: ",".to_string(),
            allow_negative: true,
            prefix: String::new(),
            postfix: String::new(),
        }
    }
}

/// Options that mask a value as a grouped number.
///
/// ```
/// use irform_mask::{custom_mask, mask, number_options, NumberParams};
///
/// let params = NumberParams { postfix: " ریال".into(), ..Default::default() };
/// let config = custom_mask(number_options(&params).unwrap());
/// assert_eq!(mask("1234567", &config).unwrap(), "1,234,567 ریال");
/// ```
pub fn number_options(params: &NumberParams) -> Result<MaskOptions, MaskError> {
    let sign = if params.allow_negative { "-?" } else { "" };
    let fraction = if params.precision > 0 {
        format!(r"(\.\d{{0,{}}})?", params.precision)
    } else {
        String::new()
    };
    let pattern = format!(r"^{sign}\d*{fraction}$");
    let expression = Regex::new(&pattern).map_err(|source| MaskError::InvalidPattern {
        token: pattern.clone(),
        source,
    })?;

    let pre = params.clone();
    let post = params.clone();

    Ok(MaskOptions::new(Mask::Expression(expression))
        .with_preprocessor(move |value| strip_affixes(&value, &pre))
        .with_postprocessor(move |value| decorate(&value, &post)))
}

fn strip_affixes(value: &str, params: &NumberParams) -> String {
    let mut value = value;
    if !params.prefix.is_empty() {
        value = value.strip_prefix(params.prefix.as_str()).unwrap_or(value);
    }
    if !params.postfix.is_empty() {
        value = value.strip_suffix(params.postfix.as_str()).unwrap_or(value);
    }

    let mut plain = if params.thousand_separator.is_empty() {
        value.to_string()
    } else {
        value.replace(params.thousand_separator.as_str(), "")
    };
    if params.decimal_separator != '.' {
        plain = plain.replace(params.decimal_separator, ".");
    }
    plain
}

fn decorate(value: &str, params: &NumberParams) -> String {
    if value.is_empty() {
        return String::new();
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let trimmed = int_part.trim_start_matches('0');
    let int_part = if trimmed.is_empty() && !int_part.is_empty() {
        "0"
    } else {
        trimmed
    };

    let mut out = String::with_capacity(value.len() + params.prefix.len() + params.postfix.len() + 4);
    out.push_str(&params.prefix);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part, &params.thousand_separator));
    if let Some(fraction) = fraction {
        out.push(params.decimal_separator);
        out.push_str(fraction);
    }
    out.push_str(&params.postfix);
    out
}
