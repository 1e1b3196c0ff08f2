//! irform WASM
//!
//! WebAssembly bindings for irform.
//! Runs the same rules as the server on the client, plus input masking and a
//! couple of DOM helpers.

use irform_mask::{mask, pattern_mask};
use irform_validation::{FieldValue, FileInfo, Rule, RuleRegistry};
use js_sys::{Function, Promise, Reflect};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CLIPBOARD_UNSUPPORTED: &str = "Clipboard API not supported";

/// Every rule, with its default message.
static REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::with_all_rules);

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub rule: String,
    pub message: String,
}

/// One rule attached to a field, e.g. `{ "rule": "alnum", "includes": ["-"] }`
#[derive(Deserialize, Debug, Clone)]
pub struct FieldRule {
    #[serde(flatten)]
    pub rule: Rule,

    // Custom message
    #[serde(default)]
    pub message: Option<String>,
}

/// Field value as sent from JavaScript: a string, `null`, or a file list.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum FieldInput {
    Text(Option<String>),
    Files(Vec<FileInfo>),
}

impl FieldInput {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            FieldInput::Text(text) => FieldValue::Text(text.as_deref()),
            FieldInput::Files(files) => FieldValue::Files(files),
        }
    }
}

/// Run `rules` against one value and collect the failures in rule order.
pub fn evaluate(field_name: &str, value: &FieldInput, rules: &[FieldRule]) -> Vec<ValidationError> {
    rules
        .iter()
        .filter_map(|entry| {
            REGISTRY
                .test(&entry.rule, value.as_field_value(), entry.message.as_deref())
                .err()
                .map(|err| ValidationError {
                    field: field_name.to_string(),
                    rule: entry.rule.name().to_string(),
                    message: err.to_string(),
                })
        })
        .collect()
}

/// Validate a single field value
///
/// # Arguments
/// * `field_name` - Name of the field being validated
/// * `value` - A string, `null`, or an array of `{ name, size, type }` files
/// * `rules` - JavaScript array of rule objects
///
/// # Returns
/// Array of validation errors (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('mobile', '0912...', [
///     { rule: 'iranianMobile', message: 'Enter a mobile number' },
/// ]);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let value: FieldInput = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse value: {}", e)))?;
    let rules: Vec<FieldRule> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;

    let errors = evaluate(field_name, &value, &rules);
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Apply a template mask such as `####-####-####-####`
#[wasm_bindgen(js_name = mask)]
pub fn mask_js(value: &str, template: &str) -> Result<String, JsValue> {
    mask(value, &pattern_mask(template)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `content` of `<meta name="...">`, or `fallback`
#[wasm_bindgen(js_name = getMetaContent)]
pub fn get_meta_content(name: &str, fallback: Option<String>) -> String {
    meta_content(name).unwrap_or_else(|| fallback.unwrap_or_default())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Copy `text` with `navigator.clipboard.writeText`
///
/// Rejects with `Error("Clipboard API not supported")` when the API is
/// missing; otherwise settles as the browser's promise does.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) -> Promise {
    let Some((clipboard, write_text)) = clipboard_write_text() else {
        return Promise::reject(&js_sys::Error::new(CLIPBOARD_UNSUPPORTED).into());
    };

    match write_text.call1(&clipboard, &JsValue::from_str(text)) {
        Ok(result) => result
            .dyn_into::<Promise>()
            .unwrap_or_else(|other| Promise::resolve(&other)),
        Err(err) => Promise::reject(&err),
    }
}

fn clipboard_write_text() -> Option<(JsValue, Function)> {
    let navigator = web_sys::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((clipboard, write_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules(json: &str) -> Vec<FieldRule> {
        serde_json::from_str(json).unwrap()
    }

    fn text(value: &str) -> FieldInput {
        FieldInput::Text(Some(value.to_string()))
    }

    #[test]
    fn test_evaluate_collects_failures_in_order() {
        let rules = rules(
            r#"[
                {"rule": "iranianMobile"},
                {"rule": "alnum", "includes": ["-"], "message": "letters only"}
            ]"#,
        );

        let errors = evaluate("mobile", &text("0912 123"), &rules);
        assert_eq!(
            errors,
            vec![
                ValidationError {
                    field: "mobile".to_string(),
                    rule: "iranianMobile".to_string(),
                    message: "mobile".to_string(),
                },
                ValidationError {
                    field: "mobile".to_string(),
                    rule: "alnum".to_string(),
                    message: "letters only".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_evaluate_valid_value() {
        let rules = rules(r#"[{"rule": "iranianNationalCode"}, {"rule": "username"}]"#);
        assert!(evaluate("code", &text("0499370899"), &rules).is_empty());
    }

    #[test]
    fn test_evaluate_null_value_follows_rule_policy() {
        let rules = rules(r#"[{"rule": "iranianNationalCode"}, {"rule": "iranianPostalCode"}]"#);
        let value: FieldInput = serde_json::from_str("null").unwrap();
        let errors = evaluate("code", &value, &rules);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "iranianPostalCode");
    }

    #[test]
    fn test_evaluate_files() {
        let rules = rules(
            r#"[
                {"rule": "filesSize", "max": 1024},
                {"rule": "fileType", "mimes": ["image/png"]}
            ]"#,
        );
        let value: FieldInput = serde_json::from_str(
            r#"[{"name": "a.png", "size": 10, "type": "image/png"},
                {"name": "b.pdf", "size": 4096, "type": "application/pdf"}]"#,
        )
        .unwrap();

        let errors = evaluate("attachments", &value, &rules);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "filesSize");
        assert_eq!(errors[0].message, "file_size");
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        assert!(serde_json::from_str::<Vec<FieldRule>>(r#"[{"rule": "email"}]"#).is_err());
    }

    #[test]
    fn test_mask_js() {
        assert_eq!(mask_js("09121234567", "####-###-####").unwrap(), "0912-123-4567");
    }
}
