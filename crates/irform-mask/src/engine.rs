//! Mask engines
//!
//! An engine turns a raw input value into its masked form given resolved
//! [`MaskOptions`]. [`PatternEngine`] is the one shipped with this crate;
//! hosts with their own masking library implement [`MaskEngine`] over it.

use crate::options::{Mask, MaskElement, MaskOptions};

/// Applies resolved options to a value.
pub trait MaskEngine {
    fn transform(&self, value: &str, options: &MaskOptions) -> String;
}

/// Built-in engine for fixed patterns and whole-value expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEngine;

impl PatternEngine {
    fn apply_pattern(elements: &[MaskElement], value: &str) -> String {
        let mut out = String::with_capacity(elements.len());
        let mut input = value.chars().peekable();

        'elements: for element in elements {
            match element {
                MaskElement::Literal(literal) => {
                    if input.peek().is_none() {
                        break;
                    }
                    out.push(*literal);
                    if input.peek() == Some(literal) {
                        input.next();
                    }
                }
                MaskElement::Matcher(matcher) => {
                    let mut buf = [0u8; 4];
                    loop {
                        let Some(ch) = input.next() else {
                            break 'elements;
                        };
                        if matcher.is_match(ch.encode_utf8(&mut buf)) {
                            out.push(ch);
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    fn apply_expression(expression: &regex::Regex, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for ch in value.chars() {
            out.push(ch);
            if !expression.is_match(&out) {
                out.pop();
            }
        }
        out
    }
}

impl MaskEngine for PatternEngine {
    fn transform(&self, value: &str, options: &MaskOptions) -> String {
        let value = options
            .preprocessors
            .iter()
            .fold(value.to_string(), |acc, f| f(acc));

        let masked = match &options.mask {
            Mask::Pattern(elements) => Self::apply_pattern(elements, &value),
            Mask::Expression(expression) => Self::apply_expression(expression, &value),
        };

        options.postprocessors.iter().fold(masked, |acc, f| f(acc))
    }
}
