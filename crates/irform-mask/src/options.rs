//! Mask configuration and option resolution
//!
//! Template grammar accepted by [`parse_template`]:
//!
//! - a character that is a single-character token name (`#`, `@`, ...) is
//!   replaced by that token's matcher
//! - `{name}` is replaced by the matcher of token `name`
//! - `\c` is the literal character `c`
//! - every other character is a literal
//!
//! ```
//! use irform_mask::{parse_template, MaskElement, TokenMap};
//!
//! let elements = parse_template(&TokenMap::with_defaults(), "##-{hex}").unwrap();
//! assert_eq!(elements.len(), 4);
//! assert!(matches!(elements[2], MaskElement::Literal('-')));
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::MaskError;
use crate::token::TokenMap;

/// One position of a fixed-pattern mask.
#[derive(Debug, Clone)]
pub enum MaskElement {
    /// Inserted as-is.
    Literal(char),
    /// Accepts one input character matching the expression.
    Matcher(Regex),
}

impl MaskElement {
    /// Matcher from a regular expression describing a single character.
    pub fn matcher(pattern: &str) -> Result<Self, MaskError> {
        Regex::new(&format!("^(?:{pattern})$"))
            .map(MaskElement::Matcher)
            .map_err(|source| MaskError::InvalidPattern {
                token: pattern.to_string(),
                source,
            })
    }
}

/// What the engine masks against.
#[derive(Debug, Clone)]
pub enum Mask {
    /// Fixed positions, one element per output character.
    Pattern(Vec<MaskElement>),
    /// The accumulated value must keep matching this expression.
    Expression(Regex),
}

/// Value hook run before or after the engine.
pub type Processor = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Fully resolved options handed to a [`MaskEngine`](crate::MaskEngine).
#[derive(Clone)]
pub struct MaskOptions {
    pub mask: Mask,
    pub preprocessors: Vec<Processor>,
    pub postprocessors: Vec<Processor>,
}

impl MaskOptions {
    pub fn new(mask: Mask) -> Self {
        Self {
            mask,
            preprocessors: Vec::new(),
            postprocessors: Vec::new(),
        }
    }

    pub fn with_preprocessor(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.preprocessors.push(Arc::new(f));
        self
    }

    pub fn with_postprocessor(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.postprocessors.push(Arc::new(f));
        self
    }
}

impl fmt::Debug for MaskOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskOptions")
            .field("mask", &self.mask)
            .field("preprocessors", &self.preprocessors.len())
            .field("postprocessors", &self.postprocessors.len())
            .finish()
    }
}

/// A pattern written by the caller.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Template string, see the module docs for its grammar.
    Template(String),
    /// Already-split positions.
    Elements(Vec<MaskElement>),
    /// Whole-value expression.
    Expression(Regex),
}

impl From<&str> for Definition {
    fn from(template: &str) -> Self {
        Definition::Template(template.to_string())
    }
}

impl From<String> for Definition {
    fn from(template: String) -> Self {
        Definition::Template(template)
    }
}

impl From<Vec<MaskElement>> for Definition {
    fn from(elements: Vec<MaskElement>) -> Self {
        Definition::Elements(elements)
    }
}

/// Either a pattern to resolve against the token table, or a ready-made
/// option bundle.
#[derive(Debug, Clone)]
pub enum MaskConfig {
    Pattern(Definition),
    Custom(MaskOptions),
}

/// Split a template into mask elements using `tokens`.
pub fn parse_template(tokens: &TokenMap, template: &str) -> Result<Vec<MaskElement>, MaskError> {
    let mut elements = Vec::with_capacity(template.len());
    let mut chars = template.char_indices();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '\\' => {
                let (_, escaped) = chars.next().ok_or(MaskError::DanglingEscape)?;
                elements.push(MaskElement::Literal(escaped));
            }
            '{' => {
                let name: String = chars
                    .by_ref()
                    .map(|(_, c)| c)
                    .take_while(|c| *c != '}')
                    .collect();
                // take_while swallows the closing brace, so check it was there.
                let closed = template[position + 1..].contains('}');
                if !closed {
                    return Err(MaskError::UnterminatedToken { position });
                }
                if name.is_empty() {
                    return Err(MaskError::EmptyToken { position });
                }
                let matcher = tokens
                    .get(&name)
                    .ok_or_else(|| MaskError::UnknownToken(name.clone()))?;
                elements.push(MaskElement::Matcher(matcher.clone()));
            }
            _ => match tokens.get_char(ch) {
                Some(matcher) => elements.push(MaskElement::Matcher(matcher.clone())),
                None => elements.push(MaskElement::Literal(ch)),
            },
        }
    }

    Ok(elements)
}

/// Resolve `config` into engine options.
///
/// A custom bundle is returned untouched; a pattern is expanded with `tokens`.
pub fn resolve_options(tokens: &TokenMap, config: &MaskConfig) -> Result<MaskOptions, MaskError> {
    let definition = match config {
        MaskConfig::Custom(options) => return Ok(options.clone()),
        MaskConfig::Pattern(definition) => definition,
    };

    let mask = match definition {
        Definition::Template(template) => match parse_template(tokens, template) {
            Ok(elements) => Mask::Pattern(elements),
            Err(err) => {
                tracing::warn!(%err, template = %template, "mask template could not be resolved");
                return Err(err);
            }
        },
        Definition::Elements(elements) => Mask::Pattern(elements.clone()),
        Definition::Expression(expression) => Mask::Expression(expression.clone()),
    };

    Ok(MaskOptions::new(mask))
}
