//! Mask tokens
//!
//! A token maps a name to a single-character matcher. Single-character names
//! (`#`, `@`, ...) can be written bare inside a template; longer names are
//! written as `{name}`.
//!
//! The process-wide table is initialised with [`TokenMap::with_defaults`] and
//! extended through [`register_token`]. Registration is expected to finish
//! during program start-up, before any concurrent masking reads the table.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use irform_validation::PERSIAN_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MaskError;

const RESERVED: [char; 3] = ['{', '}', '\\'];

/// Token name to matcher table.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    tokens: HashMap<String, Regex>,
}

impl TokenMap {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tokens:
    ///
    /// | name | matches |
    /// |---|---|
    /// | `#`, `digit` | `0-9` |
    /// | `@`, `letter` | Latin letters |
    /// | `*`, `alnum` | Latin letters and digits |
    /// | `%`, `fa` | Persian letters |
    /// | `hex` | hexadecimal digit |
    pub fn with_defaults() -> Self {
        let persian = format!("[{PERSIAN_CHARS}]");
        let defaults: [(&str, &str); 9] = [
            ("#", "[0-9]"),
            ("digit", "[0-9]"),
            ("@", "[A-Za-z]"),
            ("letter", "[A-Za-z]"),
            ("*", "[A-Za-z0-9]"),
            ("alnum", "[A-Za-z0-9]"),
            ("%", persian.as_str()),
            ("fa", persian.as_str()),
            ("hex", "[0-9A-Fa-f]"),
        ];

        let mut map = Self::new();
        for (name, pattern) in defaults {
            if let Err(err) = map.insert(name, pattern) {
                tracing::error!(%err, "built-in mask token rejected");
            }
        }
        map
    }

    /// Add or replace a token. `pattern` must describe a single character;
    /// it is anchored on both ends before use.
    pub fn insert(&mut self, name: &str, pattern: &str) -> Result<(), MaskError> {
        if name.is_empty() || name.contains(&RESERVED[..]) {
            return Err(MaskError::InvalidTokenName(name.to_string()));
        }

        let matcher =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| MaskError::InvalidPattern {
                token: name.to_string(),
                source,
            })?;

        self.tokens.insert(name.to_string(), matcher);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Regex> {
        self.tokens.get(name)
    }

    /// Matcher for a bare template character, if that character is a token.
    pub fn get_char(&self, ch: char) -> Option<&Regex> {
        let mut buf = [0u8; 4];
        self.tokens.get(ch.encode_utf8(&mut buf) as &str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tokens.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

static GLOBAL_TOKENS: Lazy<RwLock<TokenMap>> = Lazy::new(|| RwLock::new(TokenMap::with_defaults()));

/// Add a token to the process-wide table.
///
/// Call during start-up, before masking begins. Writers are not coordinated
/// with one another beyond what the table lock gives; hosts registering from
/// several threads must serialise those calls themselves.
pub fn register_token(name: &str, pattern: &str) -> Result<(), MaskError> {
    let mut tokens = GLOBAL_TOKENS.write().unwrap_or_else(PoisonError::into_inner);
    tokens.insert(name, pattern)?;
    tracing::debug!(token = name, pattern, "registered mask token");
    Ok(())
}

/// Snapshot of the process-wide table.
pub fn global_tokens() -> TokenMap {
    GLOBAL_TOKENS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
