//! Named validation rules
//!
//! A [`RuleRegistry`] is the extension point a host schema layer talks to:
//! rules are registered once at startup under their public name with a
//! default message, then tested by name through [`RuleRegistry::test`].
//! Absent-value policy is never re-implemented here; every rule defers to its
//! predicate.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::file::{
    are_valid_files_size, are_valid_files_type, is_valid_file_size, is_valid_file_type, FileInfo,
};
use crate::iranian::{
    is_valid_iranian_bank_card, is_valid_iranian_iban, is_valid_iranian_id_number,
    is_valid_iranian_mobile, is_valid_iranian_national_code, is_valid_iranian_phone,
    is_valid_iranian_postal_code,
};
use crate::network::{is_valid_ip, is_valid_ip_port};
use crate::string::{is_alpha_numeric, is_alpha_numeric_with_persian, is_valid_username};

/// Public rule names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleName {
    #[serde(rename = "alnum")]
    Alnum,
    #[serde(rename = "alnumfa")]
    AlnumFa,
    #[serde(rename = "fileSize")]
    FileSize,
    #[serde(rename = "filesSize")]
    FilesSize,
    #[serde(rename = "fileType")]
    FileType,
    #[serde(rename = "filesType")]
    FilesType,
    #[serde(rename = "ip")]
    Ip,
    #[serde(rename = "ipPort")]
    IpPort,
    #[serde(rename = "iranianBankCard")]
    IranianBankCard,
    #[serde(rename = "iranianIBAN")]
    IranianIban,
    #[serde(rename = "iranianIdNumber")]
    IranianIdNumber,
    #[serde(rename = "iranianMobile")]
    IranianMobile,
    #[serde(rename = "iranianNationalCode")]
    IranianNationalCode,
    #[serde(rename = "iranianPhone")]
    IranianPhone,
    #[serde(rename = "iranianPostalCode")]
    IranianPostalCode,
    #[serde(rename = "username")]
    Username,
}

impl RuleName {
    pub const ALL: [RuleName; 16] = [
        RuleName::Alnum,
        RuleName::AlnumFa,
        RuleName::FileSize,
        RuleName::FilesSize,
        RuleName::FileType,
        RuleName::FilesType,
        RuleName::Ip,
        RuleName::IpPort,
        RuleName::IranianBankCard,
        RuleName::IranianIban,
        RuleName::IranianIdNumber,
        RuleName::IranianMobile,
        RuleName::IranianNationalCode,
        RuleName::IranianPhone,
        RuleName::IranianPostalCode,
        RuleName::Username,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Alnum => "alnum",
            RuleName::AlnumFa => "alnumfa",
            RuleName::FileSize => "fileSize",
            RuleName::FilesSize => "filesSize",
            RuleName::FileType => "fileType",
            RuleName::FilesType => "filesType",
            RuleName::Ip => "ip",
            RuleName::IpPort => "ipPort",
            RuleName::IranianBankCard => "iranianBankCard",
            RuleName::IranianIban => "iranianIBAN",
            RuleName::IranianIdNumber => "iranianIdNumber",
            RuleName::IranianMobile => "iranianMobile",
            RuleName::IranianNationalCode => "iranianNationalCode",
            RuleName::IranianPhone => "iranianPhone",
            RuleName::IranianPostalCode => "iranianPostalCode",
            RuleName::Username => "username",
        }
    }

    /// Message key used when neither the registration nor the call site
    /// supplies one.
    pub fn default_message(self) -> &'static str {
        match self {
            RuleName::Alnum => "alnum",
            RuleName::AlnumFa => "alnumfa",
            RuleName::FileSize | RuleName::FilesSize => "file_size",
            RuleName::FileType | RuleName::FilesType => "file_type",
            RuleName::Ip => "ip",
            RuleName::IpPort => "ip_port",
            RuleName::IranianBankCard => "bank_card",
            RuleName::IranianIban => "iban",
            RuleName::IranianIdNumber => "id_number",
            RuleName::IranianMobile => "mobile",
            RuleName::IranianNationalCode => "national_code",
            RuleName::IranianPhone => "phone",
            RuleName::IranianPostalCode => "postal_code",
            RuleName::Username => "username",
        }
    }

    /// File rules run against uploads; everything else against text.
    pub fn is_file_rule(self) -> bool {
        matches!(
            self,
            RuleName::FileSize | RuleName::FilesSize | RuleName::FileType | RuleName::FilesType
        )
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

fn default_max_bytes() -> u64 {
    u64::MAX
}

/// A rule together with its parameters, as attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum Rule {
    #[serde(rename = "alnum")]
    Alnum {
        #[serde(default)]
        includes: Vec<String>,
    },
    #[serde(rename = "alnumfa")]
    AlnumFa {
        #[serde(default)]
        includes: Vec<String>,
    },
    #[serde(rename = "fileSize")]
    FileSize {
        #[serde(default)]
        min: u64,
        #[serde(default = "default_max_bytes")]
        max: u64,
    },
    #[serde(rename = "filesSize")]
    FilesSize {
        #[serde(default)]
        min: u64,
        #[serde(default = "default_max_bytes")]
        max: u64,
    },
    #[serde(rename = "fileType")]
    FileType {
        #[serde(default)]
        mimes: Vec<String>,
    },
    #[serde(rename = "filesType")]
    FilesType {
        #[serde(default)]
        mimes: Vec<String>,
    },
    #[serde(rename = "ip")]
    Ip,
    #[serde(rename = "ipPort")]
    IpPort,
    #[serde(rename = "iranianBankCard")]
    IranianBankCard,
    #[serde(rename = "iranianIBAN")]
    IranianIban,
    #[serde(rename = "iranianIdNumber")]
    IranianIdNumber,
    #[serde(rename = "iranianMobile")]
    IranianMobile,
    #[serde(rename = "iranianNationalCode")]
    IranianNationalCode,
    #[serde(rename = "iranianPhone")]
    IranianPhone,
    #[serde(rename = "iranianPostalCode")]
    IranianPostalCode,
    #[serde(rename = "username")]
    Username,
}

impl Rule {
    pub fn name(&self) -> RuleName {
        match self {
            Rule::Alnum { .. } => RuleName::Alnum,
            Rule::AlnumFa { .. } => RuleName::AlnumFa,
            Rule::FileSize { .. } => RuleName::FileSize,
            Rule::FilesSize { .. } => RuleName::FilesSize,
            Rule::FileType { .. } => RuleName::FileType,
            Rule::FilesType { .. } => RuleName::FilesType,
            Rule::Ip => RuleName::Ip,
            Rule::IpPort => RuleName::IpPort,
            Rule::IranianBankCard => RuleName::IranianBankCard,
            Rule::IranianIban => RuleName::IranianIban,
            Rule::IranianIdNumber => RuleName::IranianIdNumber,
            Rule::IranianMobile => RuleName::IranianMobile,
            Rule::IranianNationalCode => RuleName::IranianNationalCode,
            Rule::IranianPhone => RuleName::IranianPhone,
            Rule::IranianPostalCode => RuleName::IranianPostalCode,
            Rule::Username => RuleName::Username,
        }
    }

    /// Run the predicate behind this rule.
    ///
    /// Text handed to a file rule counts as "no file"; files handed to a text
    /// rule never pass.
    pub fn check(&self, value: FieldValue<'_>) -> bool {
        match value {
            FieldValue::Text(text) => self.check_text(text),
            FieldValue::Files(files) => self.check_files(files),
        }
    }

    fn check_text(&self, text: Option<&str>) -> bool {
        match self {
            Rule::Alnum { includes } => is_alpha_numeric(text, &as_strs(includes)),
            Rule::AlnumFa { includes } => is_alpha_numeric_with_persian(text, &as_strs(includes)),
            Rule::Ip => is_valid_ip(text),
            Rule::IpPort => is_valid_ip_port(text),
            Rule::IranianBankCard => is_valid_iranian_bank_card(text),
            Rule::IranianIban => is_valid_iranian_iban(text),
            Rule::IranianIdNumber => is_valid_iranian_id_number(text),
            Rule::IranianMobile => is_valid_iranian_mobile(text),
            Rule::IranianNationalCode => is_valid_iranian_national_code(text),
            Rule::IranianPhone => is_valid_iranian_phone(text),
            Rule::IranianPostalCode => is_valid_iranian_postal_code(text),
            Rule::Username => is_valid_username(text),
            Rule::FileSize { .. }
            | Rule::FilesSize { .. }
            | Rule::FileType { .. }
            | Rule::FilesType { .. } => true,
        }
    }

    fn check_files(&self, files: &[FileInfo]) -> bool {
        match self {
            Rule::FileSize { min, max } => is_valid_file_size(files.first(), *min, *max),
            Rule::FilesSize { min, max } => are_valid_files_size(files, *min, *max),
            Rule::FileType { mimes } => is_valid_file_type(files.first(), mimes.as_slice()),
            Rule::FilesType { mimes } => are_valid_files_type(files, mimes.as_slice()),
            _ => false,
        }
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// The value a rule is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Files(&'a [FileInfo]),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a [FileInfo]> for FieldValue<'a> {
    fn from(files: &'a [FileInfo]) -> Self {
        FieldValue::Files(files)
    }
}

/// Why a rule test did not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule `{rule}` is not registered")]
    Unregistered { rule: RuleName },

    #[error("{message}")]
    Violation { rule: RuleName, message: String },
}

/// Registered rules and their default messages.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    messages: HashMap<RuleName, String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every rule registered under its default message.
    pub fn with_all_rules() -> Self {
        let mut registry = Self::new();
        for name in RuleName::ALL {
            registry.register(name, None);
        }
        registry
    }

    /// Register `name`, replacing any earlier registration.
    pub fn register(&mut self, name: RuleName, default_message: Option<&str>) -> &mut Self {
        let message = default_message.unwrap_or(name.default_message()).to_string();
        tracing::debug!(rule = %name, message = %message, "registered validation rule");
        self.messages.insert(name, message);
        self
    }

    pub fn register_alpha_numeric(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::Alnum, default_message)
    }

    pub fn register_alpha_numeric_with_persian(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::AlnumFa, default_message)
    }

    /// Registers both `fileSize` and `filesSize`.
    pub fn register_file_size(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::FileSize, default_message)
            .register(RuleName::FilesSize, default_message)
    }

    /// Registers both `fileType` and `filesType`.
    pub fn register_file_type(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::FileType, default_message)
            .register(RuleName::FilesType, default_message)
    }

    pub fn register_ip(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::Ip, default_message)
    }

    pub fn register_ip_port(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IpPort, default_message)
    }

    pub fn register_iranian_bank_card(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianBankCard, default_message)
    }

    pub fn register_iranian_iban(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianIban, default_message)
    }

    pub fn register_iranian_id_number(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianIdNumber, default_message)
    }

    pub fn register_iranian_mobile(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianMobile, default_message)
    }

    pub fn register_iranian_national_code(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianNationalCode, default_message)
    }

    pub fn register_iranian_phone(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianPhone, default_message)
    }

    pub fn register_iranian_postal_code(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::IranianPostalCode, default_message)
    }

    pub fn register_username(&mut self, default_message: Option<&str>) -> &mut Self {
        self.register(RuleName::Username, default_message)
    }

    pub fn is_registered(&self, name: RuleName) -> bool {
        self.messages.contains_key(&name)
    }

    pub fn default_message(&self, name: RuleName) -> Option<&str> {
        self.messages.get(&name).map(String::as_str)
    }

    /// Registered rule names, sorted.
    pub fn rule_names(&self) -> Vec<RuleName> {
        let mut names: Vec<_> = self.messages.keys().copied().collect();
        names.sort();
        names
    }

    /// Test `value` against `rule`. `message` overrides the registered default.
    ///
    /// # Examples
    /// ```
    /// use irform_validation::{Rule, RuleError, RuleRegistry};
    ///
    /// let mut registry = RuleRegistry::new();
    /// registry.register_iranian_mobile(None);
    ///
    /// assert!(registry.test(&Rule::IranianMobile, "09123456789", None).is_ok());
    /// assert!(matches!(
    ///     registry.test(&Rule::IranianMobile, "12345", None),
    ///     Err(RuleError::Violation { .. })
    /// ));
    /// ```
    pub fn test<'a>(
        &self,
        rule: &Rule,
        value: impl Into<FieldValue<'a>>,
        message: Option<&str>,
    ) -> Result<(), RuleError> {
        let name = rule.name();
        let Some(default_message) = self.messages.get(&name) else {
            tracing::warn!(rule = %name, "tested a rule that was never registered");
            return Err(RuleError::Unregistered { rule: name });
        };

        if rule.check(value.into()) {
            Ok(())
        } else {
            Err(RuleError::Violation {
                rule: name,
                message: message.unwrap_or(default_message).to_string(),
            })
        }
    }
}
