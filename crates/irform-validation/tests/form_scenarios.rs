//! Rule registry scenarios as a host form would drive them
//!
//! One registry per form, rules attached per field, messages either from
//! registration or from the call site.

use irform_validation::{
    extract_numeric, format_number, is_valid_ip_port, is_valid_iranian_mobile, FileInfo, Rule,
    RuleError, RuleName, RuleRegistry,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn signup_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry
        .register_iranian_mobile(Some("شماره موبایل معتبر نیست"))
        .register_iranian_national_code(None)
        .register_username(None)
        .register_file_size(Some("file too large"));
    registry
}

#[test]
fn test_registered_rules() {
    let registry = signup_registry();
    assert_eq!(
        registry.rule_names(),
        vec![
            RuleName::FileSize,
            RuleName::FilesSize,
            RuleName::IranianMobile,
            RuleName::IranianNationalCode,
            RuleName::Username,
        ]
    );
}

#[test]
fn test_field_messages() {
    let registry = signup_registry();

    assert_eq!(
        registry.test(&Rule::IranianMobile, "9123456789", None),
        Err(RuleError::Violation {
            rule: RuleName::IranianMobile,
            message: "شماره موبایل معتبر نیست".to_string(),
        })
    );
    assert_eq!(
        registry.test(&Rule::IranianNationalCode, "0499370898", Some("check the code")),
        Err(RuleError::Violation {
            rule: RuleName::IranianNationalCode,
            message: "check the code".to_string(),
        })
    );
    assert!(registry.test(&Rule::IranianMobile, "0912-345-6789", None).is_ok());
}

#[test]
fn test_unregistered_rule() {
    let registry = signup_registry();
    assert_eq!(
        registry.test(&Rule::Ip, "127.0.0.1", None),
        Err(RuleError::Unregistered { rule: RuleName::Ip })
    );
}

#[test]
fn test_optional_fields_follow_each_rule() {
    let registry = signup_registry();
    // national code and username let an empty field through, mobile does not
    assert!(registry.test(&Rule::IranianNationalCode, "", None).is_ok());
    assert!(registry.test(&Rule::Username, None::<&str>, None).is_ok());
    assert!(registry.test(&Rule::IranianMobile, "", None).is_err());
}

#[test]
fn test_upload_field() {
    let registry = signup_registry();
    let rule = Rule::FilesSize { min: 1, max: 2048 };
    let ok = [FileInfo::new("a.png", 100, "image/png")];
    let too_big = [
        FileInfo::new("a.png", 100, "image/png"),
        FileInfo::new("b.png", 4096, "image/png"),
    ];

    assert!(registry.test(&rule, &ok[..], None).is_ok());
    assert_eq!(
        registry.test(&rule, &too_big[..], None),
        Err(RuleError::Violation {
            rule: RuleName::FilesSize,
            message: "file too large".to_string(),
        })
    );
}

#[test]
fn test_rules_from_json() {
    let rules: Vec<Rule> = serde_json::from_str(
        r#"[{"rule": "alnum", "includes": ["-"]}, {"rule": "iranianIBAN"}, {"rule": "fileType", "mimes": ["image/png"]}]"#,
    )
    .unwrap();
    assert_eq!(
        rules,
        vec![
            Rule::Alnum {
                includes: vec!["-".to_string()]
            },
            Rule::IranianIban,
            Rule::FileType {
                mimes: vec!["image/png".to_string()]
            },
        ]
    );
}

#[rstest]
#[case("192.168.1.1:8080", true)]
#[case("192.168.1.1:70000", false)]
#[case("192.168.1.1", false)]
fn test_ip_port_scenarios(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_ip_port(Some(input)), expected);
}

#[test]
fn test_numeric_scenarios() {
    assert_eq!(extract_numeric(Some("a1b2c3")), "123");
    assert_eq!(extract_numeric(None::<&str>), "");
    assert_eq!(format_number(Some(&1234567), ","), "1,234,567");
    assert_eq!(format_number(Some("abc"), ","), "");
    assert!(is_valid_iranian_mobile(Some("0912-345-6789")));
    assert!(!is_valid_iranian_mobile(Some("9123456789")));
}
