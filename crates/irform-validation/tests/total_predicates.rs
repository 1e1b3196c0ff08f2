//! Every predicate and numeric helper answers for any input
//!
//! Field values come straight from users, so arbitrary text, non-ASCII
//! scripts and very long digit runs must all produce a plain answer.

use irform_validation::{
    are_valid_files_size, are_valid_files_type, extract_numeric, format_number,
    is_alpha_numeric, is_alpha_numeric_with_persian, is_valid_file_size, is_valid_file_type,
    is_valid_ip, is_valid_ip_port, is_valid_iranian_bank_card, is_valid_iranian_iban,
    is_valid_iranian_id_number, is_valid_iranian_mobile, is_valid_iranian_national_code,
    is_valid_iranian_phone, is_valid_iranian_postal_code, is_valid_username, parse_number,
    unify_separator, FieldValue, FileInfo, Rule,
};
use proptest::prelude::*;

fn run_text_predicates(value: &str, includes: &[&str]) {
    let value = Some(value);
    let _ = is_alpha_numeric(value, includes);
    let _ = is_alpha_numeric_with_persian(value, includes);
    let _ = is_valid_username(value);
    let _ = is_valid_ip(value);
    let _ = is_valid_ip_port(value);
    let _ = is_valid_iranian_bank_card(value);
    let _ = is_valid_iranian_iban(value);
    let _ = is_valid_iranian_id_number(value);
    let _ = is_valid_iranian_mobile(value);
    let _ = is_valid_iranian_national_code(value);
    let _ = is_valid_iranian_phone(value);
    let _ = is_valid_iranian_postal_code(value);
}

fn run_numeric_helpers(value: &str) {
    let digits = extract_numeric(Some(value));
    assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{digits:?}");
    let _ = parse_number(Some(value));
    let _ = unify_separator(Some(value), ",");
    let _ = format_number(Some(value), "٬");
}

fn file_strategy() -> impl Strategy<Value = FileInfo> {
    (".*", any::<u64>(), "\\PC{0,24}")
        .prop_map(|(name, size, mime)| FileInfo::new(name, size, mime))
}

proptest! {
    #[test]
    fn prop_any_text(s in ".*", extra in "\\PC{0,2}") {
        run_text_predicates(&s, &[extra.as_str()]);
        run_numeric_helpers(&s);
    }

    #[test]
    fn prop_non_ascii_text(s in "[\\u{0600}-\\u{06FF}\\u{0660}-\\u{0669}\\u{06F0}-\\u{06F9} :\\-]{0,40}") {
        run_text_predicates(&s, &[]);
        run_numeric_helpers(&s);
    }

    #[test]
    fn prop_long_digit_runs(prefix in "(IR|0x|-|[0-9.]{1,4}:)?", digits in "[0-9]{0,400}") {
        let s = format!("{prefix}{digits}");
        run_text_predicates(&s, &[]);
        run_numeric_helpers(&s);
    }

    #[test]
    fn prop_any_rule_on_any_text(s in "\\PC*") {
        let rules = [
            Rule::Alnum { includes: vec!["]".to_string(), "\\".to_string()] },
            Rule::AlnumFa { includes: vec!["^".to_string()] },
            Rule::Ip,
            Rule::IpPort,
            Rule::IranianBankCard,
            Rule::IranianIban,
            Rule::IranianIdNumber,
            Rule::IranianMobile,
            Rule::IranianNationalCode,
            Rule::IranianPhone,
            Rule::IranianPostalCode,
            Rule::Username,
            Rule::FileSize { min: 0, max: u64::MAX },
        ];
        for rule in &rules {
            let _ = rule.check(FieldValue::from(s.as_str()));
        }
    }

    #[test]
    fn prop_any_files(
        files in proptest::collection::vec(file_strategy(), 0..4),
        min in any::<u64>(),
        max in any::<u64>(),
        mimes in proptest::collection::vec("\\PC{0,24}", 0..3),
    ) {
        let _ = is_valid_file_size(files.first(), min, max);
        let _ = is_valid_file_type(files.first(), mimes.as_slice());
        let _ = are_valid_files_size(files.as_slice(), min, max);
        let _ = are_valid_files_type(files.as_slice(), mimes.as_slice());
        prop_assert!(are_valid_files_size(files.as_slice(), 0, u64::MAX));
    }
}
