//! Tests for color-name decoding and encoding.

use super::*;

fn full_record() -> ColorNameRecord {
    ColorNameRecord::new("A01", "#2e2e2e 0-#cbff2e(90%) 1")
        .with_group("群組名稱", 1)
        .with_description("應用於驚喜包(搶禮物) 區塊背景色")
        .with_gradient_type(GradientType::Linear)
}

#[test]
fn decodes_abbreviated_keys() {
    let record = decode_name("[@G:群組名稱][@GS:1][@N:a01][@C:#2e2e2e(20%)][@D:區塊背景色]").unwrap();
    assert_eq!(record.group_name.as_deref(), Some("群組名稱"));
    assert_eq!(record.group_sort, Some(1));
    assert_eq!(record.name, "a01");
    assert_eq!(record.color, "#2e2e2e(20%)");
    assert_eq!(record.description.as_deref(), Some("區塊背景色"));
    assert!(record.extra.is_empty());
}

#[test]
fn decodes_long_keys_with_noise() {
    let record = decode_name(
        r"[@groupName  : 群組名稱][@groupSort:1] [@ name :com1] [@color:#2e2e2e][@test:跳脫\]測試]  [@D:背景色][@test2:測試2",
    )
    .unwrap();
    assert_eq!(record.name, "com1");
    assert_eq!(record.color, "#2e2e2e");
    assert_eq!(record.description.as_deref(), Some("背景色"));
    assert_eq!(record.extra.get("test").map(String::as_str), Some("跳脫]測試"));
    assert!(!record.extra.contains_key("test2"));
}

#[test]
fn decodes_gradient_type() {
    let record =
        decode_name("[@N:a02][@C:#2e2e2e 0-#CBFF2E(90%) 1][@gradientType:radial]").unwrap();
    assert_eq!(record.gradient_type, Some(GradientType::Radial));
}

#[test]
fn unknown_gradient_type_is_invalid_color_value() {
    let err = decode_name("[@N:a02][@C:#000 0-#fff 1][@CGT:conic]").unwrap_err();
    assert_eq!(err.reason(), "invalid-color-value");
    assert!(matches!(
        err,
        ParseFailure::InvalidColorValue { ref offending, .. } if offending == "conic"
    ));
}

#[test]
fn last_duplicate_key_wins() {
    let record = decode_name("[@N:A01][@C:#000][@name:A02][@C:#fff]").unwrap();
    assert_eq!(record.name, "A02");
    assert_eq!(record.color, "#fff");
}

#[test]
fn non_integer_group_sort_is_ignored() {
    let record = decode_name("[@GS:first][@N:A01][@C:#000]").unwrap();
    assert_eq!(record.group_sort, None);
}

#[test]
fn missing_name_is_reported_not_thrown() {
    let err = decode_name("no brackets here").unwrap_err();
    assert_eq!(err.reason(), "missing-required-key");
    assert_eq!(
        err,
        ParseFailure::MissingRequiredKey {
            key: "name",
            input: "no brackets here".into()
        }
    );
}

#[test]
fn missing_color_is_reported() {
    let err = decode_name("[@N:A01][@D:no color]").unwrap_err();
    assert!(matches!(
        err,
        ParseFailure::MissingRequiredKey { key: "color", .. }
    ));
}

#[test]
fn empty_required_value_counts_as_missing() {
    let err = decode_name("[@N:][@C:#fff]").unwrap_err();
    assert!(matches!(
        err,
        ParseFailure::MissingRequiredKey { key: "name", .. }
    ));
}

#[test]
fn encodes_in_fixed_order_abbreviated() {
    let encoded = encode_name(&full_record(), true);
    assert_eq!(
        encoded,
        "[@GS:1][@G:群組名稱][@N:A01][@D:應用於驚喜包(搶禮物) 區塊背景色][@C:#2e2e2e 0-#cbff2e(90%) 1][@CGT:linear]"
    );
}

#[test]
fn encodes_in_fixed_order_long() {
    let record = ColorNameRecord::new("A01", "#fff").with_description("x");
    assert_eq!(
        encode_name(&record, false),
        "[@name:A01][@description:x][@color:#fff]"
    );
}

#[test]
fn encode_omits_absent_fields_and_appends_extras() {
    let mut record = ColorNameRecord::new("B2", "#000");
    record.extra.insert("zeta".into(), "z".into());
    record.extra.insert("alpha".into(), "a".into());
    assert_eq!(
        encode_name(&record, true),
        "[@N:B2][@C:#000][@alpha:a][@zeta:z]"
    );
}

#[test]
fn round_trip_both_spellings() {
    let mut record = full_record();
    record.extra.insert("test".into(), "[跳脫]測試".into());
    for abbreviated in [true, false] {
        let decoded = decode_name(&encode_name(&record, abbreviated)).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn description_escape_law() {
    for description in [
        "a[b]c",
        "[[]]",
        r"\",
        r"a\]b",
        "]",
        "[",
        "plain text",
        "  padded  ",
        " ",
        "tab\t",
    ] {
        let record = ColorNameRecord::new("A01", "#fff").with_description(description);
        for abbreviated in [true, false] {
            let decoded = decode_name(&encode_name(&record, abbreviated)).unwrap();
            assert_eq!(decoded.description.as_deref(), Some(description));
        }
    }
}

#[test]
fn escapes_brackets_in_encoded_output() {
    let record = ColorNameRecord::new("A01", "#fff").with_description("a[b]c");
    assert!(encode_name(&record, true).contains(r"[@D:a\[b\]c]"));
}

#[test]
fn extra_keys_with_delimiters_round_trip() {
    let mut record = ColorNameRecord::new("A01", "#fff");
    record.extra.insert("a:b".into(), "v".into());
    record.extra.insert(" spaced ".into(), "w".into());
    let encoded = encode_name(&record, true);
    assert!(encoded.contains(r"[@a\:b:v]"));
    assert_eq!(decode_name(&encoded).unwrap(), record);
}
