//! Serialization tests for [`HidKeyCode`].
//!
//! Human-readable formats carry the identifier string so configuration files
//! stay legible; binary formats carry the raw usage byte.

use keycode_core::{HidKeyCode, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Binding {
    platform: Platform,
    key: HidKeyCode,
    #[serde(default)]
    extra: Vec<HidKeyCode>,
}

#[test]
fn test_json_uses_identifier_strings() {
    let json = serde_json::to_string(&HidKeyCode::LEFT_SHIFT).expect("serialize");
    assert_eq!(json, "\"LeftShift\"");

    let back: HidKeyCode = serde_json::from_str("\"leftshift\"").expect("deserialize");
    assert_eq!(back, HidKeyCode::LEFT_SHIFT);
}

#[test]
fn test_json_falls_back_to_numbers_for_unnamed_codes() {
    let json = serde_json::to_string(&HidKeyCode::from(0x03)).expect("serialize");
    assert_eq!(json, "3");

    let back: HidKeyCode = serde_json::from_str("3").expect("deserialize");
    assert_eq!(back, HidKeyCode::from(0x03));
}

#[test]
fn test_json_rejects_unknown_identifiers_and_out_of_range_numbers() {
    assert!(serde_json::from_str::<HidKeyCode>("\"NoSuchKey\"").is_err());
    assert!(serde_json::from_str::<HidKeyCode>("256").is_err());
    assert!(serde_json::from_str::<HidKeyCode>("-1").is_err());
}

#[test]
fn test_toml_binding_round_trip() {
    let text = r#"
        platform = "macos"
        key = "CapsLock"
        extra = ["LeftControl", 4]
    "#;

    let binding: Binding = toml::from_str(text).expect("parse TOML");

    assert_eq!(
        binding,
        Binding {
            platform: Platform::MacOs,
            key: HidKeyCode::CAPS_LOCK,
            extra: vec![HidKeyCode::LEFT_CONTROL, HidKeyCode::A],
        }
    );

    let written = toml::to_string(&binding).expect("write TOML");
    assert!(written.contains("key = \"CapsLock\""), "{written}");
    assert_eq!(toml::from_str::<Binding>(&written).expect("reparse"), binding);
}

#[test]
fn test_bincode_uses_one_raw_byte() {
    let bytes = bincode::serialize(&HidKeyCode::RIGHT_GUI).expect("serialize");
    assert_eq!(bytes, vec![0xE7]);

    let back: HidKeyCode = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(back, HidKeyCode::RIGHT_GUI);
}
