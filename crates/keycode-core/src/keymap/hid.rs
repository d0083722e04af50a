//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the canonical cross-platform key representation. Every platform
//! table in this crate translates to and from [`HidKeyCode`].
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number to
//! every key on a keyboard.  These numbers are called *Usage IDs* and they are
//! grouped by *Usage Page*.  All keyboard keys are on page 0x07 ("Keyboard/Keypad").
//!
//! | Key          | HID Usage ID | Identifier    |
//! |--------------|--------------|---------------|
//! | Letter A     | 0x04         | `A`           |
//! | Enter        | 0x28         | `Enter`       |
//! | Left Shift   | 0xE1         | `LeftShift`   |
//!
//! HID codes represent **physical key positions**, not characters.  The
//! character a key produces depends on the active keyboard layout, which is
//! exactly why they make a good platform-independent identity for a key.
//!
//! # The `NONE` value
//!
//! The usage page fits in a single byte, so [`HidKeyCode`] is a thin wrapper
//! around `u8` and every byte is a valid value.  [`HidKeyCode::NONE`] (0x00)
//! means "no key identified" and is what every table returns on a miss.
//!
//! # Named keys
//!
//! The keys this crate knows by name are declared once, in the list at the
//! bottom of this file.  That single list produces the associated constants
//! (`HidKeyCode::A`, `HidKeyCode::LEFT_SHIFT`, ...), the stable identifiers
//! used by [`crate::keyid`], and the human-readable display names.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::keyid;

/// USB HID Usage ID for a keyboard key (page 0x07).
///
/// The wrapped byte is the usage ID itself.  Any `u8` converts losslessly;
/// codes without a named constant are still valid, they simply have no
/// identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HidKeyCode(u8);

impl HidKeyCode {
    /// "No key identified."  Returned by every lookup that misses.
    pub const NONE: HidKeyCode = HidKeyCode(0);

    /// Wraps a raw HID usage ID.
    pub const fn from_u8(value: u8) -> Self {
        HidKeyCode(value)
    }

    /// Returns the raw HID usage ID.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns `true` for [`HidKeyCode::NONE`].
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this is one of the eight modifier keys (0xE0–0xE7).
    pub const fn is_modifier(self) -> bool {
        matches!(self.0, 0xE0..=0xE7)
    }

    /// Returns the stable identifier for this key, e.g. `"LeftShift"`.
    pub fn id(self) -> Option<&'static str> {
        keyid::code_to_id(i32::from(self.0))
    }

    /// Returns the human-readable display name, e.g. `"Left Shift"`.
    pub fn display_name(self) -> Option<&'static str> {
        keyid::code_to_display_name(i32::from(self.0))
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        HidKeyCode(value)
    }
}

impl From<HidKeyCode> for u8 {
    fn from(code: HidKeyCode) -> Self {
        code.0
    }
}

impl fmt::Display for HidKeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => f.write_str(id),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

// Human-readable formats (TOML, JSON) carry the identifier so configuration
// files can say `key = "LeftShift"`; binary formats carry the raw byte.
impl Serialize for HidKeyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.id() {
            Some(id) if serializer.is_human_readable() => serializer.serialize_str(id),
            _ => serializer.serialize_u8(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for HidKeyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(HidKeyCodeVisitor)
        } else {
            deserializer.deserialize_u8(HidKeyCodeVisitor)
        }
    }
}

struct HidKeyCodeVisitor;

impl<'de> Visitor<'de> for HidKeyCodeVisitor {
    type Value = HidKeyCode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a key identifier or a HID usage ID between 0 and 255")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<HidKeyCode, E> {
        u8::try_from(v)
            .map(HidKeyCode)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<HidKeyCode, E> {
        u8::try_from(v)
            .map(HidKeyCode)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HidKeyCode, E> {
        v.parse().map_err(E::custom)
    }
}

/// Identifier and display name of one named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyName {
    pub code: HidKeyCode,
    /// Stable ASCII identifier, matched case-insensitively.
    pub id: &'static str,
    /// Label for showing the key to a person.
    pub display: &'static str,
}

macro_rules! named_keys {
    ($($code:literal => $konst:ident, $id:literal, $display:literal;)*) => {
        impl HidKeyCode {
            $(
                #[doc = concat!("`", $id, "` (", $display, ").")]
                pub const $konst: HidKeyCode = HidKeyCode($code);
            )*
        }

        /// Every named key, in ascending code order.
        pub const NAMED_KEYS: &[KeyName] = &[
            $(KeyName { code: HidKeyCode($code), id: $id, display: $display },)*
        ];
    };
}

named_keys! {
    // Letters (HID 0x04–0x1D)
    0x04 => A, "A", "A";
    0x05 => B, "B", "B";
    0x06 => C, "C", "C";
    0x07 => D, "D", "D";
    0x08 => E, "E", "E";
    0x09 => F, "F", "F";
    0x0A => G, "G", "G";
    0x0B => H, "H", "H";
    0x0C => I, "I", "I";
    0x0D => J, "J", "J";
    0x0E => K, "K", "K";
    0x0F => L, "L", "L";
    0x10 => M, "M", "M";
    0x11 => N, "N", "N";
    0x12 => O, "O", "O";
    0x13 => P, "P", "P";
    0x14 => Q, "Q", "Q";
    0x15 => R, "R", "R";
    0x16 => S, "S", "S";
    0x17 => T, "T", "T";
    0x18 => U, "U", "U";
    0x19 => V, "V", "V";
    0x1A => W, "W", "W";
    0x1B => X, "X", "X";
    0x1C => Y, "Y", "Y";
    0x1D => Z, "Z", "Z";

    // Digits (HID 0x1E–0x27)
    0x1E => DIGIT_1, "1", "1";
    0x1F => DIGIT_2, "2", "2";
    0x20 => DIGIT_3, "3", "3";
    0x21 => DIGIT_4, "4", "4";
    0x22 => DIGIT_5, "5", "5";
    0x23 => DIGIT_6, "6", "6";
    0x24 => DIGIT_7, "7", "7";
    0x25 => DIGIT_8, "8", "8";
    0x26 => DIGIT_9, "9", "9";
    0x27 => DIGIT_0, "0", "0";

    // Control keys and punctuation (HID 0x28–0x38)
    0x28 => ENTER, "Enter", "Enter";
    0x29 => ESCAPE, "Escape", "Esc";
    0x2A => BACKSPACE, "Backspace", "Backspace";
    0x2B => TAB, "Tab", "Tab";
    0x2C => SPACE, "Space", "Space";
    0x2D => MINUS, "Minus", "-";
    0x2E => EQUALS, "Equals", "=";
    0x2F => LEFT_BRACKET, "LeftBracket", "[";
    0x30 => RIGHT_BRACKET, "RightBracket", "]";
    0x31 => BACKSLASH, "Backslash", "\\";
    0x32 => NON_US_HASH, "NonUSHash", "Non-US #";
    0x33 => SEMICOLON, "Semicolon", ";";
    0x34 => QUOTE, "Quote", "'";
    0x35 => GRAVE, "Grave", "`";
    0x36 => COMMA, "Comma", ",";
    0x37 => PERIOD, "Period", ".";
    0x38 => SLASH, "Slash", "/";
    0x39 => CAPS_LOCK, "CapsLock", "Caps Lock";

    // Function keys (HID 0x3A–0x45)
    0x3A => F1, "F1", "F1";
    0x3B => F2, "F2", "F2";
    0x3C => F3, "F3", "F3";
    0x3D => F4, "F4", "F4";
    0x3E => F5, "F5", "F5";
    0x3F => F6, "F6", "F6";
    0x40 => F7, "F7", "F7";
    0x41 => F8, "F8", "F8";
    0x42 => F9, "F9", "F9";
    0x43 => F10, "F10", "F10";
    0x44 => F11, "F11", "F11";
    0x45 => F12, "F12", "F12";

    // Navigation cluster (HID 0x46–0x52)
    0x46 => PRINT_SCREEN, "PrintScreen", "Print Screen";
    0x47 => SCROLL_LOCK, "ScrollLock", "Scroll Lock";
    0x48 => PAUSE, "Pause", "Pause";
    0x49 => INSERT, "Insert", "Insert";
    0x4A => HOME, "Home", "Home";
    0x4B => PAGE_UP, "PageUp", "Page Up";
    0x4C => DELETE, "Delete", "Delete";
    0x4D => END, "End", "End";
    0x4E => PAGE_DOWN, "PageDown", "Page Down";
    0x4F => RIGHT_ARROW, "RightArrow", "Right";
    0x50 => LEFT_ARROW, "LeftArrow", "Left";
    0x51 => DOWN_ARROW, "DownArrow", "Down";
    0x52 => UP_ARROW, "UpArrow", "Up";

    // Keypad (HID 0x53–0x63)
    0x53 => NUM_LOCK, "NumLock", "Num Lock";
    0x54 => KP_DIVIDE, "KPDivide", "Keypad /";
    0x55 => KP_MULTIPLY, "KPMultiply", "Keypad *";
    0x56 => KP_SUBTRACT, "KPSubtract", "Keypad -";
    0x57 => KP_ADD, "KPAdd", "Keypad +";
    0x58 => KP_ENTER, "KPEnter", "Keypad Enter";
    0x59 => KP_1, "KP1", "Keypad 1";
    0x5A => KP_2, "KP2", "Keypad 2";
    0x5B => KP_3, "KP3", "Keypad 3";
    0x5C => KP_4, "KP4", "Keypad 4";
    0x5D => KP_5, "KP5", "Keypad 5";
    0x5E => KP_6, "KP6", "Keypad 6";
    0x5F => KP_7, "KP7", "Keypad 7";
    0x60 => KP_8, "KP8", "Keypad 8";
    0x61 => KP_9, "KP9", "Keypad 9";
    0x62 => KP_0, "KP0", "Keypad 0";
    0x63 => KP_POINT, "KPPoint", "Keypad .";

    0x64 => NON_US_BACKSLASH, "NonUSBackslash", "Non-US \\";
    0x65 => APPLICATION, "Application", "Application";
    0x66 => POWER, "Power", "Power";
    0x67 => KP_EQUALS, "KPEquals", "Keypad =";

    // Extended function keys (HID 0x68–0x73)
    0x68 => F13, "F13", "F13";
    0x69 => F14, "F14", "F14";
    0x6A => F15, "F15", "F15";
    0x6B => F16, "F16", "F16";
    0x6C => F17, "F17", "F17";
    0x6D => F18, "F18", "F18";
    0x6E => F19, "F19", "F19";
    0x6F => F20, "F20", "F20";
    0x70 => F21, "F21", "F21";
    0x71 => F22, "F22", "F22";
    0x72 => F23, "F23", "F23";
    0x73 => F24, "F24", "F24";

    // Editing and media (HID 0x74–0x81)
    0x74 => EXECUTE, "Execute", "Execute";
    0x75 => HELP, "Help", "Help";
    0x76 => MENU, "Menu", "Menu";
    0x77 => SELECT, "Select", "Select";
    0x78 => STOP, "Stop", "Stop";
    0x79 => AGAIN, "Again", "Again";
    0x7A => UNDO, "Undo", "Undo";
    0x7B => CUT, "Cut", "Cut";
    0x7C => COPY, "Copy", "Copy";
    0x7D => PASTE, "Paste", "Paste";
    0x7E => FIND, "Find", "Find";
    0x7F => MUTE, "Mute", "Mute";
    0x80 => VOLUME_UP, "VolumeUp", "Volume Up";
    0x81 => VOLUME_DOWN, "VolumeDown", "Volume Down";
    0x82 => LOCKING_CAPS_LOCK, "LockingCapsLock", "Locking Caps Lock";
    0x83 => LOCKING_NUM_LOCK, "LockingNumLock", "Locking Num Lock";
    0x84 => LOCKING_SCROLL_LOCK, "LockingScrollLock", "Locking Scroll Lock";

    0x85 => KP_COMMA, "KPComma", "Keypad ,";
    0x86 => KP_EQUAL_SIGN, "KPEqualSign", "Keypad = (AS/400)";

    // International and language keys
    0x87 => INTERNATIONAL_1, "International1", "International 1";
    0x88 => INTERNATIONAL_2, "International2", "International 2";
    0x89 => INTERNATIONAL_3, "International3", "International 3";
    0x8A => INTERNATIONAL_4, "International4", "International 4";
    0x8B => INTERNATIONAL_5, "International5", "International 5";
    0x8C => INTERNATIONAL_6, "International6", "International 6";
    0x8D => INTERNATIONAL_7, "International7", "International 7";
    0x8E => INTERNATIONAL_8, "International8", "International 8";
    0x8F => INTERNATIONAL_9, "International9", "International 9";
    0x90 => LANG_1, "Lang1", "Lang 1";
    0x91 => LANG_2, "Lang2", "Lang 2";
    0x92 => LANG_3, "Lang3", "Lang 3";
    0x93 => LANG_4, "Lang4", "Lang 4";
    0x94 => LANG_5, "Lang5", "Lang 5";
    0x95 => LANG_6, "Lang6", "Lang 6";
    0x96 => LANG_7, "Lang7", "Lang 7";
    0x97 => LANG_8, "Lang8", "Lang 8";
    0x98 => LANG_9, "Lang9", "Lang 9";

    // Extra keypad symbols
    0xB6 => KP_LEFT_PAREN, "KPLeftParen", "Keypad (";
    0xB7 => KP_RIGHT_PAREN, "KPRightParen", "Keypad )";
    0xD7 => KP_PLUS_MINUS, "KPPlusMinus", "Keypad +/-";

    // Modifier keys (HID 0xE0–0xE7)
    0xE0 => LEFT_CONTROL, "LeftControl", "Left Control";
    0xE1 => LEFT_SHIFT, "LeftShift", "Left Shift";
    0xE2 => LEFT_ALT, "LeftAlt", "Left Alt";
    0xE3 => LEFT_GUI, "LeftGUI", "Left GUI";
    0xE4 => RIGHT_CONTROL, "RightControl", "Right Control";
    0xE5 => RIGHT_SHIFT, "RightShift", "Right Shift";
    0xE6 => RIGHT_ALT, "RightAlt", "Right Alt";
    0xE7 => RIGHT_GUI, "RightGUI", "Right GUI";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys_are_in_ascending_code_order() {
        for pair in NAMED_KEYS.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{} must come before {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_none_is_zero_and_has_no_identifier() {
        assert_eq!(HidKeyCode::NONE.as_u8(), 0);
        assert!(HidKeyCode::NONE.is_none());
        assert_eq!(HidKeyCode::NONE.id(), None);
    }

    #[test]
    fn test_all_letter_keys_are_contiguous_from_0x04() {
        let letters = [
            HidKeyCode::A, HidKeyCode::B, HidKeyCode::C, HidKeyCode::D,
            HidKeyCode::E, HidKeyCode::F, HidKeyCode::G, HidKeyCode::H,
            HidKeyCode::I, HidKeyCode::J, HidKeyCode::K, HidKeyCode::L,
            HidKeyCode::M, HidKeyCode::N, HidKeyCode::O, HidKeyCode::P,
            HidKeyCode::Q, HidKeyCode::R, HidKeyCode::S, HidKeyCode::T,
            HidKeyCode::U, HidKeyCode::V, HidKeyCode::W, HidKeyCode::X,
            HidKeyCode::Y, HidKeyCode::Z,
        ];
        for (i, letter) in letters.iter().enumerate() {
            assert_eq!(letter.as_u8(), 0x04 + i as u8, "{letter} is out of place");
        }
    }

    #[test]
    fn test_modifier_keys_are_identified_correctly() {
        for code in 0xE0..=0xE7u8 {
            assert!(HidKeyCode::from(code).is_modifier(), "0x{code:02X}");
        }
        for key in [HidKeyCode::A, HidKeyCode::CAPS_LOCK, HidKeyCode::NONE, HidKeyCode::from(0xE8)] {
            assert!(!key.is_modifier(), "{key} should NOT be a modifier key");
        }
    }

    #[test]
    fn test_display_uses_identifier_or_hex() {
        assert_eq!(HidKeyCode::LEFT_SHIFT.to_string(), "LeftShift");
        assert_eq!(HidKeyCode::DIGIT_1.to_string(), "1");
        assert_eq!(HidKeyCode::from(0x03).to_string(), "0x03");
        assert_eq!(HidKeyCode::from(0xFF).to_string(), "0xFF");
    }

    #[test]
    fn test_u8_conversions_are_lossless() {
        for raw in 0..=u8::MAX {
            assert_eq!(u8::from(HidKeyCode::from(raw)), raw);
        }
    }

    #[test]
    fn test_display_name_differs_from_identifier_where_defined() {
        assert_eq!(HidKeyCode::CAPS_LOCK.display_name(), Some("Caps Lock"));
        assert_eq!(HidKeyCode::MINUS.display_name(), Some("-"));
        assert_eq!(HidKeyCode::from(0x01).display_name(), None);
    }

    #[test]
    fn test_language_and_international_blocks_are_contiguous() {
        // Arrange
        let international = [
            HidKeyCode::INTERNATIONAL_1, HidKeyCode::INTERNATIONAL_2, HidKeyCode::INTERNATIONAL_3,
            HidKeyCode::INTERNATIONAL_4, HidKeyCode::INTERNATIONAL_5, HidKeyCode::INTERNATIONAL_6,
            HidKeyCode::INTERNATIONAL_7, HidKeyCode::INTERNATIONAL_8, HidKeyCode::INTERNATIONAL_9,
        ];
        let lang = [
            HidKeyCode::LANG_1, HidKeyCode::LANG_2, HidKeyCode::LANG_3,
            HidKeyCode::LANG_4, HidKeyCode::LANG_5, HidKeyCode::LANG_6,
            HidKeyCode::LANG_7, HidKeyCode::LANG_8, HidKeyCode::LANG_9,
        ];

        // Act / Assert
        for (i, key) in international.iter().enumerate() {
            assert_eq!(key.as_u8(), 0x87 + i as u8, "{key}");
        }
        for (i, key) in lang.iter().enumerate() {
            assert_eq!(key.as_u8(), 0x90 + i as u8, "{key}");
        }
    }

    #[test]
    fn test_locking_and_extra_keypad_keys_are_named() {
        assert_eq!(HidKeyCode::from(0x82).id(), Some("LockingCapsLock"));
        assert_eq!(HidKeyCode::from(0x84).id(), Some("LockingScrollLock"));
        assert_eq!(HidKeyCode::from(0x86).id(), Some("KPEqualSign"));
        assert_eq!(HidKeyCode::from(0xB6).display_name(), Some("Keypad ("));
        assert_eq!(HidKeyCode::from(0xD7).id(), Some("KPPlusMinus"));
    }
}
