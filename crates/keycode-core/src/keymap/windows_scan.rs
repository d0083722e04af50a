//! Windows scan code to USB HID Usage ID translation table.
//!
//! Reference: Microsoft "Keyboard Scan Code Specification" (scan code set 1)
//! and USB HID Usage Tables 1.3.
//!
//! # Why scan codes and not virtual-key codes? (for beginners)
//!
//! A Windows *virtual-key* code (`VK_*`) names a logical key and changes
//! with the keyboard layout, and it folds left/right modifiers together
//! (`VK_SHIFT`, `VK_CONTROL`).  The *scan code* carried in a keyboard
//! message's `lParam` names the physical key, which is what HID codes
//! describe too.
//!
//! # The native code space
//!
//! [`from_lparam`] folds the scan code and the "extended key" flag into one
//! byte: the low seven bits are the set-1 scan code, bit 7 is set for keys
//! sent with an `E0` prefix.  So Right Control (`E0 1D`) is `0x9D` and
//! Left Control (`1D`) is `0x1D`.

use super::hid::HidKeyCode;
use super::table::{invert, name_table, KeyTable};
use super::Platform;

/// Bit 24 of `lParam`: the key was sent with an `E0` prefix.
const LPARAM_EXTENDED: u32 = 1 << 24;

/// Bit 7 of the native code: extended key.
pub const EXTENDED: u8 = 0x80;

/// Extracts the native code from the `lParam` of a `WM_KEYDOWN`,
/// `WM_KEYUP`, `WM_SYSKEYDOWN` or `WM_SYSKEYUP` message.
///
/// `lParam` bits 16–23 hold the scan code and bit 24 the extended flag.
pub fn from_lparam(lparam: u32) -> u8 {
    let scan = ((lparam >> 16) & 0x7F) as u8;
    if lparam & LPARAM_EXTENDED != 0 {
        scan | EXTENDED
    } else {
        scan
    }
}

/// Native → HID table indexed by `scan | (extended ? 0x80 : 0)`.
pub const NATIVE_TO_HID: [HidKeyCode; 256] = {
    use HidKeyCode as K;
    let mut t = [K::NONE; 256];

    // ── Main block ────────────────────────────────────────────────────────────
    t[0x01] = K::ESCAPE;
    t[0x02] = K::DIGIT_1;
    t[0x03] = K::DIGIT_2;
    t[0x04] = K::DIGIT_3;
    t[0x05] = K::DIGIT_4;
    t[0x06] = K::DIGIT_5;
    t[0x07] = K::DIGIT_6;
    t[0x08] = K::DIGIT_7;
    t[0x09] = K::DIGIT_8;
    t[0x0A] = K::DIGIT_9;
    t[0x0B] = K::DIGIT_0;
    t[0x0C] = K::MINUS;
    t[0x0D] = K::EQUALS;
    t[0x0E] = K::BACKSPACE;
    t[0x0F] = K::TAB;
    t[0x10] = K::Q;
    t[0x11] = K::W;
    t[0x12] = K::E;
    t[0x13] = K::R;
    t[0x14] = K::T;
    t[0x15] = K::Y;
    t[0x16] = K::U;
    t[0x17] = K::I;
    t[0x18] = K::O;
    t[0x19] = K::P;
    t[0x1A] = K::LEFT_BRACKET;
    t[0x1B] = K::RIGHT_BRACKET;
    t[0x1C] = K::ENTER;
    t[0x1D] = K::LEFT_CONTROL;
    t[0x1E] = K::A;
    t[0x1F] = K::S;
    t[0x20] = K::D;
    t[0x21] = K::F;
    t[0x22] = K::G;
    t[0x23] = K::H;
    t[0x24] = K::J;
    t[0x25] = K::K;
    t[0x26] = K::L;
    t[0x27] = K::SEMICOLON;
    t[0x28] = K::QUOTE;
    t[0x29] = K::GRAVE;
    t[0x2A] = K::LEFT_SHIFT;
    t[0x2B] = K::BACKSLASH;
    t[0x2C] = K::Z;
    t[0x2D] = K::X;
    t[0x2E] = K::C;
    t[0x2F] = K::V;
    t[0x30] = K::B;
    t[0x31] = K::N;
    t[0x32] = K::M;
    t[0x33] = K::COMMA;
    t[0x34] = K::PERIOD;
    t[0x35] = K::SLASH;
    t[0x36] = K::RIGHT_SHIFT;
    t[0x37] = K::KP_MULTIPLY;
    t[0x38] = K::LEFT_ALT;
    t[0x39] = K::SPACE;
    t[0x3A] = K::CAPS_LOCK;

    // ── F1–F10 ────────────────────────────────────────────────────────────────
    t[0x3B] = K::F1;
    t[0x3C] = K::F2;
    t[0x3D] = K::F3;
    t[0x3E] = K::F4;
    t[0x3F] = K::F5;
    t[0x40] = K::F6;
    t[0x41] = K::F7;
    t[0x42] = K::F8;
    t[0x43] = K::F9;
    t[0x44] = K::F10;

    // Pause arrives as 45 without E0; Num Lock as 45 with it.
    t[0x45] = K::PAUSE;
    t[0x46] = K::SCROLL_LOCK;

    // ── Keypad ────────────────────────────────────────────────────────────────
    t[0x47] = K::KP_7;
    t[0x48] = K::KP_8;
    t[0x49] = K::KP_9;
    t[0x4A] = K::KP_SUBTRACT;
    t[0x4B] = K::KP_4;
    t[0x4C] = K::KP_5;
    t[0x4D] = K::KP_6;
    t[0x4E] = K::KP_ADD;
    t[0x4F] = K::KP_1;
    t[0x50] = K::KP_2;
    t[0x51] = K::KP_3;
    t[0x52] = K::KP_0;
    t[0x53] = K::KP_POINT;

    t[0x56] = K::NON_US_BACKSLASH;
    t[0x57] = K::F11;
    t[0x58] = K::F12;
    t[0x59] = K::KP_EQUALS;
    t[0x5C] = K::INTERNATIONAL_6; // Japanese keypad comma

    // ── F13–F24 ───────────────────────────────────────────────────────────────
    t[0x64] = K::F13;
    t[0x65] = K::F14;
    t[0x66] = K::F15;
    t[0x67] = K::F16;
    t[0x68] = K::F17;
    t[0x69] = K::F18;
    t[0x6A] = K::F19;
    t[0x6B] = K::F20;
    t[0x6C] = K::F21;
    t[0x6D] = K::F22;
    t[0x6E] = K::F23;
    t[0x76] = K::F24;

    // ── Japanese / Brazilian keys ─────────────────────────────────────────────
    t[0x70] = K::INTERNATIONAL_2; // Katakana/Hiragana
    t[0x73] = K::INTERNATIONAL_1; // Ro, ABNT /?
    t[0x77] = K::LANG_4; // Hiragana
    t[0x78] = K::LANG_3; // Katakana
    t[0x79] = K::INTERNATIONAL_4; // Henkan
    t[0x7B] = K::INTERNATIONAL_5; // Muhenkan
    t[0x7D] = K::INTERNATIONAL_3; // Yen
    t[0x7E] = K::KP_COMMA; // ABNT keypad .

    // ── Extended (E0-prefixed) keys ───────────────────────────────────────────
    t[0x9C] = K::KP_ENTER;
    t[0x9D] = K::RIGHT_CONTROL;
    t[0xA0] = K::MUTE;
    t[0xAE] = K::VOLUME_DOWN;
    t[0xB0] = K::VOLUME_UP;
    t[0xB5] = K::KP_DIVIDE;
    t[0xB7] = K::PRINT_SCREEN;
    t[0xB8] = K::RIGHT_ALT;
    t[0xC5] = K::NUM_LOCK;
    t[0xC7] = K::HOME;
    t[0xC8] = K::UP_ARROW;
    t[0xC9] = K::PAGE_UP;
    t[0xCB] = K::LEFT_ARROW;
    t[0xCD] = K::RIGHT_ARROW;
    t[0xCF] = K::END;
    t[0xD0] = K::DOWN_ARROW;
    t[0xD1] = K::PAGE_DOWN;
    t[0xD2] = K::INSERT;
    t[0xD3] = K::DELETE;
    t[0xDB] = K::LEFT_GUI;
    t[0xDC] = K::RIGHT_GUI;
    t[0xDD] = K::APPLICATION;
    t[0xDE] = K::POWER;

    t
};

/// HID → native table derived from [`NATIVE_TO_HID`].
pub const HID_TO_NATIVE: [u8; 256] = invert(&NATIVE_TO_HID);

/// US-layout `VK_*` name (prefix removed) of the key at each scan position.
pub const RAW_NAMES: [Option<&str>; 256] = name_table(&[
    (0x01, "ESCAPE"), (0x02, "1"), (0x03, "2"), (0x04, "3"), (0x05, "4"),
    (0x06, "5"), (0x07, "6"), (0x08, "7"), (0x09, "8"), (0x0A, "9"),
    (0x0B, "0"), (0x0C, "OEM_MINUS"), (0x0D, "OEM_PLUS"), (0x0E, "BACK"),
    (0x0F, "TAB"), (0x10, "Q"), (0x11, "W"), (0x12, "E"), (0x13, "R"),
    (0x14, "T"), (0x15, "Y"), (0x16, "U"), (0x17, "I"), (0x18, "O"),
    (0x19, "P"), (0x1A, "OEM_4"), (0x1B, "OEM_6"), (0x1C, "RETURN"),
    (0x1D, "LCONTROL"), (0x1E, "A"), (0x1F, "S"), (0x20, "D"), (0x21, "F"),
    (0x22, "G"), (0x23, "H"), (0x24, "J"), (0x25, "K"), (0x26, "L"),
    (0x27, "OEM_1"), (0x28, "OEM_7"), (0x29, "OEM_3"), (0x2A, "LSHIFT"),
    (0x2B, "OEM_5"), (0x2C, "Z"), (0x2D, "X"), (0x2E, "C"), (0x2F, "V"),
    (0x30, "B"), (0x31, "N"), (0x32, "M"), (0x33, "OEM_COMMA"),
    (0x34, "OEM_PERIOD"), (0x35, "OEM_2"), (0x36, "RSHIFT"),
    (0x37, "MULTIPLY"), (0x38, "LMENU"), (0x39, "SPACE"), (0x3A, "CAPITAL"),
    (0x3B, "F1"), (0x3C, "F2"), (0x3D, "F3"), (0x3E, "F4"), (0x3F, "F5"),
    (0x40, "F6"), (0x41, "F7"), (0x42, "F8"), (0x43, "F9"), (0x44, "F10"),
    (0x45, "PAUSE"), (0x46, "SCROLL"), (0x47, "NUMPAD7"), (0x48, "NUMPAD8"),
    (0x49, "NUMPAD9"), (0x4A, "SUBTRACT"), (0x4B, "NUMPAD4"),
    (0x4C, "NUMPAD5"), (0x4D, "NUMPAD6"), (0x4E, "ADD"), (0x4F, "NUMPAD1"),
    (0x50, "NUMPAD2"), (0x51, "NUMPAD3"), (0x52, "NUMPAD0"),
    (0x53, "DECIMAL"), (0x54, "SNAPSHOT"), (0x56, "OEM_102"), (0x57, "F11"),
    (0x58, "F12"), (0x59, "CLEAR"), (0x5C, "SEPARATOR"), (0x64, "F13"),
    (0x65, "F14"), (0x66, "F15"), (0x67, "F16"), (0x68, "F17"),
    (0x69, "F18"), (0x6A, "F19"), (0x6B, "F20"), (0x6C, "F21"),
    (0x6D, "F22"), (0x6E, "F23"), (0x70, "KANA"), (0x73, "ABNT_C1"),
    (0x76, "F24"), (0x77, "DBE_HIRAGANA"), (0x78, "DBE_KATAKANA"),
    (0x79, "CONVERT"), (0x7B, "NONCONVERT"), (0x7D, "OEM_8"),
    (0x7E, "ABNT_C2"), (0x90, "MEDIA_PREV_TRACK"), (0x99, "MEDIA_NEXT_TRACK"),
    (0x9C, "RETURN"), (0x9D, "RCONTROL"), (0xA0, "VOLUME_MUTE"),
    (0xA1, "LAUNCH_APP2"), (0xA2, "MEDIA_PLAY_PAUSE"), (0xA4, "MEDIA_STOP"),
    (0xAE, "VOLUME_DOWN"), (0xB0, "VOLUME_UP"), (0xB2, "BROWSER_HOME"),
    (0xB5, "DIVIDE"), (0xB7, "SNAPSHOT"), (0xB8, "RMENU"), (0xC5, "NUMLOCK"),
    (0xC6, "CANCEL"), (0xC7, "HOME"), (0xC8, "UP"), (0xC9, "PRIOR"),
    (0xCB, "LEFT"), (0xCD, "RIGHT"), (0xCF, "END"), (0xD0, "DOWN"),
    (0xD1, "NEXT"), (0xD2, "INSERT"), (0xD3, "DELETE"), (0xDB, "LWIN"),
    (0xDC, "RWIN"), (0xDD, "APPS"), (0xDE, "POWER"), (0xDF, "SLEEP"),
    (0xE5, "BROWSER_SEARCH"), (0xE6, "BROWSER_FAVORITES"),
    (0xE7, "BROWSER_REFRESH"), (0xE8, "BROWSER_STOP"),
    (0xE9, "BROWSER_FORWARD"), (0xEA, "BROWSER_BACK"),
    (0xEB, "LAUNCH_APP1"), (0xEC, "LAUNCH_MAIL"),
    (0xED, "LAUNCH_MEDIA_SELECT"),
]);

pub static TABLE: KeyTable = KeyTable::new(Platform::Windows, &NATIVE_TO_HID, &HID_TO_NATIVE, &RAW_NAMES);

/// Translates a native code (see [`from_lparam`]) to HID.
pub fn to_hid(code: u32) -> HidKeyCode {
    TABLE.to_hid(code)
}

/// Translates a HID code to a native code, or `None` if there is no such key.
pub fn from_hid(hid: HidKeyCode) -> Option<u8> {
    TABLE.from_hid(hid)
}

/// Returns the US-layout `VK_*` name of a native code.
pub fn raw_name(code: u32) -> Option<&'static str> {
    TABLE.raw_name(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lparam_extracts_scan_code() {
        // 'A' key down, repeat count 1.
        assert_eq!(from_lparam(0x001E_0001), 0x1E);
    }

    #[test]
    fn test_from_lparam_sets_bit_7_for_extended_keys() {
        assert_eq!(from_lparam(0x0139_0001), 0xB9);
        // Right Control: scan 1D with the extended flag.
        assert_eq!(from_lparam(0x011D_0001), 0x9D);
    }

    #[test]
    fn test_from_lparam_ignores_bits_above_24_and_scan_bit_7() {
        // Bit 30 (previous state) and bit 31 (transition) set on key up.
        assert_eq!(from_lparam(0xC01E_0001), 0x1E);
        // Bit 23 lies outside the 7-bit scan code.
        assert_eq!(from_lparam(0x00FF_0000), 0x7F);
        assert_eq!(from_lparam(u32::MAX), 0xFF);
        assert_eq!(from_lparam(0), 0);
    }

    #[test]
    fn test_left_and_right_modifiers_are_distinct_native_codes() {
        assert_eq!(to_hid(0x1D), HidKeyCode::LEFT_CONTROL);
        assert_eq!(to_hid(0x9D), HidKeyCode::RIGHT_CONTROL);
        assert_eq!(to_hid(0x2A), HidKeyCode::LEFT_SHIFT);
        assert_eq!(to_hid(0x36), HidKeyCode::RIGHT_SHIFT);
        assert_eq!(to_hid(0x38), HidKeyCode::LEFT_ALT);
        assert_eq!(to_hid(0xB8), HidKeyCode::RIGHT_ALT);
    }

    #[test]
    fn test_pause_and_num_lock_share_scan_code_but_not_native_code() {
        assert_eq!(to_hid(0x45), HidKeyCode::PAUSE);
        assert_eq!(to_hid(0xC5), HidKeyCode::NUM_LOCK);
    }

    #[test]
    fn test_extended_navigation_keys_differ_from_keypad() {
        assert_eq!(to_hid(0x47), HidKeyCode::KP_7);
        assert_eq!(to_hid(0xC7), HidKeyCode::HOME);
        assert_eq!(to_hid(0x1C), HidKeyCode::ENTER);
        assert_eq!(to_hid(0x9C), HidKeyCode::KP_ENTER);
    }

    #[test]
    fn test_from_hid_round_trips_through_lparam_layout() {
        let native = from_hid(HidKeyCode::UP_ARROW).unwrap_or_default();
        let extended = if native & EXTENDED != 0 { LPARAM_EXTENDED } else { 0 };
        let lparam = (u32::from(native & 0x7F) << 16) | extended | 1;
        assert_eq!(to_hid(u32::from(from_lparam(lparam))), HidKeyCode::UP_ARROW);
    }

    #[test]
    fn test_japanese_keys_map() {
        assert_eq!(to_hid(0x5C), HidKeyCode::INTERNATIONAL_6);
        assert_eq!(to_hid(0x77), HidKeyCode::LANG_4);
        assert_eq!(to_hid(0x78), HidKeyCode::LANG_3);
        assert_eq!(to_hid(0x70), HidKeyCode::INTERNATIONAL_2);
        // Zenkaku/Hankaku would share 0x76 with F24.
        assert_eq!(to_hid(0x76), HidKeyCode::F24);
        assert_eq!(from_hid(HidKeyCode::LANG_5), None);
    }

    #[test]
    fn test_raw_names() {
        assert_eq!(raw_name(0x1E), Some("A"));
        assert_eq!(raw_name(0x9D), Some("RCONTROL"));
        assert_eq!(raw_name(0x00), None);
        assert_eq!(raw_name(300), None);
    }
}
