//! macOS virtual keycode to USB HID Usage ID translation table.
//!
//! Reference: Carbon `HIToolbox/Events.h` (`kVK_*` constants).
//! macOS keycodes range from 0x00 to 0x7F.
//!
//! # What is a macOS virtual keycode? (for beginners)
//!
//! `NSEvent.keyCode` and the CoreGraphics `kCGKeyboardEventKeycode` field
//! report a layout-independent number for the physical key, named `kVK_*`
//! in the SDK.  For example `kVK_ANSI_A = 0x00` and `kVK_Return = 0x24`.
//! Codes are seven bits wide, so the table has 128 entries.
//!
//! # Modifier keys
//!
//! Modifier keys do not produce key-down/key-up events.  Instead AppKit sends
//! `NSEventTypeFlagsChanged` carrying the keycode of the modifier that
//! changed.  To tell press from release, test the device-dependent flag of
//! that specific key (see [`modifier_flag`]) against the event's modifier
//! flags: set means pressed.

use super::hid::HidKeyCode;
use super::table::{invert, name_table, KeyTable};
use super::Platform;

/// Number of macOS virtual keycodes.
pub const NATIVE_RANGE: usize = 128;

/// Native → HID table indexed by `kVK_*` code (0x00–0x7F).
pub const NATIVE_TO_HID: [HidKeyCode; NATIVE_RANGE] = {
    use HidKeyCode as K;
    let mut t = [K::NONE; NATIVE_RANGE];

    // ── ANSI letters and digits (kVK_ANSI_*) ──────────────────────────────────
    t[0x00] = K::A;
    t[0x01] = K::S;
    t[0x02] = K::D;
    t[0x03] = K::F;
    t[0x04] = K::H;
    t[0x05] = K::G;
    t[0x06] = K::Z;
    t[0x07] = K::X;
    t[0x08] = K::C;
    t[0x09] = K::V;
    t[0x0A] = K::NON_US_BACKSLASH; // kVK_ISO_Section
    t[0x0B] = K::B;
    t[0x0C] = K::Q;
    t[0x0D] = K::W;
    t[0x0E] = K::E;
    t[0x0F] = K::R;
    t[0x10] = K::Y;
    t[0x11] = K::T;
    t[0x12] = K::DIGIT_1;
    t[0x13] = K::DIGIT_2;
    t[0x14] = K::DIGIT_3;
    t[0x15] = K::DIGIT_4;
    t[0x16] = K::DIGIT_6;
    t[0x17] = K::DIGIT_5;
    t[0x18] = K::EQUALS;
    t[0x19] = K::DIGIT_9;
    t[0x1A] = K::DIGIT_7;
    t[0x1B] = K::MINUS;
    t[0x1C] = K::DIGIT_8;
    t[0x1D] = K::DIGIT_0;
    t[0x1E] = K::RIGHT_BRACKET;
    t[0x1F] = K::O;
    t[0x20] = K::U;
    t[0x21] = K::LEFT_BRACKET;
    t[0x22] = K::I;
    t[0x23] = K::P;
    t[0x24] = K::ENTER; // kVK_Return
    t[0x25] = K::L;
    t[0x26] = K::J;
    t[0x27] = K::QUOTE;
    t[0x28] = K::K;
    t[0x29] = K::SEMICOLON;
    t[0x2A] = K::BACKSLASH;
    t[0x2B] = K::COMMA;
    t[0x2C] = K::SLASH;
    t[0x2D] = K::N;
    t[0x2E] = K::M;
    t[0x2F] = K::PERIOD;
    t[0x30] = K::TAB;
    t[0x31] = K::SPACE;
    t[0x32] = K::GRAVE;
    t[0x33] = K::BACKSPACE; // kVK_Delete
    t[0x35] = K::ESCAPE;

    // ── Modifiers (0x36–0x3E, see MODIFIER_FLAGS) ─────────────────────────────
    t[0x36] = K::RIGHT_GUI;
    t[0x37] = K::LEFT_GUI;
    t[0x38] = K::LEFT_SHIFT;
    t[0x39] = K::CAPS_LOCK;
    t[0x3A] = K::LEFT_ALT;
    t[0x3B] = K::LEFT_CONTROL;
    t[0x3C] = K::RIGHT_SHIFT;
    t[0x3D] = K::RIGHT_ALT;
    t[0x3E] = K::RIGHT_CONTROL;
    // 0x3F kVK_Function has no HID usage on page 0x07.

    // ── Keypad ────────────────────────────────────────────────────────────────
    t[0x41] = K::KP_POINT;
    t[0x43] = K::KP_MULTIPLY;
    t[0x45] = K::KP_ADD;
    t[0x47] = K::NUM_LOCK; // kVK_ANSI_KeypadClear
    t[0x4B] = K::KP_DIVIDE;
    t[0x4C] = K::KP_ENTER;
    t[0x4E] = K::KP_SUBTRACT;
    t[0x51] = K::KP_EQUALS;
    t[0x52] = K::KP_0;
    t[0x53] = K::KP_1;
    t[0x54] = K::KP_2;
    t[0x55] = K::KP_3;
    t[0x56] = K::KP_4;
    t[0x57] = K::KP_5;
    t[0x58] = K::KP_6;
    t[0x59] = K::KP_7;
    t[0x5B] = K::KP_8;
    t[0x5C] = K::KP_9;

    // ── Volume ────────────────────────────────────────────────────────────────
    t[0x48] = K::VOLUME_UP;
    t[0x49] = K::VOLUME_DOWN;
    t[0x4A] = K::MUTE;

    // ── JIS keys ──────────────────────────────────────────────────────────────
    t[0x5D] = K::INTERNATIONAL_3; // kVK_JIS_Yen
    t[0x5E] = K::INTERNATIONAL_1; // kVK_JIS_Underscore
    t[0x5F] = K::KP_COMMA; // kVK_JIS_KeypadComma
    t[0x66] = K::LANG_2; // kVK_JIS_Eisu
    t[0x68] = K::LANG_1; // kVK_JIS_Kana

    // ── Function keys (scattered) ─────────────────────────────────────────────
    t[0x7A] = K::F1;
    t[0x78] = K::F2;
    t[0x63] = K::F3;
    t[0x76] = K::F4;
    t[0x60] = K::F5;
    t[0x61] = K::F6;
    t[0x62] = K::F7;
    t[0x64] = K::F8;
    t[0x65] = K::F9;
    t[0x6D] = K::F10;
    t[0x67] = K::F11;
    t[0x6F] = K::F12;
    t[0x69] = K::F13;
    t[0x6B] = K::F14;
    t[0x71] = K::F15;
    t[0x6A] = K::F16;
    t[0x40] = K::F17;
    t[0x4F] = K::F18;
    t[0x50] = K::F19;
    t[0x5A] = K::F20;

    // ── Navigation cluster ────────────────────────────────────────────────────
    t[0x6E] = K::APPLICATION; // kVK_ContextualMenu
    t[0x72] = K::INSERT; // kVK_Help sits where Insert is on PC keyboards
    t[0x73] = K::HOME;
    t[0x74] = K::PAGE_UP;
    t[0x75] = K::DELETE; // kVK_ForwardDelete
    t[0x77] = K::END;
    t[0x79] = K::PAGE_DOWN;
    t[0x7B] = K::LEFT_ARROW;
    t[0x7C] = K::RIGHT_ARROW;
    t[0x7D] = K::DOWN_ARROW;
    t[0x7E] = K::UP_ARROW;

    t
};

/// HID → native table derived from [`NATIVE_TO_HID`].  Every native value is
/// below 0x80.
pub const HID_TO_NATIVE: [u8; 256] = invert(&NATIVE_TO_HID);

/// `kVK_*` names from `HIToolbox/Events.h`, prefix removed.
pub const RAW_NAMES: [Option<&str>; NATIVE_RANGE] = name_table(&[
    (0x00, "ANSI_A"), (0x01, "ANSI_S"), (0x02, "ANSI_D"), (0x03, "ANSI_F"),
    (0x04, "ANSI_H"), (0x05, "ANSI_G"), (0x06, "ANSI_Z"), (0x07, "ANSI_X"),
    (0x08, "ANSI_C"), (0x09, "ANSI_V"), (0x0A, "ISO_Section"),
    (0x0B, "ANSI_B"), (0x0C, "ANSI_Q"), (0x0D, "ANSI_W"), (0x0E, "ANSI_E"),
    (0x0F, "ANSI_R"), (0x10, "ANSI_Y"), (0x11, "ANSI_T"), (0x12, "ANSI_1"),
    (0x13, "ANSI_2"), (0x14, "ANSI_3"), (0x15, "ANSI_4"), (0x16, "ANSI_6"),
    (0x17, "ANSI_5"), (0x18, "ANSI_Equal"), (0x19, "ANSI_9"),
    (0x1A, "ANSI_7"), (0x1B, "ANSI_Minus"), (0x1C, "ANSI_8"),
    (0x1D, "ANSI_0"), (0x1E, "ANSI_RightBracket"), (0x1F, "ANSI_O"),
    (0x20, "ANSI_U"), (0x21, "ANSI_LeftBracket"), (0x22, "ANSI_I"),
    (0x23, "ANSI_P"), (0x24, "Return"), (0x25, "ANSI_L"), (0x26, "ANSI_J"),
    (0x27, "ANSI_Quote"), (0x28, "ANSI_K"), (0x29, "ANSI_Semicolon"),
    (0x2A, "ANSI_Backslash"), (0x2B, "ANSI_Comma"), (0x2C, "ANSI_Slash"),
    (0x2D, "ANSI_N"), (0x2E, "ANSI_M"), (0x2F, "ANSI_Period"), (0x30, "Tab"),
    (0x31, "Space"), (0x32, "ANSI_Grave"), (0x33, "Delete"),
    (0x35, "Escape"), (0x36, "RightCommand"), (0x37, "Command"),
    (0x38, "Shift"), (0x39, "CapsLock"), (0x3A, "Option"), (0x3B, "Control"),
    (0x3C, "RightShift"), (0x3D, "RightOption"), (0x3E, "RightControl"),
    (0x3F, "Function"), (0x40, "F17"), (0x41, "ANSI_KeypadDecimal"),
    (0x43, "ANSI_KeypadMultiply"), (0x45, "ANSI_KeypadPlus"),
    (0x47, "ANSI_KeypadClear"), (0x48, "VolumeUp"), (0x49, "VolumeDown"),
    (0x4A, "Mute"), (0x4B, "ANSI_KeypadDivide"), (0x4C, "ANSI_KeypadEnter"),
    (0x4E, "ANSI_KeypadMinus"), (0x4F, "F18"), (0x50, "F19"),
    (0x51, "ANSI_KeypadEquals"), (0x52, "ANSI_Keypad0"),
    (0x53, "ANSI_Keypad1"), (0x54, "ANSI_Keypad2"), (0x55, "ANSI_Keypad3"),
    (0x56, "ANSI_Keypad4"), (0x57, "ANSI_Keypad5"), (0x58, "ANSI_Keypad6"),
    (0x59, "ANSI_Keypad7"), (0x5A, "F20"), (0x5B, "ANSI_Keypad8"),
    (0x5C, "ANSI_Keypad9"), (0x5D, "JIS_Yen"), (0x5E, "JIS_Underscore"),
    (0x5F, "JIS_KeypadComma"), (0x60, "F5"), (0x61, "F6"), (0x62, "F7"),
    (0x63, "F3"), (0x64, "F8"), (0x65, "F9"), (0x66, "JIS_Eisu"),
    (0x67, "F11"), (0x68, "JIS_Kana"), (0x69, "F13"), (0x6A, "F16"),
    (0x6B, "F14"), (0x6D, "F10"), (0x6E, "ContextualMenu"), (0x6F, "F12"),
    (0x71, "F15"), (0x72, "Help"), (0x73, "Home"), (0x74, "PageUp"),
    (0x75, "ForwardDelete"), (0x76, "F4"), (0x77, "End"), (0x78, "F2"),
    (0x79, "PageDown"), (0x7A, "F1"), (0x7B, "LeftArrow"),
    (0x7C, "RightArrow"), (0x7D, "DownArrow"), (0x7E, "UpArrow"),
]);

/// First keycode covered by [`MODIFIER_FLAGS`] (`kVK_RightCommand`).
pub const FIRST_MODIFIER: u32 = 0x36;

/// Device-dependent modifier masks from `IOLLEvent.h`, indexed by
/// `keycode - FIRST_MODIFIER`.  The Function key is deliberately absent.
pub const MODIFIER_FLAGS: [u32; 9] = [
    0x0000_0010, // Right Command: NX_DEVICERCMDKEYMASK
    0x0000_0008, // Left Command: NX_DEVICELCMDKEYMASK
    0x0000_0002, // Left Shift: NX_DEVICELSHIFTKEYMASK
    0x0001_0000, // Caps Lock: NX_ALPHASHIFTMASK
    0x0000_0020, // Left Option: NX_DEVICELALTKEYMASK
    0x0000_0001, // Left Control: NX_DEVICELCTLKEYMASK
    0x0000_0004, // Right Shift: NX_DEVICERSHIFTKEYMASK
    0x0000_0040, // Right Option: NX_DEVICERALTKEYMASK
    0x0000_2000, // Right Control: NX_DEVICERCTLKEYMASK
];

pub static TABLE: KeyTable = KeyTable::new(Platform::MacOs, &NATIVE_TO_HID, &HID_TO_NATIVE, &RAW_NAMES);

/// Translates a `kVK_*` code to HID.  Codes at or above 0x80 return
/// [`HidKeyCode::NONE`].
pub fn to_hid(code: u32) -> HidKeyCode {
    TABLE.to_hid(code)
}

/// Translates a HID code to a `kVK_*` code, or `None` if macOS has no such key.
pub fn from_hid(hid: HidKeyCode) -> Option<u8> {
    TABLE.from_hid(hid)
}

/// Returns the device-dependent modifier flag for a modifier keycode, or 0
/// if `code` is not one of the nine modifier keys.
///
/// The caller compares the result against the event's modifier flags; this
/// function does not track key state.
pub fn modifier_flag(code: u32) -> u32 {
    code.checked_sub(FIRST_MODIFIER)
        .and_then(|offset| MODIFIER_FLAGS.get(offset as usize))
        .copied()
        .unwrap_or(0)
}

/// Returns the `kVK_*` name (without prefix) of a keycode.
pub fn raw_name(code: u32) -> Option<&'static str> {
    TABLE.raw_name(code)
}
