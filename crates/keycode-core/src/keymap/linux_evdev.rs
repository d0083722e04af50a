//! Linux evdev key code to USB HID Usage ID translation table.
//!
//! Reference: `linux/input-event-codes.h` and the kernel's `hid-input.c`.
//! Evdev key codes used here range from 0 to 255.
//!
//! # What is an evdev key code? (for beginners)
//!
//! The Linux input subsystem reports every key as a `KEY_*` constant
//! (`KEY_ESC = 1`, `KEY_A = 30`, ...).  These identify physical positions,
//! just like HID codes, but with a completely different numbering.
//!
//! X11 and Wayland keycodes are the evdev code **plus 8**.  Use
//! [`from_x11_keycode`] (or subtract [`EVDEV_OFFSET`] yourself) before
//! calling [`to_hid`].

use super::hid::HidKeyCode;
use super::table::{invert, name_table, KeyTable};
use super::Platform;

/// Offset between X11/Wayland keycodes and evdev codes.
pub const EVDEV_OFFSET: u32 = 8;

/// Native → HID table indexed by evdev code (0–255).
pub const NATIVE_TO_HID: [HidKeyCode; 256] = {
    use HidKeyCode as K;
    let mut t = [K::NONE; 256];

    // ── Main block, in evdev order ────────────────────────────────────────────
    t[1] = K::ESCAPE;
    t[2] = K::DIGIT_1;
    t[3] = K::DIGIT_2;
    t[4] = K::DIGIT_3;
    t[5] = K::DIGIT_4;
    t[6] = K::DIGIT_5;
    t[7] = K::DIGIT_6;
    t[8] = K::DIGIT_7;
    t[9] = K::DIGIT_8;
    t[10] = K::DIGIT_9;
    t[11] = K::DIGIT_0;
    t[12] = K::MINUS;
    t[13] = K::EQUALS;
    t[14] = K::BACKSPACE;
    t[15] = K::TAB;
    t[16] = K::Q;
    t[17] = K::W;
    t[18] = K::E;
    t[19] = K::R;
    t[20] = K::T;
    t[21] = K::Y;
    t[22] = K::U;
    t[23] = K::I;
    t[24] = K::O;
    t[25] = K::P;
    t[26] = K::LEFT_BRACKET;
    t[27] = K::RIGHT_BRACKET;
    t[28] = K::ENTER;
    t[29] = K::LEFT_CONTROL;
    t[30] = K::A;
    t[31] = K::S;
    t[32] = K::D;
    t[33] = K::F;
    t[34] = K::G;
    t[35] = K::H;
    t[36] = K::J;
    t[37] = K::K;
    t[38] = K::L;
    t[39] = K::SEMICOLON;
    t[40] = K::QUOTE;
    t[41] = K::GRAVE;
    t[42] = K::LEFT_SHIFT;
    t[43] = K::BACKSLASH;
    t[44] = K::Z;
    t[45] = K::X;
    t[46] = K::C;
    t[47] = K::V;
    t[48] = K::B;
    t[49] = K::N;
    t[50] = K::M;
    t[51] = K::COMMA;
    t[52] = K::PERIOD;
    t[53] = K::SLASH;
    t[54] = K::RIGHT_SHIFT;
    t[55] = K::KP_MULTIPLY;
    t[56] = K::LEFT_ALT;
    t[57] = K::SPACE;
    t[58] = K::CAPS_LOCK;

    // ── F1–F10 ────────────────────────────────────────────────────────────────
    t[59] = K::F1;
    t[60] = K::F2;
    t[61] = K::F3;
    t[62] = K::F4;
    t[63] = K::F5;
    t[64] = K::F6;
    t[65] = K::F7;
    t[66] = K::F8;
    t[67] = K::F9;
    t[68] = K::F10;

    // ── Keypad ────────────────────────────────────────────────────────────────
    t[69] = K::NUM_LOCK;
    t[70] = K::SCROLL_LOCK;
    t[71] = K::KP_7;
    t[72] = K::KP_8;
    t[73] = K::KP_9;
    t[74] = K::KP_SUBTRACT;
    t[75] = K::KP_4;
    t[76] = K::KP_5;
    t[77] = K::KP_6;
    t[78] = K::KP_ADD;
    t[79] = K::KP_1;
    t[80] = K::KP_2;
    t[81] = K::KP_3;
    t[82] = K::KP_0;
    t[83] = K::KP_POINT;

    t[85] = K::LANG_5; // KEY_ZENKAKUHANKAKU
    t[86] = K::NON_US_BACKSLASH; // KEY_102ND
    t[87] = K::F11;
    t[88] = K::F12;
    t[89] = K::INTERNATIONAL_1; // KEY_RO
    t[90] = K::LANG_3; // KEY_KATAKANA
    t[91] = K::LANG_4; // KEY_HIRAGANA
    t[92] = K::INTERNATIONAL_4; // KEY_HENKAN
    t[93] = K::INTERNATIONAL_2; // KEY_KATAKANAHIRAGANA
    t[94] = K::INTERNATIONAL_5; // KEY_MUHENKAN
    t[95] = K::INTERNATIONAL_6; // KEY_KPJPCOMMA
    t[96] = K::KP_ENTER;
    t[97] = K::RIGHT_CONTROL;
    t[98] = K::KP_DIVIDE;
    t[99] = K::PRINT_SCREEN; // KEY_SYSRQ
    t[100] = K::RIGHT_ALT;

    // ── Navigation cluster ────────────────────────────────────────────────────
    t[102] = K::HOME;
    t[103] = K::UP_ARROW;
    t[104] = K::PAGE_UP;
    t[105] = K::LEFT_ARROW;
    t[106] = K::RIGHT_ARROW;
    t[107] = K::END;
    t[108] = K::DOWN_ARROW;
    t[109] = K::PAGE_DOWN;
    t[110] = K::INSERT;
    t[111] = K::DELETE;

    t[113] = K::MUTE;
    t[114] = K::VOLUME_DOWN;
    t[115] = K::VOLUME_UP;
    t[116] = K::POWER;
    t[117] = K::KP_EQUALS;
    t[118] = K::KP_PLUS_MINUS;
    t[119] = K::PAUSE;
    t[121] = K::KP_COMMA;
    t[122] = K::LANG_1; // KEY_HANGEUL
    t[123] = K::LANG_2; // KEY_HANJA
    t[124] = K::INTERNATIONAL_3; // KEY_YEN
    t[125] = K::LEFT_GUI; // KEY_LEFTMETA
    t[126] = K::RIGHT_GUI; // KEY_RIGHTMETA
    t[127] = K::APPLICATION; // KEY_COMPOSE

    // ── Editing keys ──────────────────────────────────────────────────────────
    t[128] = K::STOP;
    t[129] = K::AGAIN;
    t[131] = K::UNDO;
    t[132] = K::SELECT; // KEY_FRONT
    t[133] = K::COPY;
    t[134] = K::EXECUTE; // KEY_OPEN
    t[135] = K::PASTE;
    t[136] = K::FIND;
    t[137] = K::CUT;
    t[138] = K::HELP;
    t[139] = K::MENU;

    t[179] = K::KP_LEFT_PAREN;
    t[180] = K::KP_RIGHT_PAREN;

    // ── F13–F24 ───────────────────────────────────────────────────────────────
    t[183] = K::F13;
    t[184] = K::F14;
    t[185] = K::F15;
    t[186] = K::F16;
    t[187] = K::F17;
    t[188] = K::F18;
    t[189] = K::F19;
    t[190] = K::F20;
    t[191] = K::F21;
    t[192] = K::F22;
    t[193] = K::F23;
    t[194] = K::F24;

    t
};

/// HID → native table derived from [`NATIVE_TO_HID`].
pub const HID_TO_NATIVE: [u8; 256] = invert(&NATIVE_TO_HID);

/// `KEY_*` names from `linux/input-event-codes.h`, prefix removed.
pub const RAW_NAMES: [Option<&str>; 256] = name_table(&[
    (0, "RESERVED"), (1, "ESC"), (2, "1"), (3, "2"), (4, "3"), (5, "4"),
    (6, "5"), (7, "6"), (8, "7"), (9, "8"), (10, "9"), (11, "0"),
    (12, "MINUS"), (13, "EQUAL"), (14, "BACKSPACE"), (15, "TAB"),
    (16, "Q"), (17, "W"), (18, "E"), (19, "R"), (20, "T"), (21, "Y"),
    (22, "U"), (23, "I"), (24, "O"), (25, "P"), (26, "LEFTBRACE"),
    (27, "RIGHTBRACE"), (28, "ENTER"), (29, "LEFTCTRL"), (30, "A"),
    (31, "S"), (32, "D"), (33, "F"), (34, "G"), (35, "H"), (36, "J"),
    (37, "K"), (38, "L"), (39, "SEMICOLON"), (40, "APOSTROPHE"),
    (41, "GRAVE"), (42, "LEFTSHIFT"), (43, "BACKSLASH"), (44, "Z"),
    (45, "X"), (46, "C"), (47, "V"), (48, "B"), (49, "N"), (50, "M"),
    (51, "COMMA"), (52, "DOT"), (53, "SLASH"), (54, "RIGHTSHIFT"),
    (55, "KPASTERISK"), (56, "LEFTALT"), (57, "SPACE"), (58, "CAPSLOCK"),
    (59, "F1"), (60, "F2"), (61, "F3"), (62, "F4"), (63, "F5"),
    (64, "F6"), (65, "F7"), (66, "F8"), (67, "F9"), (68, "F10"),
    (69, "NUMLOCK"), (70, "SCROLLLOCK"), (71, "KP7"), (72, "KP8"),
    (73, "KP9"), (74, "KPMINUS"), (75, "KP4"), (76, "KP5"), (77, "KP6"),
    (78, "KPPLUS"), (79, "KP1"), (80, "KP2"), (81, "KP3"), (82, "KP0"),
    (83, "KPDOT"), (85, "ZENKAKUHANKAKU"), (86, "102ND"), (87, "F11"),
    (88, "F12"), (89, "RO"), (90, "KATAKANA"), (91, "HIRAGANA"),
    (92, "HENKAN"), (93, "KATAKANAHIRAGANA"), (94, "MUHENKAN"),
    (95, "KPJPCOMMA"), (96, "KPENTER"), (97, "RIGHTCTRL"), (98, "KPSLASH"),
    (99, "SYSRQ"), (100, "RIGHTALT"), (101, "LINEFEED"), (102, "HOME"),
    (103, "UP"), (104, "PAGEUP"), (105, "LEFT"), (106, "RIGHT"),
    (107, "END"), (108, "DOWN"), (109, "PAGEDOWN"), (110, "INSERT"),
    (111, "DELETE"), (112, "MACRO"), (113, "MUTE"), (114, "VOLUMEDOWN"),
    (115, "VOLUMEUP"), (116, "POWER"), (117, "KPEQUAL"),
    (118, "KPPLUSMINUS"), (119, "PAUSE"), (120, "SCALE"), (121, "KPCOMMA"),
    (122, "HANGEUL"), (123, "HANJA"), (124, "YEN"), (125, "LEFTMETA"),
    (126, "RIGHTMETA"), (127, "COMPOSE"), (128, "STOP"), (129, "AGAIN"),
    (130, "PROPS"), (131, "UNDO"), (132, "FRONT"), (133, "COPY"),
    (134, "OPEN"), (135, "PASTE"), (136, "FIND"), (137, "CUT"),
    (138, "HELP"), (139, "MENU"), (140, "CALC"), (141, "SETUP"),
    (142, "SLEEP"), (143, "WAKEUP"), (144, "FILE"), (145, "SENDFILE"),
    (146, "DELETEFILE"), (147, "XFER"), (148, "PROG1"), (149, "PROG2"),
    (150, "WWW"), (151, "MSDOS"), (152, "COFFEE"), (153, "ROTATE_DISPLAY"),
    (154, "CYCLEWINDOWS"), (155, "MAIL"), (156, "BOOKMARKS"),
    (157, "COMPUTER"), (158, "BACK"), (159, "FORWARD"), (160, "CLOSECD"),
    (161, "EJECTCD"), (162, "EJECTCLOSECD"), (163, "NEXTSONG"),
    (164, "PLAYPAUSE"), (165, "PREVIOUSSONG"), (166, "STOPCD"),
    (167, "RECORD"), (168, "REWIND"), (169, "PHONE"), (170, "ISO"),
    (171, "CONFIG"), (172, "HOMEPAGE"), (173, "REFRESH"), (174, "EXIT"),
    (175, "MOVE"), (176, "EDIT"), (177, "SCROLLUP"), (178, "SCROLLDOWN"),
    (179, "KPLEFTPAREN"), (180, "KPRIGHTPAREN"), (181, "NEW"), (182, "REDO"),
    (183, "F13"), (184, "F14"), (185, "F15"), (186, "F16"), (187, "F17"),
    (188, "F18"), (189, "F19"), (190, "F20"), (191, "F21"), (192, "F22"),
    (193, "F23"), (194, "F24"), (200, "PLAYCD"), (201, "PAUSECD"),
    (202, "PROG3"), (203, "PROG4"), (204, "ALL_APPLICATIONS"),
    (205, "SUSPEND"), (206, "CLOSE"), (207, "PLAY"), (208, "FASTFORWARD"),
    (209, "BASSBOOST"), (210, "PRINT"), (211, "HP"), (212, "CAMERA"),
    (213, "SOUND"), (214, "QUESTION"), (215, "EMAIL"), (216, "CHAT"),
    (217, "SEARCH"), (218, "CONNECT"), (219, "FINANCE"), (220, "SPORT"),
    (221, "SHOP"), (222, "ALTERASE"), (223, "CANCEL"),
    (224, "BRIGHTNESSDOWN"), (225, "BRIGHTNESSUP"), (226, "MEDIA"),
    (227, "SWITCHVIDEOMODE"), (228, "KBDILLUMTOGGLE"), (229, "KBDILLUMDOWN"),
    (230, "KBDILLUMUP"), (231, "SEND"), (232, "REPLY"), (233, "FORWARDMAIL"),
    (234, "SAVE"), (235, "DOCUMENTS"), (236, "BATTERY"), (237, "BLUETOOTH"),
    (238, "WLAN"), (239, "UWB"), (240, "UNKNOWN"), (241, "VIDEO_NEXT"),
    (242, "VIDEO_PREV"), (243, "BRIGHTNESS_CYCLE"), (244, "BRIGHTNESS_AUTO"),
    (245, "DISPLAY_OFF"), (246, "WWAN"), (247, "RFKILL"), (248, "MICMUTE"),
]);

pub static TABLE: KeyTable = KeyTable::new(Platform::Linux, &NATIVE_TO_HID, &HID_TO_NATIVE, &RAW_NAMES);

/// Translates an evdev code to HID.  Returns [`HidKeyCode::NONE`] for
/// unmapped or out-of-range codes.
pub fn to_hid(code: u32) -> HidKeyCode {
    TABLE.to_hid(code)
}

/// Translates a HID code to an evdev code, or `None` if Linux has no such key.
pub fn from_hid(hid: HidKeyCode) -> Option<u8> {
    TABLE.from_hid(hid)
}

/// Translates an X11/Wayland keycode (evdev code + 8) to HID.
///
/// Keycodes below the offset cannot come from evdev and return
/// [`HidKeyCode::NONE`].
pub fn from_x11_keycode(keycode: u32) -> HidKeyCode {
    match keycode.checked_sub(EVDEV_OFFSET) {
        Some(code) => to_hid(code),
        None => HidKeyCode::NONE,
    }
}

/// Returns the `KEY_*` name (without prefix) of an evdev code.
pub fn raw_name(code: u32) -> Option<&'static str> {
    TABLE.raw_name(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_map_to_correct_hid() {
        assert_eq!(to_hid(30), HidKeyCode::A); // KEY_A
        assert_eq!(to_hid(16), HidKeyCode::Q); // KEY_Q
        assert_eq!(to_hid(44), HidKeyCode::Z); // KEY_Z
    }

    #[test]
    fn test_modifiers_map_both_sides() {
        assert_eq!(to_hid(29), HidKeyCode::LEFT_CONTROL);
        assert_eq!(to_hid(97), HidKeyCode::RIGHT_CONTROL);
        assert_eq!(to_hid(42), HidKeyCode::LEFT_SHIFT);
        assert_eq!(to_hid(54), HidKeyCode::RIGHT_SHIFT);
        assert_eq!(to_hid(56), HidKeyCode::LEFT_ALT);
        assert_eq!(to_hid(100), HidKeyCode::RIGHT_ALT);
        assert_eq!(to_hid(125), HidKeyCode::LEFT_GUI);
        assert_eq!(to_hid(126), HidKeyCode::RIGHT_GUI);
    }

    #[test]
    fn test_x11_keycode_subtracts_offset() {
        // X11 keycode 38 is 'a' on every evdev-based server.
        assert_eq!(from_x11_keycode(38), HidKeyCode::A);
        assert_eq!(from_x11_keycode(9), HidKeyCode::ESCAPE);
        assert_eq!(from_x11_keycode(7), HidKeyCode::NONE);
        assert_eq!(from_x11_keycode(0), HidKeyCode::NONE);
    }

    #[test]
    fn test_from_hid_returns_evdev_code() {
        assert_eq!(from_hid(HidKeyCode::ENTER), Some(28));
        assert_eq!(from_hid(HidKeyCode::F24), Some(194));
        assert_eq!(from_hid(HidKeyCode::NON_US_HASH), None);
        assert_eq!(from_hid(HidKeyCode::NONE), None);
    }

    #[test]
    fn test_japanese_keys_map_to_language_and_international_usages() {
        assert_eq!(to_hid(85), HidKeyCode::LANG_5); // KEY_ZENKAKUHANKAKU
        assert_eq!(to_hid(89), HidKeyCode::INTERNATIONAL_1); // KEY_RO
        assert_eq!(to_hid(90), HidKeyCode::LANG_3); // KEY_KATAKANA
        assert_eq!(to_hid(91), HidKeyCode::LANG_4); // KEY_HIRAGANA
        assert_eq!(to_hid(92), HidKeyCode::INTERNATIONAL_4); // KEY_HENKAN
        assert_eq!(to_hid(93), HidKeyCode::INTERNATIONAL_2); // KEY_KATAKANAHIRAGANA
        assert_eq!(to_hid(94), HidKeyCode::INTERNATIONAL_5); // KEY_MUHENKAN
        assert_eq!(to_hid(95), HidKeyCode::INTERNATIONAL_6); // KEY_KPJPCOMMA
        assert_eq!(from_hid(HidKeyCode::LANG_5), Some(85));
        assert_eq!(from_hid(HidKeyCode::INTERNATIONAL_6), Some(95));
    }

    #[test]
    fn test_extra_keypad_symbols_map() {
        assert_eq!(to_hid(118), HidKeyCode::KP_PLUS_MINUS);
        assert_eq!(to_hid(179), HidKeyCode::KP_LEFT_PAREN);
        assert_eq!(to_hid(180), HidKeyCode::KP_RIGHT_PAREN);
        assert_eq!(from_hid(HidKeyCode::KP_RIGHT_PAREN), Some(180));
    }

    #[test]
    fn test_raw_names_cover_unmapped_codes() {
        assert_eq!(raw_name(1), Some("ESC"));
        assert_eq!(raw_name(85), Some("ZENKAKUHANKAKU"));
        assert_eq!(raw_name(95), Some("KPJPCOMMA"));
        assert_eq!(raw_name(140), Some("CALC"));
        assert_eq!(to_hid(140), HidKeyCode::NONE);
        assert_eq!(from_hid(HidKeyCode::LOCKING_CAPS_LOCK), None);
        assert_eq!(raw_name(84), None);
        assert_eq!(raw_name(255), None);
        assert_eq!(raw_name(256), None);
    }

    #[test]
    fn test_to_hid_never_panics_for_any_input() {
        for code in 0..=1024u32 {
            let _ = to_hid(code);
        }
        assert_eq!(to_hid(u32::MAX), HidKeyCode::NONE);
    }
}
