//! Key code translation tables for cross-platform keyboard event mapping.
//!
//! The canonical representation is USB HID Usage IDs (page 0x07, Keyboard/Keypad).
//! Each platform's native codes are translated to/from HID through one
//! [`KeyTable`] per platform; [`KeyMapper`] exposes every direction as a flat
//! function for callers that already know which platform they are on.

pub mod hid;
pub mod linux_evdev;
pub mod macos_vk;
pub mod table;
pub mod windows_scan;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use hid::HidKeyCode;
pub use table::{KeyTable, NO_NATIVE};

/// A platform with its own native key code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux evdev codes (X11/Wayland keycode minus 8).
    Linux,
    /// macOS `kVK_*` virtual keycodes.
    MacOs,
    /// Windows set-1 scan codes with the extended flag in bit 7.
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::MacOs, Platform::Windows];

    /// Returns this platform's translation tables.
    pub fn table(self) -> &'static KeyTable {
        match self {
            Platform::Linux => &linux_evdev::TABLE,
            Platform::MacOs => &macos_vk::TABLE,
            Platform::Windows => &windows_scan::TABLE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown platform {0:?}, expected linux, macos or windows")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPlatform(s.to_owned()))
    }
}

/// Unified key mapper providing all translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates a Linux evdev code to a [`HidKeyCode`].
    ///
    /// Subtract [`linux_evdev::EVDEV_OFFSET`] from X11 keycodes first.
    pub fn linux_to_hid(code: u32) -> HidKeyCode {
        linux_evdev::to_hid(code)
    }

    /// Translates a [`HidKeyCode`] to a Linux evdev code.
    pub fn linux_from_hid(hid: HidKeyCode) -> Option<u8> {
        linux_evdev::from_hid(hid)
    }

    /// Translates an X11/Wayland keycode (evdev code + 8) to a [`HidKeyCode`].
    pub fn linux_from_x11(keycode: u32) -> HidKeyCode {
        linux_evdev::from_x11_keycode(keycode)
    }

    /// Returns the `KEY_*` name (prefix removed) of an evdev code.
    pub fn linux_rawname(code: u32) -> Option<&'static str> {
        linux_evdev::raw_name(code)
    }

    /// Translates a macOS virtual keycode (0–127) to a [`HidKeyCode`].
    pub fn macos_to_hid(code: u32) -> HidKeyCode {
        macos_vk::to_hid(code)
    }

    /// Translates a [`HidKeyCode`] to a macOS virtual keycode (0–127).
    pub fn macos_from_hid(hid: HidKeyCode) -> Option<u8> {
        macos_vk::from_hid(hid)
    }

    /// Returns the device-dependent modifier flag for a macOS modifier
    /// keycode, or 0.
    pub fn macos_modifier(code: u32) -> u32 {
        macos_vk::modifier_flag(code)
    }

    /// Returns the `kVK_*` name (prefix removed) of a macOS virtual keycode.
    pub fn macos_rawname(code: u32) -> Option<&'static str> {
        macos_vk::raw_name(code)
    }

    /// Translates a Windows native code (scan code | extended bit) to a
    /// [`HidKeyCode`].
    pub fn windows_to_hid(code: u32) -> HidKeyCode {
        windows_scan::to_hid(code)
    }

    /// Translates a [`HidKeyCode`] to a Windows native code.
    pub fn windows_from_hid(hid: HidKeyCode) -> Option<u8> {
        windows_scan::from_hid(hid)
    }

    /// Extracts the Windows native code from a keyboard message `lParam`.
    pub fn windows_from_lparam(lparam: u32) -> u8 {
        windows_scan::from_lparam(lparam)
    }

    /// Returns the US-layout `VK_*` name (prefix removed) at a Windows native code.
    pub fn windows_rawname(code: u32) -> Option<&'static str> {
        windows_scan::raw_name(code)
    }

    /// Returns the stable identifier of a HID code, e.g. `"LeftShift"`.
    pub fn code_to_id(code: i32) -> Option<&'static str> {
        crate::keyid::code_to_id(code)
    }

    /// Resolves an identifier (any case) to a HID code, or
    /// [`HidKeyCode::NONE`].
    pub fn id_to_code(id: &str) -> HidKeyCode {
        crate::keyid::id_to_code(id)
    }
}
