//! # keycode-core
//!
//! Translates keyboard codes between native platform encodings and a single
//! canonical identifier space, the USB HID Keyboard/Keypad usage page.
//!
//! All tables are compile-time constants: every lookup is a pure function,
//! never allocates, and is safe to call from any thread.
//!
//! # Architecture overview (for beginners)
//!
//! An application receiving raw key events gets a *native* code that only
//! means something on that platform.  This crate answers "which physical key
//! was that?" in a platform-independent way:
//!
//! - **`keymap`** – One bidirectional [`KeyTable`] per [`Platform`]:
//!   Linux evdev codes, macOS `kVK_*` codes and Windows scan codes, each
//!   translated to/from [`HidKeyCode`].  Also the small decode helpers that
//!   pull a native code out of an OS event (`windows_scan::from_lparam`,
//!   `macos_vk::modifier_flag`) and the raw platform names used for
//!   debugging.
//!
//! - **`keyid`** – Stable, case-insensitive string identifiers
//!   (`"A"`, `"LeftShift"`, `"KPEnter"`) and display names for HID codes.
//!
//! ```rust
//! use keycode_core::{keyid, HidKeyCode, Platform};
//!
//! // X11 keycode 50 is evdev 42, the left Shift key.
//! let hid = Platform::Linux.table().to_hid(50 - 8);
//! assert_eq!(hid, HidKeyCode::LEFT_SHIFT);
//! assert_eq!(keyid::code_to_id(hid.as_u8().into()), Some("LeftShift"));
//! assert_eq!(Platform::MacOs.table().from_hid(hid), Some(0x38));
//! ```

pub mod keyid;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `keycode_core::HidKeyCode` instead of `keycode_core::keymap::hid::HidKeyCode`.
pub use keyid::{code_to_display_name, code_to_id, id_to_code, KeyIdError, MAX_ID_LEN};
pub use keymap::hid::{HidKeyCode, KeyName, NAMED_KEYS};
pub use keymap::{KeyMapper, KeyTable, Platform, UnknownPlatform, NO_NATIVE};
