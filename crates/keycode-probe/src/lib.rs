//! keycode-probe library entry point.
//!
//! Re-exports all public modules so that the binary entry point in `main.rs`
//! and the unit tests share the same module tree.
//!
//! # What does keycode-probe do? (for beginners)
//!
//! When a key "does the wrong thing" it is hard to tell whether the platform
//! reported an unexpected code or the code was translated wrongly.  The probe
//! takes the raw number you saw (an evdev code, an X11 keycode, a Windows
//! `lParam`, a macOS `kVK_*` code) and prints every step of the translation:
//!
//! 1. The platform's own name for the code (`LEFTSHIFT`, `ANSI_A`, ...).
//! 2. The canonical HID usage it maps to.
//! 3. The stable identifier and human-readable display name of that usage.
//!
//! `hid` goes the other way and shows which native code each platform uses
//! for one HID key.

/// Command-line parsing.
pub mod cli;

/// Optional TOML configuration.
pub mod config;

/// Output formatting.
pub mod report;
