//! Text reports printed by the probe, one key per line.
//!
//! A native report reads left to right from the platform's view to the
//! canonical one:
//!
//! ```text
//! linux native=42 (0x2A) raw=LEFTSHIFT -> hid=0xE1 id=LeftShift display="Left Shift"
//! ```
//!
//! Keys without a mapping print `hid=0x00 (unmapped)`; missing raw names
//! print `raw=-`.  An X11 keycode below the evdev offset has no evdev code
//! at all and prints `native=none`.

use keycode_core::{
    keymap::{linux_evdev, windows_scan},
    HidKeyCode, Platform, NAMED_KEYS,
};
use tracing::debug;

use crate::cli::Command;

/// Renders `command` into output lines.  `platform` is the platform used by
/// [`Command::Native`]; every other command fixes its own platform.
pub fn render(command: Command, platform: Platform) -> Vec<String> {
    match command {
        Command::Native { code } => vec![native_report(platform, code)],
        Command::X11 { keycode } => vec![x11_report(keycode)],
        Command::Lparam { value: lparam } => {
            let native = windows_scan::from_lparam(lparam);
            debug!(lparam, native, "lparam decoded");
            vec![format!(
                "lparam=0x{lparam:08X} {}",
                native_report(Platform::Windows, u32::from(native))
            )]
        }
        Command::Hid { key } => hid_report(key),
        Command::List => list_report(),
    }
}

/// One line for an X11 keycode, translated with the Linux table.
pub fn x11_report(keycode: u32) -> String {
    match keycode.checked_sub(linux_evdev::EVDEV_OFFSET) {
        Some(evdev) => {
            debug!(keycode, evdev, "x11 keycode to evdev");
            format!("x11={keycode} {}", native_report(Platform::Linux, evdev))
        }
        None => {
            debug!(keycode, "x11 keycode below evdev offset");
            format!("x11={keycode} linux native=none -> {}", describe_hid(HidKeyCode::NONE))
        }
    }
}

/// One line describing a native code on `platform`.
pub fn native_report(platform: Platform, native: u32) -> String {
    let table = platform.table();
    let hid = table.to_hid(native);
    format!(
        "{platform} native={native} (0x{native:02X}) raw={} -> {}",
        table.raw_name(native).unwrap_or("-"),
        describe_hid(hid)
    )
}

/// A header line for `hid` followed by one line per platform.
pub fn hid_report(hid: HidKeyCode) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + Platform::ALL.len());
    lines.push(describe_hid(hid));
    for platform in Platform::ALL {
        let table = platform.table();
        let line = match table.from_hid(hid) {
            Some(native) => format!(
                "  {platform} native={native} (0x{native:02X}) raw={}",
                table.raw_name(u32::from(native)).unwrap_or("-")
            ),
            None => format!("  {platform} native=none"),
        };
        lines.push(line);
    }
    lines
}

/// Every named key in code order.
pub fn list_report() -> Vec<String> {
    NAMED_KEYS
        .iter()
        .map(|key| format!("0x{:02X} {:<18} {:?}", key.code.as_u8(), key.id, key.display))
        .collect()
}

fn describe_hid(hid: HidKeyCode) -> String {
    match (hid.id(), hid.display_name()) {
        (Some(id), Some(display)) => {
            format!("hid=0x{:02X} id={id} display={display:?}", hid.as_u8())
        }
        _ if hid.is_none() => "hid=0x00 (unmapped)".to_string(),
        _ => format!("hid=0x{:02X} (unnamed)", hid.as_u8()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
