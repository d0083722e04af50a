//! Command-line argument definitions.
//!
//! ```text
//! keycode-probe [--config PATH] [--platform linux|macos|windows] COMMAND
//!   native CODE      translate a native code on the chosen platform
//!   x11 KEYCODE      translate an X11 keycode (evdev code + 8)
//!   lparam VALUE     decode a Windows keyboard message lParam
//!   hid CODE|ID      show one HID key on every platform
//!   list             list every identifier with its code and display name
//! ```
//!
//! The `#[derive(Parser)]` macro from `clap` generates the parser, `--help`
//! and `--version` from the types below.  Numbers are decimal or `0x`
//! hexadecimal.  For `hid`, an argument that is a known identifier wins over
//! a number, so `hid 1` is the `1` key; write `hid 0x01` for usage 0x01.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keycode_core::{HidKeyCode, KeyIdError, Platform};
use thiserror::Error;

/// Errors produced by the value parsers below.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("{0:?} is not a decimal or 0x-prefixed number")]
    InvalidNumber(String),

    #[error("HID code {0} is out of range 0-255")]
    HidOutOfRange(u32),

    #[error(transparent)]
    Key(#[from] KeyIdError),
}

/// Decodes native keyboard codes into HID usages, identifiers and display
/// names.
#[derive(Debug, Parser)]
#[command(
    name = "keycode-probe",
    about = "Decode native keyboard codes into HID usages and key identifiers",
    version
)]
pub struct Args {
    /// TOML config file.  Defaults to `keycode-probe.toml` when present.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Platform for `native`; overrides the configured one.
    #[arg(long, short, global = true, env = "KEYCODE_PROBE_PLATFORM")]
    pub platform: Option<Platform>,

    #[command(subcommand)]
    pub command: Command,
}

/// What the probe should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Translate a native code on the chosen platform.
    Native {
        #[arg(value_parser = parse_number)]
        code: u32,
    },
    /// Translate an X11 keycode (evdev code + 8) with the Linux table.
    X11 {
        #[arg(value_parser = parse_number)]
        keycode: u32,
    },
    /// Decode a Windows keyboard message `lParam` with the Windows table.
    Lparam {
        #[arg(value_parser = parse_number)]
        value: u32,
    },
    /// Show one HID key, by identifier or usage ID, on every platform.
    Hid {
        #[arg(value_parser = parse_hid)]
        key: HidKeyCode,
    },
    /// List every identifier with its code and display name.
    List,
}

/// Parses a decimal or `0x`/`0X` hexadecimal `u32`.
///
/// # Errors
///
/// Returns [`CliError::InvalidNumber`] for anything else, including
/// values that overflow `u32`.
pub fn parse_number(text: &str) -> Result<u32, CliError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.map_err(|_| CliError::InvalidNumber(text.to_owned()))
}

/// Parses a HID key given as an identifier or a number.
///
/// # Errors
///
/// Returns [`CliError::HidOutOfRange`] for numbers above 255 and
/// [`CliError::Key`] when the text is neither a number nor a known
/// identifier.
pub fn parse_hid(text: &str) -> Result<HidKeyCode, CliError> {
    let id_error = match text.parse::<HidKeyCode>() {
        Ok(hid) => return Ok(hid),
        Err(e) => e,
    };
    match parse_number(text) {
        Ok(n) => u8::try_from(n)
            .map(HidKeyCode::from)
            .map_err(|_| CliError::HidOutOfRange(n)),
        Err(_) => Err(CliError::Key(id_error)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("keycode-probe").chain(argv.iter().copied()))
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_number_accepts_decimal_and_hex() {
        assert_eq!(parse_number("42"), Ok(42));
        assert_eq!(parse_number("0x2A"), Ok(42));
        assert_eq!(parse_number("0X2a"), Ok(42));
        assert_eq!(parse_number("0xFFFFFFFF"), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for text in ["", "0x", "-1", "12ab", "0x1G", "4294967296"] {
            assert_eq!(
                parse_number(text),
                Err(CliError::InvalidNumber(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_parse_hid_prefers_identifiers() {
        assert_eq!(parse_hid("1"), Ok(HidKeyCode::DIGIT_1));
        assert_eq!(parse_hid("leftshift"), Ok(HidKeyCode::LEFT_SHIFT));
        assert_eq!(parse_hid("0x01"), Ok(HidKeyCode::from(0x01)));
        assert_eq!(parse_hid("225"), Ok(HidKeyCode::LEFT_SHIFT));
    }

    #[test]
    fn test_parse_hid_errors() {
        assert_eq!(parse_hid("256"), Err(CliError::HidOutOfRange(256)));
        assert_eq!(
            parse_hid("Shift"),
            Err(CliError::Key(KeyIdError::Unknown("Shift".to_string())))
        );
    }

    #[test]
    fn test_args_with_options() {
        // Arrange / Act
        let args = parse(&["--config", "probe.toml", "--platform", "MacOS", "native", "0x38"])
            .expect("parse");

        // Assert
        assert_eq!(args.config, Some(PathBuf::from("probe.toml")));
        assert_eq!(args.platform, Some(Platform::MacOs));
        assert_eq!(args.command, Command::Native { code: 0x38 });
    }

    #[test]
    fn test_global_options_may_follow_the_command() {
        let args = parse(&["native", "30", "-p", "windows"]).expect("parse");
        assert_eq!(args.platform, Some(Platform::Windows));
        assert_eq!(args.command, Command::Native { code: 30 });
    }

    #[test]
    fn test_each_command_parses() {
        assert_eq!(parse(&["x11", "50"]).unwrap().command, Command::X11 { keycode: 50 });
        assert_eq!(
            parse(&["lparam", "0x011D0001"]).unwrap().command,
            Command::Lparam { value: 0x011D_0001 }
        );
        assert_eq!(
            parse(&["hid", "CapsLock"]).unwrap().command,
            Command::Hid { key: HidKeyCode::CAPS_LOCK }
        );
        assert_eq!(parse(&["list"]).unwrap().command, Command::List);
    }

    #[test]
    fn test_help_is_handled_by_clap() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_values_are_validation_errors() {
        for argv in [
            &["native", "0xZZ"][..],
            &["hid", "Shift"][..],
            &["hid", "300"][..],
            &["--platform", "beos", "list"][..],
        ] {
            let err = parse(argv).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{argv:?}");
        }
    }

    #[test]
    fn test_malformed_command_lines_are_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["native"]).is_err());
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&["list", "extra"]).is_err());
    }
}
