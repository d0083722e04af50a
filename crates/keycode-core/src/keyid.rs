//! Stable string identifiers for HID key codes.
//!
//! Every named key has an ASCII identifier such as `"A"`, `"1"` or
//! `"LeftShift"`.  Identifiers are stored in their canonical mixed-case form
//! but matched case-insensitively, so `"leftshift"` and `"LEFTSHIFT"` both
//! resolve to [`HidKeyCode::LEFT_SHIFT`].
//!
//! # How the lookup works
//!
//! Code → identifier is a direct index into a 256-entry array.
//!
//! Identifier → code is a binary search over [`ID_ORDER`], a permutation of
//! [`NAMED_KEYS`] sorted by ASCII-lowercased identifier.  Both the sort (run
//! by the compiler) and the search use [`compare_ids`], so the search order
//! always agrees with the table order.  The compile-time sort also rejects
//! any two identifiers that collide under case folding.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::keymap::hid::{HidKeyCode, KeyName, NAMED_KEYS};

/// Number of named keys.
pub const ID_COUNT: usize = NAMED_KEYS.len();

/// Length in bytes of the longest identifier.  Longer input never matches.
pub const MAX_ID_LEN: usize = max_id_len(NAMED_KEYS);

/// Indices into [`NAMED_KEYS`], ordered by case-folded identifier.
pub const ID_ORDER: [u8; ID_COUNT] = sort_by_id(NAMED_KEYS);

const BY_CODE: [Option<&KeyName>; 256] = index_by_code(NAMED_KEYS);

/// Why a string could not be parsed as a key identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyIdError {
    #[error("empty key identifier")]
    Empty,

    /// The input is longer than any identifier in the table.
    #[error("key identifier is {len} bytes long, the longest known identifier is {max}")]
    TooLong { len: usize, max: usize },

    #[error("unknown key identifier: {0:?}")]
    Unknown(String),
}

/// Returns the identifier registered for `code`, if any.
///
/// Total over `i32`: negative and out-of-range codes return `None`.
pub fn code_to_id(code: i32) -> Option<&'static str> {
    lookup_code(code).map(|name| name.id)
}

/// Returns the display name registered for `code`, if any.
pub fn code_to_display_name(code: i32) -> Option<&'static str> {
    lookup_code(code).map(|name| name.display)
}

/// Resolves an identifier (any ASCII case) to its code.
///
/// Returns [`HidKeyCode::NONE`] when the identifier is empty, unknown, or
/// longer than [`MAX_ID_LEN`].
pub fn id_to_code(id: &str) -> HidKeyCode {
    find_id(id).unwrap_or(HidKeyCode::NONE)
}

fn lookup_code(code: i32) -> Option<&'static KeyName> {
    let index = usize::try_from(code).ok()?;
    BY_CODE.get(index).copied().flatten()
}

fn find_id(id: &str) -> Option<HidKeyCode> {
    if id.len() > MAX_ID_LEN {
        trace!(len = id.len(), max = MAX_ID_LEN, "key identifier too long");
        return None;
    }
    ID_ORDER
        .binary_search_by(|&i| compare_ids(NAMED_KEYS[i as usize].id.as_bytes(), id.as_bytes()))
        .ok()
        .map(|pos| NAMED_KEYS[ID_ORDER[pos] as usize].code)
}

impl FromStr for HidKeyCode {
    type Err = KeyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyIdError::Empty);
        }
        if s.len() > MAX_ID_LEN {
            return Err(KeyIdError::TooLong { len: s.len(), max: MAX_ID_LEN });
        }
        find_id(s).ok_or_else(|| KeyIdError::Unknown(s.to_owned()))
    }
}

/// Compares two identifiers byte by byte after ASCII lowercasing.
///
/// A strict prefix orders before the longer string.
pub const fn compare_ids(a: &[u8], b: &[u8]) -> Ordering {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        let x = a[i].to_ascii_lowercase();
        let y = b[i].to_ascii_lowercase();
        if x < y {
            return Ordering::Less;
        }
        if x > y {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

const fn is_less(a: &[u8], b: &[u8]) -> bool {
    matches!(compare_ids(a, b), Ordering::Less)
}

const fn max_id_len(keys: &[KeyName]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < keys.len() {
        if keys[i].id.len() > max {
            max = keys[i].id.len();
        }
        i += 1;
    }
    max
}

const fn sort_by_id(keys: &[KeyName]) -> [u8; ID_COUNT] {
    assert!(keys.len() == ID_COUNT);
    assert!(ID_COUNT <= 256, "too many named keys for a byte index");

    let mut order = [0u8; ID_COUNT];
    let mut i = 0;
    while i < ID_COUNT {
        order[i] = i as u8;
        i += 1;
    }

    // Insertion sort; runs once, at compile time.
    let mut i = 1;
    while i < ID_COUNT {
        let cur = order[i];
        let mut j = i;
        while j > 0 && is_less(keys[cur as usize].id.as_bytes(), keys[order[j - 1] as usize].id.as_bytes()) {
            order[j] = order[j - 1];
            j -= 1;
        }
        order[j] = cur;
        i += 1;
    }

    let mut i = 1;
    while i < ID_COUNT {
        let prev = keys[order[i - 1] as usize].id.as_bytes();
        let next = keys[order[i] as usize].id.as_bytes();
        if !is_less(prev, next) {
            panic!("key identifiers must be unique ignoring case");
        }
        i += 1;
    }
    order
}

const fn index_by_code(keys: &'static [KeyName]) -> [Option<&'static KeyName>; 256] {
    let mut table: [Option<&'static KeyName>; 256] = [None; 256];
    let mut i = 0;
    while i < keys.len() {
        let name = &keys[i];
        let code = name.code.as_u8() as usize;
        if code == 0 {
            panic!("HID code 0 is reserved for \"no key\"");
        }
        if name.id.is_empty() {
            panic!("key identifiers must not be empty");
        }
        if table[code].is_some() {
            panic!("HID code named twice");
        }
        table[code] = Some(name);
        i += 1;
    }
    table
}
