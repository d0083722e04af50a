//! Bidirectional fixed mapping between one platform's native codes and HID.
//!
//! Each platform module declares only its forward table (native → HID) and
//! its debug name table.  The reverse table (HID → native) is derived from
//! the forward table by [`invert`] at compile time, which also enforces the
//! invariants the lookups rely on:
//!
//! - no two native codes map to the same HID code;
//! - no native code equal to [`NO_NATIVE`] is mapped.
//!
//! Either violation is a compile error, not a runtime surprise.

use tracing::trace;

use super::hid::HidKeyCode;
use super::Platform;

/// Reverse-table sentinel: "this platform has no key for this HID code".
pub const NO_NATIVE: u8 = 0xFF;

/// Translation tables for one platform.
///
/// All fields are `'static` constant data; a `KeyTable` is never built or
/// modified at runtime.
#[derive(Debug)]
pub struct KeyTable {
    platform: Platform,
    to_hid: &'static [HidKeyCode],
    from_hid: &'static [u8; 256],
    raw_names: &'static [Option<&'static str>],
}

impl KeyTable {
    pub(crate) const fn new(
        platform: Platform,
        to_hid: &'static [HidKeyCode],
        from_hid: &'static [u8; 256],
        raw_names: &'static [Option<&'static str>],
    ) -> Self {
        assert!(to_hid.len() <= 256);
        assert!(raw_names.len() == to_hid.len());
        KeyTable { platform, to_hid, from_hid, raw_names }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Number of native codes this platform defines (the valid input range
    /// is `0..native_range()`).
    pub fn native_range(&self) -> usize {
        self.to_hid.len()
    }

    /// Translates a native code to HID.
    ///
    /// Total over `u32`: codes outside the platform's range and codes with no
    /// HID equivalent both return [`HidKeyCode::NONE`].
    pub fn to_hid(&self, native: u32) -> HidKeyCode {
        match self.slot(native) {
            Some(index) => self.to_hid[index],
            None => HidKeyCode::NONE,
        }
    }

    /// Translates a HID code to this platform's native code.
    ///
    /// Returns `None` if the platform has no key for `hid`.
    pub fn from_hid(&self, hid: HidKeyCode) -> Option<u8> {
        match self.from_hid_raw(hid) {
            NO_NATIVE => None,
            native => Some(native),
        }
    }

    /// Like [`KeyTable::from_hid`], but returns the raw table entry,
    /// [`NO_NATIVE`] included.
    pub fn from_hid_raw(&self, hid: HidKeyCode) -> u8 {
        self.from_hid[hid.as_u8() as usize]
    }

    /// Returns the platform's symbolic name for a native code.  Diagnostics
    /// only; the name carries no HID meaning.
    pub fn raw_name(&self, native: u32) -> Option<&'static str> {
        self.slot(native).and_then(|index| self.raw_names[index])
    }

    /// Iterates over every mapped `(native, hid)` pair in native order.
    pub fn mappings(&self) -> impl Iterator<Item = (u8, HidKeyCode)> + '_ {
        self.to_hid
            .iter()
            .enumerate()
            .filter(|(_, hid)| !hid.is_none())
            .map(|(native, &hid)| (native as u8, hid))
    }

    fn slot(&self, native: u32) -> Option<usize> {
        let index = native as usize;
        if index < self.to_hid.len() {
            Some(index)
        } else {
            trace!(platform = ?self.platform, native, "native code outside table range");
            None
        }
    }
}

/// Builds the HID → native table for a forward table.
pub(crate) const fn invert(to_hid: &[HidKeyCode]) -> [u8; 256] {
    let mut from_hid = [NO_NATIVE; 256];
    let mut native = 0;
    while native < to_hid.len() {
        let hid = to_hid[native].as_u8() as usize;
        if hid != 0 {
            if native == NO_NATIVE as usize {
                panic!("native code 0xFF collides with the reverse-table sentinel");
            }
            if from_hid[hid] != NO_NATIVE {
                panic!("two native codes map to the same HID code");
            }
            from_hid[hid] = native as u8;
        }
        native += 1;
    }
    from_hid
}

/// Expands a sparse `(native, name)` list into a dense name table.
pub(crate) const fn name_table<const N: usize>(
    entries: &[(u8, &'static str)],
) -> [Option<&'static str>; N] {
    let mut names: [Option<&'static str>; N] = [None; N];
    let mut i = 0;
    while i < entries.len() {
        let (native, name) = entries[i];
        if native as usize >= N {
            panic!("raw name outside the native code range");
        }
        if names[native as usize].is_some() {
            panic!("native code named twice");
        }
        names[native as usize] = Some(name);
        i += 1;
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const TO_HID: [HidKeyCode; 4] = [
        HidKeyCode::NONE,
        HidKeyCode::A,
        HidKeyCode::NONE,
        HidKeyCode::ENTER,
    ];
    const FROM_HID: [u8; 256] = invert(&TO_HID);
    const NAMES: [Option<&str>; 4] = name_table(&[(1, "KEY_A"), (2, "KEY_UNUSED")]);
    const TABLE: KeyTable = KeyTable::new(Platform::Linux, &TO_HID, &FROM_HID, &NAMES);

    #[test]
    fn test_invert_places_native_code_at_hid_index() {
        assert_eq!(FROM_HID[0x04], 1);
        assert_eq!(FROM_HID[0x28], 3);
        assert_eq!(FROM_HID[0x00], NO_NATIVE);
        assert_eq!(FROM_HID.iter().filter(|&&n| n != NO_NATIVE).count(), 2);
    }

    #[test]
    fn test_to_hid_is_total_over_u32() {
        assert_eq!(TABLE.to_hid(1), HidKeyCode::A);
        assert_eq!(TABLE.to_hid(2), HidKeyCode::NONE);
        assert_eq!(TABLE.to_hid(4), HidKeyCode::NONE);
        assert_eq!(TABLE.to_hid(u32::MAX), HidKeyCode::NONE);
    }

    #[test]
    fn test_from_hid_returns_none_for_sentinel() {
        assert_eq!(TABLE.from_hid(HidKeyCode::ENTER), Some(3));
        assert_eq!(TABLE.from_hid(HidKeyCode::B), None);
        assert_eq!(TABLE.from_hid_raw(HidKeyCode::B), NO_NATIVE);
    }

    #[test]
    fn test_raw_name_is_independent_of_hid_mapping() {
        assert_eq!(TABLE.raw_name(1), Some("KEY_A"));
        assert_eq!(TABLE.raw_name(2), Some("KEY_UNUSED"));
        assert_eq!(TABLE.raw_name(3), None);
        assert_eq!(TABLE.raw_name(1000), None);
    }

    #[test]
    fn test_mappings_skips_unmapped_codes() {
        let pairs: Vec<_> = TABLE.mappings().collect();
        assert_eq!(pairs, vec![(1, HidKeyCode::A), (3, HidKeyCode::ENTER)]);
    }
}
