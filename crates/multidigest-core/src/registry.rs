//! The fixed table of known hash functions.
//!
//! Names and codes map one-to-one. Default lengths are advisory: they are
//! exposed for callers, but no codec operation consults them.

use serde::Serialize;

/// Lowest application code (inclusive).
pub const APP_CODE_MIN: u8 = 0x01;

/// Highest application code (inclusive).
pub const APP_CODE_MAX: u8 = 0x0f;

/// A single registered hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegistryEntry {
    /// Human-readable name, e.g. `sha2-256`.
    pub name: &'static str,
    /// Function code written as the first envelope byte.
    pub code: u8,
    /// Typical digest length in bytes.
    pub default_length: u8,
}

const ENTRIES: &[RegistryEntry] = &[
    RegistryEntry { name: "sha1", code: 0x11, default_length: 20 },
    RegistryEntry { name: "sha2-256", code: 0x12, default_length: 32 },
    RegistryEntry { name: "sha2-512", code: 0x13, default_length: 64 },
    RegistryEntry { name: "sha3", code: 0x14, default_length: 64 },
    RegistryEntry { name: "blake2b", code: 0x40, default_length: 64 },
    RegistryEntry { name: "blake2s", code: 0x41, default_length: 32 },
];

/// All registered entries, in code order.
pub fn entries() -> &'static [RegistryEntry] {
    ENTRIES
}

/// Look up the code for a hash function name.
pub fn name_to_code(name: &str) -> Option<u8> {
    ENTRIES.iter().find(|e| e.name == name).map(|e| e.code)
}

/// Look up the name for a registered code.
pub fn code_to_name(code: u8) -> Option<&'static str> {
    lookup(code).map(|e| e.name)
}

/// Look up the advisory default digest length for a registered code.
pub fn code_to_default_length(code: u8) -> Option<u8> {
    lookup(code).map(|e| e.default_length)
}

/// Whether `code` is reserved for application-defined use (`0x01..=0x0f`).
pub const fn is_app_code(code: u8) -> bool {
    code >= APP_CODE_MIN && code <= APP_CODE_MAX
}

/// Whether `code` is registered or an application code.
pub fn is_valid_code(code: u8) -> bool {
    is_app_code(code) || lookup(code).is_some()
}

fn lookup(code: u8) -> Option<&'static RegistryEntry> {
    ENTRIES.iter().find(|e| e.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_codes_are_bijective() {
        let names: HashSet<_> = entries().iter().map(|e| e.name).collect();
        let codes: HashSet<_> = entries().iter().map(|e| e.code).collect();
        assert_eq!(names.len(), entries().len());
        assert_eq!(codes.len(), entries().len());

        for entry in entries() {
            assert_eq!(name_to_code(entry.name), Some(entry.code));
            assert_eq!(code_to_name(entry.code), Some(entry.name));
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(name_to_code("sha1"), Some(0x11));
        assert_eq!(name_to_code("sha2-256"), Some(0x12));
        assert_eq!(name_to_code("blake2s"), Some(0x41));
        assert_eq!(code_to_name(0x13), Some("sha2-512"));
        assert_eq!(code_to_default_length(0x11), Some(20));
        assert_eq!(code_to_default_length(0x40), Some(64));
    }

    #[test]
    fn test_unknown_lookups_are_absent() {
        assert_eq!(name_to_code("md5"), None);
        assert_eq!(name_to_code("SHA1"), None);
        assert_eq!(code_to_name(0x99), None);
        assert_eq!(code_to_default_length(0x05), None);
    }

    #[test]
    fn test_app_codes() {
        assert!(!is_app_code(0x00));
        assert!(is_app_code(0x01));
        assert!(is_app_code(0x0f));
        assert!(!is_app_code(0x10));
        // App codes have no registered name.
        for code in APP_CODE_MIN..=APP_CODE_MAX {
            assert_eq!(code_to_name(code), None);
        }
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_code(0x05));
        assert!(is_valid_code(0x12));
        assert!(!is_valid_code(0x00));
        assert!(!is_valid_code(0x10));
        assert!(!is_valid_code(0x99));
        assert!(!is_valid_code(0xff));
    }
}
