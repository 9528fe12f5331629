//! Static kernel names for the ECC.
//!
//! All kernel names live here so introspection and dispatch share
//! identifiers.

/// Bitwise reference kernel name.
pub const REFERENCE: &str = "reference/bitwise";
/// Portable byte-at-a-time table kernel name.
pub const PORTABLE_TABLE: &str = "portable/table";
/// Portable eight-bytes-per-step kernel name.
pub const PORTABLE_SWAR: &str = "portable/swar";
/// Portable auto-selection kernel name (table vs SWAR by length).
pub const PORTABLE_AUTO: &str = "portable/auto";

/// Portable kernel name table (ordered by increasing bytes per step).
#[allow(dead_code)]
pub const PORTABLE_NAMES: &[&str] = &[PORTABLE_TABLE, PORTABLE_SWAR];

#[inline]
#[must_use]
pub const fn portable_name_for_len(len: usize, table_to_swar: usize) -> &'static str {
  if len < table_to_swar {
    PORTABLE_TABLE
  } else {
    PORTABLE_SWAR
  }
}
