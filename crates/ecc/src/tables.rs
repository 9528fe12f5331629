//! Compile-time lookup tables for the memory card ECC.
//!
//! Two 256-entry tables drive the byte-at-a-time update:
//!
//! - [`PARITY_TABLE`]: XOR of the 8 bits of each byte value (0 or 1)
//! - [`COLUMN_MASK_TABLE`]: the byte's contribution to the column parity
//!   register, one bit per [`SELECTORS`] entry
//!
//! Both are `const fn` evaluations stored in statics, so they exist before
//! the first accumulator does and are never written afterwards.
//!
//! With the `no-tables` feature the statics are not emitted and
//! [`byte_parity`] / [`byte_column_mask`] compute the same values inline.

// SAFETY: All table indexing uses `u8` values or loop indices bounded by 256.
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Column groupings of the Hamming parity matrix, in output bit order.
///
/// Bit `j` of a column mask is the parity of `byte & SELECTORS[j]`. Bit 3 uses
/// an empty selector and is therefore always 0; bit 7 has no selector.
pub const SELECTORS: [u8; 7] = [0x55, 0x33, 0x0F, 0x00, 0xAA, 0xCC, 0xF0];

/// XOR-reduction of the 8 bits of `v`.
#[inline]
#[must_use]
pub const fn parity(v: u8) -> u8 {
  let mut v = v;
  v ^= v >> 1;
  v ^= v >> 2;
  v ^= v >> 4;
  v & 1
}

/// Column parity contribution of `v`, computed without tables.
#[inline]
#[must_use]
pub const fn column_mask(v: u8) -> u8 {
  let mut mask = 0u8;
  let mut j = 0;
  while j < SELECTORS.len() {
    mask |= parity(v & SELECTORS[j]) << j;
    j += 1;
  }
  mask
}

/// Build the parity table: entry `v` is [`parity(v)`](parity).
#[must_use]
pub const fn generate_parity_table() -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut i = 0usize;

  while i < 256 {
    table[i] = parity(i as u8);
    i += 1;
  }

  table
}

/// Build the column mask table from a parity table.
///
/// Bit `j` of entry `v` is `parity[v & SELECTORS[j]]`; bit 7 stays 0.
#[must_use]
pub const fn generate_column_mask_table(parity: &[u8; 256]) -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut i = 0usize;

  while i < 256 {
    let mut mask = 0u8;
    let mut j = 0;
    while j < SELECTORS.len() {
      mask |= parity[i & SELECTORS[j] as usize] << j;
      j += 1;
    }
    table[i] = mask;
    i += 1;
  }

  table
}

#[cfg(not(feature = "no-tables"))]
const PARITY: [u8; 256] = generate_parity_table();

/// Bit parity of every byte value.
#[cfg(not(feature = "no-tables"))]
pub static PARITY_TABLE: [u8; 256] = PARITY;

/// Column parity contribution of every byte value.
#[cfg(not(feature = "no-tables"))]
pub static COLUMN_MASK_TABLE: [u8; 256] = generate_column_mask_table(&PARITY);

/// Parity of `b`, from the table when available.
#[inline(always)]
#[must_use]
pub fn byte_parity(b: u8) -> u8 {
  #[cfg(not(feature = "no-tables"))]
  {
    PARITY_TABLE[b as usize]
  }

  #[cfg(feature = "no-tables")]
  {
    parity(b)
  }
}

/// Column mask of `b`, from the table when available.
#[inline(always)]
#[must_use]
pub fn byte_column_mask(b: u8) -> u8 {
  #[cfg(not(feature = "no-tables"))]
  {
    COLUMN_MASK_TABLE[b as usize]
  }

  #[cfg(feature = "no-tables")]
  {
    column_mask(b)
  }
}
