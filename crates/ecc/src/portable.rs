//! Portable ECC kernels.
//!
//! - [`ecc_table`]: one byte per step, two table lookups per byte
//! - [`ecc_swar`]: eight bytes per step inside a `u64`
//!
//! The SWAR kernel relies on two properties of the registers:
//!
//! - The column mask is linear over XOR, so the column contribution of a run
//!   of bytes is the mask of their XOR.
//! - Line parity only selects which bytes take part, so per-lane parity can be
//!   spread into a byte mask and applied to the whole word at once.

use crate::{
  Registers,
  tables::{byte_column_mask, byte_parity},
};

/// Lowest bit of every byte lane.
const LANE_LSB: u64 = 0x0101_0101_0101_0101;

/// Feed `data` into `regs` one byte at a time.
#[inline]
#[must_use]
pub fn ecc_table(regs: Registers, data: &[u8]) -> Registers {
  let Registers {
    mut cp,
    mut lp0,
    mut lp1,
  } = regs;

  for &b in data {
    cp ^= byte_column_mask(b);
    if byte_parity(b) == 1 {
      lp0 ^= !b;
      lp1 ^= b;
    }
  }

  Registers { cp, lp0, lp1 }
}

/// Feed `data` into `regs` eight bytes at a time.
///
/// Trailing bytes that do not fill a word go through [`ecc_table`].
#[inline]
#[must_use]
pub fn ecc_swar(regs: Registers, data: &[u8]) -> Registers {
  let mut chunks = data.chunks_exact(8);

  let mut columns = 0u64;
  let mut odd_raw = 0u64;
  let mut odd_inv = 0u64;

  for chunk in chunks.by_ref() {
    let mut word = [0u8; 8];
    word.copy_from_slice(chunk);
    let w = u64::from_le_bytes(word);

    // Bit 0 of each lane ends up holding that byte's parity.
    let mut p = w ^ (w >> 4);
    p ^= p >> 2;
    p ^= p >> 1;
    let odd = (p & LANE_LSB).wrapping_mul(0xFF);

    columns ^= w;
    odd_raw ^= w & odd;
    odd_inv ^= !w & odd;
  }

  let regs = Registers {
    cp: regs.cp ^ byte_column_mask(fold_lanes(columns)),
    lp0: regs.lp0 ^ fold_lanes(odd_inv),
    lp1: regs.lp1 ^ fold_lanes(odd_raw),
  };

  ecc_table(regs, chunks.remainder())
}

/// XOR the eight byte lanes of `x` together.
#[inline(always)]
const fn fold_lanes(mut x: u64) -> u8 {
  x ^= x >> 32;
  x ^= x >> 16;
  x ^= x >> 8;
  x as u8
}
