//! Bitwise reference implementation.
//!
//! Computes every register update straight from its definition using
//! `count_ones`, with no lookup tables and no shared helpers from
//! [`tables`](crate::tables). It is the oracle the table and SWAR kernels are
//! tested against, and the kernel behind `ECC_FORCE=reference`.

// SAFETY: Indexing is bounded by the loop condition.
#![allow(clippy::indexing_slicing)]

use crate::{Registers, tables::SELECTORS};

/// Feed `data` into `regs`, one bit count at a time.
#[must_use]
pub const fn ecc_reference(regs: Registers, data: &[u8]) -> Registers {
  let mut cp = regs.cp;
  let mut lp0 = regs.lp0;
  let mut lp1 = regs.lp1;

  let mut i = 0;
  while i < data.len() {
    let b = data[i];

    let mut j = 0;
    while j < SELECTORS.len() {
      let bit = ((b & SELECTORS[j]).count_ones() & 1) as u8;
      cp ^= bit << j;
      j += 1;
    }

    if b.count_ones() & 1 == 1 {
      lp0 ^= !b;
      lp1 ^= b;
    }

    i += 1;
  }

  Registers { cp, lp0, lp1 }
}
