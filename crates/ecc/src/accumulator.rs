//! The streaming ECC accumulator.
//!
//! ```rust
//! use ecc::Ecc;
//!
//! assert_eq!(Ecc::checksum(b""), [0x77, 0x7F, 0x7F]);
//! assert_eq!(Ecc::checksum(&[0x01]), [0x70, 0x01, 0x7E]);
//!
//! let mut ecc = Ecc::new();
//! assert_eq!(ecc.consume(b"hello "), 6);
//! ecc.consume(b"world");
//! assert_eq!(ecc.finalize(), Ecc::checksum(b"hello world"));
//! ```

use crate::{
  config::{self, EccConfig, EccForce, EccTunables},
  dispatch::{Dispatcher, Selected},
  kernels, portable, reference,
};

/// Mask applied to `lp0` when the code is emitted.
const LP0_OUTPUT_MASK: u8 = 0x7F;

/// The three ECC registers.
///
/// - `cp`: column parity, XOR of the column masks of every byte
/// - `lp0`: XOR of the complement of every odd-parity byte
/// - `lp1`: XOR of every odd-parity byte
///
/// `lp0` is kept at full width; its top bit is only dropped in [`code`](Self::code).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Registers {
  pub cp: u8,
  pub lp0: u8,
  pub lp1: u8,
}

impl Registers {
  /// Register values for an empty input.
  pub const INIT: Self = Self {
    cp: 0x77,
    lp0: 0x7F,
    lp1: 0x7F,
  };

  /// The 3-byte code: `[cp, lp0 & 0x7F, lp1]`.
  #[inline]
  #[must_use]
  pub const fn code(self) -> [u8; 3] {
    [self.cp, self.lp0 & LP0_OUTPUT_MASK, self.lp1]
  }

  /// Rebuild full-width registers from an emitted code.
  ///
  /// Bits 0 and 4 of `cp` together track the parity of the number of
  /// odd-parity bytes seen, and every such byte moves `lp0` and `lp1` apart
  /// by `0xFF`. That pins down the masked top bit of `lp0`, so the second
  /// code byte is not needed.
  #[inline]
  #[must_use]
  pub const fn from_code(code: [u8; 3]) -> Self {
    let [cp, _, lp1] = code;
    let odd_bytes = (cp ^ (cp >> 4) ^ Self::INIT.cp ^ (Self::INIT.cp >> 4)) & 1;
    Self {
      cp,
      lp0: lp1 ^ Self::INIT.lp0 ^ Self::INIT.lp1 ^ 0u8.wrapping_sub(odd_bytes),
      lp1,
    }
  }

  /// Registers for `A || B` given the registers for `A` and for `B`.
  ///
  /// Every register is an XOR accumulation around [`INIT`](Self::INIT).
  #[inline]
  #[must_use]
  pub const fn combine(self, other: Self) -> Self {
    Self {
      cp: self.cp ^ other.cp ^ Self::INIT.cp,
      lp0: self.lp0 ^ other.lp0 ^ Self::INIT.lp0,
      lp1: self.lp1 ^ other.lp1 ^ Self::INIT.lp1,
    }
  }
}

impl Default for Registers {
  #[inline]
  fn default() -> Self {
    Self::INIT
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Selection
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn ecc_portable_auto(regs: Registers, data: &[u8]) -> Registers {
  if data.len() < table_to_swar() {
    portable::ecc_table(regs, data)
  } else {
    portable::ecc_swar(regs, data)
  }
}

#[inline]
#[must_use]
fn table_to_swar() -> usize {
  config::get().tunables.table_to_swar
}

#[inline]
#[must_use]
fn selected_kernel_name(len: usize) -> &'static str {
  let cfg = config::get();
  match cfg.effective_force {
    EccForce::Reference => kernels::REFERENCE,
    EccForce::Table => kernels::PORTABLE_TABLE,
    EccForce::Swar => kernels::PORTABLE_SWAR,
    EccForce::Auto => kernels::portable_name_for_len(len, cfg.tunables.table_to_swar),
  }
}

fn select_ecc() -> Selected {
  select_for(config::get().effective_force)
}

fn select_for(force: EccForce) -> Selected {
  match force {
    EccForce::Reference => Selected::new(kernels::REFERENCE, reference::ecc_reference),
    EccForce::Table => Selected::new(kernels::PORTABLE_TABLE, portable::ecc_table),
    EccForce::Swar => Selected::new(kernels::PORTABLE_SWAR, portable::ecc_swar),
    EccForce::Auto => Selected::new(kernels::PORTABLE_AUTO, ecc_portable_auto),
  }
}

static ECC_DISPATCHER: Dispatcher = Dispatcher::new(select_ecc);

// ─────────────────────────────────────────────────────────────────────────────
// ECC Type
// ─────────────────────────────────────────────────────────────────────────────

/// PlayStation 2 memory card ECC.
///
/// A Hamming-style code over an arbitrary run of bytes, emitted as 3 bytes:
///
/// | Byte | Content |
/// |------|---------|
/// | 0 | column parity (`cp`) |
/// | 1 | line parity of complemented odd-parity bytes (`lp0 & 0x7F`) |
/// | 2 | line parity of odd-parity bytes (`lp1`) |
///
/// The code of the empty input is `[0x77, 0x7F, 0x7F]`. Reading the code
/// never changes the state, and byte order within the input does not affect
/// it.
///
/// A single instance is not synchronized; drive it from one thread at a time.
///
/// # Examples
///
/// ```rust
/// use ecc::Ecc;
///
/// let mut ecc = Ecc::new();
/// ecc.consume(&[0x01]);
/// assert_eq!(ecc.finalize(), [0x70, 0x01, 0x7E]);
/// assert_eq!(ecc.sum(vec![0xAA]), [0xAA, 0x70, 0x01, 0x7E]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ecc {
  regs: Registers,
}

impl Ecc {
  /// Preferred input granularity. Advisory; any length is accepted.
  pub const BLOCK_SIZE: usize = 1;
  /// Length of the emitted code.
  pub const CODE_SIZE: usize = 3;

  /// Create an accumulator in the empty-input state.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { regs: Registers::INIT }
  }

  /// Create an accumulator that continues from a previously emitted code.
  ///
  /// `Ecc::resume(Ecc::checksum(a))` followed by `consume(b)` yields
  /// `Ecc::checksum(a ++ b)`. Only bytes 0 and 2 of `code` are read; see
  /// [`Registers::from_code`].
  #[inline]
  #[must_use]
  pub const fn resume(code: [u8; 3]) -> Self {
    Self {
      regs: Registers::from_code(code),
    }
  }

  /// Advisory minimum input granularity (always 1).
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Length of the emitted code (always 3).
  #[inline]
  #[must_use]
  pub const fn code_size(&self) -> usize {
    Self::CODE_SIZE
  }

  /// Return to the empty-input state.
  #[inline]
  pub fn reset(&mut self) {
    self.regs = Registers::INIT;
  }

  /// Feed `data` into the accumulator.
  ///
  /// Never fails; returns `data.len()`.
  #[inline]
  pub fn consume(&mut self, data: &[u8]) -> usize {
    self.regs = ECC_DISPATCHER.call(self.regs, data);
    data.len()
  }

  /// The code of everything consumed so far.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> [u8; 3] {
    self.regs.code()
  }

  /// Append the current code to `prefix` and return it.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn sum(&self, mut prefix: alloc::vec::Vec<u8>) -> alloc::vec::Vec<u8> {
    prefix.extend_from_slice(&self.finalize());
    prefix
  }

  /// The raw registers, with the full-width `lp0`.
  #[inline]
  #[must_use]
  pub const fn registers(&self) -> Registers {
    self.regs
  }

  /// Compute the code of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> [u8; 3] {
    ECC_DISPATCHER.call(Registers::INIT, data).code()
  }

  /// Combine two codes: `code(A || B)` from `code(A)` and `code(B)`.
  ///
  /// The ECC does not depend on input positions, so no length is needed.
  #[inline]
  #[must_use]
  pub const fn combine(code_a: [u8; 3], code_b: [u8; 3]) -> [u8; 3] {
    Registers::from_code(code_a).combine(Registers::from_code(code_b)).code()
  }

  /// Get the name of the currently selected backend.
  #[must_use]
  pub fn backend_name() -> &'static str {
    ECC_DISPATCHER.backend_name()
  }

  /// Get the effective ECC configuration.
  #[must_use]
  pub fn config() -> EccConfig {
    config::get()
  }

  /// Convenience accessor for the active ECC tunables.
  #[must_use]
  pub fn tunables() -> EccTunables {
    Self::config().tunables
  }

  /// Returns the kernel name that the selector would choose for `len`.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    selected_kernel_name(len)
  }
}

impl Default for Ecc {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl traits::Checksum for Ecc {
  const OUTPUT_SIZE: usize = Self::CODE_SIZE;
  const BLOCK_SIZE: usize = Self::BLOCK_SIZE;
  type Output = [u8; 3];

  #[inline]
  fn new() -> Self {
    Ecc::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Ecc::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.consume(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Ecc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Ecc::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Ecc::checksum(data)
  }
}

impl traits::ChecksumCombine for Ecc {
  #[inline]
  fn combine(a: Self::Output, b: Self::Output, _len_b: usize) -> Self::Output {
    Ecc::combine(a, b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Ecc {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(self.consume(buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
