//! PlayStation 2 memory card ECC.
//!
//! Memory card pages carry a 3-byte Hamming-style code per 128-byte chunk of
//! data. This crate computes that code over any byte stream:
//!
//! | Byte | Register | Meaning |
//! |------|----------|---------|
//! | 0 | `cp` | column parity over the 7 selector groupings |
//! | 1 | `lp0 & 0x7F` | line parity of complemented odd-parity bytes |
//! | 2 | `lp1` | line parity of odd-parity bytes |
//!
//! Only generation is provided; comparing codes and correcting a flipped bit
//! is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use ecc::{Checksum, ChecksumCombine, Ecc};
//!
//! // One-shot
//! let code = Ecc::checksum(b"123456789");
//!
//! // Streaming
//! let mut hasher = Ecc::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), code);
//!
//! // Split computation
//! let (a, b) = b"123456789".split_at(4);
//! assert_eq!(<Ecc as ChecksumCombine>::combine(Ecc::checksum(a), Ecc::checksum(b), b.len()), code);
//!
//! // Empty input
//! assert_eq!(Ecc::new().finalize(), [0x77, 0x7F, 0x7F]);
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `std` (default) | `std::io::Write`, I/O adapters, cached kernel selection, `ECC_*` overrides |
//! | `alloc` | [`Ecc::sum`] and [`Checksum::finalize_append`] |
//! | `no-tables` | compute parity inline instead of using the 256-entry tables |
//! | `digest` | implement the `digest` crate traits |
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! ecc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod accumulator;
mod config;
#[cfg(feature = "digest")]
mod digest_compat;
mod dispatch;
mod kernels;
mod portable;
mod reference;
pub mod tables;

#[doc(hidden)]
pub mod __internal {
  pub use crate::{
    portable::{ecc_swar, ecc_table},
    reference::ecc_reference,
  };
}

pub use accumulator::{Ecc, Registers};
pub use config::{EccConfig, EccForce, EccTunables};
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;
