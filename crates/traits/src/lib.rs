//! Streaming checksum traits.
//!
//! This crate provides the capability every checksum in the workspace conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Incremental, byte-oriented checksum or error-correcting code |
//! | [`ChecksumCombine`] | Join the codes of two adjacent blocks |
//!
//! With the `std` feature, [`io::ChecksumReader`] and [`io::ChecksumWriter`]
//! compute a checksum transparently while data moves through `std::io`.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
