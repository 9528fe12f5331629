//! Streaming checksum traits.
//!
//! - **Streaming**: Incremental updates over arbitrarily split input
//! - **Non-destructive reads**: `finalize` can be called at any point
//! - **Composition**: Codes of adjacent blocks can be joined

use core::fmt::Debug;

/// Incremental checksum (or error-correcting code) over a byte stream.
///
/// # Usage
///
/// ```rust,ignore
/// use ecc::{Checksum, Ecc};
///
/// // One-shot
/// let code = Ecc::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Ecc::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), code);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - `update()` must accept any input and consume all of it
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Preferred input granularity in bytes.
  ///
  /// Advisory only: `update` accepts slices of any length.
  const BLOCK_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default + AsRef<[u8]>;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously emitted output.
  ///
  /// Feeding it more data must give the same result as feeding the original
  /// hasher that produced `initial`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// This method does not consume or reset the hasher; further updates
  /// continue from the current state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Append the current checksum to `prefix` and return it.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  fn finalize_append(&self, mut prefix: alloc::vec::Vec<u8>) -> alloc::vec::Vec<u8> {
    prefix.extend_from_slice(self.finalize().as_ref());
    prefix
  }

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use ecc::{Checksum, Ecc};
  /// use std::fs::File;
  ///
  /// let mut reader = Ecc::reader(File::open("page.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("ECC: {:02x?}", reader.checksum());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use ecc::{Checksum, Ecc};
  /// use std::io::Write;
  ///
  /// let mut writer = Ecc::writer(Vec::new());
  /// writer.write_all(b"hello world")?;
  /// let (bytes, code) = writer.into_parts();
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums whose value over `A || B` can be derived from the values over
/// `A` and `B` alone.
///
/// This enables split computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently (possibly in parallel)
/// 3. Combine results left to right
///
/// ```rust,ignore
/// use ecc::{Checksum, ChecksumCombine, Ecc};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
/// let combined = Ecc::combine(Ecc::checksum(a), Ecc::checksum(b), b.len());
/// assert_eq!(combined, Ecc::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `a = checksum(A)` and `b = checksum(B)`, computes `checksum(A || B)`.
  /// Algorithms whose combination does not depend on the length of `B` may
  /// ignore `len_b`.
  #[must_use]
  fn combine(a: Self::Output, b: Self::Output, len_b: usize) -> Self::Output;
}
