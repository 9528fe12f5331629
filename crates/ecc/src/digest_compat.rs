//! [`digest`] trait implementations.
//!
//! With these, [`Ecc`] gets `digest::Digest` through the blanket impl and can
//! be dropped into code that is generic over RustCrypto hashers.

use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update, consts::U3};

use crate::Ecc;

impl HashMarker for Ecc {}

impl OutputSizeUser for Ecc {
  type OutputSize = U3;
}

impl Update for Ecc {
  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.consume(data);
  }
}

impl FixedOutput for Ecc {
  #[inline]
  fn finalize_into(self, out: &mut Output<Self>) {
    out.copy_from_slice(&Ecc::finalize(&self));
  }
}

impl Reset for Ecc {
  #[inline]
  fn reset(&mut self) {
    Ecc::reset(self);
  }
}

impl FixedOutputReset for Ecc {
  #[inline]
  fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
    out.copy_from_slice(&Ecc::finalize(self));
    Ecc::reset(self);
  }
}
