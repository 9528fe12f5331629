//! Kernel dispatch: selection and caching.
//!
//! A [`Dispatcher`] runs its selector once on first use and keeps the chosen
//! kernel for the rest of the process. Under `std` the result lives in a
//! `OnceLock`; without `std` the selector is re-evaluated, which is cheap
//! because it only reads the (override-free) configuration.

use crate::Registers;

/// Signature for ECC kernels: `fn(registers, data) -> registers`.
pub type EccFn = fn(Registers, &[u8]) -> Registers;

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: EccFn,
}

impl Selected {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: EccFn) -> Self {
    Self { name, func }
  }
}

/// Caches the kernel chosen by `selector`.
pub struct Dispatcher {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected>,

  /// The selector function that chooses the kernel.
  selector: fn() -> Selected,
}

impl Dispatcher {
  /// Create a new dispatcher with the given selector function.
  #[must_use]
  pub const fn new(selector: fn() -> Selected) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| (self.selector)())
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Get the name of the selected backend.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }

  /// Call the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, regs: Registers, data: &[u8]) -> Registers {
    (self.get().func)(regs, data)
  }
}
