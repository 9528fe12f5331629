//! Property-based tests for the ECC.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use ecc::{__internal, Checksum, ChecksumCombine, Ecc, Registers};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

// Generic Property Tests

/// Test that incremental updates produce the same result as one-shot.
fn prop_incremental_equals_oneshot<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let oneshot = C::checksum(data);

  let mut incremental = C::new();
  incremental.update(a);
  incremental.update(b);

  incremental.finalize() == oneshot
}

/// Test that multiple incremental updates produce the same result.
fn prop_multi_incremental<C: Checksum>(data: &[u8], splits: &[usize]) -> bool {
  let oneshot = C::checksum(data);

  let mut hasher = C::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == oneshot
}

/// Test that reset restores initial state.
fn prop_reset_restores_initial<C: Checksum>(data: &[u8]) -> bool {
  let initial = C::new().finalize();

  let mut hasher = C::new();
  hasher.update(data);
  hasher.reset();

  hasher.finalize() == initial
}

/// Test that finalize can be called repeatedly and interleaved with updates.
fn prop_finalize_is_a_read<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut hasher = C::new();
  hasher.update(a);
  let first = hasher.finalize();
  let second = hasher.finalize();
  hasher.update(b);

  first == second && first == C::checksum(a) && hasher.finalize() == C::checksum(data)
}

/// Test that combining the parts gives the code of the whole.
fn prop_combine<C: ChecksumCombine>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);
  C::combine(C::checksum(a), C::checksum(b), b.len()) == C::checksum(data)
}

/// Test that a hasher rebuilt from an output continues correctly.
fn prop_with_initial_continues<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut resumed = C::with_initial(C::checksum(a));
  resumed.update(b);
  resumed.finalize() == C::checksum(data)
}

proptest! {
  #[test]
  fn ecc_incremental(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot::<Ecc>(&data, split));
  }

  #[test]
  fn ecc_multi_incremental((data, splits) in arb_data().prop_flat_map(|d| {
    let len = d.len();
    (Just(d), arb_splits(len, 8))
  })) {
    prop_assert!(prop_multi_incremental::<Ecc>(&data, &splits));
  }

  #[test]
  fn ecc_reset(data in arb_data()) {
    prop_assert!(prop_reset_restores_initial::<Ecc>(&data));
  }

  #[test]
  fn ecc_finalize_is_a_read(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_finalize_is_a_read::<Ecc>(&data, split));
  }

  #[test]
  fn ecc_combine(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_combine::<Ecc>(&data, split));
  }

  #[test]
  fn ecc_with_initial(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_with_initial_continues::<Ecc>(&data, split));
  }

  #[test]
  fn ecc_kernels_agree(data in arb_data()) {
    let reference = __internal::ecc_reference(Registers::INIT, &data);
    prop_assert_eq!(__internal::ecc_table(Registers::INIT, &data), reference);
    prop_assert_eq!(__internal::ecc_swar(Registers::INIT, &data), reference);
    prop_assert_eq!(Ecc::checksum(&data), reference.code());
  }

  #[test]
  fn ecc_code_recovers_registers(data in arb_data()) {
    let mut ecc = Ecc::new();
    ecc.consume(&data);
    prop_assert_eq!(Registers::from_code(ecc.finalize()), ecc.registers());
  }
}
