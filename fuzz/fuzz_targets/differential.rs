//! Differential fuzzing between the ECC kernels.
//!
//! The bitwise reference is the oracle; the table, SWAR and dispatched paths
//! must match it for every input and every starting state.

#![no_main]

use arbitrary::Arbitrary;
use ecc::{__internal, Ecc, Registers};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  start: [u8; 3],
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let [cp, lp0, lp1] = input.start;
  let start = Registers { cp, lp0, lp1 };
  let data = &input.data;

  let reference = __internal::ecc_reference(start, data);
  let table = __internal::ecc_table(start, data);
  let swar = __internal::ecc_swar(start, data);

  assert_eq!(table, reference, "table kernel mismatch, len={}", data.len());
  assert_eq!(swar, reference, "swar kernel mismatch, len={}", data.len());

  let ours = Ecc::checksum(data);
  let expected = __internal::ecc_reference(Registers::INIT, data).code();
  assert_eq!(
    ours,
    expected,
    "dispatch mismatch: ours={ours:02x?}, reference={expected:02x?}, len={}",
    data.len()
  );
});
