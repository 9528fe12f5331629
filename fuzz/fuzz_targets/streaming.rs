//! Fuzz target for the streaming ECC API.
//!
//! Tests that arbitrary sequences of consume, finalize and reset calls
//! produce the same code as a one-shot computation.

#![no_main]

use arbitrary::Arbitrary;
use ecc::Ecc;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming consumes
  chunk_sizes: Vec<usize>,
  /// Prefix handed to `sum`
  prefix: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Ecc::checksum(data);

  let mut ecc = Ecc::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx % input.chunk_sizes.len();
      (input.chunk_sizes[idx] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    let before = ecc.finalize();
    assert_eq!(ecc.finalize(), before, "finalize mutated state");
    assert_eq!(ecc.consume(&data[offset..end]), end - offset);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(ecc.finalize(), expected, "ecc streaming mismatch");

  let summed = ecc.sum(input.prefix.clone());
  assert_eq!(&summed[..input.prefix.len()], &input.prefix[..]);
  assert_eq!(&summed[input.prefix.len()..], &expected);

  ecc.reset();
  assert_eq!(ecc.finalize(), [0x77, 0x7F, 0x7F], "reset did not restore the empty code");
});
