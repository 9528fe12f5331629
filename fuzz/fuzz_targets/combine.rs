//! Fuzz target for ECC combine and resume.
//!
//! Splits the input at arbitrary points and checks that folding the chunk
//! codes together, or resuming from a stored code, gives the whole-input code.

#![no_main]

use arbitrary::Arbitrary;
use ecc::{Checksum, ChecksumCombine, Ecc};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort();
  splits.dedup();

  let expected = Ecc::checksum(data);

  let mut chunks = Vec::new();
  let mut prev = 0;
  for &split in &splits {
    if split > prev {
      chunks.push(&data[prev..split]);
      prev = split;
    }
  }
  chunks.push(&data[prev..]);

  let combined = chunks.iter().fold(Ecc::checksum(&[]), |acc, chunk| {
    <Ecc as ChecksumCombine>::combine(acc, Ecc::checksum(chunk), chunk.len())
  });
  assert_eq!(combined, expected, "combine chain mismatch, chunks={}", chunks.len());

  let mut resumed = Ecc::new();
  for chunk in &chunks {
    resumed = <Ecc as Checksum>::with_initial(resumed.finalize());
    resumed.update(chunk);
  }
  assert_eq!(resumed.finalize(), expected, "resume chain mismatch");
});
