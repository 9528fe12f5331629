extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::*;
use crate::{portable, reference::ecc_reference};

proptest! {
  #[test]
  fn ecc_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Ecc::checksum(&data);
    let reference = ecc_reference(Registers::INIT, &data).code();
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn portable_kernels_agree(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    cp in any::<u8>(),
    lp0 in any::<u8>(),
    lp1 in any::<u8>(),
  ) {
    let start = Registers { cp, lp0, lp1 };
    let reference = ecc_reference(start, &data);
    prop_assert_eq!(portable::ecc_table(start, &data), reference);
    prop_assert_eq!(portable::ecc_swar(start, &data), reference);
  }

  #[test]
  fn ecc_streaming_resume_and_combine(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    chunk in 1usize..=257
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let oneshot = Ecc::checksum(&data);

    let mut hasher = Ecc::new();
    for part in a.chunks(chunk) {
      hasher.consume(part);
    }
    for part in b.chunks(chunk) {
      hasher.consume(part);
    }
    prop_assert_eq!(hasher.finalize(), oneshot);

    let combined = Ecc::combine(Ecc::checksum(a), Ecc::checksum(b));
    prop_assert_eq!(combined, oneshot);

    let mut resumed = Ecc::resume(Ecc::checksum(a));
    resumed.consume(b);
    prop_assert_eq!(resumed.finalize(), oneshot);
  }

  #[test]
  fn ecc_ignores_byte_order(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let mut data = data;
    let forward = Ecc::checksum(&data);
    data.reverse();
    prop_assert_eq!(Ecc::checksum(&data), forward);
    data.sort_unstable();
    prop_assert_eq!(Ecc::checksum(&data), forward);
  }

  #[test]
  fn doubled_input_cancels(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let doubled: Vec<u8> = data.iter().chain(data.iter()).copied().collect();
    prop_assert_eq!(Ecc::checksum(&doubled), Ecc::checksum(&[]));
  }
}
