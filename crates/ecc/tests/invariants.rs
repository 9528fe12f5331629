use ecc::{Checksum, ChecksumCombine, Ecc, Registers, tables};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Register update written out per bit, independent of the crate's kernels.
fn ecc_per_bit(data: &[u8]) -> [u8; 3] {
  const SELECTORS: [u8; 7] = [0x55, 0x33, 0x0F, 0x00, 0xAA, 0xCC, 0xF0];

  let (mut cp, mut lp0, mut lp1) = (0x77u8, 0x7Fu8, 0x7Fu8);
  for &b in data {
    for (j, sel) in SELECTORS.iter().enumerate() {
      let masked = b & sel;
      let bit = (0..8).fold(0u8, |acc, i| acc ^ ((masked >> i) & 1));
      cp ^= bit << j;
    }
    let odd = (0..8).fold(0u8, |acc, i| acc ^ ((b >> i) & 1));
    if odd == 1 {
      lp0 ^= !b;
      lp1 ^= b;
    }
  }
  [cp, lp0 & 0x7F, lp1]
}

#[test]
fn test_vectors() {
  assert_eq!(Ecc::checksum(&[]), [0x77, 0x7F, 0x7F]);
  assert_eq!(Ecc::checksum(&[0x00]), [0x77, 0x7F, 0x7F]);
  assert_eq!(Ecc::checksum(&[0xFF]), [0x77, 0x7F, 0x7F]);
  assert_eq!(Ecc::checksum(&[0x01]), [0x70, 0x01, 0x7E]);
}

#[test]
fn reset_restores_sentinel() {
  let mut ecc = Ecc::new();
  ecc.consume(&gen_bytes(300, 3));
  assert_ne!(ecc.registers(), Registers::INIT);
  ecc.reset();
  assert_eq!(ecc.registers(), Registers { cp: 0x77, lp0: 0x7F, lp1: 0x7F });
  assert_eq!(ecc.finalize(), [0x77, 0x7F, 0x7F]);
}

#[test]
fn tables_match_definitions() {
  #[cfg(not(feature = "no-tables"))]
  for v in 0..=255u8 {
    assert_eq!(tables::PARITY_TABLE[v as usize], (v.count_ones() & 1) as u8);
    let entry = tables::COLUMN_MASK_TABLE[v as usize];
    for (j, &sel) in tables::SELECTORS.iter().enumerate() {
      assert_eq!((entry >> j) & 1, ((v & sel).count_ones() & 1) as u8, "v={v:#04x} j={j}");
    }
    assert_eq!(entry >> 7, 0);
  }

  for v in 0..=255u8 {
    assert_eq!(tables::byte_parity(v), tables::parity(v));
    assert_eq!(tables::byte_column_mask(v), tables::column_mask(v));
  }
}

#[test]
fn ecc_invariants() {
  let lengths = [0usize, 1, 2, 3, 7, 8, 9, 15, 16, 31, 32, 63, 64, 65, 127, 128, 255, 256, 1024, 2048];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = Ecc::checksum(&data);
      assert_eq!(oneshot, ecc_per_bit(&data), "reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = Ecc::new();
        assert_eq!(h.consume(a), a.len());
        assert_eq!(h.consume(b), b.len());
        assert_eq!(h.finalize(), oneshot, "streaming mismatch at len={len} split={split}");
        assert_eq!(h.finalize(), oneshot, "finalize not idempotent at len={len}");

        let mut h = Ecc::new();
        h.update_vectored(&[a, b]);
        assert_eq!(h.finalize(), oneshot, "vectored mismatch at len={len} split={split}");

        let combined = <Ecc as ChecksumCombine>::combine(Ecc::checksum(a), Ecc::checksum(b), b.len());
        assert_eq!(combined, oneshot, "combine mismatch at len={len} split={split}");

        let mut resumed = <Ecc as Checksum>::with_initial(Ecc::checksum(a));
        resumed.update(b);
        assert_eq!(resumed.finalize(), oneshot, "resume mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn byte_order_is_irrelevant() {
  for a in 0..=255u8 {
    for b in [0x00u8, 0x01, 0x7F, 0x80, 0xA5, 0xFE] {
      let mut ab = Ecc::new();
      ab.consume(&[a, b]);
      let mut ba = Ecc::new();
      ba.consume(&[b, a]);
      assert_eq!(ab.registers(), ba.registers(), "a={a:#04x} b={b:#04x}");
    }
  }
}

#[test]
fn single_bit_flip_changes_code() {
  let page = gen_bytes(128, 0x5eed);
  let good = Ecc::checksum(&page);

  for byte in 0..page.len() {
    for bit in 0..8 {
      let mut bad = page.clone();
      bad[byte] ^= 1 << bit;
      assert_ne!(Ecc::checksum(&bad), good, "flip at byte={byte} bit={bit} went unnoticed");
    }
  }
}

#[test]
fn finalize_append_and_sum_agree() {
  let data = gen_bytes(77, 9);
  let mut ecc = Ecc::new();
  ecc.consume(&data);

  let prefix = vec![0xDE, 0xAD];
  let mut expected = prefix.clone();
  expected.extend_from_slice(&ecc.finalize());

  assert_eq!(ecc.sum(prefix.clone()), expected);
  assert_eq!(Checksum::finalize_append(&ecc, prefix), expected);
  assert_eq!(ecc.sum(Vec::new()), ecc.finalize());
}
