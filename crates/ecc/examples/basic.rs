//! Basic ECC usage: one-shot, streaming, resume and I/O.
//!
//! Run with: `cargo run --example basic -p ecc`

use std::io::Write;

use ecc::{Checksum, ChecksumCombine, Ecc};

/// Memory card pages are protected in 128-byte chunks.
const CHUNK: usize = 128;

fn main() -> std::io::Result<()> {
  println!("=== ECC Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  page_example()?;

  Ok(())
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let empty = Ecc::checksum(&[]);
  println!("ECC(empty):  {empty:02X?}");
  assert_eq!(empty, [0x77, 0x7F, 0x7F]);

  let one = Ecc::checksum(&[0x01]);
  println!("ECC([0x01]): {one:02X?}");
  assert_eq!(one, [0x70, 0x01, 0x7E]);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";
  let expected = Ecc::checksum(data);

  let mut ecc = Ecc::new();
  for part in data.chunks(5) {
    ecc.consume(part);
  }
  println!("streamed: {:02X?}", ecc.finalize());
  assert_eq!(ecc.finalize(), expected);

  let (a, b) = data.split_at(10);
  let combined = <Ecc as ChecksumCombine>::combine(Ecc::checksum(a), Ecc::checksum(b), b.len());
  println!("combined: {combined:02X?}");
  assert_eq!(combined, expected);

  println!();
}

/// Resume: continue from a stored code.
fn resume_example() {
  println!("--- Resume ---\n");

  let (head, tail) = (b"first half, ".as_slice(), b"second half".as_slice());
  let stored = Ecc::checksum(head);

  let mut ecc = Ecc::resume(stored);
  ecc.update(tail);

  let mut whole = head.to_vec();
  whole.extend_from_slice(tail);
  println!("resumed: {:02X?}", ecc.finalize());
  assert_eq!(ecc.finalize(), Ecc::checksum(&whole));

  println!();
}

/// Protect a page: one code per 128-byte chunk, written after the data.
fn page_example() -> std::io::Result<()> {
  println!("--- Page ---\n");

  let page: Vec<u8> = (0..512u32).map(|i| (i * 7) as u8).collect();

  let mut spare = Vec::new();
  for chunk in page.chunks(CHUNK) {
    let mut writer = Ecc::writer(std::io::sink());
    writer.write_all(chunk)?;
    spare.extend_from_slice(&writer.checksum());
  }

  println!("page: {} bytes, spare: {:02X?}", page.len(), spare);
  assert_eq!(spare.len(), page.len() / CHUNK * Ecc::CODE_SIZE);

  Ok(())
}
