//! Parallel checksum computation.
//!
//! CRC checksums are mathematically combinable: given crc(A) and crc(B),
//! crc(A || B) follows without touching the data again. This example walks
//! through the combination ladder, from raw states to the built-in
//! multi-threaded driver.
//!
//! Run with: `cargo run --example parallel -p paracrc`

use std::thread;

use paracrc::{
  Checksum, ChecksumCombine, Crc32, Crc64, Parallel, SliceBy,
  parallel::{checksum_chunks, combine_checksums},
};

fn main() {
  println!("=== paracrc Parallel Examples ===\n");

  combine_states();
  combine_checksums_example();
  chunk_helpers();
  builtin_driver();
  threaded_example();
}

/// The state-level primitive: shift, then XOR.
fn combine_states() {
  println!("--- Combining States ---\n");

  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6); // "hello " and "world"

  // The leading span starts from the initial state; trailing spans start
  // from the zero state. Shifting A past B's bytes lines the spans up, and
  // combination is a register XOR.
  let a = Crc32::new().process(part_a).process_zero_bytes(part_b.len() as u64);
  let b = Crc32::zero().process(part_b);
  let combined = a.combine(b).finalize();

  println!("Combined:           0x{combined:08X}");
  println!("Full data checksum: 0x{:08X}", Crc32::compute(data));
  assert_eq!(combined, Crc32::compute(data));
  println!("Match!\n");
}

/// One level up: combine finalized checksums.
fn combine_checksums_example() {
  println!("--- Combining Finalized Checksums ---\n");

  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6);

  let crc_a = Crc32::checksum(part_a);
  let crc_b = Crc32::checksum(part_b);

  println!("Part A (\"hello \"): 0x{crc_a:08X}");
  println!("Part B (\"world\"):  0x{crc_b:08X}");

  // combine(crc_a, crc_b, len_b) = crc(part_a || part_b); the initial-value
  // offset is cancelled internally.
  let combined = <Crc32 as ChecksumCombine>::combine(crc_a, crc_b, part_b.len());
  println!("Combined:           0x{combined:08X}");
  assert_eq!(combined, Crc32::compute(data));
  println!("Match!\n");
}

/// Chunk helpers for any number of parts.
fn chunk_helpers() {
  println!("--- Chunk Helpers ---\n");

  // Simulate large data (in practice, this could be a memory-mapped file)
  let data: Vec<u8> = (0..1_000_000).map(|i| (i % 256) as u8).collect();

  let sequential = Crc64::compute(&data);
  println!("Sequential CRC-64:  0x{sequential:016X}");

  // checksum_chunks computes and merges in one go
  let chunks: Vec<&[u8]> = data.chunks(250_000).collect();
  let chunked = checksum_chunks::<Crc64>(&chunks);
  println!("Chunked CRC-64:     0x{chunked:016X}");
  assert_eq!(chunked, sequential);
  println!("Match! (processed {} chunks)\n", chunks.len());
}

/// The built-in driver does the splitting, shifting, and reduction itself.
fn builtin_driver() {
  println!("--- Built-In Parallel Driver ---\n");

  let data: Vec<u8> = (0..4_000_000).map(|i| ((i * 31) % 256) as u8).collect();

  let sequential = Crc64::compute(&data);
  let parallel = Crc64::compute_with(Parallel::<SliceBy<8>>::new(), &data);

  println!("Sequential: 0x{sequential:016X}");
  println!("Parallel:   0x{parallel:016X}");
  assert_eq!(parallel, sequential);
  println!("Match!\n");
}

/// Bring-your-own-threads: compute per-chunk checksums, then merge.
fn threaded_example() {
  println!("--- Multi-Threaded Example ---\n");

  let data: Vec<u8> = (0..4_000_000).map(|i| ((i * 17) % 256) as u8).collect();

  let num_threads = 4;
  let chunk_size = data.len() / num_threads;

  let sequential = Crc64::compute(&data);
  println!("Sequential: 0x{sequential:016X}");

  // Spawn a thread per chunk
  let handles: Vec<_> = data
    .chunks(chunk_size)
    .map(|chunk| {
      let chunk = chunk.to_vec(); // Clone for thread ownership
      thread::spawn(move || (Crc64::checksum(&chunk), chunk.len()))
    })
    .collect();

  // Collect (checksum, length) pairs in chunk order and merge
  let results: Vec<(u64, usize)> = handles.into_iter().map(|h| h.join().expect("thread panicked")).collect();
  let combined = combine_checksums::<Crc64>(&results);

  println!("Threaded:   0x{combined:016X}");
  assert_eq!(combined, sequential);
  println!("Match! (used {num_threads} threads)\n");
}
