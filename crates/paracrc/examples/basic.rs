//! Basic usage: one-shot, streaming, resuming, and validation.
//!
//! Run with: `cargo run --example basic -p paracrc`

use paracrc::{Checksum, Crc, Crc5Usb, Crc16Kermit, Crc24OpenPgp, Crc32, Crc32c, Crc64};

fn main() {
  println!("=== paracrc Basic Examples ===\n");

  one_shot_examples();
  custom_parametrization();
  streaming_examples();
  resume_example();
  validation_example();
}

/// One-shot computation over the predefined catalogue.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG
  let crc32 = Crc32::compute(data);
  println!("CRC-32:           0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  let crc32c = Crc32c::compute(data);
  println!("CRC-32C:          0x{crc32c:08X}");
  assert_eq!(crc32c, 0xE306_9283);

  // CRC-64 (XZ/ECMA) - XZ Utils, 7-Zip
  let crc64 = Crc64::compute(data);
  println!("CRC-64 (XZ):      0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // CRC-24 (OpenPGP) - RFC 4880
  let crc24 = Crc24OpenPgp::compute(data);
  println!("CRC-24 (OpenPGP): 0x{crc24:06X}");
  assert_eq!(crc24, 0x21_CF02);

  // CRC-16 (KERMIT) - CCITT-TRUE
  let crc16 = Crc16Kermit::compute(data);
  println!("CRC-16 (KERMIT):  0x{crc16:04X}");
  assert_eq!(crc16, 0x2189);

  // Widths need not be byte multiples: CRC-5/USB lives in 5 bits.
  let crc5 = Crc5Usb::compute(data);
  println!("CRC-5 (USB):      0x{crc5:02X}");
  assert_eq!(crc5, 0x19);

  println!();
}

/// Every catalogue name is just an alias; any Rocksoft parametrization
/// works the same way.
fn custom_parametrization() {
  println!("--- Custom Parametrization ---\n");

  // CRC-6/DARC spelled out: width 6, poly 0x19, reflected, no init/xor.
  type Darc6 = Crc<6, 0x19, 0x00, true, true, 0x00>;

  let crc = Darc6::compute(b"123456789");
  println!("CRC-6 (DARC):     0x{crc:02X}");
  assert_eq!(crc, 0x26);

  println!();
}

/// Streaming computation: pure state values, or the hasher trait.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";

  // States are small Copy values; every operation returns a new state.
  let state = Crc32::new().process(b"1234").process(b"56789");
  println!("Streaming CRC-32: 0x{:08X}", state.finalize());
  assert_eq!(state.finalize(), Crc32::compute(data));

  // The hasher-style trait works too, for code generic over checksums.
  let mut hasher = Crc64::new();
  hasher.update(b"streaming ");
  hasher.update(b"crc64");
  println!("Streaming CRC-64: 0x{:016X}", hasher.finalize());

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  println!("Reset CRC-64:     0x{:016X}", hasher.finalize());

  println!();
}

/// Resume computation from a saved checksum.
fn resume_example() {
  println!("--- Resume from Saved Checksum ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  // Compute a partial CRC and keep only the finalized value
  let saved = Crc32::compute(part1);
  println!("Saved checksum after part1: 0x{saved:08X}");

  // Later, pick up where we left off
  let mut resumed = <Crc32 as Checksum>::with_initial(saved);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:     0x{final_crc:08X}");

  // Verify: matches processing everything at once
  let full = Crc32::new().process(part1).process(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation\n");
}

/// Residue-based validation of self-checksummed messages.
fn validation_example() {
  println!("--- Validation ---\n");

  let message = b"frame payload";

  // Append the checksum in its wire orientation (little-endian for
  // reflected parametrizations like CRC-32C).
  let crc = Crc32c::compute(message) as u32;
  let mut framed = message.to_vec();
  framed.extend_from_slice(&crc.to_le_bytes());

  println!("Framed message validates: {}", Crc32c::validate(&framed));
  assert!(Crc32c::validate(&framed));

  framed[3] ^= 0x01;
  println!("Corrupted frame validates: {}", Crc32c::validate(&framed));
  assert!(!Crc32c::validate(&framed));

  println!();
}
