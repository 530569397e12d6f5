//! Differential fuzzing against reference implementations.
//!
//! Compares our generic kernels against well-established crates to catch
//! any discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paracrc::{Crc16Arc, Crc32IsoHdlc, Crc32c, Crc64Xz, Parallel, SliceBy};

fuzz_target!(|data: &[u8]| {
  test_crc32c_differential(data);
  test_crc32_iso_differential(data);
  test_crc16_arc_differential(data);
  test_crc64_xz_differential(data);
  test_slice_width_consistency(data);
});

fn test_crc32c_differential(data: &[u8]) {
  let ours = Crc32c::compute(data);
  assert_eq!(
    ours,
    u64::from(crc32c::crc32c(data)),
    "CRC-32C differential mismatch: ours={ours:#010x}, len={}",
    data.len()
  );

  let oracle = crc::Crc::<u32>::new(&crc::CRC_32_ISCSI);
  assert_eq!(ours, u64::from(oracle.checksum(data)), "CRC-32C crc-rs mismatch, len={}", data.len());
}

fn test_crc32_iso_differential(data: &[u8]) {
  let ours = Crc32IsoHdlc::compute(data);
  assert_eq!(
    ours,
    u64::from(crc32fast::hash(data)),
    "CRC-32/ISO-HDLC differential mismatch: ours={ours:#010x}, len={}",
    data.len()
  );
}

fn test_crc16_arc_differential(data: &[u8]) {
  let oracle = crc::Crc::<u16>::new(&crc::CRC_16_ARC);
  assert_eq!(
    Crc16Arc::compute(data),
    u64::from(oracle.checksum(data)),
    "CRC-16/ARC differential mismatch, len={}",
    data.len()
  );
}

fn test_crc64_xz_differential(data: &[u8]) {
  let oracle = crc::Crc::<u64>::new(&crc::CRC_64_XZ);
  assert_eq!(
    Crc64Xz::compute(data),
    oracle.checksum(data),
    "CRC-64/XZ differential mismatch, len={}",
    data.len()
  );
}

fn test_slice_width_consistency(data: &[u8]) {
  let baseline = Crc64Xz::compute_with(SliceBy::<1>, data);
  assert_eq!(Crc64Xz::compute_with(SliceBy::<8>, data), baseline);
  assert_eq!(Crc64Xz::compute_with(SliceBy::<16>, data), baseline);
  assert_eq!(Crc64Xz::compute_with(Parallel::<SliceBy<8>>::new(), data), baseline);
}
