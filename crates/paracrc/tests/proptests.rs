//! Property-based tests.
//!
//! Randomized counterparts to the fixed-vector suites: invariants that must
//! hold for all inputs, not just the catalogue strings.

use paracrc::{parallel::checksum_chunks, *};
use proptest::prelude::*;

/// Arbitrary byte vectors up to 4 KiB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

fn prop_slice_independent<const W: u32, const P: u64, const I: u64, const RIN: bool, const ROUT: bool, const X: u64>(
  data: &[u8],
) -> bool {
  let baseline = Crc::<W, P, I, RIN, ROUT, X>::compute_with(SliceBy::<1>, data);
  Crc::<W, P, I, RIN, ROUT, X>::compute_with(SliceBy::<2>, data) == baseline
    && Crc::<W, P, I, RIN, ROUT, X>::compute_with(SliceBy::<7>, data) == baseline
    && Crc::<W, P, I, RIN, ROUT, X>::compute_with(SliceBy::<8>, data) == baseline
    && Crc::<W, P, I, RIN, ROUT, X>::compute_with(SliceBy::<16>, data) == baseline
    && Crc::<W, P, I, RIN, ROUT, X>::new().process_iter(data.iter().copied()).finalize() == baseline
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn slice_independence_crc32c(data in arb_data()) {
    prop_assert!(prop_slice_independent::<32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF>(&data));
  }

  #[test]
  fn slice_independence_crc16_xmodem(data in arb_data()) {
    prop_assert!(prop_slice_independent::<16, 0x1021, 0x0000, false, false, 0x0000>(&data));
  }

  #[test]
  fn slice_independence_crc64_xz(data in arb_data()) {
    prop_assert!(prop_slice_independent::<64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>(&data));
  }

  #[test]
  fn slice_independence_crc5_usb(data in arb_data()) {
    prop_assert!(prop_slice_independent::<5, 0x05, 0x1F, true, true, 0x1F>(&data));
  }

  #[test]
  fn slice_independence_crc40_gsm(data in arb_data()) {
    prop_assert!(prop_slice_independent::<40, 0x0004820009, 0, false, false, 0xFFFFFFFFFF>(&data));
  }

  #[test]
  fn incremental_equals_oneshot(data in arb_data(), split in 0..4096usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);
    let state = Crc64Xz::new().process(a).process(b);
    prop_assert_eq!(state.finalize(), Crc64Xz::compute(&data));
  }

  #[test]
  fn combine_equals_oneshot(data in arb_data(), split in 0..4096usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let state = Crc32c::new()
      .process(a)
      .process_zero_bytes(b.len() as u64)
      .combine(Crc32c::zero().process(b));
    prop_assert_eq!(state.finalize(), Crc32c::compute(&data));

    let combined = <Crc32c as ChecksumCombine>::combine(Crc32c::checksum(a), Crc32c::checksum(b), b.len());
    prop_assert_eq!(combined, Crc32c::compute(&data));
  }

  #[test]
  fn combine_equals_oneshot_affine(data in arb_data(), split in 0..4096usize) {
    // CRC-16/GENIBUS has both a nonzero init and a nonzero final XOR.
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);
    let combined =
      <Crc16Genibus as ChecksumCombine>::combine(Crc16Genibus::checksum(a), Crc16Genibus::checksum(b), b.len());
    prop_assert_eq!(combined, Crc16Genibus::compute(&data));
  }

  #[test]
  fn chunk_helper_equals_oneshot(data in arb_data(), chunk in 1..257usize) {
    let chunks: Vec<&[u8]> = data.chunks(chunk).collect();
    prop_assert_eq!(checksum_chunks::<Crc64Nvme>(&chunks), Crc64Nvme::compute(&data));
  }

  #[test]
  fn zero_extension_equals_zero_bytes(data in arb_data(), n in 0..64usize) {
    let zeros = vec![0u8; n];
    let state = Crc24OpenPgp::new().process(&data);
    prop_assert_eq!(state.process_zero_bytes(n as u64), state.process(&zeros));
  }

  #[test]
  fn appended_checksum_validates(data in arb_data()) {
    let crc = Crc32c::compute(&data);
    let mut framed = data;
    framed.extend_from_slice(&(crc as u32).to_le_bytes());
    prop_assert!(Crc32c::validate(&framed));

    // Forward parametrizations serialize big-endian.
    let msg = &framed[..framed.len() - 4];
    let crc = Crc32Bzip2::compute(msg);
    let mut framed = msg.to_vec();
    framed.extend_from_slice(&(crc as u32).to_be_bytes());
    prop_assert!(Crc32Bzip2::validate(&framed));
  }

  #[test]
  fn parallel_equals_serial(data in prop::collection::vec(any::<u8>(), 0..32768)) {
    prop_assert_eq!(
      Crc64Xz::compute_with(Parallel::<SliceBy<8>>::new(), &data),
      Crc64Xz::compute(&data)
    );
  }
}
