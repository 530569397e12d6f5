//! Fuzz the combine law: any split of any input must reassemble to the
//! one-shot checksum at the finalized-checksum level.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paracrc::{Checksum, ChecksumCombine, Crc16Genibus, Crc24OpenPgp, Crc32c, Crc64Nvme};

fuzz_target!(|data: &[u8]| {
  // First byte picks the split point, the rest is the message.
  let Some((&first, rest)) = data.split_first() else {
    return;
  };
  let split = usize::from(first) % (rest.len() + 1);
  let (a, b) = rest.split_at(split);

  check::<Crc32c>(rest, a, b);
  check::<Crc64Nvme>(rest, a, b);
  // Affine parametrizations (nonzero init) exercise the offset cancellation.
  check::<Crc24OpenPgp>(rest, a, b);
  check::<Crc16Genibus>(rest, a, b);
});

fn check<C: ChecksumCombine>(data: &[u8], a: &[u8], b: &[u8]) {
  let expected = C::checksum(data);
  let combined = C::combine(C::checksum(a), C::checksum(b), b.len());
  assert_eq!(combined, expected, "combine mismatch at split {}", a.len());
}
