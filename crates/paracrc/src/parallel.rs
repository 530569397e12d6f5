//! Parallel checksum computation.
//!
//! Two complementary halves live here:
//!
//! 1. The driver behind [`Parallel`](crate::Parallel): splits a slice across
//!    the available hardware parallelism, runs the inner algorithm on each
//!    chunk, shifts every partial register past the bytes that follow its
//!    chunk, and XOR-reduces. Requires `std` scoped threads; other builds
//!    degrade to sequential execution.
//! 2. Combine-based helpers for callers that bring their own parallelism
//!    (rayon, thread pools, async runtimes): compute per-chunk checksums any
//!    way you like, then merge them in O(chunks × log max_len).
//!
//! # Example
//!
//! ```
//! use paracrc::{Crc32c, parallel::checksum_chunks};
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//!
//! assert_eq!(checksum_chunks::<Crc32c>(&chunks), Crc32c::compute(data));
//! ```

// SAFETY: Chunk bounds are derived from `len / workers` arithmetic that by
// construction stays within the input slice.
#![allow(clippy::indexing_slicing)]

use traits::ChecksumCombine;

#[cfg(feature = "std")]
use crate::algorithm::Serial;
#[cfg(feature = "std")]
use crate::gf2::zero_extend;

/// Below this size the spawn cost outweighs any speedup and the driver runs
/// the inner algorithm inline.
#[cfg(feature = "std")]
const PARALLEL_MIN_BYTES: usize = 4096;

/// Chunked driver for [`Parallel`](crate::Parallel).
///
/// Chunk 0 spans `[0, len % workers + len / workers)` and starts from the
/// caller's register; every later chunk covers the next `len / workers`
/// bytes from a zero register. Each worker returns its register shifted past
/// the bytes after its chunk, so the XOR reduction may happen in any order.
#[cfg(feature = "std")]
pub(crate) fn threaded_update<const WIDTH: u32, const POLY: u64, const REFLECT: bool, A: Serial>(
  reg: u64,
  data: &[u8],
) -> u64 {
  let workers = std::thread::available_parallelism().map_or(1, core::num::NonZeroUsize::get);
  let len = data.len();
  if workers < 2 || len < PARALLEL_MIN_BYTES {
    return A::default().update_register::<WIDTH, POLY, REFLECT>(reg, data);
  }

  let chunk = len / workers;
  let head = chunk + len % workers;

  std::thread::scope(|scope| {
    let mut handles = std::vec::Vec::with_capacity(workers);
    for i in 0..workers {
      let end = head + i * chunk;
      let start = if i == 0 { 0 } else { end - chunk };
      let span = &data[start..end];
      let seed = if i == 0 { reg } else { 0 };
      let trailing = (len - end) as u64;
      handles.push(scope.spawn(move || {
        let partial = A::default().update_register::<WIDTH, POLY, REFLECT>(seed, span);
        zero_extend::<WIDTH, POLY, REFLECT>(partial, trailing)
      }));
    }
    handles.into_iter().fold(0u64, |acc, handle| match handle.join() {
      Ok(part) => acc ^ part,
      Err(payload) => std::panic::resume_unwind(payload),
    })
  })
}

/// Compute a checksum over multiple chunks by combining their individual
/// checksums.
///
/// Equivalent to checksumming the concatenated data. Returns
/// [`Checksum::EMPTY`](traits::Checksum::EMPTY) when `chunks` is empty.
#[inline]
pub fn checksum_chunks<C: ChecksumCombine>(chunks: &[&[u8]]) -> C::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return C::EMPTY;
  };

  let mut result = C::checksum(first);
  for chunk in rest {
    let chunk_crc = C::checksum(chunk);
    result = C::combine(result, chunk_crc, chunk.len());
  }

  result
}

/// Combine pre-computed `(checksum, chunk_length)` pairs, in order.
///
/// # Panics
///
/// Panics if `checksums` is empty. Use [`combine_checksums_or`] for the
/// fallible version.
#[inline]
#[allow(clippy::expect_used)] // Intentional panic documented above
pub fn combine_checksums<C: ChecksumCombine>(checksums: &[(C::Output, usize)]) -> C::Output {
  combine_checksums_or::<C>(checksums).expect("checksums slice must not be empty")
}

/// Combine pre-computed checksums, returning `None` if empty.
#[inline]
pub fn combine_checksums_or<C: ChecksumCombine>(checksums: &[(C::Output, usize)]) -> Option<C::Output> {
  let mut iter = checksums.iter();
  let (first_crc, _) = iter.next()?;
  let mut result = *first_crc;

  for &(crc, len) in iter {
    result = C::combine(result, crc, len);
  }

  Some(result)
}

/// Iterator adapter for computing a checksum over chunked data.
///
/// Created by [`checksum_iter`].
pub struct ChecksumIter<I, C> {
  inner: I,
  _marker: core::marker::PhantomData<C>,
}

impl<I, C> ChecksumIter<I, C>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
  C: ChecksumCombine,
{
  /// Consume the iterator and compute the combined checksum.
  #[inline]
  pub fn finalize(self) -> C::Output {
    let mut iter = self.inner;

    let Some(first) = iter.next() else {
      return C::EMPTY;
    };

    let mut result = C::checksum(first.as_ref());
    for chunk in iter {
      let chunk_data = chunk.as_ref();
      result = C::combine(result, C::checksum(chunk_data), chunk_data.len());
    }

    result
  }
}

/// Create a checksum iterator adapter over any iterator of byte slices.
///
/// ```
/// use paracrc::{Crc64Xz, parallel::checksum_iter};
///
/// let data = b"The quick brown fox";
/// let crc = checksum_iter::<_, Crc64Xz>(data.chunks(8)).finalize();
/// assert_eq!(crc, Crc64Xz::compute(data));
/// ```
#[inline]
pub fn checksum_iter<I, C>(iter: I) -> ChecksumIter<I, C>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
  C: ChecksumCombine,
{
  ChecksumIter { inner: iter, _marker: core::marker::PhantomData }
}
