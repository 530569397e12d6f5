//! Checksum traits for parametrized CRCs.
//!
//! The implementations behind these traits are generic over the full
//! Rocksoft parameter space, which shapes the contract in two ways that a
//! byte-oriented checksum interface would not need:
//!
//! - Widths are counted in **bits**, not bytes. A CRC-10 checksum occupies
//!   the low 10 bits of its output word and serializes into 2 bytes.
//! - Parametrizations with a nonzero initial value or final XOR are
//!   **affine**: the checksum of the empty message ([`Checksum::EMPTY`]) is
//!   not zero, and anything that composes checksums must cancel that offset.
//!
//! See the `paracrc` crate for the implementation.

use core::fmt::Debug;

/// Streaming and one-shot checksum computation.
///
/// # Usage Pattern
///
/// ```text
/// // One-shot (fastest)
/// let crc = Crc32c::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32c::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Significant bits
///
/// Only the low [`WIDTH_BITS`](Self::WIDTH_BITS) bits of
/// [`Output`](Self::Output) carry checksum information. Implementations
/// whose internal register is wider than that (a 10-bit CRC in a 64-bit
/// word, say) must ignore the excess in `finalize` and in any state
/// comparison: two hashers whose significant bits agree are the same
/// hasher, whatever junk sits above them.
pub trait Checksum: Clone + Default {
  /// Checksum width in bits.
  ///
  /// Any value in `1..=64`; not necessarily a multiple of 8.
  const WIDTH_BITS: u32;

  /// Serialized size in whole bytes: ⌈`WIDTH_BITS` / 8⌉.
  const OUTPUT_SIZE: usize = (Self::WIDTH_BITS as usize + 7) / 8;

  /// The checksum output type.
  ///
  /// The checksum occupies the low [`WIDTH_BITS`](Self::WIDTH_BITS) bits;
  /// higher bits are always zero.
  type Output: Copy + Eq + Debug + Default;

  /// The checksum of the empty message.
  ///
  /// Zero only for parametrizations whose initial value and final XOR are
  /// both zero. A nonzero `EMPTY` marks the checksum function as affine
  /// rather than linear, which is exactly the offset
  /// [`ChecksumCombine::combine`] has to cancel.
  const EMPTY: Self::Output;

  /// Create a new hasher with the default initial value.
  fn new() -> Self;

  /// Create a new hasher that resumes from a previously finalized checksum.
  ///
  /// Feeding it the rest of the data yields the same result as hashing
  /// everything in one go.
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  ///
  /// For large data or streaming, use [`new`](Self::new) +
  /// [`update`](Self::update).
  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    if data.is_empty() {
      return Self::EMPTY;
    }
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}

/// Checksums whose finalized values can be composed.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` in O(log len(B)) time, which is what makes parallel chunked
/// computation possible:
///
/// 1. Split data into chunks
/// 2. Compute checksums in parallel
/// 3. Combine results in order
///
/// # Required laws
///
/// For every message split `M = A || B`:
///
/// ```text
/// combine(checksum(A), checksum(B), B.len()) == checksum(M)
/// combine(c, EMPTY, 0) == c
/// ```
///
/// The second operand's checksum was produced from the regular initial
/// state, so for affine parametrizations ([`Checksum::EMPTY`] ≠ 0) the
/// implementation must strip the initial-value/final-XOR offset from `crc_b`
/// before the spans' polynomial weights are lined up, and restore it
/// afterwards. Callers never deal with the offset themselves.
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
