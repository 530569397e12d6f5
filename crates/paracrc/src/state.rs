//! The parametrized CRC register type and its operations.

use core::fmt;

use traits::{Checksum, ChecksumCombine};

use crate::{
  algorithm::{Algorithm, DEFAULT_ALGORITHM},
  bits::{bit, bottom_mask, reflect},
  gf2::{effective_width, zero_extend},
  kernel,
  params::CrcParams,
};

/// A running CRC register for one Rocksoft parametrization.
///
/// The six parameters pin down the checksum family: width `WIDTH` in bits
/// (1..=64), generator polynomial `POLY`, initial value `INIT`, input and
/// output reflection `REFIN`/`REFOUT`, and final XOR `XOROUT`. `POLY`,
/// `INIT`, and `XOROUT` must fit in `WIDTH` bits; violations are compile
/// errors raised the first time the parametrization is instantiated.
///
/// Internally the register is stored in the orientation dictated by `REFIN`
/// (bit-reflected for reflected parametrizations, left-aligned to a byte
/// boundary for sub-byte widths), which is what lets a single branchless
/// table loop serve either bit order. Values are plain `u64`s for every
/// width; checksums occupy the low `WIDTH` bits.
///
/// States are small `Copy` values; every operation consumes its input and
/// returns a new state.
///
/// # Example
///
/// ```
/// use paracrc::Crc64Xz;
///
/// let mut state = Crc64Xz::new();
/// state = state.process(b"Some data");
/// state = state.process(b" processed in ");
/// state = state.process(b"parts");
///
/// assert_eq!(state.finalize(), Crc64Xz::compute(b"Some data processed in parts"));
/// ```
#[derive(Clone, Copy)]
pub struct Crc<
  const WIDTH: u32,
  const POLY: u64,
  const INIT: u64,
  const REFIN: bool,
  const REFOUT: bool,
  const XOROUT: u64,
> {
  reg: u64,
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  /// Compile-time parameter validation; referenced from the constructors so
  /// any use of an out-of-range parametrization fails to build.
  const PARAMS_OK: () = {
    assert!(WIDTH >= 1 && WIDTH <= 64, "CRC width must be in 1..=64");
    let mask = bottom_mask(WIDTH);
    assert!(POLY & !mask == 0, "polynomial has bits set above the CRC width");
    assert!(INIT & !mask == 0, "initial value has bits set above the CRC width");
    assert!(XOROUT & !mask == 0, "final XOR has bits set above the CRC width");
  };

  /// The Rocksoft parameter record for this type.
  pub const PARAMS: CrcParams = CrcParams {
    width: WIDTH as u8,
    polynomial: POLY,
    initial: INIT,
    reflect_in: REFIN,
    reflect_out: REFOUT,
    xor_out: XOROUT,
  };

  /// Register value every correctly self-checksummed message lands on:
  /// `XOROUT` pushed through `WIDTH` zero shift steps, then put in the same
  /// orientation as the initial register.
  const RESIDUE: u64 = {
    let mut residue = XOROUT;
    let mut i = 0;
    while i < WIDTH {
      residue = (residue << 1) ^ (if bit(residue, WIDTH - 1) { POLY } else { 0 });
      i += 1;
    }
    residue &= bottom_mask(WIDTH);
    if REFIN {
      reflect(residue, WIDTH)
    } else if WIDTH < 8 {
      residue << (8 - WIDTH)
    } else {
      residue
    }
  };

  /// State initialized with the parametrization's initial value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    let _check: () = Self::PARAMS_OK;
    let reg = if REFIN {
      reflect(INIT, WIDTH)
    } else if WIDTH < 8 {
      INIT << (8 - WIDTH)
    } else {
      INIT
    };
    Self { reg }
  }

  /// All-zero state.
  ///
  /// This is the starting point for the non-leading chunks of a parallel
  /// split and for callers assembling checksums manually with
  /// [`combine`](Self::combine); it is *not* the regular initial state
  /// unless `INIT` is zero.
  #[inline]
  #[must_use]
  pub const fn zero() -> Self {
    let _check: () = Self::PARAMS_OK;
    Self { reg: 0 }
  }

  const fn from_register(reg: u64) -> Self {
    Self { reg }
  }

  /// Process `data` with the default algorithm (slice-by-8).
  #[inline]
  #[must_use]
  pub fn process(self, data: &[u8]) -> Self {
    self.process_with(DEFAULT_ALGORITHM, data)
  }

  /// Process `data` with an explicit algorithm.
  #[inline]
  #[must_use]
  pub fn process_with<A: Algorithm>(self, algo: A, data: &[u8]) -> Self {
    Self::from_register(algo.update_register::<WIDTH, POLY, REFIN>(self.reg, data))
  }

  /// Process bytes from a single-pass source.
  ///
  /// Non-random-access input cannot be sliced, so this folds byte by byte;
  /// results are identical to [`process`](Self::process) on the same bytes.
  #[inline]
  #[must_use]
  pub fn process_iter<I>(self, bytes: I) -> Self
  where
    I: IntoIterator<Item = u8>,
  {
    Self::from_register(kernel::bytewise_update::<WIDTH, POLY, REFIN, I>(self.reg, bytes))
  }

  /// Advance the state as if `n` zero bytes had been processed, in O(log n).
  #[inline]
  #[must_use]
  pub fn process_zero_bytes(self, n: u64) -> Self {
    Self::from_register(zero_extend::<WIDTH, POLY, REFIN>(self.reg, n))
  }

  /// Combine with a partial checksum computed over the following span.
  ///
  /// `other` must have been produced from a [`zero`](Self::zero) state, and
  /// `self` must already have been shifted past `other`'s span with
  /// [`process_zero_bytes`](Self::process_zero_bytes); then the spans'
  /// polynomial weights line up and the combination is a register XOR. The
  /// parallel driver is the canonical client.
  #[inline]
  #[must_use]
  pub const fn combine(self, other: Self) -> Self {
    Self::from_register(self.reg ^ other.reg)
  }

  /// Extract the checksum: orientation fix-up, mask, output reflection, and
  /// the final XOR.
  #[inline]
  #[must_use]
  pub const fn finalize(self) -> u64 {
    let mut crc = self.reg;
    if !REFIN && WIDTH < 8 {
      crc >>= 8 - WIDTH;
    }
    crc &= bottom_mask(WIDTH);
    if REFIN != REFOUT {
      crc = reflect(crc, WIDTH);
    }
    crc ^ XOROUT
  }

  /// Whether the processed message carried its own trailing checksum.
  ///
  /// Checks the register against the parametrization's residue directly, so
  /// no finalization round-trip is needed.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.reg & bottom_mask(effective_width(WIDTH)) == Self::RESIDUE
  }

  /// One-shot checksum with the default algorithm.
  #[inline]
  #[must_use]
  pub fn compute(data: &[u8]) -> u64 {
    Self::new().process(data).finalize()
  }

  /// One-shot checksum with an explicit algorithm.
  #[inline]
  #[must_use]
  pub fn compute_with<A: Algorithm>(algo: A, data: &[u8]) -> u64 {
    Self::new().process_with(algo, data).finalize()
  }

  /// One-shot validation of a message with its checksum appended.
  #[inline]
  #[must_use]
  pub fn validate(data: &[u8]) -> bool {
    Self::new().process(data).is_valid()
  }

  /// One-shot validation with an explicit algorithm.
  #[inline]
  #[must_use]
  pub fn validate_with<A: Algorithm>(algo: A, data: &[u8]) -> bool {
    Self::new().process_with(algo, data).is_valid()
  }

  /// Invert [`finalize`](Self::finalize): reconstruct the register a
  /// finalized checksum came from.
  const fn unfinalize(checksum: u64) -> Self {
    let mut reg = (checksum ^ XOROUT) & bottom_mask(WIDTH);
    if REFIN != REFOUT {
      reg = reflect(reg, WIDTH);
    }
    if !REFIN && WIDTH < 8 {
      reg <<= 8 - WIDTH;
    }
    Self { reg }
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Default for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Equality over the significant register bits only; garbage above the
/// effective width never influences the checksum and is ignored here too.
impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  PartialEq for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    let mask = bottom_mask(effective_width(WIDTH));
    self.reg & mask == other.reg & mask
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Eq for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  fmt::Debug for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("width", &WIDTH)
      .field("register", &format_args!("{:#x}", self.reg & bottom_mask(effective_width(WIDTH))))
      .finish()
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Checksum for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  const WIDTH_BITS: u32 = WIDTH;
  type Output = u64;
  const EMPTY: u64 = Self::new().finalize();

  #[inline]
  fn new() -> Self {
    Crc::new()
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Self::unfinalize(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    *self = self.process(data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc::finalize(*self)
  }

  #[inline]
  fn reset(&mut self) {
    *self = Crc::new();
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  ChecksumCombine for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    if len_b == 0 {
      return crc_a;
    }
    // `crc_b` was computed from the initial state; XORing out the initial
    // value's image under len_b bytes leaves B's pure linear part, which is
    // exactly what a zero-started register would hold.
    let a = Self::unfinalize(crc_a).process_zero_bytes(len_b as u64);
    let b_linear = Self::unfinalize(crc_b).reg ^ Self::new().process_zero_bytes(len_b as u64).reg;
    a.combine(Self::from_register(b_linear)).finalize()
  }
}
