//! Generic parametrized CRC computation.
//!
//! Any CRC in the classic Rocksoft six-parameter model — width 1..=64,
//! generator polynomial, initial value, input/output reflection, final XOR —
//! becomes a zero-cost type here, with compile-time lookup tables, a
//! slice-by-N streaming kernel, O(log n) zero-byte extension and checksum
//! combination over GF(2)[x]/P, and a multi-threaded driver that splits
//! large buffers across cores.
//!
//! # Quick Start
//!
//! ```
//! use paracrc::Crc32c;
//!
//! // One-shot
//! assert_eq!(Crc32c::compute(b"123456789"), 0xE3069283);
//!
//! // Streaming: states are small Copy values, every operation is pure.
//! let mut state = Crc32c::new();
//! state = state.process(b"1234");
//! state = state.process(b"56789");
//! assert_eq!(state.finalize(), 0xE3069283);
//! ```
//!
//! # Custom parametrizations
//!
//! The predefined names in this crate are nothing but aliases; any
//! parametrization works the same way:
//!
//! ```
//! use paracrc::Crc;
//!
//! // CRC-16/MODBUS, spelled out.
//! type Modbus = Crc<16, 0x8005, 0xFFFF, true, true, 0x0000>;
//! assert_eq!(Modbus::compute(b"123456789"), 0x4B37);
//! ```
//!
//! Out-of-range parameters (width 0, polynomial bits above the width, …) are
//! compile errors, raised the first time the parametrization is used.
//!
//! # Algorithms
//!
//! Processing strategy is chosen by a tag: [`SliceBy<N>`] picks the width of
//! the table-driven inner loop (the default is `SliceBy<8>`), and
//! [`Parallel<A>`] fans a large buffer out across the available cores. Every
//! strategy returns bit-identical results.
//!
//! ```
//! use paracrc::{Crc64Xz, Parallel, SliceBy};
//!
//! let data = vec![0xA5u8; 1 << 20];
//! let serial = Crc64Xz::compute_with(SliceBy::<16>, &data);
//! let parallel = Crc64Xz::compute_with(Parallel::<SliceBy<16>>::new(), &data);
//! assert_eq!(serial, parallel);
//! ```
//!
//! # Combining partial checksums
//!
//! A checksum over a concatenation can be assembled from checksums over the
//! parts without touching the data again:
//!
//! ```
//! use paracrc::Crc32c;
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let (head, tail) = data.split_at(23);
//!
//! let a = Crc32c::new().process(head).process_zero_bytes(tail.len() as u64);
//! let b = Crc32c::zero().process(tail);
//! assert_eq!(a.combine(b).finalize(), Crc32c::compute(data));
//! ```
//!
//! The [`ChecksumCombine`] trait offers the same thing one level up, over
//! finalized checksums, and the [`parallel`] module builds chunk helpers on
//! top of it.
//!
//! # Validation
//!
//! A message whose trailing bytes carry its own checksum drives the register
//! onto a fixed residue, so verification needs no second pass:
//!
//! ```
//! use paracrc::Crc16Arc;
//!
//! assert!(Crc16Arc::validate(b"\x33\x22\x55\xAA\xBB\xCC\xDD\xEE\xFF\x98\xAE"));
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): enables the multi-threaded [`Parallel`] driver.
//!   Without it the driver degrades to its inner algorithm.
//! - `alloc`: reserved for allocation-dependent conveniences.
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod algorithm;
mod bits;
mod catalog;
mod gf2;
mod kernel;
mod params;
mod reference;
mod state;
mod tables;

pub mod parallel;

pub use algorithm::{Algorithm, DefaultAlgorithm, Parallel, Serial, SliceBy, DEFAULT_ALGORITHM};
pub use catalog::*;
pub use params::CrcParams;
pub use state::Crc;
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
