//! Algorithm strategy tags.
//!
//! The algorithm family is closed: [`SliceBy<N>`] selects the width of the
//! table-driven inner loop, and [`Parallel<A>`] wraps one serial algorithm
//! with the multi-threaded chunk driver. [`Serial`] is implemented only for
//! `SliceBy`, so `Parallel<Parallel<_>>` does not type-check.

use crate::kernel;

mod sealed {
  pub trait Sealed {}
}

/// A checksum processing strategy.
///
/// This trait is sealed; the only implementors are [`SliceBy`] and
/// [`Parallel`].
pub trait Algorithm: sealed::Sealed + Copy + Default {
  /// Run the strategy over `data`, starting from `reg`.
  ///
  /// Register-space plumbing between the state type and the kernels; not
  /// part of the supported API surface.
  #[doc(hidden)]
  fn update_register<const WIDTH: u32, const POLY: u64, const REFLECT: bool>(self, reg: u64, data: &[u8])
  -> u64;
}

/// Algorithms that may run inside [`Parallel`].
pub trait Serial: Algorithm {}

/// Table-driven slice-by-N processing, N bytes per inner-loop iteration.
///
/// `N` must be at least 1. Larger N trades table footprint (N × 2 KiB) for
/// fewer iterations; `SliceBy<8>` is the default and a good all-rounder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceBy<const N: usize>;

impl<const N: usize> sealed::Sealed for SliceBy<N> {}

impl<const N: usize> Algorithm for SliceBy<N> {
  #[inline]
  fn update_register<const WIDTH: u32, const POLY: u64, const REFLECT: bool>(
    self,
    reg: u64,
    data: &[u8],
  ) -> u64 {
    kernel::slice_update::<WIDTH, POLY, REFLECT, N>(reg, data)
  }
}

impl<const N: usize> Serial for SliceBy<N> {}

/// Multi-threaded driver around a serial algorithm.
///
/// Splits the input across the available hardware parallelism, runs `A` on
/// each chunk independently, and XOR-combines the zero-extended partial
/// registers. Produces bit-identical results to running `A` sequentially.
/// Falls back to sequential execution on single-threaded hosts, for small
/// inputs, and on `no_std` builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parallel<A = SliceBy<8>> {
  inner: core::marker::PhantomData<A>,
}

impl<A> Parallel<A> {
  /// Tag value for passing to `process_with` and friends.
  #[must_use]
  pub const fn new() -> Self {
    Self { inner: core::marker::PhantomData }
  }
}

impl<A: Serial> sealed::Sealed for Parallel<A> {}

impl<A: Serial> Algorithm for Parallel<A> {
  #[inline]
  fn update_register<const WIDTH: u32, const POLY: u64, const REFLECT: bool>(
    self,
    reg: u64,
    data: &[u8],
  ) -> u64 {
    #[cfg(feature = "std")]
    {
      crate::parallel::threaded_update::<WIDTH, POLY, REFLECT, A>(reg, data)
    }
    #[cfg(not(feature = "std"))]
    {
      A::default().update_register::<WIDTH, POLY, REFLECT>(reg, data)
    }
  }
}

/// The algorithm used when none is named: slice-by-8.
pub type DefaultAlgorithm = SliceBy<8>;

/// Value of [`DefaultAlgorithm`] for explicit passing.
pub const DEFAULT_ALGORITHM: DefaultAlgorithm = SliceBy;
