//! Fixed-size cell set packed into a single unsigned integer.
//!
//! An `N×N` grid is mapped onto the low `N * N` bits of `T`, row-major and
//! zero-based. The type is `Copy`, never allocates, and works under `no_std`.
//! It backs the wall set of the board, where every membership test is a
//! shift and a mask. Capacity is not checked here; `WallMap` asserts it at
//! compile time.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

/// Set of cells on an `N×N` board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn index(row: usize, col: usize) -> Option<usize> {
        (row < N && col < N).then(|| row * N + col)
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether `(row, col)` is in the set. Out-of-range cells are never
    /// members.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        Self::index(row, col).is_some_and(|idx| ((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Add `(row, col)`. Returns `false` if it was already present or lies
    /// off the board.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let Some(idx) = Self::index(row, col) else {
            return false;
        };
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    /// Iterate over member cells in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the member cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
