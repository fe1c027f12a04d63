/* fft-tables | bitrev.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Bit reversal permutation tables */

/******************************************************************************/

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::size::{SizeClassSet, TransformSize};

/******************************************************************************/

/// Reverse the low `bits` bits of an integer, higher bits are dropped
///
/// Example: `reverse_bits(0b110, 3) == 0b011`.
///
/// # Panics
///
/// Panics if `bits` is wider than a `usize`.
pub const fn reverse_bits(x: usize, bits: u32) -> usize {
    assert!(bits <= usize::BITS, "cannot reverse more bits than a usize holds");
    let mut i = 0;
    let mut ret = 0;
    while i < bits {
        ret |= ((x >> i) & 1) << ((bits - 1) - i);
        i += 1;
    }
    ret
}

/// What a table stores at each index
///
/// Either way, slot `i` has to be swapped with `reverse_bits(i)` exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// `max(i, reverse_bits(i))`: an entry differing from its index is the swap partner,
    /// every other entry is a no-op
    #[default]
    SwapPairs,
    /// `reverse_bits(i)` everywhere: the consumer swaps only when the entry is greater
    Full,
}

/******************************************************************************/

/// Bit reversal table for one transform size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitReversalTable {
    size: TransformSize,
    convention: Convention,
    entries: Vec<usize>,
}

impl BitReversalTable {
    pub fn new(size: TransformSize, convention: Convention) -> Self {
        let bits = size.size_class();
        let entries = (0..size.get())
            .map(|i| {
                let rev = reverse_bits(i, bits);
                match convention {
                    Convention::SwapPairs => rev.max(i),
                    Convention::Full => rev,
                }
            })
            .collect();
        Self { size, convention, entries }
    }

    pub fn size(&self) -> TransformSize {
        self.size
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Largest stored index
    pub fn max_entry(&self) -> usize {
        self.entries.iter().copied().max().unwrap_or(0)
    }

    /// Reorders `data` in place, undoing a bit reversed ordering (or applying one)
    ///
    /// # Panics
    ///
    /// Panics if `data` is not exactly as long as the table.
    pub fn permute<T>(&self, data: &mut [T]) {
        assert_eq!(data.len(), self.entries.len(), "data length must match the table size");
        for (i, &j) in self.entries.iter().enumerate() {
            if j > i {
                data.swap(i, j);
            }
        }
    }
}

/******************************************************************************/

/// Bit reversal tables for sizes `1, 2, 4, ...` up to the maximum size
///
/// The table of size `2^k` sits at position `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReversalSet {
    tables: Vec<BitReversalTable>,
}

impl BitReversalSet {
    /// Generates every table of the chain ending at `max_size`
    ///
    /// Example:
    /// ```
    /// use fft_tables::{BitReversalSet, Convention, TransformSize};
    ///
    /// let set = BitReversalSet::generate(TransformSize::new(8).unwrap(), Convention::SwapPairs);
    /// assert_eq!(set.get(3).unwrap().entries(), &[0, 4, 2, 6, 4, 5, 6, 7]);
    /// ```
    pub fn generate(max_size: TransformSize, convention: Convention) -> Self {
        let tables = SizeClassSet::ascending(max_size)
            .into_iter()
            .map(|size| {
                let table = BitReversalTable::new(size, convention);
                debug!(size = size.get(), "bit reversal table generated");
                table
            })
            .collect();
        Self { tables }
    }

    /// Same as [`BitReversalSet::generate()`], from an unchecked size
    pub fn try_generate(max_size: usize, convention: Convention) -> Result<Self> {
        Ok(Self::generate(TransformSize::new(max_size)?, convention))
    }

    /// Table for size `2^size_class`
    pub fn get(&self, size_class: u32) -> Option<&BitReversalTable> {
        self.tables.get(size_class as usize)
    }

    pub fn for_size(&self, size: TransformSize) -> Option<&BitReversalTable> {
        self.get(size.size_class())
    }

    pub fn max_size(&self) -> Option<TransformSize> {
        self.tables.last().map(BitReversalTable::size)
    }

    /// Tables in ascending size order
    pub fn iter(&self) -> impl Iterator<Item = &BitReversalTable> + '_ {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Serialize for BitReversalSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/******************************************************************************/
