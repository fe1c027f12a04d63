/* fft-tables | size.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use core::fmt;

use serde::Serialize;

use crate::error::{Error, Result, SizeReason};

/******************************************************************************/

/// A transform size, always an exact power of two
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TransformSize(usize);

impl TransformSize {
    /// Base 2 logarithm of a size, rounded down
    const fn log2(n: usize) -> u32 {
        let mut x = n;
        let mut log2_n = 0;
        while x > 1 {
            x >>= 1;
            log2_n += 1;
        }
        log2_n
    }

    const fn is_pow2(n: usize) -> bool {
        let mut x = 1;
        let mut i = Self::log2(n);
        while i > 0 {
            x <<= 1;
            i -= 1;
        }
        n != 0 && x == n
    }

    /// Validates a transform size
    ///
    /// Example:
    /// ```
    /// use fft_tables::TransformSize;
    ///
    /// assert_eq!(TransformSize::new(64).unwrap().size_class(), 6);
    /// assert!(TransformSize::new(6).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        if !Self::is_pow2(n) {
            return Err(Error::invalid_size(n, SizeReason::NotPowerOfTwo));
        }
        Ok(Self(n))
    }

    /// Builds the size `2^k`, if it fits in a `usize`
    pub fn from_class(k: u32) -> Option<Self> {
        1usize.checked_shl(k).map(Self)
    }

    /// Validates a transform size and checks it against a lower bound
    pub fn at_least(n: usize, min: usize) -> Result<Self> {
        let size = Self::new(n)?;
        if n < min {
            return Err(Error::invalid_size(n, SizeReason::BelowMinimum(min)));
        }
        Ok(size)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// The exponent `k` such that `size = 2^k`
    pub const fn size_class(self) -> u32 {
        Self::log2(self.0)
    }

    /// Name of the configuration selector guarding tables of this size
    pub fn selector(self) -> String {
        format!("size-{}", self.0)
    }

    fn halved(self) -> Self {
        Self(self.0 >> 1)
    }
}

impl fmt::Display for TransformSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for TransformSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

/******************************************************************************/

/// A gap-free chain of transform sizes, each half or double of its neighbour
///
/// Built once from the maximum size and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeClassSet {
    sizes: Vec<TransformSize>,
}

impl SizeClassSet {
    /// `max, max / 2, ...` down to, but not including, `floor`
    ///
    /// The chain must hold at least one size, so `max` has to be above `floor`.
    pub fn descending(max: TransformSize, floor: TransformSize) -> Result<Self> {
        if max <= floor {
            return Err(Error::invalid_size(max.get(), SizeReason::BelowMinimum(floor.get() << 1)));
        }
        let mut sizes = Vec::with_capacity((max.size_class() - floor.size_class()) as usize);
        let mut n = max;
        while n > floor {
            sizes.push(n);
            n = n.halved();
        }
        Ok(Self { sizes })
    }

    /// `1, 2, 4, ...` up to and including `max`
    pub fn ascending(max: TransformSize) -> Self {
        let sizes = (0..=max.size_class())
            .map(|k| TransformSize(1 << k))
            .collect();
        Self { sizes }
    }

    pub fn iter(&self) -> impl Iterator<Item = TransformSize> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn contains(&self, size: TransformSize) -> bool {
        self.sizes.contains(&size)
    }
}

impl IntoIterator for SizeClassSet {
    type Item = TransformSize;
    type IntoIter = std::vec::IntoIter<TransformSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.into_iter()
    }
}

/******************************************************************************/
