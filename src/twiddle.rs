/* fft-tables | twiddle.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Quarter-wave sine tables for radix-2 twiddle factors */

/******************************************************************************/

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result, SizeReason};
use crate::size::{SizeClassSet, TransformSize};

/******************************************************************************/

/// Quarter period of the sine of the twiddle factors for one transform size
///
/// Element `k - 1` holds `sin(-2 * pi * k / N)` for `k` in `1..N / 4`. The samples at `k = 0`
/// (zero) and `k = N / 4` (minus one) are implied and not stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwiddleTable {
    size: TransformSize,
    sine: Vec<f64>,
}

impl TwiddleTable {
    /// Smallest transform size that needs twiddle factors
    pub const MIN_SIZE: usize = 4;

    /// Computes the table for one transform size
    pub fn new(size: TransformSize) -> Result<Self> {
        let n = size.get();
        if n < Self::MIN_SIZE {
            return Err(Error::invalid_size(n, SizeReason::BelowMinimum(Self::MIN_SIZE)));
        }

        let mut sine = Vec::with_capacity(n / 4 - 1);
        let mut k = 1;
        while k < n / 4 {
            sine.push(f64::sin(-2.0 * core::f64::consts::PI * k as f64 / n as f64));
            k += 1;
        }
        Ok(Self { size, sine })
    }

    pub fn size(&self) -> TransformSize {
        self.size
    }

    /// Stored samples, in double precision
    pub fn sine(&self) -> &[f64] {
        &self.sine
    }

    /// Stored samples, rounded to single precision
    pub fn sine_f32(&self) -> Vec<f32> {
        self.sine.iter().map(|&x| x as f32).collect()
    }

    pub fn len(&self) -> usize {
        self.sine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sine.is_empty()
    }

    /// `sin(-2 * pi * j / N)` for `j` in `0..=N / 4`
    fn neg_sine(&self, j: usize) -> f64 {
        let quarter = self.size.get() / 4;
        if j == 0 {
            0.0
        } else if j == quarter {
            -1.0
        } else {
            self.sine[j - 1]
        }
    }

    /// Twiddle factor `e^(-2 * pi * i * k / N)` as a `(re, im)` pair, for `k` in `0..N / 2`
    ///
    /// Only the stored quarter period is read: the rest is recovered by reflection.
    pub fn twiddle(&self, k: usize) -> Option<(f64, f64)> {
        let quarter = self.size.get() / 4;
        if k <= quarter {
            // cos(x) = -sin(x - pi / 2)
            Some((-self.neg_sine(quarter - k), self.neg_sine(k)))
        } else if k < 2 * quarter {
            Some((self.neg_sine(k - quarter), self.neg_sine(2 * quarter - k)))
        } else {
            None
        }
    }

    /// All `N / 2` twiddle factors of the transform, in order
    pub fn twiddles(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.size.get() / 2).filter_map(|k| self.twiddle(k))
    }
}

/******************************************************************************/

/// One twiddle table per size, from the maximum size down to 4
///
/// A consumer only ever uses one of them: the one matching its configured size.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleSet {
    tables: BTreeMap<TransformSize, TwiddleTable>,
}

impl TwiddleSet {
    /// Generates every table of the chain starting at `max_size`
    ///
    /// Example:
    /// ```
    /// use fft_tables::{TransformSize, TwiddleSet};
    ///
    /// let set = TwiddleSet::generate(TransformSize::new(8).unwrap()).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.select(TransformSize::new(8).unwrap()).unwrap().len(), 1);
    /// ```
    pub fn generate(max_size: TransformSize) -> Result<Self> {
        if max_size.get() < TwiddleTable::MIN_SIZE {
            return Err(Error::invalid_size(
                max_size.get(),
                SizeReason::BelowMinimum(TwiddleTable::MIN_SIZE),
            ));
        }

        let floor = TransformSize::new(TwiddleTable::MIN_SIZE / 2)?;
        let chain = SizeClassSet::descending(max_size, floor)?;
        let mut tables = BTreeMap::new();
        for size in chain {
            let table = TwiddleTable::new(size)?;
            debug!(size = size.get(), samples = table.len(), "twiddle table generated");
            tables.insert(size, table);
        }
        Ok(Self { tables })
    }

    pub fn max_size(&self) -> Option<TransformSize> {
        self.tables.keys().next_back().copied()
    }

    pub fn get(&self, size: TransformSize) -> Option<&TwiddleTable> {
        self.tables.get(&size)
    }

    /// Picks the one table that is active for the configured transform size
    pub fn select(&self, active: TransformSize) -> Result<&TwiddleTable> {
        self.tables
            .get(&active)
            .ok_or_else(|| Error::invalid_size(active.get(), SizeReason::NotInChain))
    }

    /// Selector names, in the same order as [`TwiddleSet::iter()`]
    pub fn selectors(&self) -> Vec<String> {
        self.iter().map(|t| t.size().selector()).collect()
    }

    /// Tables from the largest size down to the smallest
    pub fn iter(&self) -> impl Iterator<Item = &TwiddleTable> + '_ {
        self.tables.values().rev()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Serialize for TwiddleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/******************************************************************************/
