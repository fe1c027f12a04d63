/* fft-tables | config.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use crate::bitrev::Convention;

/******************************************************************************/

/// Generation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Largest supported transform size, a power of two of at least 4
    pub max_size: usize,
    /// Whether the bit reversal tables are generated at all
    pub bitrev: bool,
    pub convention: Convention,
}

impl GenConfig {
    pub fn new(max_size: usize) -> Self {
        Self { max_size, ..Self::default() }
    }

    pub fn without_bitrev(mut self) -> Self {
        self.bitrev = false;
        self
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_size: 16384,
            bitrev: true,
            convention: Convention::SwapPairs,
        }
    }
}
