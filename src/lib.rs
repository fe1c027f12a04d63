/* fft-tables | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Offline generation of radix-2 FFT lookup tables */

/******************************************************************************/

#![doc = include_str!("../README.md")]

/******************************************************************************/

mod bitrev;
mod config;
mod emit;
mod error;
mod size;
mod twiddle;

pub use bitrev::{reverse_bits, BitReversalSet, BitReversalTable, Convention};
pub use config::GenConfig;
pub use emit::{Emitter, IndexType, JsonEmitter, Precision, RustEmitter};
pub use error::{Error, Result, SizeReason};
pub use size::{SizeClassSet, TransformSize};
pub use twiddle::{TwiddleSet, TwiddleTable};

use serde::Serialize;
use tracing::info;

/******************************************************************************/

/// Every table generated for one maximum transform size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSet {
    pub max_size: TransformSize,
    pub convention: Convention,
    /// Sine tables from `max_size` down to 4
    pub twiddle: TwiddleSet,
    /// Bit reversal tables from 1 up to `max_size`, unless disabled
    pub bitrev: Option<BitReversalSet>,
}

/// Generates all tables for a configuration
///
/// The maximum size is validated before anything is computed, so an error never comes with a
/// partial table set.
///
/// Example:
/// ```
/// let tables = fft_tables::generate(&fft_tables::GenConfig::new(8)).unwrap();
///
/// assert_eq!(tables.twiddle.len(), 2);
/// assert_eq!(tables.bitrev.unwrap().get(3).unwrap().entries(), &[0, 4, 2, 6, 4, 5, 6, 7]);
/// assert!(fft_tables::generate(&fft_tables::GenConfig::new(6)).is_err());
/// ```
pub fn generate(config: &GenConfig) -> Result<TableSet> {
    let max_size = TransformSize::at_least(config.max_size, TwiddleTable::MIN_SIZE)?;

    let twiddle = TwiddleSet::generate(max_size)?;
    let bitrev = config
        .bitrev
        .then(|| BitReversalSet::generate(max_size, config.convention));

    info!(
        max_size = max_size.get(),
        twiddle_tables = twiddle.len(),
        bitrev_tables = bitrev.as_ref().map_or(0, BitReversalSet::len),
        "tables generated"
    );

    Ok(TableSet {
        max_size,
        convention: config.convention,
        twiddle,
        bitrev,
    })
}

/******************************************************************************/
