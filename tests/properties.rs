/* fft-tables | properties.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Property-based checks of the generated tables */

/******************************************************************************/

use approx::assert_abs_diff_eq;
use fft_tables::{
    generate, reverse_bits, BitReversalTable, Convention, Error, GenConfig, SizeClassSet,
    TransformSize, TwiddleTable,
};
use proptest::prelude::*;

/******************************************************************************/

fn size_class() -> impl Strategy<Value = u32> {
    0u32..=14
}

proptest! {
    #[test]
    fn prop_bitrev_entry_is_index_or_reversal(k in size_class()) {
        let size = TransformSize::from_class(k).unwrap();
        let table = BitReversalTable::new(size, Convention::SwapPairs);
        prop_assert_eq!(table.entries().len(), size.get());
        for (i, &entry) in table.entries().iter().enumerate() {
            let rev = reverse_bits(i, k);
            prop_assert!(entry == i || entry == rev);
            prop_assert_eq!(entry == rev && rev != i, rev > i);
            prop_assert_eq!(entry == i, rev <= i);
        }
    }

    #[test]
    fn prop_reverse_bits_is_an_involution(k in 1u32..=20, x in any::<usize>()) {
        let x = x & ((1 << k) - 1);
        prop_assert_eq!(reverse_bits(reverse_bits(x, k), k), x);
    }

    #[test]
    fn prop_permute_twice_is_identity(k in size_class(), full in any::<bool>()) {
        let convention = if full { Convention::Full } else { Convention::SwapPairs };
        let table = BitReversalTable::new(TransformSize::from_class(k).unwrap(), convention);
        let original: Vec<usize> = (0..1 << k).collect();
        let mut data = original.clone();
        table.permute(&mut data);
        table.permute(&mut data);
        prop_assert_eq!(data, original);
    }

    #[test]
    fn prop_twiddle_length_and_values(k in 2u32..=14) {
        let size = TransformSize::from_class(k).unwrap();
        let n = size.get();
        let table = TwiddleTable::new(size).unwrap();
        prop_assert_eq!(table.len(), n / 4 - 1);
        for (i, &x) in table.sine().iter().enumerate() {
            let expected = f64::sin(-2.0 * core::f64::consts::PI * (i + 1) as f64 / n as f64);
            prop_assert_eq!(x.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn prop_non_powers_of_two_are_rejected(n in 3usize..100_000) {
        prop_assume!(!n.is_power_of_two());
        let is_invalid_size = matches!(
            generate(&GenConfig::new(n)),
            Err(Error::InvalidSize { size, .. }) if size == n
        );
        prop_assert!(is_invalid_size);
    }
}

/******************************************************************************/

#[test]
fn test_chain_completeness() {
    for k in 2..=14 {
        let max = TransformSize::from_class(k).unwrap();
        let tables = generate(&GenConfig::new(max.get())).unwrap();

        let twiddle: Vec<usize> = tables.twiddle.iter().map(|t| t.size().get()).collect();
        let expected: Vec<usize> = (2..=k).rev().map(|c| 1 << c).collect();
        assert_eq!(twiddle, expected);

        let bitrev: Vec<usize> = tables.bitrev.unwrap().iter().map(|t| t.size().get()).collect();
        let expected: Vec<usize> =
            SizeClassSet::ascending(max).iter().map(TransformSize::get).collect();
        assert_eq!(bitrev, expected);
        assert_eq!(bitrev.len() as u32, k + 1);
    }
}

#[test]
fn test_twiddles_match_direct_computation() {
    let tables = generate(&GenConfig::new(4096)).unwrap();
    for table in tables.twiddle.iter() {
        let n = table.size().get();
        for (k, (re, im)) in table.twiddles().enumerate() {
            let theta = -2.0 * core::f64::consts::PI * k as f64 / n as f64;
            assert_abs_diff_eq!(re, theta.cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(im, theta.sin(), epsilon = 1e-12);
        }
    }
}
