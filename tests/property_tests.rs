//! Property-based tests using proptest.
//!
//! These tests verify invariants of the p-value chain and of packed
//! triangular addressing.

use corrnet::prelude::*;
use corrnet::triangular::{pair_at, pair_offset, TrianglePairs};
use proptest::prelude::*;

// Strategy for symmetric n x n matrices with a unit diagonal
fn symmetric_strategy() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (2usize..9).prop_flat_map(|n| {
        proptest::collection::vec(-1.0f64..1.0, packed_len(n)).prop_map(move |upper| {
            let mut m = vec![1.0; n * n];
            for (i, j, k) in TrianglePairs::new(n) {
                m[i * n + j] = upper[k];
                m[j * n + i] = upper[k];
            }
            (n, m)
        })
    })
}

// Strategy for a dimension and a shuffled subset of its one-based indices
fn subset_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (2usize..12).prop_flat_map(|n| {
        (Just(n), Just((1..=n).collect::<Vec<usize>>()).prop_shuffle(), 0..=n)
            .prop_map(|(n, all, take)| (n, all.into_iter().take(take).collect()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Incomplete beta properties

    #[test]
    fn incomplete_beta_endpoints(a in 0.1f64..50.0, b in 0.1f64..50.0) {
        prop_assert_eq!(incomplete_beta(a, b, 0.0), 0.0);
        prop_assert_eq!(incomplete_beta(a, b, 1.0), 1.0);
    }

    #[test]
    fn incomplete_beta_reflection(a in 0.1f64..50.0, b in 0.1f64..50.0, x in 0.001f64..0.999) {
        let sum = incomplete_beta(a, b, x) + incomplete_beta(b, a, 1.0 - x);
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
    }

    #[test]
    fn incomplete_beta_in_unit_interval(a in 0.1f64..50.0, b in 0.1f64..50.0, x in 0.0f64..=1.0) {
        let v = incomplete_beta(a, b, x);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "I = {}", v);
    }

    // P-value properties

    #[test]
    fn pvalue_of_zero_is_one(df in 1u32..500) {
        prop_assert!((correlation_pvalue(0.0, df) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pvalue_decreases_with_strength(df in 1u32..200, r in 0.0f64..0.95, step in 0.001f64..0.04) {
        let weaker = correlation_pvalue(r, df);
        let stronger = correlation_pvalue(r + step, df);
        prop_assert!(stronger <= weaker + 1e-9);
    }

    #[test]
    fn pvalues_leave_output_on_mismatch(r in proptest::collection::vec(-1.0f64..1.0, 1..20)) {
        let mut out = vec![-1.0; r.len() - 1];
        prop_assert!(correlation_pvalues_into(&r, 10, &mut out).is_err());
        prop_assert!(out.iter().all(|&v| v == -1.0));
    }

    // Triangular addressing properties

    #[test]
    fn pair_offset_roundtrip(n in 2usize..200, seed in any::<usize>()) {
        let k = seed % packed_len(n);
        let (i, j) = pair_at(k, n).expect("k in range");
        prop_assert_eq!(pair_offset(i, j, n), k);
    }

    #[test]
    fn column_sums_equal_dense_row_sums((n, m) in symmetric_strategy()) {
        let mut packed = vec![0.0; packed_len(n)];
        pack_triangle_into(&m, n, &mut packed).expect("valid sizes");
        let sums = sum_triangle_columns_abs_vec(&packed, n).expect("n > 0");
        for i in 0..n {
            let dense: f64 = (0..n).filter(|&j| j != i).map(|j| m[i * n + j].abs()).sum();
            prop_assert!((sums[i] - dense).abs() < 1e-12);
        }
    }

    #[test]
    fn unpack_inverts_pack((n, m) in symmetric_strategy()) {
        let mut packed = vec![0.0; packed_len(n)];
        pack_triangle_into(&m, n, &mut packed).expect("valid sizes");
        let back = unpack_triangle(&packed, n, 1.0).expect("valid packing");
        prop_assert_eq!(back.as_slice(), m.as_slice());
    }

    #[test]
    fn remap_addresses_packed_pairs((n, subset) in subset_strategy()) {
        let offsets = remap_triangle_indices_vec(&subset, n).expect("valid subset");
        prop_assert_eq!(offsets.len(), packed_len(subset.len()));

        let mut k = 0;
        for p in 0..subset.len() {
            for q in (p + 1)..subset.len() {
                let (a, b) = (subset[p] - 1, subset[q] - 1);
                let (lo, hi) = (a.min(b), a.max(b));
                prop_assert_eq!(offsets[k], pair_offset(lo, hi, n) + 1);
                k += 1;
            }
        }
    }

    #[test]
    fn remap_identity_enumerates(n in 1usize..40) {
        let subset: Vec<usize> = (1..=n).collect();
        let offsets = remap_triangle_indices_vec(&subset, n).expect("identity subset");
        let expected: Vec<usize> = (1..=packed_len(n)).collect();
        prop_assert_eq!(offsets, expected);
    }
}
