use super::*;
use crate::triangular::MISSING;

fn names(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_from_packed_applies_both_thresholds() {
    let r = [0.9, 0.3, -0.8, 0.6, 0.2, 0.95];
    let p = [0.001, 0.01, 0.002, 0.2, 0.5, 0.0001];
    let filter = EdgeFilter::new().with_max_pvalue(0.05).with_min_abs_correlation(0.5);
    let edges = EdgeList::from_packed(&r, &p, names(&["a", "b", "c", "d"]), &filter)
        .expect("consistent sizes");

    let pairs: Vec<(NodeId, NodeId)> = edges.edges().iter().map(|e| (e.source, e.target)).collect();
    // (0,1) kept, (0,2) |r| too small, (0,3) kept, (1,2) p too large,
    // (1,3) both fail, (2,3) kept.
    assert_eq!(pairs, vec![(0, 1), (0, 3), (2, 3)]);
    assert_eq!(edges.edges()[1].weight, -0.8);
    assert_eq!(edges.edges()[1].pvalue, 0.002);
}

#[test]
fn test_from_packed_thresholds_are_inclusive() {
    let filter = EdgeFilter::new().with_max_pvalue(0.05).with_min_abs_correlation(0.5);
    let edges = EdgeList::from_packed(&[0.5], &[0.05], names(&["x", "y"]), &filter)
        .expect("consistent sizes");
    assert_eq!(edges.len(), 1);
}

#[test]
fn test_from_packed_skips_missing() {
    let edges = EdgeList::from_packed(
        &[MISSING, 0.9, 0.9],
        &[0.0, MISSING, 0.0],
        names(&["a", "b", "c"]),
        &EdgeFilter::default(),
    )
    .expect("consistent sizes");
    assert_eq!(edges.len(), 1);
    assert_eq!((edges.edges()[0].source, edges.edges()[0].target), (1, 2));
}

#[test]
fn test_from_packed_length_mismatch() {
    let result = EdgeList::from_packed(&[0.1, 0.2], &[0.1, 0.2, 0.3], names(&["a", "b", "c"]), &EdgeFilter::default());
    assert!(matches!(result, Err(CorrError::DimensionMismatch { .. })));

    let result = EdgeList::from_packed(&[0.1, 0.2, 0.3], &[0.1], names(&["a", "b", "c"]), &EdgeFilter::default());
    assert!(matches!(result, Err(CorrError::DimensionMismatch { .. })));
}

#[test]
fn test_from_packed_requires_nodes() {
    let result = EdgeList::from_packed(&[], &[], Vec::new(), &EdgeFilter::default());
    assert!(matches!(result, Err(CorrError::InvalidDimension { .. })));
}

#[test]
fn test_from_packed_rejects_invalid_filter() {
    let filter = EdgeFilter::new().with_max_pvalue(1.5);
    let result = EdgeList::from_packed(&[0.5], &[0.01], names(&["x", "y"]), &filter);
    assert!(matches!(result, Err(CorrError::InvalidConfig { .. })));
}

#[test]
fn test_restrict_to_keeps_touching_edges() {
    let edges = EdgeList::from_packed(
        &[0.9, 0.9, 0.9],
        &[0.0, 0.0, 0.0],
        names(&["a", "b", "c"]),
        &EdgeFilter::default(),
    )
    .expect("consistent sizes");

    let only_a = edges.restrict_to(&["a"]);
    assert_eq!(only_a.len(), 2);
    assert!(only_a.edges().iter().all(|e| e.source == 0));

    let none = edges.restrict_to(&["zzz"]);
    assert!(none.is_empty());
    assert_eq!(none.names(), edges.names());
}

#[test]
fn test_entries_format() {
    let edges = EdgeList::from_packed(&[0.25], &[0.01], names(&["g1", "g2"]), &EdgeFilter::default())
        .expect("consistent sizes");
    assert_eq!(edges.entries(), vec!["g1,g2,0.25".to_string()]);
    assert_eq!(edges.name(1), "g2");
}

#[test]
fn test_entries_sorted_lexicographically() {
    // Packing order is (0,1), (0,2), (1,2); names make that order unsorted.
    let edges = EdgeList::from_packed(
        &[0.5, 0.6, 0.7],
        &[0.0, 0.0, 0.0],
        names(&["m", "z", "a"]),
        &EdgeFilter::default(),
    )
    .expect("consistent sizes");
    assert_eq!(edges.entries(), vec!["m,a,0.6", "m,z,0.5", "z,a,0.7"]);
    // Edge order itself is unchanged.
    assert_eq!((edges.edges()[0].source, edges.edges()[0].target), (0, 1));
}

#[test]
fn test_rank_by_strength() {
    assert_eq!(rank_by_strength(&[2.0, 3.0, 5.0]), vec![2, 1, 0]);
    assert_eq!(rank_by_strength(&[1.0, 1.0, 1.0]), vec![0, 1, 2]);
    assert_eq!(rank_by_strength(&[MISSING, 0.5, 2.0]), vec![2, 1, 0]);
    assert!(rank_by_strength(&[]).is_empty());
}

// =========================================================================
// EdgeFilter
// =========================================================================

#[test]
fn test_filter_defaults() {
    let f = EdgeFilter::default();
    assert!((f.max_pvalue - 0.05).abs() < f64::EPSILON);
    assert!(f.min_abs_correlation.abs() < f64::EPSILON);
    assert!(f.validate().is_ok());
}

#[test]
fn test_filter_validate_ranges() {
    assert!(EdgeFilter::new().with_max_pvalue(-0.1).validate().is_err());
    assert!(EdgeFilter::new().with_min_abs_correlation(1.1).validate().is_err());
    assert!(EdgeFilter::new().with_max_pvalue(f64::NAN).validate().is_err());
}

#[test]
fn test_filter_rejects_missing() {
    let f = EdgeFilter::default();
    assert!(!f.accepts(MISSING, 0.0));
    assert!(!f.accepts(0.9, MISSING));
}

#[test]
fn test_filter_deserializes_with_defaults() {
    let f: EdgeFilter = serde_json::from_str(r#"{"min_abs_correlation": 0.7}"#).expect("valid json");
    assert!((f.min_abs_correlation - 0.7).abs() < f64::EPSILON);
    assert!((f.max_pvalue - 0.05).abs() < f64::EPSILON);
}

#[test]
fn test_filter_serde_roundtrip() {
    let f = EdgeFilter::new().with_max_pvalue(0.001).with_min_abs_correlation(0.4);
    let json = serde_json::to_string(&f).expect("serialize");
    let back: EdgeFilter = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, f);
}
