//! Correlation networks built from packed triangles.
//!
//! A correlation network has one node per variable and an edge wherever
//! a pair's correlation is both strong and significant. Edges are read
//! straight from packed correlation and p-value vectors, so the dense
//! matrices never need to be materialized.
//!
//! # Examples
//!
//! ```
//! use corrnet::graph::{EdgeFilter, EdgeList};
//!
//! let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! let r = [0.9, 0.1, -0.8];
//! let p = [0.001, 0.7, 0.004];
//!
//! let edges = EdgeList::from_packed(&r, &p, names, &EdgeFilter::default())
//!     .expect("consistent sizes");
//! assert_eq!(edges.len(), 2);
//! assert_eq!(edges.entries(), vec!["a,b,0.9", "b,c,-0.8"]);
//! ```

mod filter;

pub use filter::EdgeFilter;

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{CorrError, Result};
use crate::triangular::{is_missing, packed_len, TrianglePairs};

/// Graph node identifier (column index of the source matrix).
pub type NodeId = usize;

/// Undirected weighted edge, `source < target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Correlation coefficient
    pub weight: f64,
    /// Two-sided p-value of `weight`
    pub pvalue: f64,
}

/// Edges of a correlation network together with the node labels.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    names: Vec<String>,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Selects edges from packed correlation and p-value vectors.
    ///
    /// `names` labels the `n` nodes; `r` and `p` must both have length
    /// `n(n-1)/2`. Pairs with a missing `r` or `p` are skipped. Edges keep
    /// packing order.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `names` is empty.
    /// - `DimensionMismatch` if `r` or `p` has the wrong length.
    /// - `InvalidConfig` if `filter` fails validation.
    pub fn from_packed(
        r: &[f64],
        p: &[f64],
        names: Vec<String>,
        filter: &EdgeFilter,
    ) -> Result<Self> {
        let n = names.len();
        if n == 0 {
            return Err(CorrError::invalid_dimension("node count", n, ">0"));
        }
        let expected = packed_len(n);
        if r.len() != expected {
            warn!(n, expected, actual = r.len(), "edge list rejected: correlation length");
            return Err(CorrError::dimension_mismatch("correlation length", expected, r.len()));
        }
        if p.len() != expected {
            warn!(n, expected, actual = p.len(), "edge list rejected: pvalue length");
            return Err(CorrError::dimension_mismatch("pvalue length", expected, p.len()));
        }
        filter.validate()?;

        let edges: Vec<Edge> = TrianglePairs::new(n)
            .filter(|&(_, _, k)| !is_missing(r[k]) && !is_missing(p[k]))
            .filter(|&(_, _, k)| filter.accepts(r[k], p[k]))
            .map(|(i, j, k)| Edge {
                source: i,
                target: j,
                weight: r[k],
                pvalue: p[k],
            })
            .collect();

        debug!(
            nodes = n,
            pairs = expected,
            kept = edges.len(),
            max_pvalue = filter.max_pvalue,
            tau = filter.min_abs_correlation,
            "built edge list"
        );
        Ok(Self { names, edges })
    }

    /// Keeps only edges with at least one endpoint named in `nodes`.
    ///
    /// Unknown names are ignored.
    #[must_use]
    pub fn restrict_to(&self, nodes: &[&str]) -> Self {
        let wanted: HashSet<&str> = nodes.iter().copied().collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| {
                wanted.contains(self.names[e.source].as_str())
                    || wanted.contains(self.names[e.target].as_str())
            })
            .copied()
            .collect();
        Self {
            names: self.names.clone(),
            edges,
        }
    }

    /// One `"first,second,value"` line per edge, sorted lexicographically.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .edges
            .iter()
            .map(|e| {
                format!(
                    "{},{},{}",
                    self.names[e.source], self.names[e.target], e.weight
                )
            })
            .collect();
        lines.sort();
        lines
    }

    /// Name of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    /// All node labels, indexed by [`NodeId`].
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The selected edges in packing order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edge passed the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Orders nodes by descending strength (sum of absolute correlations, as
/// produced by [`crate::triangular::sum_triangle_columns_abs_vec`]).
///
/// Ties keep ascending node order; missing strengths sort last.
///
/// # Examples
///
/// ```
/// use corrnet::graph::rank_by_strength;
/// assert_eq!(rank_by_strength(&[2.0, 3.0, 5.0, 3.0]), vec![2, 1, 3, 0]);
/// ```
#[must_use]
pub fn rank_by_strength(strengths: &[f64]) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = (0..strengths.len()).collect();
    order.sort_by(|&a, &b| {
        let (sa, sb) = (strengths[a], strengths[b]);
        match (is_missing(sa), is_missing(sb)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => sb.total_cmp(&sa),
        }
    });
    order
}

#[cfg(test)]
mod tests;
