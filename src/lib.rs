//! corrnet: correlation significance and packed triangular matrices.
//!
//! corrnet provides the numerical core for building correlation networks:
//! two-sided p-values for Pearson coefficients, and compact storage for
//! the symmetric matrices those coefficients live in.
//!
//! # Quick Start
//!
//! ```
//! use corrnet::prelude::*;
//!
//! // Three variables, five samples.
//! let data = Matrix::from_vec(5, 3, vec![
//!     1.0, 2.0, 9.0,
//!     2.0, 4.1, 7.0,
//!     3.0, 5.9, 8.0,
//!     4.0, 8.2, 6.0,
//!     5.0, 9.9, 7.5,
//! ]).unwrap();
//!
//! let r = pearson_packed(&data).unwrap();
//! let p = correlation_pvalues_vec(&r, 5 - 2).unwrap();
//!
//! let names = vec!["x".to_string(), "y".to_string(), "z".to_string()];
//! let edges = EdgeList::from_packed(&r, &p, names, &EdgeFilter::default()).unwrap();
//! assert_eq!(edges.entries().len(), 1);
//!
//! let strength = sum_triangle_columns_abs_vec(&r, 3).unwrap();
//! assert_eq!(rank_by_strength(&strength)[0], 1);
//! ```
//!
//! # Modules
//!
//! - [`stats`]: log-gamma, incomplete beta, correlation p-values
//! - [`triangular`]: packing, unpacking, sub-triangle remapping, column sums
//! - [`graph`]: edge selection and node ranking
//! - [`primitives`]: row-major `Matrix`
//! - [`error`]: the crate error type
//!
//! # Buffers
//!
//! Entry points ending in `_into` fill caller-owned slices and validate
//! every length before writing; on `Err` the output is untouched. The
//! `_vec` forms allocate their result.
//!
//! # Logging
//!
//! Entry points emit [`tracing`] events (`debug` on success paths, `warn`
//! on rejected input). No subscriber is installed by the library.

pub mod error;
pub mod graph;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod triangular;
