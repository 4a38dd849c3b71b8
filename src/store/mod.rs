//! Parameter-keyed sparse COO accumulation
//!
//! This module implements the store a canonicalizer writes into while
//! stuffing a parametric optimization problem into solver matrices, and a
//! binding layer reads back out of afterwards.
//!
//! # Layout
//!
//! Coefficients are partitioned twice:
//!
//! - **By parameter**: each problem parameter's contribution is tracked
//!   separately, so a solve with new parameter values only recomputes the
//!   blocks that changed.
//!
//! - **By slot**: within one parameter, coefficients split into independent
//!   per-output lists (one slot per output row group).
//!
//! Each `(parameter, slot)` pair owns a [`CooSlot`]: three parallel
//! sequences holding values, row indices, and column indices in append
//! order. The columnar layout keeps accumulation a triple push and
//! flattening a memcpy per axis.
//!
//! # Usage
//!
//! ```
//! use stuffr::prelude::*;
//!
//! let mut store = TensorStore::<f64>::new();
//!
//! // Producer side: register the parameter, then accumulate.
//! store.init_param(5, 2)?;
//! store.append(5, 0, 1.0, 0, 0)?;
//! store.append(5, 0, 2.0, 1, 0)?;
//!
//! // Consumer side: size buffers exactly, then flatten each axis.
//! let n = store.nnz(5, 0)?;
//! let mut values = vec![0.0f64; n];
//! let mut rows = vec![0i64; n];
//! let mut cols = vec![0i64; n];
//! store.extract_values(5, 0, &mut values)?;
//! store.extract_rows(5, 0, &mut rows)?;
//! store.extract_cols(5, 0, &mut cols)?;
//!
//! assert_eq!(values, vec![1.0, 2.0]);
//! # Ok::<(), stuffr::error::Error>(())
//! ```

mod core;
mod extract;
mod slot;

pub use self::core::TensorStore;
pub use slot::CooSlot;
