//! # stuffr
//!
//! **Parameter-keyed sparse coefficient accumulation for matrix stuffing.**
//!
//! When a modeling layer canonicalizes a parametric optimization problem,
//! it walks the problem structure and emits a stream of COO (coordinate
//! format) coefficients destined for the solver's constraint matrices.
//! stuffr is the store that collects those streams: one COO block per
//! `(parameter, slot)` pair, initialized exactly once, accumulated
//! incrementally, and flattened into contiguous caller-owned buffers at the
//! end of the pass.
//!
//! ## Why stuffr?
//!
//! - **Parameter-partitioned**: each parameter's contribution stays
//!   separate, so re-solving with new parameter values touches only the
//!   affected blocks
//! - **Columnar COO**: values, row indices, and column indices live in
//!   parallel contiguous sequences, making extraction a memcpy per axis
//! - **Loud contracts**: duplicate initialization, unknown parameters,
//!   out-of-range slots, and mis-sized buffers all surface as errors
//!   instead of corrupting an in-progress accumulation
//!
//! ## Quick Start
//!
//! ```rust
//! use stuffr::prelude::*;
//!
//! let mut store = TensorStore::<f64>::new();
//! store.init_param(5, 2)?;
//! store.append(5, 0, 1.0, 0, 0)?;
//! store.append(5, 0, 2.0, 1, 0)?;
//!
//! let n = store.nnz(5, 0)?;
//! let mut values = vec![0.0f64; n];
//! store.extract_values(5, 0, &mut values)?;
//! assert_eq!(values, vec![1.0, 2.0]);
//! # Ok::<(), stuffr::error::Error>(())
//! ```
//!
//! The store is synchronous and single-threaded by design: accumulation
//! happens through `&mut self` over one canonicalization pass, and the
//! whole store is discarded once extraction is done.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::store::{CooSlot, TensorStore};
}
