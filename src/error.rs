//! Error types for stuffr

use thiserror::Error;

/// Result type alias using stuffr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stuffr operations
///
/// Every variant is a contract violation on the producer or consumer side
/// of the store, not a recoverable runtime condition. The store never
/// retries or silently corrects; callers are expected to treat these as
/// bugs in the canonicalization or marshalling code.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter was already initialized
    ///
    /// Initialization reserves storage exactly once per parameter; a second
    /// initialization mid-accumulation would corrupt entries already stored,
    /// so it is refused and the store is left untouched.
    #[error("Parameter {param_id} is already initialized")]
    DuplicateParam {
        /// The parameter identity that was initialized twice
        param_id: i64,
    },

    /// Parameter was never initialized
    ///
    /// Distinguishes "not found" from "found but empty": an append or
    /// extraction against an unknown parameter signals a producer walking
    /// the wrong parameter, not an empty coefficient block.
    #[error("Unknown parameter {param_id}")]
    UnknownParam {
        /// The parameter identity that was never initialized
        param_id: i64,
    },

    /// Slot index out of range for the parameter
    #[error("Slot {vec_idx} out of bounds for parameter with {param_size} slots")]
    SlotOutOfBounds {
        /// The invalid slot index
        vec_idx: usize,
        /// Number of slots reserved at initialization
        param_size: usize,
    },

    /// Extraction buffer length differs from the slot's entry count
    ///
    /// Buffers must be sized exactly: an undersized buffer would truncate,
    /// an oversized one would leave trailing garbage for the consumer to
    /// zip. Nothing is copied when this is returned.
    #[error("Buffer capacity mismatch: slot holds {expected} entries, buffer holds {got}")]
    CapacityMismatch {
        /// Entry count of the slot being extracted
        expected: usize,
        /// Length of the buffer supplied by the caller
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an unknown-parameter error
    pub fn unknown_param(param_id: i64) -> Self {
        Self::UnknownParam { param_id }
    }

    /// Create a slot-out-of-bounds error
    pub fn slot_out_of_bounds(vec_idx: usize, param_size: usize) -> Self {
        Self::SlotOutOfBounds {
            vec_idx,
            param_size,
        }
    }

    /// Create a capacity mismatch error
    pub fn capacity_mismatch(expected: usize, got: usize) -> Self {
        Self::CapacityMismatch { expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
