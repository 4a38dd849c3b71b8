//! Core store implementation: arena, initialization, accumulation access

use std::collections::HashMap;

use crate::element::Element;
use crate::error::{Error, Result};

use super::slot::CooSlot;

/// Parameter-keyed store of COO coefficient slots
///
/// `TensorStore` collects, per optimization-problem parameter, the sparse
/// coefficients contributed while a canonicalizer stuffs the problem into
/// solver matrices. Each parameter owns a fixed number of slots (one per
/// output decomposition), and each slot is an independent [`CooSlot`]
/// accumulating `(value, row, col)` triples in append order.
///
/// Parameter identities are opaque integers chosen by the canonicalizer.
/// Internally they are mapped to a dense arena index, so per-slot access
/// stays O(1) amortized regardless of how sparse the identity space is.
///
/// # Lifecycle
///
/// A parameter is registered exactly once with [`init_param`], populated
/// incrementally through [`append`] or [`slot_mut`] over one
/// canonicalization pass, and read out by the extraction methods. There is
/// no per-parameter removal; the store is dropped wholesale with the pass.
///
/// [`init_param`]: TensorStore::init_param
/// [`append`]: TensorStore::append
/// [`slot_mut`]: TensorStore::slot_mut
///
/// # Example
///
/// ```
/// use stuffr::prelude::*;
///
/// let mut store = TensorStore::<f64>::new();
/// store.init_param(5, 2)?;
/// store.append(5, 0, 1.0, 0, 0)?;
/// store.append(5, 0, 2.0, 1, 0)?;
///
/// assert_eq!(store.nnz(5, 0)?, 2);
/// assert_eq!(store.nnz(5, 1)?, 0);
/// # Ok::<(), stuffr::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TensorStore<T: Element> {
    /// Per-parameter slot vectors, dense in registration order
    arena: Vec<Vec<CooSlot<T>>>,
    /// Parameter identity to arena index
    index: HashMap<i64, usize>,
}

impl<T: Element> TensorStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a parameter and reserve its slots
    ///
    /// Allocates `param_size` empty slots for `param_id`, all initially
    /// holding zero entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateParam`] if `param_id` was already
    /// initialized (the store is left untouched), or
    /// [`Error::InvalidArgument`] if `param_size` is zero.
    pub fn init_param(&mut self, param_id: i64, param_size: usize) -> Result<()> {
        if param_size == 0 {
            return Err(Error::invalid_argument(
                "param_size",
                format!("parameter {} needs at least one slot", param_id),
            ));
        }
        if self.index.contains_key(&param_id) {
            return Err(Error::DuplicateParam { param_id });
        }

        self.arena
            .push((0..param_size).map(|_| CooSlot::new()).collect());
        self.index.insert(param_id, self.arena.len() - 1);
        Ok(())
    }

    /// Append one nonzero entry to a parameter's slot
    ///
    /// Stores `value` at position `(row, col)` of the COO block accumulated
    /// for `(param_id, vec_idx)`. Repeated coordinates are kept verbatim;
    /// resolving duplicates is the downstream consumer's job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized,
    /// or [`Error::SlotOutOfBounds`] if `vec_idx` is out of range.
    pub fn append(
        &mut self,
        param_id: i64,
        vec_idx: usize,
        value: T,
        row: i64,
        col: i64,
    ) -> Result<()> {
        self.slot_mut(param_id, vec_idx)?.push(value, row, col);
        Ok(())
    }

    /// Borrow a parameter's slot
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized,
    /// or [`Error::SlotOutOfBounds`] if `vec_idx` is out of range.
    pub fn slot(&self, param_id: i64, vec_idx: usize) -> Result<&CooSlot<T>> {
        let slots = self.param_slots(param_id)?;
        slots
            .get(vec_idx)
            .ok_or_else(|| Error::slot_out_of_bounds(vec_idx, slots.len()))
    }

    /// Mutably borrow a parameter's slot
    ///
    /// This is the accumulation interface handed to the canonicalizer when
    /// it wants to push many entries without re-resolving the parameter on
    /// every append.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized,
    /// or [`Error::SlotOutOfBounds`] if `vec_idx` is out of range.
    pub fn slot_mut(&mut self, param_id: i64, vec_idx: usize) -> Result<&mut CooSlot<T>> {
        let arena_idx = self.arena_index(param_id)?;
        let slots = &mut self.arena[arena_idx];
        let param_size = slots.len();
        slots
            .get_mut(vec_idx)
            .ok_or_else(|| Error::slot_out_of_bounds(vec_idx, param_size))
    }

    /// Returns the number of nonzeros stored for one slot
    ///
    /// Callers size extraction buffers from this before invoking the
    /// extraction methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized,
    /// or [`Error::SlotOutOfBounds`] if `vec_idx` is out of range.
    pub fn nnz(&self, param_id: i64, vec_idx: usize) -> Result<usize> {
        Ok(self.slot(param_id, vec_idx)?.len())
    }

    /// Returns the total number of nonzeros stored for one parameter
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized.
    pub fn param_nnz(&self, param_id: i64) -> Result<usize> {
        Ok(self.param_slots(param_id)?.iter().map(CooSlot::len).sum())
    }

    /// Returns the total number of nonzeros across all parameters
    pub fn total_nnz(&self) -> usize {
        self.arena
            .iter()
            .flat_map(|slots| slots.iter())
            .map(CooSlot::len)
            .sum()
    }

    /// Returns the slot count declared for a parameter at initialization
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] if `param_id` was never initialized.
    pub fn param_size(&self, param_id: i64) -> Result<usize> {
        Ok(self.param_slots(param_id)?.len())
    }

    /// Returns true if the parameter has been initialized
    #[inline]
    pub fn contains_param(&self, param_id: i64) -> bool {
        self.index.contains_key(&param_id)
    }

    /// Returns the number of initialized parameters
    #[inline]
    pub fn num_params(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if no parameter has been initialized
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterate over the initialized parameter identities
    ///
    /// Order is unspecified.
    pub fn param_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.index.keys().copied()
    }

    /// Returns the memory usage of all stored entries in bytes (approximate)
    pub fn memory_usage(&self) -> usize {
        self.arena
            .iter()
            .flat_map(|slots| slots.iter())
            .map(CooSlot::memory_usage)
            .sum()
    }

    fn arena_index(&self, param_id: i64) -> Result<usize> {
        self.index
            .get(&param_id)
            .copied()
            .ok_or(Error::UnknownParam { param_id })
    }

    pub(super) fn param_slots(&self, param_id: i64) -> Result<&[CooSlot<T>]> {
        let arena_idx = self.arena_index(param_id)?;
        Ok(&self.arena[arena_idx])
    }
}

impl<T: Element> Default for TensorStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
