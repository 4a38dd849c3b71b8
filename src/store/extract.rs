//! Extraction: flattening a slot's sequences into caller-owned buffers

use crate::element::Element;
use crate::error::{Error, Result};

use super::core::TensorStore;

impl<T: Element> TensorStore<T> {
    /// Copy one slot's coefficient values into `buf`, preserving order
    ///
    /// `buf` must hold exactly [`nnz`]`(param_id, vec_idx)` elements; size
    /// it from that query before calling. The store never retains a
    /// reference to the buffer.
    ///
    /// The three extraction methods for the same `(param_id, vec_idx)` fill
    /// buffers that correspond positionally: element `k` of each together
    /// encodes the nonzero `(rows[k], cols[k]) → values[k]`.
    ///
    /// [`nnz`]: TensorStore::nnz
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] or [`Error::SlotOutOfBounds`] for a
    /// bad selection, and [`Error::CapacityMismatch`] if `buf.len()`
    /// differs from the slot's entry count. Nothing is written on error.
    pub fn extract_values(&self, param_id: i64, vec_idx: usize, buf: &mut [T]) -> Result<()> {
        let slot = self.slot(param_id, vec_idx)?;
        check_capacity(slot.len(), buf.len())?;
        buf.copy_from_slice(slot.values());
        Ok(())
    }

    /// Copy one slot's coefficient values into a double-precision buffer
    ///
    /// Widens each value through [`Element::to_f64`], so binding layers
    /// that marshal into a double-precision host array can use one buffer
    /// type regardless of the store's element type. Same selection and
    /// capacity contract as [`extract_values`](TensorStore::extract_values).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] or [`Error::SlotOutOfBounds`] for a
    /// bad selection, and [`Error::CapacityMismatch`] if `buf.len()`
    /// differs from the slot's entry count. Nothing is written on error.
    pub fn extract_values_f64(&self, param_id: i64, vec_idx: usize, buf: &mut [f64]) -> Result<()> {
        let slot = self.slot(param_id, vec_idx)?;
        check_capacity(slot.len(), buf.len())?;
        for (dst, &value) in buf.iter_mut().zip(slot.values()) {
            *dst = value.to_f64();
        }
        Ok(())
    }

    /// Copy one slot's row indices into `buf`, preserving order
    ///
    /// Same contract as [`extract_values`](TensorStore::extract_values).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] or [`Error::SlotOutOfBounds`] for a
    /// bad selection, and [`Error::CapacityMismatch`] if `buf.len()`
    /// differs from the slot's entry count. Nothing is written on error.
    pub fn extract_rows(&self, param_id: i64, vec_idx: usize, buf: &mut [i64]) -> Result<()> {
        let slot = self.slot(param_id, vec_idx)?;
        check_capacity(slot.len(), buf.len())?;
        buf.copy_from_slice(slot.rows());
        Ok(())
    }

    /// Copy one slot's column indices into `buf`, preserving order
    ///
    /// Same contract as [`extract_values`](TensorStore::extract_values).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParam`] or [`Error::SlotOutOfBounds`] for a
    /// bad selection, and [`Error::CapacityMismatch`] if `buf.len()`
    /// differs from the slot's entry count. Nothing is written on error.
    pub fn extract_cols(&self, param_id: i64, vec_idx: usize, buf: &mut [i64]) -> Result<()> {
        let slot = self.slot(param_id, vec_idx)?;
        check_capacity(slot.len(), buf.len())?;
        buf.copy_from_slice(slot.cols());
        Ok(())
    }
}

#[inline]
fn check_capacity(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::capacity_mismatch(expected, got));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TensorStore<f64> {
        let mut store = TensorStore::new();
        store.init_param(5, 2).unwrap();
        store.append(5, 0, 1.0, 0, 0).unwrap();
        store.append(5, 0, 2.0, 1, 0).unwrap();
        store
    }

    #[test]
    fn test_extract_round_trip() {
        let store = sample_store();

        let mut values = vec![0.0f64; 2];
        let mut rows = vec![0i64; 2];
        let mut cols = vec![0i64; 2];

        store.extract_values(5, 0, &mut values).unwrap();
        store.extract_rows(5, 0, &mut rows).unwrap();
        store.extract_cols(5, 0, &mut cols).unwrap();

        assert_eq!(values, vec![1.0, 2.0]);
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(cols, vec![0, 0]);
    }

    #[test]
    fn test_extract_undersized_buffer_rejected() {
        let store = sample_store();
        let mut buf = vec![0.0f64; 1];

        let result = store.extract_values(5, 0, &mut buf);
        assert!(matches!(
            result,
            Err(Error::CapacityMismatch {
                expected: 2,
                got: 1
            })
        ));
        // No partial copy.
        assert_eq!(buf, vec![0.0]);
    }

    #[test]
    fn test_extract_oversized_buffer_rejected() {
        let store = sample_store();
        let mut buf = vec![-1.0f64; 3];

        let result = store.extract_values(5, 0, &mut buf);
        assert!(matches!(
            result,
            Err(Error::CapacityMismatch {
                expected: 2,
                got: 3
            })
        ));
        assert_eq!(buf, vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_extract_empty_slot() {
        let store = sample_store();
        let mut values: Vec<f64> = Vec::new();
        let mut rows: Vec<i64> = Vec::new();

        // Slot 1 was initialized but never appended to: extraction with a
        // zero-length buffer succeeds and is a no-op.
        store.extract_values(5, 1, &mut values).unwrap();
        store.extract_rows(5, 1, &mut rows).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_extract_unknown_param() {
        let store = sample_store();
        let mut buf = vec![0.0f64; 2];

        let result = store.extract_values(6, 0, &mut buf);
        assert!(matches!(result, Err(Error::UnknownParam { param_id: 6 })));
    }

    #[test]
    fn test_extract_slot_out_of_bounds() {
        let store = sample_store();
        let mut buf = vec![0i64; 2];

        let result = store.extract_rows(5, 2, &mut buf);
        assert!(matches!(result, Err(Error::SlotOutOfBounds { .. })));
    }

    #[test]
    fn test_extract_values_f64_widens() {
        let mut store = TensorStore::<f32>::new();
        store.init_param(0, 1).unwrap();
        store.append(0, 0, 0.5f32, 0, 0).unwrap();
        store.append(0, 0, 1.5f32, 1, 1).unwrap();

        let mut buf = vec![0.0f64; 2];
        store.extract_values_f64(0, 0, &mut buf).unwrap();
        assert_eq!(buf, vec![0.5, 1.5]);

        let mut small = vec![0.0f64; 1];
        assert!(matches!(
            store.extract_values_f64(0, 0, &mut small),
            Err(Error::CapacityMismatch { .. })
        ));
    }

    #[test]
    fn test_extract_is_read_only() {
        let store = sample_store();
        let mut buf = vec![0.0f64; 2];

        store.extract_values(5, 0, &mut buf).unwrap();
        store.extract_values(5, 0, &mut buf).unwrap();

        // Extraction does not consume or reorder the slot.
        assert_eq!(store.nnz(5, 0).unwrap(), 2);
        assert_eq!(buf, vec![1.0, 2.0]);
    }
}
