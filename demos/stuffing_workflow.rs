//! Matrix Stuffing Workflow (accumulate, query, extract)
//!
//! Demonstrates stuffr's accumulation store end to end:
//! - Registering parameters and their output slots
//! - Appending COO coefficients the way a canonicalizer would
//! - Sizing and filling extraction buffers the way a binding layer would
//!
//! ```sh
//! cargo run --example stuffing_workflow
//! ```

use stuffr::prelude::*;

fn main() -> Result<()> {
    let mut store = TensorStore::<f64>::new();

    // -----------------------------------------------------------------------
    // 1. Register parameters
    // -----------------------------------------------------------------------
    // Two problem parameters: parameter 5 decomposes into two output slots,
    // parameter 8 into one.
    store.init_param(5, 2)?;
    store.init_param(8, 1)?;
    println!("Registered {} parameters", store.num_params());

    // -----------------------------------------------------------------------
    // 2. Accumulate coefficients
    // -----------------------------------------------------------------------
    // The canonicalizer walks the problem tree and emits one COO triple per
    // nonzero it discovers. Entries land in append order; duplicates at the
    // same (row, col) are preserved for the consumer to sum.
    store.append(5, 0, 1.0, 0, 0)?;
    store.append(5, 0, 2.0, 1, 0)?;
    store.append(5, 1, -1.0, 0, 1)?;
    store.append(8, 0, 4.0, 2, 2)?;
    store.append(8, 0, 0.5, 2, 2)?; // duplicate coordinate

    println!("Accumulated {} nonzeros total", store.total_nnz());

    // -----------------------------------------------------------------------
    // 3. Size buffers from nnz, then flatten each axis
    // -----------------------------------------------------------------------
    // The consumer contract: query nnz, allocate exactly that many
    // elements, extract all three axes against the same (param_id, slot).
    for param_id in [5i64, 8] {
        for vec_idx in 0..store.param_size(param_id)? {
            let n = store.nnz(param_id, vec_idx)?;
            let mut values = vec![0.0f64; n];
            let mut rows = vec![0i64; n];
            let mut cols = vec![0i64; n];

            store.extract_values(param_id, vec_idx, &mut values)?;
            store.extract_rows(param_id, vec_idx, &mut rows)?;
            store.extract_cols(param_id, vec_idx, &mut cols)?;

            println!("\nparameter {param_id}, slot {vec_idx} ({n} nonzeros):");
            for k in 0..n {
                println!("  ({}, {}) -> {}", rows[k], cols[k], values[k]);
            }
        }
    }
    // Expected for parameter 8, slot 0:
    //   (2, 2) -> 4.0
    //   (2, 2) -> 0.5

    // -----------------------------------------------------------------------
    // 4. Mis-sized buffers are rejected, not truncated
    // -----------------------------------------------------------------------
    let mut undersized = vec![0.0f64; 1];
    let err = store.extract_values(8, 0, &mut undersized).unwrap_err();
    println!("\nUndersized buffer rejected: {err}");

    println!("\nStuffing workflow example completed successfully!");
    Ok(())
}
