use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stuffr::store::TensorStore;

const NNZ: usize = 100_000;

fn filled_store() -> TensorStore<f64> {
    let mut store = TensorStore::new();
    store.init_param(0, 1).unwrap();
    for k in 0..NNZ {
        store
            .append(0, 0, k as f64, k as i64, (k % 64) as i64)
            .unwrap();
    }
    store
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_100k", |b| {
        b.iter(|| {
            let mut store = TensorStore::<f64>::new();
            store.init_param(0, 1).unwrap();
            for k in 0..NNZ {
                store
                    .append(0, 0, black_box(k as f64), k as i64, (k % 64) as i64)
                    .unwrap();
            }
            black_box(store.total_nnz())
        })
    });
}

fn bench_slot_mut_push(c: &mut Criterion) {
    c.bench_function("slot_mut_push_100k", |b| {
        b.iter(|| {
            let mut store = TensorStore::<f64>::new();
            store.init_param(0, 1).unwrap();
            let slot = store.slot_mut(0, 0).unwrap();
            slot.reserve(NNZ);
            for k in 0..NNZ {
                slot.push(black_box(k as f64), k as i64, (k % 64) as i64);
            }
            black_box(store.total_nnz())
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let store = filled_store();
    let n = store.nnz(0, 0).unwrap();

    c.bench_function("extract_100k", |b| {
        let mut values = vec![0.0f64; n];
        let mut rows = vec![0i64; n];
        let mut cols = vec![0i64; n];
        b.iter(|| {
            store.extract_values(0, 0, &mut values).unwrap();
            store.extract_rows(0, 0, &mut rows).unwrap();
            store.extract_cols(0, 0, &mut cols).unwrap();
            black_box(values[n - 1])
        })
    });
}

criterion_group!(benches, bench_append, bench_slot_mut_push, bench_extract);
criterion_main!(benches);
