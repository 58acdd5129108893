//! This bench test simulates filling a store to capacity through the public
//! API, including the full-file rewrite performed on every addition.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dispatcher::{Emergency, Kind, Store};
use tempfile::TempDir;

fn fill_store(c: &mut Criterion) {
    c.bench_function("add to capacity", |b| {
        b.iter_batched(
            || TempDir::new().unwrap(),
            |tmp_dir| {
                let mut store = Store::open(tmp_dir.path().join("emergencies.txt"), 100);
                for i in 0..100 {
                    let kind = Kind::Police {
                        crime_type: "Theft".to_string(),
                        suspect_armed: false,
                        officers_needed: 2,
                    };
                    store
                        .add(Emergency::new(
                            format!("block {i}"),
                            "reported by passer-by".to_string(),
                            3,
                            kind,
                        ))
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, fill_store);
criterion_main!(benches);
