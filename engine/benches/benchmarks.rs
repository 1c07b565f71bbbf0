//! Performance benchmarks for depot-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depot_engine::{filter, next_code, page_window, SearchQuery, TableState};
use serde_json::{json, Value};

fn create_products(size: usize) -> Vec<Value> {
    (0..size)
        .map(|i| {
            json!({
                "id": format!("prd_{}", i),
                "code": format!("PRD-{:04}", i + 1),
                "name": format!("Product {}", i),
                "category": ["Analgesic", "Antibiotic", "Vitamin", "Antacid"][i % 4],
                "stock": (i * 37) % 500,
                "expiresOn": format!("2026-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            })
        })
        .collect()
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    for size in [100, 1000, 10000].iter() {
        let products = create_products(*size);

        group.bench_with_input(BenchmarkId::new("recompute_plain", size), size, |b, _| {
            let state = TableState::new();
            b.iter(|| black_box(&state).recompute(black_box(&products)).rows.len())
        });

        group.bench_with_input(BenchmarkId::new("recompute_search", size), size, |b, _| {
            let mut state = TableState::new();
            state.set_query("vitamin");
            b.iter(|| black_box(&state).recompute(black_box(&products)).rows.len())
        });

        group.bench_with_input(BenchmarkId::new("recompute_sorted", size), size, |b, _| {
            let mut state = TableState::new();
            state.set_sort("stock");
            state.set_page(3);
            b.iter(|| black_box(&state).recompute(black_box(&products)).rows.len())
        });

        group.bench_with_input(
            BenchmarkId::new("recompute_search_sorted_fields", size),
            size,
            |b, _| {
                let mut state = TableState::new().with_search_fields(["name", "category"]);
                state.set_query("anti");
                state.set_sort("expiresOn");
                b.iter(|| black_box(&state).recompute(black_box(&products)).rows.len())
            },
        );
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let products = create_products(5000);

    group.bench_function("all_fields", |b| {
        let query = SearchQuery::new("product 42");
        b.iter(|| filter(black_box(&products), black_box(&query), None).len())
    });

    group.bench_function("allowlist", |b| {
        let query = SearchQuery::new("product 42");
        let fields = vec!["name".to_string()];
        b.iter(|| filter(black_box(&products), black_box(&query), Some(&fields)).len())
    });

    group.finish();
}

fn bench_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("codes");

    for size in [100, 1000, 10000].iter() {
        let codes: Vec<String> = (1..=*size).map(|i| format!("CHEM-{:04}", i)).collect();
        group.bench_with_input(BenchmarkId::new("next_code", size), size, |b, _| {
            b.iter(|| next_code(black_box("CHEM"), black_box(&codes)))
        });
    }

    group.bench_function("page_window", |b| {
        b.iter(|| page_window(black_box(1000), black_box(500)))
    });

    group.finish();
}

criterion_group!(benches, bench_table, bench_filter, bench_codes);
criterion_main!(benches);
