use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use routemate_lib::{find_nearest, Catalog, CatalogSchema, CatalogSlot, RawRow};
use std::hint::black_box;

const SYNTHETIC_FACILITIES: usize = 50_000;

/// A catalog the size of a full worldwide airport dataset, spread over a
/// deterministic lat/lon grid.
static SLOT: Lazy<CatalogSlot> = Lazy::new(|| {
    let rows = (0..SYNTHETIC_FACILITIES).map(|i| {
        let lat = (i % 180) as f64 - 89.5;
        let lon = ((i / 180) % 360) as f64 - 179.5;
        let row: RawRow = [
            ("id", i.to_string()),
            ("ident", format!("X{i:05}")),
            ("type", "large_airport".to_string()),
            ("name", format!("Synthetic {i}")),
            ("latitude_deg", lat.to_string()),
            ("longitude_deg", lon.to_string()),
            ("iso_country", "ZZ".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Ok(row)
    });
    let catalog = Catalog::from_rows(CatalogSchema::airports(), rows).expect("synthetic catalog");
    CatalogSlot::ready(catalog)
});

fn benchmark_nearest(c: &mut Criterion) {
    let slot = &*SLOT;

    c.bench_function("nearest_50k_new_york", |b| {
        b.iter(|| {
            let nearest = find_nearest(slot, black_box(40.7580), black_box(-73.9855))
                .expect("catalog is not empty");
            black_box(nearest.distance_km)
        });
    });

    c.bench_function("nearest_50k_southern_ocean", |b| {
        b.iter(|| {
            let nearest = find_nearest(slot, black_box(-60.0), black_box(20.0))
                .expect("catalog is not empty");
            black_box(nearest.distance_km)
        });
    });
}

criterion_group!(benches, benchmark_nearest);
criterion_main!(benches);
