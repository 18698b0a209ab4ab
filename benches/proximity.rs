use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::Point;
use geocell::adjacency::{Direction, adjacent, distance_sorted_edges};
use geocell::cell::{MAX_RESOLUTION, encode, encode_chain};
use geocell::location::Locatable;
use geocell::proximity::{ProximityOptions, proximity_fetch};

#[derive(Debug, Clone)]
struct Place {
    lat: f64,
    lon: f64,
    key: String,
    cells: Vec<String>,
}

impl Locatable for Place {
    fn latitude(&self) -> f64 {
        self.lat
    }
    fn longitude(&self) -> f64 {
        self.lon
    }
    fn key(&self) -> &str {
        &self.key
    }
    fn geocells(&self) -> &[String] {
        &self.cells
    }
}

/// A grid of places around Frankfurt, indexed at resolution 10.
fn seed_places(per_side: usize) -> Vec<Place> {
    let mut places = Vec::with_capacity(per_side * per_side);
    for i in 0..per_side {
        for j in 0..per_side {
            let lat = 50.0 + (i as f64) * 0.002;
            let lon = 8.0 + (j as f64) * 0.002;
            places.push(Place {
                lat,
                lon,
                key: format!("place:{i}:{j}"),
                cells: encode_chain(&Point::new(lon, lat), 10),
            });
        }
    }
    places
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let p = Point::new(8.6821, 50.1109);
    for resolution in [4, 8, MAX_RESOLUTION] {
        group.bench_with_input(
            BenchmarkId::new("encode", resolution),
            &resolution,
            |b, &r| b.iter(|| encode(black_box(&p), black_box(r))),
        );
    }

    group.bench_function("encode_chain_max", |b| {
        b.iter(|| encode_chain(black_box(&p), MAX_RESOLUTION))
    });

    group.finish();
}

fn benchmark_grid_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_algebra");

    let cell = encode(&Point::new(8.6821, 50.1109), 10);
    group.bench_function("adjacent", |b| {
        b.iter(|| adjacent(black_box(&cell), black_box(Direction::NorthEast)))
    });

    let frontier: Vec<String> = vec![
        cell.clone(),
        adjacent(&cell, Direction::East),
        adjacent(&cell, Direction::North),
        adjacent(&adjacent(&cell, Direction::East), Direction::North),
    ];
    let center = Point::new(8.6821, 50.1109);
    group.bench_function("distance_sorted_edges_2x2", |b| {
        b.iter(|| distance_sorted_edges(black_box(&frontier), black_box(&center)))
    });

    group.finish();
}

fn benchmark_proximity_fetch(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_fetch");

    let places = seed_places(32);
    let center = Point::new(8.03, 50.03);

    for k in [1usize, 10, 50] {
        group.bench_with_input(BenchmarkId::new("k_nearest", k), &k, |b, &k| {
            b.iter(|| {
                proximity_fetch(
                    black_box(&center),
                    &ProximityOptions::nearest(k).at_resolution(10),
                    |cells: &[String]| {
                        places
                            .iter()
                            .filter(|p| p.geocells().iter().any(|c| cells.contains(c)))
                            .cloned()
                            .collect::<Vec<_>>()
                    },
                )
                .unwrap()
            })
        });
    }

    group.bench_function("radius_capped", |b| {
        b.iter(|| {
            proximity_fetch(
                black_box(&center),
                &ProximityOptions::nearest(20)
                    .within(5_000.0)
                    .at_resolution(10),
                |cells: &[String]| {
                    places
                        .iter()
                        .filter(|p| p.geocells().iter().any(|c| cells.contains(c)))
                        .cloned()
                        .collect::<Vec<_>>()
                },
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_grid_algebra,
    benchmark_proximity_fetch
);
criterion_main!(benches);
