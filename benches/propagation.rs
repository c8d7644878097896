use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery::astrometry::{to_state_vector, AstrometricObservation};
use orrery::keplerlib::{propagate, solve_kepler};
use orrery::{BodyTable, Planet};

fn bench_solver(c: &mut Criterion) {
    c.bench_function("solve_kepler e=0.9", |b| {
        b.iter(|| solve_kepler(black_box(17.5), black_box(0.9)))
    });
}

fn bench_propagate(c: &mut Criterion) {
    let elements = Planet::Mercury.elements();
    c.bench_function("propagate Mercury", |b| {
        b.iter(|| propagate(black_box(&elements), black_box(12_345.6)))
    });
}

fn bench_state_vector(c: &mut Criterion) {
    let star = AstrometricObservation {
        ra: 217.42894,
        dec: -62.67949,
        parallax: 768.0665,
        pmra: -3781.741,
        pmdec: 769.465,
        rv: -22.204,
    };
    c.bench_function("to_state_vector", |b| {
        b.iter(|| to_state_vector(black_box(&star)))
    });
}

fn bench_table(c: &mut Criterion) {
    let mut table = BodyTable::with_sun();
    table.add_planets();
    c.bench_function("positions_at solar system", |b| {
        b.iter(|| table.positions_at(black_box(-4_000.25)))
    });
}

criterion_group!(
    benches,
    bench_solver,
    bench_propagate,
    bench_state_vector,
    bench_table
);
criterion_main!(benches);
