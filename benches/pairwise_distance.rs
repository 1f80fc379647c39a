use criterion::{Criterion, criterion_group, criterion_main};
use latlon_sphere::GeodeticPoint;
use std::hint::black_box;

const CITIES: &[(&str, &str)] = &[
    ("51°30′26″N", "000°07′39″W"),
    ("48°51′24″N", "002°21′08″E"),
    ("40°42′46″N", "074°00′22″W"),
    ("33°52′08″S", "151°12′30″E"),
    ("35°41′22″N", "139°41′30″E"),
    ("34°36′12″S", "058°22′54″W"),
    ("33°55′30″S", "018°25′24″E"),
    ("64°08′48″N", "021°56′24″W"),
    ("61°13′05″N", "149°54′01″W"),
    ("01°17′00″N", "103°51′00″E"),
    ("55°45′21″N", "037°37′04″E"),
    ("19°25′57″N", "099°07′59″W"),
];

fn city_points() -> Vec<GeodeticPoint> {
    CITIES
        .iter()
        .map(|&(lat, lon)| GeodeticPoint::new(lat, lon))
        .collect()
}

fn pairwise_distance_benchmark(c: &mut Criterion) {
    let points = city_points();

    let mut group = c.benchmark_group("pairwise_distance");

    group.bench_function("haversine", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for p1 in &points {
                for p2 in &points {
                    total += black_box(p1).distance_haversine(black_box(p2));
                }
            }
            total
        });
    });

    group.bench_function("cosine_law", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for p1 in &points {
                for p2 in &points {
                    total += black_box(p1).distance_cosine_law(black_box(p2));
                }
            }
            total
        });
    });

    group.bench_function("rhumb", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for p1 in &points {
                for p2 in &points {
                    total += black_box(p1).rhumb_distance(black_box(p2));
                }
            }
            total
        });
    });

    group.finish();
}

criterion_group!(benches, pairwise_distance_benchmark);
criterion_main!(benches);
