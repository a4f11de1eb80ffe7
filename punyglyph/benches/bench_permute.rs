use criterion::{black_box, criterion_group, criterion_main, Criterion};

use punyglyph::encode::encode;
use punyglyph::permutate::Domain;

fn candidates(domain: &Domain, max_substitutions: usize) {
    domain.candidates(max_substitutions).for_each(drop)
}

fn homoglyph(domain: &Domain, max_substitutions: usize) {
    drop(domain.homoglyph(max_substitutions))
}

fn criterion_benchmark(c: &mut Criterion) {
    let domain = Domain::new("example", "com").unwrap();

    c.bench_function("candidates example.com (1)", |b| {
        b.iter(|| candidates(&domain, black_box(1)))
    });
    c.bench_function("candidates example.com (3)", |b| {
        b.iter(|| candidates(&domain, black_box(3)))
    });
    c.bench_function("homoglyph example.com (1)", |b| {
        b.iter(|| homoglyph(&domain, black_box(1)))
    });
    c.bench_function("homoglyph example.com (2)", |b| {
        b.iter(|| homoglyph(&domain, black_box(2)))
    });
    c.bench_function("homoglyph example.com (3)", |b| {
        b.iter(|| homoglyph(&domain, black_box(3)))
    });
    c.bench_function("encode ex\u{0430}mple.com", |b| {
        b.iter(|| encode(black_box("ex\u{0430}mple.com")))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
