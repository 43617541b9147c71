use canonical::{tokenize, Normalizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "word, ".repeat(*size / 6);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| tokenize(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    c.bench_function("normalize_word", |b| {
        b.iter(|| normalizer.normalize(black_box("Pełnoziarnista")))
    });
}

criterion_group!(benches, bench_tokenize, bench_normalize);
criterion_main!(benches);
