use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colornamer::{name_color, ColorNamer};

fn benchmark_color_naming(c: &mut Criterion) {
    let samples = ["#FF0000", "#C2894E", "#808080", "#1A2B3C", "#FFFFFF", "#FF0080"];

    c.bench_function("name_color", |b| {
        b.iter(|| {
            for hex in &samples {
                let _ = black_box(name_color(black_box(hex)));
            }
        })
    });

    let namer = ColorNamer::new();
    c.bench_function("classify", |b| {
        b.iter(|| namer.classify(black_box(200.0), black_box(55.0), black_box(70.0)))
    });
}

criterion_group!(benches, benchmark_color_naming);
criterion_main!(benches);
