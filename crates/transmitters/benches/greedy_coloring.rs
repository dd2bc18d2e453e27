use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use transmitters::{GenerateOptions, color, from_gxl_str, generate_with_options, to_gxl_string};

fn dense_city() -> GenerateOptions {
    GenerateOptions {
        city_radius: 200.0,
        transmitter_count: 400,
        transmitter_radius: 15.0,
        random_seed: Some(20),
    }
}

fn bench_generate(c: &mut Criterion) {
    let opts = dense_city();
    c.bench_function("generate_400", |b| {
        b.iter(|| black_box(generate_with_options(black_box(&opts))));
    });
}

fn bench_color(c: &mut Criterion) {
    let graph = generate_with_options(&dense_city());

    let mut group = c.benchmark_group("greedy_coloring");
    group.sample_size(20);
    // `neighbors`/`can_color` scan the full edge list, so this is dominated by edge count.
    group.bench_function("color_400", move |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| black_box(color(&mut g)),
            criterion::BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_gxl(c: &mut Criterion) {
    let graph = generate_with_options(&dense_city());
    let text = to_gxl_string(&graph);
    c.bench_function("gxl_parse_400", |b| {
        b.iter(|| black_box(from_gxl_str(black_box(&text)).expect("parse")));
    });
}

criterion_group!(benches, bench_generate, bench_color, bench_gxl);
criterion_main!(benches);
