use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write;
use std::time::Duration;
use tsrg_apply::mapping::Mappings;
use tsrg_apply::substitution::Substitutor;

fn create_mapping(entries: usize) -> String {
    let mut text = String::from("tsrg2 left right\nnet/minecraft/Example net/minecraft/Example\n");
    for i in 0..entries {
        writeln!(text, "\tfieldName{i} field_{i}").unwrap();
        writeln!(text, "\tmethodName{i} (I)V func_{i}").unwrap();
    }
    text
}

fn create_source(lines: usize, entries: usize) -> Vec<String> {
    (0..lines)
        .map(|i| {
            format!(
                "        this.field_{} = func_{}(field_{}, field_999999);",
                i % entries,
                (i * 7) % entries,
                (i * 13) % entries
            )
        })
        .collect()
}

fn substitution_benchmark(c: &mut Criterion) {
    let entries = 20_000;
    let mappings = Mappings::parse(&create_mapping(entries)).unwrap();

    let mut group = c.benchmark_group("substitute_lines");
    group.measurement_time(Duration::from_secs(10));

    for lines in [1_000, 10_000] {
        let source = create_source(lines, entries);
        group.bench_with_input(BenchmarkId::new("lines", lines), &source, |b, source| {
            b.iter(|| Substitutor::new(&mappings).substitute_lines(source).substitutions)
        });
    }
    group.finish();
}

fn mapping_benchmark(c: &mut Criterion) {
    let text = create_mapping(20_000);
    c.bench_function("parse_mapping_20k", |b| {
        b.iter(|| Mappings::parse(&text).unwrap().field_count())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = substitution_benchmark, mapping_benchmark
);
criterion_main!(benches);
