use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sql_movies::select;

fn bench_name_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/by_name");

    for name in ["Bill Murray", "A Much Longer Actor Name Than Usual For Benchmarks"] {
        group.bench_with_input(BenchmarkId::from_parameter(name.len()), &name, |b, name| {
            b.iter(|| black_box(select::select_actor_by_name(name)));
        });
    }

    group.finish();
}

fn bench_id_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/by_id");

    for id in [1_i64, 123_456_789] {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| black_box(select::select_movie_by_id(id)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_name_lookup, bench_id_lookup);
criterion_main!(benches);
