use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sanmei_base::{
    ALL_STEMS, Branch, RuleTenStars, Stem, TableTenStars, TenStarSource, day_pillar, five_elements,
    resolve_hidden_stem, twelve_star, validate_tables,
};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sexagenary");
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(2_446_037))));
    group.bench_function("resolve_hidden_stem", |b| {
        b.iter(|| resolve_hidden_stem(black_box(Branch::Chou), black_box(179)))
    });
    group.finish();
}

fn star_bench(c: &mut Criterion) {
    let rule = RuleTenStars;
    let table = TableTenStars::default();

    let mut group = c.benchmark_group("stars");
    group.bench_function("ten_star_rule_row", |b| {
        b.iter(|| {
            for other in ALL_STEMS {
                black_box(rule.ten_star(black_box(Stem::Geng), other));
            }
        })
    });
    group.bench_function("ten_star_table_row", |b| {
        b.iter(|| {
            for other in ALL_STEMS {
                black_box(table.ten_star(black_box(Stem::Geng), other));
            }
        })
    });
    group.bench_function("twelve_star", |b| {
        b.iter(|| twelve_star(black_box(Stem::Xin), black_box(Branch::Shen)))
    });
    group.finish();
}

fn aggregate_bench(c: &mut Criterion) {
    let stems = [Stem::Jia, Stem::Yi, Stem::Geng, Stem::Ren];
    let branches = [Branch::Zi, Branch::Hai, Branch::Wu, Branch::Wu];

    let mut group = c.benchmark_group("aggregate");
    group.bench_function("five_elements", |b| {
        b.iter(|| five_elements(black_box(&stems), black_box(&branches)))
    });
    group.bench_function("validate_tables", |b| {
        b.iter(|| validate_tables(black_box(&RuleTenStars)))
    });
    group.finish();
}

criterion_group!(benches, cycle_bench, star_bench, aggregate_bench);
criterion_main!(benches);
