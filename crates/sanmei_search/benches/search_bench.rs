use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sanmei_search::{
    AstronomicalSolarTerms, BirthMoment, HiddenStemBasis, MonthTerm, NominalSolarTerms,
    ResolveConfig, SolarTermSource, apparent_solar_longitude_deg, elapsed_days, resolve_pillars,
};
use sanmei_time::{CivilTime, ZoneOffset};

fn solar_term_bench(c: &mut Criterion) {
    let jst = ZoneOffset::from_hours(9).unwrap();
    let astro = AstronomicalSolarTerms::default();

    let mut group = c.benchmark_group("solar_terms");
    group.bench_function("apparent_solar_longitude", |b| {
        b.iter(|| apparent_solar_longitude_deg(black_box(2_460_345.0)))
    });
    group.bench_function("astronomical_lichun", |b| {
        b.iter(|| astro.entry(black_box(2024), MonthTerm::Lichun, jst))
    });
    group.bench_function("nominal_lichun", |b| {
        b.iter(|| NominalSolarTerms.entry(black_box(2024), MonthTerm::Lichun, jst))
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let jst = ZoneOffset::from_hours(9).unwrap();
    let birth = BirthMoment::new(CivilTime::new(1984, 12, 2, 12, 0, 0.0), jst, 135.0);
    let config = ResolveConfig::default();
    let astro = AstronomicalSolarTerms::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("resolve_nominal", |b| {
        b.iter(|| resolve_pillars(&NominalSolarTerms, black_box(&birth), &config))
    });
    group.bench_function("resolve_astronomical", |b| {
        b.iter(|| resolve_pillars(&astro, black_box(&birth), &config))
    });
    if let Ok(resolution) = resolve_pillars(&astro, &birth, &config) {
        group.bench_function("elapsed_days_own_month", |b| {
            b.iter(|| {
                elapsed_days(
                    &astro,
                    HiddenStemBasis::OwnGoverningMonth,
                    black_box(&resolution),
                    jst,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, solar_term_bench, pillars_bench);
criterion_main!(benches);
