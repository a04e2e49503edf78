use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use standings_core::career::compute_career_summary;
use standings_core::constants::DEFAULT_CALENDAR;
use standings_core::race::race_calendar;
use standings_core::season::{Race, RaceResult, Season};
use standings_core::standings::{compute_constructor_standings, compute_driver_standings};

const TEAMS: [&str; 10] = [
    "Red Bull Racing",
    "McLaren",
    "Ferrari",
    "Mercedes",
    "Alpine",
    "Aston Martin",
    "Williams",
    "AlphaTauri",
    "Alfa Romeo",
    "Haas",
];

/// A full 24-race season on a 20-car grid with seeded finishing orders
fn create_full_season(year: u16, seed: u64) -> Season {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid: Vec<(String, &str)> = (0..20)
        .map(|i| (format!("Driver{}", i), TEAMS[i / 2]))
        .collect();

    let mut season = Season::new(year);
    for (round, circuit) in DEFAULT_CALENDAR.iter().enumerate() {
        let mut order = grid.clone();
        order.shuffle(&mut rng);

        let results = order
            .into_iter()
            .enumerate()
            .map(|(i, (driver, team))| RaceResult::new(i as u32 + 1, driver, team))
            .collect();
        season = season.with_race(*circuit, Race::new(results).with_order(round as u32 + 1));
    }
    season
}

fn bench_driver_standings(c: &mut Criterion) {
    let season = create_full_season(2027, 42);

    c.bench_function("driver_standings_24_races", |b| {
        b.iter(|| compute_driver_standings(black_box(&season)))
    });
}

fn bench_constructor_standings(c: &mut Criterion) {
    let season = create_full_season(2027, 42);

    c.bench_function("constructor_standings_24_races", |b| {
        b.iter(|| compute_constructor_standings(black_box(&season)))
    });
}

fn bench_race_calendar(c: &mut Criterion) {
    let season = create_full_season(2027, 42);

    c.bench_function("race_calendar_24_races", |b| {
        b.iter(|| race_calendar(black_box(&season), &DEFAULT_CALENDAR))
    });
}

fn bench_career_summary(c: &mut Criterion) {
    let seasons: Vec<Season> = (0..20u16)
        .map(|i| create_full_season(2008 + i, i as u64))
        .collect();

    c.bench_function("career_summary_20_seasons", |b| {
        b.iter(|| compute_career_summary(black_box(&seasons)))
    });
}

criterion_group!(
    benches,
    bench_driver_standings,
    bench_constructor_standings,
    bench_race_calendar,
    bench_career_summary,
);
criterion_main!(benches);
