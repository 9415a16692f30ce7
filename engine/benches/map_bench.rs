use criterion::{criterion_group, criterion_main, Criterion};
use snake_engine::{GameRng, Map, TickOutcome};

fn full_capacity_map_text() -> String {
    // 100x100 arena: walls around the border, a two-segment snake inside.
    let mut rows = Vec::new();
    rows.push("=".repeat(100));
    for row in 1..99 {
        let mut line = String::from("=");
        if row == 50 {
            line.push_str(">>");
            line.push_str(&" ".repeat(96));
        } else {
            line.push_str(&" ".repeat(98));
        }
        line.push('=');
        rows.push(line);
    }
    rows.push("=".repeat(100));
    rows.join("\n") + "\n"
}

fn bench_parse(text: &str) {
    Map::parse(text).unwrap();
}

fn bench_advance_run(pristine: &Map) {
    // Run the snake into the far wall, resetting from the snapshot, the way
    // the front-ends replay a map after a death.
    let mut map = pristine.clone();
    while map.advance() != TickOutcome::Dead {}
}

fn bench_spawn_food(pristine: &Map, rng: &mut GameRng) {
    let mut map = pristine.clone();
    map.spawn_food(rng).unwrap();
}

fn map_bench(c: &mut Criterion) {
    let text = full_capacity_map_text();
    let pristine = Map::parse(&text).unwrap();
    let mut rng = GameRng::new(7);

    let mut group = c.benchmark_group("map");

    group.bench_function("parse_100x100", |b| b.iter(|| bench_parse(&text)));

    group.bench_function("advance_to_death", |b| {
        b.iter(|| bench_advance_run(&pristine))
    });

    group.bench_function("spawn_food_100x100", |b| {
        b.iter(|| bench_spawn_food(&pristine, &mut rng))
    });

    group.finish();
}

criterion_group!(benches, map_bench);
criterion_main!(benches);
