//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full search with varying simulation counts
//! - Search from different game phases (opening, midgame, near-terminal)
//! - Solver overhead and chance-node descent (Pig)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use engine_core::{Game, PlayerId, State};
use games_pig::Pig;
use games_tictactoe::TicTacToe;
use mcts::{MctsBot, MctsConfig, RandomRolloutEvaluator};

fn tictactoe_after(moves: &[i64]) -> Box<dyn State> {
    let mut state = TicTacToe.new_initial_state();
    for &action in moves {
        state.apply_action(action);
    }
    state
}

fn make_bot(game: &dyn Game, config: MctsConfig) -> MctsBot<RandomRolloutEvaluator> {
    let evaluator = RandomRolloutEvaluator::new(1, 7);
    MctsBot::new(game, PlayerId::Player(0), evaluator, config).unwrap()
}

fn bench_search_simulations(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_simulations");

    for sims in [50u32, 100, 200, 400, 800] {
        group.throughput(Throughput::Elements(u64::from(sims)));
        group.bench_with_input(BenchmarkId::new("tictactoe", sims), &sims, |b, &sims| {
            let game = TicTacToe;
            let config = MctsConfig::for_testing().with_max_simulations(sims);
            let mut bot = make_bot(&game, config);
            let state = game.new_initial_state();

            b.iter(|| black_box(bot.search(state.as_ref())));
        });
    }

    group.finish();
}

fn bench_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_game_phases");
    let config = MctsConfig::for_testing().with_max_simulations(200);

    let phases: [(&str, &[i64]); 3] = [
        ("opening", &[]),
        ("midgame", &[4, 0, 2, 6]),
        ("near_terminal", &[0, 3, 1, 4]),
    ];

    for (name, moves) in phases {
        group.bench_function(name, |b| {
            let game = TicTacToe;
            let mut bot = make_bot(&game, config.clone());
            let state = tictactoe_after(moves);

            b.iter(|| black_box(bot.search(state.as_ref())));
        });
    }

    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_solver");

    for solve in [false, true] {
        let label = if solve { "on" } else { "off" };
        group.bench_function(label, |b| {
            let game = TicTacToe;
            let config = MctsConfig::for_testing()
                .with_max_simulations(400)
                .with_solve(solve);
            let mut bot = make_bot(&game, config);
            let state = tictactoe_after(&[4, 0, 2, 6]);

            b.iter(|| black_box(bot.search(state.as_ref())));
        });
    }

    group.finish();
}

fn bench_chance_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_chance");

    group.bench_function("pig", |b| {
        let game = Pig::new(25);
        let config = MctsConfig::for_testing().with_max_simulations(200);
        let mut bot = make_bot(&game, config);
        let state = game.new_initial_state();

        b.iter(|| black_box(bot.search(state.as_ref())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_simulations,
    bench_game_phases,
    bench_solver,
    bench_chance_game,
);

criterion_main!(benches);
