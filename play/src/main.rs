//! Play - pit bots against each other from the command line
//!
//! Plays one or more games between two configurable bots, printing moves
//! as they are made and aggregate results at the end. Chance nodes are
//! resolved by the driver itself, sampling the declared distribution;
//! bots only ever see decision states.
//!
//! ```text
//! play --game tictactoe --player1 mcts --player2 random --num-games 10
//! play --game pig --max-simulations 1000 --solve false
//! play --game tictactoe "x(1,1)" "o(0,0)"   # forced opening moves
//! ```

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use engine_core::{sample_chance_outcome, Action, Bot, Game, PlayerId, State, UniformRandomBot};
use games_pig::Pig;
use games_tictactoe::TicTacToe;
use mcts::{MctsBot, MctsConfig, RandomRolloutEvaluator};

#[derive(Parser, Debug)]
#[command(about = "Play games between MCTS and baseline bots")]
struct Args {
    /// The game to play: tictactoe or pig.
    #[arg(long, default_value = "tictactoe")]
    game: String,

    /// Who controls player 1: mcts or random.
    #[arg(long, default_value = "mcts")]
    player1: String,

    /// Who controls player 2: mcts or random.
    #[arg(long, default_value = "random")]
    player2: String,

    /// UCT exploration constant.
    #[arg(long, default_value_t = 2.0)]
    uct_c: f64,

    /// Rollouts per evaluation.
    #[arg(long, default_value_t = 10)]
    rollout_count: u32,

    /// Simulations per move.
    #[arg(long, default_value_t = 10_000)]
    max_simulations: u32,

    /// Memory cap per search in megabytes (0 = unlimited).
    #[arg(long, default_value_t = 1000)]
    max_memory_mb: usize,

    /// Whether to use the MCTS-Solver.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    solve: bool,

    /// RNG seed; 0 derives one from the clock.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// How many games to play.
    #[arg(long, default_value_t = 1)]
    num_games: u32,

    /// Show per-move search statistics.
    #[arg(long)]
    verbose: bool,

    /// Don't show moves as they are played.
    #[arg(long)]
    quiet: bool,

    /// Actions forced at the start of every game, by name.
    initial_actions: Vec<String>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn seed_or_clock(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as u64)
        .unwrap_or(1)
}

fn make_game(name: &str) -> Result<Box<dyn Game>> {
    match name {
        "tictactoe" => Ok(Box::new(TicTacToe)),
        "pig" => Ok(Box::new(Pig::default())),
        other => bail!("unknown game: {other} (known: tictactoe, pig)"),
    }
}

fn make_bot(kind: &str, game: &dyn Game, player: u8, seed: u64, args: &Args) -> Result<Box<dyn Bot>> {
    match kind {
        "random" => Ok(Box::new(UniformRandomBot::new(seed))),
        "mcts" => {
            let evaluator = RandomRolloutEvaluator::new(args.rollout_count, seed);
            let config = MctsConfig::default()
                .with_uct_c(args.uct_c)
                .with_max_simulations(args.max_simulations)
                .with_max_memory_mb(args.max_memory_mb)
                .with_solve(args.solve)
                .with_seed(seed)
                .with_verbose(args.verbose);
            let bot = MctsBot::new(game, PlayerId::Player(player), evaluator, config)
                .context("cannot build MCTS bot for this game")?;
            Ok(Box::new(bot))
        }
        other => bail!("unknown bot type: {other} (known: mcts, random)"),
    }
}

/// Find the legal action whose name matches `action_str`.
fn named_action(state: &dyn State, action_str: &str) -> Option<Action> {
    state
        .legal_actions()
        .into_iter()
        .find(|&action| state.action_to_string(state.current_player(), action) == action_str)
}

fn play_game(
    game: &dyn Game,
    bots: &mut [Box<dyn Bot>],
    rng: &mut ChaCha20Rng,
    initial_actions: &[String],
    quiet: bool,
) -> Result<(Vec<f64>, Vec<String>)> {
    let mut state = game.new_initial_state();
    let mut history = Vec::new();

    for action_str in initial_actions {
        let action = named_action(state.as_ref(), action_str)
            .with_context(|| format!("illegal forced action: {action_str}"))?;
        history.push(action_str.clone());
        state.apply_action(action);
        if !quiet {
            info!("forced action: {action_str}");
            info!("state:\n{}", state.state_string());
        }
    }

    while !state.is_terminal() {
        let player = state.current_player();
        let action = match player {
            PlayerId::Chance => {
                let outcomes = state.chance_outcomes();
                sample_chance_outcome(&outcomes, rng.gen::<f64>())
            }
            PlayerId::Player(seat) => bots[seat as usize].step(state.as_ref())?.1,
        };

        let action_str = state.action_to_string(player, action);
        if !quiet {
            info!("player {player} plays: {action_str}");
        }
        history.push(action_str);
        state.apply_action(action);
        if !quiet {
            info!("state:\n{}", state.state_string());
        }
    }

    Ok((state.returns(), history))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let game = make_game(&args.game)?;
    let seed = seed_or_clock(args.seed);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut bots = vec![
        make_bot(&args.player1, game.as_ref(), 0, seed, &args)?,
        make_bot(&args.player2, game.as_ref(), 1, seed.wrapping_add(1), &args)?,
    ];

    let mut histories: HashMap<String, u32> = HashMap::new();
    let mut overall_returns = vec![0.0; game.num_players()];
    let mut overall_wins = vec![0u32; game.num_players()];

    for game_num in 0..args.num_games {
        let (returns, history) =
            play_game(game.as_ref(), &mut bots, &mut rng, &args.initial_actions, args.quiet)?;
        info!(game = game_num + 1, ?returns, "game over");
        *histories.entry(history.join(" ")).or_default() += 1;
        for (i, &value) in returns.iter().enumerate() {
            overall_returns[i] += value;
            if value > 0.0 {
                overall_wins[i] += 1;
            }
        }
    }

    println!("Number of games played: {}", args.num_games);
    println!("Number of distinct games played: {}", histories.len());
    println!("Overall wins: {overall_wins:?}");
    println!("Overall returns: {overall_returns:?}");

    Ok(())
}
