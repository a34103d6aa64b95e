//! Search configuration parameters.

/// Configuration for Monte Carlo Tree Search.
///
/// All fields are fixed for the lifetime of a bot; `MctsBot::new` takes the
/// config by value.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant for the PUCT formula. Higher values favor
    /// exploration, lower values favor exploitation.
    pub uct_c: f64,

    /// Upper bound on simulations per `step`.
    pub max_simulations: u32,

    /// Byte cap on tracked tree memory; 0 disables the cap. The search
    /// stops cleanly once expanded children and proven-outcome vectors
    /// exceed this bound.
    pub max_memory: usize,

    /// Enables MCTS-Solver backup of proven game-theoretic outcomes.
    pub solve: bool,

    /// Seed for the bot's RNG. The RNG persists across `step` calls.
    pub seed: u64,

    /// Emit per-move search summaries through `tracing`.
    pub verbose: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            uct_c: std::f64::consts::SQRT_2,
            max_simulations: 800,
            max_memory: 0,
            solve: false,
            seed: 42,
            verbose: false,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_simulations: 100,
            ..Self::default()
        }
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_uct_c(mut self, c: f64) -> Self {
        self.uct_c = c;
        self
    }

    /// Builder pattern: set the simulation budget.
    pub fn with_max_simulations(mut self, n: u32) -> Self {
        self.max_simulations = n;
        self
    }

    /// Builder pattern: set the memory cap in megabytes (0 = unlimited).
    pub fn with_max_memory_mb(mut self, mb: usize) -> Self {
        self.max_memory = mb << 20;
        self
    }

    /// Builder pattern: enable or disable solver backup.
    pub fn with_solve(mut self, solve: bool) -> Self {
        self.solve = solve;
        self
    }

    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder pattern: enable verbose search summaries.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
