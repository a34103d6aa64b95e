//! The dice game Pig for the engine framework
//!
//! Two players take turns accumulating a turn total by rolling a die.
//! Rolling a 1 forfeits the turn total and passes the turn; any other face
//! adds to it. Holding banks the turn total into the player's score. The
//! first player to bank `target_score` points wins.
//!
//! Pig exercises the chance layer: after a player chooses to roll, the
//! state becomes a chance node whose outcomes are the six die faces with
//! equal probability. The die face is the action id at those nodes.

use engine_core::{
    Action, ActionsAndProbs, Dynamics, Game, GameType, PlayerId, RewardModel, State,
};

/// Decision actions.
pub const ROLL: Action = 0;
pub const HOLD: Action = 1;

/// Faces on the die; chance-node action ids are `1..=NUM_FACES`.
pub const NUM_FACES: Action = 6;

/// The Pig game description.
#[derive(Debug, Clone, Copy)]
pub struct Pig {
    target_score: u32,
}

impl Pig {
    pub fn new(target_score: u32) -> Self {
        assert!(target_score > 0, "target score must be positive");
        Self { target_score }
    }
}

impl Default for Pig {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Game for Pig {
    fn name(&self) -> &'static str {
        "pig"
    }

    fn num_players(&self) -> usize {
        2
    }

    fn max_utility(&self) -> f64 {
        1.0
    }

    fn game_type(&self) -> GameType {
        GameType {
            dynamics: Dynamics::Sequential,
            reward_model: RewardModel::Terminal,
        }
    }

    fn new_initial_state(&self) -> Box<dyn State> {
        Box::new(PigState::new(self.target_score))
    }
}

/// Pig position: banked scores, the running turn total, and whether a roll
/// is pending resolution (the chance phase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PigState {
    scores: [u32; 2],
    turn_total: u32,
    current_player: u8,
    rolling: bool,
    target_score: u32,
}

impl PigState {
    pub fn new(target_score: u32) -> Self {
        Self {
            scores: [0, 0],
            turn_total: 0,
            current_player: 0,
            rolling: false,
            target_score,
        }
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    fn pass_turn(&mut self) {
        self.turn_total = 0;
        self.current_player = 1 - self.current_player;
    }
}

impl State for PigState {
    fn clone_boxed(&self) -> Box<dyn State> {
        Box::new(*self)
    }

    fn current_player(&self) -> PlayerId {
        if self.rolling {
            PlayerId::Chance
        } else {
            PlayerId::Player(self.current_player)
        }
    }

    fn is_terminal(&self) -> bool {
        self.scores.iter().any(|&score| score >= self.target_score)
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            Vec::new()
        } else if self.rolling {
            (1..=NUM_FACES).collect()
        } else {
            vec![ROLL, HOLD]
        }
    }

    fn chance_outcomes(&self) -> ActionsAndProbs {
        if !self.rolling {
            return Vec::new();
        }
        (1..=NUM_FACES)
            .map(|face| (face, 1.0 / NUM_FACES as f64))
            .collect()
    }

    fn apply_action(&mut self, action: Action) {
        assert!(!self.is_terminal(), "action applied to a finished game");
        if self.rolling {
            assert!((1..=NUM_FACES).contains(&action), "illegal die face {action}");
            self.rolling = false;
            if action == 1 {
                self.pass_turn();
            } else {
                self.turn_total += action as u32;
            }
        } else {
            match action {
                ROLL => self.rolling = true,
                HOLD => {
                    self.scores[self.current_player as usize] += self.turn_total;
                    if !self.is_terminal() {
                        self.pass_turn();
                    }
                }
                _ => panic!("illegal action {action}"),
            }
        }
    }

    fn returns(&self) -> Vec<f64> {
        if self.scores[0] >= self.target_score {
            vec![1.0, -1.0]
        } else if self.scores[1] >= self.target_score {
            vec![-1.0, 1.0]
        } else {
            vec![0.0, 0.0]
        }
    }

    fn action_to_string(&self, player: PlayerId, action: Action) -> String {
        match player {
            PlayerId::Chance => format!("face {action}"),
            PlayerId::Player(_) if action == ROLL => "roll".to_string(),
            PlayerId::Player(_) => "hold".to_string(),
        }
    }

    fn state_string(&self) -> String {
        format!(
            "scores: {}-{}, turn total: {}, player {} {}",
            self.scores[0],
            self.scores[1],
            self.turn_total,
            self.current_player,
            if self.rolling { "rolling" } else { "to move" }
        )
    }
}
