//! TicTacToe implementation for the engine framework
//!
//! A complete reference implementation of a deterministic two-player game
//! on the `engine-core` traits. Actions are cell indices in row-major
//! order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! X is player 0 and moves first; O is player 1.

use engine_core::{
    Action, ActionsAndProbs, Dynamics, Game, GameType, PlayerId, RewardModel, State,
};

/// Number of board cells and of possible actions.
pub const NUM_CELLS: usize = 9;

/// Winning positions (rows, columns, diagonals).
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The TicTacToe game description.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    fn name(&self) -> &'static str {
        "tictactoe"
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
        Box::new(TicTacToeState::new())
    }
}

/// TicTacToe position: board, player to move, and winner once decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeState {
    /// Cell contents: 0=empty, 1=X, 2=O.
    board: [u8; NUM_CELLS],
    /// Player to move: 0=X, 1=O.
    current_player: u8,
    /// 0=ongoing, 1=X won, 2=O won, 3=draw.
    winner: u8,
}

impl TicTacToeState {
    pub fn new() -> Self {
        Self {
            board: [0; NUM_CELLS],
            current_player: 0,
            winner: 0,
        }
    }

    fn check_winner(board: &[u8; NUM_CELLS]) -> u8 {
        for line in &LINES {
            let mark = board[line[0]];
            if mark != 0 && board[line[1]] == mark && board[line[2]] == mark {
                return mark;
            }
        }
        if board.iter().all(|&cell| cell != 0) {
            return 3;
        }
        0
    }

    fn mark_char(cell: u8) -> char {
        match cell {
            1 => 'x',
            2 => 'o',
            _ => '.',
        }
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for TicTacToeState {
    fn clone_boxed(&self) -> Box<dyn State> {
        Box::new(*self)
    }

    fn current_player(&self) -> PlayerId {
        PlayerId::Player(self.current_player)
    }

    fn is_terminal(&self) -> bool {
        self.winner != 0
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..NUM_CELLS as Action)
            .filter(|&cell| self.board[cell as usize] == 0)
            .collect()
    }

    fn chance_outcomes(&self) -> ActionsAndProbs {
        Vec::new()
    }

    fn apply_action(&mut self, action: Action) {
        let cell = action as usize;
        assert!(
            !self.is_terminal() && cell < NUM_CELLS && self.board[cell] == 0,
            "illegal action {action}"
        );

        self.board[cell] = self.current_player + 1;
        self.winner = Self::check_winner(&self.board);
        if self.winner == 0 {
            self.current_player = 1 - self.current_player;
        }
    }

    fn returns(&self) -> Vec<f64> {
        match self.winner {
            1 => vec![1.0, -1.0],
            2 => vec![-1.0, 1.0],
            _ => vec![0.0, 0.0],
        }
    }

    fn action_to_string(&self, player: PlayerId, action: Action) -> String {
        let mark = match player {
            PlayerId::Player(0) => 'x',
            _ => 'o',
        };
        format!("{mark}({},{})", action / 3, action % 3)
    }

    fn state_string(&self) -> String {
        self.board
            .chunks(3)
            .map(|row| row.iter().map(|&c| Self::mark_char(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(actions: &[Action]) -> TicTacToeState {
        let mut state = TicTacToeState::new();
        for &action in actions {
            state.apply_action(action);
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = TicTacToeState::new();
        assert!(!state.is_terminal());
        assert_eq!(state.current_player(), PlayerId::Player(0));
        assert_eq!(state.legal_actions().len(), 9);
    }

    #[test]
    fn test_players_alternate() {
        let mut state = TicTacToeState::new();
        state.apply_action(4);
        assert_eq!(state.current_player(), PlayerId::Player(1));
        state.apply_action(0);
        assert_eq!(state.current_player(), PlayerId::Player(0));
    }

    #[test]
    fn test_legal_actions_shrink() {
        let state = play(&[4, 0, 8]);
        let legal = state.legal_actions();
        assert_eq!(legal.len(), 6);
        assert!(!legal.contains(&4));
        assert!(!legal.contains(&0));
        assert!(!legal.contains(&8));
    }

    #[test]
    fn test_row_win() {
        // X takes the top row.
        let state = play(&[0, 3, 1, 4, 2]);
        assert!(state.is_terminal());
        assert_eq!(state.returns(), vec![1.0, -1.0]);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_column_win_for_o() {
        // O takes the left column.
        let state = play(&[1, 0, 2, 3, 4, 6]);
        assert!(state.is_terminal());
        assert_eq!(state.returns(), vec![-1.0, 1.0]);
    }

    #[test]
    fn test_diagonal_win() {
        let state = play(&[0, 1, 4, 2, 8]);
        assert!(state.is_terminal());
        assert_eq!(state.returns(), vec![1.0, -1.0]);
    }

    #[test]
    fn test_draw() {
        // x o x / x o o / o x x
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(state.is_terminal());
        assert_eq!(state.returns(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_ongoing_game_returns_zero() {
        let state = play(&[4]);
        assert_eq!(state.returns(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_not_a_chance_game() {
        let state = TicTacToeState::new();
        assert!(!state.is_chance_node());
        assert!(state.chance_outcomes().is_empty());
    }

    #[test]
    fn test_action_to_string() {
        let state = TicTacToeState::new();
        assert_eq!(state.action_to_string(PlayerId::Player(0), 5), "x(1,2)");
        assert_eq!(state.action_to_string(PlayerId::Player(1), 0), "o(0,0)");
    }

    #[test]
    fn test_state_string() {
        let state = play(&[4, 0]);
        assert_eq!(state.state_string(), "o..\n.x.\n...");
    }

    #[test]
    fn test_game_description() {
        let game = TicTacToe;
        assert_eq!(game.num_players(), 2);
        assert_eq!(game.max_utility(), 1.0);
        assert_eq!(game.game_type().dynamics, Dynamics::Sequential);
        assert_eq!(game.game_type().reward_model, RewardModel::Terminal);
    }
}
