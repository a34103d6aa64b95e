//! Player identities and action ids shared by all games.

use std::fmt;

/// An action id. Games assign their own meaning to the values; the engine
/// only moves them around.
pub type Action = i64;

/// Sentinel for "no action", e.g. the edge into a search tree's root.
pub const INVALID_ACTION: Action = -1;

/// Who is to move in a state.
///
/// Chance nodes are owned by [`PlayerId::Chance`] rather than by any seat;
/// transitions out of them are decided by the state's declared outcome
/// distribution instead of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// A seat at the table, numbered from 0.
    Player(u8),
    /// The chance "player" owning stochastic transitions.
    Chance,
}

impl PlayerId {
    /// Index into a per-player vector (returns, proven outcomes), if this
    /// identity is a seat.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            PlayerId::Player(p) => Some(p as usize),
            PlayerId::Chance => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player(p) => write!(f, "{p}"),
            PlayerId::Chance => write!(f, "chance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_index() {
        assert_eq!(PlayerId::Player(0).index(), Some(0));
        assert_eq!(PlayerId::Player(3).index(), Some(3));
        assert_eq!(PlayerId::Chance.index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::Player(1).to_string(), "1");
        assert_eq!(PlayerId::Chance.to_string(), "chance");
    }
}
