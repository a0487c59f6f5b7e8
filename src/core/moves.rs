//! Move enumeration and round outcomes.
//!
//! Raw player input is free-form text. It is normalized exactly once at the
//! boundary (`Move::parse`: trim + ASCII lowercase) into the closed `Move`
//! enumeration; everything past that point works with typed values.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A move in the game.
///
/// `Bomb` is playable once per game per player and beats every other move.
/// Two simultaneous bombs draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// The three everyday moves, excluding the bomb.
    pub const HAND: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Normalize raw input and convert it to a move.
    ///
    /// Trims surrounding whitespace and lowercases before matching, so
    /// `" Rock "` parses the same as `"rock"`. Returns `None` for anything
    /// outside the four moves.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }

    /// Check whether this move is the bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// Check if this move beats the other under the cyclic dominance rule.
    ///
    /// Only meaningful for the three hand moves; the bomb never appears in
    /// a dominating pair (bomb wins are decided before dominance applies).
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
            Move::Bomb => write!(f, "bomb"),
        }
    }
}

/// Result of a single resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Single round winner.
    Winner(Player),
    /// Draw (no points scored).
    Draw,
}

impl RoundOutcome {
    /// Check if a player won the round.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            RoundOutcome::Winner(p) => *p == player,
            RoundOutcome::Draw => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(Move::parse("rock"), Some(Move::Rock));
        assert_eq!(Move::parse("paper"), Some(Move::Paper));
        assert_eq!(Move::parse("scissors"), Some(Move::Scissors));
        assert_eq!(Move::parse("bomb"), Some(Move::Bomb));
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Move::parse(" Rock "), Some(Move::Rock));
        assert_eq!(Move::parse("PAPER"), Some(Move::Paper));
        assert_eq!(Move::parse("\tScIsSoRs\n"), Some(Move::Scissors));
        assert_eq!(Move::parse("Bomb"), Some(Move::Bomb));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Move::parse("xyz"), None);
        assert_eq!(Move::parse(""), None);
        assert_eq!(Move::parse("rock paper"), None);
        assert_eq!(Move::parse("rocks"), None);
    }

    #[test]
    fn test_beats_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));

        assert!(!Move::Scissors.beats(Move::Rock));
        assert!(!Move::Paper.beats(Move::Scissors));
        assert!(!Move::Rock.beats(Move::Paper));
    }

    #[test]
    fn test_beats_never_involves_bomb() {
        for hand in Move::HAND {
            assert!(!Move::Bomb.beats(hand));
            assert!(!hand.beats(Move::Bomb));
        }
        assert!(!Move::Bomb.beats(Move::Bomb));
    }

    #[test]
    fn test_is_bomb() {
        assert!(Move::Bomb.is_bomb());
        for hand in Move::HAND {
            assert!(!hand.is_bomb());
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mv in [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb] {
            assert_eq!(Move::parse(&mv.to_string()), Some(mv));
        }
    }

    #[test]
    fn test_outcome_is_winner() {
        let won = RoundOutcome::Winner(Player::User);
        assert!(won.is_winner(Player::User));
        assert!(!won.is_winner(Player::Bot));

        assert!(!RoundOutcome::Draw.is_winner(Player::User));
        assert!(!RoundOutcome::Draw.is_winner(Player::Bot));
    }

    #[test]
    fn test_move_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Bomb).unwrap(), "\"bomb\"");
        let mv: Move = serde_json::from_str("\"scissors\"").unwrap();
        assert_eq!(mv, Move::Scissors);
    }
}
