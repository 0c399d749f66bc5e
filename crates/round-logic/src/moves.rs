//! The three moves and the cyclic beats relationship

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoundError;

/// A move in rock-paper-scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// All moves in button order (index 0, 1, 2)
pub const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// Identifying symbol, also used in the outcome text
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Emoji shown on the button and in the summary
    pub fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "✊🏼",
            Move::Paper => "🖐🏼",
            Move::Scissors => "✌🏼",
        }
    }

    /// Button index of this move
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    pub fn from_index(index: usize) -> Result<Move, RoundError> {
        MOVES
            .get(index)
            .copied()
            .ok_or(RoundError::InvalidMoveIndex(index))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MOVES
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| RoundError::UnknownMove(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_forms_cycle() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Scissors.beats(), Move::Paper);
        assert_eq!(Move::Paper.beats(), Move::Rock);

        // Following beats three times returns to the start
        for m in MOVES {
            assert_ne!(m.beats(), m);
            assert_eq!(m.beats().beats().beats(), m);
        }
    }

    #[test]
    fn test_each_move_beaten_exactly_once() {
        for m in MOVES {
            let beaten_by = MOVES.iter().filter(|o| o.beats() == m).count();
            assert_eq!(beaten_by, 1, "{} should be beaten by exactly one move", m);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, m) in MOVES.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Move::from_index(i).unwrap(), *m);
        }
    }

    #[test]
    fn test_invalid_index() {
        assert!(matches!(Move::from_index(3), Err(RoundError::InvalidMoveIndex(3))));
        assert!(matches!(
            Move::from_index(usize::MAX),
            Err(RoundError::InvalidMoveIndex(usize::MAX))
        ));
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!("paper".parse::<Move>().unwrap(), Move::Paper);
        assert!(matches!("lizard".parse::<Move>(), Err(RoundError::UnknownMove(s)) if s == "lizard"));
        // Symbols are lowercase only
        assert!("Rock".parse::<Move>().is_err());
    }

    #[test]
    fn test_serde_uses_symbol() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        let m: Move = serde_json::from_str("\"rock\"").unwrap();
        assert_eq!(m, Move::Rock);
    }

    #[test]
    fn test_glyphs_distinct() {
        assert_ne!(Move::Rock.glyph(), Move::Paper.glyph());
        assert_ne!(Move::Paper.glyph(), Move::Scissors.glyph());
        assert_ne!(Move::Rock.glyph(), Move::Scissors.glyph());
    }
}
