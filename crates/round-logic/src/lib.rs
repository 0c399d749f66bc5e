//! Round Logic for rock-paper-scissors
//!
//! Core game logic behind the single-screen game: the move set, round
//! resolution, the running score and the shake/reveal state machine.
//! This crate is compiled to:
//! - Native (for tests and native hosts)
//! - WASM (for the mobile/web renderer)

mod error;
mod moves;
mod random;
mod resolver;
mod round;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::RoundError;
pub use moves::{Move, MOVES};
pub use random::{EntropySource, OpponentSource, SeededRng};
pub use resolver::{
    Phase, Resolution, ResolverConfig, RevealTimer, RoundResolver, Snapshot, SubscriptionId,
    MAX_SHAKE_MS,
};
pub use round::{resolve_round, RoundOutcome, RoundSummary, ScoreState, PICK_PROMPT};

/// Outcome of `player` against `com`
///
/// The player wins when their move beats the opponent's.
pub fn outcome(player: Move, com: Move) -> RoundOutcome {
    if player == com {
        RoundOutcome::Tie
    } else if player.beats() == com {
        RoundOutcome::PlayerWins
    } else {
        RoundOutcome::ComWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_table() {
        use Move::*;
        use RoundOutcome::*;

        let table = [
            (Rock, Rock, Tie),
            (Rock, Paper, ComWins),
            (Rock, Scissors, PlayerWins),
            (Paper, Rock, PlayerWins),
            (Paper, Paper, Tie),
            (Paper, Scissors, ComWins),
            (Scissors, Rock, ComWins),
            (Scissors, Paper, PlayerWins),
            (Scissors, Scissors, Tie),
        ];

        for (p, c, expected) in table {
            assert_eq!(outcome(p, c), expected, "{} vs {}", p, c);
        }
    }

    #[test]
    fn test_outcome_antisymmetric() {
        for p in MOVES {
            for c in MOVES {
                let flipped = match outcome(p, c) {
                    RoundOutcome::PlayerWins => RoundOutcome::ComWins,
                    RoundOutcome::ComWins => RoundOutcome::PlayerWins,
                    RoundOutcome::Tie => RoundOutcome::Tie,
                };
                assert_eq!(outcome(c, p), flipped);
            }
        }
    }
}
