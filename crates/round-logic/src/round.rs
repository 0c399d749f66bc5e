//! Single-round resolution and the running score

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::outcome;

/// Shown before the first round is revealed
pub const PICK_PROMPT: &str = "Pick!";

/// Who took the round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins,
    ComWins,
    Tie,
}

/// Record of the most recent round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round: u32,
    pub player: Move,
    pub player_glyph: &'static str,
    pub com: Move,
    pub com_glyph: &'static str,
    pub outcome: RoundOutcome,
}

impl RoundSummary {
    /// Result line for the screen, e.g. "rock win against scissors"
    pub fn outcome_text(&self) -> String {
        match self.outcome {
            RoundOutcome::PlayerWins => format!("{} win against {}", self.player, self.com),
            RoundOutcome::ComWins => format!("{} lose against {}", self.player, self.com),
            RoundOutcome::Tie => "Tie".to_string(),
        }
    }
}

/// Wins per side. Only ever increases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreState {
    pub player: u32,
    pub com: u32,
}

impl ScoreState {
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWins => self.player = self.player.saturating_add(1),
            RoundOutcome::ComWins => self.com = self.com.saturating_add(1),
            RoundOutcome::Tie => {}
        }
    }
}

/// Resolve one round between two known moves
///
/// Pure: the same pair always yields the same outcome.
pub fn resolve_round(player: Move, com: Move, round: u32) -> (RoundOutcome, RoundSummary) {
    let outcome = outcome(player, com);
    let summary = RoundSummary {
        round,
        player,
        player_glyph: player.glyph(),
        com,
        com_glyph: com.glyph(),
        outcome,
    };
    (outcome, summary)
}
