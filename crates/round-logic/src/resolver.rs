//! Round state machine: Idle -> Shaking -> Revealed -> Shaking -> ...
//!
//! The resolver owns the scores and the last revealed round. It has no
//! clock: starting a round hands back a [`RevealTimer`] that the host
//! schedules and returns through [`RoundResolver::reveal`] once the shake
//! animation is done. Timers carry their round number, so one that
//! arrives for anything but the pending round is dropped.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::RoundError;
use crate::moves::Move;
use crate::random::{EntropySource, OpponentSource};
use crate::round::{resolve_round, RoundOutcome, RoundSummary, ScoreState, PICK_PROMPT};

/// Upper bound on the shake animation
pub const MAX_SHAKE_MS: u32 = 5_000;

/// Where the current round stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round played yet
    #[default]
    Idle,
    /// Outcome decided but hidden, input rejected
    Shaking,
    /// Outcome and scores visible, input accepted
    Revealed,
}

/// Resolver settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// How long the shake lasts before the reveal. 0 reveals immediately.
    pub shake_duration_ms: u32,
}

impl ResolverConfig {
    /// One second of shaking
    pub fn standard() -> Self {
        Self { shake_duration_ms: 1_000 }
    }

    /// No animation, results show as soon as a move is picked
    pub fn instant() -> Self {
        Self { shake_duration_ms: 0 }
    }

    /// Parse from JSON; missing fields take the standard values
    pub fn from_json(json: &str) -> Result<Self, RoundError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RoundError> {
        if self.shake_duration_ms > MAX_SHAKE_MS {
            return Err(RoundError::ShakeTooLong {
                requested: self.shake_duration_ms,
                max: MAX_SHAKE_MS,
            });
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// One-shot reveal for a specific round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealTimer {
    pub round: u32,
    pub delay_ms: u32,
}

/// What starting a round produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub outcome: RoundOutcome,
    pub summary: RoundSummary,
    /// `None` when the round was revealed on the spot
    pub timer: Option<RevealTimer>,
}

/// Read-only view for the renderer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub player_score: u32,
    pub com_score: u32,
    pub last_summary: Option<RoundSummary>,
    pub last_outcome_text: String,
}

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&Snapshot)>;

pub struct RoundResolver<S = EntropySource> {
    config: ResolverConfig,
    source: S,
    phase: Phase,
    scores: ScoreState,
    last_summary: Option<RoundSummary>,
    pending: Option<RoundSummary>,
    rounds_started: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl RoundResolver<EntropySource> {
    /// Resolver for live play, drawing opponents from OS entropy
    pub fn new(config: ResolverConfig) -> Result<Self, RoundError> {
        Self::with_source(config, EntropySource)
    }
}

impl<S: OpponentSource> RoundResolver<S> {
    pub fn with_source(config: ResolverConfig, source: S) -> Result<Self, RoundError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            phase: Phase::Idle,
            scores: ScoreState::default(),
            last_summary: None,
            pending: None,
            rounds_started: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Start a round with the player's move
    ///
    /// Returns `None` without touching any state while a previous round is
    /// still shaking. Otherwise the opponent is drawn and the outcome fixed
    /// now. Scores change only when the round is revealed.
    pub fn resolve(&mut self, player: Move) -> Option<Resolution> {
        if self.phase == Phase::Shaking {
            trace!(%player, "input rejected while shaking");
            return None;
        }

        let round = self.rounds_started.wrapping_add(1);
        self.rounds_started = round;

        let com = self.source.draw();
        let (outcome, summary) = resolve_round(player, com, round);
        debug!(round, %player, %com, ?outcome, "round started");

        let delay_ms = self.config.shake_duration_ms;
        if delay_ms == 0 {
            self.commit(summary.clone());
            return Some(Resolution { outcome, summary, timer: None });
        }

        self.phase = Phase::Shaking;
        self.pending = Some(summary.clone());
        self.notify();

        Some(Resolution {
            outcome,
            summary,
            timer: Some(RevealTimer { round, delay_ms }),
        })
    }

    /// Button entry point: 0 = rock, 1 = paper, 2 = scissors
    pub fn notify_player_choice(&mut self, index: usize) -> Result<Option<Resolution>, RoundError> {
        let player = Move::from_index(index)?;
        Ok(self.resolve(player))
    }

    /// Fire a reveal timer. Returns false if it was stale.
    pub fn reveal(&mut self, timer: RevealTimer) -> bool {
        match self.pending.take() {
            Some(summary) if summary.round == timer.round => {
                self.commit(summary);
                true
            }
            other => {
                trace!(timer_round = timer.round, pending = ?other.as_ref().map(|s| s.round), "stale reveal timer ignored");
                self.pending = other;
                false
            }
        }
    }

    fn commit(&mut self, summary: RoundSummary) {
        self.scores.record(summary.outcome);
        debug!(
            round = summary.round,
            player_score = self.scores.player,
            com_score = self.scores.com,
            "round revealed"
        );
        self.last_summary = Some(summary);
        self.phase = Phase::Revealed;
        self.notify();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player_score: self.scores.player,
            com_score: self.scores.com,
            last_summary: self.last_summary.clone(),
            last_outcome_text: self
                .last_summary
                .as_ref()
                .map(RoundSummary::outcome_text)
                .unwrap_or_else(|| PICK_PROMPT.to_string()),
        }
    }

    /// Call `listener` after every state change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scores(&self) -> ScoreState {
        self.scores
    }

    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}
