//! Round Engine — core reflex-trainer round logic

use serde::{Deserialize, Serialize};

use rfx_stage::{AwardTier, Stage, StageEvent};

use crate::config::{RoundConfig, clamp_spin_speed};
use crate::paytable::Award;
use crate::reel::{REEL_COUNT, Reel, TickHandle};
use crate::round::RoundResult;
use crate::store::ScoreStore;
use crate::symbols::SymbolSet;
use crate::timing::LogicalClock;

/// Composite round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No reel spinning; a round may start
    Idle,
    /// At least one reel spinning
    Spinning,
    /// Third failure reached; terminal until acknowledged
    GameOver,
}

/// Session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub special_triples: u64,
    pub game_overs: u64,
    pub best_score: u32,
}

impl SessionStats {
    /// Share of rounds that were won
    pub fn hit_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            (self.wins as f64 / self.rounds_played as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Round Engine
///
/// Owns reel values, spin/stop state, score, and failure count. The engine
/// is a passive state machine on a single logical thread: the host drives
/// it by starting rounds, delivering scheduled tick handles, and stopping
/// reels; the engine answers with re-armed handles, round results, and
/// stage events for the presentation layer.
pub struct RoundEngine<S: ScoreStore> {
    /// Configuration
    config: RoundConfig,
    /// Glyph wheel
    symbols: SymbolSet,
    /// The three reels
    reels: [Reel; REEL_COUNT],
    /// Composite phase
    phase: RoundPhase,
    /// Score accumulated this session
    score: u32,
    /// Mismatched rounds this session
    failure_count: u8,
    /// Best recorded score (loaded at construction)
    high_score: u32,
    /// Rounds started this session
    round_count: u64,
    /// Logical clock for stage timestamps
    clock: LogicalClock,
    /// Buffered stage events awaiting the presentation layer
    stages: Vec<StageEvent>,
    /// Session statistics
    stats: SessionStats,
    /// Injected high-score persistence
    store: S,
}

impl<S: ScoreStore> RoundEngine<S> {
    /// Create an engine with the default config
    pub fn new(store: S) -> Self {
        Self::with_config(RoundConfig::default(), store)
    }

    /// Create with a specific config; loads the high score from the store
    pub fn with_config(config: RoundConfig, store: S) -> Self {
        let high_score = match store.load(&config.high_score_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to load high score, starting from 0: {e}");
                0
            }
        };

        Self {
            reels: config.start_values.map(Reel::new),
            config,
            symbols: SymbolSet::standard(),
            phase: RoundPhase::Idle,
            score: 0,
            failure_count: 0,
            high_score,
            round_count: 0,
            clock: LogicalClock::new(),
            stages: Vec::new(),
            stats: SessionStats::default(),
            store,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Get current config
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Set the spin speed (clamped); ignored while reels are spinning
    pub fn set_spin_speed(&mut self, speed: f64) {
        if self.phase == RoundPhase::Spinning {
            log::debug!("spin speed change ignored mid-round");
            return;
        }
        self.config.spin_speed = clamp_spin_speed(speed);
    }

    /// Export config as JSON
    pub fn export_config(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap_or_default()
    }

    /// Import config from JSON; rejected while reels are spinning
    pub fn import_config(&mut self, json: &str) -> Result<(), String> {
        if self.phase == RoundPhase::Spinning {
            return Err("cannot replace config while reels are spinning".into());
        }
        let mut config: RoundConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))?;
        config.spin_speed = clamp_spin_speed(config.spin_speed);
        self.config = config;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ROUND EXECUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a round: all reels begin cycling
    ///
    /// Returns one armed tick handle per reel for the host scheduler to
    /// deliver after `spin_speed` elapses. A no-op (`None`) while any reel
    /// spins or after game over.
    pub fn start_round(&mut self) -> Option<[TickHandle; REEL_COUNT]> {
        if self.phase != RoundPhase::Idle {
            return None;
        }

        self.phase = RoundPhase::Spinning;
        self.round_count += 1;
        self.clock.reset();
        self.emit(Stage::RoundStart);

        let interval = self.config.spin_speed_ms();
        let handles = std::array::from_fn(|i| {
            let generation = self.reels[i].start();
            self.emit(Stage::ReelSpinning {
                reel_index: i as u8,
            });
            TickHandle::new(i, generation, interval)
        });

        log::debug!(
            "round {} started at {:.2}s per tick",
            self.round_count,
            self.config.spin_speed
        );
        Some(handles)
    }

    /// Deliver a scheduled tick
    ///
    /// The handle is validated at fire time: a reel stopped (or reset into
    /// a newer round) since scheduling makes the tick a no-op. A live tick
    /// advances the reel one step and returns the re-armed handle for the
    /// next interval.
    pub fn tick(&mut self, handle: TickHandle) -> Option<TickHandle> {
        let reel = self.reels.get_mut(handle.reel())?;
        if !reel.accepts_tick(handle.generation()) {
            return None;
        }
        reel.advance();
        self.clock.observe(handle.due_ms());
        Some(handle.rearm(self.config.spin_speed_ms()))
    }

    /// Stop one reel
    ///
    /// A no-op (`None` without evaluation) unless that reel is spinning.
    /// Stopping the last spinning reel evaluates the round exactly once
    /// and returns the result.
    pub fn stop_reel(&mut self, reel_index: usize) -> Option<RoundResult> {
        if self.phase != RoundPhase::Spinning {
            return None;
        }
        let reel = self.reels.get_mut(reel_index)?;
        if !reel.spinning {
            return None;
        }

        reel.stop();
        let value = reel.value;
        self.emit(Stage::ReelStop {
            reel_index: reel_index as u8,
            value,
        });
        log::debug!("reel {} stopped on {}", reel_index, value);

        if self.reels.iter().any(|r| r.spinning) {
            return None;
        }
        Some(self.evaluate_round())
    }

    /// Reset round state
    ///
    /// From `GameOver` this starts a fresh session: score and failure
    /// count are cleared. From `Idle` only the reels return to the
    /// starting triple and the score survives. A no-op while spinning.
    pub fn reset_round(&mut self) {
        match self.phase {
            RoundPhase::Spinning => {}
            RoundPhase::GameOver => {
                self.score = 0;
                self.failure_count = 0;
                self.reset_reels();
                self.phase = RoundPhase::Idle;
                self.emit(Stage::SessionReset);
                log::debug!("session reset after game over");
            }
            RoundPhase::Idle => self.reset_reels(),
        }
    }

    fn evaluate_round(&mut self) -> RoundResult {
        self.emit(Stage::EvaluateRound);

        let values = self.reel_values();
        let award = self.config.paytable.evaluate(values, &self.symbols);
        self.stats.rounds_played += 1;

        match award {
            Some(award) => self.apply_win(award),
            None => self.apply_loss(),
        }

        let game_over = self.failure_count >= self.config.max_failures;
        if game_over {
            // Reel and score reset deferred until the player acknowledges
            self.phase = RoundPhase::GameOver;
            self.stats.game_overs += 1;
            self.emit(Stage::GameOver {
                final_score: self.score,
            });
            log::info!("game over at {} points", self.score);
        } else {
            self.reset_reels();
            self.phase = RoundPhase::Idle;
        }

        RoundResult {
            round_id: format!("round-{:04}", self.round_count),
            values,
            award,
            failure_count: self.failure_count,
            score: self.score,
            game_over,
        }
    }

    fn apply_win(&mut self, award: Award) {
        self.score += award.points;
        self.stats.wins += 1;
        if award.tier == AwardTier::TripleSpecial {
            self.stats.special_triples += 1;
        }
        if self.score > self.stats.best_score {
            self.stats.best_score = self.score;
        }
        self.emit(Stage::RoundWon {
            tier: award.tier,
            points: award.points,
        });
        log::info!(
            "round won: {} points ({})",
            award.points,
            award.tier.display_name()
        );
        self.maybe_record_high_score();
    }

    fn apply_loss(&mut self) {
        self.failure_count += 1;
        self.stats.losses += 1;
        self.emit(Stage::RoundLost {
            failure_count: self.failure_count,
        });
        log::debug!("round lost, failure {}", self.failure_count);
    }

    fn maybe_record_high_score(&mut self) {
        // Only the canonical recording speed counts as an official score
        if !self.config.is_record_speed() || self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        if let Err(e) = self.store.save(&self.config.high_score_key, self.high_score) {
            log::warn!("failed to persist high score: {e}");
        }
        self.emit(Stage::HighScoreUpdated {
            score: self.high_score,
        });
    }

    fn reset_reels(&mut self) {
        for (reel, &value) in self.reels.iter_mut().zip(&self.config.start_values) {
            reel.reset(value);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATE ACCESS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Current composite phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Current reel values
    pub fn reel_values(&self) -> [u8; REEL_COUNT] {
        self.reels.map(|r| r.value)
    }

    /// Is this reel spinning?
    pub fn is_spinning(&self, reel_index: usize) -> bool {
        self.reels.get(reel_index).is_some_and(|r| r.spinning)
    }

    /// Is any reel spinning?
    pub fn any_spinning(&self) -> bool {
        self.reels.iter().any(|r| r.spinning)
    }

    /// May a round start? (drives the Start control)
    pub fn can_start(&self) -> bool {
        self.phase == RoundPhase::Idle
    }

    /// May this reel be stopped? (drives the per-reel Stop controls)
    pub fn can_stop(&self, reel_index: usize) -> bool {
        self.phase == RoundPhase::Spinning && self.is_spinning(reel_index)
    }

    /// Display glyph for a reel's current value
    pub fn glyph(&self, reel_index: usize) -> Option<&'static str> {
        self.reels
            .get(reel_index)
            .map(|r| self.symbols.glyph(r.value))
    }

    /// Does this reel currently show the special glyph?
    pub fn shows_special(&self, reel_index: usize) -> bool {
        self.reels
            .get(reel_index)
            .is_some_and(|r| self.symbols.is_special(r.value))
    }

    /// Score this session
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best recorded score
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Mismatches this session
    pub fn failure_count(&self) -> u8 {
        self.failure_count
    }

    /// Has the session ended?
    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Get session stats
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STAGE OUTPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Drain the stage events buffered since the last call
    pub fn take_stages(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut self.stages)
    }

    fn emit(&mut self, stage: Stage) {
        self.stages.push(StageEvent::new(stage, self.clock.now()));
    }
}
