//! Defense session: the stateful facade over generation and resolution.
//!
//! Owns the seeded RNG, the current scenario, and the selected strategy.
//! Mission execution requires both to be present; the session enforces
//! that precondition so the pure functions never see a half-built state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use draconid_core::enums::{Difficulty, StrategyKind};
use draconid_core::error::MissionError;
use draconid_core::types::{MissionOutcome, Scenario};

use crate::mission::{resolve_mission, strategy_profile};
use crate::scenario;

/// Configuration for starting a defense session.
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same scenario/outcome stream.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A defense-panel session: scenario generation plus mission execution.
pub struct DefenseSession {
    rng: ChaCha8Rng,
    current_scenario: Option<Scenario>,
    selected_strategy: Option<StrategyKind>,
}

impl DefenseSession {
    /// Create a new session with the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            current_scenario: None,
            selected_strategy: None,
        }
    }

    /// Generate a new scenario, superseding any previous one.
    pub fn generate_scenario(&mut self, difficulty: Difficulty) -> &Scenario {
        let scenario = scenario::generate(difficulty, &mut self.rng);
        self.current_scenario.insert(scenario)
    }

    /// Select the defense strategy for the next mission execution.
    pub fn select_strategy(&mut self, kind: StrategyKind) {
        self.selected_strategy = Some(kind);
    }

    /// The currently generated scenario, if any.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current_scenario.as_ref()
    }

    /// The currently selected strategy, if any.
    pub fn selected_strategy(&self) -> Option<StrategyKind> {
        self.selected_strategy
    }

    /// Execute the mission with the selected strategy against the current
    /// scenario. Fails, mutating nothing, when either is missing.
    pub fn execute_mission(&mut self) -> Result<MissionOutcome, MissionError> {
        let kind = self
            .selected_strategy
            .ok_or(MissionError::NoStrategySelected)?;
        let scenario = self
            .current_scenario
            .as_ref()
            .ok_or(MissionError::NoScenarioGenerated)?;

        let strategy = strategy_profile(kind);
        Ok(resolve_mission(&strategy, scenario, &mut self.rng))
    }
}
