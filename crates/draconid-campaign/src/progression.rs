//! Progression ledger: XP, rank, and one-shot achievements.

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use draconid_core::constants::*;
use draconid_core::enums::{Achievement, Rank};
use draconid_core::events::ProgressEvent;
use draconid_core::types::MissionOutcome;

/// Display profile and XP reward for an achievement.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementProfile {
    pub display_name: &'static str,
    pub description: &'static str,
    pub xp: u32,
}

/// Get the profile for a given achievement.
pub fn achievement_profile(achievement: Achievement) -> AchievementProfile {
    match achievement {
        Achievement::FirstSimulation => AchievementProfile {
            display_name: "Dragon Hatchling",
            description: "Complete your first impact simulation",
            xp: 50,
        },
        Achievement::SimulationExpert => AchievementProfile {
            display_name: "Dragon Trainer",
            description: "Run 10 impact simulations",
            xp: 100,
        },
        Achievement::CityKiller => AchievementProfile {
            display_name: "City Dragon",
            description: "Simulate a 1km+ asteroid impact",
            xp: 75,
        },
        Achievement::ExtinctionEvent => AchievementProfile {
            display_name: "Ancient Dragon",
            description: "Simulate a 10km+ extinction-level event",
            xp: 150,
        },
        Achievement::EarthDefender => AchievementProfile {
            display_name: "Guardian Dragon",
            description: "Successfully complete a defense mission",
            xp: 200,
        },
        Achievement::ModuleMaster => AchievementProfile {
            display_name: "Wise Dragon",
            description: "Complete all lessons in a module",
            xp: 300,
        },
        Achievement::KnowledgeSeeker => AchievementProfile {
            display_name: "Scholar Dragon",
            description: "Earn 1000 total XP",
            xp: 500,
        },
        Achievement::ScenarioSurvivor => AchievementProfile {
            display_name: "Battle-Tested Dragon",
            description: "Complete 5 defense scenarios",
            xp: 250,
        },
    }
}

/// Cumulative player progression. Mutated only through the award and
/// record operations below; rank is always derived from xp, never stored.
///
/// Single-threaded by contract: a host serving multiple callers wraps
/// each ledger in its own lock.
#[derive(Debug, Default)]
pub struct ProgressionLedger {
    xp: u64,
    simulation_count: u32,
    /// Missions executed this session. Not persisted: the saved document
    /// has no field for it, so the scenario-survivor counter restarts per
    /// session while the achievement itself persists once granted.
    missions_completed: u32,
    achievements: BTreeSet<Achievement>,
    events: Vec<ProgressEvent>,
}

impl ProgressionLedger {
    /// Fresh zero-progress ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted values. Rank and event state are
    /// derived, not restored.
    pub fn from_parts(
        xp: u64,
        simulation_count: u32,
        achievements: impl IntoIterator<Item = Achievement>,
    ) -> Self {
        Self {
            xp,
            simulation_count,
            missions_completed: 0,
            achievements: achievements.into_iter().collect(),
            events: Vec::new(),
        }
    }

    // --- Read accessors ---

    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Current rank, recomputed from xp on every call.
    pub fn rank(&self) -> Rank {
        Rank::for_xp(self.xp)
    }

    pub fn simulation_count(&self) -> u32 {
        self.simulation_count
    }

    pub fn achievements(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.achievements.iter().copied()
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<ProgressEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Mutations ---

    /// Add XP. Emits an XpAwarded event, a RankChanged event when a
    /// threshold is crossed upward, and checks the knowledge-seeker
    /// achievement against the new total.
    pub fn award_xp(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }

        let rank_before = self.rank();
        self.xp += amount as u64;
        let rank_after = self.rank();

        self.events.push(ProgressEvent::XpAwarded {
            amount,
            total: self.xp,
        });

        if rank_after > rank_before {
            debug!("rank up: {:?} -> {:?} at {} XP", rank_before, rank_after, self.xp);
            self.events.push(ProgressEvent::RankChanged {
                from: rank_before,
                to: rank_after,
            });
        }

        if self.xp >= KNOWLEDGE_SEEKER_XP {
            self.award_achievement(Achievement::KnowledgeSeeker);
        }
    }

    /// Grant an achievement. Idempotent: a held achievement is a complete
    /// no-op (no XP re-grant, no event).
    pub fn award_achievement(&mut self, achievement: Achievement) {
        if !self.achievements.insert(achievement) {
            return;
        }

        let profile = achievement_profile(achievement);
        debug!("achievement: {} (+{} XP)", profile.display_name, profile.xp);
        self.events.push(ProgressEvent::AchievementGranted {
            achievement,
            xp: profile.xp,
        });
        self.award_xp(profile.xp);
    }

    /// Record one impact simulation run and check count- and size-based
    /// achievements against it.
    pub fn record_simulation_run(&mut self, diameter_m: f64) {
        self.simulation_count += 1;

        if self.simulation_count == 1 {
            self.award_achievement(Achievement::FirstSimulation);
        }
        if self.simulation_count == SIMULATION_EXPERT_COUNT {
            self.award_achievement(Achievement::SimulationExpert);
        }
        if diameter_m >= CITY_KILLER_DIAMETER_M {
            self.award_achievement(Achievement::CityKiller);
        }
        if diameter_m >= EXTINCTION_DIAMETER_M {
            self.award_achievement(Achievement::ExtinctionEvent);
        }
    }

    /// Record one executed defense mission. A success grants the
    /// earth-defender achievement; the fifth completed mission, won or
    /// lost, grants scenario-survivor.
    pub fn record_mission_outcome(&mut self, outcome: &MissionOutcome) {
        self.missions_completed += 1;

        if outcome.succeeded {
            self.award_achievement(Achievement::EarthDefender);
        }
        if self.missions_completed == SCENARIO_SURVIVOR_COUNT {
            self.award_achievement(Achievement::ScenarioSurvivor);
        }
    }
}
