//! Enumeration types used throughout the simulator.
//!
//! Every catalog (materials, time frames, archetypes, complications,
//! strategies, achievements) is a closed, compile-time-known set: a Copy
//! enum here plus a profile lookup in the crate that owns the data.

use serde::{Deserialize, Serialize};

use crate::constants::RANK_XP_THRESHOLDS;

/// Asteroid bulk composition class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Rocky S-type, the most common (~75%).
    #[default]
    Stone,
    /// Metallic M-type, dense and durable.
    Iron,
    /// Carbonaceous C-type, primitive composition.
    Carbon,
    /// Cometary bodies, mostly water ice and dust.
    Ice,
}

/// Scenario difficulty setting chosen by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Multiplier applied to complication count and asteroid size.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.5,
            Difficulty::Nightmare => 2.0,
        }
    }
}

/// Warning time available before projected impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    /// Recently detected object on collision course (~6 months).
    LastMinuteDiscovery,
    /// Adequate time for careful mission planning (~2 years).
    StandardWarning,
    /// Plenty of time for multiple deflection attempts (~10 years).
    LongTermThreat,
    /// Multiple generations to solve the problem (~50 years).
    GenerationalChallenge,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 4] = [
        TimeFrame::LastMinuteDiscovery,
        TimeFrame::StandardWarning,
        TimeFrame::LongTermThreat,
        TimeFrame::GenerationalChallenge,
    ];
}

/// Structural archetype of the threat asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidArchetype {
    /// Loose collection of rocks and boulders.
    RubblePile,
    /// Single, cohesive rocky body.
    SolidMonolith,
    /// Two asteroids orbiting each other.
    BinarySystem,
    /// Volatile-rich with outgassing.
    CometLike,
    /// Dense metallic composition.
    IronRich,
    /// Spinning rapidly, possibly unstable.
    FastRotator,
}

impl AsteroidArchetype {
    pub const ALL: [AsteroidArchetype; 6] = [
        AsteroidArchetype::RubblePile,
        AsteroidArchetype::SolidMonolith,
        AsteroidArchetype::BinarySystem,
        AsteroidArchetype::CometLike,
        AsteroidArchetype::IronRich,
        AsteroidArchetype::FastRotator,
    ];
}

/// Scenario complication drawn during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complication {
    BudgetConstraints,
    InternationalTensions,
    TechnologyFailure,
    MultipleObjects,
    UnknownComposition,
    OrbitalResonance,
    MediaPanic,
    LaunchWindowConstraints,
}

impl Complication {
    pub const ALL: [Complication; 8] = [
        Complication::BudgetConstraints,
        Complication::InternationalTensions,
        Complication::TechnologyFailure,
        Complication::MultipleObjects,
        Complication::UnknownComposition,
        Complication::OrbitalResonance,
        Complication::MediaPanic,
        Complication::LaunchWindowConstraints,
    ];
}

/// Defense strategy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Kinetic impactor (DART-style).
    Kinetic,
    /// Gravity tractor station-keeping alongside the asteroid.
    GravityTractor,
    /// Standoff nuclear surface ablation.
    Nuclear,
    /// Ground evacuation and civil defense only.
    Evacuation,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Kinetic,
        StrategyKind::GravityTractor,
        StrategyKind::Nuclear,
        StrategyKind::Evacuation,
    ];
}

/// Player rank, derived purely from cumulative XP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Hatchling,
    Young,
    Adult,
    Elder,
    Ancient,
    Legendary,
}

impl Rank {
    const ORDER: [Rank; 6] = [
        Rank::Hatchling,
        Rank::Young,
        Rank::Adult,
        Rank::Elder,
        Rank::Ancient,
        Rank::Legendary,
    ];

    /// Rank for a cumulative XP total. Pure function of xp, never stored.
    pub fn for_xp(xp: u64) -> Rank {
        let mut rank = Rank::Hatchling;
        for (i, &threshold) in RANK_XP_THRESHOLDS.iter().enumerate() {
            if xp >= threshold {
                rank = Rank::ORDER[i];
            }
        }
        rank
    }

    /// Display label shown to the player.
    pub fn display_name(self) -> &'static str {
        match self {
            Rank::Hatchling => "Hatchling",
            Rank::Young => "Young Dragon",
            Rank::Adult => "Adult Dragon",
            Rank::Elder => "Elder Dragon",
            Rank::Ancient => "Ancient Dragon",
            Rank::Legendary => "Legendary Dragon",
        }
    }
}

/// One-shot achievements. Persisted by string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Achievement {
    FirstSimulation,
    SimulationExpert,
    CityKiller,
    ExtinctionEvent,
    EarthDefender,
    ModuleMaster,
    KnowledgeSeeker,
    ScenarioSurvivor,
}

impl Achievement {
    pub const ALL: [Achievement; 8] = [
        Achievement::FirstSimulation,
        Achievement::SimulationExpert,
        Achievement::CityKiller,
        Achievement::ExtinctionEvent,
        Achievement::EarthDefender,
        Achievement::ModuleMaster,
        Achievement::KnowledgeSeeker,
        Achievement::ScenarioSurvivor,
    ];

    /// Stable string id used in the persisted progress document.
    pub fn as_str(self) -> &'static str {
        match self {
            Achievement::FirstSimulation => "first_simulation",
            Achievement::SimulationExpert => "simulation_expert",
            Achievement::CityKiller => "city_killer",
            Achievement::ExtinctionEvent => "extinction_event",
            Achievement::EarthDefender => "earth_defender",
            Achievement::ModuleMaster => "module_master",
            Achievement::KnowledgeSeeker => "knowledge_seeker",
            Achievement::ScenarioSurvivor => "scenario_survivor",
        }
    }

    /// Parse a persisted id. Unknown ids return None and are skipped on load.
    pub fn parse(s: &str) -> Option<Achievement> {
        Achievement::ALL.iter().copied().find(|a| a.as_str() == s)
    }
}
