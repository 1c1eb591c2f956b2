//! Procedural threat scenario generation.
//!
//! Consolidates the fixed catalogs (time frames, archetypes,
//! complications) as per-variant profiles, and composes a `Scenario` from
//! weighted random draws plus the difficulty knob. Generation has no side
//! effects: catalogs are never mutated, and the previous scenario is
//! superseded by the caller, not edited.

use log::debug;
use rand::Rng;
use serde::Serialize;

use draconid_core::constants::{
    MAX_COMPLICATIONS, PANIC_OBJECTIVE_THRESHOLD, SCENARIO_BASE_SIZE_M, SCENARIO_SIZE_SPREAD_M,
};
use draconid_core::enums::{AsteroidArchetype, Complication, Difficulty, TimeFrame};
use draconid_core::types::Scenario;

/// Profile for a warning-time frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeFrameProfile {
    pub display_name: &'static str,
    /// Human-readable warning time.
    pub lead_time: &'static str,
    pub difficulty_delta: f64,
    pub description: &'static str,
}

/// Profile for an asteroid structural archetype.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArchetypeProfile {
    pub display_name: &'static str,
    pub difficulty_delta: f64,
    pub description: &'static str,
}

/// Profile for a scenario complication.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplicationProfile {
    pub display_name: &'static str,
    pub difficulty_delta: f64,
    pub description: &'static str,
}

/// Get the profile for a given time frame.
pub fn time_frame_profile(frame: TimeFrame) -> TimeFrameProfile {
    match frame {
        TimeFrame::LastMinuteDiscovery => TimeFrameProfile {
            display_name: "Last-Minute Discovery",
            lead_time: "6 months",
            difficulty_delta: 0.9,
            description: "Recently detected object on collision course",
        },
        TimeFrame::StandardWarning => TimeFrameProfile {
            display_name: "Standard Warning",
            lead_time: "2 years",
            difficulty_delta: 0.6,
            description: "Adequate time for careful mission planning",
        },
        TimeFrame::LongTermThreat => TimeFrameProfile {
            display_name: "Long-Term Threat",
            lead_time: "10 years",
            difficulty_delta: 0.3,
            description: "Plenty of time for multiple deflection attempts",
        },
        TimeFrame::GenerationalChallenge => TimeFrameProfile {
            display_name: "Generational Challenge",
            lead_time: "50 years",
            difficulty_delta: 0.4,
            description: "Multiple generations to solve the problem",
        },
    }
}

/// Get the profile for a given archetype.
pub fn archetype_profile(archetype: AsteroidArchetype) -> ArchetypeProfile {
    match archetype {
        AsteroidArchetype::RubblePile => ArchetypeProfile {
            display_name: "Rubble Pile",
            difficulty_delta: 0.2,
            description: "Loose collection of rocks and boulders",
        },
        AsteroidArchetype::SolidMonolith => ArchetypeProfile {
            display_name: "Solid Monolith",
            difficulty_delta: -0.1,
            description: "Single, cohesive rocky body",
        },
        AsteroidArchetype::BinarySystem => ArchetypeProfile {
            display_name: "Binary System",
            difficulty_delta: 0.4,
            description: "Two asteroids orbiting each other",
        },
        AsteroidArchetype::CometLike => ArchetypeProfile {
            display_name: "Comet-like",
            difficulty_delta: 0.3,
            description: "Volatile-rich with outgassing",
        },
        AsteroidArchetype::IronRich => ArchetypeProfile {
            display_name: "Iron-Rich",
            difficulty_delta: 0.1,
            description: "Dense metallic composition",
        },
        AsteroidArchetype::FastRotator => ArchetypeProfile {
            display_name: "Fast Rotator",
            difficulty_delta: 0.2,
            description: "Spinning rapidly, possibly unstable",
        },
    }
}

/// Get the profile for a given complication.
pub fn complication_profile(complication: Complication) -> ComplicationProfile {
    match complication {
        Complication::BudgetConstraints => ComplicationProfile {
            display_name: "Budget Constraints",
            difficulty_delta: 0.2,
            description: "Limited funding available for mission",
        },
        Complication::InternationalTensions => ComplicationProfile {
            display_name: "International Tensions",
            difficulty_delta: 0.3,
            description: "Political disagreements hinder cooperation",
        },
        Complication::TechnologyFailure => ComplicationProfile {
            display_name: "Technology Failure",
            difficulty_delta: 0.4,
            description: "Primary deflection system malfunctions",
        },
        Complication::MultipleObjects => ComplicationProfile {
            display_name: "Multiple Objects",
            difficulty_delta: 0.5,
            description: "Asteroid breaks into several pieces",
        },
        Complication::UnknownComposition => ComplicationProfile {
            display_name: "Unknown Composition",
            difficulty_delta: 0.3,
            description: "Asteroid material properties uncertain",
        },
        Complication::OrbitalResonance => ComplicationProfile {
            display_name: "Orbital Resonance",
            difficulty_delta: 0.3,
            description: "Complex gravitational interactions",
        },
        Complication::MediaPanic => ComplicationProfile {
            display_name: "Media Panic",
            difficulty_delta: 0.2,
            description: "Public fear complicates response",
        },
        Complication::LaunchWindowConstraints => ComplicationProfile {
            display_name: "Launch Window Constraints",
            difficulty_delta: 0.3,
            description: "Limited opportunities for missions",
        },
    }
}

/// Mission code names, drawn uniformly for scenario titles.
const SCENARIO_TITLES: [&str; 5] = [
    "Operation Dragon Shield",
    "Project Cosmic Guardian",
    "Mission Stellar Defender",
    "Initiative Sky Warden",
    "Campaign Star Protector",
];

/// Generate a fresh threat scenario.
///
/// Randomized but reproducible: the random source is an explicit
/// parameter, so a seeded generator yields the same scenario sequence.
pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Scenario {
    let multiplier = difficulty.multiplier();

    let time_frame = TimeFrame::ALL[rng.gen_range(0..TimeFrame::ALL.len())];
    let archetype = AsteroidArchetype::ALL[rng.gen_range(0..AsteroidArchetype::ALL.len())];

    // 1-3 base complications, plus one per whole difficulty multiplier,
    // capped and sampled without replacement.
    let count = (rng.gen_range(1..=3) + multiplier as usize).min(MAX_COMPLICATIONS);
    let mut pool = Complication::ALL.to_vec();
    let mut complications = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..pool.len());
        complications.push(pool.swap_remove(index));
    }

    let base_size = SCENARIO_BASE_SIZE_M + rng.gen_range(0.0..SCENARIO_SIZE_SPREAD_M);
    let asteroid_size_m = (base_size * (0.5 + multiplier * 0.5)).floor() as u32;

    let frame = time_frame_profile(time_frame);
    let shape = archetype_profile(archetype);
    let total_difficulty = frame.difficulty_delta
        + shape.difficulty_delta
        + complications
            .iter()
            .map(|&c| complication_profile(c).difficulty_delta)
            .sum::<f64>();

    let title = SCENARIO_TITLES[rng.gen_range(0..SCENARIO_TITLES.len())].to_string();
    let description = format!(
        "A {}m {} asteroid has been detected on a collision course with Earth. {}",
        asteroid_size_m,
        shape.display_name.to_lowercase(),
        frame.description
    );

    let objectives = build_objectives(total_difficulty, &complications);

    debug!(
        "scenario: {title} ({:?}, {}m, {} complications, difficulty {total_difficulty:.2})",
        difficulty,
        asteroid_size_m,
        complications.len()
    );

    Scenario {
        title,
        description,
        time_frame,
        lead_time: frame.lead_time.to_string(),
        asteroid_size_m,
        archetype,
        complications,
        total_difficulty,
        objectives,
    }
}

/// Three baseline objectives, plus conditional extras.
fn build_objectives(total_difficulty: f64, complications: &[Complication]) -> Vec<String> {
    let mut objectives = vec![
        "Assess threat level and impact consequences".to_string(),
        "Select optimal deflection strategy".to_string(),
        "Coordinate international response efforts".to_string(),
    ];

    if total_difficulty > PANIC_OBJECTIVE_THRESHOLD {
        objectives.push("Manage public communication and panic".to_string());
    }

    if complications.contains(&Complication::BudgetConstraints) {
        objectives.push("Secure adequate funding for mission".to_string());
    }

    objectives
}
