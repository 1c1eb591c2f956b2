//! Defense strategy catalog and mission resolution.

use log::debug;
use rand::Rng;

use draconid_core::constants::{
    DIFFICULTY_PENALTY_PERCENT, SUCCESS_CHANCE_MAX, SUCCESS_CHANCE_MIN,
};
use draconid_core::enums::StrategyKind;
use draconid_core::types::{DefenseStrategy, MissionOutcome, Scenario};

use crate::scenario::complication_profile;

/// Get the strategy profile for a given kind.
pub fn strategy_profile(kind: StrategyKind) -> DefenseStrategy {
    match kind {
        StrategyKind::Kinetic => DefenseStrategy {
            kind,
            name: "Dragon's Claw Strike",
            description: "Channel kinetic energy like a mighty dragon's claw impact",
            base_success_rate: 85.0,
            lead_time: "6+ months",
            cost: "$300-500M",
            real_example: "NASA DART mission successfully altered Dimorphos orbit by 32 minutes",
            advantages: &["Proven technology", "Precise targeting", "No radioactive debris"],
            disadvantages: &[
                "Long lead time needed",
                "Limited to smaller asteroids",
                "Single attempt",
            ],
        },
        StrategyKind::GravityTractor => DefenseStrategy {
            kind,
            name: "Dragon's Gravitational Pull",
            description: "Use gentle dragon magic to slowly guide asteroids away",
            base_success_rate: 70.0,
            lead_time: "5+ years",
            cost: "$500M-1B",
            real_example: "Theoretical concept studied by ESA and NASA, never flight-tested",
            advantages: &[
                "Very precise control",
                "No fragmentation risk",
                "Continuous adjustment",
            ],
            disadvantages: &["Extremely long lead time", "High cost", "Untested technology"],
        },
        StrategyKind::Nuclear => DefenseStrategy {
            kind,
            name: "Dragon's Breath",
            description: "Unleash devastating dragon fire to vaporize asteroid surface",
            base_success_rate: 90.0,
            lead_time: "6+ months",
            cost: "$1-2B",
            real_example: "Studied in classified programs, complex international treaties required",
            advantages: &[
                "Most powerful option",
                "Effective on large objects",
                "Short warning time",
            ],
            disadvantages: &[
                "Political complications",
                "Radioactive debris",
                "Difficult targeting",
            ],
        },
        StrategyKind::Evacuation => DefenseStrategy {
            kind,
            name: "Dragon's Protective Shield",
            description: "Protect populations under mighty dragon wings",
            base_success_rate: 60.0,
            lead_time: "Weeks",
            cost: "$10B+ economic impact",
            real_example: "Standard disaster preparedness protocols, saves lives but prevents no damage",
            advantages: &["Always available", "Saves lives", "Proven methods"],
            disadvantages: &[
                "No damage prevention",
                "Massive disruption",
                "Limited effectiveness",
            ],
        },
    }
}

/// Effective success chance for a strategy against a scenario, in percent,
/// clamped to [10, 95].
///
/// The scenario's aggregate difficulty is penalized once, and each selected
/// complication's delta is looked up fresh from the catalog and penalized
/// again on top. That double-count is the simulator's historical tuning and
/// is kept as-is.
pub fn effective_success_chance(strategy: &DefenseStrategy, scenario: &Scenario) -> f64 {
    let mut chance = strategy.base_success_rate;

    chance -= scenario.total_difficulty * DIFFICULTY_PENALTY_PERCENT;

    for &complication in &scenario.complications {
        chance -= complication_profile(complication).difficulty_delta * DIFFICULTY_PENALTY_PERCENT;
    }

    chance.clamp(SUCCESS_CHANCE_MIN, SUCCESS_CHANCE_MAX)
}

/// Resolve a single mission attempt: one uniform roll in [0, 100) against
/// the effective success chance. Deterministic under a seeded rng;
/// no state outside the returned outcome.
pub fn resolve_mission<R: Rng + ?Sized>(
    strategy: &DefenseStrategy,
    scenario: &Scenario,
    rng: &mut R,
) -> MissionOutcome {
    let success_chance = effective_success_chance(strategy, scenario);
    let roll: f64 = rng.gen_range(0.0..100.0);
    let succeeded = roll < success_chance;

    debug!(
        "mission: {} vs {} -> {:.1}% chance, roll {:.1}, {}",
        strategy.name,
        scenario.title,
        success_chance,
        roll,
        if succeeded { "success" } else { "failure" }
    );

    MissionOutcome {
        succeeded,
        success_chance,
    }
}
