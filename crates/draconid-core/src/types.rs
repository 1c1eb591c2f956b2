//! Data types shared between the physics, scenario, and campaign crates.

use serde::{Deserialize, Serialize};

use crate::enums::{AsteroidArchetype, Complication, MaterialKind, StrategyKind, TimeFrame};

/// Input parameters for one impact calculation. Transient, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Asteroid diameter in meters (> 0).
    pub diameter_m: f64,
    /// Entry velocity in km/s (> 0).
    pub velocity_km_s: f64,
    /// Entry angle in degrees, measured from horizontal, in (0, 90].
    pub entry_angle_deg: f64,
    /// Bulk composition.
    pub material: MaterialKind,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter_m: 100.0,
            velocity_km_s: 20.0,
            entry_angle_deg: 45.0,
            material: MaterialKind::Stone,
        }
    }
}

/// Derived impact effects. Immutable, recomputed on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Raw kinetic energy at atmospheric entry (J).
    pub kinetic_energy_j: f64,
    /// Energy surviving to the surface (J). Always <= kinetic_energy_j.
    pub effective_energy_j: f64,
    /// Final crater diameter (km).
    pub crater_diameter_km: f64,
    /// Fireball radius (km).
    pub fireball_radius_km: f64,
    /// Equivalent seismic magnitude. May be small for minor events.
    pub seismic_magnitude: f64,
    /// Estimated casualties in the target region.
    pub estimated_casualties: u64,
}

/// A populated region used for casualty estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRegion {
    pub name: String,
    /// Average population density (people per km², >= 0).
    pub population_density_per_km2: f64,
}

/// A generated threat scenario. Immutable once generated; the next
/// generation call supersedes it rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub description: String,
    pub time_frame: TimeFrame,
    /// Human-readable warning time ("6 months", "10 years", ...).
    pub lead_time: String,
    /// Threat asteroid diameter (meters).
    pub asteroid_size_m: u32,
    pub archetype: AsteroidArchetype,
    /// Distinct complications, at most three.
    pub complications: Vec<Complication>,
    /// Sum of the time frame's, archetype's, and complications' deltas.
    pub total_difficulty: f64,
    pub objectives: Vec<String>,
}

/// A defense strategy profile. Only `base_success_rate` feeds the resolver;
/// the rest is briefing material. Serialize-only: strategies are catalog
/// data sent to the shell, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefenseStrategy {
    pub kind: StrategyKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Baseline success chance in percent, [0, 100].
    pub base_success_rate: f64,
    pub lead_time: &'static str,
    pub cost: &'static str,
    pub real_example: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

/// Outcome of one mission execution. Ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub succeeded: bool,
    /// Effective success chance after difficulty penalties, clamped [10, 95].
    pub success_chance: f64,
}
