//! Physics constants and tuning parameters.

// --- Energy conversions ---

/// Joules per ton of TNT equivalent.
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Joules per megaton of TNT equivalent.
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

// --- Impact physics ---

/// Earth surface gravity (m/s²).
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Average target rock density for crater scaling (kg/m³).
pub const TARGET_ROCK_DENSITY: f64 = 2650.0;

/// Crater scaling constant (gravity-regime pi-scaling, calibrated).
pub const CRATER_SCALING_K: f64 = 1.161;

/// Energy exponent in the crater scaling law.
pub const CRATER_ENERGY_EXPONENT: f64 = 0.22;

/// Fireball radius coefficient (applied to TNT-ton equivalent).
pub const FIREBALL_COEFFICIENT: f64 = 0.28;

/// Fireball radius energy exponent.
pub const FIREBALL_ENERGY_EXPONENT: f64 = 0.33;

/// Minimum energy for the seismic magnitude log (J). Prevents log(0).
pub const SEISMIC_ENERGY_FLOOR: f64 = 1e6;

/// Seismic magnitude energy offset (Gutenberg-Richter style).
pub const SEISMIC_OFFSET: f64 = 4.8;

/// Seismic magnitude divisor.
pub const SEISMIC_DIVISOR: f64 = 1.5;

/// Denominator of the atmospheric penetration saturation curve.
/// `diameter^1.5 * velocity_km_s * survivability / this`, capped at 1.
pub const SURVIVAL_SATURATION: f64 = 1000.0;

// --- Casualty rings ---

/// Direct-kill ring radius as a fraction of the fireball radius.
pub const DIRECT_KILL_RING: f64 = 0.3;

/// Severe-injury ring radius as a fraction of the fireball radius.
pub const SEVERE_INJURY_RING: f64 = 0.6;

/// Light-injury ring radius as a fraction of the fireball radius.
pub const LIGHT_INJURY_RING: f64 = 1.0;

/// Casualty fraction inside the direct-kill ring.
pub const DIRECT_KILL_RATE: f64 = 0.9;

/// Casualty fraction in the severe-injury annulus.
pub const SEVERE_INJURY_RATE: f64 = 0.7;

/// Casualty fraction in the light-injury annulus.
pub const LIGHT_INJURY_RATE: f64 = 0.3;

/// Population density used for regions not in the lookup table (per km²).
pub const DEFAULT_POPULATION_DENSITY: f64 = 50.0;

// --- Scenario generation ---

/// Minimum base asteroid size before difficulty scaling (meters).
pub const SCENARIO_BASE_SIZE_M: f64 = 100.0;

/// Random spread added to the base asteroid size (meters).
pub const SCENARIO_SIZE_SPREAD_M: f64 = 400.0;

/// Maximum complications in a single scenario.
pub const MAX_COMPLICATIONS: usize = 3;

/// Total difficulty above which the panic-management objective is added.
pub const PANIC_OBJECTIVE_THRESHOLD: f64 = 1.0;

// --- Mission resolution ---

/// Success-percent penalty per point of difficulty.
pub const DIFFICULTY_PENALTY_PERCENT: f64 = 10.0;

/// Lower clamp on the effective success chance (percent).
pub const SUCCESS_CHANCE_MIN: f64 = 10.0;

/// Upper clamp on the effective success chance (percent).
pub const SUCCESS_CHANCE_MAX: f64 = 95.0;

// --- Progression ---

/// Ascending XP thresholds for each rank, Hatchling through Legendary.
pub const RANK_XP_THRESHOLDS: [u64; 6] = [0, 200, 500, 1000, 2000, 5000];

/// Total XP that triggers the knowledge-seeker achievement.
pub const KNOWLEDGE_SEEKER_XP: u64 = 1000;

/// Simulated diameter that triggers the city-killer achievement (meters).
pub const CITY_KILLER_DIAMETER_M: f64 = 1000.0;

/// Simulated diameter that triggers the extinction-event achievement (meters).
pub const EXTINCTION_DIAMETER_M: f64 = 10_000.0;

/// Simulation count that triggers the simulation-expert achievement.
pub const SIMULATION_EXPERT_COUNT: u32 = 10;

/// Completed-mission count that triggers the scenario-survivor achievement.
pub const SCENARIO_SURVIVOR_COUNT: u32 = 5;
