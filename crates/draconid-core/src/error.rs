//! Error types surfaced by the simulator core.

use thiserror::Error;

/// Invalid physical parameter passed to the impact calculator.
///
/// Always surfaced synchronously; never silently clamped. The survival
/// factor ceiling and the success-chance clamp are designed algorithm
/// steps, not error recovery, and do not produce these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("asteroid diameter must be positive, got {0} m")]
    NonPositiveDiameter(f64),
    #[error("entry velocity must be positive, got {0} km/s")]
    NonPositiveVelocity(f64),
    #[error("material density must be positive, got {0} kg/m3")]
    NonPositiveDensity(f64),
    #[error("entry angle must be in (0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),
}

/// Mission resolution attempted before its preconditions were met.
/// The operation aborts with no partial state mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("no defense strategy selected")]
    NoStrategySelected,
    #[error("no scenario generated")]
    NoScenarioGenerated,
}
