//! Impact physics for DRACONID.
//!
//! Pure, deterministic scaling-law calculations: kinetic energy,
//! atmospheric survival, crater diameter, fireball radius, seismic
//! magnitude, and casualty estimation. No ambient state, no randomness.

pub mod casualty;
pub mod impact;
pub mod materials;
pub mod presets;
pub mod units;

pub use impact::compute_impact;

#[cfg(test)]
mod proptest_impact;
