//! Player progression for DRACONID.
//!
//! `ProgressionLedger` is pure state-transition logic over an XP counter:
//! rank derivation, one-shot achievements, and run counting. Persistence
//! writes the ledger as a small JSON document and recovers to defaults on
//! any read failure.

pub mod persistence;
pub mod progression;

pub use progression::ProgressionLedger;
