//! Core types and definitions for the DRACONID simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, enums, data types, error types, and progression events.
//! It has no dependency on any UI runtime.

pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod types;
