//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent predicted
//! protein complexes, providing the foundation for all scoring operations.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual fixed-column atom records with coordinates and confidence
//! - [`chain`] - Per-chain coordinate/confidence arrays and representative-atom indices
//! - [`confidence`] - Per-complex confidence profiles (per-residue array plus summary scalars)
//! - [`complex`] - A complete prediction: identifier, structure, and confidence profile
//!
//! Residue order within a chain is insertion order from the source file and carries
//! sequential meaning throughout the scoring pipeline; these models preserve it exactly.

pub mod atom;
pub mod chain;
pub mod complex;
pub mod confidence;
