//! # Core Module
//!
//! This module provides the fundamental building blocks for representing and reading
//! predicted protein complex structures, serving as the data foundation of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atom records,
//!   chains, structures, and per-complex confidence profiles
//! - **File I/O** ([`io`]) - Reading the fixed-column structure format and JSON
//!   confidence reports, and writing CSV result tables

pub mod io;
pub mod models;
