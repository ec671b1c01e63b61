//! # complexq Core Library
//!
//! A library for scoring predicted multi-chain protein complex structures. Given a
//! predicted structure and its per-residue confidence profile, it estimates how likely
//! the predicted inter-chain interfaces are correct (pDockQ for two-chain complexes,
//! mpDockQ for larger assemblies) and ranks a batch of predictions best-first.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Structure`,
//!   `Chain`, `ConfidenceReport`) and I/O utilities for the fixed-column structure
//!   format, JSON confidence reports, and CSV result tables.
//!
//! - **[`scoring`]: The Logic Core.** Pure scoring mathematics: inter-chain contact
//!   detection, the raw interface-score formulas, and the two empirically-fit
//!   logistic transforms that map raw scores onto the bounded quality estimates.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   `scoring` and `core` together to score whole batches of predicted complexes in
//!   parallel and rank the results, providing a simple entry point for end-users of
//!   the library.

pub mod core;
pub mod scoring;
pub mod workflows;
