//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! batch-scoring runs.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. The scoring workflow ([`score`])
//! takes a batch of paired structure/confidence inputs, scores every complex
//! independently (and in parallel), records per-complex skips with typed reasons
//! instead of failing the batch, and hands the surviving results to the ranker
//! ([`rank`]) for a deterministic best-first ordering.

pub mod rank;
pub mod score;
