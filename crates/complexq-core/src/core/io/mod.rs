//! Provides input/output functionality for the prediction file formats.
//!
//! This module contains the fixed-column structure-record parser, the JSON
//! confidence-report reader, and the CSV writer used to export ranked batch
//! results.

pub mod confidence;
pub mod pdb;
pub mod report;
