//! Metrics aggregation module
//!
//! Merges per-document class LOC into one report for the whole run.

pub mod aggregate;

pub use aggregate::LocAggregator;
