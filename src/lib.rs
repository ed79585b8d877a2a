//! Matching-ends garden analysis: finds the best-sum run of flowers whose first
//! and last beauty values are equal, plus the statistics a dashboard shows for it.

pub mod analyzer;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod model;
pub mod parser;
pub mod source;

pub use analyzer::{analyze, describe, Analyzer, GardenAnalyzer};
pub use model::{GardenResult, GardenStats, MaxBeauty};
