// Analyzer module: the matching-ends search plus the statistics it reports.

pub mod garden_analysis;
pub mod garden_stats;
pub mod match_groups;

// Re-export the main Analyzer implementation for ease of use.
pub use garden_analysis::{analyze, describe, Analyzer, GardenAnalyzer};
pub use garden_stats::{GardenIndicators, GardenMood};
