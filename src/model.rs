// Core structs: GardenResult, GardenStats, Candidate, error types
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Marker text used when no value repeats in the garden.
pub const NO_VALID_GARDEN: &str = "No valid garden";

/// Best matching-ends sum, or the "no valid garden" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxBeauty {
    Sum(i64),
    NoValidGarden,
}

impl MaxBeauty {
    pub fn sum(&self) -> Option<i64> {
        match self {
            MaxBeauty::Sum(s) => Some(*s),
            MaxBeauty::NoValidGarden => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, MaxBeauty::Sum(_))
    }
}

impl fmt::Display for MaxBeauty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxBeauty::Sum(s) => write!(f, "{}", s),
            MaxBeauty::NoValidGarden => f.write_str(NO_VALID_GARDEN),
        }
    }
}

impl Serialize for MaxBeauty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxBeauty::Sum(s) => serializer.serialize_i64(*s),
            MaxBeauty::NoValidGarden => serializer.serialize_str(NO_VALID_GARDEN),
        }
    }
}

/// Classification of a single beauty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowerClass {
    High,
    Positive,
    Neutral,
    MildNegative,
    SevereNegative,
}

impl FlowerClass {
    pub fn tag(&self) -> &'static str {
        match self {
            FlowerClass::High => "high",
            FlowerClass::Positive => "positive",
            FlowerClass::Neutral => "neutral",
            FlowerClass::MildNegative => "mild-negative",
            FlowerClass::SevereNegative => "severe-negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            FlowerClass::High => "🌹",
            FlowerClass::Positive => "🌷",
            FlowerClass::Neutral => "🌱",
            FlowerClass::MildNegative => "🥀",
            FlowerClass::SevereNegative => "🌵",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GardenStats {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub average: f64,
    pub max_value: i32,
    pub min_value: i32,
}

/// One matching-ends range considered during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub sum: i64,
    pub subarray: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualCell {
    pub position: usize,
    pub beauty: i32,
    pub selected: bool,
    pub emoji_class: FlowerClass,
}

/// Everything `analyze` computes for one garden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenResult {
    pub max_beauty: MaxBeauty,
    pub best_subarray: Vec<i32>,
    pub start_index: usize,
    pub end_index: usize,
    pub garden_stats: GardenStats,
    pub cumulative_beauty: Vec<i64>,
    pub visual_data: Vec<VisualCell>,
    pub all_valid_subarrays: Vec<Candidate>,
    pub flower_pattern: Vec<FlowerClass>,
}

impl GardenResult {
    /// Result for an empty garden: zero sum, zeroed statistics.
    pub fn empty() -> Self {
        Self {
            max_beauty: MaxBeauty::Sum(0),
            best_subarray: Vec::new(),
            start_index: 0,
            end_index: 0,
            garden_stats: GardenStats::default(),
            cumulative_beauty: vec![0],
            visual_data: Vec::new(),
            all_valid_subarrays: Vec::new(),
            flower_pattern: Vec::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter at least one flower beauty value")]
    Empty,
    #[error("invalid flower beauty '{token}' at position {position}: comma-separated integers only")]
    InvalidToken { token: String, position: usize },
    #[error("too many flowers: {count} given, at most {limit} allowed")]
    TooManyFlowers { count: usize, limit: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum GardenError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown example garden '{0}'")]
    UnknownPreset(String),
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
