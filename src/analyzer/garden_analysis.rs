use crate::analyzer::garden_stats::{GardenIndicators, GardenMood};
use crate::analyzer::match_groups::MatchGroups;
use crate::model::{Candidate, GardenResult, GardenStats, MaxBeauty, VisualCell};
use tracing::debug;

/// Trait defining the interface for a garden analyzer.
pub trait Analyzer {
    fn analyze(&self, flowers: &[i32]) -> GardenResult;
    fn describe(&self, stats: &GardenStats) -> String;
}

/// Finds the best-sum range whose first and last flowers share the same beauty.
#[derive(Debug, Clone)]
pub struct GardenAnalyzer {
    top_k: usize,
}

impl Default for GardenAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GardenAnalyzer {
    pub const DEFAULT_TOP_K: usize = 5;

    pub fn new() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
        }
    }

    /// Keeps `top_k` ranked alternatives (at least one).
    pub fn with_top_k(top_k: usize) -> Self {
        Self {
            top_k: top_k.max(1),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    sum: i64,
}

impl Span {
    fn to_candidate(self, flowers: &[i32]) -> Candidate {
        Candidate {
            start: self.start,
            end: self.end,
            sum: self.sum,
            subarray: flowers[self.start..=self.end].to_vec(),
        }
    }
}

/// Highest sums first; among equal sums the earlier-found span stays ahead.
struct TopSpans {
    limit: usize,
    spans: Vec<Span>,
}

impl TopSpans {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            spans: Vec::with_capacity(limit + 1),
        }
    }

    fn offer(&mut self, span: Span) {
        let at = self.spans.partition_point(|s| s.sum >= span.sum);
        if at < self.limit {
            self.spans.insert(at, span);
            self.spans.truncate(self.limit);
        }
    }
}

impl Analyzer for GardenAnalyzer {
    /// Single left-to-right scan. Every earlier occurrence of the current value
    /// forms a candidate with the current position; a candidate replaces the
    /// best only when its sum is strictly greater.
    ///
    /// The best starts out as the highest single flower, but when no value
    /// repeats at all the result is `MaxBeauty::NoValidGarden` instead.
    fn analyze(&self, flowers: &[i32]) -> GardenResult {
        if flowers.is_empty() {
            debug!("Empty garden, nothing to analyze");
            return GardenResult::empty();
        }

        let garden_stats = GardenIndicators::garden_stats(flowers);
        let cumulative_beauty = GardenIndicators::cumulative_beauty(flowers);
        let range_sum = |start: usize, end: usize| cumulative_beauty[end + 1] - cumulative_beauty[start];

        let seed = flowers
            .iter()
            .position(|&f| f == garden_stats.max_value)
            .unwrap_or(0);
        let mut best = Span {
            start: seed,
            end: seed,
            sum: i64::from(garden_stats.max_value),
        };

        let mut groups = MatchGroups::new();
        let mut top = TopSpans::new(self.top_k);
        let mut candidates = 0usize;

        for (i, &beauty) in flowers.iter().enumerate() {
            for &prev in groups.prior_positions(beauty) {
                let span = Span {
                    start: prev,
                    end: i,
                    sum: range_sum(prev, i),
                };
                if span.sum > best.sum {
                    best = span;
                }
                top.offer(span);
                candidates += 1;
            }
            groups.record(beauty, i);
        }

        if !groups.has_repeats() {
            debug!(
                "No repeated beauty among {} flowers ({} distinct)",
                flowers.len(),
                groups.distinct_values()
            );
            return GardenResult {
                max_beauty: MaxBeauty::NoValidGarden,
                best_subarray: Vec::new(),
                start_index: 0,
                end_index: 0,
                garden_stats,
                cumulative_beauty,
                visual_data: visual_data(flowers, None),
                all_valid_subarrays: Vec::new(),
                flower_pattern: Vec::new(),
            };
        }

        debug!(
            "Scanned {} flowers, {} candidates, best {}..={} = {}",
            flowers.len(),
            candidates,
            best.start,
            best.end,
            best.sum
        );

        let best_subarray = flowers[best.start..=best.end].to_vec();
        let flower_pattern = GardenIndicators::flower_pattern(&best_subarray);

        GardenResult {
            max_beauty: MaxBeauty::Sum(best.sum),
            best_subarray,
            start_index: best.start,
            end_index: best.end,
            garden_stats,
            cumulative_beauty,
            visual_data: visual_data(flowers, Some((best.start, best.end))),
            all_valid_subarrays: top
                .spans
                .into_iter()
                .map(|s| s.to_candidate(flowers))
                .collect(),
            flower_pattern,
        }
    }

    fn describe(&self, stats: &GardenStats) -> String {
        let mood = GardenMood::from_stats(stats);
        let emoji = match mood {
            GardenMood::Vibrant => "🌈",
            GardenMood::Challenging => "🌵",
            GardenMood::Balanced => "⚖️",
            GardenMood::Mixed => "🌼",
            GardenMood::Empty => return "🏜️ An empty garden: plant some flowers first.".to_string(),
        };
        format!(
            "{} A {} garden: {} flowers, {} thriving, {} struggling and {} dormant (average beauty {:.2}).",
            emoji,
            mood.label(),
            stats.total,
            stats.positive_count,
            stats.negative_count,
            stats.neutral_count,
            stats.average
        )
    }
}

fn visual_data(flowers: &[i32], selected: Option<(usize, usize)>) -> Vec<VisualCell> {
    flowers
        .iter()
        .enumerate()
        .map(|(position, &beauty)| VisualCell {
            position,
            beauty,
            selected: selected.is_some_and(|(start, end)| (start..=end).contains(&position)),
            emoji_class: GardenIndicators::classify(beauty),
        })
        .collect()
}

/// Analyzes `flowers` with the default number of alternatives.
pub fn analyze(flowers: &[i32]) -> GardenResult {
    GardenAnalyzer::new().analyze(flowers)
}

pub fn describe(stats: &GardenStats) -> String {
    GardenAnalyzer::new().describe(stats)
}
