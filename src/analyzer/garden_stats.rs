use crate::model::{FlowerClass, GardenStats};

/// Narrative classification of a whole garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenMood {
    Vibrant,
    Challenging,
    Balanced,
    Mixed,
    Empty,
}

impl GardenMood {
    /// Checked in order: vibrant, challenging, balanced, then mixed.
    pub fn from_stats(stats: &GardenStats) -> Self {
        let total = stats.total;
        if total == 0 {
            return GardenMood::Empty;
        }
        if stats.positive_count * 10 > total * 7 {
            GardenMood::Vibrant
        } else if stats.negative_count * 10 > total * 7 {
            GardenMood::Challenging
        } else if stats.neutral_count * 2 > total {
            GardenMood::Balanced
        } else {
            GardenMood::Mixed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GardenMood::Vibrant => "vibrant",
            GardenMood::Challenging => "challenging",
            GardenMood::Balanced => "balanced",
            GardenMood::Mixed => "mixed",
            GardenMood::Empty => "empty",
        }
    }
}

pub struct GardenIndicators;

impl GardenIndicators {
    /// First matching row wins.
    pub fn classify(value: i32) -> FlowerClass {
        if value > 5 {
            FlowerClass::High
        } else if value > 0 {
            FlowerClass::Positive
        } else if value == 0 {
            FlowerClass::Neutral
        } else if value > -5 {
            FlowerClass::MildNegative
        } else {
            FlowerClass::SevereNegative
        }
    }

    /// Counts by sign, average and extremes. All zero for an empty garden.
    pub fn garden_stats(flowers: &[i32]) -> GardenStats {
        let (Some(&max_value), Some(&min_value)) = (flowers.iter().max(), flowers.iter().min()) else {
            return GardenStats::default();
        };
        let total = flowers.len();
        let sum: i64 = flowers.iter().map(|&f| i64::from(f)).sum();

        GardenStats {
            total,
            positive_count: flowers.iter().filter(|&&f| f > 0).count(),
            negative_count: flowers.iter().filter(|&&f| f < 0).count(),
            neutral_count: flowers.iter().filter(|&&f| f == 0).count(),
            average: sum as f64 / total as f64,
            max_value,
            min_value,
        }
    }

    /// Prefix sums, one longer than the input and starting at 0.
    pub fn cumulative_beauty(flowers: &[i32]) -> Vec<i64> {
        let mut running = Vec::with_capacity(flowers.len() + 1);
        running.push(0);
        let mut total = 0i64;
        for &f in flowers {
            total += i64::from(f);
            running.push(total);
        }
        running
    }

    pub fn flower_pattern(subarray: &[i32]) -> Vec<FlowerClass> {
        subarray.iter().map(|&v| Self::classify(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(GardenIndicators::classify(6), FlowerClass::High);
        assert_eq!(GardenIndicators::classify(5), FlowerClass::Positive);
        assert_eq!(GardenIndicators::classify(1), FlowerClass::Positive);
        assert_eq!(GardenIndicators::classify(0), FlowerClass::Neutral);
        assert_eq!(GardenIndicators::classify(-1), FlowerClass::MildNegative);
        assert_eq!(GardenIndicators::classify(-4), FlowerClass::MildNegative);
        assert_eq!(GardenIndicators::classify(-5), FlowerClass::SevereNegative);
        assert_eq!(GardenIndicators::classify(i32::MIN), FlowerClass::SevereNegative);
    }

    #[test]
    fn stats_over_mixed_garden() {
        let stats = GardenIndicators::garden_stats(&[2, 3, -5, 8, 0, -1]);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.positive_count, 3);
        assert_eq!(stats.negative_count, 2);
        assert_eq!(stats.neutral_count, 1);
        assert!((stats.average - 7.0 / 6.0).abs() < 1e-12);
        assert_eq!(stats.max_value, 8);
        assert_eq!(stats.min_value, -5);
    }

    #[test]
    fn stats_empty_are_zero() {
        assert_eq!(GardenIndicators::garden_stats(&[]), GardenStats::default());
    }

    #[test]
    fn cumulative_starts_at_zero() {
        assert_eq!(GardenIndicators::cumulative_beauty(&[]), vec![0]);
        assert_eq!(
            GardenIndicators::cumulative_beauty(&[1, -2, 3]),
            vec![0, 1, -1, 2]
        );
    }

    #[test]
    fn cumulative_does_not_overflow_i32() {
        let sums = GardenIndicators::cumulative_beauty(&[i32::MAX, i32::MAX]);
        assert_eq!(sums[2], 2 * i64::from(i32::MAX));
    }

    fn stats(total: usize, positive: usize, negative: usize, neutral: usize) -> GardenStats {
        GardenStats {
            total,
            positive_count: positive,
            negative_count: negative,
            neutral_count: neutral,
            ..GardenStats::default()
        }
    }

    #[test]
    fn mood_thresholds_are_strict() {
        assert_eq!(GardenMood::from_stats(&stats(10, 8, 2, 0)), GardenMood::Vibrant);
        // exactly 70% is not enough
        assert_eq!(GardenMood::from_stats(&stats(10, 7, 3, 0)), GardenMood::Mixed);
        assert_eq!(GardenMood::from_stats(&stats(10, 1, 8, 1)), GardenMood::Challenging);
        assert_eq!(GardenMood::from_stats(&stats(10, 2, 2, 6)), GardenMood::Balanced);
        assert_eq!(GardenMood::from_stats(&stats(10, 3, 2, 5)), GardenMood::Mixed);
        assert_eq!(GardenMood::from_stats(&stats(0, 0, 0, 0)), GardenMood::Empty);
    }
}
