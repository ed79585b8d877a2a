use crate::model::{GardenResult, MaxBeauty};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub flowers: Vec<i32>,
    pub max_beauty: MaxBeauty,
    pub start_index: usize,
    pub end_index: usize,
}

/// Append-only, in-memory log of analyzed gardens. Nothing survives the process.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    pub fn record(&mut self, flowers: &[i32], result: &GardenResult) -> &HistoryEntry {
        self.record_at(Utc::now(), flowers, result)
    }

    pub fn record_at(
        &mut self,
        recorded_at: DateTime<Utc>,
        flowers: &[i32],
        result: &GardenResult,
    ) -> &HistoryEntry {
        self.entries.push(HistoryEntry {
            recorded_at,
            flowers: flowers.to_vec(),
            max_beauty: result.max_beauty,
            start_index: result.start_index,
            end_index: result.end_index,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// Entry with the highest numeric max beauty; the earliest wins on ties.
    pub fn best(&self) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .filter_map(|e| e.max_beauty.sum().map(|s| (s, e)))
            .fold(None, |best: Option<(i64, &HistoryEntry)>, (sum, entry)| match best {
                Some((top, _)) if top >= sum => best,
                _ => Some((sum, entry)),
            })
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use chrono::TimeZone;

    #[test]
    fn records_in_order() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());

        for garden in [vec![1, 2, 1], vec![7], vec![5, 5]] {
            let result = analyze(&garden);
            log.record(&garden, &result);
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(|e| e.flowers.clone()), Some(vec![5, 5]));

        let newest: Vec<_> = log.recent(2).map(|e| e.flowers.len()).collect();
        assert_eq!(newest, vec![2, 1]);
        assert_eq!(log.recent(10).count(), 3);
    }

    #[test]
    fn best_skips_invalid_and_keeps_earliest_tie() {
        let mut log = HistoryLog::new();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        log.record_at(at, &[7], &analyze(&[7]));
        assert!(log.best().is_none());

        log.record_at(at, &[2, 2], &analyze(&[2, 2]));
        log.record_at(at, &[1, 3, 1], &analyze(&[1, 3, 1]));
        log.record_at(at, &[-1, -1], &analyze(&[-1, -1]));

        // [2, 2] reaches 4, [1, 3, 1] reaches 5
        let best = log.best().unwrap();
        assert_eq!(best.flowers, vec![1, 3, 1]);
        assert_eq!(best.max_beauty, MaxBeauty::Sum(5));

        log.record_at(at, &[5], &analyze(&[5]));
        log.record_at(at, &[0, 5, 0], &analyze(&[0, 5, 0]));
        // [0, 5, 0] also reaches 5 but was recorded later
        assert_eq!(log.best().unwrap().flowers, vec![1, 3, 1]);
        assert_eq!(log.best().unwrap().recorded_at, at);
    }
}
