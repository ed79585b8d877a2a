use std::collections::HashMap;

/// Positions of every value seen so far, in scan order.
#[derive(Debug, Default)]
pub struct MatchGroups {
    groups: HashMap<i32, Vec<usize>>,
}

impl MatchGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earlier positions holding `value`, oldest first.
    pub fn prior_positions(&self, value: i32) -> &[usize] {
        self.groups.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends `position` to the group of `value`. Positions must be pushed in increasing order.
    pub fn record(&mut self, value: i32, position: usize) {
        let entry = self.groups.entry(value).or_default();
        debug_assert!(entry.last().is_none_or(|&last| last < position));
        entry.push(position);
    }

    /// True when at least one value occurred more than once.
    pub fn has_repeats(&self) -> bool {
        self.groups.values().any(|positions| positions.len() > 1)
    }

    pub fn distinct_values(&self) -> usize {
        self.groups.len()
    }
}
