use crate::config::PresetConfig;
use crate::source::GardenSource;

/// Cycles through the configured example gardens in order.
pub struct PresetGarden {
    presets: Vec<PresetConfig>,
    next: usize,
}

impl PresetGarden {
    pub fn new(presets: Vec<PresetConfig>) -> Self {
        Self { presets, next: 0 }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&PresetConfig> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl GardenSource for PresetGarden {
    fn next_garden(&mut self) -> Vec<i32> {
        if self.presets.is_empty() {
            return Vec::new();
        }
        let preset = &self.presets[self.next % self.presets.len()];
        self.next = (self.next + 1) % self.presets.len();
        preset.values.clone()
    }
}
