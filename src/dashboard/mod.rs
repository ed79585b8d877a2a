pub mod command_handler;
pub mod listener;
pub mod render;

use crate::analyzer::{Analyzer, GardenAnalyzer};
use crate::config::AppConfig;
use crate::history::HistoryLog;
use crate::model::{GardenResult, InputError};
use crate::parser::{GardenParser, Parser};
use crate::source::{PresetGarden, RandomGarden};
use tracing::info;

/// Caller-side state around the analyzer: sources, history and the last result.
pub struct Dashboard {
    pub config: AppConfig,
    analyzer: GardenAnalyzer,
    parser: GardenParser,
    random: RandomGarden,
    presets: PresetGarden,
    history: HistoryLog,
    last: Option<(Vec<i32>, GardenResult)>,
}

impl Dashboard {
    pub fn new(config: AppConfig) -> Self {
        let random = RandomGarden::new(config.random.clone());
        Self::with_random(config, random)
    }

    pub fn with_random(config: AppConfig, random: RandomGarden) -> Self {
        Self {
            analyzer: GardenAnalyzer::with_top_k(config.top_k),
            parser: GardenParser::new(config.max_flowers),
            presets: PresetGarden::new(config.presets.clone()),
            random,
            history: HistoryLog::new(),
            last: None,
            config,
        }
    }

    /// Analyzes, records in history and renders the garden.
    pub fn analyze_garden(&mut self, flowers: Vec<i32>) -> String {
        let result = self.analyzer.analyze(&flowers);
        info!(
            "Analyzed {} flowers → max beauty {}",
            flowers.len(),
            result.max_beauty
        );
        self.history.record(&flowers, &result);
        let view = self.render(&flowers, &result);
        self.last = Some((flowers, result));
        view
    }

    pub fn analyze_text(&mut self, text: &str) -> Result<String, InputError> {
        let flowers = self.parser.parse(text)?;
        Ok(self.analyze_garden(flowers))
    }

    pub fn render(&self, flowers: &[i32], result: &GardenResult) -> String {
        let description = self.analyzer.describe(&result.garden_stats);
        render::render_result(flowers, result, &description)
    }

    pub fn analyzer(&self) -> &GardenAnalyzer {
        &self.analyzer
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn presets(&self) -> &PresetGarden {
        &self.presets
    }

    pub fn random_mut(&mut self) -> &mut RandomGarden {
        &mut self.random
    }

    pub fn last(&self) -> Option<(&[i32], &GardenResult)> {
        self.last.as_ref().map(|(f, r)| (f.as_slice(), r))
    }
}
