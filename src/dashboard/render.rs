// dashboard/render.rs

use crate::history::HistoryLog;
use crate::model::{GardenResult, VisualCell};
use crate::parser::format_flowers;

const BAR_WIDTH: usize = 20;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Full result view for one garden.
pub fn render_result(flowers: &[i32], result: &GardenResult, description: &str) -> String {
    let mut out = String::new();
    out.push_str("📊 Results\n");
    out.push_str(&format!("🌸 Maximum beauty: {}\n", result.max_beauty));

    if result.max_beauty.is_valid() && !result.best_subarray.is_empty() {
        // positions shown to users are 1-indexed
        out.push_str(&format!(
            "📍 Positions {} to {}\n",
            result.start_index + 1,
            result.end_index + 1
        ));
        let pattern: String = result.flower_pattern.iter().map(|c| c.emoji()).collect();
        out.push_str(&format!(
            "🌺 Best arrangement: [{}] {}\n",
            format_flowers(&result.best_subarray),
            pattern
        ));
    } else if !flowers.is_empty() {
        out.push_str("🌾 No two flowers share a beauty value, so no arrangement qualifies.\n");
    }

    if !result.visual_data.is_empty() {
        out.push('\n');
        out.push_str(&render_table(&result.visual_data));
        out.push('\n');
        out.push_str("📈 Flower beauty\n");
        out.push_str(&render_bars(&result.visual_data));
        out.push_str(&format!(
            "📉 Cumulative beauty {}\n",
            sparkline(&result.cumulative_beauty)
        ));
    }

    if result.all_valid_subarrays.len() > 1 {
        out.push('\n');
        out.push_str("🏅 Top arrangements\n");
        for (rank, candidate) in result.all_valid_subarrays.iter().enumerate() {
            out.push_str(&format!(
                "  {}. positions {}-{} sum {} [{}]\n",
                rank + 1,
                candidate.start + 1,
                candidate.end + 1,
                candidate.sum,
                format_flowers(&candidate.subarray)
            ));
        }
    }

    out.push('\n');
    out.push_str(description);
    out.push('\n');
    out.push_str(
        "💡 Negative beauty marks plants that clash with their neighbours; the best arrangement balances them against the blooms.\n",
    );
    out
}

fn render_table(cells: &[VisualCell]) -> String {
    let mut out = String::from(" Pos  Beauty  Class            Selected\n");
    for cell in cells {
        out.push_str(&format!(
            "{:>4}  {:>6}  {} {:<15} {}\n",
            cell.position + 1,
            cell.beauty,
            cell.emoji_class.emoji(),
            cell.emoji_class.tag(),
            if cell.selected { "✓" } else { "" }
        ));
    }
    out
}

/// Horizontal bars around a zero axis; selected flowers are drawn solid.
pub fn render_bars(cells: &[VisualCell]) -> String {
    let max_abs = cells
        .iter()
        .map(|c| i64::from(c.beauty).unsigned_abs())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for cell in cells {
        let len = bar_len(i64::from(cell.beauty).unsigned_abs(), max_abs);
        let glyph = if cell.selected { "█" } else { "░" };
        let (left, right) = if cell.beauty < 0 {
            (
                format!("{}{}", " ".repeat(BAR_WIDTH - len), glyph.repeat(len)),
                String::new(),
            )
        } else {
            (" ".repeat(BAR_WIDTH), glyph.repeat(len))
        };
        out.push_str(&format!(
            "{:>4} {}│{} {}\n",
            cell.position + 1,
            left,
            right,
            cell.beauty
        ));
    }
    out
}

fn bar_len(magnitude: u64, max_abs: u64) -> usize {
    if max_abs == 0 {
        return 0;
    }
    let width = BAR_WIDTH as u64;
    ((magnitude * width).div_ceil(max_abs)).min(width) as usize
}

pub fn sparkline(values: &[i64]) -> String {
    let (Some(&lo), Some(&hi)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    if lo == hi {
        return SPARKS[3].to_string().repeat(values.len());
    }
    let span = (hi - lo) as i128;
    values
        .iter()
        .map(|&v| {
            let level = (i128::from(v - lo) * 7 / span) as usize;
            SPARKS[level]
        })
        .collect()
}

/// Newest first.
pub fn render_history(history: &HistoryLog, limit: usize) -> String {
    if history.is_empty() {
        return "📭 No gardens analyzed yet.".to_string();
    }
    let mut out = format!("📜 Last {} of {} gardens:\n", limit.min(history.len()), history.len());
    for entry in history.recent(limit) {
        out.push_str(&format!(
            "🕒 {} | [{}] → {}\n",
            entry.recorded_at.format("%H:%M:%S"),
            format_flowers(&entry.flowers),
            entry.max_beauty
        ));
    }
    out
}

pub fn render_help<'a>(presets: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from(
        "📋 Available commands:\n\
         <values> — analyze comma-separated beauties, e.g. 1, 2, 3, 1, 2\n\
         /random — analyze a random garden\n\
         /example [name] — analyze an example garden (lists them without a name)\n\
         /history — recent gardens\n\
         /best — best garden so far\n\
         /last — show the last garden again\n\
         /describe — describe the last garden\n\
         /json — last result as JSON\n\
         /help — this list\n\
         /quit — leave the garden\n",
    );
    let names: Vec<&str> = presets.collect();
    if !names.is_empty() {
        out.push_str(&format!("🌱 Examples: {}\n", names.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, describe};

    #[test]
    fn result_view_shows_one_based_positions() {
        let flowers = [1, 2, 3, 1, 2];
        let result = analyze(&flowers);
        let text = render_result(&flowers, &result, &describe(&result.garden_stats));
        assert!(text.contains("Maximum beauty: 8"));
        assert!(text.contains("Positions 2 to 5"));
        assert!(text.contains("[2, 3, 1, 2] 🌷🌷🌷🌷"));
        assert!(text.contains("Top arrangements"));
        assert!(text.contains("vibrant"));
    }

    #[test]
    fn result_view_for_no_valid_garden() {
        let flowers = [3, -8, 6];
        let result = analyze(&flowers);
        let text = render_result(&flowers, &result, "desc");
        assert!(text.contains("Maximum beauty: No valid garden"));
        assert!(text.contains("no arrangement qualifies"));
        assert!(!text.contains("Positions"));
        assert!(!text.contains('✓'));
    }

    #[test]
    fn result_view_sections_in_order() {
        let flowers = [2, 1, 2];
        let result = analyze(&flowers);
        let text = render_result(&flowers, &result, "A tidy garden.");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "📊 Results");
        assert_eq!(lines[1], "🌸 Maximum beauty: 5");
        assert_eq!(lines[2], "📍 Positions 1 to 3");
        assert_eq!(lines[3], "🌺 Best arrangement: [2, 1, 2] 🌷🌷🌷");
        assert_eq!(lines[5], " Pos  Beauty  Class            Selected");
        assert_eq!(
            lines[7],
            concat!("   2", "  ", "     1", "  ", "🌷 ", "positive       ", " ✓")
        );
        assert!(text.contains("\nA tidy garden.\n💡 "));
        assert!(text.ends_with("against the blooms.\n"));
    }

    #[test]
    fn bars_scale_to_largest_magnitude() {
        let result = analyze(&[4, -2, 4]);
        let bars = render_bars(&result.visual_data);
        let lines: Vec<&str> = bars.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
        assert!(lines[1].find('█') < lines[1].find('│'));
    }

    #[test]
    fn sparkline_levels() {
        assert_eq!(sparkline(&[]), "");
        assert_eq!(sparkline(&[2, 2]), "▄▄");
        assert_eq!(sparkline(&[0, 7, 14]), "▁▄█");
        assert_eq!(sparkline(&[0, -7]), "█▁");
    }

    #[test]
    fn history_view_newest_first() {
        let mut log = HistoryLog::new();
        assert!(render_history(&log, 5).contains("No gardens"));
        log.record(&[1, 1], &analyze(&[1, 1]));
        log.record(&[9], &analyze(&[9]));
        let text = render_history(&log, 5);
        let first = text.find("[9]").unwrap();
        let second = text.find("[1, 1]").unwrap();
        assert!(first < second);
        assert!(text.contains("No valid garden"));
    }

    #[test]
    fn help_lists_examples() {
        let text = render_help(["Small garden", "Large garden"].into_iter());
        assert!(text.contains("/random"));
        assert!(text.contains("Examples: Small garden, Large garden"));
    }
}
