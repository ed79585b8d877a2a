// dashboard/command_handler.rs

use crate::dashboard::render::{render_help, render_history};
use crate::dashboard::Dashboard;
use crate::analyzer::Analyzer;
use crate::parser::format_flowers;
use crate::source::GardenSource;
use tracing::{info, warn};

const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Reply(String),
    Quit(String),
}

impl CommandOutcome {
    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Reply(text) | CommandOutcome::Quit(text) => text,
        }
    }
}

/// Handles one line of dashboard input. Anything not starting with `/` is garden input.
pub fn handle_command(line: &str, dashboard: &mut Dashboard) -> CommandOutcome {
    let line = line.trim();
    if line.is_empty() {
        return CommandOutcome::Reply(String::new());
    }
    if !line.starts_with('/') {
        return CommandOutcome::Reply(match dashboard.analyze_text(line) {
            Ok(view) => view,
            Err(e) => {
                warn!("Rejected garden input {:?}: {}", line, e);
                format!("⚠️ Invalid input: {}", e)
            }
        });
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    info!("Handling command: {}", command);

    let reply = match command {
        "/help" => render_help(dashboard.presets().names()),
        "/quit" | "/exit" => return CommandOutcome::Quit("🌙 Goodbye, gardener!".to_string()),
        "/random" => {
            let flowers = dashboard.random_mut().next_garden();
            let input = format_flowers(&flowers);
            let view = dashboard.analyze_garden(flowers);
            format!("🎲 Random garden: {}\n\n{}", input, view)
        }
        "/example" if argument.is_empty() => {
            let names: Vec<&str> = dashboard.presets().names().collect();
            if names.is_empty() {
                "⚠️ No example gardens configured.".to_string()
            } else {
                format!("🌱 Example gardens: {}", names.join(", "))
            }
        }
        "/example" => match dashboard
            .presets()
            .get(argument)
            .map(|p| (p.name.clone(), p.values.clone()))
        {
            Some((name, flowers)) => {
                let input = format_flowers(&flowers);
                let view = dashboard.analyze_garden(flowers);
                format!("🌱 {}: {}\n\n{}", name, input, view)
            }
            None => format!("❓ Unknown example garden '{}'. Try /example for the list.", argument),
        },
        "/history" => render_history(dashboard.history(), HISTORY_LIMIT),
        "/best" => match dashboard.history().best() {
            Some(entry) => format!(
                "🏆 Best garden: [{}] with beauty {} (positions {}-{})",
                format_flowers(&entry.flowers),
                entry.max_beauty,
                entry.start_index + 1,
                entry.end_index + 1
            ),
            None => "📭 No valid garden analyzed yet.".to_string(),
        },
        "/last" => match dashboard.last() {
            Some((flowers, result)) => dashboard.render(flowers, result),
            None => "📭 No garden analyzed yet.".to_string(),
        },
        "/describe" => match dashboard.last() {
            Some((_, result)) => dashboard.analyzer().describe(&result.garden_stats),
            None => "📭 No garden analyzed yet.".to_string(),
        },
        "/json" => match dashboard.last() {
            Some((_, result)) => match serde_json::to_string_pretty(result) {
                Ok(json) => json,
                Err(e) => {
                    warn!("/json serialization error: {:?}", e);
                    format!("❌ Error: {}", e)
                }
            },
            None => "📭 No garden analyzed yet.".to_string(),
        },
        _ => "🤖 Unknown command. Type /help for a list of commands.".to_string(),
    };
    CommandOutcome::Reply(reply)
}
