use clap::{Parser, Subcommand};
use garden_beauty::analyzer::{Analyzer, GardenAnalyzer};
use garden_beauty::config::{load_config_or_default, AppConfig, DEFAULT_CONFIG_PATH};
use garden_beauty::dashboard::{listener, Dashboard};
use garden_beauty::model::GardenError;
use garden_beauty::parser::{GardenParser, Parser as _};
use garden_beauty::source::{GardenSource, PresetGarden, RandomGarden};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the most beautiful flower arrangement in a garden")]
struct Cli {
    /// JSON configuration file (defaults are used when it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze comma-separated beauty values
    Analyze {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Analyze a random garden
    Random {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Analyze one of the example gardens
    Example {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Interactive dashboard (default)
    Interactive,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so rendered gardens on stdout stay clean
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            eprintln!("⚠️ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command.unwrap_or(Command::Interactive) {
        Command::Analyze { text, json } => GardenParser::new(config.max_flowers)
            .parse(&text)
            .map_err(GardenError::from)
            .and_then(|flowers| run_once(&config, &flowers, json)),
        Command::Random { seed, json } => {
            let mut source = match seed {
                Some(seed) => RandomGarden::with_seed(config.random.clone(), seed),
                None => RandomGarden::new(config.random.clone()),
            };
            let flowers = source.next_garden();
            info!("Random garden: {:?}", flowers);
            run_once(&config, &flowers, json)
        }
        Command::Example { name, json } => {
            let presets = PresetGarden::new(config.presets.clone());
            match presets.get(&name) {
                Some(preset) => run_once(&config, &preset.values, json),
                None => Err(GardenError::UnknownPreset(name)),
            }
        }
        Command::Interactive => {
            let mut dashboard = Dashboard::new(config);
            // Returning lets the process exit even if the stdin reader is still blocked
            listener::listen_for_commands(&mut dashboard)
                .await
                .map(|reason| info!("Dashboard exit: {:?}", reason))
                .map_err(GardenError::from)
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("⚠️ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Analyzes a single garden and prints it rendered or as JSON.
fn run_once(config: &AppConfig, flowers: &[i32], json: bool) -> Result<(), GardenError> {
    let analyzer = GardenAnalyzer::with_top_k(config.top_k);
    let result = analyzer.analyze(flowers);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let description = analyzer.describe(&result.garden_stats);
        print!(
            "{}",
            garden_beauty::dashboard::render::render_result(flowers, &result, &description)
        );
    }
    Ok(())
}
