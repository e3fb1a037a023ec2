//! ABC Radio - query and dry-run the radio skill from a terminal

use abc_radio::config::Config;
use abc_radio::error::RadioError;
use abc_radio::host::LoggingHost;
use abc_radio::skill::RadioSkill;
use abc_radio::stations::{match_station_from_utterance, Catalogue, StreamFormat};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Station list to use instead of the built-in catalogue
    #[arg(long)]
    stations: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all stations
    List,

    /// Match an utterance and show the decision
    Match {
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// Match an utterance and dry-run playback
    Play {
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// Print the stream URL of a station
    Url {
        station: String,

        #[arg(short, long)]
        format: Option<StreamFormat>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Setup logging
    let directive = config.log_directive(args.verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}, using info", directive, e);
        EnvFilter::new("info")
    });
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = &args.stations {
        config.stations_file = Some(path.to_string_lossy().to_string());
    }
    let catalogue = config.catalogue()?;
    info!("📻 Loaded {} stations", catalogue.len());

    match args.command {
        Command::List => list(&catalogue, &config),
        Command::Match { phrase } => {
            let phrase = phrase.join(" ");
            let matched = match_station_from_utterance(&catalogue, &phrase);
            if let Some(station) = matched.station {
                println!("best: {} ({:.3})", station.name, matched.confidence);
            }

            let skill = RadioSkill::new(Arc::new(LoggingHost), catalogue, config);
            match skill.match_query_phrase(&phrase) {
                Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                None => println!("decline"),
            }
        }
        Command::Play { phrase } => {
            let phrase = phrase.join(" ");
            let mut skill = RadioSkill::new(Arc::new(LoggingHost), catalogue, config);
            skill.initialize().await;
            match skill.match_query_phrase(&phrase) {
                Some(response) => skill.start(&response.name).await?,
                None => println!("decline"),
            }
        }
        Command::Url { station, format } => {
            let found = catalogue
                .find(&station)
                .ok_or_else(|| RadioError::UnknownStation(station.clone()))?;
            println!("{}", found.stream_url(format.unwrap_or(config.stream_format)));
        }
    }

    Ok(())
}

fn list(catalogue: &Catalogue, config: &Config) {
    for station in catalogue {
        let aliases = if station.aliases.is_empty() {
            String::new()
        } else {
            format!(" [{}]", station.aliases.join(", "))
        };
        println!(
            "{}{} -> {}",
            station.name,
            aliases,
            station.stream_url(config.stream_format)
        );
    }
}
