use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_subscriber::EnvFilter;

use petpal_application::{ChatUseCase, Notifier, PetStore, demo_store};
use petpal_core::config::RootConfig;
use petpal_infrastructure::{ConfigService, ConfigSource};
use petpal_interaction::{PetResponder, SimulatedBackend};

mod command;
mod helper;
mod render;
mod repl;

use command::{Command, parse_line};
use helper::CliHelper;
use repl::{Flow, Repl};

#[derive(Parser, Debug)]
#[command(name = "petpal")]
#[command(about = "PetPal - chat with a roster of simulated virtual pets", long_about = None)]
struct Args {
    /// Config file to read instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated reply latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Seed for reproducible pet replies
    #[arg(long)]
    seed: Option<u64>,

    /// Start with an empty roster instead of the sample pets
    #[arg(long)]
    no_demo: bool,
}

impl Args {
    fn apply(&self, config: &mut RootConfig) {
        if let Some(latency_ms) = self.latency_ms {
            config.simulator.latency_ms = latency_ms;
        }
        if self.seed.is_some() {
            config.simulator.seed = self.seed;
        }
        if self.no_demo {
            config.roster.seed_demo_pets = false;
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_service = match &args.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = config_service.get_config()?;
    args.apply(&mut config);
    init_tracing(&config.logging.level);
    // the load ran before the subscriber existed
    match config_service.config_source()? {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "Loaded config"),
        ConfigSource::Defaults(path) => {
            tracing::info!(path = %path.display(), "No config file, using defaults")
        }
    }
    tracing::debug!(?config, "Starting PetPal");

    let store = if config.roster.seed_demo_pets {
        demo_store(&config.simulator.sticker_base_url)?
    } else {
        PetStore::new()
    };
    let responder: Arc<dyn PetResponder> =
        Arc::new(SimulatedBackend::from_settings(&config.simulator));
    let (notifier, notifications) = Notifier::channel();
    let chat = ChatUseCase::new(store, responder, notifier);
    let mut repl = Repl::new(chat, notifications);

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== PetPal ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a message to chat with your pet, '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();
    repl.handle(Command::History).await?;

    loop {
        let prompt = repl.prompt().await;
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                let flow = match parse_line(&line) {
                    Ok(Some(command)) => repl.handle(command).await?,
                    Ok(None) => Flow::Continue,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        Flow::Continue
                    }
                };
                repl.flush_notifications();

                if flow == Flow::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["petpal", "--latency-ms", "0", "--seed", "7", "--no-demo"]);
        let mut config = RootConfig::default();
        args.apply(&mut config);

        assert_eq!(config.simulator.latency_ms, 0);
        assert_eq!(config.simulator.seed, Some(7));
        assert!(!config.roster.seed_demo_pets);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = Args::parse_from(["petpal"]);
        let mut config = RootConfig::default();
        config.simulator.seed = Some(3);
        args.apply(&mut config);

        assert_eq!(config, {
            let mut expected = RootConfig::default();
            expected.simulator.seed = Some(3);
            expected
        });
    }
}
