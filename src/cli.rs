//! CLI interface for habit-suggester

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{self, Config};
use crate::engine::HabitSuggester;

#[derive(Parser)]
#[command(name = "habit-suggester")]
#[command(about = "Suggests small actionable tasks from free-text habit descriptions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print ranked suggestions for the given text
    Suggest {
        /// Free-text habit description
        text: String,
        /// Maximum number of suggestions
        #[arg(short, long)]
        k: Option<usize>,
    },
    /// Record feedback for a suggested task
    Feedback {
        /// The habit text the suggestion was made for
        habits: String,
        /// The suggested task being rated
        task: String,
        /// 1 for helpful, -1 for not helpful
        #[arg(allow_hyphen_values = true)]
        rating: i32,
    },
    /// Show or reset configuration
    Config {
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => crate::server::start(None, None).await,
        Some(Commands::Serve { host, port }) => crate::server::start(host, port).await,
        Some(Commands::Suggest { text, k }) => {
            let config = Config::load()?;
            let suggester =
                HabitSuggester::open(&config.store.rules_path, &config.store.learned_path);
            let k = k.unwrap_or(config.suggest.default_k);
            for (i, task) in suggester.suggest(&text, k).iter().enumerate() {
                println!("{}. {}", i + 1, task);
            }
            Ok(())
        }
        Some(Commands::Feedback {
            habits,
            task,
            rating,
        }) => {
            let config = Config::load()?;
            let suggester =
                HabitSuggester::open(&config.store.rules_path, &config.store.learned_path);
            suggester.update_feedback(&habits, &task, rating);
            println!("Feedback recorded.");
            Ok(())
        }
        Some(Commands::Config { reset }) => {
            if reset {
                config::reset_config()
            } else {
                config::show_config()
            }
        }
    }
}
