//! Habit Suggester Library
//!
//! Suggests small actionable tasks ("habits") from free-text input:
//! - Keyword-based candidate generation from a static rules file
//! - Learns from thumbs-up/down feedback via a persisted association store
//! - Ranks candidates by keyword coverage, Jaccard similarity, and
//!   learned weights
//!
//! # Example
//!
//! ```no_run
//! use habit_suggester::HabitSuggester;
//!
//! let suggester = HabitSuggester::open("data/seed_rules.json", "data/learned.json");
//! for task in suggester.suggest("I want to exercise more", 5) {
//!     println!("{}", task);
//! }
//! suggester.update_feedback("I want to exercise more", "Go for a jog", 1);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod persist;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::HabitSuggester;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
