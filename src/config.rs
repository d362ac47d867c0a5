//! Command-line configuration shared by both front ends
//!
//! Precedence: command-line flags, then `FREEDOM_*` environment variables,
//! then the built-in defaults below.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::board::Difficulty;
use crate::engine::AIEngine;
use crate::error::ConfigError;
use crate::search::DEFAULT_DEPTH;

/// Deepest lookahead accepted from the command line
pub const MAX_DEPTH: u8 = 12;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "freedom")]
#[command(about = "Freedom - a Gomoku-style board game against the computer")]
#[command(
    long_about = "Play Freedom against a minimax opponent. Each stone must touch the
previous one orthogonally unless all of its neighbors are taken. Runs of exactly
four score a point; runs of five or more score nothing."
)]
pub struct Config {
    /// Board size: beginner (6x6), novice (8x8) or experienced (10x10)
    #[arg(default_value = "beginner", env = "FREEDOM_DIFFICULTY")]
    pub difficulty: Difficulty,

    /// Computer lookahead in half-moves
    #[arg(long, default_value_t = DEFAULT_DEPTH, env = "FREEDOM_DEPTH")]
    pub depth: u8,

    /// Search the computer's candidate moves on all cores
    #[arg(long, env = "FREEDOM_PARALLEL")]
    pub parallel: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", env = "FREEDOM_LOG_LEVEL")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Beginner,
            depth: DEFAULT_DEPTH,
            parallel: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation(
                "depth must be at least 1".into(),
            ));
        }

        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "depth must be at most {MAX_DEPTH}, got {}",
                self.depth
            )));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Engine configured from these settings
    pub fn engine(&self) -> AIEngine {
        AIEngine::with_config(self.depth, self.parallel)
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_depth() {
        let cfg = Config {
            depth: 0,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn validate_rejects_huge_depth() {
        let cfg = Config {
            depth: MAX_DEPTH + 1,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let cfg = Config {
            log_level: "nope".into(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn parse_difficulty_argument() {
        let cfg = Config::try_parse_from(["freedom", "novice", "--depth", "4"]).unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Novice);
        assert_eq!(cfg.depth, 4);
        assert!(!cfg.parallel);
    }

    #[test]
    fn parse_difficulty_ignores_case() {
        for arg in ["NOVICE", "Novice", "novice", "8"] {
            let cfg = Config::try_parse_from(["freedom", arg]).unwrap();
            assert_eq!(cfg.difficulty, Difficulty::Novice, "argument {arg}");
        }
        let cfg = Config::try_parse_from(["freedom"]).unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn parse_rejects_unknown_difficulty() {
        let err = Config::try_parse_from(["freedom", "expert"]).unwrap_err();
        assert!(err.to_string().contains("unknown difficulty 'expert'"));
    }

    #[test]
    fn engine_uses_config() {
        let cfg = Config {
            depth: 3,
            parallel: true,
            ..Config::default()
        };
        let engine = cfg.engine();
        assert_eq!(engine.max_depth(), 3);
        assert!(engine.is_parallel());
    }
}
