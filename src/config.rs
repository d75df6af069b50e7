//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Whether the planner integration is enabled; when false the query
    /// endpoints answer 503 (the engine's only caller-visible failure)
    pub planner_enabled: bool,
    /// Optional RNG seed for reproducible route generation
    pub rng_seed: Option<u64>,
    /// Artificial per-request latency to emulate a remote planning service;
    /// 0 disables it
    pub simulated_latency_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let rng_seed = match env::var("RNG_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("RNG_SEED"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            planner_enabled: env::var("PLANNER_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            rng_seed,
            simulated_latency_ms: env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        })
    }

    /// Default config for tests: planner enabled, fixed seed, no latency.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            planner_enabled: true,
            rng_seed: Some(42),
            simulated_latency_ms: 0,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
