//! Runtime configuration from the environment.

use calc_parse::ReduceConfig;

/// Environment variable capping the number of reduction passes.
pub const MAX_PASSES_VAR: &str = "CALC_MAX_PASSES";

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
}

/// Settings read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub reduce: ReduceConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut reduce = ReduceConfig::unbounded();
        if let Some(raw) = lookup(MAX_PASSES_VAR) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                let limit = trimmed
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: MAX_PASSES_VAR,
                        value: raw.clone(),
                    })?;
                reduce = reduce.with_max_passes(limit);
            }
        }
        Ok(Config { reduce })
    }
}

#[cfg(test)]
mod tests;
