//! Startup configuration read from the environment.

use anyhow::Context;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dice seed (`JOKERBALL_SEED`), random when unset
    pub seed: Option<u64>,
    /// Tracing filter (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("JOKERBALL_SEED").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    fn from_vars(seed: Option<String>, log_filter: Option<String>) -> anyhow::Result<Self> {
        let seed = seed
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("JOKERBALL_SEED must be a number, got {:?}", raw))
            })
            .transpose()?;

        Ok(Self {
            seed,
            log_filter: log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_seed_and_filter() {
        let config =
            Config::from_vars(Some(" 42 ".into()), Some("jokerball_core=debug".into())).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "jokerball_core=debug");
    }

    #[test]
    fn test_bad_seed() {
        let err = Config::from_vars(Some("forty-two".into()), None).unwrap_err();
        assert!(err.to_string().contains("JOKERBALL_SEED"));
    }
}
