//! Hasher configuration.

use crate::error::HashConfigError;

/// Selects how a [`Hasher`](crate::Hasher) produces identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HasherConfig {
    /// Digest content when `true`; hand out random ids when `false`.
    ///
    /// Default: `true`.
    pub true_hash: bool,
    /// Seed mixed into every content digest. Default: `0`.
    pub seed: u64,
}

impl HasherConfig {
    /// Default for [`true_hash`](Self::true_hash).
    pub const DEFAULT_TRUE_HASH: bool = true;

    /// Default for [`seed`](Self::seed).
    pub const DEFAULT_SEED: u64 = 0;

    /// Environment variable overriding [`true_hash`](Self::true_hash).
    pub const TRUE_HASH_VAR: &'static str = "JUDO_TRUE_HASH";

    /// Environment variable overriding [`seed`](Self::seed).
    pub const SEED_VAR: &'static str = "JUDO_HASH_SEED";

    /// Defaults, overridden by `JUDO_TRUE_HASH` and `JUDO_HASH_SEED`.
    ///
    /// # Errors
    ///
    /// Returns [`HashConfigError`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, HashConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`HashConfigError`] if a variable is set but malformed.
    ///
    /// ```
    /// use judo_hash::HasherConfig;
    ///
    /// let cfg = HasherConfig::from_lookup(|var| match var {
    ///     "JUDO_TRUE_HASH" => Some("off".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert!(!cfg.true_hash);
    /// assert_eq!(cfg.seed, 0);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HashConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::TRUE_HASH_VAR) {
            config.true_hash = parse_flag(&raw).ok_or_else(|| HashConfigError::InvalidFlag {
                var: Self::TRUE_HASH_VAR,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(Self::SEED_VAR) {
            config.seed = raw.trim().parse().map_err(|_| HashConfigError::InvalidSeed {
                var: Self::SEED_VAR,
                value: raw.clone(),
            })?;
        }
        Ok(config)
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            true_hash: Self::DEFAULT_TRUE_HASH,
            seed: Self::DEFAULT_SEED,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
