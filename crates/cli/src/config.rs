//! Runtime configuration read from the environment.

use menagerie_domain::Capacity;

/// Fixes the collection size without prompting.
pub const MAX_CREATURES_VAR: &str = "MENAGERIE_MAX_CREATURES";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "menagerie_cli=warn,menagerie_domain=warn";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Preconfigured capacity; `None` means ask at startup.
    pub max_creatures: Option<Capacity>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// An unparseable or non-positive capacity is logged and ignored so the
    /// user is prompted instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_creatures = lookup(MAX_CREATURES_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| {
                let parsed = raw
                    .parse::<usize>()
                    .map_err(|e| e.to_string())
                    .and_then(|n| Capacity::new(n).map_err(|e| e.message()));
                match parsed {
                    Ok(capacity) => Some(capacity),
                    Err(reason) => {
                        tracing::warn!(
                            var = MAX_CREATURES_VAR,
                            value = %raw,
                            %reason,
                            "Ignoring invalid capacity, will prompt instead"
                        );
                        None
                    }
                }
            });

        Self { max_creatures }
    }
}

/// Load `.env.local` then `.env` from the working directory, if present.
pub fn load_dotenv() {
    // Prefer local overrides; dotenvy never overwrites variables already set.
    for filename in [".env.local", ".env"] {
        if dotenvy::from_filename(filename).is_ok() {
            tracing::debug!(file = filename, "Loaded environment file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_capacity_means_prompt() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_valid_capacity_is_used() {
        let config = AppConfig::from_lookup(lookup(&[(MAX_CREATURES_VAR, " 12 ")]));
        assert_eq!(config.max_creatures, Some(Capacity::new(12).unwrap()));
    }

    #[test]
    fn test_invalid_capacity_is_ignored() {
        for raw in ["0", "-3", "many", ""] {
            let config = AppConfig::from_lookup(lookup(&[(MAX_CREATURES_VAR, raw)]));
            assert_eq!(config.max_creatures, None, "value {raw:?}");
        }
    }
}
