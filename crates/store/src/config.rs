//! Store configuration, read from the environment at the binary boundary.

/// Environment variable naming the store.
pub const NAME_VAR: &str = "STOCKROOM_NAME";

/// Environment variable holding the starting capital, in the smallest currency unit.
pub const CAPITAL_VAR: &str = "STOCKROOM_CAPITAL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub name: String,
    /// Starting capital in the smallest currency unit (e.g., cents).
    pub capital: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Stockroom".to_string(),
            capital: 10_000_000,
        }
    }
}

impl StoreConfig {
    /// Build from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or invalid values fall back
    /// to the defaults; invalid ones are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let name = match lookup(NAME_VAR) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            Some(_) => {
                tracing::warn!("{NAME_VAR} is blank; using default store name");
                defaults.name
            }
            None => defaults.name,
        };

        let capital = match lookup(CAPITAL_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("{CAPITAL_VAR}='{raw}' is not a valid amount ({e}); using default capital");
                defaults.capital
            }),
            None => defaults.capital,
        };

        Self { name, capital }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.capital, 10_000_000);
    }

    #[test]
    fn reads_name_and_capital() {
        let config = StoreConfig::from_lookup(lookup_from(&[(NAME_VAR, " SuperMart "), (CAPITAL_VAR, "250000")]));
        assert_eq!(config.name, "SuperMart");
        assert_eq!(config.capital, 250_000);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = StoreConfig::from_lookup(lookup_from(&[(NAME_VAR, "  "), (CAPITAL_VAR, "lots")]));
        assert_eq!(config, StoreConfig::default());
    }
}
