use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::hours::BusinessHours;

pub const OPEN_HOUR_VAR: &str = "PIZZERIA_OPEN_HOUR";
pub const CLOSE_HOUR_VAR: &str = "PIZZERIA_CLOSE_HOUR";
pub const CATALOG_VAR: &str = "PIZZERIA_CATALOG";
pub const CHANNEL_CAPACITY_VAR: &str = "PIZZERIA_CHANNEL_CAPACITY";

/// Runtime settings.
///
/// | Variable                    | Default        |
/// |-----------------------------|----------------|
/// | `PIZZERIA_OPEN_HOUR`        | `12`           |
/// | `PIZZERIA_CLOSE_HOUR`       | `22`           |
/// | `PIZZERIA_CATALOG`          | built-in menu  |
/// | `PIZZERIA_CHANNEL_CAPACITY` | `32`           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub hours: BusinessHours,
    pub catalog_path: Option<PathBuf>,
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hours: BusinessHours::default(),
            catalog_path: None,
            channel_capacity: 32,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let open_hour = parse_or(&lookup, OPEN_HOUR_VAR, defaults.hours.open_hour)?;
        let close_hour = parse_or(&lookup, CLOSE_HOUR_VAR, defaults.hours.close_hour)?;
        check_hour(OPEN_HOUR_VAR, open_hour)?;
        check_hour(CLOSE_HOUR_VAR, close_hour)?;
        if open_hour > close_hour {
            return Err(ConfigError::OpenAfterClose { open_hour, close_hour });
        }

        let channel_capacity = parse_or(&lookup, CHANNEL_CAPACITY_VAR, defaults.channel_capacity)?;
        if channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: CHANNEL_CAPACITY_VAR,
                value: "0".to_string(),
            });
        }

        let catalog_path = lookup(CATALOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            hours: BusinessHours::new(open_hour, close_hour),
            catalog_path,
            channel_capacity,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn check_hour(key: &'static str, hour: u32) -> Result<(), ConfigError> {
    if hour > 23 {
        return Err(ConfigError::HourOutOfRange { key, hour });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.hours, BusinessHours::new(12, 22));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (OPEN_HOUR_VAR, "10"),
            (CLOSE_HOUR_VAR, " 23 "),
            (CATALOG_VAR, "/srv/menu.json"),
            (CHANNEL_CAPACITY_VAR, "4"),
        ]))
        .unwrap();
        assert_eq!(config.hours, BusinessHours::new(10, 23));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
        assert_eq!(config.channel_capacity, 4);
    }

    #[test]
    fn test_hour_out_of_range() {
        let result = AppConfig::from_lookup(lookup_from(&[(CLOSE_HOUR_VAR, "24")]));
        assert_eq!(
            result,
            Err(ConfigError::HourOutOfRange {
                key: CLOSE_HOUR_VAR,
                hour: 24
            })
        );
    }

    #[test]
    fn test_open_after_close() {
        let result = AppConfig::from_lookup(lookup_from(&[(OPEN_HOUR_VAR, "23")]));
        assert_eq!(
            result,
            Err(ConfigError::OpenAfterClose {
                open_hour: 23,
                close_hour: 22
            })
        );
    }

    #[test]
    fn test_unparsable_value() {
        let result = AppConfig::from_lookup(lookup_from(&[(OPEN_HOUR_VAR, "noon")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key: OPEN_HOUR_VAR,
                value: "noon".to_string()
            })
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
