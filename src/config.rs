use crate::error::{LifeError, Result};
use crate::settings::Settings;
use std::time::Duration;

pub const DEFAULT_DIMENSIONS: usize = 25;
pub const DEFAULT_PATTERN: &str = "glider";
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Bounds for interactive speed changes
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
pub const MAX_INTERVAL: Duration = Duration::from_secs(10);

/// Fully resolved configuration for a run
#[derive(Clone, Debug)]
pub struct LifeConfig {
    pub dimensions: usize,
    pub pattern: String,
    pub interval: Duration,
    /// Plain stdout output instead of the full-screen display
    pub print: bool,
    /// Stop after this many generations
    pub generations: Option<u64>,
}

/// Values given on the command line; `None` falls back to settings
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub dimensions: Option<usize>,
    pub pattern: Option<String>,
    pub interval: Option<Duration>,
    pub print: bool,
    pub generations: Option<u64>,
}

impl LifeConfig {
    /// Command line first, then the settings file, then built-in defaults
    pub fn resolve(overrides: Overrides, settings: &Settings) -> Result<Self> {
        let dimensions = overrides
            .dimensions
            .or(settings.dimensions)
            .unwrap_or(DEFAULT_DIMENSIONS);
        if dimensions == 0 {
            return Err(LifeError::InvalidDimension(dimensions));
        }

        let pattern = overrides
            .pattern
            .or_else(|| settings.pattern.clone())
            .unwrap_or_else(|| DEFAULT_PATTERN.to_string());

        let interval = match (overrides.interval, settings.interval.as_deref()) {
            (Some(interval), _) => interval,
            (None, Some(text)) => parse_interval(text)?,
            (None, None) => DEFAULT_INTERVAL,
        };

        Ok(Self {
            dimensions,
            pattern,
            interval,
            print: overrides.print,
            generations: overrides.generations,
        })
    }
}

/// Parse a duration like `500ms`, `1s`, `1.5s` or `2m`. A bare number is
/// seconds. Zero is rejected.
pub fn parse_interval(text: &str) -> Result<Duration> {
    let invalid = || LifeError::InvalidInterval(text.to_string());
    let s = text.trim();

    let (value, mul, div) = if let Some(v) = s.strip_suffix("ms") {
        (v, 1.0, 1000.0)
    } else if let Some(v) = s.strip_suffix('s') {
        (v, 1.0, 1.0)
    } else if let Some(v) = s.strip_suffix('m') {
        (v, 60.0, 1.0)
    } else {
        (s, 1.0, 1.0)
    };

    let value: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }
    let interval = Duration::try_from_secs_f64(value * mul / div).map_err(|_| invalid())?;
    if interval.is_zero() {
        return Err(invalid());
    }
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(text: &str) -> Settings {
        Settings::parse(text).unwrap()
    }

    #[test]
    fn defaults_without_flags_or_settings() {
        let config = LifeConfig::resolve(Overrides::default(), &Settings::default()).unwrap();
        assert_eq!(config.dimensions, 25);
        assert_eq!(config.pattern, "glider");
        assert_eq!(config.interval, Duration::from_secs(1));
        assert!(!config.print);
        assert_eq!(config.generations, None);
    }

    #[test]
    fn settings_file_fills_in_missing_flags() {
        let file = settings("dimensions = 5\npattern = \"block\"\ninterval = \"250ms\"");
        let config = LifeConfig::resolve(Overrides::default(), &file).unwrap();
        assert_eq!(config.dimensions, 5);
        assert_eq!(config.pattern, "block");
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn flags_win_over_settings_file() {
        let file = settings("dimensions = 5\npattern = \"block\"\ninterval = \"250ms\"");
        let overrides = Overrides {
            dimensions: Some(4),
            pattern: Some("glider".to_string()),
            interval: Some(Duration::from_secs(2)),
            print: true,
            generations: Some(3),
        };
        let config = LifeConfig::resolve(overrides, &file).unwrap();
        assert_eq!(config.dimensions, 4);
        assert_eq!(config.pattern, "glider");
        assert_eq!(config.interval, Duration::from_secs(2));
        assert!(config.print);
        assert_eq!(config.generations, Some(3));
    }

    #[test]
    fn partial_settings_mix_with_defaults() {
        let config = LifeConfig::resolve(Overrides::default(), &settings("pattern = \"toad\"")).unwrap();
        assert_eq!(config.dimensions, 25);
        assert_eq!(config.pattern, "toad");
        assert_eq!(config.interval, Duration::from_secs(1));
    }

    #[test]
    fn zero_dimensions_in_settings_is_rejected() {
        let err = LifeConfig::resolve(Overrides::default(), &settings("dimensions = 0")).unwrap_err();
        assert!(matches!(err, LifeError::InvalidDimension(0)));
        assert_eq!(err.to_string(), "board dimension must be positive, got 0");
    }

    #[test]
    fn bad_interval_in_settings_is_rejected() {
        let err = LifeConfig::resolve(Overrides::default(), &settings("interval = \"soon\"")).unwrap_err();
        assert!(matches!(err, LifeError::InvalidInterval(_)));
    }

    #[test]
    fn parses_units() {
        assert_eq!(parse_interval("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_interval("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_interval("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_interval("2m").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn bare_number_is_seconds() {
        assert_eq!(parse_interval("3").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_interval("0.5").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for bad in ["0s", "-1s", "fast", "", "ms", "NaNs", "1h"] {
            let err = parse_interval(bad).unwrap_err();
            assert!(matches!(err, LifeError::InvalidInterval(_)), "{:?}", bad);
        }
    }
}
