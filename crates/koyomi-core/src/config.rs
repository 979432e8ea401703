use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::WeekStart;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub logging: LoggingConfig,
}

/// Knobs of the layout engine.
///
/// One parameterized surface covers what would otherwise be near-duplicate
/// screens differing only in these constants (track start hour, whether the
/// live indicator is drawn, which day the week starts on).
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    /// First hour drawn on the vertical track.
    pub track_start_hour: u32,
    /// Pixel height of one hour on the track.
    pub hour_height_px: f64,
    /// Cadence of the live "now" sample.
    pub tick_interval_ms: u64,
    pub week_starts_on: WeekStart,
    pub show_live_time_indicator: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            track_start_hour: 0,
            hour_height_px: 60.0,
            tick_interval_ms: 1000,
            week_starts_on: WeekStart::Sunday,
            show_live_time_indicator: true,
        }
    }
}

impl LayoutSettings {
    /// ## Summary
    /// Validates ranges the deserializer cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an out-of-range track
    /// start hour, a non-positive hour height, or a zero tick interval.
    pub fn validate(&self) -> CoreResult<()> {
        if self.track_start_hour >= 24 {
            return Err(CoreError::InvalidConfiguration(format!(
                "track_start_hour must be below 24, got {}",
                self.track_start_hour
            )));
        }
        if !self.hour_height_px.is_finite() || self.hour_height_px <= 0.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "hour_height_px must be a positive finite number, got {}",
                self.hour_height_px
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::InvalidConfiguration(
                "tick_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml`, on top of built-in defaults. Environment variables
    /// take precedence over defaults; the file over both.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if building or deserializing the
    /// configuration fails, or `CoreError::InvalidConfiguration` when the
    /// loaded values are out of range.
    pub fn load() -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("layout.track_start_hour", 0)?
            .set_default("layout.hour_height_px", 60.0)?
            .set_default("layout.tick_interval_ms", 1000)?
            .set_default("layout.week_starts_on", "sunday")?
            .set_default("layout.show_live_time_indicator", true)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.layout.validate()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let layout = LayoutSettings::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.track_start_hour, 0);
        assert_eq!(layout.tick_interval_ms, 1000);
        assert_eq!(layout.week_starts_on, WeekStart::Sunday);
        assert!(layout.show_live_time_indicator);
    }

    #[test]
    fn out_of_range_track_start_is_rejected() {
        let layout = LayoutSettings {
            track_start_hour: 24,
            ..LayoutSettings::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn degenerate_hour_height_is_rejected() {
        let zero = LayoutSettings {
            hour_height_px: 0.0,
            ..LayoutSettings::default()
        };
        assert!(zero.validate().is_err());

        let nan = LayoutSettings {
            hour_height_px: f64::NAN,
            ..LayoutSettings::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn builder_failures_map_into_config_error() {
        let err: CoreError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, CoreError::ConfigError(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let layout = LayoutSettings {
            tick_interval_ms: 0,
            ..LayoutSettings::default()
        };
        assert!(layout.validate().is_err());
    }
}
