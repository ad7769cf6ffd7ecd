//! Matching configuration.
//!
//! The defaults reproduce the tuned behavior of the title matcher and should
//! only be changed for experiments. Values can be set explicitly on the
//! builder or through the environment.

use thiserror::Error;

/// Minimum adjusted score a segment must strictly exceed to be selected.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Added to a segment's score when it contains the original title.
pub const DEFAULT_CONTAINMENT_BONUS: f64 = 0.5;

/// Environment variable overriding the selection threshold.
pub const THRESHOLD_ENV: &str = "TAGMEND_THRESHOLD";

/// Environment variable overriding the containment bonus.
pub const CONTAINMENT_BONUS_ENV: &str = "TAGMEND_CONTAINMENT_BONUS";

/// Errors raised while building a [`MatchConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable held something that is not a number.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Threshold outside `[0.0, 1.0]` or not finite.
    #[error("Threshold must be between 0.0 and 1.0, got {0}")]
    ThresholdOutOfRange(f64),

    /// Bonus negative or not finite.
    #[error("Containment bonus must be a non-negative number, got {0}")]
    BonusOutOfRange(f64),
}

/// Tuning values used by the title selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    threshold: f64,
    containment_bonus: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            containment_bonus: DEFAULT_CONTAINMENT_BONUS,
        }
    }
}

impl MatchConfig {
    /// Returns a builder for a custom configuration.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::new()
    }

    /// Score a segment must strictly exceed to be selected.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Bonus for segments containing the original title.
    pub fn containment_bonus(&self) -> f64 {
        self.containment_bonus
    }
}

/// Builder for constructing `MatchConfig` instances.
///
/// # Examples
///
/// ```
/// use tagmend::MatchConfig;
///
/// let config = MatchConfig::builder()
///     .threshold(0.4)
///     .containment_bonus(0.5)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.threshold(), 0.4);
/// ```
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    threshold: Option<f64>,
    containment_bonus: Option<f64>,
}

impl MatchConfigBuilder {
    /// Creates a new `MatchConfigBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the containment bonus.
    pub fn containment_bonus(mut self, bonus: f64) -> Self {
        self.containment_bonus = Some(bonus);
        self
    }

    /// Builds the `MatchConfig`.
    ///
    /// # Environment Variables
    ///
    /// Values not set on the builder are read from `TAGMEND_THRESHOLD` and
    /// `TAGMEND_CONTAINMENT_BONUS`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment value does not parse or a
    /// value is out of range.
    pub fn build(self) -> Result<MatchConfig, ConfigError> {
        let threshold = match self.threshold {
            Some(value) => value,
            None => env_f64(THRESHOLD_ENV)?.unwrap_or(DEFAULT_THRESHOLD),
        };
        let containment_bonus = match self.containment_bonus {
            Some(value) => value,
            None => env_f64(CONTAINMENT_BONUS_ENV)?.unwrap_or(DEFAULT_CONTAINMENT_BONUS),
        };

        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        if !containment_bonus.is_finite() || containment_bonus < 0.0 {
            return Err(ConfigError::BonusOutOfRange(containment_bonus));
        }

        Ok(MatchConfig {
            threshold,
            containment_bonus,
        })
    }
}

fn env_f64(var: &'static str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::remove_var(THRESHOLD_ENV);
            std::env::remove_var(CONTAINMENT_BONUS_ENV);
        }
    }

    #[test]
    fn default_values_are_preserved() {
        let config = MatchConfig::default();

        assert_eq!(config.threshold(), 0.3);
        assert_eq!(config.containment_bonus(), 0.5);
    }

    #[test]
    #[serial]
    fn builder_without_env_matches_default() {
        clear_env();

        let config = MatchConfig::builder().build().unwrap();

        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    #[serial]
    fn env_overrides_default() {
        clear_env();
        // SAFETY: serialized test.
        unsafe { std::env::set_var(THRESHOLD_ENV, "0.45") };

        let config = MatchConfig::builder().build().unwrap();
        clear_env();

        assert_eq!(config.threshold(), 0.45);
        assert_eq!(config.containment_bonus(), DEFAULT_CONTAINMENT_BONUS);
    }

    #[test]
    #[serial]
    fn explicit_value_beats_env() {
        clear_env();
        // SAFETY: serialized test.
        unsafe { std::env::set_var(CONTAINMENT_BONUS_ENV, "0.9") };

        let config = MatchConfig::builder()
            .containment_bonus(0.25)
            .build()
            .unwrap();
        clear_env();

        assert_eq!(config.containment_bonus(), 0.25);
    }

    #[test]
    #[serial]
    fn unparseable_env_is_rejected() {
        clear_env();
        // SAFETY: serialized test.
        unsafe { std::env::set_var(THRESHOLD_ENV, "high") };

        let result = MatchConfig::builder().build();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::InvalidEnv {
                var: THRESHOLD_ENV,
                value: "high".to_string()
            })
        );
    }

    #[test]
    #[serial]
    fn out_of_range_values_are_rejected() {
        clear_env();

        assert_eq!(
            MatchConfig::builder().threshold(1.5).build(),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
        assert!(matches!(
            MatchConfig::builder().threshold(f64::NAN).build(),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert_eq!(
            MatchConfig::builder().containment_bonus(-0.1).build(),
            Err(ConfigError::BonusOutOfRange(-0.1))
        );
    }
}
