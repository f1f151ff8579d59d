use masterror::Error;

use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// The clock would never tick.
    #[error("clock tick interval must be greater than 0 ms")]
    ZeroTickInterval,

    /// The scale factor is outside the supported `(0, 2]` range.
    #[error("scale factor {value} is outside the supported range (0, 2]")]
    ScaleFactorOutOfRange { value: f64 },

    /// The window or text would not be visible.
    #[error("{field} must be greater than 0, got {value}")]
    NonPositiveSize { field: &'static str, value: f32 }
}

impl Config {
    /// Validates values that serde defaults cannot guarantee on their own,
    /// e.g. configs assembled in code.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use digiclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.clock.tick_interval_ms == 0 {
            return Err(ConfigValidationError::ZeroTickInterval);
        }

        let scale_factor = self.appearance.scale_factor;
        if scale_factor <= 0.0 || scale_factor > 2.0 {
            return Err(ConfigValidationError::ScaleFactorOutOfRange {
                value: scale_factor
            });
        }

        for (field, value) in [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("appearance.time_text_size", self.appearance.time_text_size)
        ] {
            if value <= 0.0 {
                return Err(ConfigValidationError::NonPositiveSize {
                    field,
                    value
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_tick_interval() {
        let mut config = Config::default();
        config.clock.tick_interval_ms = 0;

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroTickInterval)
        );
    }

    #[test]
    fn validate_rejects_scale_factor_out_of_range() {
        let mut config = Config::default();
        config.appearance.scale_factor = 3.0;

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ScaleFactorOutOfRange {
                value: 3.0
            })
        );
    }

    #[test]
    fn validate_rejects_collapsed_window() {
        let mut config = Config::default();
        config.window.height = 0.0;

        let err = config.validate().expect_err("zero height must fail");
        assert!(err.to_string().contains("window.height"));
    }
}
