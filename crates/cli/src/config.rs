use thiserror::Error;

/// Dart counts above this trigger the slow-plot warning.
pub const PLOT_WARNING_THRESHOLD: i64 = 50_000;

/// Trials between progress log records.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Settings for the console program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    warning_threshold: i64,
    progress_interval: u64,
}

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("progress_interval must be at least 1")]
    ProgressInterval,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(PLOT_WARNING_THRESHOLD, PROGRESS_INTERVAL).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the progress interval is zero.
    pub fn new(warning_threshold: i64, progress_interval: u64) -> Result<Self, ConfigError> {
        if progress_interval == 0 {
            return Err(ConfigError::ProgressInterval);
        }

        Ok(Self {
            warning_threshold,
            progress_interval,
        })
    }

    /// Dart counts above this trigger the slow-plot warning.
    #[must_use]
    pub fn warning_threshold(&self) -> i64 {
        self.warning_threshold
    }

    /// Trials between progress log records.
    #[must_use]
    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_standard_settings() {
        let config = Config::default();
        assert_eq!(config.warning_threshold(), 50_000);
        assert_eq!(config.progress_interval(), 100_000);
        assert_eq!(Config::new(50_000, 100_000), Ok(config));
    }

    #[test]
    fn rejects_zero_progress_interval() {
        assert_eq!(Config::new(10, 0), Err(ConfigError::ProgressInterval));
    }
}
