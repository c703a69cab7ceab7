//! Configuration options for a statistics run.
//!
//! [`StatsOptions`] selects which of the optional passes [`analyze`] applies
//! after counting and ratio annotation.
//!
//! [`analyze`]: crate::analyze()

use anyhow::{ensure, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling the filter and sort passes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsOptions {
    /// Minimum ratio-to-root a node needs to be kept.
    /// `None` skips filtering entirely.
    pub threshold: Option<f64>,

    /// Whether to order children by descending count.
    pub sort: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            threshold: None,
            sort: true,
        }
    }
}

impl StatsOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Disable filtering.
    pub fn no_threshold(mut self) -> Self {
        self.threshold = None;
        self
    }

    /// Enable or disable sorting.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Check that the options describe a meaningful run.
    ///
    /// Thresholds above 1.0 are allowed and keep only the root.
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            ensure!(
                threshold.is_finite(),
                "threshold must be a finite number, got {}",
                threshold
            );
            ensure!(
                threshold >= 0.0,
                "threshold must not be negative, got {}",
                threshold
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StatsOptions::new();
        assert_eq!(options.threshold, None);
        assert!(options.sort);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = StatsOptions::new().threshold(0.25).sort(false);
        assert_eq!(options.threshold, Some(0.25));
        assert!(!options.sort);

        let options = options.no_threshold();
        assert_eq!(options.threshold, None);
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        assert!(StatsOptions::new().threshold(-0.1).validate().is_err());
        assert!(StatsOptions::new().threshold(f64::NAN).validate().is_err());
        assert!(StatsOptions::new()
            .threshold(f64::INFINITY)
            .validate()
            .is_err());

        assert!(StatsOptions::new().threshold(0.0).validate().is_ok());
        assert!(StatsOptions::new().threshold(1.5).validate().is_ok());
    }
}
