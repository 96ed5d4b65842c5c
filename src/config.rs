/// Parameters shared by recording and recognition.
///
/// Every template in a library must be produced with the same
/// `points_per_gesture`: recognition compares records point by point and
/// skips templates of a different size. The constructors validate their
/// inputs so bad values fail here instead of corrupting the arithmetic later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerConfig {
    points_per_gesture: usize,
    standard_ratio: f32,
    anomalies_enabled: bool,
    dev_tightness: f32,
    anomalies_factor: f32,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("points per gesture must be at least 2, got {0}")]
    TooFewPoints(usize),
    #[error("standard ratio must be positive and finite, got {0}")]
    InvalidStandardRatio(f32),
    #[error("deviation tightness must be non-negative and finite, got {0}")]
    InvalidDevTightness(f32),
    #[error("anomalies factor must be non-negative and finite, got {0}")]
    InvalidAnomaliesFactor(f32),
}

impl RecognizerConfig {
    /// Creates a configuration with anomaly weighting disabled.
    ///
    /// `points_per_gesture` is the fixed number of points every record is
    /// resampled to; `standard_ratio` is the size the larger bounding-box
    /// dimension of a stroke is rescaled to.
    pub fn new(points_per_gesture: usize, standard_ratio: f32) -> Result<Self, ConfigError> {
        if points_per_gesture < 2 {
            return Err(ConfigError::TooFewPoints(points_per_gesture));
        }
        if !standard_ratio.is_finite() || standard_ratio <= 0.0 {
            return Err(ConfigError::InvalidStandardRatio(standard_ratio));
        }
        Ok(RecognizerConfig {
            points_per_gesture,
            standard_ratio,
            ..RecognizerConfig::default()
        })
    }

    /// Enables the anomaly-weighted distance metric.
    ///
    /// Indices whose distance deviates from the average by more than
    /// `dev_tightness` times the average contribute `anomalies_factor` times
    /// their distance.
    pub fn with_anomaly_weighting(
        mut self,
        dev_tightness: f32,
        anomalies_factor: f32,
    ) -> Result<Self, ConfigError> {
        if !dev_tightness.is_finite() || dev_tightness < 0.0 {
            return Err(ConfigError::InvalidDevTightness(dev_tightness));
        }
        if !anomalies_factor.is_finite() || anomalies_factor < 0.0 {
            return Err(ConfigError::InvalidAnomaliesFactor(anomalies_factor));
        }
        self.anomalies_enabled = true;
        self.dev_tightness = dev_tightness;
        self.anomalies_factor = anomalies_factor;
        Ok(self)
    }

    pub fn points_per_gesture(&self) -> usize {
        self.points_per_gesture
    }

    pub fn standard_ratio(&self) -> f32 {
        self.standard_ratio
    }

    pub fn anomalies_enabled(&self) -> bool {
        self.anomalies_enabled
    }

    pub fn dev_tightness(&self) -> f32 {
        self.dev_tightness
    }

    pub fn anomalies_factor(&self) -> f32 {
        self.anomalies_factor
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            points_per_gesture: 64,
            standard_ratio: 100.0,
            anomalies_enabled: false,
            dev_tightness: 1.0,
            anomalies_factor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values_are_accepted() {
        let config = RecognizerConfig::new(32, 250.0)
            .unwrap()
            .with_anomaly_weighting(1.5, 3.0)
            .unwrap();
        assert_eq!(config.points_per_gesture(), 32);
        assert_eq!(config.standard_ratio(), 250.0);
        assert!(config.anomalies_enabled());
        assert_eq!(config.dev_tightness(), 1.5);
        assert_eq!(config.anomalies_factor(), 3.0);
    }

    #[test]
    fn the_default_is_valid() {
        let config = RecognizerConfig::default();
        assert!(RecognizerConfig::new(config.points_per_gesture(), config.standard_ratio()).is_ok());
        assert!(!config.anomalies_enabled());
    }

    #[test]
    fn too_few_points_are_rejected() {
        assert_eq!(
            RecognizerConfig::new(1, 100.0),
            Err(ConfigError::TooFewPoints(1))
        );
        assert_eq!(
            RecognizerConfig::new(0, 100.0),
            Err(ConfigError::TooFewPoints(0))
        );
    }

    #[test]
    fn bad_ratios_are_rejected() {
        assert!(RecognizerConfig::new(64, 0.0).is_err());
        assert!(RecognizerConfig::new(64, -10.0).is_err());
        assert!(RecognizerConfig::new(64, f32::NAN).is_err());
        assert!(RecognizerConfig::new(64, f32::INFINITY).is_err());
    }

    #[test]
    fn bad_anomaly_parameters_are_rejected() {
        let config = RecognizerConfig::default();
        assert_eq!(
            config.with_anomaly_weighting(-1.0, 2.0),
            Err(ConfigError::InvalidDevTightness(-1.0))
        );
        assert!(config.with_anomaly_weighting(1.0, f32::NAN).is_err());
    }
}
