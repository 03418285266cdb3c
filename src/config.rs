use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::framing::ProfileId;
use crate::math::units::cm_to_feet;

/// Parameters chosen for a framing run.
///
/// Lengths suffixed `_cm` are centimeters; the others are internal units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingConfig {
    /// Profile for boundary tracks and opening members.
    pub exterior_profile: ProfileId,

    /// Profile for studs, nogging and braces.
    pub interior_profile: ProfileId,

    /// Target distance between studs.
    pub stud_spacing_cm: f64,

    /// Gap left between interior members and the top of the wall.
    pub head_clearance_cm: f64,

    /// Members whose endpoints differ in height by less than this are horizontal.
    pub horizontal_tolerance: f64,

    /// Horizontal members with both endpoints above this height face down.
    pub elevated_threshold: f64,

    /// Prefix of the view filter created for each panel name.
    pub filter_prefix: String,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            exterior_profile: ProfileId::default(),
            interior_profile: ProfileId::default(),
            stud_spacing_cm: 60.0,
            head_clearance_cm: 5.0,
            horizontal_tolerance: 1.0,
            elevated_threshold: 1.0,
            filter_prefix: "LSF_".to_owned(),
        }
    }
}

impl FramingConfig {
    /// Creates a configuration with the given profiles and spacing, other
    /// values at their defaults.
    #[must_use]
    pub fn new(exterior: ProfileId, interior: ProfileId, stud_spacing_cm: f64) -> Self {
        Self {
            exterior_profile: exterior,
            interior_profile: interior,
            stud_spacing_cm,
            ..Default::default()
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` on empty profile ids, non-positive
    /// lengths or a non-finite spacing or threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exterior_profile.0.is_empty() || self.interior_profile.0.is_empty() {
            return Err(ConfigError::Invalid("profile ids must not be empty".into()));
        }
        if !self.stud_spacing_cm.is_finite() || self.stud_spacing_cm <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stud spacing must be positive, got {}",
                self.stud_spacing_cm
            )));
        }
        if self.head_clearance_cm.is_nan() || self.head_clearance_cm < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "head clearance must not be negative, got {}",
                self.head_clearance_cm
            )));
        }
        if self.horizontal_tolerance.is_nan() || self.horizontal_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(
                "horizontal tolerance must be positive".into(),
            ));
        }
        if !self.elevated_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "elevated threshold must be finite, got {}",
                self.elevated_threshold
            )));
        }
        Ok(())
    }

    /// Stud spacing in internal units.
    #[must_use]
    pub fn stud_spacing(&self) -> f64 {
        cm_to_feet(self.stud_spacing_cm)
    }

    /// Head clearance in internal units.
    #[must_use]
    pub fn head_clearance(&self) -> f64 {
        cm_to_feet(self.head_clearance_cm)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = FramingConfig::from_json(
            r#"{ "exterior_profile": "C140", "interior_profile": "C90", "stud_spacing_cm": 40 }"#,
        )
        .unwrap();
        assert_eq!(config.exterior_profile, ProfileId::from("C140"));
        assert_relative_eq!(config.head_clearance_cm, 5.0);
        assert_eq!(config.filter_prefix, "LSF_");
        assert_relative_eq!(config.stud_spacing(), 40.0 / 30.48);
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let err = FramingConfig::from_json(
            r#"{ "exterior_profile": "C140", "interior_profile": "C90", "stud_spacing_cm": 0 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut config = FramingConfig::new("C140".into(), "C90".into(), 60.0);
        assert!(config.validate().is_ok());

        config.elevated_threshold = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.elevated_threshold = 1.0;
        config.stud_spacing_cm = f64::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_profiles_are_rejected() {
        assert!(FramingConfig::default().validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FramingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
