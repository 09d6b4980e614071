//! Field evaluation settings.

use crate::errors::EmFieldError;
use crate::fields::NearFieldRule;
use crate::math::Scalar;

/// Settings shared by every field sampler.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldConfig {
    near_field: NearFieldRule,
}

impl FieldConfig {
    /// Replaces the near-field threshold, validated as by [`NearFieldRule::new`].
    pub fn with_near_field_threshold(mut self, threshold: Scalar) -> Result<Self, EmFieldError> {
        self.near_field = NearFieldRule::new(threshold)?;
        Ok(self)
    }

    /// Squared in-plane distance under which a source is ignored.
    #[must_use]
    pub const fn near_field_threshold(&self) -> Scalar {
        self.near_field.threshold()
    }

    /// Near-field rule derived from this configuration.
    #[must_use]
    pub const fn near_field(&self) -> NearFieldRule {
        self.near_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_documented_threshold() {
        assert_eq!(FieldConfig::default().near_field_threshold(), 0.05);
        assert_eq!(FieldConfig::default().near_field(), NearFieldRule::default());
    }

    #[test]
    fn rejects_zero_negative_and_nan_thresholds() {
        assert!(matches!(
            FieldConfig::default().with_near_field_threshold(-0.1),
            Err(EmFieldError::InvalidConfig(_))
        ));
        assert!(FieldConfig::default().with_near_field_threshold(0.0).is_err());
        assert!(FieldConfig::default().with_near_field_threshold(Scalar::NAN).is_err());
        let cfg = FieldConfig::default().with_near_field_threshold(0.2).unwrap();
        assert_eq!(cfg.near_field().threshold(), 0.2);
    }
}
