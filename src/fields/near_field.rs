use crate::constants::{DEFAULT_NEAR_FIELD_THRESHOLD, MIN_NEAR_FIELD_THRESHOLD};
use crate::errors::EmFieldError;
use crate::math::{R3, Scalar};

/// Singularity-avoidance policy applied to every source before its contribution
/// is added.
///
/// A source is skipped when the query point lies inside a small square around it
/// in the viewing plane: `dx² <= threshold && dy² <= threshold`. The z component
/// of the displacement is not consulted.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "NearFieldRuleFields")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearFieldRule {
    threshold: Scalar,
}

impl NearFieldRule {
    /// Creates a rule with the given squared in-plane threshold.
    ///
    /// The threshold must be finite and at least [`MIN_NEAR_FIELD_THRESHOLD`];
    /// smaller values let `r³` underflow to zero next to a source.
    pub fn new(threshold: Scalar) -> Result<Self, EmFieldError> {
        if !threshold.is_finite() || threshold < MIN_NEAR_FIELD_THRESHOLD {
            return Err(EmFieldError::InvalidConfig(format!(
                "near-field threshold must be finite and at least {MIN_NEAR_FIELD_THRESHOLD}, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// Squared in-plane threshold.
    #[must_use]
    pub const fn threshold(&self) -> Scalar {
        self.threshold
    }

    /// True when a source displaced by `displacement` from the query point must
    /// contribute nothing.
    #[inline]
    #[must_use]
    pub fn suppresses(&self, displacement: &R3) -> bool {
        displacement.x * displacement.x <= self.threshold
            && displacement.y * displacement.y <= self.threshold
    }
}

impl Default for NearFieldRule {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NEAR_FIELD_THRESHOLD,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct NearFieldRuleFields {
    threshold: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<NearFieldRuleFields> for NearFieldRule {
    type Error = EmFieldError;

    fn try_from(fields: NearFieldRuleFields) -> Result<Self, Self::Error> {
        Self::new(fields.threshold)
    }
}
