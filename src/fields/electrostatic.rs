use log::debug;

use crate::config::FieldConfig;
use crate::math::{R3, Scalar};
use crate::sampling::VectorField;

use super::near_field::NearFieldRule;

/// Sign of a point charge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Strictly positive magnitude.
    Positive,
    /// Zero or negative magnitude.
    Negative,
}

/// Point charge with a unitless signed magnitude.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Current position. May be moved between field queries.
    pub position: R3,
    /// Signed magnitude.
    pub magnitude: Scalar,
}

impl PointCharge {
    /// Creates a charge of `magnitude` at `position`.
    #[must_use]
    pub const fn new(position: R3, magnitude: Scalar) -> Self {
        Self { position, magnitude }
    }

    /// Polarity derived from the sign of the magnitude.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        if self.magnitude > 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Places the charge at `position`.
    pub fn move_to(&mut self, position: R3) -> &mut Self {
        self.position = position;
        self
    }

    /// Translates the charge by `offset`.
    pub fn shift(&mut self, offset: R3) -> &mut Self {
        self.position += offset;
        self
    }
}

impl Default for PointCharge {
    fn default() -> Self {
        Self::new(R3::zeros(), 1.0)
    }
}

/// Electric field E at `point` due to discrete point charges, up to Coulomb's constant.
///
/// Charges whose in-plane offset falls inside `rule` contribute nothing.
#[must_use]
pub fn electric_field_from_point_charges(point: R3, charges: &[PointCharge], rule: &NearFieldRule) -> R3 {
    let mut e = R3::zeros();
    for c in charges {
        let r_vec = point - c.position;
        if rule.suppresses(&r_vec) {
            continue;
        }
        let r3 = r_vec.norm_squared().powf(1.5);
        e += r_vec * (c.magnitude / r3);
    }
    e
}

/// Force on a charge, drawn from the charge's position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceVector {
    /// Point the vector is drawn from.
    pub anchor: R3,
    /// Force components.
    pub vector: R3,
}

impl ForceVector {
    /// End point of the arrow.
    #[must_use]
    pub fn tip(&self) -> R3 {
        self.anchor + self.vector
    }
}

/// Electrostatic field of a set of point charges.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElectricField {
    charges: Vec<PointCharge>,
    config: FieldConfig,
}

impl ElectricField {
    /// Builds a field from `charges` using the default configuration.
    #[must_use]
    pub fn new(charges: impl IntoIterator<Item = PointCharge>) -> Self {
        Self::with_config(charges, FieldConfig::default())
    }

    /// Builds a field from `charges` using `config`.
    #[must_use]
    pub fn with_config(charges: impl IntoIterator<Item = PointCharge>, config: FieldConfig) -> Self {
        let charges: Vec<_> = charges.into_iter().collect();
        debug!(
            "electric field over {} charge(s), near-field threshold {}",
            charges.len(),
            config.near_field_threshold()
        );
        Self { charges, config }
    }

    /// Source charges.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Mutable access to the sources, for moving charges between queries.
    pub fn charges_mut(&mut self) -> &mut [PointCharge] {
        &mut self.charges
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Field vector at `point`.
    #[must_use]
    pub fn field_at(&self, point: R3) -> R3 {
        electric_field_from_point_charges(point, &self.charges, &self.config.near_field())
    }

    /// Force on `charge`, sampled at its own position.
    ///
    /// If `charge` is one of this field's sources its own term falls inside the
    /// near-field zone and drops out.
    #[must_use]
    pub fn force_on_charge(&self, charge: &PointCharge) -> ForceVector {
        ForceVector {
            anchor: charge.position,
            vector: self.field_at(charge.position) * charge.magnitude,
        }
    }
}

impl VectorField for ElectricField {
    fn value_at(&self, point: R3) -> R3 {
        self.field_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_charge() -> PointCharge {
        PointCharge::new(R3::zeros(), 1.0)
    }

    #[test]
    fn unit_charge_at_unit_distance() {
        let e = electric_field_from_point_charges(R3::new(1.0, 0.0, 0.0), &[unit_charge()], &NearFieldRule::default());
        assert_relative_eq!(e, R3::new(1.0, 0.0, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn near_field_zone_is_exactly_zero() {
        let strong = PointCharge::new(R3::zeros(), 1.0e9);
        let e = electric_field_from_point_charges(R3::new(0.1, 0.1, 0.0), &[strong], &NearFieldRule::default());
        assert_eq!(e, R3::zeros());
    }

    #[test]
    fn far_field_follows_inverse_square() {
        let q = PointCharge::new(R3::zeros(), 2.5);
        let p = R3::new(30.0, -40.0, 0.0);
        let e = electric_field_from_point_charges(p, &[q], &NearFieldRule::default());
        let expected = p * (2.5 / p.norm().powi(3));
        assert_relative_eq!(e, expected, max_relative = 1.0e-12);
        assert_relative_eq!(e.norm(), 2.5 / 2500.0, max_relative = 1.0e-12);
    }

    #[test]
    fn z_offset_enters_magnitude_but_not_suppression() {
        let p = R3::new(1.0, 0.0, 1.0);
        let e = electric_field_from_point_charges(p, &[unit_charge()], &NearFieldRule::default());
        assert_relative_eq!(e, p / 2.0_f64.powf(1.5), epsilon = 1.0e-12);

        let above = electric_field_from_point_charges(R3::new(0.0, 0.0, 5.0), &[unit_charge()], &NearFieldRule::default());
        assert_eq!(above, R3::zeros());
    }

    #[test]
    fn negative_charge_points_inward() {
        let field = ElectricField::new([PointCharge::new(R3::zeros(), -1.0)]);
        let e = field.field_at(R3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(e, R3::new(0.0, -0.25, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn force_is_magnitude_times_field_at_own_position() {
        let a = PointCharge::new(R3::new(-1.0, 0.0, 0.0), 2.0);
        let b = PointCharge::new(R3::new(1.0, 0.0, 0.0), -3.0);
        let field = ElectricField::new([a, b]);
        let force = field.force_on_charge(&a);
        assert_eq!(force.anchor, a.position);
        assert_relative_eq!(force.vector, field.field_at(a.position) * 2.0, epsilon = 1.0e-12);
        // Attraction toward b: E at a from b is -3 * (-2, 0, 0) / 8.
        assert_relative_eq!(force.vector, R3::new(1.5, 0.0, 0.0), epsilon = 1.0e-12);
        assert_relative_eq!(force.tip(), R3::new(0.5, 0.0, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn isolated_charge_feels_no_force() {
        let q = PointCharge::new(R3::new(3.0, 4.0, 0.0), 5.0);
        let field = ElectricField::new([q]);
        assert_eq!(field.force_on_charge(&q).vector, R3::zeros());
    }

    #[test]
    fn moved_charge_is_read_live() {
        let mut field = ElectricField::new([unit_charge()]);
        let p = R3::new(1.0, 0.0, 0.0);
        let before = field.field_at(p);
        field.charges_mut()[0].move_to(R3::new(-1.0, 0.0, 0.0));
        let after = field.field_at(p);
        assert_relative_eq!(before, R3::new(1.0, 0.0, 0.0), epsilon = 1.0e-12);
        assert_relative_eq!(after, R3::new(0.25, 0.0, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn polarity_follows_sign() {
        assert_eq!(unit_charge().polarity(), Polarity::Positive);
        assert_eq!(PointCharge::new(R3::zeros(), -0.5).polarity(), Polarity::Negative);
        assert_eq!(PointCharge::new(R3::zeros(), 0.0).polarity(), Polarity::Negative);
    }

    #[test]
    fn smallest_threshold_keeps_samples_finite() {
        let cfg = FieldConfig::default()
            .with_near_field_threshold(crate::constants::MIN_NEAR_FIELD_THRESHOLD)
            .unwrap();
        let field = ElectricField::with_config([unit_charge()], cfg);
        assert_eq!(field.field_at(R3::new(1.0e-160, 0.0, 0.0)), R3::zeros());
        let just_outside = field.field_at(R3::new(1.1e-6, 0.0, 0.0));
        assert!(just_outside.iter().all(|c| c.is_finite()));
        assert_relative_eq!(just_outside.x, 1.0 / 1.21e-12, max_relative = 1.0e-9);
    }

    #[test]
    fn custom_threshold_shrinks_dead_zone() {
        let cfg = FieldConfig::default().with_near_field_threshold(0.001).unwrap();
        let field = ElectricField::with_config([unit_charge()], cfg);
        assert!(field.field_at(R3::new(0.1, 0.1, 0.0)).norm() > 0.0);
    }
}
