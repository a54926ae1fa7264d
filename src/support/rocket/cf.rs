use crate::support::constraint::{AboveOne, AtLeastOne, Constrained, UnitIntervalUpperOpen};

use super::{GAMMA_RANGE, GAMMA_TYPE, RelationError, Value, violations::Violations};

/// Validated inputs for the thrust coefficient relation.
///
/// Pressure ratios are normalized by the chamber stagnation pressure and
/// the area ratio is exit area over throat area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CfInput {
    gamma: Constrained<f64, AboveOne>,
    pressure_ratio_exit: Constrained<f64, UnitIntervalUpperOpen>,
    pressure_ratio_ambient: Constrained<f64, UnitIntervalUpperOpen>,
    area_ratio: Constrained<f64, AtLeastOne>,
}

impl CfInput {
    /// Validates typed inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::OutOfRange`] listing every field outside its domain.
    pub fn new(
        gamma: f64,
        pressure_ratio_exit: f64,
        pressure_ratio_ambient: f64,
        area_ratio: f64,
    ) -> Result<Self, RelationError> {
        Self::from_values(
            &Value::Float(gamma),
            &Value::Float(pressure_ratio_exit),
            &Value::Float(pressure_ratio_ambient),
            &Value::Float(area_ratio),
        )
    }

    /// Validates loosely-typed inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::InvalidType`] if any value is not a float,
    /// otherwise [`RelationError::OutOfRange`] if any number is outside its domain.
    pub fn from_values(
        gamma: &Value,
        pressure_ratio_exit: &Value,
        pressure_ratio_ambient: &Value,
        area_ratio: &Value,
    ) -> Result<Self, RelationError> {
        let mut types = Violations::new("cf");
        let gamma = types.float(gamma, GAMMA_TYPE);
        let pe = types.float(pressure_ratio_exit, "Pe/P0 must be a number");
        let pa = types.float(pressure_ratio_ambient, "Pa/P0 must be a number");
        let ae = types.float(area_ratio, "Ae/A* must be a number");
        let (Some(gamma), Some(pe), Some(pa), Some(ae)) = (gamma, pe, pa, ae) else {
            return Err(types.invalid_type());
        };

        let mut ranges = Violations::new("cf");
        let gamma = ranges.constrain::<AboveOne>(gamma, GAMMA_RANGE);
        let pe = ranges.constrain::<UnitIntervalUpperOpen>(pe, "Pe/P0 must be in range [0,1)");
        let pa = ranges.constrain::<UnitIntervalUpperOpen>(pa, "Pa/P0 must be in range [0,1)");
        let ae = ranges.constrain::<AtLeastOne>(ae, "Ae/A* must be >= 1");
        let (Some(gamma), Some(pressure_ratio_exit), Some(pressure_ratio_ambient), Some(area_ratio)) =
            (gamma, pe, pa, ae)
        else {
            return Err(ranges.out_of_range());
        };

        Ok(Self {
            gamma,
            pressure_ratio_exit,
            pressure_ratio_ambient,
            area_ratio,
        })
    }

    /// Ratio of specific heats.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma.into_inner()
    }

    /// Exit pressure over stagnation pressure, `Pe/P0`.
    #[must_use]
    pub fn pressure_ratio_exit(&self) -> f64 {
        self.pressure_ratio_exit.into_inner()
    }

    /// Ambient pressure over stagnation pressure, `Pa/P0`.
    #[must_use]
    pub fn pressure_ratio_ambient(&self) -> f64 {
        self.pressure_ratio_ambient.into_inner()
    }

    /// Exit area over throat area, `Ae/A*`.
    #[must_use]
    pub fn area_ratio(&self) -> f64 {
        self.area_ratio.into_inner()
    }

    /// Evaluates the thrust coefficient.
    ///
    /// ```text
    /// Cf = sqrt( 2γ²/(γ-1) · (2/(γ+1))^((γ+1)/(γ-1)) · (1 - (Pe/P0)^((γ-1)/γ)) )
    ///      + (Pe/P0 - Pa/P0) · Ae/A*
    /// ```
    ///
    /// The first term is the momentum thrust and the second the pressure
    /// thrust. An over-expanded nozzle (`Pe < Pa`) has a negative pressure
    /// term, so the result can drop below zero for extreme area ratios.
    #[must_use]
    pub fn cf(&self) -> f64 {
        let gamma = self.gamma();
        let pe = self.pressure_ratio_exit();
        let pa = self.pressure_ratio_ambient();

        let momentum = ((2.0 * gamma.powi(2) / (gamma - 1.0))
            * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0))
            * (1.0 - pe.powf((gamma - 1.0) / gamma)))
        .sqrt();

        momentum + (pe - pa) * self.area_ratio()
    }
}

/// Computes the thrust coefficient of an ideal rocket nozzle.
///
/// # Errors
///
/// Returns [`RelationError::InvalidType`] if any argument is not a float,
/// otherwise [`RelationError::OutOfRange`] if any number is outside its domain.
///
/// # Example
///
/// ```
/// use rocket_relations::support::rocket::{compute_cf, RelationError};
///
/// let cf = compute_cf(1.2, 0.0125, 0.02, 10.0).unwrap();
/// assert!((cf - 1.5423079).abs() < 1e-4);
///
/// assert!(matches!(
///     compute_cf(1.2, 1.5, 0.02, 10.0),
///     Err(RelationError::OutOfRange(_)),
/// ));
/// ```
pub fn compute_cf(
    gamma: impl Into<Value>,
    pressure_ratio_exit: impl Into<Value>,
    pressure_ratio_ambient: impl Into<Value>,
    area_ratio: impl Into<Value>,
) -> Result<f64, RelationError> {
    let input = CfInput::from_values(
        &gamma.into(),
        &pressure_ratio_exit.into(),
        &pressure_ratio_ambient.into(),
        &area_ratio.into(),
    )?;
    Ok(input.cf())
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn reference_nozzle() {
        let cf = compute_cf(1.2, 0.0125, 0.02, 10.0).unwrap();
        assert_abs_diff_eq!(cf, 1.542_307_9, epsilon = 1e-4);
    }

    #[test]
    fn vacuum_exit_gives_the_ideal_limit() {
        // With Pe = Pa = 0 only the momentum term remains.
        let gamma: f64 = 1.4;
        let limit = (2.0 * gamma.powi(2) / (gamma - 1.0)
            * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0)))
        .sqrt();

        let cf = compute_cf(gamma, 0.0, 0.0, 50.0).unwrap();
        assert_relative_eq!(cf, limit, max_relative = 1e-12);
    }

    #[test]
    fn matched_expansion_has_no_pressure_thrust() {
        let small = compute_cf(1.3, 0.01, 0.01, 1.0).unwrap();
        let large = compute_cf(1.3, 0.01, 0.01, 40.0).unwrap();
        assert_relative_eq!(small, large);
    }

    #[test]
    fn finite_across_the_domain() {
        for gamma in [1.01, 1.2, 1.4, 1.67] {
            for pe in [0.0, 0.001, 0.1, 0.5, 0.999] {
                for pa in [0.0, 0.02, 0.5] {
                    for ae in [1.0, 2.5, 10.0, 100.0] {
                        let cf = compute_cf(gamma, pe, pa, ae).unwrap();
                        assert!(cf.is_finite(), "Cf({gamma}, {pe}, {pa}, {ae})");
                    }
                }
            }
        }
    }

    #[test]
    fn boundaries() {
        assert!(compute_cf(1.2, 0.0, 0.0, 1.0).is_ok());
        assert!(compute_cf(1.2, 1.0 - f64::EPSILON, 0.0, 1.0).is_ok());

        let err = compute_cf(1.2, 1.0, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            RelationError::OutOfRange(vec!["Pe/P0 must be in range [0,1)".to_string()])
        );

        let err = compute_cf(1.0, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, RelationError::OutOfRange(vec![GAMMA_RANGE.to_string()]));
    }

    #[test]
    fn exit_pressure_above_chamber_is_out_of_range() {
        let err = compute_cf(1.2, 1.5, 0.02, 10.0).unwrap_err();
        assert_eq!(
            err,
            RelationError::OutOfRange(vec!["Pe/P0 must be in range [0,1)".to_string()])
        );
    }

    #[test]
    fn every_range_violation_is_reported_in_order() {
        let err = compute_cf(0.5, -0.1, 1.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            RelationError::OutOfRange(vec![
                GAMMA_RANGE.to_string(),
                "Pe/P0 must be in range [0,1)".to_string(),
                "Pa/P0 must be in range [0,1)".to_string(),
                "Ae/A* must be >= 1".to_string(),
            ])
        );
    }

    #[test]
    fn every_type_violation_is_reported_in_order() {
        let err = compute_cf("gamma", 0, "0.02", 10).unwrap_err();
        assert_eq!(
            err,
            RelationError::InvalidType(vec![
                GAMMA_TYPE.to_string(),
                "Pe/P0 must be a number".to_string(),
                "Pa/P0 must be a number".to_string(),
                "Ae/A* must be a number".to_string(),
            ])
        );
    }

    #[test]
    fn type_errors_suppress_range_checks() {
        let err = compute_cf(0.5, 2.0, "ambient", 0.1).unwrap_err();
        assert_eq!(err.messages(), ["Pa/P0 must be a number"]);
        assert!(matches!(err, RelationError::InvalidType(_)));
    }

    #[test]
    fn accessors_return_validated_fields() {
        let input = CfInput::new(1.2, 0.0125, 0.02, 10.0).unwrap();
        assert_relative_eq!(input.gamma(), 1.2);
        assert_relative_eq!(input.pressure_ratio_exit(), 0.0125);
        assert_relative_eq!(input.pressure_ratio_ambient(), 0.02);
        assert_relative_eq!(input.area_ratio(), 10.0);
        assert_relative_eq!(input.cf(), compute_cf(1.2, 0.0125, 0.02, 10.0).unwrap());
    }
}
