use crate::support::constraint::{AboveOne, Constrained, StrictlyPositive};

use super::{GAMMA_RANGE, GAMMA_TYPE, RelationError, Value, violations::Violations};

/// Validated inputs for the characteristic velocity relation.
///
/// Construct with [`CstarInput::new`] for typed callers or
/// [`CstarInput::from_values`] for loosely-typed ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CstarInput {
    gamma: Constrained<f64, AboveOne>,
    specific_gas_constant: Constrained<f64, StrictlyPositive>,
    stagnation_temperature: Constrained<f64, StrictlyPositive>,
}

impl CstarInput {
    /// Validates typed inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::OutOfRange`] listing every field outside its domain.
    pub fn new(
        gamma: f64,
        specific_gas_constant: f64,
        stagnation_temperature: f64,
    ) -> Result<Self, RelationError> {
        Self::from_values(
            &Value::Float(gamma),
            &Value::Float(specific_gas_constant),
            &Value::Float(stagnation_temperature),
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
        specific_gas_constant: &Value,
        stagnation_temperature: &Value,
    ) -> Result<Self, RelationError> {
        let mut types = Violations::new("cstar");
        let gamma = types.float(gamma, GAMMA_TYPE);
        let r = types.float(specific_gas_constant, "R must be a number");
        let t0 = types.float(stagnation_temperature, "T0 must be a number");
        let (Some(gamma), Some(r), Some(t0)) = (gamma, r, t0) else {
            return Err(types.invalid_type());
        };

        let mut ranges = Violations::new("cstar");
        let gamma = ranges.constrain::<AboveOne>(gamma, GAMMA_RANGE);
        let t0 = ranges.constrain::<StrictlyPositive>(t0, "T0 must be greater than 0 K");
        let r = ranges.constrain::<StrictlyPositive>(r, "R must be greater than 0");
        let (Some(gamma), Some(specific_gas_constant), Some(stagnation_temperature)) = (gamma, r, t0)
        else {
            return Err(ranges.out_of_range());
        };

        Ok(Self {
            gamma,
            specific_gas_constant,
            stagnation_temperature,
        })
    }

    /// Ratio of specific heats.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma.into_inner()
    }

    /// Specific gas constant `R`.
    #[must_use]
    pub fn specific_gas_constant(&self) -> f64 {
        self.specific_gas_constant.into_inner()
    }

    /// Chamber stagnation temperature `T0`.
    #[must_use]
    pub fn stagnation_temperature(&self) -> f64 {
        self.stagnation_temperature.into_inner()
    }

    /// Evaluates the characteristic velocity.
    ///
    /// ```text
    /// c* = sqrt( (1/γ) · ((γ+1)/2)^((γ+1)/(γ-1)) · R · T0 )
    /// ```
    ///
    /// The result carries the velocity units implied by `R · T0`
    /// (m/s for J/kg·K and K).
    #[must_use]
    pub fn cstar(&self) -> f64 {
        let gamma = self.gamma();
        let exponent = (gamma + 1.0) / (gamma - 1.0);

        ((1.0 / gamma)
            * ((gamma + 1.0) / 2.0).powf(exponent)
            * self.specific_gas_constant()
            * self.stagnation_temperature())
        .sqrt()
    }
}

/// Computes the characteristic velocity of an ideal rocket.
///
/// Accepts anything convertible into a [`Value`], so numbers that arrive as
/// text or integers are reported rather than silently coerced.
///
/// # Errors
///
/// Returns [`RelationError::InvalidType`] if any argument is not a float,
/// otherwise [`RelationError::OutOfRange`] if any number is outside its domain.
///
/// # Example
///
/// ```
/// use rocket_relations::support::rocket::compute_cstar;
///
/// let cstar = compute_cstar(1.2, 350.0, 3500.0).unwrap();
/// assert!((cstar - 1706.6214).abs() < 1e-4);
/// ```
pub fn compute_cstar(
    gamma: impl Into<Value>,
    specific_gas_constant: impl Into<Value>,
    stagnation_temperature: impl Into<Value>,
) -> Result<f64, RelationError> {
    let input = CstarInput::from_values(
        &gamma.into(),
        &specific_gas_constant.into(),
        &stagnation_temperature.into(),
    )?;
    Ok(input.cstar())
}
