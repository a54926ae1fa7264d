//! Ideal rocket nozzle performance models.
//!
//! # Example
//!
//! ```
//! use rocket_relations::models::propulsion::nozzle::{CharacteristicVelocity, ThrustCoefficient};
//! use rocket_relations::support::rocket::{CfInput, CstarInput};
//! use twine_core::Model;
//!
//! let cstar = CharacteristicVelocity
//!     .call(&CstarInput::new(1.2, 350.0, 3500.0).unwrap())
//!     .unwrap();
//! let cf = ThrustCoefficient
//!     .call(&CfInput::new(1.2, 0.0125, 0.02, 10.0).unwrap())
//!     .unwrap();
//!
//! assert!((cstar - 1706.6214).abs() < 1e-4);
//! assert!((cf - 1.5423079).abs() < 1e-4);
//! ```

use std::convert::Infallible;

use twine_core::Model;

use crate::support::rocket::{CfInput, CstarInput};

/// Characteristic velocity (c\*) of an ideal rocket chamber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacteristicVelocity;

impl Model for CharacteristicVelocity {
    type Input = CstarInput;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.cstar())
    }
}

/// Thrust coefficient (Cf) of an ideal rocket nozzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrustCoefficient;

impl Model for ThrustCoefficient {
    type Input = CfInput;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.cf())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::rocket::{compute_cf, compute_cstar};

    #[test]
    fn characteristic_velocity_matches_relation() {
        let input = CstarInput::new(1.3, 287.0, 3200.0).unwrap();
        let Ok(cstar) = CharacteristicVelocity.call(&input);

        assert_relative_eq!(cstar, compute_cstar(1.3, 287.0, 3200.0).unwrap());
    }

    #[test]
    fn thrust_coefficient_matches_relation() {
        let input = CfInput::new(1.25, 0.005, 0.0, 25.0).unwrap();
        let Ok(cf) = ThrustCoefficient.call(&input);

        assert_relative_eq!(cf, compute_cf(1.25, 0.005, 0.0, 25.0).unwrap());
    }

    #[test]
    fn models_are_reusable_across_inputs() {
        let model = ThrustCoefficient;
        let sea_level = CfInput::new(1.2, 0.0125, 0.0125, 10.0).unwrap();
        let vacuum = CfInput::new(1.2, 0.0125, 0.0, 10.0).unwrap();

        let Ok(at_sea_level) = model.call(&sea_level);
        let Ok(in_vacuum) = model.call(&vacuum);

        assert!(in_vacuum > at_sea_level);
        assert_relative_eq!(in_vacuum - at_sea_level, 0.0125 * 10.0, max_relative = 1e-12);
    }
}
