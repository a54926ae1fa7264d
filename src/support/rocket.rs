//! Ideal rocket relations.
//!
//! This module evaluates two closed-form performance metrics of an ideal
//! rocket nozzle:
//!
//! - **Characteristic velocity** (c\*): [`compute_cstar`] / [`CstarInput::cstar`]
//! - **Thrust coefficient** (Cf): [`compute_cf`] / [`CfInput::cf`]
//!
//! # Assumptions
//!
//! - Calorically perfect gas with a constant ratio of specific heats `γ`
//! - Steady, one-dimensional, isentropic flow through the nozzle
//! - Stagnation conditions in the chamber
//!
//! # Validation
//!
//! Inputs pass through two phases, each of which reports every violation at
//! once in a [`RelationError`]:
//!
//! 1. **Type phase**: every argument must be a floating-point [`Value`].
//!    Integers and text are rejected with [`RelationError::InvalidType`].
//! 2. **Range phase**: only reached when the type phase passes. Each number
//!    must lie in its physical domain, or [`RelationError::OutOfRange`] is
//!    returned.
//!
//! A validated [`CstarInput`] or [`CfInput`] stores its fields as
//! [`Constrained`](crate::support::constraint::Constrained) values, so the
//! relations themselves cannot fail.
//!
//! # Example
//!
//! ```
//! use rocket_relations::support::rocket::{compute_cstar, RelationError};
//!
//! let err = compute_cstar("1.2", 350.0, 3500).unwrap_err();
//! assert_eq!(
//!     err,
//!     RelationError::InvalidType(vec![
//!         "gamma must be a number".to_string(),
//!         "T0 must be a number".to_string(),
//!     ]),
//! );
//! ```

mod cf;
mod cstar;
mod error;
mod value;
mod violations;

pub use cf::{CfInput, compute_cf};
pub use cstar::{CstarInput, compute_cstar};
pub use error::RelationError;
pub use value::Value;

/// Range message shared by both relations for the ratio of specific heats.
const GAMMA_RANGE: &str = "gamma must be greater than 1 (should be less than 1.8 as well)";

/// Type message shared by both relations for the ratio of specific heats.
const GAMMA_TYPE: &str = "gamma must be a number";
