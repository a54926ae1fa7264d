//! # Rocket Relations
//!
//! Closed-form ideal rocket relations for characteristic velocity (c*) and
//! thrust coefficient (Cf), with [Twine](https://github.com/isentropic-dev/twine)
//! model adapters.
//!
//! ## Crate layout
//!
//! - [`support`]: The relations themselves, their input validation, and the
//!   numeric constraints they are built on.
//! - [`models`]: Thin [`twine_core::Model`] adapters over the relations.
//!
//! ## Quick start
//!
//! ```
//! use rocket_relations::support::rocket::{compute_cf, compute_cstar};
//!
//! let cstar = compute_cstar(1.2, 350.0, 3500.0).unwrap();
//! let cf = compute_cf(1.2, 0.0125, 0.02, 10.0).unwrap();
//!
//! assert!((cstar - 1706.6214).abs() < 1e-4);
//! assert!((cf - 1.5423079).abs() < 1e-4);
//! ```
//!
//! ## Validation
//!
//! Every relation validates in two phases. The type phase rejects anything
//! that is not a floating-point number, and only when every argument passes
//! does the range phase check the physical domains. Each phase reports all of
//! its violations together in a [`RelationError`](support::rocket::RelationError).

pub mod models;
pub mod support;
