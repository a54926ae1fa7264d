//! Public Twine models.
//!
//! Models are organized into domain-specific submodules (e.g., `propulsion`).
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the relations in [`crate::support`]. Inputs are validated when they are
//! constructed, so the adapters themselves never fail.

pub mod propulsion;
