//! Rocket propulsion models.

pub mod nozzle;
