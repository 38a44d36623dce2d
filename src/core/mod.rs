//! Core processing building blocks: fit planning, resize, crop and save
//! helpers. These are internal primitives consumed by the high-level `api`
//! module.
pub mod params;
pub mod processing;
