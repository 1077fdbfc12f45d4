//! Maintenance domain layer
//!
//! Entities for aircraft, components and their requirements, the prediction
//! engine that turns them into due-date estimates, and the policies that
//! engine relies on. Nothing in here performs I/O.

pub mod domain;
pub mod policies;
pub mod services;
