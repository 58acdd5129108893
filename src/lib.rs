//! Emergency incident recording
//!
//! Incidents are comma-delimited lines in a flat text file, rewritten in
//! full on every mutation.

pub mod domain;
pub use domain::{Config, Emergency, EmergencyId, Kind};

/// Flat-file persistence for emergencies.
pub mod storage;
pub use storage::{ParseLineError, Store, StoreError};
