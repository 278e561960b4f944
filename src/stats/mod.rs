//! Timing samples and the statistics derived from them

pub mod measurement;
pub mod summary;

pub use measurement::{CandidateMeasurement, MeasurementOutcome};
pub use summary::Summary;
