//! Domain types shared by the Bondrisk crates.

mod date;
mod frequency;
mod identifiers;
mod observation;
mod reference;
mod weights;

pub use date::Date;
pub use frequency::Frequency;
pub use identifiers::Cusip;
pub use observation::{
    Dv01Observation, Metric, MetricObservation, MetricPoint, ObservationWindow, YieldObservation,
};
pub use reference::{BondReference, ReferenceTable};
pub use weights::{checked_sum, WeightEntry, Weights, DEFAULT_WEIGHT_DP};
