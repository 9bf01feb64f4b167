//! Portfolio aggregation over weighted bond series.

mod changes;
mod series;
mod validation;

pub use changes::*;
pub use series::*;
pub use validation::*;
