//! DV01 batch pass over a yield history.
//!
//! Each yield observation is joined to its bond reference by cusip and priced
//! independently. A failing row does not stop the run: failures are
//! collected with their row index and returned next to the computed rows.

use bondrisk_core::types::{Cusip, Date, Dv01Observation, ReferenceTable, YieldObservation};
use bondrisk_core::{RiskConfig, RiskError, RiskResult};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use super::dv01::observation_dv01;
use crate::parallel::maybe_parallel_map;

/// A yield row the batch could not turn into a DV01.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    /// Zero-based position of the row in the input.
    pub row: usize,
    /// Bond identifier of the row.
    pub cusip: Cusip,
    /// Trade date of the row.
    pub trade_date: Date,
    /// Why the row failed.
    #[serde(serialize_with = "serialize_error")]
    pub error: RiskError,
}

fn serialize_error<S: Serializer>(error: &RiskError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Outcome of a DV01 batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dv01Batch {
    /// Computed rows, in input order.
    pub observations: Vec<Dv01Observation>,
    /// Failed rows, in input order.
    pub failures: Vec<RowFailure>,
}

impl Dv01Batch {
    /// Number of input rows processed.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.observations.len() + self.failures.len()
    }

    /// Returns true if every row produced a DV01.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Computes the DV01 of every yield observation.
///
/// Rows are processed in parallel when the config allows it; the output
/// order is the input order either way, so failures are reported
/// deterministically.
pub fn compute_dv01_series(
    yields: &[YieldObservation],
    references: &ReferenceTable,
    config: &RiskConfig,
) -> Dv01Batch {
    let results = maybe_parallel_map(yields, config, |row, obs| {
        (row, row_dv01(obs, references, config))
    });

    let mut batch = Dv01Batch::default();
    for (row, result) in results {
        let obs = &yields[row];
        match result {
            Ok(dv01) => batch.observations.push(Dv01Observation {
                cusip: obs.cusip.clone(),
                trade_date: obs.trade_date,
                dv01,
            }),
            Err(e) => {
                warn!(row, cusip = %obs.cusip, trade_date = %obs.trade_date, error = %e, "DV01 row failed");
                batch.failures.push(RowFailure {
                    row,
                    cusip: obs.cusip.clone(),
                    trade_date: obs.trade_date,
                    error: e,
                });
            }
        }
    }

    debug!(
        rows = batch.total_rows(),
        computed = batch.observations.len(),
        failed = batch.failures.len(),
        "DV01 batch complete"
    );
    batch
}

fn row_dv01(
    observation: &YieldObservation,
    references: &ReferenceTable,
    config: &RiskConfig,
) -> RiskResult<f64> {
    let reference = references.require(&observation.cusip)?;
    observation_dv01(observation, reference, config)
}
