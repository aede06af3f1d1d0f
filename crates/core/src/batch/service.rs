//! Batch service.
//!
//! Each record is computed on its own: no state is shared between entries
//! and one failing entry never affects the others.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::catalog::AssetCatalog;
use crate::depreciation::{
    AssetRecord, DepreciationEngine, DepreciationOptions, DepreciationResult,
};
use crate::error::DepreciationError;
use crate::index::IndexSeries;

/// Maximum number of assets in one batch.
pub const MAX_BATCH_SIZE: usize = 5;

/// Outcome for one record of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Computed successfully.
    Computed(Box<DepreciationResult>),
    /// Purchase value was zero; nothing to depreciate.
    Skipped,
    /// Computation failed for this record only.
    Failed(DepreciationError),
}

/// One record of a batch with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based position in the request.
    pub slot: usize,
    /// The record as submitted.
    pub record: AssetRecord,
    /// What happened to it.
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    /// Returns the result if the record was computed.
    #[must_use]
    pub fn result(&self) -> Option<&DepreciationResult> {
        match &self.outcome {
            BatchOutcome::Computed(result) => Some(result.as_ref()),
            BatchOutcome::Skipped | BatchOutcome::Failed(_) => None,
        }
    }
}

/// Batch service for several assets.
pub struct BatchService;

impl BatchService {
    /// Computes every record against the shared read-only catalog and series.
    ///
    /// Entries come back in request order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if more than [`MAX_BATCH_SIZE`] records are
    /// submitted. Per-record failures are reported in the entries instead.
    pub fn compute<C: AssetCatalog + Sync + ?Sized>(
        catalog: &C,
        records: &[AssetRecord],
        evaluation_date: NaiveDate,
        index: Option<&IndexSeries>,
        options: DepreciationOptions,
    ) -> Result<Vec<BatchEntry>, DepreciationError> {
        if records.len() > MAX_BATCH_SIZE {
            return Err(DepreciationError::InvalidInput(format!(
                "at most {MAX_BATCH_SIZE} assets per batch, got {}",
                records.len()
            )));
        }

        let entries = records
            .par_iter()
            .enumerate()
            .map(|(i, record)| {
                let outcome = if record.purchase_value.is_zero() {
                    BatchOutcome::Skipped
                } else {
                    match DepreciationEngine::compute_for_record(
                        catalog,
                        record,
                        evaluation_date,
                        index,
                        options,
                    ) {
                        Ok(result) => BatchOutcome::Computed(Box::new(result)),
                        Err(err) => BatchOutcome::Failed(err),
                    }
                };

                BatchEntry {
                    slot: i + 1,
                    record: record.clone(),
                    outcome,
                }
            })
            .collect();

        Ok(entries)
    }
}
