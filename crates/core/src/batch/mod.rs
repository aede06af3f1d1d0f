//! Independent computation of several assets in one request.

pub mod service;

pub use service::{BatchEntry, BatchOutcome, BatchService, MAX_BATCH_SIZE};
