//! Features layered on top of the conversion engine.
//!
//! Batch conversion of large inputs with progress and cancellation, and the
//! bounded history of recent conversions.

pub mod batch;
pub mod cancel;
pub mod history;

pub use batch::{BatchHandle, BatchJob, output_file_name, process_batch, spawn_batch, split_chunks};
pub use cancel::{CancellationReason, CancellationSource, CancellationToken};
pub use history::{ConversionResult, HISTORY_CAPACITY, HistoryLedger};
