//! Batch orchestration: file discovery, per-task process isolation, and
//! persisted result storage (C12, C13).

pub mod driver;
pub mod result_store;

pub use driver::{discover_files, run_batch, BatchEntry, BatchEntryStatus};
pub use result_store::{ResultHandle, ResultStore};
