//! Persisted artifact storage, keyed by a monotone counter (C13).
//!
//! Mirrors `OpenSCENARIO2CR/ConversionStatistics.py` and
//! `BatchConversion/Converter.py`'s `run_in_batch_conversion`: heavy
//! artifacts (the converted scenario, its planning problem) are written to
//! side files under a storage directory; the in-memory record keeps only
//! the path. Unlike the Python original (which pickles a `Serializable`),
//! this stores CommonRoad scenarios as the `.xml` the output format already
//! defines, so "lazily loads on demand" means re-reading that file's text,
//! not re-parsing it back into a `Scenario` — the CommonRoad side of this
//! crate is write-only (§6), matching the rest of the pipeline.

use crate::commonroad::types::{PlanningProblem, Scenario};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Guards the monotone counter used to make persisted filenames unique
/// within one process.
pub struct ResultStore {
    storage_dir: PathBuf,
    counter: Mutex<u64>,
}

/// A lazy, path-only handle to a persisted scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHandle {
    pub scenario_path: PathBuf,
}

impl ResultHandle {
    /// Re-read the persisted CommonRoad XML text. Does not parse it back
    /// into a `Scenario` (see module docs).
    pub fn load_xml_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.scenario_path)
            .map_err(|e| Error::file_read_error(&self.scenario_path.to_string_lossy(), &e.to_string()))
    }
}

impl ResultStore {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            counter: Mutex::new(1),
        }
    }

    fn next_counter(&self) -> u64 {
        let mut guard = self.counter.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = *guard;
        *guard += 1;
        value
    }

    /// Persist `scenario`/`planning_problems` under a filename derived from
    /// `xosc_basename` and the next counter value, returning a handle to it.
    pub fn persist_scenario(
        &self,
        xosc_basename: &str,
        scenario: &Scenario,
        planning_problems: &[PlanningProblem],
    ) -> Result<ResultHandle> {
        std::fs::create_dir_all(&self.storage_dir)
            .map_err(|e| Error::file_read_error(&self.storage_dir.to_string_lossy(), &e.to_string()))?;

        let counter = self.next_counter();
        let scenario_path = self.storage_dir.join(format!("{xosc_basename}{counter}.xml"));
        crate::commonroad::io::write_to_file(scenario, planning_problems, &scenario_path)?;
        Ok(ResultHandle { scenario_path })
    }

    /// Persist a per-file worker result record (`Res_<basename><n>.json`).
    pub fn persist_result_record(&self, xosc_basename: &str, record: &serde_json::Value) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.storage_dir)
            .map_err(|e| Error::file_read_error(&self.storage_dir.to_string_lossy(), &e.to_string()))?;

        let counter = self.next_counter();
        let record_path = self.storage_dir.join(format!("Res_{xosc_basename}{counter}.json"));
        let text = serde_json::to_string_pretty(record)
            .map_err(|e| Error::invalid_xml(&format!("failed to serialize result record: {e}")))?;
        std::fs::write(&record_path, text)
            .map_err(|e| Error::file_read_error(&record_path.to_string_lossy(), &e.to_string()))?;
        Ok(record_path)
    }

    /// Persist the aggregate `statistics.json` for a full batch run.
    pub fn persist_statistics(&self, statistics: &serde_json::Value) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.storage_dir)
            .map_err(|e| Error::file_read_error(&self.storage_dir.to_string_lossy(), &e.to_string()))?;

        let path = self.storage_dir.join("statistics.json");
        let text = serde_json::to_string_pretty(statistics)
            .map_err(|e| Error::invalid_xml(&format!("failed to serialize statistics: {e}")))?;
        std::fs::write(&path, text).map_err(|e| Error::file_read_error(&path.to_string_lossy(), &e.to_string()))?;
        Ok(path)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}
