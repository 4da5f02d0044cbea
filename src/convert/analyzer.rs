//! Pluggable post-conversion analyzers with a per-invocation timeout (C16).
//!
//! The original analyzers (drivability checker, STL monitor, SPOT predictor)
//! are external collaborators out of scope here; this module only carries
//! the seam — the `Analyzer` trait plus the timeout wrapper every
//! implementation runs behind.

use crate::commonroad::types::{DynamicObstacle, Scenario};
use crate::types::entities::vehicle::Vehicle;
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A non-fatal analyzer failure, kept in the result rather than failing
/// the conversion.
#[derive(Debug, Clone)]
pub struct AnalyzerError {
    pub message: String,
    pub traceback: String,
}

impl AnalyzerError {
    pub fn timed_out() -> Self {
        Self {
            message: "Timed out".to_string(),
            traceback: String::new(),
        }
    }
}

/// Per-obstacle outcome of one analyzer run.
#[derive(Debug, Clone)]
pub enum AnalyzerOutcome {
    Success(serde_json::Value),
    Error(AnalyzerError),
}

/// A post-conversion analyzer, invoked once per converted scenario.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    /// Analyze `scenario`'s obstacles, keyed by actor name as the
    /// coordinator knows them, with the resolved catalog vehicle info
    /// alongside where available.
    fn analyze(
        &self,
        scenario: &Scenario,
        obstacles: &HashMap<String, Option<DynamicObstacle>>,
        extra_info: &HashMap<String, Option<Vehicle>>,
    ) -> HashMap<String, AnalyzerOutcome>;
}

/// Run `analyzer` against a clone of its inputs on a worker thread,
/// enforcing `timeout`. On timeout, every obstacle name gets a uniform
/// "Timed out" error rather than a partial result.
pub fn run_with_timeout(
    analyzer: Arc<dyn Analyzer>,
    scenario: Scenario,
    obstacles: HashMap<String, Option<DynamicObstacle>>,
    extra_info: HashMap<String, Option<Vehicle>>,
    timeout: Duration,
) -> HashMap<String, AnalyzerOutcome> {
    let (tx, rx) = mpsc::channel();
    let obstacle_names: Vec<String> = obstacles.keys().cloned().collect();

    let handle = thread::spawn(move || {
        let result = analyzer.analyze(&scenario, &obstacles, &extra_info);
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => {
            drop(handle);
            obstacle_names
                .into_iter()
                .map(|name| (name, AnalyzerOutcome::Error(AnalyzerError::timed_out())))
                .collect()
        }
    }
}
