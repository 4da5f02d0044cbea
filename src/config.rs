//! Configuration records for the conversion pipeline
//!
//! This module contains:
//! - `ConverterParams`, the top-level knobs for one file conversion
//! - `EsminiParams`, the simulator bridge's configuration (viewer mode, seed, grace time)
//! - `GoalParams`, the `AbsRel` policies used by the planning-problem builder
//! - `BatchParams`, worker-pool and discovery settings for batch runs
//!
//! Every record has a documented `Default`; nothing here is a module-level
//! global, matching the rest of this crate's style of explicit, passed-in
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::convert::abs_rel::AbsRel;

/// Simulator viewer mode, forwarded to `init()` across the FFI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerMode {
    Headless,
    Viewer,
    OffscreenCapture,
}

impl Default for ViewerMode {
    fn default() -> Self {
        ViewerMode::Headless
    }
}

/// Configuration for the simulator bridge (C1/C2).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EsminiParams {
    /// Fixed simulation step (seconds) the bridge asks the simulator to take.
    pub dt_sim: f64,
    /// Wall-clock cap expressed as simulated time (seconds).
    pub max_time: f64,
    /// Random seed forwarded via `set_seed`.
    pub random_seed: u32,
    /// Viewer mode forwarded to `init`.
    pub viewer_mode: ViewerMode,
    /// Whether the simulator runs its own render thread.
    pub threaded: bool,
    /// Mirror simulator log output to the console.
    pub log_to_console: bool,
    /// Optional file path the simulator should log to; empty disables file logging.
    pub log_to_file_path: String,
    /// Grace period (seconds) the storyboard must stay complete before
    /// `EndDetected` is raised. `None` means end immediately once complete.
    pub grace_time: Option<f64>,
    /// Storyboard levels at or below this value are excluded from the
    /// completeness check (see `sim::monitor::StoryboardLevel`).
    pub ignored_level: i32,
}

impl Default for EsminiParams {
    fn default() -> Self {
        Self {
            dt_sim: 0.01,
            max_time: 60.0,
            random_seed: 0,
            viewer_mode: ViewerMode::Headless,
            threaded: false,
            log_to_console: false,
            log_to_file_path: String::new(),
            grace_time: Some(1.0),
            ignored_level: 0,
        }
    }
}

/// `AbsRel`-policy goal parameters used by the planning-problem builder (C9).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalParams {
    pub time_interval_start: AbsRel<i64>,
    pub time_interval_end: AbsRel<i64>,
    pub position_length: AbsRel<f64>,
    pub position_width: AbsRel<f64>,
    pub position_center_x: AbsRel<f64>,
    pub position_center_y: AbsRel<f64>,
    pub position_rotation: AbsRel<f64>,
    pub velocity_interval: Option<(AbsRel<f64>, AbsRel<f64>)>,
    pub orientation_interval: Option<(AbsRel<f64>, AbsRel<f64>)>,
}

impl Default for GoalParams {
    fn default() -> Self {
        Self {
            time_interval_start: AbsRel::rel_sub(0),
            time_interval_end: AbsRel::rel_add(30),
            position_length: AbsRel::rel_mul(2.0),
            position_width: AbsRel::rel_mul(2.0),
            position_center_x: AbsRel::abs(0.0),
            position_center_y: AbsRel::abs(0.0),
            position_rotation: AbsRel::abs(0.0),
            velocity_interval: None,
            orientation_interval: None,
        }
    }
}

/// Top-level per-file conversion parameters (C9-C11 knobs).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterParams {
    /// CommonRoad time step (seconds); the uniform grid is k * dt_cr.
    pub dt_cr: f64,
    /// Optional override for the XODR path (wins over the implicit reference).
    pub xodr_path_override: Option<PathBuf>,
    /// Regex used to pick the ego actor by name; `None` falls back to the
    /// lexicographically smallest actor name.
    pub ego_filter: Option<String>,
    /// Keep the ego's own obstacle in the output scenario.
    pub keep_ego_vehicle: bool,
    /// Trim the lanelet network to the subset touched by obstacles.
    pub trim_scenario: bool,
    pub esmini: EsminiParams,
    pub goal: GoalParams,
    /// Scenario metadata written into the CommonRoad file header.
    pub author: String,
    pub affiliation: String,
    pub source: String,
    pub tags: Vec<String>,
}

impl Default for ConverterParams {
    fn default() -> Self {
        Self {
            dt_cr: 0.1,
            xodr_path_override: None,
            ego_filter: None,
            keep_ego_vehicle: true,
            trim_scenario: true,
            esmini: EsminiParams::default(),
            goal: GoalParams::default(),
            author: "xosc2cr".to_string(),
            affiliation: "".to_string(),
            source: "OpenSCENARIO".to_string(),
            tags: Vec::new(),
        }
    }
}

impl ConverterParams {
    /// Load parameters from a TOML file, falling back to defaults for any
    /// field the file omits (serde's `#[serde(default)]` handles partial
    /// files field-by-field).
    pub fn from_toml_file(path: &std::path::Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::file_read_error(&path.to_string_lossy(), &e.to_string()))?;
        toml::from_str(&text)
            .map_err(|e| crate::Error::parse_error(&path.to_string_lossy(), &e.to_string()))
    }
}

/// Batch orchestration parameters (C12/C13).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Root directory to search for input scenarios.
    pub root_dir: PathBuf,
    /// Regex filter applied to discovered file names.
    pub file_pattern: String,
    /// Recurse into subdirectories.
    pub recursive: bool,
    /// Where persisted scenario/result files are written.
    pub storage_dir: PathBuf,
    /// Number of worker processes; 0 means "use available parallelism".
    pub num_workers: usize,
    /// Per-task wall-clock timeout.
    pub task_timeout: Duration,
    /// Per-file converter parameters, shared across the batch.
    pub converter: ConverterParams,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            file_pattern: r".*\.xosc$".to_string(),
            recursive: true,
            storage_dir: PathBuf::from("./xosc2cr_out"),
            num_workers: 0,
            task_timeout: Duration::from_secs(120),
            converter: ConverterParams::default(),
        }
    }
}
