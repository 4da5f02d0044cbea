//! Raw simulator snapshots and their per-object series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coarse object kind reported by the simulator (`objectType` in the FFI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    None,
    Vehicle,
    Pedestrian,
    Misc,
    Other,
}

/// A single simulator-reported snapshot of one object at one simulated
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawState {
    pub timestamp: f64,
    pub id: i32,
    pub model_id: i32,
    pub object_type: ObjectKind,
    pub object_category: i32,

    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub h: f64,
    pub p: f64,
    pub r: f64,

    pub speed: f64,

    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub center_offset_z: f64,

    pub road_id: i32,
    pub junction_id: i32,
    pub s: f64,
    pub t: f64,
    pub lane_id: i32,
    pub lane_offset: f64,

    pub length: f64,
    pub width: f64,
    pub height: f64,

    pub wheel_angle: Option<f64>,
    pub wheel_rotation: Option<f64>,
}

impl RawState {
    /// Panics-free invariant check: dimensions non-negative.
    pub fn has_valid_dimensions(&self) -> bool {
        self.length >= 0.0 && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Ordered, append-only sequence of snapshots for a single object.
///
/// Timestamps are expected non-decreasing; `StateBuffer::push` is the only
/// sanctioned way to build one (it applies the equal-timestamp replace rule).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateSeries {
    pub states: Vec<RawState>,
}

impl StateSeries {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn first_timestamp(&self) -> Option<f64> {
        self.states.first().map(|s| s.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.states.last().map(|s| s.timestamp)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}

/// Per-actor collection of series keyed by simulator-reported name.
pub type ActorSeries = HashMap<String, StateSeries>;
