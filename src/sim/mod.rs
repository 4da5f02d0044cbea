//! Simulator bridge, storyboard completion tracking, and state resampling.
//!
//! This module covers C1-C4: driving the native simulator through a bounded
//! FFI surface, observing storyboard completion, and turning its raw
//! per-tick snapshots into states on the uniform CommonRoad time grid.

pub mod bridge;
pub mod monitor;
pub mod raw_state;
pub mod resample;

pub use bridge::{simulate_scenario, EndingCause, SimDylib, SimResult};
pub use monitor::{StoryboardLevel, StoryboardMonitor, StoryboardState};
pub use raw_state::{ActorSeries, ObjectKind, RawState, StateSeries};
pub use resample::{resample, slip_angle, ResampledState, StateBuffer};
