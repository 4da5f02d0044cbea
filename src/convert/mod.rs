//! The conversion pipeline: scenario shell, resampled obstacles, ego
//! selection, planning problem synthesis, lanelet trimming, analyzers, and
//! the coordinator tying them together (C6-C11, C16).

pub mod abs_rel;
pub mod analyzer;
pub mod coordinator;
pub mod ego_selector;
pub mod lanelet_assigner;
pub mod map_builder;
pub mod obstacle_builder;
pub mod planning_problem;
pub mod trimmer;

pub use abs_rel::{AbsRel, Policy};
pub use analyzer::{Analyzer, AnalyzerError, AnalyzerOutcome};
pub use coordinator::{run_conversion, ConversionFailure, ConversionOutcome, ConversionStatistics};
pub use ego_selector::select_ego;
pub use lanelet_assigner::assign_obstacles;
pub use map_builder::{build_scenario_shell, resolve_xodr_path, MapBuildResult};
pub use obstacle_builder::build_obstacle;
pub use planning_problem::build_planning_problem;
pub use trimmer::trim_scenario;
