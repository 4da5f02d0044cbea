//! CommonRoad scenario model and its I/O (C15).
//!
//! Plain data types rendering the `commonroad-io` XML file format, plus the
//! OpenDRIVE-to-lanelet-network collaborator seam (C6's external
//! dependency).

pub mod io;
pub mod opendrive;
pub mod types;

pub use io::{read_from_file, serialize_to_string, write_to_file};
pub use opendrive::{OpendriveConversionError, OpendriveConverter, StubOpendriveConverter};
pub use types::{
    DynamicObstacle, GoalPositionRegion, GoalState, Lanelet, LaneletNetwork, ObstacleIdGenerator,
    ObstacleType, PlanningProblem, Scenario, ScenarioMetadata, Shape, ShapeLaneletAssignment, State,
    Trajectory,
};
