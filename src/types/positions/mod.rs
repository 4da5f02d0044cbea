//! Position type module for all spatial positioning systems
//!
//! OpenSCENARIO's `Position` is an XSD choice group: exactly one of its
//! member elements is present on the wire. We model it the same way
//! `controllers::ObjectController` models its own choice group, as a flat
//! struct of `Option<T>` fields rather than an externally tagged enum, since
//! `quick-xml` cannot dispatch serde's `#[serde(flatten)]`-free untagged
//! enums against sibling XML elements.

pub mod relative;
pub mod road;
pub mod trajectory;
pub mod world;

pub use relative::{RelativeObjectPosition, RelativeWorldPosition};
pub use road::{LanePosition, Orientation, RelativeLanePosition, RelativeRoadPosition, RoadPosition};
pub use trajectory::{Clothoid, Polyline, Trajectory, TrajectoryFollowingMode, TrajectoryRef, TrajectoryShape, Vertex};
pub use world::WorldPosition;

use crate::types::basic::Double;
use serde::{Deserialize, Serialize};

/// Position along a trajectory, addressed either by arc-length (`s`) or by
/// elapsed time, with an optional lateral offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPosition {
    #[serde(rename = "TrajectoryRef")]
    pub trajectory_ref: TrajectoryRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<Double>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<Double>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// WGS84 geographic position (latitude/longitude/altitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicPosition {
    pub latitude: Double,
    pub longitude: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Double>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// A scenario position, one member of the choice group populated at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    #[serde(rename = "WorldPosition", default, skip_serializing_if = "Option::is_none")]
    pub world_position: Option<WorldPosition>,
    #[serde(rename = "RelativeWorldPosition", default, skip_serializing_if = "Option::is_none")]
    pub relative_world_position: Option<RelativeWorldPosition>,
    #[serde(rename = "RoadPosition", default, skip_serializing_if = "Option::is_none")]
    pub road_position: Option<RoadPosition>,
    #[serde(rename = "RelativeRoadPosition", default, skip_serializing_if = "Option::is_none")]
    pub relative_road_position: Option<RelativeRoadPosition>,
    #[serde(rename = "LanePosition", default, skip_serializing_if = "Option::is_none")]
    pub lane_position: Option<LanePosition>,
    #[serde(rename = "RelativeLanePosition", default, skip_serializing_if = "Option::is_none")]
    pub relative_lane_position: Option<RelativeLanePosition>,
    #[serde(rename = "TrajectoryPosition", default, skip_serializing_if = "Option::is_none")]
    pub trajectory_position: Option<TrajectoryPosition>,
    #[serde(rename = "GeographicPosition", default, skip_serializing_if = "Option::is_none")]
    pub geographic_position: Option<GeographicPosition>,
    #[serde(rename = "RelativeObjectPosition", default, skip_serializing_if = "Option::is_none")]
    pub relative_object_position: Option<RelativeObjectPosition>,
}

impl Position {
    pub fn from_world(position: WorldPosition) -> Self {
        Self {
            world_position: Some(position),
            ..Default::default()
        }
    }

    pub fn from_relative_object(position: RelativeObjectPosition) -> Self {
        Self {
            relative_object_position: Some(position),
            ..Default::default()
        }
    }

    /// True if exactly one choice-group member is populated, as the XSD
    /// requires.
    pub fn is_valid_choice(&self) -> bool {
        let members = [
            self.world_position.is_some(),
            self.relative_world_position.is_some(),
            self.road_position.is_some(),
            self.relative_road_position.is_some(),
            self.lane_position.is_some(),
            self.relative_lane_position.is_some(),
            self.trajectory_position.is_some(),
            self.geographic_position.is_some(),
            self.relative_object_position.is_some(),
        ];
        members.iter().filter(|present| **present).count() == 1
    }
}
