//! Road-based position types for highway and street positioning
//!
//! RoadPosition/LanePosition address the road network by id instead of by
//! Cartesian coordinate (road id, s, t / lane id, offset), the same
//! reference frame `crate::convert::map_builder` resolves lanelets from.

use crate::types::basic::{Double, OSString};
use crate::types::enums::CoordinateSystem;
use serde::{Deserialize, Serialize};

/// Orientation relative to a reference frame (world, road or lane).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<Double>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Double>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Double>,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            h: Some(Double::literal(0.0)),
            p: None,
            r: None,
        }
    }
}

/// Absolute position addressed by road id and arc-length/lateral offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadPosition {
    pub road_id: OSString,
    pub s: Double,
    pub t: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// Road position expressed relative to another entity's road position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeRoadPosition {
    #[serde(rename = "entityRef")]
    pub entity_ref: OSString,
    pub ds: Double,
    pub dt: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// Absolute position addressed by lane id within a road, with lateral
/// offset from the lane centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanePosition {
    pub road_id: OSString,
    pub lane_id: OSString,
    pub s: Double,
    pub offset: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// Lane position expressed relative to another entity's lane position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeLanePosition {
    #[serde(rename = "entityRef")]
    pub entity_ref: OSString,
    pub d_lane: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Double>,
    pub ds: Double,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// How a `RoadPosition`/`LanePosition` is to be interpreted against the
/// road network, carried by components that need to tell the two systems
/// apart (OpenDRIVE stations vs. a plain Cartesian system).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoadCoordinateFrame {
    OpenDrive,
    Cartesian,
}

impl Default for RoadCoordinateFrame {
    fn default() -> Self {
        Self::OpenDrive
    }
}

impl From<CoordinateSystem> for RoadCoordinateFrame {
    fn from(value: CoordinateSystem) -> Self {
        match value {
            CoordinateSystem::Entity => Self::Cartesian,
            CoordinateSystem::Lane => Self::OpenDrive,
            CoordinateSystem::Road => Self::OpenDrive,
            CoordinateSystem::Trajectory => Self::Cartesian,
        }
    }
}
