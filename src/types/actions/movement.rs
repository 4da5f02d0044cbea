//! Movement action types for entity positioning and motion
//!
//! This file contains:
//! - Movement actions (SpeedAction, LaneChangeAction, TeleportAction, etc.)
//! - Dynamics and transition specifications for smooth movement
//! - Target specification types (absolute, relative, following)
//! - Spatial relationship actions (distance keeping, synchronization)
//! - Trajectory following and path planning actions
//!
//! Contributes to project by:
//! - Implementing the core movement capabilities for scenario entities
//! - Providing smooth, realistic motion through transition dynamics
//! - Supporting both simple positioning and complex trajectory following
//! - Enabling entity coordination through synchronization actions
//! - Offering flexible target specification (absolute vs. relative positioning)

use crate::types::basic::{Boolean, Double, OSString};
use crate::types::enums::{DynamicsDimension, DynamicsShape, RouteStrategy, SpeedTargetValueType};
use crate::types::positions::Position;
use crate::types::routing::{Route, Waypoint};
use serde::{Deserialize, Serialize};

/// Shape and duration/distance/rate of a transition between two states.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionDynamics {
    #[serde(rename = "@dynamicsShape")]
    pub dynamics_shape: DynamicsShape,
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@dynamicsDimension")]
    pub dynamics_dimension: DynamicsDimension,
}

impl Default for TransitionDynamics {
    fn default() -> Self {
        Self {
            dynamics_shape: DynamicsShape::Linear,
            value: Double::literal(1.0),
            dynamics_dimension: DynamicsDimension::Time,
        }
    }
}

/// A fixed speed to reach, independent of any other entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbsoluteTargetSpeed {
    #[serde(rename = "@value")]
    pub value: Double,
}

impl Default for AbsoluteTargetSpeed {
    fn default() -> Self {
        Self {
            value: Double::literal(0.0),
        }
    }
}

/// A speed expressed relative to another entity's current speed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeTargetSpeed {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@speedTargetValueType")]
    pub speed_target_value_type: SpeedTargetValueType,
    #[serde(rename = "@continuous")]
    pub continuous: Boolean,
}

impl Default for RelativeTargetSpeed {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            value: Double::literal(0.0),
            speed_target_value_type: SpeedTargetValueType::Delta,
            continuous: Boolean::literal(true),
        }
    }
}

/// Choice between an absolute and a relative speed target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum SpeedActionTarget {
    AbsoluteTargetSpeed(AbsoluteTargetSpeed),
    RelativeTargetSpeed(RelativeTargetSpeed),
}

impl Default for SpeedActionTarget {
    fn default() -> Self {
        SpeedActionTarget::AbsoluteTargetSpeed(AbsoluteTargetSpeed::default())
    }
}

/// Sets an entity's longitudinal speed, transitioning according to
/// `speed_action_dynamics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedAction {
    #[serde(rename = "SpeedActionDynamics")]
    pub speed_action_dynamics: TransitionDynamics,
    #[serde(rename = "SpeedActionTarget")]
    pub speed_action_target: SpeedActionTarget,
}

impl Default for SpeedAction {
    fn default() -> Self {
        Self {
            speed_action_dynamics: TransitionDynamics::default(),
            speed_action_target: SpeedActionTarget::default(),
        }
    }
}

/// One (time, speed) sample of a `SpeedProfileAction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedProfileEntry {
    #[serde(rename = "@time", skip_serializing_if = "Option::is_none")]
    pub time: Option<Double>,
    #[serde(rename = "@speed")]
    pub speed: Double,
}

/// Bounds on acceleration/deceleration/speed while following a profile or
/// distance target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DynamicConstraints {
    #[serde(rename = "@maxAcceleration", skip_serializing_if = "Option::is_none")]
    pub max_acceleration: Option<Double>,
    #[serde(rename = "@maxDeceleration", skip_serializing_if = "Option::is_none")]
    pub max_deceleration: Option<Double>,
    #[serde(rename = "@maxSpeed", skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<Double>,
}

impl Default for DynamicConstraints {
    fn default() -> Self {
        Self {
            max_acceleration: None,
            max_deceleration: None,
            max_speed: None,
        }
    }
}

/// Prescribes a speed-over-time profile, optionally relative to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedProfileAction {
    #[serde(rename = "@entityRef", skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<OSString>,
    #[serde(rename = "@followingMode", skip_serializing_if = "Option::is_none")]
    pub following_mode: Option<OSString>,
    #[serde(rename = "DynamicConstraints", skip_serializing_if = "Option::is_none")]
    pub dynamic_constraints: Option<DynamicConstraints>,
    #[serde(rename = "SpeedProfileEntry", default)]
    pub entries: Vec<SpeedProfileEntry>,
}

impl Default for SpeedProfileAction {
    fn default() -> Self {
        Self {
            entity_ref: None,
            following_mode: None,
            dynamic_constraints: None,
            entries: vec![SpeedProfileEntry {
                time: None,
                speed: Double::literal(0.0),
            }],
        }
    }
}

/// Keeps a fixed or dynamic longitudinal distance/time gap to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongitudinalDistanceAction {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<Double>,
    #[serde(rename = "@timeGap", skip_serializing_if = "Option::is_none")]
    pub time_gap: Option<Double>,
    #[serde(rename = "@freespace")]
    pub freespace: Boolean,
    #[serde(rename = "@continuous")]
    pub continuous: Boolean,
    #[serde(rename = "DynamicConstraints", skip_serializing_if = "Option::is_none")]
    pub dynamic_constraints: Option<DynamicConstraints>,
}

impl Default for LongitudinalDistanceAction {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            distance: Some(Double::literal(10.0)),
            time_gap: None,
            freespace: Boolean::literal(true),
            continuous: Boolean::literal(true),
            dynamic_constraints: None,
        }
    }
}

/// One of the three longitudinal action kinds (XSD choice group), used by
/// the story-side `PrivateAction` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum LongitudinalAction {
    SpeedAction(SpeedAction),
    LongitudinalDistanceAction(LongitudinalDistanceAction),
    SpeedProfileAction(SpeedProfileAction),
}

impl Default for LongitudinalAction {
    fn default() -> Self {
        LongitudinalAction::SpeedAction(SpeedAction::default())
    }
}

/// Positions an entity absolutely or relative to another entity/road, with
/// no transition (instantaneous jump).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeleportAction {
    #[serde(rename = "Position")]
    pub position: Position,
}

impl Default for TeleportAction {
    fn default() -> Self {
        Self {
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbsoluteTargetLane {
    #[serde(rename = "@value")]
    pub value: OSString,
}

impl Default for AbsoluteTargetLane {
    fn default() -> Self {
        Self {
            value: OSString::literal("0".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeTargetLane {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@value")]
    pub value: OSString,
}

impl Default for RelativeTargetLane {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            value: OSString::literal("0".to_string()),
        }
    }
}

/// Target lane for a `LaneChangeAction`/`LaneOffsetAction`, absolute or
/// relative to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum LaneTarget {
    AbsoluteTargetLane(AbsoluteTargetLane),
    RelativeTargetLane(RelativeTargetLane),
}

impl Default for LaneTarget {
    fn default() -> Self {
        LaneTarget::AbsoluteTargetLane(AbsoluteTargetLane::default())
    }
}

/// Moves an entity into a different lane over a transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaneChangeAction {
    #[serde(rename = "@targetLaneOffset", skip_serializing_if = "Option::is_none")]
    pub target_lane_offset: Option<Double>,
    #[serde(rename = "LaneChangeActionDynamics")]
    pub lane_change_action_dynamics: TransitionDynamics,
    #[serde(rename = "LaneChangeTarget")]
    pub lane_change_target: LaneTarget,
}

impl Default for LaneChangeAction {
    fn default() -> Self {
        Self {
            target_lane_offset: None,
            lane_change_action_dynamics: TransitionDynamics::default(),
            lane_change_target: LaneTarget::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaneOffsetActionDynamics {
    #[serde(rename = "@maxLateralAcc", skip_serializing_if = "Option::is_none")]
    pub max_lateral_acc: Option<Double>,
    #[serde(rename = "@dynamicsShape")]
    pub dynamics_shape: DynamicsShape,
}

impl Default for LaneOffsetActionDynamics {
    fn default() -> Self {
        Self {
            max_lateral_acc: None,
            dynamics_shape: DynamicsShape::Linear,
        }
    }
}

/// Offsets an entity laterally within its current lane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaneOffsetAction {
    #[serde(rename = "@continuous")]
    pub continuous: Boolean,
    #[serde(rename = "LaneOffsetActionDynamics")]
    pub lane_offset_action_dynamics: LaneOffsetActionDynamics,
    #[serde(rename = "LaneOffsetTarget")]
    pub lane_offset_target: LaneTarget,
}

impl Default for LaneOffsetAction {
    fn default() -> Self {
        Self {
            continuous: Boolean::literal(false),
            lane_offset_action_dynamics: LaneOffsetActionDynamics::default(),
            lane_offset_target: LaneTarget::default(),
        }
    }
}

/// Keeps a fixed or dynamic lateral distance/offset to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LateralDistanceAction {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<Double>,
    #[serde(rename = "@freespace")]
    pub freespace: Boolean,
    #[serde(rename = "@continuous")]
    pub continuous: Boolean,
    #[serde(rename = "DynamicConstraints", skip_serializing_if = "Option::is_none")]
    pub dynamic_constraints: Option<DynamicConstraints>,
}

impl Default for LateralDistanceAction {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            distance: Some(Double::literal(2.0)),
            freespace: Boolean::literal(true),
            continuous: Boolean::literal(true),
            dynamic_constraints: None,
        }
    }
}

/// One of the three lateral action kinds (XSD choice group), used by both
/// `Init`'s private actions and the story-side `PrivateAction` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum LateralAction {
    LaneChangeAction(LaneChangeAction),
    LaneOffsetAction(LaneOffsetAction),
    LateralDistanceAction(LateralDistanceAction),
}

impl Default for LateralAction {
    fn default() -> Self {
        LateralAction::LaneChangeAction(LaneChangeAction::default())
    }
}

/// Assigns a fixed route to follow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignRouteAction {
    #[serde(rename = "Route")]
    pub route: Route,
}

impl Default for AssignRouteAction {
    fn default() -> Self {
        Self {
            route: Route::default(),
        }
    }
}

/// Computes and follows a route to a target position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcquirePositionAction {
    #[serde(rename = "Position")]
    pub position: Position,
}

impl Default for AcquirePositionAction {
    fn default() -> Self {
        Self {
            position: Position::default(),
        }
    }
}

/// Follows an explicit sequence of waypoints using a named routing strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowRouteAction {
    #[serde(rename = "@routeStrategy")]
    pub route_strategy: RouteStrategy,
    #[serde(rename = "Waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

impl Default for FollowRouteAction {
    fn default() -> Self {
        Self {
            route_strategy: RouteStrategy::Shortest,
            waypoints: Vec::new(),
        }
    }
}

/// One of the routing action kinds (XSD choice group).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum RoutingAction {
    AssignRouteAction(AssignRouteAction),
    FollowRouteAction(FollowRouteAction),
    AcquirePositionAction(AcquirePositionAction),
}

impl Default for RoutingAction {
    fn default() -> Self {
        RoutingAction::AcquirePositionAction(AcquirePositionAction::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalSpeed {
    #[serde(rename = "AbsoluteSpeed", skip_serializing_if = "Option::is_none")]
    pub absolute_speed: Option<AbsoluteTargetSpeed>,
    #[serde(rename = "RelativeSpeedToMaster", skip_serializing_if = "Option::is_none")]
    pub relative_speed_to_master: Option<RelativeTargetSpeed>,
}

/// Synchronizes an entity's arrival at a position with a master entity's
/// arrival at its own position, optionally pinning the final speed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynchronizeAction {
    #[serde(rename = "@masterEntityRef")]
    pub master_entity_ref: OSString,
    #[serde(rename = "TargetPositionMaster")]
    pub target_position_master: Position,
    #[serde(rename = "TargetPosition")]
    pub target_position: Position,
    #[serde(rename = "FinalSpeed", skip_serializing_if = "Option::is_none")]
    pub final_speed: Option<FinalSpeed>,
}

impl Default for SynchronizeAction {
    fn default() -> Self {
        Self {
            master_entity_ref: OSString::literal("DefaultEntity".to_string()),
            target_position_master: Position::default(),
            target_position: Position::default(),
            final_speed: None,
        }
    }
}
