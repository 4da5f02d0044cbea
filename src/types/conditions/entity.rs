//! Entity-based condition types for scenario triggering

use crate::types::basic::{Boolean, Double, OSString};
use crate::types::enums::{AngleType, CoordinateSystem, DirectionalDimension, ObjectType, RelativeDistanceType, Rule, TriggeringEntitiesRule};
use crate::types::positions::Position;
use serde::{Deserialize, Serialize};

use super::spatial::{DistanceCondition, ReachPositionCondition, RelativeDistanceCondition};

/// A set of entities that all (or any, per `rule`) must satisfy the
/// enclosing `ByEntityCondition`'s entity condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriggeringEntities {
    #[serde(rename = "@triggeringEntitiesRule")]
    pub rule: TriggeringEntitiesRule,
    #[serde(rename = "EntityRef", default)]
    pub entity_refs: Vec<EntityRef>,
}

impl Default for TriggeringEntities {
    fn default() -> Self {
        Self {
            rule: TriggeringEntitiesRule::Any,
            entity_refs: Vec::new(),
        }
    }
}

/// Reference to a single named scenario entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityRef {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
}

/// Triggers once the referenced entity leaves the road network entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndOfRoadCondition {
    #[serde(rename = "@duration")]
    pub duration: Double,
}

impl Default for EndOfRoadCondition {
    fn default() -> Self {
        Self {
            duration: Double::literal(0.0),
        }
    }
}

/// Whether a `CollisionCondition` targets a named entity or any entity of a
/// given object type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CollisionTarget {
    #[serde(rename = "EntityRef")]
    EntityRef(EntityRef),
    #[serde(rename = "ByType")]
    ByType(ByObjectType),
}

impl Default for CollisionTarget {
    fn default() -> Self {
        CollisionTarget::ByType(ByObjectType::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ByObjectType {
    #[serde(rename = "@type")]
    pub object_type: ObjectType,
}

impl Default for ByObjectType {
    fn default() -> Self {
        Self {
            object_type: ObjectType::Vehicle,
        }
    }
}

/// Triggers on collision with another entity, or any entity at all if no
/// target is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollisionCondition {
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub target: Option<CollisionTarget>,
}

impl Default for CollisionCondition {
    fn default() -> Self {
        Self { target: None }
    }
}

/// Triggers once the referenced entity leaves the drivable road surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffroadCondition {
    #[serde(rename = "@duration")]
    pub duration: Double,
}

impl Default for OffroadCondition {
    fn default() -> Self {
        Self {
            duration: Double::literal(0.0),
        }
    }
}

/// Triggers once the time gap to another entity crosses `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeHeadwayCondition {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@freespace")]
    pub freespace: Boolean,
    #[serde(rename = "@alongRoute", skip_serializing_if = "Option::is_none")]
    pub along_route: Option<Boolean>,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@coordinateSystem", skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<CoordinateSystem>,
    #[serde(rename = "@relativeDistanceType", skip_serializing_if = "Option::is_none")]
    pub relative_distance_type: Option<RelativeDistanceType>,
}

impl Default for TimeHeadwayCondition {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            value: Double::literal(1.0),
            freespace: Boolean::literal(true),
            along_route: None,
            rule: Rule::LessThan,
            coordinate_system: None,
            relative_distance_type: None,
        }
    }
}

/// Triggers once the estimated time-to-collision with another entity or a
/// fixed position crosses `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeToCollisionCondition {
    #[serde(rename = "EntityRef", skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<EntityRef>,
    #[serde(rename = "Position", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@freespace")]
    pub freespace: Boolean,
    #[serde(rename = "@alongRoute", skip_serializing_if = "Option::is_none")]
    pub along_route: Option<Boolean>,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@coordinateSystem", skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<CoordinateSystem>,
    #[serde(rename = "@relativeDistanceType", skip_serializing_if = "Option::is_none")]
    pub relative_distance_type: Option<RelativeDistanceType>,
}

impl Default for TimeToCollisionCondition {
    fn default() -> Self {
        Self {
            entity_ref: Some(EntityRef {
                entity_ref: OSString::literal("DefaultEntity".to_string()),
            }),
            position: None,
            value: Double::literal(3.0),
            freespace: Boolean::literal(true),
            along_route: None,
            rule: Rule::LessThan,
            coordinate_system: None,
            relative_distance_type: None,
        }
    }
}

/// Triggers once the referenced entity's longitudinal acceleration crosses
/// `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccelerationCondition {
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@direction", skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionalDimension>,
}

impl Default for AccelerationCondition {
    fn default() -> Self {
        Self {
            value: Double::literal(0.0),
            rule: Rule::GreaterThan,
            direction: None,
        }
    }
}

/// Triggers once the referenced entity has remained stationary for
/// `duration` seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandStillCondition {
    #[serde(rename = "@duration")]
    pub duration: Double,
}

impl Default for StandStillCondition {
    fn default() -> Self {
        Self {
            duration: Double::literal(1.0),
        }
    }
}

/// Triggers once the referenced entity's speed crosses `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedCondition {
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@direction", skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionalDimension>,
}

impl Default for SpeedCondition {
    fn default() -> Self {
        Self {
            value: Double::literal(0.0),
            rule: Rule::GreaterThan,
            direction: None,
        }
    }
}

/// Triggers once the referenced entity's speed relative to another entity
/// crosses `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeSpeedCondition {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
    #[serde(rename = "@value")]
    pub value: Double,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@direction", skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionalDimension>,
}

impl Default for RelativeSpeedCondition {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("DefaultEntity".to_string()),
            value: Double::literal(0.0),
            rule: Rule::GreaterThan,
            direction: None,
        }
    }
}

/// Triggers once the referenced entity has covered `value` meters since the
/// condition group started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraveledDistanceCondition {
    #[serde(rename = "@value")]
    pub value: Double,
}

impl Default for TraveledDistanceCondition {
    fn default() -> Self {
        Self {
            value: Double::literal(100.0),
        }
    }
}

/// Triggers once the referenced entity's heading/pitch/roll angle crosses
/// `value`, optionally relative to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AngleCondition {
    #[serde(rename = "@angle")]
    pub angle: Double,
    #[serde(rename = "@rule")]
    pub rule: Rule,
    #[serde(rename = "@angleType")]
    pub angle_type: AngleType,
    #[serde(rename = "@tolerance", skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<Double>,
}

impl Default for AngleCondition {
    fn default() -> Self {
        Self {
            angle: Double::literal(0.0),
            rule: Rule::EqualTo,
            angle_type: AngleType::Absolute,
            tolerance: None,
        }
    }
}

/// Triggers once the free lateral/longitudinal space around the referenced
/// entity drops below the given distance, among the named opposing entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeClearanceCondition {
    #[serde(rename = "@distanceBackward", skip_serializing_if = "Option::is_none")]
    pub distance_backward: Option<Double>,
    #[serde(rename = "@distanceForward", skip_serializing_if = "Option::is_none")]
    pub distance_forward: Option<Double>,
    #[serde(rename = "@freeSpace")]
    pub free_space: Boolean,
    #[serde(rename = "@oppositeLanes")]
    pub opposite_lanes: Boolean,
    #[serde(rename = "EntityRef", default)]
    pub entity_refs: Vec<EntityRef>,
}

impl Default for RelativeClearanceCondition {
    fn default() -> Self {
        Self {
            distance_backward: None,
            distance_forward: None,
            free_space: Boolean::literal(true),
            opposite_lanes: Boolean::literal(false),
            entity_refs: Vec::new(),
        }
    }
}

/// Every `EntityCondition` choice-group member (XSD choice of 15), modeled
/// the same way `ByValueCondition` models its own choice group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityCondition {
    #[serde(rename = "EndOfRoadCondition", skip_serializing_if = "Option::is_none")]
    pub end_of_road_condition: Option<EndOfRoadCondition>,
    #[serde(rename = "CollisionCondition", skip_serializing_if = "Option::is_none")]
    pub collision_condition: Option<CollisionCondition>,
    #[serde(rename = "OffroadCondition", skip_serializing_if = "Option::is_none")]
    pub offroad_condition: Option<OffroadCondition>,
    #[serde(rename = "TimeHeadwayCondition", skip_serializing_if = "Option::is_none")]
    pub time_headway_condition: Option<TimeHeadwayCondition>,
    #[serde(rename = "TimeToCollisionCondition", skip_serializing_if = "Option::is_none")]
    pub time_to_collision_condition: Option<TimeToCollisionCondition>,
    #[serde(rename = "AccelerationCondition", skip_serializing_if = "Option::is_none")]
    pub acceleration_condition: Option<AccelerationCondition>,
    #[serde(rename = "StandStillCondition", skip_serializing_if = "Option::is_none")]
    pub stand_still_condition: Option<StandStillCondition>,
    #[serde(rename = "SpeedCondition", skip_serializing_if = "Option::is_none")]
    pub speed_condition: Option<SpeedCondition>,
    #[serde(rename = "RelativeSpeedCondition", skip_serializing_if = "Option::is_none")]
    pub relative_speed_condition: Option<RelativeSpeedCondition>,
    #[serde(rename = "TraveledDistanceCondition", skip_serializing_if = "Option::is_none")]
    pub traveled_distance_condition: Option<TraveledDistanceCondition>,
    #[serde(rename = "ReachPositionCondition", skip_serializing_if = "Option::is_none")]
    pub reach_position_condition: Option<ReachPositionCondition>,
    #[serde(rename = "DistanceCondition", skip_serializing_if = "Option::is_none")]
    pub distance_condition: Option<DistanceCondition>,
    #[serde(rename = "RelativeDistanceCondition", skip_serializing_if = "Option::is_none")]
    pub relative_distance_condition: Option<RelativeDistanceCondition>,
    #[serde(rename = "AngleCondition", skip_serializing_if = "Option::is_none")]
    pub angle_condition: Option<AngleCondition>,
    #[serde(rename = "RelativeClearanceCondition", skip_serializing_if = "Option::is_none")]
    pub relative_clearance_condition: Option<RelativeClearanceCondition>,
}

impl Default for EntityCondition {
    fn default() -> Self {
        Self {
            end_of_road_condition: None,
            collision_condition: None,
            offroad_condition: None,
            time_headway_condition: None,
            time_to_collision_condition: None,
            acceleration_condition: None,
            stand_still_condition: None,
            speed_condition: Some(SpeedCondition::default()),
            relative_speed_condition: None,
            traveled_distance_condition: None,
            reach_position_condition: None,
            distance_condition: None,
            relative_distance_condition: None,
            angle_condition: None,
            relative_clearance_condition: None,
        }
    }
}

/// Triggers based on the state of one or more named entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ByEntityCondition {
    #[serde(rename = "TriggeringEntities")]
    pub triggering_entities: TriggeringEntities,
    #[serde(rename = "EntityCondition")]
    pub entity_condition: EntityCondition,
}

impl Default for ByEntityCondition {
    fn default() -> Self {
        Self {
            triggering_entities: TriggeringEntities::default(),
            entity_condition: EntityCondition::default(),
        }
    }
}
