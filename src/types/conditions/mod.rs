//! Condition type module for trigger and event management
//!
//! This file contains:
//! - Base condition traits and common condition behaviors
//! - Condition evaluation logic and state management
//! - Trigger edge detection (rising, falling, rising-or-falling)
//! - Condition group logic (AND/OR combinations)
//! - Condition validation and constraint checking
//!
//! Contributes to project by:
//! - Organizing 21+ condition types into logical categories
//! - Providing consistent evaluation framework for all condition types
//! - Supporting complex trigger logic through condition combinations
//! - Enabling event-driven scenario execution and timing control
//! - Facilitating condition debugging and state introspection

pub mod entity;
pub mod spatial;
pub mod value;

pub use entity::{
    AccelerationCondition, AngleCondition, ByEntityCondition, CollisionCondition, CollisionTarget,
    EndOfRoadCondition, EntityCondition, EntityRef, OffroadCondition, RelativeClearanceCondition,
    RelativeSpeedCondition, SpeedCondition, StandStillCondition, TimeHeadwayCondition,
    TimeToCollisionCondition, TraveledDistanceCondition, TriggeringEntities,
};
pub use spatial::{DistanceCondition, ReachPositionCondition, RelativeDistanceCondition};
pub use value::{
    ByValueCondition, ParameterCondition, SimulationTimeCondition, StoryboardElementStateCondition,
    TimeOfDayCondition, TrafficSignalCondition, TrafficSignalControllerCondition,
    UserDefinedValueCondition, VariableCondition,
};

use crate::types::basic::Double;
use crate::types::enums::ConditionEdge;
use serde::{Deserialize, Serialize};

/// The two top-level condition kinds a `Condition` element may carry (XSD
/// choice group): entity-scoped or scenario-value-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConditionChoice {
    #[serde(rename = "ByEntityCondition")]
    ByEntity(ByEntityCondition),
    #[serde(rename = "ByValueCondition")]
    ByValue(ByValueCondition),
}

impl Default for ConditionChoice {
    fn default() -> Self {
        ConditionChoice::ByValue(ByValueCondition::default())
    }
}

/// A named, edge-triggered, optionally-delayed condition wrapper, as it
/// appears inside a `ConditionGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@conditionEdge", skip_serializing_if = "Option::is_none")]
    pub condition_edge: Option<ConditionEdge>,
    #[serde(rename = "@delay", skip_serializing_if = "Option::is_none")]
    pub delay: Option<Double>,
    #[serde(flatten)]
    pub choice: ConditionChoice,
}

impl Default for Condition {
    fn default() -> Self {
        Self {
            name: "DefaultCondition".to_string(),
            condition_edge: None,
            delay: None,
            choice: ConditionChoice::default(),
        }
    }
}