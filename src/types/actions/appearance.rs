//! Appearance and animation action types for visual representation

use crate::types::basic::{Boolean, Double, OSString};
use serde::{Deserialize, Serialize};

/// Sets whether an entity is visible in graphics, sensed by traffic, or
/// detected by sensors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityAction {
    #[serde(rename = "@graphics")]
    pub graphics: Boolean,
    #[serde(rename = "@traffic")]
    pub traffic: Boolean,
    #[serde(rename = "@sensors")]
    pub sensors: Boolean,
}

impl Default for VisibilityAction {
    fn default() -> Self {
        Self {
            graphics: Boolean::literal(true),
            traffic: Boolean::literal(true),
            sensors: Boolean::literal(true),
        }
    }
}

/// A single vehicle or pedestrian light's on/off/flashing state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightState {
    #[serde(rename = "@mode")]
    pub mode: OSString,
    #[serde(rename = "@color", skip_serializing_if = "Option::is_none")]
    pub color: Option<OSString>,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            mode: OSString::literal("on".to_string()),
            color: None,
        }
    }
}

/// Sets the state of a single named light (e.g. `indicatorLeft`, `brakeLights`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightStateAction {
    #[serde(rename = "@lightType")]
    pub light_type: OSString,
    #[serde(rename = "LightState")]
    pub light_state: LightState,
    #[serde(rename = "@transitionTime", skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<Double>,
}

impl Default for LightStateAction {
    fn default() -> Self {
        Self {
            light_type: OSString::literal("daytimeRunningLights".to_string()),
            light_state: LightState::default(),
            transition_time: None,
        }
    }
}

/// Plays a named animation (pedestrian gesture, vehicle component motion) on
/// an entity, optionally looping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationAction {
    #[serde(rename = "@animationType")]
    pub animation_type: OSString,
    #[serde(rename = "@loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<Boolean>,
}

impl Default for AnimationAction {
    fn default() -> Self {
        Self {
            animation_type: OSString::literal("idle".to_string()),
            looping: None,
        }
    }
}

/// One of the two appearance action kinds (XSD choice group).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum AppearanceAction {
    LightStateAction(LightStateAction),
    AnimationAction(AnimationAction),
}

impl Default for AppearanceAction {
    fn default() -> Self {
        AppearanceAction::LightStateAction(LightStateAction::default())
    }
}
