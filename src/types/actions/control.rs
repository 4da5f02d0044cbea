//! Controller and control override action types

use crate::types::basic::Boolean;
use crate::types::controllers::{ObjectController, OverrideControllerValueAction};
use serde::{Deserialize, Serialize};

/// Assigns a controller to an entity, with per-domain activation flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignControllerAction {
    #[serde(rename = "@activateLateral", skip_serializing_if = "Option::is_none")]
    pub activate_lateral: Option<Boolean>,
    #[serde(rename = "@activateLongitudinal", skip_serializing_if = "Option::is_none")]
    pub activate_longitudinal: Option<Boolean>,
    #[serde(rename = "@activateLighting", skip_serializing_if = "Option::is_none")]
    pub activate_lighting: Option<Boolean>,
    #[serde(rename = "@activateAnimation", skip_serializing_if = "Option::is_none")]
    pub activate_animation: Option<Boolean>,
    #[serde(rename = "ObjectController")]
    pub object_controller: ObjectController,
}

impl Default for AssignControllerAction {
    fn default() -> Self {
        Self {
            activate_lateral: None,
            activate_longitudinal: None,
            activate_lighting: None,
            activate_animation: None,
            object_controller: ObjectController::default(),
        }
    }
}

/// One of the two controller action kinds (XSD choice group): assign a new
/// controller, or override one of the active controller's values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum ControllerAction {
    AssignControllerAction(AssignControllerAction),
    OverrideControllerValueAction(OverrideControllerValueAction),
}

impl Default for ControllerAction {
    fn default() -> Self {
        ControllerAction::AssignControllerAction(AssignControllerAction::default())
    }
}
