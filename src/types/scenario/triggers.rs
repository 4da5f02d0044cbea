//! Trigger and condition group types for scenario timing and control

use crate::types::conditions::Condition;
use serde::{Deserialize, Serialize};

/// One AND-combined group of conditions; a `Trigger` fires once any one of
/// its `ConditionGroup`s has all its conditions satisfied (OR of ANDs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionGroup {
    #[serde(rename = "Condition", default)]
    pub conditions: Vec<Condition>,
}

impl Default for ConditionGroup {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }
}

/// A scenario-level or event-level trigger: an OR of AND-combined condition
/// groups. An empty trigger (no condition groups) never fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trigger {
    #[serde(rename = "ConditionGroup", default)]
    pub condition_groups: Vec<ConditionGroup>,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            condition_groups: Vec::new(),
        }
    }
}
