//! Story and Act types for scenario execution flow

use crate::types::actions::Action as ActionChoice;
use crate::types::basic::{OSString, ParameterDeclarations, UnsignedInt};
use crate::types::enums::Priority;
use serde::{Deserialize, Serialize};

use super::triggers::Trigger;

/// Reference to a named scenario entity acting in a `ManeuverGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityRef {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
}

impl EntityRef {
    pub fn new(entity_ref: std::string::String) -> Self {
        Self {
            entity_ref: OSString::literal(entity_ref),
        }
    }
}

impl Default for EntityRef {
    fn default() -> Self {
        Self::new("Ego".to_string())
    }
}

/// The set of entities a `ManeuverGroup`'s maneuvers apply to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actors {
    #[serde(rename = "@selectTriggeringEntities", skip_serializing_if = "Option::is_none")]
    pub select_triggering_entities: Option<crate::types::basic::Boolean>,
    #[serde(rename = "EntityRef", default)]
    pub entity_refs: Vec<EntityRef>,
}

impl Default for Actors {
    fn default() -> Self {
        Self {
            select_triggering_entities: None,
            entity_refs: Vec::new(),
        }
    }
}

/// A single named action executed when its enclosing `Event`'s start
/// trigger fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventAction {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(flatten)]
    pub action: ActionChoice,
}

impl Default for EventAction {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultAction".to_string()),
            action: ActionChoice::default(),
        }
    }
}

/// A single step of a `Maneuver`: one or more actions gated by a trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "@priority")]
    pub priority: Priority,
    #[serde(rename = "@maximumExecutionCount", skip_serializing_if = "Option::is_none")]
    pub maximum_execution_count: Option<UnsignedInt>,
    #[serde(rename = "Action", default)]
    pub actions: Vec<EventAction>,
    #[serde(rename = "StartTrigger")]
    pub start_trigger: Trigger,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultEvent".to_string()),
            priority: Priority::Parallel,
            maximum_execution_count: None,
            actions: Vec::new(),
            start_trigger: Trigger::default(),
        }
    }
}

/// An ordered sequence of events describing one entity behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maneuver {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "ParameterDeclarations", skip_serializing_if = "Option::is_none")]
    pub parameter_declarations: Option<ParameterDeclarations>,
    #[serde(rename = "Event", default)]
    pub events: Vec<Event>,
}

impl Default for Maneuver {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultManeuver".to_string()),
            parameter_declarations: None,
            events: Vec::new(),
        }
    }
}

/// A group of entities (`Actors`) executing a set of `Maneuver`s together,
/// up to `maximum_execution_count` times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManeuverGroup {
    #[serde(rename = "@maximumExecutionCount", skip_serializing_if = "Option::is_none")]
    pub maximum_execution_count: Option<UnsignedInt>,
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "Actors")]
    pub actors: Actors,
    #[serde(rename = "Maneuver", default)]
    pub maneuvers: Vec<Maneuver>,
}

impl Default for ManeuverGroup {
    fn default() -> Self {
        Self {
            maximum_execution_count: None,
            name: OSString::literal("DefaultManeuverGroup".to_string()),
            actors: Actors::default(),
            maneuvers: Vec::new(),
        }
    }
}

/// One phase of a `ScenarioStory`: a collection of maneuver groups running
/// between a start and an optional stop trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Act {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "ManeuverGroup", default)]
    pub maneuver_groups: Vec<ManeuverGroup>,
    #[serde(rename = "StartTrigger")]
    pub start_trigger: Trigger,
    #[serde(rename = "StopTrigger", skip_serializing_if = "Option::is_none")]
    pub stop_trigger: Option<Trigger>,
}

impl Default for Act {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultAct".to_string()),
            maneuver_groups: Vec::new(),
            start_trigger: Trigger::default(),
            stop_trigger: None,
        }
    }
}

/// A named sequence of acts, optionally with its own parameter scope.
/// Named `ScenarioStory` rather than `Story` to avoid clashing with the
/// `Story` XML element name used by the XSD for readability elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename = "Story")]
pub struct ScenarioStory {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "ParameterDeclarations", skip_serializing_if = "Option::is_none")]
    pub parameter_declarations: Option<ParameterDeclarations>,
    #[serde(rename = "Act", default)]
    pub acts: Vec<Act>,
}

impl Default for ScenarioStory {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultStory".to_string()),
            parameter_declarations: None,
            acts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_story_default_round_trips() {
        let story = ScenarioStory::default();
        let xml = quick_xml::se::to_string(&story).unwrap();
        let back: ScenarioStory = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(story, back);
    }

    #[test]
    fn act_with_maneuver_group_round_trips() {
        let act = Act {
            name: OSString::literal("Act1".to_string()),
            maneuver_groups: vec![ManeuverGroup {
                actors: Actors {
                    select_triggering_entities: Some(crate::types::basic::Boolean::literal(false)),
                    entity_refs: vec![EntityRef {
                        entity_ref: OSString::literal("Ego".to_string()),
                    }],
                },
                ..ManeuverGroup::default()
            }],
            ..Act::default()
        };
        let xml = quick_xml::se::to_string(&act).unwrap();
        let back: Act = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(act, back);
    }
}