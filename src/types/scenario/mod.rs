//! Scenario structure types

pub mod init;
pub mod monitors;
pub mod story;
pub mod storyboard;
pub mod triggers;
pub mod variables;

// Re-export main types for convenience
pub use init::{
    Actions, EnvironmentAction, GlobalAction, Init, LongitudinalAction, LongitudinalActionType,
    Private, PrivateAction,
};
pub use monitors::{MonitorDeclaration, MonitorDeclarations};
pub use story::{Act, Actors, EntityRef, Event, Maneuver, ManeuverGroup, ScenarioStory};
pub use storyboard::{
    CatalogDefinition, FileHeader, OpenScenario, OpenScenarioCategory, ScenarioDefinition,
    Storyboard,
};
pub use variables::{VariableDeclaration, VariableDeclarations};
