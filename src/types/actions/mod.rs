//! Action type module organizing all OpenSCENARIO action definitions
//!
//! This file contains:
//! - Re-exports from action submodules (movement, control, appearance, traffic)
//! - Base Action trait defining common action behaviors
//! - Action validation logic and constraint checking
//! - Action execution context and state management
//! - Cross-cutting action concerns (timing, priority, conditions)
//!
//! Contributes to project by:
//! - Organizing 48+ action types into logical, manageable categories
//! - Providing consistent interface for all action types
//! - Enabling polymorphic action handling and execution
//! - Supporting action composition and complex scenario building
//! - Facilitating action validation and constraint enforcement

pub mod appearance;
pub mod control;
pub mod movement;
pub mod trailer;
pub mod traffic;
pub mod wrappers;

pub use appearance::{AnimationAction, AppearanceAction, LightState, LightStateAction, VisibilityAction};
pub use control::{AssignControllerAction, ControllerAction};
pub use movement::{
    AbsoluteTargetLane, AbsoluteTargetSpeed, AcquirePositionAction, AssignRouteAction,
    DynamicConstraints, FinalSpeed, FollowRouteAction, LaneChangeAction, LaneOffsetAction,
    LaneOffsetActionDynamics, LaneTarget, LateralAction, LateralDistanceAction,
    LongitudinalAction, LongitudinalDistanceAction, RelativeTargetLane, RelativeTargetSpeed,
    RoutingAction, SpeedAction, SpeedActionTarget, SpeedProfileAction, SpeedProfileEntry,
    SynchronizeAction, TeleportAction, TransitionDynamics,
};
pub use trailer::{ConnectTrailerAction, DisconnectTrailerAction, TrailerAction};
pub use traffic::{
    CentralSwarmObject, ControllerDistribution as TrafficControllerDistribution,
    ControllerDistributionEntry as TrafficControllerDistributionEntry, TrafficArea,
    TrafficAreaAction, TrafficAreaVertex, TrafficDefinition, TrafficSignalAction,
    TrafficSignalActionChoice, TrafficSignalControllerAction, TrafficSignalStateAction,
    TrafficSinkAction, TrafficSourceAction, TrafficStopAction, TrafficSwarmAction,
    VehicleCategory as TrafficVehicleCategory, VehicleCategoryDistribution,
    VehicleCategoryDistributionEntry,
};
pub use wrappers::{
    Action, AddEntityAction, CustomCommandAction, DeleteEntityAction, EntityAction,
    EntityActionChoice, EnvironmentAction, GlobalAction, InfrastructureAction, NamedAction,
    ParameterAction, PrivateAction, RandomRouteAction, SetMonitorAction, TrafficAction,
    TrafficActionChoice, UserDefinedAction, VariableAction,
};

// `crate::types::controllers::ActivateControllerAction` is the real,
// already-implemented type; re-exported here under the same name so
// `wrappers::PrivateAction`'s `use super::ActivateControllerAction` resolves
// without duplicating it.
pub use crate::types::controllers::ActivateControllerAction;