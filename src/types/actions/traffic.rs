//! Phase 4C: Traffic Management Actions Implementation
//!
//! This file contains:
//! - Traffic source and sink actions for dynamic traffic generation
//! - Traffic swarm actions for crowd simulation around entities
//! - Traffic area actions for regional traffic density control
//! - Traffic signal control actions for intersection management
//! - Background traffic definition and distribution specifications
//!
//! Contributes to project by:
//! - Enabling realistic traffic environments for scenario testing
//! - Providing dynamic traffic generation and removal capabilities
//! - Supporting complex traffic patterns and density variations
//! - Facilitating intersection and traffic signal simulation
//! - Following complete OpenSCENARIO specification for traffic management

use serde::{Deserialize, Serialize};
use crate::types::basic::{Boolean, OSString, Double};
use crate::types::positions::Position;

// PHASE 4C: Core Traffic Management Actions

/// Traffic source action for traffic generation with rate and position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSourceAction {
    #[serde(rename = "@rate")]
    pub rate: f64,
    #[serde(rename = "@velocity")]
    pub velocity: Option<f64>,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "TrafficDefinition")]
    pub traffic_definition: TrafficDefinition,
}

/// Traffic sink action for traffic removal with radius control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSinkAction {
    #[serde(rename = "@rate")]
    pub rate: f64,
    #[serde(rename = "@radius")]
    pub radius: f64,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "TrafficDefinition")]
    pub traffic_definition: Option<TrafficDefinition>,
}

/// Traffic swarm action for swarm behavior around central object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSwarmAction {
    #[serde(rename = "@centralObject")]
    pub central_object: OSString,
    #[serde(rename = "@innerRadius")]
    pub inner_radius: f64,
    #[serde(rename = "@outerRadius")]
    pub outer_radius: f64,
    #[serde(rename = "@numberOfVehicles")]
    pub number_of_vehicles: u32,
    #[serde(rename = "CentralSwarmObject")]
    pub central_swarm_object: CentralSwarmObject,
    #[serde(rename = "TrafficDefinition")]
    pub traffic_definition: TrafficDefinition,
}

/// Traffic area action for area-based traffic management
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficAreaAction {
    #[serde(rename = "TrafficArea")]
    pub traffic_area: TrafficArea,
    #[serde(rename = "TrafficDefinition")]
    pub traffic_definition: TrafficDefinition,
}

/// Traffic signal action wrapper for all traffic signal operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSignalAction {
    #[serde(flatten)]
    pub signal_action_choice: TrafficSignalActionChoice,
}

/// Traffic signal action choice - controller or state action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum TrafficSignalActionChoice {
    TrafficSignalControllerAction(TrafficSignalControllerAction),
    TrafficSignalStateAction(TrafficSignalStateAction),
}

/// Traffic signal state action for individual signal state control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSignalStateAction {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "@state")]
    pub state: OSString,
}

/// Traffic signal controller action for signal controller management
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSignalControllerAction {
    #[serde(rename = "@trafficSignalControllerRef")]
    pub traffic_signal_controller_ref: OSString,
    #[serde(rename = "@phaseRef")]
    pub phase_ref: OSString,
}

/// Traffic stop action for traffic stop enable/disable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficStopAction {
    #[serde(rename = "@enable")]
    pub enable: Boolean,
}

// PHASE 4C: Supporting Types for Traffic Management

/// Traffic definition for vehicle category and controller distribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficDefinition {
    #[serde(rename = "VehicleCategoryDistribution")]
    pub vehicle_category_distribution: Option<VehicleCategoryDistribution>,
    #[serde(rename = "ControllerDistribution")]
    pub controller_distribution: Option<ControllerDistribution>,
}

/// Vehicle category distribution for traffic composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleCategoryDistribution {
    #[serde(rename = "VehicleCategoryDistributionEntry", default)]
    pub entries: Vec<VehicleCategoryDistributionEntry>,
}

/// Vehicle category distribution entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleCategoryDistributionEntry {
    #[serde(rename = "@category")]
    pub category: VehicleCategory,
    #[serde(rename = "@weight")]
    pub weight: f64,
}

/// Vehicle category enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VehicleCategory {
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "van")]
    Van,
    #[serde(rename = "truck")]
    Truck,
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "motorbike")]
    Motorbike,
    #[serde(rename = "bicycle")]
    Bicycle,
    #[serde(rename = "trailer")]
    Trailer,
    #[serde(rename = "semitrailer")]
    Semitrailer,
}

/// Controller distribution for traffic behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerDistribution {
    #[serde(rename = "ControllerDistributionEntry", default)]
    pub entries: Vec<ControllerDistributionEntry>,
}

/// Controller distribution entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerDistributionEntry {
    #[serde(rename = "@weight")]
    pub weight: f64,
    #[serde(rename = "Controller")]
    pub controller: OSString,
}

/// Central swarm object specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CentralSwarmObject {
    #[serde(rename = "@entityRef")]
    pub entity_ref: OSString,
}

/// Traffic area definition with vertices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficArea {
    #[serde(rename = "Vertex", default)]
    pub vertices: Vec<TrafficAreaVertex>,
}

/// Simple vertex for traffic area definition (x, y, z coordinates)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficAreaVertex {
    #[serde(rename = "@x")]
    pub x: Double,
    #[serde(rename = "@y")]
    pub y: Double,
    #[serde(rename = "@z")]
    pub z: Double,
}

// PHASE 4C: Default implementations

impl Default for TrafficSourceAction {
    fn default() -> Self {
        Self {
            rate: 10.0, // 10 vehicles per minute
            velocity: Some(50.0), // 50 km/h default velocity
            position: Position::default(),
            traffic_definition: TrafficDefinition::default(),
        }
    }
}

impl Default for TrafficSinkAction {
    fn default() -> Self {
        Self {
            rate: 10.0, // 10 vehicles per minute
            radius: 50.0, // 50 meter radius
            position: Position::default(),
            traffic_definition: None,
        }
    }
}

impl Default for TrafficSwarmAction {
    fn default() -> Self {
        Self {
            central_object: OSString::literal("SwarmCenter".to_string()),
            inner_radius: 10.0,
            outer_radius: 50.0,
            number_of_vehicles: 20,
            central_swarm_object: CentralSwarmObject::default(),
            traffic_definition: TrafficDefinition::default(),
        }
    }
}

impl Default for TrafficAreaAction {
    fn default() -> Self {
        Self {
            traffic_area: TrafficArea::default(),
            traffic_definition: TrafficDefinition::default(),
        }
    }
}

impl Default for TrafficSignalAction {
    fn default() -> Self {
        Self {
            signal_action_choice: TrafficSignalActionChoice::TrafficSignalStateAction(
                TrafficSignalStateAction::default()
            ),
        }
    }
}

impl Default for TrafficSignalStateAction {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultSignal".to_string()),
            state: OSString::literal("green".to_string()),
        }
    }
}

impl Default for TrafficSignalControllerAction {
    fn default() -> Self {
        Self {
            traffic_signal_controller_ref: OSString::literal("DefaultController".to_string()),
            phase_ref: OSString::literal("Phase1".to_string()),
        }
    }
}

impl Default for TrafficStopAction {
    fn default() -> Self {
        Self {
            enable: Boolean::literal(true),
        }
    }
}

impl Default for TrafficDefinition {
    fn default() -> Self {
        Self {
            vehicle_category_distribution: Some(VehicleCategoryDistribution::default()),
            controller_distribution: None,
        }
    }
}

impl Default for VehicleCategoryDistribution {
    fn default() -> Self {
        Self {
            entries: vec![
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Car,
                    weight: 0.7, // 70% cars
                },
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Truck,
                    weight: 0.2, // 20% trucks
                },
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Van,
                    weight: 0.1, // 10% vans
                },
            ],
        }
    }
}

impl Default for ControllerDistribution {
    fn default() -> Self {
        Self {
            entries: vec![
                ControllerDistributionEntry {
                    weight: 1.0,
                    controller: OSString::literal("DefaultTrafficController".to_string()),
                }
            ],
        }
    }
}

impl Default for CentralSwarmObject {
    fn default() -> Self {
        Self {
            entity_ref: OSString::literal("SwarmCenter".to_string()),
        }
    }
}

impl Default for TrafficArea {
    fn default() -> Self {
        Self {
            vertices: vec![
                TrafficAreaVertex::new(0.0, 0.0, 0.0),
                TrafficAreaVertex::new(100.0, 0.0, 0.0),
                TrafficAreaVertex::new(100.0, 100.0, 0.0),
                TrafficAreaVertex::new(0.0, 100.0, 0.0),
            ],
        }
    }
}

impl Default for TrafficAreaVertex {
    fn default() -> Self {
        Self {
            x: Double::literal(0.0),
            y: Double::literal(0.0),
            z: Double::literal(0.0),
        }
    }
}

impl Default for VehicleCategory {
    fn default() -> Self {
        VehicleCategory::Car
    }
}

// PHASE 4C: Helper implementations

impl TrafficSourceAction {
    /// Create traffic source with rate and position
    pub fn new(rate: f64, position: Position, traffic_definition: TrafficDefinition) -> Self {
        Self {
            rate,
            velocity: None,
            position,
            traffic_definition,
        }
    }

    /// Create traffic source with velocity
    pub fn with_velocity(rate: f64, velocity: f64, position: Position, traffic_definition: TrafficDefinition) -> Self {
        Self {
            rate,
            velocity: Some(velocity),
            position,
            traffic_definition,
        }
    }
}

impl TrafficSinkAction {
    /// Create traffic sink with rate, radius and position
    pub fn new(rate: f64, radius: f64, position: Position) -> Self {
        Self {
            rate,
            radius,
            position,
            traffic_definition: None,
        }
    }

    /// Create traffic sink with traffic definition
    pub fn with_traffic_definition(
        rate: f64, 
        radius: f64, 
        position: Position, 
        traffic_definition: TrafficDefinition
    ) -> Self {
        Self {
            rate,
            radius,
            position,
            traffic_definition: Some(traffic_definition),
        }
    }
}

impl TrafficSwarmAction {
    /// Create traffic swarm around central object
    pub fn new(
        central_object: String,
        inner_radius: f64,
        outer_radius: f64,
        number_of_vehicles: u32,
        traffic_definition: TrafficDefinition,
    ) -> Self {
        Self {
            central_object: OSString::literal(central_object.clone()),
            inner_radius,
            outer_radius,
            number_of_vehicles,
            central_swarm_object: CentralSwarmObject {
                entity_ref: OSString::literal(central_object),
            },
            traffic_definition,
        }
    }
}

impl TrafficAreaAction {
    /// Create traffic area with vertices
    pub fn new(vertices: Vec<TrafficAreaVertex>, traffic_definition: TrafficDefinition) -> Self {
        Self {
            traffic_area: TrafficArea { vertices },
            traffic_definition,
        }
    }
}

impl TrafficSignalAction {
    /// Create signal state action
    pub fn state_action(name: String, state: String) -> Self {
        Self {
            signal_action_choice: TrafficSignalActionChoice::TrafficSignalStateAction(
                TrafficSignalStateAction {
                    name: OSString::literal(name),
                    state: OSString::literal(state),
                }
            ),
        }
    }

    /// Create signal controller action
    pub fn controller_action(controller_ref: String, phase_ref: String) -> Self {
        Self {
            signal_action_choice: TrafficSignalActionChoice::TrafficSignalControllerAction(
                TrafficSignalControllerAction {
                    traffic_signal_controller_ref: OSString::literal(controller_ref),
                    phase_ref: OSString::literal(phase_ref),
                }
            ),
        }
    }
}

impl TrafficStopAction {
    /// Enable traffic stop
    pub fn enable() -> Self {
        Self {
            enable: Boolean::literal(true),
        }
    }

    /// Disable traffic stop
    pub fn disable() -> Self {
        Self {
            enable: Boolean::literal(false),
        }
    }
}

impl TrafficDefinition {
    /// Create traffic definition with vehicle categories only
    pub fn with_vehicles(distribution: VehicleCategoryDistribution) -> Self {
        Self {
            vehicle_category_distribution: Some(distribution),
            controller_distribution: None,
        }
    }

    /// Create traffic definition with controllers only
    pub fn with_controllers(distribution: ControllerDistribution) -> Self {
        Self {
            vehicle_category_distribution: None,
            controller_distribution: Some(distribution),
        }
    }

    /// Create traffic definition with both vehicles and controllers
    pub fn with_both(
        vehicles: VehicleCategoryDistribution, 
        controllers: ControllerDistribution
    ) -> Self {
        Self {
            vehicle_category_distribution: Some(vehicles),
            controller_distribution: Some(controllers),
        }
    }
}

impl VehicleCategoryDistribution {
    /// Create distribution with single category
    pub fn single_category(category: VehicleCategory, weight: f64) -> Self {
        Self {
            entries: vec![VehicleCategoryDistributionEntry { category, weight }],
        }
    }

    /// Create distribution for mixed traffic (cars, trucks, vans)
    pub fn mixed_traffic() -> Self {
        Self::default()
    }

    /// Create distribution for urban traffic (mostly cars)
    pub fn urban_traffic() -> Self {
        Self {
            entries: vec![
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Car,
                    weight: 0.85,
                },
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Bus,
                    weight: 0.1,
                },
                VehicleCategoryDistributionEntry {
                    category: VehicleCategory::Van,
                    weight: 0.05,
                },
            ],
        }
    }
}

impl ControllerDistribution {
    /// Create distribution with single controller
    pub fn single_controller(controller: String, weight: f64) -> Self {
        Self {
            entries: vec![ControllerDistributionEntry {
                weight,
                controller: OSString::literal(controller),
            }],
        }
    }
}

impl TrafficAreaVertex {
    /// Create new traffic area vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Double::literal(x),
            y: Double::literal(y),
            z: Double::literal(z),
        }
    }

    /// Get x coordinate value
    pub fn x(&self) -> Option<&f64> {
        self.x.as_literal()
    }

    /// Get y coordinate value
    pub fn y(&self) -> Option<&f64> {
        self.y.as_literal()
    }

    /// Get z coordinate value
    pub fn z(&self) -> Option<&f64> {
        self.z.as_literal()
    }
}

impl TrafficArea {
    /// Create rectangular traffic area
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            vertices: vec![
                TrafficAreaVertex::new(x, y, 0.0),
                TrafficAreaVertex::new(x + width, y, 0.0),
                TrafficAreaVertex::new(x + width, y + height, 0.0),
                TrafficAreaVertex::new(x, y + height, 0.0),
            ],
        }
    }

    /// Create circular traffic area (approximated with polygon)
    pub fn circle(center_x: f64, center_y: f64, radius: f64, segments: u32) -> Self {
        let mut vertices = Vec::new();
        let segment_angle = 2.0 * std::f64::consts::PI / segments as f64;
        
        for i in 0..segments {
            let angle = i as f64 * segment_angle;
            let x = center_x + radius * angle.cos();
            let y = center_y + radius * angle.sin();
            vertices.push(TrafficAreaVertex::new(x, y, 0.0));
        }
        
        Self { vertices }
    }
}
