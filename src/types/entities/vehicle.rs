//! Vehicle entity definition

use crate::types::basic::{Double, OSString};
use crate::types::enums::VehicleCategory;
use crate::types::entities::axles::Axles;
use crate::types::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// Vehicle entity definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Name of the vehicle
    #[serde(rename = "@name")]
    pub name: OSString,

    /// Category of the vehicle (car, truck, bus, etc.)
    #[serde(rename = "@vehicleCategory")]
    pub vehicle_category: VehicleCategory,

    /// Bounding box defining the vehicle's spatial extents
    #[serde(rename = "BoundingBox")]
    pub bounding_box: BoundingBox,

    /// Performance envelope (max speed/acceleration/deceleration)
    #[serde(rename = "Performance")]
    pub performance: Performance,

    /// Front/rear/additional axle geometry
    #[serde(rename = "Axles")]
    pub axles: Axles,

    /// Free-form properties (e.g. control strategy hints, file attachments)
    #[serde(rename = "Properties", skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

/// Vehicle dynamics envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "@maxSpeed")]
    pub max_speed: Double,
    #[serde(rename = "@maxAcceleration")]
    pub max_acceleration: Double,
    #[serde(rename = "@maxDeceleration")]
    pub max_deceleration: Double,
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            max_speed: Double::literal(69.444), // 250 km/h
            max_acceleration: Double::literal(10.0),
            max_deceleration: Double::literal(10.0),
        }
    }
}

/// A single name/value property, as used inside `Properties`/`ControllerProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

/// A file attachment referenced from `Properties` (e.g. a 3D model path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "@filepath")]
    pub filepath: String,
}

/// Free-form property bag attached to vehicles/controllers/templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "Property", default)]
    pub properties: Vec<Property>,
    #[serde(rename = "File", default)]
    pub files: Vec<File>,
}

impl Properties {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            name: crate::types::basic::Value::literal("DefaultVehicle".to_string()),
            vehicle_category: VehicleCategory::Car,
            bounding_box: BoundingBox::default(),
            performance: Performance::default(),
            axles: Axles::car(),
            properties: None,
        }
    }
}
