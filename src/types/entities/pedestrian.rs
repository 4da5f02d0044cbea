//! Pedestrian entity definition

use crate::types::basic::OSString;
use crate::types::enums::PedestrianCategory;
use crate::types::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// Pedestrian entity definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedestrian {
    /// Name of the pedestrian
    #[serde(rename = "@name")]
    pub name: OSString,

    /// Category of the pedestrian (pedestrian, wheelchair, animal)
    #[serde(rename = "@pedestrianCategory")]
    pub pedestrian_category: PedestrianCategory,

    /// Bounding box defining the pedestrian's spatial extents
    #[serde(rename = "BoundingBox")]
    pub bounding_box: BoundingBox,
}

impl Default for Pedestrian {
    fn default() -> Self {
        Self {
            name: crate::types::basic::Value::literal("DefaultPedestrian".to_string()),
            pedestrian_category: PedestrianCategory::Pedestrian,
            bounding_box: BoundingBox {
                center: crate::types::geometry::Center::default(),
                dimensions: crate::types::geometry::Dimensions {
                    width: crate::types::basic::Value::literal(0.6), // Typical person width
                    length: crate::types::basic::Value::literal(0.6), // Typical person depth
                    height: crate::types::basic::Value::literal(1.8), // Typical person height
                },
            },
        }
    }
}
