//! Basic geometric shapes for OpenSCENARIO

use crate::types::basic::Double;
use crate::types::positions::Position;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Three-dimensional bounding box for entity spatial extents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    /// Center position of the bounding box
    #[serde(rename = "Center")]
    pub center: Center,
    /// Dimensions of the bounding box
    #[serde(rename = "Dimensions")]
    pub dimensions: Dimensions,
}

/// Three-dimensional center point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    /// X coordinate
    #[serde(rename = "@x")]
    pub x: Double,
    /// Y coordinate  
    #[serde(rename = "@y")]
    pub y: Double,
    /// Z coordinate
    #[serde(rename = "@z")]
    pub z: Double,
}

/// Three-dimensional dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width (y-axis extent)
    #[serde(rename = "@width")]
    pub width: Double,
    /// Length (x-axis extent)
    #[serde(rename = "@length")]
    pub length: Double,
    /// Height (z-axis extent)
    #[serde(rename = "@height")]
    pub height: Double,
}

impl Center {
    /// Calculate 3D Euclidean distance to another center point
    pub fn distance_to(&self, other: &Center) -> Result<f64> {
        let params = HashMap::new();
        let x1 = self.x.resolve(&params)?;
        let y1 = self.y.resolve(&params)?;
        let z1 = self.z.resolve(&params)?;
        
        let x2 = other.x.resolve(&params)?;
        let y2 = other.y.resolve(&params)?;
        let z2 = other.z.resolve(&params)?;
        
        let dx = x2 - x1;
        let dy = y2 - y1;
        let dz = z2 - z1;
        
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }

    /// Calculate 3D Euclidean distance to another center point with parameter resolution
    pub fn distance_to_with_params(&self, other: &Center, params: &HashMap<String, String>) -> Result<f64> {
        let x1 = self.x.resolve(params)?;
        let y1 = self.y.resolve(params)?;
        let z1 = self.z.resolve(params)?;
        
        let x2 = other.x.resolve(params)?;
        let y2 = other.y.resolve(params)?;
        let z2 = other.z.resolve(params)?;
        
        let dx = x2 - x1;
        let dy = y2 - y1;
        let dz = z2 - z1;
        
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }
}

impl Default for Center {
    fn default() -> Self {
        Self {
            x: crate::types::basic::Value::literal(0.0),
            y: crate::types::basic::Value::literal(0.0),
            z: crate::types::basic::Value::literal(0.0),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: crate::types::basic::Value::literal(2.0), // Default car width
            length: crate::types::basic::Value::literal(4.5), // Default car length
            height: crate::types::basic::Value::literal(1.5), // Default car height
        }
    }
}

impl BoundingBox {
    /// Calculate the volume of the bounding box
    pub fn volume(&self) -> Result<f64> {
        let params = HashMap::new();
        let width = self.dimensions.width.resolve(&params)?;
        let length = self.dimensions.length.resolve(&params)?;
        let height = self.dimensions.height.resolve(&params)?;
        Ok(width * length * height)
    }

    /// Calculate the volume of the bounding box with parameter resolution
    pub fn volume_with_params(&self, params: &HashMap<String, String>) -> Result<f64> {
        let width = self.dimensions.width.resolve(params)?;
        let length = self.dimensions.length.resolve(params)?;
        let height = self.dimensions.height.resolve(params)?;
        Ok(width * length * height)
    }

    /// Check if a point is contained within this bounding box
    pub fn contains_point(&self, x: f64, y: f64, z: f64) -> Result<bool> {
        let params = HashMap::new();
        let center_x = self.center.x.resolve(&params)?;
        let center_y = self.center.y.resolve(&params)?;
        let center_z = self.center.z.resolve(&params)?;
        
        let width = self.dimensions.width.resolve(&params)?;
        let length = self.dimensions.length.resolve(&params)?;
        let height = self.dimensions.height.resolve(&params)?;

        let half_width = width / 2.0;
        let half_length = length / 2.0;
        let half_height = height / 2.0;

        Ok(x >= center_x - half_length && x <= center_x + half_length &&
           y >= center_y - half_width && y <= center_y + half_width &&
           z >= center_z - half_height && z <= center_z + half_height)
    }

    /// Check if a point is contained within this bounding box with parameter resolution
    pub fn contains_point_with_params(&self, x: f64, y: f64, z: f64, params: &HashMap<String, String>) -> Result<bool> {
        let center_x = self.center.x.resolve(params)?;
        let center_y = self.center.y.resolve(params)?;
        let center_z = self.center.z.resolve(params)?;
        
        let width = self.dimensions.width.resolve(params)?;
        let length = self.dimensions.length.resolve(params)?;
        let height = self.dimensions.height.resolve(params)?;

        let half_width = width / 2.0;
        let half_length = length / 2.0;
        let half_height = height / 2.0;

        Ok(x >= center_x - half_length && x <= center_x + half_length &&
           y >= center_y - half_width && y <= center_y + half_width &&
           z >= center_z - half_height && z <= center_z + half_height)
    }

    /// Calculate the distance from a point to the nearest surface of the bounding box
    pub fn distance_to_point(&self, x: f64, y: f64, z: f64, params: &HashMap<String, String>) -> Result<f64> {
        let center_x = self.center.x.resolve(params)?;
        let center_y = self.center.y.resolve(params)?;
        let center_z = self.center.z.resolve(params)?;
        
        let width = self.dimensions.width.resolve(params)?;
        let length = self.dimensions.length.resolve(params)?;
        let height = self.dimensions.height.resolve(params)?;

        let half_width = width / 2.0;
        let half_length = length / 2.0;
        let half_height = height / 2.0;

        // Calculate distance to each face
        let dx = (x - center_x).abs() - half_length;
        let dy = (y - center_y).abs() - half_width;
        let dz = (z - center_z).abs() - half_height;

        // If point is inside, return negative distance to nearest surface
        if dx <= 0.0 && dy <= 0.0 && dz <= 0.0 {
            // Return the maximum (least negative) of dx, dy, dz, which is the closest surface
            Ok(dx.max(dy).max(dz))
        } else {
            // Point is outside, calculate Euclidean distance to nearest corner/edge/face
            let dx_pos = dx.max(0.0);
            let dy_pos = dy.max(0.0);
            let dz_pos = dz.max(0.0);
            Ok((dx_pos * dx_pos + dy_pos * dy_pos + dz_pos * dz_pos).sqrt())
        }
    }

    /// Resolve every parameterized field against `params`, producing a
    /// bounding box of literal values only.
    pub fn resolve_parameters(&self, params: &HashMap<String, String>) -> Result<BoundingBox> {
        Ok(BoundingBox {
            center: Center {
                x: crate::types::basic::Value::literal(self.center.x.resolve(params)?),
                y: crate::types::basic::Value::literal(self.center.y.resolve(params)?),
                z: crate::types::basic::Value::literal(self.center.z.resolve(params)?),
            },
            dimensions: Dimensions {
                width: crate::types::basic::Value::literal(self.dimensions.width.resolve(params)?),
                length: crate::types::basic::Value::literal(self.dimensions.length.resolve(params)?),
                height: crate::types::basic::Value::literal(self.dimensions.height.resolve(params)?),
            },
        })
    }

    /// Check if this bounding box intersects with another
    pub fn intersects(&self, other: &BoundingBox, params: &HashMap<String, String>) -> Result<bool> {
        let self_center_x = self.center.x.resolve(params)?;
        let self_center_y = self.center.y.resolve(params)?;
        let self_center_z = self.center.z.resolve(params)?;
        let self_width = self.dimensions.width.resolve(params)?;
        let self_length = self.dimensions.length.resolve(params)?;
        let self_height = self.dimensions.height.resolve(params)?;

        let other_center_x = other.center.x.resolve(params)?;
        let other_center_y = other.center.y.resolve(params)?;
        let other_center_z = other.center.z.resolve(params)?;
        let other_width = other.dimensions.width.resolve(params)?;
        let other_length = other.dimensions.length.resolve(params)?;
        let other_height = other.dimensions.height.resolve(params)?;

        // Check for separation along each axis
        let x_overlap = (self_center_x - other_center_x).abs() <= (self_length + other_length) / 2.0;
        let y_overlap = (self_center_y - other_center_y).abs() <= (self_width + other_width) / 2.0;
        let z_overlap = (self_center_z - other_center_z).abs() <= (self_height + other_height) / 2.0;

        Ok(x_overlap && y_overlap && z_overlap)
    }
}

impl Dimensions {
    /// Create dimensions for a standard vehicle (alias for car)
    pub fn vehicle_default() -> Self {
        Self::new(2.0, 4.5, 1.8)
    }

    /// Create dimensions for a pedestrian
    pub fn pedestrian_default() -> Self {
        Self::new(0.6, 0.6, 1.8)
    }

    /// Create dimensions for a truck
    pub fn truck_default() -> Self {
        Self::new(2.5, 12.0, 3.5)
    }

    /// Create new dimensions with specified values
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width: crate::types::basic::Value::literal(width),
            length: crate::types::basic::Value::literal(length),
            height: crate::types::basic::Value::literal(height),
        }
    }

    /// Create dimensions for a standard car
    pub fn car() -> Self {
        Self {
            width: crate::types::basic::Value::literal(1.8),
            length: crate::types::basic::Value::literal(4.5),
            height: crate::types::basic::Value::literal(1.5),
        }
    }

    /// Create dimensions for a truck
    pub fn truck() -> Self {
        Self {
            width: crate::types::basic::Value::literal(2.5),
            length: crate::types::basic::Value::literal(12.0),
            height: crate::types::basic::Value::literal(3.8),
        }
    }

    /// Create dimensions for a bus
    pub fn bus() -> Self {
        Self {
            width: crate::types::basic::Value::literal(2.5),
            length: crate::types::basic::Value::literal(12.0),
            height: crate::types::basic::Value::literal(3.2),
        }
    }

    /// Create dimensions for a motorcycle
    pub fn motorcycle() -> Self {
        Self {
            width: crate::types::basic::Value::literal(0.8),
            length: crate::types::basic::Value::literal(2.2),
            height: crate::types::basic::Value::literal(1.3),
        }
    }

    /// Create dimensions for a pedestrian
    pub fn pedestrian() -> Self {
        Self {
            width: crate::types::basic::Value::literal(0.6),
            length: crate::types::basic::Value::literal(0.6),
            height: crate::types::basic::Value::literal(1.8),
        }
    }

    /// Calculate the footprint area (width * length)
    pub fn footprint_area(&self, params: &HashMap<String, String>) -> Result<f64> {
        let width = self.width.resolve(params)?;
        let length = self.length.resolve(params)?;
        Ok(width * length)
    }

    /// Scale dimensions by a factor
    pub fn scale(&self, factor: f64, params: &HashMap<String, String>) -> Result<Self> {
        let width = self.width.resolve(params)? * factor;
        let length = self.length.resolve(params)? * factor;
        let height = self.height.resolve(params)? * factor;
        
        Ok(Self {
            width: crate::types::basic::Value::literal(width),
            length: crate::types::basic::Value::literal(length),
            height: crate::types::basic::Value::literal(height),
        })
    }
}

/// Shape definition for trajectories and paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "Polyline", skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Polyline>,
    // Other shape types can be added later as optional fields
}

/// Polyline shape with time-positioned vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    #[serde(rename = "Vertex", default)]
    pub vertices: Vec<Vertex>,
}

/// Trajectory vertex with time and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(rename = "@time")]
    pub time: Double,
    #[serde(rename = "Position")]
    pub position: Position,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            polyline: Some(Polyline::default()),
        }
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self {
            vertices: vec![Vertex::default()],
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            time: crate::types::basic::Value::literal(0.0),
            position: Position::default(),
        }
    }
}
