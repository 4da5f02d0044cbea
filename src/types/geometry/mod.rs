//! Geometry type module for shapes, curves, and spatial definitions
//!
//! This file contains:
//! - Base geometry traits and common geometric operations
//! - Shape validation and geometric constraint checking
//! - Coordinate system utilities and transformations
//! - Geometric calculations (distances, intersections, projections)
//! - Integration with linear algebra libraries for complex operations
//!
//! Contributes to project by:
//! - Organizing 12+ geometry types into logical shape categories
//! - Providing consistent interface for all geometric operations
//! - Enabling complex path and area definitions for scenarios
//! - Supporting mathematical precision in spatial calculations
//! - Facilitating integration with CAD and GIS systems

pub mod shapes;

pub use shapes::{BoundingBox, Center, Dimensions, Polyline, Shape, Vertex};
