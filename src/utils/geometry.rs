use crate::types::basic::{OSString, Double, Int, Boolean, UnsignedInt, UnsignedShort};
//! Geometric utility functions for spatial calculations and operations
//!
//! This file contains:
//! - Point-line distance calculations and geometric relationships
//! - Curve evaluation and parametric calculations for trajectories
//! - Intersection detection for collision and clearance checking
//! - Coordinate system transformation utilities
//! - Spatial indexing and query optimization for large scenarios
