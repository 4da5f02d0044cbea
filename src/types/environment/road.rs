//! Road condition and infrastructure types
//!
//! This file contains:
//! - RoadCondition with friction and wetness parameters
//!
//! Contributes to project by:
//! - Supporting realistic road surface simulation and vehicle dynamics
//! - Providing variable road conditions for weather-dependent testing

use crate::types::basic::Double;
use serde::{Deserialize, Serialize};

/// Road surface condition affecting vehicle dynamics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadCondition {
    #[serde(rename = "@frictionScaleFactor")]
    pub friction_scale_factor: Double,
}

impl Default for RoadCondition {
    fn default() -> Self {
        Self {
            friction_scale_factor: Double::literal(1.0),
        }
    }
}
