//! Environment type module for weather, lighting, and road conditions
//!
//! This file contains:
//! - The top-level `Environment` container (time of day, weather, road condition)
//! - Re-exports of the weather and road condition leaf types
//!
//! Contributes to project by:
//! - Providing consistent framework for environmental simulation
//! - Supporting dynamic environmental changes during scenarios

use crate::types::basic::{Boolean, OSString};
use serde::{Deserialize, Serialize};

pub mod road;
pub mod weather;

pub use road::RoadCondition;
pub use weather::{Fog, Precipitation, Sun, Weather};

/// Date/time and animation settings for a scenario's time of day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeOfDay {
    #[serde(rename = "@animation")]
    pub animation: Boolean,
    #[serde(rename = "@dateTime")]
    pub date_time: String,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self {
            animation: Boolean::literal(false),
            date_time: "1970-01-01T00:00:00".to_string(),
        }
    }
}

/// Complete environment definition: time of day, weather, and road condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "TimeOfDay")]
    pub time_of_day: TimeOfDay,
    #[serde(rename = "Weather")]
    pub weather: Weather,
    #[serde(rename = "RoadCondition")]
    pub road_condition: RoadCondition,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            name: OSString::literal("DefaultEnvironment".to_string()),
            time_of_day: TimeOfDay::default(),
            weather: Weather::default(),
            road_condition: RoadCondition::default(),
        }
    }
}
