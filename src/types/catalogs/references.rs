//! Catalog reference and location types for modular scenarios
//!
//! This file contains:
//! - Base catalog traits and catalog management utilities
//! - Catalog reference resolution and dependency tracking
//! - Catalog validation and consistency checking
//! - Cross-catalog reference handling and circular dependency detection
//! - Catalog versioning and compatibility management
//!
//! Contributes to project by:
//! - Organizing catalog system into logical component categories
//! - Providing consistent framework for catalog reference resolution
//! - Supporting modular scenario design through reusable components
//! - Enabling catalog validation and dependency management
//! - Facilitating catalog evolution and version compatibility

use crate::types::basic::OSString;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A single `$param = value` pair inside a `CatalogReference`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterAssignment {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: OSString,
    #[serde(rename = "@value")]
    pub value: OSString,
}

/// Parameter assignments carried by a `CatalogReference`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParameterAssignments {
    #[serde(rename = "ParameterAssignment", default)]
    pub assignments: Vec<ParameterAssignment>,
}

/// Reference to a named entry in an external catalog, typed by the entity
/// kind it resolves to (e.g. `CatalogReference<CatalogVehicle>`). The type
/// parameter only disambiguates at compile time; it isn't serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogReference<T> {
    #[serde(rename = "@catalogName")]
    pub catalog_name: OSString,
    #[serde(rename = "@entryName")]
    pub entry_name: OSString,
    #[serde(rename = "ParameterAssignments", skip_serializing_if = "Option::is_none")]
    pub parameter_assignments: Option<ParameterAssignments>,
    #[serde(skip)]
    pub _entity: PhantomData<T>,
}

impl<T> CatalogReference<T> {
    pub fn new(catalog_name: String, entry_name: String) -> Self {
        Self {
            catalog_name: OSString::literal(catalog_name),
            entry_name: OSString::literal(entry_name),
            parameter_assignments: None,
            _entity: PhantomData,
        }
    }
}

/// Reference to a named entry in a controller catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerCatalogReference {
    #[serde(rename = "@catalogName")]
    pub catalog_name: OSString,
    #[serde(rename = "@entryName")]
    pub entry_name: OSString,
    #[serde(rename = "ParameterAssignments", skip_serializing_if = "Option::is_none")]
    pub parameter_assignments: Option<ParameterAssignments>,
}

impl ControllerCatalogReference {
    pub fn new(catalog_name: String, entry_name: String) -> Self {
        Self {
            catalog_name: OSString::literal(catalog_name),
            entry_name: OSString::literal(entry_name),
            parameter_assignments: None,
        }
    }
}
