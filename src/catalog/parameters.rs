//! Parameter substitution engine for catalog resolution
//!
//! This module handles:
//! - Parameter parsing and substitution in catalog entities
//! - Parameter validation against schemas and constraints
//! - Nested parameter reference resolution
//! - Context-aware parameter evaluation

use crate::error::{Error, Result};
use crate::types::basic::Value;
use crate::types::catalogs::entities::{CatalogEntity, ParameterDefinition};
use regex::Regex;
use std::collections::HashMap;

/// Parameter substitution engine
pub struct ParameterSubstitutionEngine {
    /// Current parameter context (parameter name -> resolved value)
    parameter_context: HashMap<String, String>,
    /// Parameter definitions with schemas and constraints
    parameter_definitions: HashMap<String, ParameterDefinition>,
    /// Cached regex for parameter detection
    parameter_regex: Regex,
}

impl ParameterSubstitutionEngine {
    /// Create a new parameter substitution engine
    pub fn new() -> Self {
        Self {
            parameter_context: HashMap::new(),
            parameter_definitions: HashMap::new(),
            parameter_regex: Regex::new(r"\$\{([^}]+)\}").unwrap(),
        }
    }

    /// Create a parameter engine with initial context
    pub fn with_context(context: HashMap<String, String>) -> Self {
        Self {
            parameter_context: context,
            parameter_definitions: HashMap::new(),
            parameter_regex: Regex::new(r"\$\{([^}]+)\}").unwrap(),
        }
    }

    /// Add parameter definitions from a catalog entity schema
    pub fn add_parameter_schema<T: CatalogEntity>(&mut self) {
        let schema = T::parameter_schema();
        for param_def in schema {
            self.parameter_definitions
                .insert(param_def.name.clone(), param_def);
        }
    }

    /// Set a parameter value in the context
    pub fn set_parameter(&mut self, name: String, value: String) -> Result<()> {
        // Validate against schema if available
        if let Some(param_def) = self.parameter_definitions.get(&name) {
            self.validate_parameter_value(&name, &value, param_def)?;
        }

        self.parameter_context.insert(name, value);
        Ok(())
    }

    /// Set multiple parameter values
    pub fn set_parameters(&mut self, parameters: HashMap<String, String>) -> Result<()> {
        for (name, value) in parameters {
            self.set_parameter(name, value)?;
        }
        Ok(())
    }

    /// Get a parameter value from the context
    pub fn get_parameter(&self, name: &str) -> Option<&String> {
        self.parameter_context.get(name)
    }

    /// Resolve a parameter expression
    ///
    /// Handles expressions like:
    /// - `${ParameterName}` - Simple parameter reference
    /// - `${ParameterName + 10}` - Expression evaluation (future enhancement)
    pub fn resolve_parameter_expression(&self, expression: &str) -> Result<String> {
        if !self.parameter_regex.is_match(expression) {
            // No parameters to substitute - return as-is
            return Ok(expression.to_string());
        }

        let mut result = expression.to_string();

        // Find all parameter references
        for captures in self.parameter_regex.captures_iter(expression) {
            let full_match = captures.get(0).unwrap().as_str();
            let param_name = captures.get(1).unwrap().as_str().trim();

            // Look up the parameter value
            let param_value = self.parameter_context.get(param_name).ok_or_else(|| {
                Error::catalog_error(&format!(
                    "Parameter '{}' not found in substitution context",
                    param_name
                ))
            })?;

            result = result.replace(full_match, param_value);
        }

        Ok(result)
    }

    /// Resolve parameters in a Value<T> field
    pub fn resolve_value<T>(&self, value: &Value<T>) -> Result<T>
    where
        T: std::str::FromStr + Clone,
        T::Err: std::fmt::Display,
    {
        match value {
            Value::Literal(v) => Ok(v.clone()),
            Value::Parameter(param_name) => {
                let param_value = self.parameter_context.get(param_name).ok_or_else(|| {
                    Error::catalog_error(&format!(
                        "Parameter '{}' not found in substitution context",
                        param_name
                    ))
                })?;

                param_value.parse().map_err(|e| {
                    Error::catalog_error(&format!(
                        "Failed to parse parameter '{}' value '{}': {}",
                        param_name, param_value, e
                    ))
                })
            }
            Value::Expression(expr) => {
                let resolved_expr = self.resolve_parameter_expression(expr)?;
                resolved_expr.parse().map_err(|e| {
                    Error::catalog_error(&format!(
                        "Failed to parse resolved expression '{}': {}",
                        resolved_expr, e
                    ))
                })
            }
        }
    }

    /// Substitute parameters in a catalog entity to produce a resolved scenario entity
    pub fn substitute_parameters<T: CatalogEntity>(
        &self,
        catalog_entity: T,
        additional_params: &HashMap<String, String>,
    ) -> Result<T::ResolvedType> {
        // Merge additional parameters with our context
        let mut combined_context = self.parameter_context.clone();
        combined_context.extend(additional_params.clone());

        // Use the catalog entity's own resolution method
        catalog_entity.into_scenario_entity(combined_context)
    }

    /// Validate a parameter value against its definition
    fn validate_parameter_value(
        &self,
        name: &str,
        value: &str,
        definition: &ParameterDefinition,
    ) -> Result<()> {
        // Type validation
        match definition.parameter_type.as_str() {
            "Double" | "Float" => {
                value.parse::<f64>().map_err(|_| {
                    Error::catalog_error(&format!(
                        "Parameter '{}' must be a valid number, got '{}'",
                        name, value
                    ))
                })?;
            }
            "Integer" | "Int" => {
                value.parse::<i32>().map_err(|_| {
                    Error::catalog_error(&format!(
                        "Parameter '{}' must be a valid integer, got '{}'",
                        name, value
                    ))
                })?;
            }
            "Boolean" => {
                value.parse::<bool>().map_err(|_| {
                    Error::catalog_error(&format!(
                        "Parameter '{}' must be a valid boolean (true/false), got '{}'",
                        name, value
                    ))
                })?;
            }
            "String" => {
                // String values are always valid
            }
            _ => {
                // Unknown parameter type - log warning but don't fail
            }
        }

        Ok(())
    }

    /// Get all parameter names in the current context
    pub fn parameter_names(&self) -> Vec<&String> {
        self.parameter_context.keys().collect()
    }

    /// Clear the parameter context
    pub fn clear_context(&mut self) {
        self.parameter_context.clear();
    }

    /// Get the current parameter context
    pub fn context(&self) -> &HashMap<String, String> {
        &self.parameter_context
    }

    /// Create a child engine with additional context
    pub fn with_additional_context(&self, additional: HashMap<String, String>) -> Self {
        let mut context = self.parameter_context.clone();
        context.extend(additional);

        Self {
            parameter_context: context,
            parameter_definitions: self.parameter_definitions.clone(),
            parameter_regex: self.parameter_regex.clone(),
        }
    }
}

impl Default for ParameterSubstitutionEngine {
    fn default() -> Self {
        Self::new()
    }
}
