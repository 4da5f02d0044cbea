//! Distribution system module for scenario parameterization and variation
//!
//! This file contains:
//! - Base distribution traits and common distribution behaviors
//! - Distribution evaluation and sampling utilities
//! - Parameter value generation and constraint checking
//! - Cross-cutting distribution concerns (seeding, reproducibility)
//! - Integration with parameter resolution and scenario instantiation
//!
//! Contributes to project by:
//! - Organizing 18+ distribution types into logical categories
//! - Providing consistent framework for scenario parameterization
//! - Supporting both deterministic and stochastic scenario variations
//! - Enabling reproducible scenario generation through proper seeding
//! - Facilitating integration with parameter systems and scenario builders

pub mod deterministic;
pub mod stochastic;

pub use deterministic::{
    DeterministicMultiParameterDistribution, DeterministicParameterDistribution,
    DeterministicSingleParameterDistribution, DistributionRange, DistributionSet, ParameterAssignment,
    ParameterValueSet, ValueSetDistribution,
};
pub use stochastic::{NormalDistribution, Range, StochasticDistribution, UniformDistribution};

use crate::error::Result;
use crate::types::basic::OSString;
use serde::{Deserialize, Serialize};

/// A distribution that can produce one or more candidate values for a
/// parameter. `DistributionSet`/`DistributionRange` are deterministic
/// (`enumerate` lists every value); the stochastic distributions only ever
/// draw a single sample, so the default `enumerate` just wraps `sample`.
pub trait DistributionSampler {
    type Output;

    fn sample(&self) -> Result<Self::Output>;

    fn enumerate(&self) -> Result<Vec<Self::Output>> {
        Ok(vec![self.sample()?])
    }

    fn is_deterministic(&self) -> bool;
}

/// Structural validation for a distribution, independent of parameter
/// resolution (e.g. "has at least one element").
pub trait ValidateDistribution {
    fn validate(&self) -> Result<()>;
}

/// An escape hatch for distributions defined outside the standard schema,
/// identified by name with optional free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDefinedDistribution {
    #[serde(rename = "@name")]
    pub name: OSString,
    #[serde(rename = "@freeText", skip_serializing_if = "Option::is_none")]
    pub free_text: Option<OSString>,
}

impl ValidateDistribution for UserDefinedDistribution {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// The `OpenSCENARIO.ParameterValueDistribution` document root: a reference
/// scenario file plus the deterministic/stochastic distributions to
/// instantiate it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParameterValueDistribution {
    #[serde(rename = "ScenarioFile", skip_serializing_if = "Option::is_none")]
    pub scenario_file: Option<OSString>,
    #[serde(rename = "Deterministic", default, skip_serializing_if = "Vec::is_empty")]
    pub deterministic: Vec<DeterministicParameterDistribution>,
    #[serde(rename = "Stochastic", default, skip_serializing_if = "Vec::is_empty")]
    pub stochastic: Vec<StochasticDistribution>,
}

impl ParameterValueDistribution {
    pub fn validate(&self) -> Result<()> {
        for dist in &self.deterministic {
            ValidateDistribution::validate(dist)?;
        }
        for dist in &self.stochastic {
            ValidateDistribution::validate(dist)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_parameter_value_distribution_validates() {
        let dist = ParameterValueDistribution::default();
        assert!(dist.validate().is_ok());
    }
}
