//! Scenario shell construction from an optional OpenDRIVE road network (C6).

use crate::commonroad::opendrive::{OpendriveConversionError, OpendriveConverter};
use crate::commonroad::types::{Scenario, ScenarioMetadata};
use std::path::{Path, PathBuf};

/// Result of building the scenario shell: the scenario itself, and a
/// non-fatal error if the OpenDRIVE collaborator failed.
#[derive(Debug, Clone)]
pub struct MapBuildResult {
    pub scenario: Scenario,
    pub xodr_error: Option<OpendriveConversionError>,
}

/// Resolve the XODR path to use: an explicit override wins over the path
/// implied by the scenario's `RoadNetwork/LogicFile`.
pub fn resolve_xodr_path(
    implicit_xodr_path: Option<&Path>,
    override_path: Option<&Path>,
) -> Option<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| implicit_xodr_path.map(Path::to_path_buf))
}

/// Build the scenario shell: an empty scenario if no XODR path is
/// available, else the converted lanelet network with `dt` overwritten to
/// `dt_cr`. A conversion failure is captured as a non-fatal sub-error and
/// the shell falls back to an empty-map scenario.
pub fn build_scenario_shell(
    xodr_path: Option<&Path>,
    dt_cr: f64,
    metadata: ScenarioMetadata,
    converter: &dyn OpendriveConverter,
) -> MapBuildResult {
    let Some(xodr_path) = xodr_path else {
        return MapBuildResult {
            scenario: Scenario::new(dt_cr, metadata),
            xodr_error: None,
        };
    };

    match converter.convert(xodr_path) {
        Ok(lanelet_network) => {
            let mut scenario = Scenario::new(dt_cr, metadata);
            scenario.lanelet_network = lanelet_network;
            MapBuildResult {
                scenario,
                xodr_error: None,
            }
        }
        Err(error) => MapBuildResult {
            scenario: Scenario::new(dt_cr, metadata),
            xodr_error: Some(error),
        },
    }
}
