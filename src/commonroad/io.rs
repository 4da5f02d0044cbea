//! Serialization of `Scenario`/`PlanningProblem` to the CommonRoad XML file
//! format, mirroring the teacher's `parser::xml` (`quick-xml` + `serde`)
//! pattern for the output side instead of the input side.

use crate::commonroad::types::{PlanningProblem, Scenario};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk root element pairing a scenario with its planning problem(s),
/// matching the `commonroad-io` `.xml` file layout.
#[derive(Debug, Serialize)]
#[serde(rename = "commonRoad")]
struct CommonRoadFile<'a> {
    #[serde(rename = "@commonRoadVersion")]
    version: &'static str,
    #[serde(rename = "Scenario")]
    scenario: &'a Scenario,
    #[serde(rename = "PlanningProblem")]
    planning_problems: &'a [PlanningProblem],
}

/// Serialize a scenario and its planning problems to a CommonRoad XML
/// string.
pub fn serialize_to_string(scenario: &Scenario, planning_problems: &[PlanningProblem]) -> crate::Result<String> {
    let file = CommonRoadFile {
        version: "2020a",
        scenario,
        planning_problems,
    };
    quick_xml::se::to_string(&file)
        .map_err(|e| crate::Error::invalid_xml(&format!("failed to serialize CommonRoad scenario: {e}")))
}

/// Serialize and write to `path`, creating parent directories as needed.
pub fn write_to_file(
    scenario: &Scenario,
    planning_problems: &[PlanningProblem],
    path: &Path,
) -> crate::Result<()> {
    let xml = serialize_to_string(scenario, planning_problems)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| crate::Error::file_write_error(&path.to_string_lossy(), &e.to_string()))?;
    }
    fs::write(path, xml).map_err(|e| crate::Error::file_write_error(&path.to_string_lossy(), &e.to_string()))
}

/// Owned mirror of `CommonRoadFile` for reading: `merge` mode needs to pull
/// another scenario's lanelet network and obstacles back in, which the
/// write side never needed.
#[derive(Debug, Deserialize)]
#[serde(rename = "commonRoad")]
struct CommonRoadFileOwned {
    #[serde(rename = "Scenario")]
    scenario: Scenario,
    #[serde(rename = "PlanningProblem", default)]
    planning_problems: Vec<PlanningProblem>,
}

/// Read a scenario and its planning problems back from a CommonRoad XML
/// file previously written by [`write_to_file`].
pub fn read_from_file(path: &Path) -> crate::Result<(Scenario, Vec<PlanningProblem>)> {
    let text = fs::read_to_string(path)
        .map_err(|e| crate::Error::file_read_error(&path.to_string_lossy(), &e.to_string()))?;
    let file: CommonRoadFileOwned = quick_xml::de::from_str(&text)
        .map_err(|e| crate::Error::invalid_xml(&format!("failed to parse CommonRoad scenario: {e}")))?;
    Ok((file.scenario, file.planning_problems))
}
