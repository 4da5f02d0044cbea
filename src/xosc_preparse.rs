//! Lightweight pre-parse classification and actor/vehicle resolution ahead
//! of the conversion pipeline proper (C5).
//!
//! `classify` only needs to know which children the document root carries,
//! so it scans with `quick_xml`'s event API rather than deserializing
//! through [`crate::types::scenario::storyboard::OpenScenario`] — a
//! catalog file or a malformed scenario often won't satisfy that type's
//! required fields at all, so a full parse is the wrong tool here.
//! `resolve_actors`, in contrast, needs the complete entity/catalog model
//! and does go through the full parse.

use crate::catalog::CatalogLoader;
use crate::error::{Error, Result};
use crate::parser::xml::parse_from_file;
use crate::types::catalogs::entities::CatalogEntity;
use crate::types::catalogs::locations::CatalogLocations;
use crate::types::entities::vehicle::Vehicle;
use crate::types::scenario::storyboard::OpenScenarioCategory;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of scanning a `.xosc` file's root element, ahead of any attempt
/// to fully parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreParse {
    /// Root carries a `Catalog` child.
    IsCatalog,
    /// Root carries a `ParameterValueDistribution` child, optionally
    /// naming the scenario file it distributes parameters over. That file
    /// is not followed.
    IsParameterDistribution { referenced_file: Option<PathBuf> },
    /// Root carries none of `Storyboard`, `Catalog`, `ParameterValueDistribution`.
    NoStoryboard,
    /// Root carries a `Storyboard` child, i.e. this is a concrete scenario.
    /// `implicit_xodr_path` is `RoadNetwork/LogicFile/@filepath` resolved
    /// relative to the XOSC file's directory, if present. Existence is not
    /// checked here.
    Scenario { implicit_xodr_path: Option<PathBuf> },
}

#[derive(Debug, Default)]
struct RootScan {
    has_storyboard: bool,
    has_catalog: bool,
    has_parameter_value_distribution: bool,
    logic_file_path: Option<String>,
    scenario_file_path: Option<String>,
}

/// Classify `path` by its root element's direct children, without fully
/// deserializing the document.
pub fn classify(path: &Path) -> Result<PreParse> {
    let xml = std::fs::read_to_string(path)
        .map_err(|e| Error::file_read_error(&path.to_string_lossy(), &e.to_string()))?;

    let scan = scan_root_children(&xml)?;

    if scan.has_storyboard {
        let implicit_xodr_path = scan.logic_file_path.map(|p| resolve_relative(path, &p));
        return Ok(PreParse::Scenario { implicit_xodr_path });
    }
    if scan.has_catalog {
        return Ok(PreParse::IsCatalog);
    }
    if scan.has_parameter_value_distribution {
        let referenced_file = scan.scenario_file_path.map(|p| resolve_relative(path, &p));
        return Ok(PreParse::IsParameterDistribution { referenced_file });
    }
    Ok(PreParse::NoStoryboard)
}

fn scan_root_children(xml: &str) -> Result<RootScan> {
    let mut reader = Reader::from_str(xml);

    let mut scan = RootScan::default();
    let mut stack: Vec<String> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::invalid_xml(&format!("malformed XML: {e}")))?;
        match event {
            Event::Eof => break,
            Event::Start(start) => {
                let name = local_name(&start);
                note_element(&mut scan, &stack, &name, &start);
                stack.push(name);
            }
            Event::Empty(start) => {
                let name = local_name(&start);
                note_element(&mut scan, &stack, &name, &start);
            }
            Event::End(_) => {
                stack.pop();
            }
            _ => {}
        }
    }

    Ok(scan)
}

fn note_element(scan: &mut RootScan, stack: &[String], name: &str, start: &BytesStart) {
    match stack.len() {
        // Direct child of the document root.
        1 => match name {
            "Storyboard" => scan.has_storyboard = true,
            "Catalog" => scan.has_catalog = true,
            "ParameterValueDistribution" => scan.has_parameter_value_distribution = true,
            _ => {}
        },
        // Grandchild of the root: only RoadNetwork/LogicFile and
        // ParameterValueDistribution/ScenarioFile matter here.
        2 => match (stack.last().map(String::as_str), name) {
            (Some("RoadNetwork"), "LogicFile") => {
                scan.logic_file_path = attr_value(start, "filepath");
            }
            (Some("ParameterValueDistribution"), "ScenarioFile") => {
                scan.scenario_file_path = attr_value(start, "filepath");
            }
            _ => {}
        },
        _ => {}
    }
}

fn local_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn attr_value(start: &BytesStart, attr: &str) -> Option<String> {
    start.attributes().filter_map(|a| a.ok()).find_map(|a| {
        if a.key.local_name().as_ref() == attr.as_bytes() {
            Some(String::from_utf8_lossy(a.value.as_ref()).into_owned())
        } else {
            None
        }
    })
}

fn resolve_relative(xosc_path: &Path, candidate: &str) -> PathBuf {
    let candidate = Path::new(candidate);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    match xosc_path.parent() {
        Some(parent) => parent.join(candidate),
        None => candidate.to_path_buf(),
    }
}

/// Resolve each of `actor_names` to the `Vehicle` it refers to, scanning
/// inline `Entities/ScenarioObject` definitions first and falling back to
/// a catalog directory walk for names that only carry a `CatalogReference`.
///
/// Names that can't be resolved at all (entity not found, no vehicle,
/// unresolved catalog entry) map to `None` rather than failing the whole
/// call. A hard error (unparseable file, no scenario definition) is
/// returned whole; callers should substitute an all-`None` map for every
/// requested actor in that case and continue the pipeline.
pub fn resolve_actors(path: &Path, actor_names: &[String]) -> Result<HashMap<String, Option<Vehicle>>> {
    let document = parse_from_file(path)?;
    let definition = match document.category() {
        OpenScenarioCategory::Scenario(definition) => definition,
        _ => {
            return Err(Error::catalog_error(&format!(
                "{} has no scenario definition to resolve actors from",
                path.display()
            )))
        }
    };

    let mut resolved: HashMap<String, Option<Vehicle>> =
        actor_names.iter().map(|name| (name.clone(), None)).collect();

    let mut by_catalog_entry: HashMap<String, String> = HashMap::new();
    for name in actor_names {
        let Some(object) = definition.entities.find_object(name) else {
            continue;
        };
        if let Some(vehicle) = &object.vehicle {
            resolved.insert(name.clone(), Some(vehicle.clone()));
            continue;
        }
        if let Some(catalog_reference) = object.vehicle_catalog_reference() {
            if let Some(entry_name) = catalog_reference.entry_name.as_literal() {
                by_catalog_entry.insert(name.clone(), entry_name.clone());
            }
        }
    }

    if !by_catalog_entry.is_empty() {
        resolve_from_catalogs(path, &definition.catalog_locations, &mut by_catalog_entry, &mut resolved);
    }

    Ok(resolved)
}

fn resolve_from_catalogs(
    xosc_path: &Path,
    locations: &CatalogLocations,
    remaining: &mut HashMap<String, String>,
    resolved: &mut HashMap<String, Option<Vehicle>>,
) {
    let base = xosc_path.parent().unwrap_or_else(|| Path::new("."));
    let loader = CatalogLoader::with_base_path(base);

    for directory in catalog_search_order(locations) {
        if remaining.is_empty() {
            break;
        }
        let Ok(files) = loader.discover_catalog_files(&directory) else {
            continue;
        };
        for file in files {
            if remaining.is_empty() {
                break;
            }
            let Ok(catalog) = loader.load_and_parse_catalog_file(&file) else {
                continue;
            };
            remaining.retain(|actor_name, entry_name| {
                let Some(catalog_vehicle) = catalog.find_vehicle(entry_name) else {
                    return true;
                };
                match catalog_vehicle.clone().into_scenario_entity(HashMap::new()) {
                    Ok(vehicle) => {
                        resolved.insert(actor_name.clone(), Some(vehicle));
                        false
                    }
                    Err(_) => true,
                }
            });
        }
    }
}

/// `VehicleCatalog` first (Open Question (c): this is where vehicles are
/// meant to live), then every other declared catalog directory as a
/// fallback for non-conformant scenario files.
fn catalog_search_order(locations: &CatalogLocations) -> Vec<crate::types::basic::Directory> {
    let mut directories = Vec::new();
    if let Some(location) = &locations.vehicle_catalog {
        directories.push(location.directory.clone());
    }
    let others = [
        locations.controller_catalog.as_ref().map(|l| l.directory.clone()),
        locations.pedestrian_catalog.as_ref().map(|l| l.directory.clone()),
        locations.misc_object_catalog.as_ref().map(|l| l.directory.clone()),
        locations.environment_catalog.as_ref().map(|l| l.directory.clone()),
        locations.maneuver_catalog.as_ref().map(|l| l.directory.clone()),
        locations.trajectory_catalog.as_ref().map(|l| l.directory.clone()),
        locations.route_catalog.as_ref().map(|l| l.directory.clone()),
    ];
    directories.extend(others.into_iter().flatten());
    directories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn classifies_scenario_with_implicit_xodr() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<?xml version="1.0"?>
        <OpenSCENARIO>
            <FileHeader author="a" date="2024-01-01T00:00:00" description="d" revMajor="1" revMinor="3"/>
            <ParameterDeclarations/>
            <CatalogLocations/>
            <RoadNetwork><LogicFile filepath="roads/highway.xodr"/></RoadNetwork>
            <Entities/>
            <Storyboard><Init/></Storyboard>
        </OpenSCENARIO>"#;
        let path = write_file(&dir, "scenario.xosc", xml);

        let result = classify(&path).unwrap();
        match result {
            PreParse::Scenario { implicit_xodr_path } => {
                let expected = dir.path().join("roads/highway.xodr");
                assert_eq!(implicit_xodr_path, Some(expected));
            }
            other => panic!("expected Scenario, got {other:?}"),
        }
    }

    #[test]
    fn classifies_scenario_without_road_network_logic_file() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<?xml version="1.0"?>
        <OpenSCENARIO>
            <FileHeader author="a" date="2024-01-01T00:00:00" description="d" revMajor="1" revMinor="3"/>
            <RoadNetwork/>
            <Entities/>
            <Storyboard><Init/></Storyboard>
        </OpenSCENARIO>"#;
        let path = write_file(&dir, "scenario.xosc", xml);

        assert_eq!(
            classify(&path).unwrap(),
            PreParse::Scenario {
                implicit_xodr_path: None
            }
        );
    }

    #[test]
    fn classifies_catalog_file() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<?xml version="1.0"?>
        <OpenSCENARIO>
            <FileHeader author="a" date="2024-01-01T00:00:00" description="d" revMajor="1" revMinor="3"/>
            <Catalog name="VehicleCatalog"></Catalog>
        </OpenSCENARIO>"#;
        let path = write_file(&dir, "catalog.xosc", xml);

        assert_eq!(classify(&path).unwrap(), PreParse::IsCatalog);
    }

    #[test]
    fn classifies_parameter_value_distribution_with_referenced_file() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<?xml version="1.0"?>
        <OpenSCENARIO>
            <FileHeader author="a" date="2024-01-01T00:00:00" description="d" revMajor="1" revMinor="3"/>
            <ParameterValueDistribution>
                <ScenarioFile filepath="base_scenario.xosc"/>
            </ParameterValueDistribution>
        </OpenSCENARIO>"#;
        let path = write_file(&dir, "distribution.xosc", xml);

        match classify(&path).unwrap() {
            PreParse::IsParameterDistribution { referenced_file } => {
                assert_eq!(referenced_file, Some(dir.path().join("base_scenario.xosc")));
            }
            other => panic!("expected IsParameterDistribution, got {other:?}"),
        }
    }

    #[test]
    fn classifies_file_with_no_storyboard() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<?xml version="1.0"?>
        <OpenSCENARIO>
            <FileHeader author="a" date="2024-01-01T00:00:00" description="d" revMajor="1" revMinor="3"/>
            <Entities/>
        </OpenSCENARIO>"#;
        let path = write_file(&dir, "partial.xosc", xml);

        assert_eq!(classify(&path).unwrap(), PreParse::NoStoryboard);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = classify(Path::new("/no/such/file.xosc")).unwrap_err();
        let _ = err;
    }
}
