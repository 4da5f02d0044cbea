//! The top-level per-file conversion pipeline (C11).

use crate::commonroad::opendrive::{OpendriveConversionError, OpendriveConverter};
use crate::commonroad::types::{
    DynamicObstacle, ObstacleIdGenerator, ObstacleType, PlanningProblem, Scenario, ScenarioMetadata,
    ShapeLaneletAssignment,
};
use crate::config::ConverterParams;
use crate::convert::analyzer::{run_with_timeout, Analyzer, AnalyzerOutcome};
use crate::convert::ego_selector::select_ego;
use crate::convert::lanelet_assigner::assign_obstacles;
use crate::convert::map_builder::{build_scenario_shell, resolve_xodr_path};
use crate::convert::obstacle_builder::build_obstacle;
use crate::convert::planning_problem::build_planning_problem;
use crate::convert::trimmer::trim_scenario;
use crate::sim::bridge::{simulate_scenario, EndingCause, SimDylib};
use crate::xosc_preparse::{classify, resolve_actors, PreParse};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The seven fatal reasons a file conversion cannot proceed (§7). Each
/// carries enough context to log without re-reading the source file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionFailure {
    #[error("{0}: not a readable file")]
    ScenarioFileInvalidPath(String),
    #[error("{0}: is a catalog file, not a scenario")]
    ScenarioFileIsCatalog(String),
    #[error("{0}: is a parameter value distribution, not a scenario")]
    ScenarioFileIsParameterValueDistribution(String),
    #[error("{0}: has no Storyboard")]
    ScenarioFileContainsNoStoryboard(String),
    #[error("{0}: simulation did not produce usable output")]
    SimulationFailedCreatingOutput(String),
    #[error("{0}: no dynamic behavior was observed (zero actors)")]
    NoDynamicBehaviorFound(String),
}

/// Per-run counters mirrored from the Python original's `ConversionStatistics`.
#[derive(Debug, Clone, Default)]
pub struct ConversionStatistics {
    pub simulation_time: f64,
    pub wall_clock_duration: Duration,
    pub ego_obstacle_id: i64,
    pub obstacle_count_by_type: HashMap<ObstacleType, usize>,
    pub lanelet_count_before_trim: usize,
    pub lanelet_count_after_trim: usize,
}

/// The full, successful result of converting one file.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub scenario: Scenario,
    pub planning_problem: PlanningProblem,
    pub statistics: ConversionStatistics,
    pub xodr_error: Option<OpendriveConversionError>,
    pub catalog_resolution_error: Option<String>,
    pub analyzer_results: HashMap<String, HashMap<String, AnalyzerOutcome>>,
}

/// Run the full pipeline (§4.10) for one `.xosc` file.
pub fn run_conversion(
    path: &Path,
    params: &ConverterParams,
    dylib: &mut dyn SimDylib,
    opendrive_converter: &dyn OpendriveConverter,
    analyzers: &[(Arc<dyn Analyzer>, Duration)],
) -> Result<ConversionOutcome, ConversionFailure> {
    let started_at = Instant::now();
    let display_path = path.display().to_string();

    // Step 1: pre-parse.
    let preparse = classify(path).map_err(|_| ConversionFailure::ScenarioFileInvalidPath(display_path.clone()))?;
    let implicit_xodr_path = match preparse {
        PreParse::IsCatalog => return Err(ConversionFailure::ScenarioFileIsCatalog(display_path)),
        PreParse::IsParameterDistribution { .. } => {
            return Err(ConversionFailure::ScenarioFileIsParameterValueDistribution(display_path))
        }
        PreParse::NoStoryboard => return Err(ConversionFailure::ScenarioFileContainsNoStoryboard(display_path)),
        PreParse::Scenario { implicit_xodr_path } => implicit_xodr_path,
    };

    // Step 2: scenario shell, capturing an XODR failure non-fatally.
    let xodr_path = resolve_xodr_path(implicit_xodr_path.as_deref(), params.xodr_path_override.as_deref());
    let metadata = ScenarioMetadata {
        author: params.author.clone(),
        affiliation: params.affiliation.clone(),
        source: params.source.clone(),
        tags: params.tags.clone(),
    };
    let map_result = build_scenario_shell(xodr_path.as_deref(), params.dt_cr, metadata, opendrive_converter);
    let mut scenario = map_result.scenario;
    let lanelet_count_before_trim = scenario.lanelet_network.lanelets.len();

    // Step 3: simulate.
    let sim_result = simulate_scenario(dylib, path, &params.esmini);
    if matches!(sim_result.ending_cause, EndingCause::Failure) {
        return Err(ConversionFailure::SimulationFailedCreatingOutput(
            path.display().to_string(),
        ));
    }
    if sim_result.actors.is_empty() {
        return Err(ConversionFailure::NoDynamicBehaviorFound(path.display().to_string()));
    }

    // Step 4: resolve actor catalogs (non-fatal).
    let actor_names: Vec<String> = sim_result.actors.keys().cloned().collect();
    let (extra_info, catalog_resolution_error) = match resolve_actors(path, &actor_names) {
        Ok(map) => (map, None),
        Err(e) => (
            actor_names.iter().map(|name| (name.clone(), None)).collect(),
            Some(e.to_string()),
        ),
    };

    // Step 5: pick ego.
    let ego_filter: Option<Regex> = params
        .ego_filter
        .as_deref()
        .and_then(|pattern| Regex::new(pattern).ok());
    let name_refs: Vec<&str> = actor_names.iter().map(String::as_str).collect();
    let (ego_name, _matched) = select_ego(&name_refs, ego_filter.as_ref())
        .ok_or_else(|| ConversionFailure::NoDynamicBehaviorFound(path.display().to_string()))?;
    let ego_name = ego_name.to_string();

    // Step 6: build obstacles, ego first then remaining in lexicographic order.
    let mut ordered_names: Vec<String> = actor_names.iter().filter(|n| **n != ego_name).cloned().collect();
    ordered_names.sort_unstable();
    ordered_names.insert(0, ego_name.clone());

    let mut id_generator = ObstacleIdGenerator::new();
    let mut built: HashMap<String, Option<DynamicObstacle>> = HashMap::new();
    for name in &ordered_names {
        let series = sim_result.actors.get(name);
        let obstacle = match series {
            Some(series) => build_obstacle(series, params.dt_cr, &mut id_generator)
                .map_err(|_| ConversionFailure::SimulationFailedCreatingOutput(path.display().to_string()))?,
            None => None,
        };
        built.insert(name.clone(), obstacle);
    }

    let ego_obstacle = built
        .get(&ego_name)
        .cloned()
        .flatten()
        .ok_or_else(|| ConversionFailure::NoDynamicBehaviorFound(path.display().to_string()))?;

    // Step 7: add obstacles, respecting `keep_ego_vehicle`.
    let mut obstacle_count_by_type: HashMap<ObstacleType, usize> = HashMap::new();
    for (name, obstacle) in &built {
        let Some(obstacle) = obstacle else { continue };
        let is_ego = *name == ego_name;
        if is_ego && !params.keep_ego_vehicle {
            continue;
        }
        *obstacle_count_by_type.entry(obstacle.obstacle_type).or_insert(0) += 1;
        scenario.add_obstacle(obstacle.clone());
    }

    // Step 8: assign obstacles to lanelets.
    let assignment = if scenario.lanelet_network.is_empty() {
        ShapeLaneletAssignment::new()
    } else {
        assign_obstacles(&scenario.lanelet_network, &scenario.obstacles)
    };

    // Step 9: trim, if configured.
    if params.trim_scenario && !scenario.lanelet_network.is_empty() {
        scenario = trim_scenario(&scenario, &assignment);
    }
    let lanelet_count_after_trim = scenario.lanelet_network.lanelets.len();

    // Step 10: planning problem from ego.
    let planning_problem = build_planning_problem(&ego_obstacle, &params.goal)
        .map_err(|_| ConversionFailure::NoDynamicBehaviorFound(path.display().to_string()))?;

    // Step 11: analyzers, always run against a copy that contains the ego.
    let mut analyzer_results: HashMap<String, HashMap<String, AnalyzerOutcome>> = HashMap::new();
    if !analyzers.is_empty() {
        let mut analysis_scenario = scenario.clone();
        if !params.keep_ego_vehicle
            && !analysis_scenario.obstacles.iter().any(|o| o.obstacle_id == ego_obstacle.obstacle_id)
        {
            analysis_scenario.add_obstacle(ego_obstacle.clone());
        }
        for (analyzer, timeout) in analyzers {
            let result = run_with_timeout(
                Arc::clone(analyzer),
                analysis_scenario.clone(),
                built.clone(),
                extra_info.clone(),
                *timeout,
            );
            analyzer_results.insert(analyzer.name().to_string(), result);
        }
    }

    // Step 12: assemble statistics.
    let statistics = ConversionStatistics {
        simulation_time: sim_result.sim_time,
        wall_clock_duration: started_at.elapsed(),
        ego_obstacle_id: ego_obstacle.obstacle_id,
        obstacle_count_by_type,
        lanelet_count_before_trim,
        lanelet_count_after_trim,
    };

    Ok(ConversionOutcome {
        scenario,
        planning_problem,
        statistics,
        xodr_error: map_result.xodr_error,
        catalog_resolution_error,
        analyzer_results,
    })
}
