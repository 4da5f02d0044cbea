//! CommonRoad scenario data model: lanelet network, dynamic obstacles,
//! trajectories, and planning problems.
//!
//! These types model the `commonroad-io` XML file format (the external I/O
//! library itself is out of scope; this module is a plain serde/quick-xml
//! rendering of its on-disk schema, the same way the teacher's `types`
//! module renders the OpenSCENARIO schema).

use serde::{Deserialize, Serialize};

/// A 2-D planar shape attached to an obstacle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

impl Shape {
    /// Rectangle for vehicles/misc obstacles, circle (over-approximating
    /// the bounding box) for pedestrians.
    pub fn for_obstacle(obstacle_type: ObstacleType, length: f64, width: f64) -> Self {
        match obstacle_type {
            ObstacleType::Pedestrian => Shape::Circle {
                radius: length.max(width) / 2.0,
            },
            _ => Shape::Rectangle { length, width },
        }
    }
}

/// Obstacle category, derived from the simulator's (objectType,
/// objectCategory) pair per the fixed mapping table in §4.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObstacleType {
    Car,
    Truck,
    Bus,
    Motorcycle,
    Bicycle,
    Train,
    Pedestrian,
    Pillar,
    Building,
    MedianStrip,
    Unknown,
}

/// A discrete-time obstacle/ego state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub time_step: i64,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub orientation: f64,
    pub pitch_angle: f64,
    pub roll_angle: f64,
    pub velocity: f64,
    pub acceleration: Option<f64>,
    pub yaw_rate: Option<f64>,
    pub pitch_rate: Option<f64>,
    pub roll_rate: Option<f64>,
    pub steering_angle: Option<f64>,
    pub slip_angle: Option<f64>,
}

/// Ordered discrete-time states on the uniform grid, covering
/// `[first_time_step, last_time_step]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub initial_time_step: i64,
    pub final_time_step: i64,
    pub state_list: Vec<State>,
}

impl Trajectory {
    pub fn is_consecutive(&self) -> bool {
        self.state_list
            .windows(2)
            .all(|w| w[1].time_step == w[0].time_step + 1)
    }
}

/// A single dynamic obstacle: identity, geometry, and its trajectory
/// prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicObstacle {
    pub obstacle_id: i64,
    pub obstacle_type: ObstacleType,
    pub shape: Shape,
    pub initial_state: State,
    pub trajectory: Trajectory,
}

impl DynamicObstacle {
    pub fn first_time_step(&self) -> i64 {
        self.trajectory.initial_time_step
    }

    pub fn last_time_step(&self) -> i64 {
        self.trajectory.final_time_step
    }

    /// Invariant: `initial_state == trajectory.state_list[0]`.
    pub fn initial_state_matches_trajectory(&self) -> bool {
        self.trajectory
            .state_list
            .first()
            .map(|s| s == &self.initial_state)
            .unwrap_or(false)
    }
}

/// An atomic directed road segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lanelet {
    pub lanelet_id: i64,
    pub left_bound: Vec<(f64, f64)>,
    pub right_bound: Vec<(f64, f64)>,
    pub predecessor: Vec<i64>,
    pub successor: Vec<i64>,
}

/// The static road network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneletNetwork {
    pub lanelets: Vec<Lanelet>,
}

impl LaneletNetwork {
    pub fn is_empty(&self) -> bool {
        self.lanelets.is_empty()
    }

    pub fn lanelet_ids(&self) -> std::collections::HashSet<i64> {
        self.lanelets.iter().map(|l| l.lanelet_id).collect()
    }
}

/// Maps, for each obstacle id, the set of lanelet ids its shape overlapped
/// at each of its time steps. A stand-in for the assignment the real
/// `commonroad-io` library computes from obstacle geometry against the
/// lanelet polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeLaneletAssignment {
    pub by_obstacle: std::collections::HashMap<i64, std::collections::HashMap<i64, Vec<i64>>>,
}

impl ShapeLaneletAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, obstacle_id: i64, time_step: i64, lanelet_ids: Vec<i64>) {
        self.by_obstacle
            .entry(obstacle_id)
            .or_default()
            .insert(time_step, lanelet_ids);
    }

    /// Union of every lanelet id referenced by any obstacle at any time
    /// step.
    pub fn used_lanelet_ids(&self) -> std::collections::HashSet<i64> {
        self.by_obstacle
            .values()
            .flat_map(|per_step| per_step.values())
            .flatten()
            .copied()
            .collect()
    }

    pub fn has_assignment_for(&self, obstacle_id: i64, first_step: i64, last_step: i64) -> bool {
        match self.by_obstacle.get(&obstacle_id) {
            Some(per_step) => (first_step..=last_step).all(|t| per_step.contains_key(&t)),
            None => false,
        }
    }
}

/// Rectangular goal position region with centre, dimensions and
/// orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPositionRegion {
    pub center_x: f64,
    pub center_y: f64,
    pub length: f64,
    pub width: f64,
    pub orientation: f64,
}

/// The (single) goal state of a planning problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalState {
    pub time_step_interval: (i64, i64),
    pub position: GoalPositionRegion,
    pub velocity_interval: Option<(f64, f64)>,
    pub orientation_interval: Option<(f64, f64)>,
}

/// A planning problem synthesised from the ego's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningProblem {
    pub planning_problem_id: i64,
    pub initial_state: State,
    pub goal: GoalState,
}

/// Scenario metadata (author/affiliation/source/tags) written to the file
/// header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetadata {
    pub author: String,
    pub affiliation: String,
    pub source: String,
    pub tags: Vec<String>,
}

/// The complete converted scenario: time step, lanelet network, and
/// dynamic obstacles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub dt: f64,
    pub lanelet_network: LaneletNetwork,
    pub obstacles: Vec<DynamicObstacle>,
    pub metadata: ScenarioMetadata,
}

impl Scenario {
    pub fn new(dt: f64, metadata: ScenarioMetadata) -> Self {
        Self {
            dt,
            lanelet_network: LaneletNetwork::default(),
            obstacles: Vec::new(),
            metadata,
        }
    }

    pub fn add_obstacle(&mut self, obstacle: DynamicObstacle) {
        self.obstacles.push(obstacle);
    }

    /// All obstacle ids are distinct.
    pub fn obstacle_ids_are_distinct(&self) -> bool {
        let ids: std::collections::HashSet<_> = self.obstacles.iter().map(|o| o.obstacle_id).collect();
        ids.len() == self.obstacles.len()
    }

    pub fn min_obstacle_id(&self) -> Option<i64> {
        self.obstacles.iter().map(|o| o.obstacle_id).min()
    }

    /// Merge `other`'s lanelet network and obstacles into `self`. Lanelets
    /// already present by id are left untouched (`self`'s copy wins);
    /// obstacles whose id collides with one already in `self` are
    /// renumbered via `id_generator` so every id stays unique. The Python
    /// original's `_merge_single` is declared but never implemented
    /// (`raise NotImplementedError`); this is this crate's own completion
    /// of it, not a transcription.
    pub fn merge_scenario(&mut self, other: &Scenario, id_generator: &mut ObstacleIdGenerator) {
        let existing_lanelet_ids: std::collections::HashSet<i64> =
            self.lanelet_network.lanelets.iter().map(|l| l.lanelet_id).collect();
        for lanelet in &other.lanelet_network.lanelets {
            if !existing_lanelet_ids.contains(&lanelet.lanelet_id) {
                self.lanelet_network.lanelets.push(lanelet.clone());
            }
        }

        let mut existing_obstacle_ids: std::collections::HashSet<i64> =
            self.obstacles.iter().map(|o| o.obstacle_id).collect();
        for obstacle in &other.obstacles {
            let mut obstacle = obstacle.clone();
            if existing_obstacle_ids.contains(&obstacle.obstacle_id) {
                obstacle.obstacle_id = id_generator.next_id();
            }
            existing_obstacle_ids.insert(obstacle.obstacle_id);
            id_generator.advance_past(obstacle.obstacle_id);
            self.obstacles.push(obstacle);
        }
    }
}

/// Monotone per-scenario obstacle id generator. The ego always receives the
/// first id drawn because `ConversionCoordinator` builds obstacles ego
/// first (§4.10 step 6).
#[derive(Debug, Default)]
pub struct ObstacleIdGenerator {
    next: i64,
}

impl ObstacleIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Ensure the next id drawn is strictly greater than `max_seen_id`,
    /// needed after merging in obstacles whose ids bypassed this generator.
    pub fn advance_past(&mut self, max_seen_id: i64) {
        if self.next <= max_seen_id {
            self.next = max_seen_id + 1;
        }
    }
}
