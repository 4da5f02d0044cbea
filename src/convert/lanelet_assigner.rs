//! Shape-to-lanelet assignment: which lanelets each obstacle's position
//! overlaps at each of its time steps.
//!
//! The real `commonroad-io` library computes this from the obstacle's full
//! 2-D shape against the lanelet polygons; here a lanelet's polygon is
//! approximated by the quad strip between consecutive points of its
//! left/right bound, and an obstacle is assigned to a lanelet if its
//! position falls inside any of that lanelet's quads.

use crate::commonroad::types::{DynamicObstacle, Lanelet, LaneletNetwork, ShapeLaneletAssignment};

fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Point-in-quad test for one strip of a lanelet's left/right bound,
/// assuming the quad is convex (true for the small straight/curved strips
/// a lanelet is built from).
fn point_in_quad(p: (f64, f64), quad: [(f64, f64); 4]) -> bool {
    let mut sign = 0.0_f64;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let c = cross(a, b, p);
        if c.abs() < 1e-9 {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }
    true
}

fn lanelet_contains(lanelet: &Lanelet, position: (f64, f64)) -> bool {
    let segments = lanelet.left_bound.len().min(lanelet.right_bound.len());
    if segments < 2 {
        return false;
    }
    for i in 0..segments - 1 {
        let quad = [
            lanelet.left_bound[i],
            lanelet.left_bound[i + 1],
            lanelet.right_bound[i + 1],
            lanelet.right_bound[i],
        ];
        if point_in_quad(position, quad) {
            return true;
        }
    }
    false
}

/// Assign every obstacle's every time step to the lanelets its position
/// overlaps in `network`.
pub fn assign_obstacles(network: &LaneletNetwork, obstacles: &[DynamicObstacle]) -> ShapeLaneletAssignment {
    let mut assignment = ShapeLaneletAssignment::new();
    for obstacle in obstacles {
        for state in &obstacle.trajectory.state_list {
            let position = (state.position_x, state.position_y);
            let ids: Vec<i64> = network
                .lanelets
                .iter()
                .filter(|lanelet| lanelet_contains(lanelet, position))
                .map(|lanelet| lanelet.lanelet_id)
                .collect();
            assignment.assign(obstacle.obstacle_id, state.time_step, ids);
        }
    }
    assignment
}
