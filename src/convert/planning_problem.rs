//! Planning problem synthesis from the ego's final trajectory state (C9).

use crate::commonroad::types::{DynamicObstacle, GoalPositionRegion, GoalState, PlanningProblem, Shape};
use crate::config::GoalParams;

/// Wrap an angle into `(-pi, pi]`.
fn wrap_angle(angle: f64) -> f64 {
    let two_pi = std::f64::consts::TAU;
    let mut wrapped = (angle + std::f64::consts::PI) % two_pi;
    if wrapped <= 0.0 {
        wrapped += two_pi;
    }
    wrapped - std::f64::consts::PI
}

fn shape_length_width(shape: &Shape) -> (f64, f64) {
    match shape {
        Shape::Rectangle { length, width } => (*length, *width),
        Shape::Circle { radius } => (radius * 2.0, radius * 2.0),
    }
}

/// Build the planning problem for `ego`: its id is the ego obstacle's id
/// (so it matches regardless of `keep_ego_vehicle`), its initial state is
/// the ego's first trajectory state with `slip_angle` zeroed, and its goal
/// is synthesised from the ego's final trajectory state via `params`.
///
/// `DynamicObstacle`'s invariant guarantees a non-empty trajectory, but the
/// caller owns the scenario's error reporting, so an empty one is
/// propagated rather than panicked on.
pub fn build_planning_problem(ego: &DynamicObstacle, params: &GoalParams) -> crate::Result<PlanningProblem> {
    let final_state = ego.trajectory.state_list.last().ok_or_else(|| {
        crate::Error::constraint_violation("DynamicObstacle.trajectory.state_list must not be empty")
    })?;

    let (length, width) = shape_length_width(&ego.shape);

    let time_step_interval = (
        params.time_interval_start.apply(final_state.time_step),
        params.time_interval_end.apply(final_state.time_step),
    );

    let position = GoalPositionRegion {
        center_x: params.position_center_x.apply(final_state.position_x),
        center_y: params.position_center_y.apply(final_state.position_y),
        length: params.position_length.apply(length),
        width: params.position_width.apply(width),
        orientation: wrap_angle(params.position_rotation.apply(final_state.orientation)),
    };

    let velocity_interval = params
        .velocity_interval
        .map(|(lo, hi)| (lo.apply(final_state.velocity), hi.apply(final_state.velocity)));
    let orientation_interval = params
        .orientation_interval
        .map(|(lo, hi)| (lo.apply(final_state.orientation), hi.apply(final_state.orientation)));

    let mut initial_state = ego
        .trajectory
        .state_list
        .first()
        .cloned()
        .unwrap_or_else(|| ego.initial_state.clone());
    initial_state.slip_angle = Some(0.0);

    Ok(PlanningProblem {
        planning_problem_id: ego.obstacle_id,
        initial_state,
        goal: GoalState {
            time_step_interval,
            position,
            velocity_interval,
            orientation_interval,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commonroad::types::{ObstacleType, State, Trajectory};
    use crate::convert::abs_rel::AbsRel;

    fn sample_state(time_step: i64, x: f64, orientation: f64, velocity: f64) -> State {
        State {
            time_step,
            position_x: x,
            position_y: 0.0,
            position_z: 0.0,
            orientation,
            pitch_angle: 0.0,
            roll_angle: 0.0,
            velocity,
            acceleration: None,
            yaw_rate: None,
            pitch_rate: None,
            roll_rate: None,
            steering_angle: None,
            slip_angle: None,
        }
    }

    fn sample_ego() -> DynamicObstacle {
        let state_list = vec![sample_state(0, 0.0, 0.0, 5.0), sample_state(10, 50.0, 0.1, 8.0)];
        DynamicObstacle {
            obstacle_id: 1,
            obstacle_type: ObstacleType::Car,
            shape: Shape::Rectangle {
                length: 4.5,
                width: 1.8,
            },
            initial_state: state_list[0].clone(),
            trajectory: Trajectory {
                initial_time_step: 0,
                final_time_step: 10,
                state_list,
            },
        }
    }

    #[test]
    fn planning_problem_id_matches_ego_obstacle_id() {
        let ego = sample_ego();
        let problem = build_planning_problem(&ego, &GoalParams::default()).unwrap();
        assert_eq!(problem.planning_problem_id, ego.obstacle_id);
    }

    #[test]
    fn initial_state_has_zeroed_slip_angle() {
        let ego = sample_ego();
        let problem = build_planning_problem(&ego, &GoalParams::default()).unwrap();
        assert_eq!(problem.initial_state.slip_angle, Some(0.0));
        assert_eq!(problem.initial_state.time_step, 0);
    }

    #[test]
    fn default_goal_params_scale_the_shape_by_two() {
        let ego = sample_ego();
        let problem = build_planning_problem(&ego, &GoalParams::default()).unwrap();
        assert_eq!(problem.goal.position.length, 9.0);
        assert_eq!(problem.goal.position.width, 3.6);
    }

    #[test]
    fn time_interval_brackets_the_final_time_step() {
        let ego = sample_ego();
        let params = GoalParams {
            time_interval_start: AbsRel::rel_sub(5),
            time_interval_end: AbsRel::rel_add(20),
            ..GoalParams::default()
        };
        let problem = build_planning_problem(&ego, &params).unwrap();
        assert_eq!(problem.goal.time_step_interval, (5, 30));
    }

    #[test]
    fn orientation_wraps_into_expected_range() {
        let angle = wrap_angle(std::f64::consts::PI * 3.0);
        assert!(angle > -std::f64::consts::PI && angle <= std::f64::consts::PI);
    }
}
