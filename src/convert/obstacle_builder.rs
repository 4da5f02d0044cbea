//! Grid alignment, coordinate transform, and CommonRoad obstacle
//! construction from one actor's raw state series (C7).

use crate::commonroad::types::{DynamicObstacle, ObstacleIdGenerator, ObstacleType, Shape, State, Trajectory};
use crate::sim::raw_state::{ObjectKind, StateSeries};
use crate::sim::resample::{resample, ResampledState};

/// Epsilon subtracted before rounding to the grid, resolving Open Question
/// (a) floor-biased: a tick that overshoots a grid point by less than this
/// still floors to that point rather than the next one.
const GRID_EPSILON: f64 = 1e-9;

/// Nearest grid index for `t` on a grid of spacing `dt_cr`, floor-biased by
/// `GRID_EPSILON / dt_cr`.
pub fn round_to_grid(t: f64, dt_cr: f64) -> i64 {
    (t / dt_cr - GRID_EPSILON / dt_cr).round() as i64
}

/// The subset of the uniform grid `{k * dt_cr}` spanned by one series:
/// `first_step`/`last_step` come only from the series's own extent (Open
/// Question (b): no padding of short series).
pub fn grid_span(series: &StateSeries, dt_cr: f64) -> Option<(i64, i64)> {
    let t_first_raw = series.first_timestamp()?;
    let t_last_raw = series.last_timestamp()?;
    Some((round_to_grid(t_first_raw, dt_cr), round_to_grid(t_last_raw, dt_cr)))
}

/// `(objectType, objectCategory) -> ObstacleType`, the fixed esmini-derived
/// mapping table from §4.6. Any combination outside the table maps to
/// `Unknown`.
pub fn obstacle_type_for(kind: ObjectKind, category: i32) -> ObstacleType {
    match kind {
        ObjectKind::None | ObjectKind::Other => ObstacleType::Unknown,
        ObjectKind::Vehicle => match category {
            0 | 1 => ObstacleType::Car,
            2 | 3 | 4 => ObstacleType::Truck,
            5 => ObstacleType::Bus,
            6 => ObstacleType::Motorcycle,
            7 => ObstacleType::Bicycle,
            8 | 9 => ObstacleType::Train,
            _ => ObstacleType::Unknown,
        },
        ObjectKind::Pedestrian => ObstacleType::Pedestrian,
        ObjectKind::Misc => match category {
            2 | 3 | 12 => ObstacleType::Pillar,
            5 | 6 | 9 | 13 | 14 => ObstacleType::Building,
            10 => ObstacleType::MedianStrip,
            _ => ObstacleType::Unknown,
        },
    }
}

/// World-frame position of the geometric centre, transforming the
/// reported vehicle-origin position through the (yaw, pitch, roll)
/// rotation and the reported centre offset.
pub fn transform_position(state: &ResampledState) -> (f64, f64, f64) {
    let (ch, sh) = (state.h.cos(), state.h.sin());
    let (cp, sp) = (state.p.cos(), state.p.sin());
    let (cr, sr) = (state.r.cos(), state.r.sin());

    let row0 = (ch * cp, ch * sp * sr - sh * cr, ch * sp * cr + sh * sr);
    let row1 = (sh * cp, sh * sp * sr + ch * cr, sh * sp * cr - ch * sr);
    let row2 = (-sp, cp * sr, cp * cr);

    let (ox, oy, oz) = (state.center_offset_x, state.center_offset_y, state.center_offset_z);
    let dx = row0.0 * ox + row0.1 * oy + row0.2 * oz;
    let dy = row1.0 * ox + row1.1 * oy + row1.2 * oz;
    let dz = row2.0 * ox + row2.1 * oy + row2.2 * oz;

    (state.x + dx, state.y + dy, state.z + dz)
}

fn resampled_to_cr_state(state: &ResampledState, time_step: i64) -> State {
    let (px, py, pz) = transform_position(state);
    State {
        time_step,
        position_x: px,
        position_y: py,
        position_z: pz,
        orientation: state.h,
        pitch_angle: state.p,
        roll_angle: state.r,
        velocity: state.speed,
        acceleration: state.has_rates.then_some(state.acceleration),
        yaw_rate: state.has_rates.then_some(state.yaw_rate),
        pitch_rate: state.has_rates.then_some(state.pitch_rate),
        roll_rate: state.has_rates.then_some(state.roll_rate),
        steering_angle: state.wheel_angle,
        slip_angle: None,
    }
}

/// Build a `DynamicObstacle` for one actor's full series, sampling it onto
/// the portion of the uniform grid it actually spans.
pub fn build_obstacle(
    series: &StateSeries,
    dt_cr: f64,
    id_generator: &mut ObstacleIdGenerator,
) -> crate::Result<Option<DynamicObstacle>> {
    let Some((first_step, last_step)) = grid_span(series, dt_cr) else {
        return Ok(None);
    };

    let targets: Vec<f64> = (first_step..=last_step).map(|k| k as f64 * dt_cr).collect();
    let resampled = resample(series, &targets)?;

    let state_list: Vec<State> = resampled
        .iter()
        .zip(first_step..=last_step)
        .map(|(s, step)| resampled_to_cr_state(s, step))
        .collect();

    let first = &series.states[0];
    let shape = Shape::for_obstacle(obstacle_type_for(first.object_type, first.object_category), first.length, first.width);

    let trajectory = Trajectory {
        initial_time_step: first_step,
        final_time_step: last_step,
        state_list,
    };
    let initial_state = trajectory.state_list[0].clone();

    Ok(Some(DynamicObstacle {
        obstacle_id: id_generator.next_id(),
        obstacle_type: obstacle_type_for(first.object_type, first.object_category),
        shape,
        initial_state,
        trajectory,
    }))
}
