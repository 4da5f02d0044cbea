//! `StateBuffer::push` and grid resampling of raw simulator states.

use crate::sim::raw_state::{ObjectKind, RawState, StateSeries};

/// Timestamp-equality tolerance used by `push`, scaled to the simulation
/// step so two snapshots from the same tick are treated as one.
fn push_tolerance(dt_sim: f64) -> f64 {
    (dt_sim.abs() * f64::EPSILON).max(f64::EPSILON)
}

/// Tolerance below which an interpolation interval is considered
/// degenerate and rates default to 0 rather than divide.
const RATE_EPSILON: f64 = 1e-9;

/// Append-only per-object state accumulator applying the equal-timestamp
/// replace rule (a simulator sub-step update overwrites the prior entry).
#[derive(Debug, Default)]
pub struct StateBuffer {
    pub series: StateSeries,
}

impl StateBuffer {
    pub fn new() -> Self {
        Self {
            series: StateSeries::new(),
        }
    }

    /// Push a raw state, replacing the last entry if its timestamp is
    /// numerically indistinguishable from `state.timestamp` at the given
    /// simulation step.
    pub fn push(&mut self, state: RawState, dt_sim: f64) {
        let tolerance = push_tolerance(dt_sim);
        if let Some(last) = self.series.states.last_mut() {
            if (state.timestamp - last.timestamp).abs() <= tolerance {
                *last = state;
                return;
            }
        }
        self.series.states.push(state);
    }
}

/// A state resampled onto an arbitrary target timestamp, derived from the
/// two RawStates that straddle it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledState {
    pub timestamp: f64,
    pub id: i32,
    pub object_type: ObjectKind,
    pub object_category: i32,

    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub h: f64,
    pub p: f64,
    pub r: f64,

    pub speed: f64,

    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub center_offset_z: f64,

    pub road_id: i32,
    pub junction_id: i32,
    pub s: f64,
    pub t: f64,
    pub lane_id: i32,
    pub lane_offset: f64,

    pub length: f64,
    pub width: f64,
    pub height: f64,

    pub wheel_angle: Option<f64>,

    pub acceleration: f64,
    pub yaw_rate: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,

    /// True when this state came from a series of length >= 2, i.e. rates
    /// were actually differentiated rather than defaulted to 0.
    pub has_rates: bool,
}

/// Pairing of two RawStates that straddle a resampling target, with
/// `s0.timestamp <= s1.timestamp`.
fn find_bracket(series: &StateSeries, target: f64) -> (&RawState, &RawState) {
    let states = &series.states;
    debug_assert!(!states.is_empty(), "cannot resample an empty series");

    if states.len() == 1 {
        return (&states[0], &states[0]);
    }

    if target <= states[0].timestamp {
        return (&states[0], &states[1]);
    }
    if target >= states[states.len() - 1].timestamp {
        return (&states[states.len() - 2], &states[states.len() - 1]);
    }

    let mut idx = 0;
    for (i, w) in states.windows(2).enumerate() {
        if w[0].timestamp <= target && target <= w[1].timestamp {
            idx = i;
            break;
        }
    }
    (&states[idx], &states[idx + 1])
}

fn lerp(a: f64, b: f64, w: f64) -> f64 {
    a + (b - a) * w
}

/// Resample one raw series at each of `targets`, matching the field rules
/// from the interpolation contract: pose/dimensions/offsets linearly
/// interpolated, discrete labels (control, road/junction/lane id) taken
/// from `s0`, and rates numerically differentiated.
pub fn resample(series: &StateSeries, targets: &[f64]) -> crate::Result<Vec<ResampledState>> {
    if series.is_empty() {
        return Err(crate::Error::validation_error(
            "series",
            "cannot resample an empty state series",
        ));
    }

    targets
        .iter()
        .map(|&t| resample_one(series, t))
        .collect()
}

fn resample_one(series: &StateSeries, target: f64) -> crate::Result<ResampledState> {
    let (s0, s1) = find_bracket(series, target);

    if s0.id != s1.id || s0.object_type != s1.object_type || s0.object_category != s1.object_category
    {
        return Err(crate::Error::invalid_value(
            "series",
            "id/type changed mid-series",
            "id, object_type and object_category must stay constant over a series",
        ));
    }

    let dt = s1.timestamp - s0.timestamp;
    let degenerate = dt.abs() < RATE_EPSILON;
    let w = if degenerate { 0.0 } else { (target - s0.timestamp) / dt };

    let (acceleration, yaw_rate, pitch_rate, roll_rate) = if degenerate {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (
            (s1.speed - s0.speed) / dt,
            (s1.h - s0.h) / dt,
            (s1.p - s0.p) / dt,
            (s1.r - s0.r) / dt,
        )
    };

    Ok(ResampledState {
        timestamp: target,
        id: s0.id,
        object_type: s0.object_type,
        object_category: s0.object_category,
        x: lerp(s0.x, s1.x, w),
        y: lerp(s0.y, s1.y, w),
        z: lerp(s0.z, s1.z, w),
        h: lerp(s0.h, s1.h, w),
        p: lerp(s0.p, s1.p, w),
        r: lerp(s0.r, s1.r, w),
        speed: lerp(s0.speed, s1.speed, w),
        center_offset_x: lerp(s0.center_offset_x, s1.center_offset_x, w),
        center_offset_y: lerp(s0.center_offset_y, s1.center_offset_y, w),
        center_offset_z: lerp(s0.center_offset_z, s1.center_offset_z, w),
        road_id: s0.road_id,
        junction_id: s0.junction_id,
        s: lerp(s0.s, s1.s, w),
        t: lerp(s0.t, s1.t, w),
        lane_id: s0.lane_id,
        lane_offset: lerp(s0.lane_offset, s1.lane_offset, w),
        length: lerp(s0.length, s1.length, w),
        width: lerp(s0.width, s1.width, w),
        height: lerp(s0.height, s1.height, w),
        wheel_angle: match (s0.wheel_angle, s1.wheel_angle) {
            (Some(a), Some(b)) => Some(lerp(a, b, w)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        },
        acceleration,
        yaw_rate,
        pitch_rate,
        roll_rate,
        has_rates: series.len() >= 2,
    })
}

/// Slip angle, needed only by downstream analyses: 0 when speed is ~0,
/// else the average of the x- and y-derived estimates.
pub fn slip_angle(state: &ResampledState, dx_dt: f64, dy_dt: f64) -> f64 {
    if state.speed.abs() < 1e-6 {
        return 0.0;
    }
    let from_x = (dx_dt / state.speed).clamp(-1.0, 1.0).acos() - state.h;
    let from_y = (dy_dt / state.speed).clamp(-1.0, 1.0).asin() - state.h;
    (from_x + from_y) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(timestamp: f64, x: f64) -> RawState {
        RawState {
            timestamp,
            id: 1,
            model_id: 0,
            object_type: ObjectKind::Vehicle,
            object_category: 0,
            x,
            y: 0.0,
            z: 0.0,
            h: 0.0,
            p: 0.0,
            r: 0.0,
            speed: x,
            center_offset_x: 0.0,
            center_offset_y: 0.0,
            center_offset_z: 0.0,
            road_id: 1,
            junction_id: -1,
            s: 0.0,
            t: 0.0,
            lane_id: 0,
            lane_offset: 0.0,
            length: 4.5,
            width: 1.8,
            height: 1.5,
            wheel_angle: None,
            wheel_rotation: None,
        }
    }

    #[test]
    fn push_replaces_equal_timestamp() {
        let mut buf = StateBuffer::new();
        buf.push(state(0.0, 0.0), 0.01);
        buf.push(state(0.0, 5.0), 0.01);
        assert_eq!(buf.series.len(), 1);
        assert_eq!(buf.series.states[0].x, 5.0);
    }

    #[test]
    fn push_appends_distinct_timestamps() {
        let mut buf = StateBuffer::new();
        buf.push(state(0.0, 0.0), 0.01);
        buf.push(state(0.01, 1.0), 0.01);
        assert_eq!(buf.series.len(), 2);
    }

    #[test]
    fn single_state_series_has_zero_rates() {
        let series = StateSeries {
            states: vec![state(1.0, 3.0)],
        };
        let out = resample(&series, &[1.0]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].acceleration, 0.0);
        assert_eq!(out[0].yaw_rate, 0.0);
        assert!(!out[0].has_rates);
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let series = StateSeries {
            states: vec![state(0.0, 0.0), state(1.0, 10.0)],
        };
        let out = resample(&series, &[0.5]).unwrap();
        assert_eq!(out[0].x, 5.0);
        assert!(out[0].has_rates);
    }

    #[test]
    fn grid_aligned_points_reproduce_original_states() {
        let series = StateSeries {
            states: vec![state(0.0, 0.0), state(0.1, 1.0), state(0.2, 2.0)],
        };
        let out = resample(&series, &[0.0, 0.1, 0.2]).unwrap();
        assert_eq!(out[0].x, 0.0);
        assert_eq!(out[1].x, 1.0);
        assert_eq!(out[2].x, 2.0);
    }

    #[test]
    fn mismatched_ids_fail_with_interpolation_domain_error() {
        let mut second = state(1.0, 10.0);
        second.id = 2;
        let series = StateSeries {
            states: vec![state(0.0, 0.0), second],
        };
        assert!(resample(&series, &[0.5]).is_err());
    }
}
