//! Lanelet network trimming to the subset actually used by obstacles (C10).

use crate::commonroad::types::{Scenario, ShapeLaneletAssignment};

/// Remove every lanelet not referenced by `assignment` from `scenario`'s
/// lanelet network. A no-op (and idempotent) when the network is already
/// empty or already contains only used lanelets.
pub fn trim_scenario(scenario: &Scenario, assignment: &ShapeLaneletAssignment) -> Scenario {
    if scenario.lanelet_network.is_empty() {
        return scenario.clone();
    }

    let used_ids = assignment.used_lanelet_ids();

    let mut trimmed = scenario.clone();
    trimmed.lanelet_network.lanelets.retain(|lanelet| used_ids.contains(&lanelet.lanelet_id));
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commonroad::types::{Lanelet, LaneletNetwork, ScenarioMetadata};

    fn scenario_with_lanelets(ids: &[i64]) -> Scenario {
        let mut scenario = Scenario::new(0.1, ScenarioMetadata::default());
        scenario.lanelet_network = LaneletNetwork {
            lanelets: ids
                .iter()
                .map(|&id| Lanelet {
                    lanelet_id: id,
                    left_bound: vec![],
                    right_bound: vec![],
                    predecessor: vec![],
                    successor: vec![],
                })
                .collect(),
        };
        scenario
    }

    #[test]
    fn removes_unused_lanelets() {
        let scenario = scenario_with_lanelets(&[1, 2, 3]);
        let mut assignment = ShapeLaneletAssignment::new();
        assignment.assign(10, 0, vec![2]);

        let trimmed = trim_scenario(&scenario, &assignment);
        assert_eq!(trimmed.lanelet_network.lanelet_ids(), [2].into_iter().collect());
    }

    #[test]
    fn empty_network_is_left_untouched() {
        let scenario = Scenario::new(0.1, ScenarioMetadata::default());
        let assignment = ShapeLaneletAssignment::new();
        let trimmed = trim_scenario(&scenario, &assignment);
        assert!(trimmed.lanelet_network.is_empty());
    }

    #[test]
    fn trimming_is_idempotent() {
        let scenario = scenario_with_lanelets(&[1, 2, 3]);
        let mut assignment = ShapeLaneletAssignment::new();
        assignment.assign(10, 0, vec![2, 3]);

        let once = trim_scenario(&scenario, &assignment);
        let twice = trim_scenario(&once, &assignment);
        assert_eq!(once, twice);
    }
}
