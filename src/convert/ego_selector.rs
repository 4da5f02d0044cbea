//! Ego actor selection (C8).

use regex::Regex;

/// Pick the ego actor name: the lexicographically smallest name matching
/// `ego_filter` if one is given and matches anything, else the
/// lexicographically smallest of all names. Putting the ego first in
/// lexicographic order guarantees it receives the lowest obstacle id.
pub fn select_ego<'a>(actor_names: &[&'a str], ego_filter: Option<&Regex>) -> Option<(&'a str, bool)> {
    if let Some(filter) = ego_filter {
        let mut matching: Vec<&str> = actor_names.iter().copied().filter(|name| filter.is_match(name)).collect();
        matching.sort_unstable();
        if let Some(name) = matching.into_iter().next() {
            return Some((name, true));
        }
    }

    let mut all: Vec<&str> = actor_names.to_vec();
    all.sort_unstable();
    all.into_iter().next().map(|name| (name, false))
}
