//! Storyboard completion tracking (C2).
//!
//! The simulator reports state transitions for storyboard elements through a
//! single callback; the monitor keeps the last-known state per (name,
//! level) pair and answers "is everything above `ignored_level` complete?".

use std::collections::HashMap;

/// Hierarchy level of a storyboard element, ordered coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i32)]
pub enum StoryboardLevel {
    Story = 0,
    Act = 1,
    ManeuverGroup = 2,
    Maneuver = 3,
    Event = 4,
    Action = 5,
}

impl StoryboardLevel {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Story),
            1 => Some(Self::Act),
            2 => Some(Self::ManeuverGroup),
            3 => Some(Self::Maneuver),
            4 => Some(Self::Event),
            5 => Some(Self::Action),
            _ => None,
        }
    }
}

/// Runtime state of a storyboard element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryboardState {
    Standby,
    Running,
    Complete,
}

impl StoryboardState {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Standby),
            1 => Some(Self::Running),
            2 => Some(Self::Complete),
            _ => None,
        }
    }
}

/// Tracks the last-reported state of every storyboard element observed via
/// the simulator's callback, keyed by (name, level) with last-writer-wins.
#[derive(Debug, Default)]
pub struct StoryboardMonitor {
    states: HashMap<(String, i32), StoryboardState>,
    ignored_level: i32,
}

impl StoryboardMonitor {
    /// `ignored_level`: elements at or below this level are excluded from
    /// the completeness check.
    pub fn new(ignored_level: i32) -> Self {
        Self {
            states: HashMap::new(),
            ignored_level,
        }
    }

    /// Record a callback observation. Unknown levels are stored verbatim
    /// (by raw integer) so an unrecognised level still participates once it
    /// is queried with a matching raw value via `is_level_tracked`.
    pub fn on_callback(&mut self, name: &str, level: i32, state: i32) {
        if let Some(state) = StoryboardState::from_i32(state) {
            self.states.insert((name.to_string(), level), state);
        }
    }

    /// True once every tracked element whose level is above `ignored_level`
    /// is Complete. An empty monitor (no callbacks observed yet) is not
    /// considered complete.
    pub fn all_complete(&self) -> bool {
        let mut any_tracked = false;
        for ((_, level), state) in &self.states {
            if *level <= self.ignored_level {
                continue;
            }
            any_tracked = true;
            if *state != StoryboardState::Complete {
                return false;
            }
        }
        any_tracked
    }
}
