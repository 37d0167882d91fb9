//! Default value functions for serde deserialization.

pub fn occupied_threshold() -> i8 {
    30
}

pub fn unknown_value() -> i8 {
    -1
}

/// No expansion limit.
pub fn max_expansions() -> usize {
    usize::MAX
}

pub fn enabled() -> bool {
    true
}

pub fn min_cluster_size() -> usize {
    1
}

pub fn min_goal_distance() -> f32 {
    1e-3
}
