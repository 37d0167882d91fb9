//! 2D pose type for robot position and orientation.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Normalize an angle to [-π, π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Robot pose in the world frame, as supplied by the localization layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians [-π, π), CCW positive from X-axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose (theta is normalized).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Get the position as a WorldPoint.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}
