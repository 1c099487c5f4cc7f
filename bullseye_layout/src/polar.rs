// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar positions and outboard label anchoring.
//!
//! The layout engine hands out `(angle, radius)` pairs; renderers want scene
//! points and, for the labels ringing the chart, an anchor that keeps text
//! running away from the circle instead of across it.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A polar position: an angle in radians and a radius in scene units.
///
/// Angles follow the mathematical convention: counter-clockwise from the
/// positive x axis, y up. Renderers with y-down coordinates negate the y
/// offset themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarPoint {
    /// Angle in radians.
    pub angle: f64,
    /// Radius in scene units.
    pub radius: f64,
}

impl PolarPoint {
    /// Creates a polar point.
    pub fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    /// Converts to a cartesian point around `center`.
    pub fn to_point(self, center: Point) -> Point {
        Point::new(
            center.x + self.radius * self.angle.cos(),
            center.y + self.radius * self.angle.sin(),
        )
    }
}

/// Horizontal anchoring for a label placed at an angle around the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Anchor the leading edge; text runs rightward, away from the chart.
    Start,
    /// Anchor the trailing edge; text runs leftward, away from the chart.
    End,
}

/// Vertical anchoring for a label placed at an angle around the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelBaseline {
    /// Anchor the bottom edge; text sits above the point.
    Bottom,
    /// Anchor the top edge; text sits below the point.
    Top,
}

/// Picks the horizontal anchor for a label at `angle`.
///
/// Labels on the right half of the chart (`cos > 0`) anchor at their start;
/// everything else anchors at the end.
pub fn label_anchor(angle: f64) -> LabelAnchor {
    if angle.cos() > 0.0 {
        LabelAnchor::Start
    } else {
        LabelAnchor::End
    }
}

/// Picks the vertical anchor for a label at `angle`.
///
/// Labels on the upper half of the chart (`sin > 0`) anchor at their bottom;
/// everything else anchors at the top.
pub fn label_baseline(angle: f64) -> LabelBaseline {
    if angle.sin() > 0.0 {
        LabelBaseline::Bottom
    } else {
        LabelBaseline::Top
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    #[test]
    fn to_point_maps_the_axes() {
        let center = Point::new(50.0, 50.0);

        let east = PolarPoint::new(0.0, 10.0).to_point(center);
        assert!((east.x - 60.0).abs() < 1e-9);
        assert!((east.y - 50.0).abs() < 1e-9);

        let north = PolarPoint::new(FRAC_PI_2, 10.0).to_point(center);
        assert!((north.x - 50.0).abs() < 1e-9);
        assert!((north.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_radius_collapses_to_the_center() {
        let center = Point::new(7.0, -3.0);
        let p = PolarPoint::new(1.234, 0.0).to_point(center);
        assert!((p.x - center.x).abs() < 1e-9);
        assert!((p.y - center.y).abs() < 1e-9);
    }

    #[test]
    fn anchors_follow_the_quadrant() {
        assert_eq!(label_anchor(FRAC_PI_4), LabelAnchor::Start);
        assert_eq!(label_anchor(PI - FRAC_PI_4), LabelAnchor::End);
        assert_eq!(label_baseline(FRAC_PI_4), LabelBaseline::Bottom);
        assert_eq!(label_baseline(-FRAC_PI_4), LabelBaseline::Top);
    }

    #[test]
    fn boundary_angles_fall_to_the_else_arm() {
        // sin(0) is exactly 0.0, which does not count as the upper half.
        assert_eq!(label_baseline(0.0), LabelBaseline::Top);
        // cos(π) is exactly -1.0.
        assert_eq!(label_anchor(PI), LabelAnchor::End);
    }
}
