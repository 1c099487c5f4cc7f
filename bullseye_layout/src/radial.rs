// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial scales: development stage → ring radius.
//!
//! The radius half of a bulls-eye position is a fixed lookup, not a fitted
//! scale: the four phases sit on four evenly spaced rings, and continuous
//! progress interpolates between the center and the outer ring. What *is*
//! configurable is the direction of the mapping, since chart styles disagree
//! on whether early-stage assets belong in the center or on the rim.

extern crate alloc;

use crate::record::{Phase, Stage};

/// The four ring fractions, from the innermost ring outward.
const RING_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Direction of the phase → ring mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhaseOrdering {
    /// Phase 1 on the innermost ring, Marketed on the outer edge.
    #[default]
    InnermostFirst,
    /// Marketed on the innermost ring, Phase 1 on the outer edge.
    OutermostFirst,
}

/// Specification for a radial scale (direction + options, no radius yet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RadialScaleSpec {
    /// Direction of the phase → ring mapping.
    pub ordering: PhaseOrdering,
}

impl RadialScaleSpec {
    /// Creates a spec with the default (`InnermostFirst`) direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phase → ring direction.
    pub fn with_ordering(mut self, ordering: PhaseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Returns the radius fraction in `[0, 1]` for a phase.
    ///
    /// Fractions are exactly `{0.25, 0.5, 0.75, 1.0}`, assigned along the
    /// configured direction.
    pub fn fraction(&self, phase: Phase) -> f64 {
        match self.ordering {
            PhaseOrdering::InnermostFirst => RING_FRACTIONS[phase as usize],
            PhaseOrdering::OutermostFirst => RING_FRACTIONS[3 - phase as usize],
        }
    }

    /// Returns the radius fraction for a phase display label.
    ///
    /// Labels outside the closed phase set map to `0.0` (the chart center),
    /// so malformed rows degrade visibly instead of failing the layout.
    pub fn fraction_for_label(&self, label: &str) -> f64 {
        Phase::parse(label).map_or(0.0, |phase| self.fraction(phase))
    }

    /// Returns the radius fraction for a progress percentage.
    ///
    /// Non-finite input maps to `0.0`; finite input is divided by 100 and
    /// clamped to `[0, 1]`.
    pub fn progress_fraction(&self, progress: f64) -> f64 {
        if !progress.is_finite() {
            return 0.0;
        }
        (progress / 100.0).clamp(0.0, 1.0)
    }

    /// Returns the radius fraction for a record's stage.
    pub fn fraction_for_stage(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Phase(phase) => self.fraction(phase),
            Stage::Progress(progress) => self.progress_fraction(progress),
        }
    }

    /// Instantiates a concrete scale for a given maximum radius.
    pub fn instantiate(&self, max_radius: f64) -> RadialScale {
        RadialScale {
            spec: *self,
            max_radius,
        }
    }
}

/// A concrete radial scale mapping stages into scene radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialScale {
    spec: RadialScaleSpec,
    max_radius: f64,
}

impl RadialScale {
    /// Creates a scale with the given direction and maximum radius.
    pub fn new(ordering: PhaseOrdering, max_radius: f64) -> Self {
        RadialScaleSpec::new()
            .with_ordering(ordering)
            .instantiate(max_radius)
    }

    /// Returns the maximum (outer ring) radius.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Maps a stage to a radius in `[0, max_radius]`.
    pub fn radius(&self, stage: Stage) -> f64 {
        self.spec.fraction_for_stage(stage) * self.max_radius
    }

    /// Maps a phase display label to a radius; unknown labels map to `0.0`.
    pub fn radius_for_label(&self, label: &str) -> f64 {
        self.spec.fraction_for_label(label) * self.max_radius
    }

    /// Returns the four concentric ring boundaries, innermost first.
    ///
    /// Each ring carries the phase the configured direction places on it,
    /// ready for ring fills and ring labels.
    pub fn rings(&self) -> [RingBoundary; 4] {
        let phase_at = |ring: usize| match self.spec.ordering {
            PhaseOrdering::InnermostFirst => Phase::ALL[ring],
            PhaseOrdering::OutermostFirst => Phase::ALL[3 - ring],
        };
        [0, 1, 2, 3].map(|ring| RingBoundary {
            radius: RING_FRACTIONS[ring] * self.max_radius,
            phase: phase_at(ring),
        })
    }
}

/// One concentric ring: its scene radius and the phase drawn on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBoundary {
    /// Ring radius in scene units.
    pub radius: f64,
    /// The phase this ring represents.
    pub phase: Phase,
}
