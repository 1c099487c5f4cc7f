// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment layout: partitioning the circle into angular wedges.
//!
//! Given records and a grouping selector, the engine derives one wedge per
//! distinct group value (capped at [`SegmentLayoutSpec::max_segments`]),
//! partitions `[0, 2π)` among the wedges in first-seen order, and spreads each
//! wedge's members across its span. The engine is stateless: identical inputs
//! always produce identical output.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use hashbrown::HashMap;

use crate::record::AssetRecord;

/// Fraction of a wedge's span reserved as padding on each side when spreading
/// multiple members, leaving 80% of the span usable.
const MEMBER_PADDING: f64 = 0.1;

/// Errors returned when computing a segment layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentLayoutError {
    /// `max_segments` was zero; at least one wedge is required.
    ZeroMaxSegments,
}

/// Specification for a segment layout (cap + options, no records yet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentLayoutSpec {
    /// Maximum number of wedges.
    ///
    /// Distinct group values beyond this cap (in first-seen order) get no
    /// wedge; their members come back unplaced rather than silently dropped.
    pub max_segments: usize,
}

impl Default for SegmentLayoutSpec {
    fn default() -> Self {
        Self { max_segments: 8 }
    }
}

impl SegmentLayoutSpec {
    /// Creates a spec with the default cap of 8 wedges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wedge cap.
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Computes the layout for `records`.
    ///
    /// `key` extracts the grouping value for each record; `None` means the
    /// record has no grouping value. When no record yields a key at all, every
    /// record is placed evenly around the full circle starting from angle 0,
    /// with no wedge metadata.
    ///
    /// Group order is first appearance in `records` and members keep input
    /// order, so the output never depends on hash iteration.
    pub fn layout<'a, K>(
        &self,
        records: &'a [AssetRecord],
        key: K,
    ) -> Result<SegmentLayout, SegmentLayoutError>
    where
        K: Fn(&'a AssetRecord) -> Option<&'a str>,
    {
        if self.max_segments == 0 {
            return Err(SegmentLayoutError::ZeroMaxSegments);
        }

        let keys: Vec<Option<&str>> = records.iter().map(key).collect();

        // Distinct keys in first-seen order. The map is lookup-only, so hash
        // iteration order never leaks into the output.
        let mut order: Vec<&str> = Vec::new();
        let mut index_of: HashMap<&str, usize> = HashMap::new();
        for &k in keys.iter().flatten() {
            if !index_of.contains_key(k) {
                index_of.insert(k, order.len());
                order.push(k);
            }
        }

        if order.is_empty() {
            return Ok(evenly_spaced(records.len()));
        }

        let segment_count = order.len().min(self.max_segments);
        let span = TAU / segment_count as f64;

        // Wedge members, in input order.
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); segment_count];
        for (row, k) in keys.iter().enumerate() {
            if let Some(k) = k
                && let Some(&segment) = index_of.get(k)
                && segment < segment_count
            {
                members[segment].push(row);
            }
        }

        let mut segments = Vec::with_capacity(segment_count);
        let mut angles = vec![None; records.len()];
        for (i, &key) in order.iter().take(segment_count).enumerate() {
            let start_angle = i as f64 * span;
            let positions = spread(start_angle, span, members[i].len());
            for (&row, &angle) in members[i].iter().zip(positions.iter()) {
                angles[row] = Some(angle);
            }
            segments.push(Segment {
                key: String::from(key),
                start_angle,
                end_angle: start_angle + span,
                member_positions: positions,
            });
        }

        let unplaced = angles.iter().filter(|angle| angle.is_none()).count();
        Ok(SegmentLayout {
            segments,
            angles,
            unplaced,
        })
    }
}

/// The degenerate no-grouping layout: evenly spaced angles, no wedges.
fn evenly_spaced(count: usize) -> SegmentLayout {
    let step = if count == 0 { 0.0 } else { TAU / count as f64 };
    SegmentLayout {
        segments: Vec::new(),
        angles: (0..count).map(|i| Some(i as f64 * step)).collect(),
        unplaced: 0,
    }
}

/// Spreads `n` members across a wedge.
///
/// A lone member sits on the wedge's angular midpoint. Two or more members
/// spread evenly across the span minus [`MEMBER_PADDING`] on each side, with
/// the first and last members landing exactly on the padding boundaries.
fn spread(start_angle: f64, span: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start_angle + span / 2.0],
        _ => {
            let padding = MEMBER_PADDING * span;
            let usable = span - 2.0 * padding;
            (0..n)
                .map(|j| start_angle + padding + j as f64 * usable / (n - 1) as f64)
                .collect()
        }
    }
}

/// One angular wedge of the circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The distinct grouping value this wedge represents.
    pub key: String,
    /// Wedge start angle in radians.
    pub start_angle: f64,
    /// Wedge end angle in radians (`start_angle + 2π / segment_count`).
    pub end_angle: f64,
    /// Angles assigned to this wedge's members, in input order.
    pub member_positions: Vec<f64>,
}

impl Segment {
    /// The wedge's angular midpoint, where its outboard label goes.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Output of [`SegmentLayoutSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentLayout {
    /// Wedges in first-seen key order. Their spans partition `[0, 2π)`
    /// exactly. Empty in the no-grouping fallback.
    pub segments: Vec<Segment>,
    /// One entry per input record; `None` means the record was not placed
    /// (its group fell past the wedge cap, or it had no grouping value).
    pub angles: Vec<Option<f64>>,
    /// Number of `None` entries in `angles`.
    pub unplaced: usize,
}

impl SegmentLayout {
    /// Iterates `(record index, angle)` over the records that were placed.
    pub fn placed(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.angles
            .iter()
            .enumerate()
            .filter_map(|(row, angle)| angle.map(|angle| (row, angle)))
    }
}
