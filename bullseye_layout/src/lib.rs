// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout building blocks for bulls-eye portfolio charts.
//!
//! A bulls-eye chart plots assets in polar coordinates: concentric rings encode
//! development stage (radius) and angular wedges encode a chosen grouping
//! (angle). This crate owns the non-drawing half of that picture:
//! - **Segment layout** partitions the circle into one wedge per distinct
//!   group value and spreads each wedge's members across its angular span.
//! - **Radial scales** map development stage (a discrete phase or a continuous
//!   progress percentage) to a ring radius.
//! - **Polar helpers** convert polar positions into scene points and pick the
//!   anchoring that keeps outboard labels clear of the chart.
//! - **Categorical colors** give mechanism-of-action labels stable brushes for
//!   points and legends.
//!
//! Rendering, data parsing, and UI state are out of scope; a renderer consumes
//! the angles, radii, ring boundaries, and brushes produced here. Everything
//! is a pure function over its inputs, so independent layout calls need no
//! coordination.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
#[cfg(test)]
mod layout_tests;
mod palette;
mod polar;
mod radial;
mod record;
mod segment;

pub use palette::{CategoricalPalette, MoaColors, MoaLegendEntry};
pub use polar::{LabelAnchor, LabelBaseline, PolarPoint, label_anchor, label_baseline};
pub use radial::{PhaseOrdering, RadialScale, RadialScaleSpec, RingBoundary};
pub use record::{AssetRecord, Phase, Stage};
pub use segment::{Segment, SegmentLayout, SegmentLayoutError, SegmentLayoutSpec};
