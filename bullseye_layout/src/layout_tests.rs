// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::format;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::Point;

use crate::{
    AssetRecord, LabelAnchor, LabelBaseline, Phase, PhaseOrdering, PolarPoint, RadialScaleSpec,
    SegmentLayoutSpec, Stage, label_anchor, label_baseline,
};

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() <= 1e-9, "{got} != {want}");
}

/// Two assets sharing one segment: the wedge spans the whole circle, members
/// land on the 10%/90% padding boundaries, and radii follow the phase table.
#[test]
fn single_segment_portfolio_lands_on_padding_boundaries() {
    let records = [
        AssetRecord::new(
            "A",
            "Defender Pharma",
            Stage::Phase(Phase::Phase1),
            "Pan muscarinic antagonist",
            "X",
        ),
        AssetRecord::new(
            "B",
            "Abbvie",
            Stage::Phase(Phase::Phase3),
            "D2 Antagonist",
            "X",
        ),
    ];

    let layout = SegmentLayoutSpec::new()
        .with_max_segments(2)
        .layout(&records, |r| Some(r.category.as_str()))
        .unwrap();

    assert_eq!(layout.segments.len(), 1);
    let segment = &layout.segments[0];
    assert_eq!(segment.key, "X");
    assert_close(segment.start_angle, 0.0);
    assert_close(segment.end_angle, TAU);

    assert_close(layout.angles[0].unwrap(), 0.1 * TAU);
    assert_close(layout.angles[1].unwrap(), 0.9 * TAU);

    let radial = RadialScaleSpec::new();
    assert_close(radial.fraction_for_stage(records[0].stage), 0.25);
    assert_close(radial.fraction_for_stage(records[1].stage), 0.75);
}

/// The full pipeline: angles + radii + polar conversion place a lone
/// marketed asset on the outer ring at its wedge midpoint.
#[test]
fn layout_radial_scale_and_polar_compose() {
    let records = [
        AssetRecord::new(
            "Cariprazine",
            "Abbvie",
            Stage::Phase(Phase::Marketed),
            "D2 Antagonist",
            "Treatment Resistant",
        ),
        AssetRecord::new(
            "DPI-387",
            "Defender Pharma",
            Stage::Progress(35.0),
            "Pan muscarinic antagonist",
            "Treatment Sensitive",
        ),
    ];

    let layout = SegmentLayoutSpec::new()
        .layout(&records, |r| Some(r.category.as_str()))
        .unwrap();
    let scale = RadialScaleSpec::new().instantiate(100.0);
    let center = Point::new(0.0, 0.0);

    let points: Vec<Point> = layout
        .placed()
        .map(|(row, angle)| {
            PolarPoint::new(angle, scale.radius(records[row].stage)).to_point(center)
        })
        .collect();
    assert_eq!(points.len(), 2);

    // First record: lone member of the first wedge (span π, midpoint π/2),
    // marketed so radius 100: the point sits straight up from the center.
    assert_close(points[0].x, 0.0);
    assert_close(points[0].y, 100.0);

    // Second record: lone member of the second wedge (midpoint 3π/2),
    // progress 35 so radius 35: straight down.
    assert_close(points[1].x, 0.0);
    assert_close(points[1].y, -35.0);
}

/// Reversing the phase ordering moves assets without touching angles.
#[test]
fn reversed_radial_direction_only_changes_radii() {
    let records = [AssetRecord::new(
        "ILT1011",
        "Iltoo Pharma",
        Stage::Phase(Phase::Phase1),
        "Interleukin 2",
        "Treatment Resistant",
    )];

    let spec = SegmentLayoutSpec::new();
    let angles_inner = spec
        .layout(&records, |r| Some(r.category.as_str()))
        .unwrap()
        .angles;
    let angles_outer = spec
        .layout(&records, |r| Some(r.category.as_str()))
        .unwrap()
        .angles;
    assert_eq!(angles_inner, angles_outer);

    let inner = RadialScaleSpec::new().instantiate(100.0);
    let outer = RadialScaleSpec::new()
        .with_ordering(PhaseOrdering::OutermostFirst)
        .instantiate(100.0);
    assert_close(inner.radius(records[0].stage), 25.0);
    assert_close(outer.radius(records[0].stage), 100.0);
}

/// Outboard labels anchor away from the chart in every quadrant.
#[test]
fn outboard_labels_anchor_away_from_the_chart() {
    let records: Vec<AssetRecord> = (0..4)
        .map(|i| {
            AssetRecord::new(
                format!("asset-{i}"),
                "Acme Pharma",
                Stage::Progress(50.0),
                "MOA",
                format!("cat-{i}"),
            )
        })
        .collect();

    let layout = SegmentLayoutSpec::new()
        .layout(&records, |r| Some(r.category.as_str()))
        .unwrap();

    // Four wedges; midpoints fall in the four quadrants in first-seen order.
    let expected = [
        (LabelAnchor::Start, LabelBaseline::Bottom),
        (LabelAnchor::End, LabelBaseline::Bottom),
        (LabelAnchor::End, LabelBaseline::Top),
        (LabelAnchor::Start, LabelBaseline::Top),
    ];
    for (segment, (anchor, baseline)) in layout.segments.iter().zip(expected) {
        let mid = segment.mid_angle();
        assert_eq!(label_anchor(mid), anchor);
        assert_eq!(label_baseline(mid), baseline);
    }
}
