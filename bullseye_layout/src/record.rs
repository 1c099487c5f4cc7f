// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed asset records and development stages.
//!
//! Portfolio data arrives as rows of "asset / company / stage / MOA /
//! category". Rather than carrying a loosely-typed table around, the layout
//! engine works on [`AssetRecord`]s; the grouping value used for wedge
//! assignment is extracted by a caller-supplied selector, so any string field
//! (category, company, MOA) can drive the segmentation.

extern crate alloc;

use alloc::string::String;

/// Clinical development phase, ordered from earliest to latest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Phase 1 clinical trials.
    Phase1,
    /// Phase 2 clinical trials.
    Phase2,
    /// Phase 3 clinical trials.
    Phase3,
    /// Marketed product.
    Marketed,
}

impl Phase {
    /// All phases in development order.
    pub const ALL: [Self; 4] = [Self::Phase1, Self::Phase2, Self::Phase3, Self::Marketed];

    /// Returns the display label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Self::Phase1 => "Phase 1",
            Self::Phase2 => "Phase 2",
            Self::Phase3 => "Phase 3",
            Self::Marketed => "Marketed",
        }
    }

    /// Parses a display label back into a phase.
    ///
    /// The label set is closed; anything else returns `None`. Callers that
    /// want the lenient mapping (unknown label sits at the chart center) go
    /// through [`RadialScaleSpec::fraction_for_label`].
    ///
    /// [`RadialScaleSpec::fraction_for_label`]: crate::RadialScaleSpec::fraction_for_label
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Phase 1" => Some(Self::Phase1),
            "Phase 2" => Some(Self::Phase2),
            "Phase 3" => Some(Self::Phase3),
            "Marketed" => Some(Self::Marketed),
            _ => None,
        }
    }
}

/// The radius source for a record.
///
/// Portfolios come in two shapes: a discrete phase label per asset, or a
/// continuous completion percentage. Both map onto the same radial scale, so
/// the rest of the crate is agnostic to which one a dataset uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stage {
    /// A discrete development phase.
    Phase(Phase),
    /// Completion progress in percent. Values are sanitized by the radial
    /// scale: non-finite collapses to `0`, everything else clamps to
    /// `[0, 100]`.
    Progress(f64),
}

/// One row of portfolio input data.
///
/// Records carry no identity across layout calls; the engine is handed a
/// fresh slice every time and input order is the only tie-breaker.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRecord {
    /// Display name of the asset. Not required to be unique.
    pub asset_id: String,
    /// Owning company, free text.
    pub company: String,
    /// Radius source: discrete phase or continuous progress.
    pub stage: Stage,
    /// Mechanism-of-action label, carried through for coloring only.
    pub moa: String,
    /// Category label, the default grouping column.
    pub category: String,
}

impl AssetRecord {
    /// Creates a record.
    pub fn new(
        asset_id: impl Into<String>,
        company: impl Into<String>,
        stage: Stage,
        moa: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            company: company.into(),
            stage,
            moa: moa.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn phase_labels_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::parse(phase.label()), Some(phase));
        }
    }

    #[test]
    fn unknown_labels_do_not_parse() {
        assert_eq!(Phase::parse("Phase 4"), None);
        assert_eq!(Phase::parse("phase 1"), None);
        assert_eq!(Phase::parse(""), None);
    }

    #[test]
    fn phases_are_ordered_by_development() {
        assert!(Phase::Phase1 < Phase::Phase2);
        assert!(Phase::Phase2 < Phase::Phase3);
        assert!(Phase::Phase3 < Phase::Marketed);
    }
}
