// Copyright 2025 the Bullseye Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic categorical colors for mechanism-of-action labels.
//!
//! Color *choice* is a styling concern owned by callers; what the layout side
//! guarantees is determinism: the same label always resolves to the same
//! brush, assigned in first-seen order, independent of lookup order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::record::AssetRecord;

/// Brush for labels that never received an assignment.
const UNASSIGNED: Color = css::GRAY;

/// A fixed categorical color cycle.
///
/// Assignment indexes past the end wrap around, so any number of labels gets
/// a color.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalPalette {
    colors: Vec<Color>,
}

impl Default for CategoricalPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoricalPalette {
    /// The default eight-color cycle.
    pub fn new() -> Self {
        const PALETTE: [Color; 8] = [
            css::LIGHT_CORAL,
            css::MEDIUM_TURQUOISE,
            css::STEEL_BLUE,
            css::DARK_SEA_GREEN,
            css::KHAKI,
            css::PLUM,
            css::MEDIUM_AQUAMARINE,
            css::GOLDENROD,
        ];
        Self {
            colors: PALETTE.to_vec(),
        }
    }

    /// Creates a palette from an explicit color list.
    ///
    /// An empty list falls back to the default cycle.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::new()
        } else {
            Self { colors }
        }
    }

    /// Returns the brush for an assignment index, cycling past the end.
    pub fn brush(&self, index: usize) -> Brush {
        Brush::Solid(self.colors[index % self.colors.len()])
    }
}

/// First-seen-order color assignments for MOA labels.
#[derive(Clone, Debug, Default)]
pub struct MoaColors {
    palette: CategoricalPalette,
    order: Vec<String>,
    index_of: HashMap<String, usize>,
}

impl MoaColors {
    /// Creates an empty assignment set over the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assignment set over a custom palette.
    pub fn with_palette(palette: CategoricalPalette) -> Self {
        Self {
            palette,
            order: Vec::new(),
            index_of: HashMap::new(),
        }
    }

    /// Assigns a color to `label` if it has none yet, and returns its brush.
    ///
    /// Assignment order is first-call order, so feeding labels in record
    /// order gives every caller the same mapping.
    pub fn assign(&mut self, label: &str) -> Brush {
        let index = match self.index_of.get(label) {
            Some(&index) => index,
            None => {
                let index = self.order.len();
                self.index_of.insert(String::from(label), index);
                self.order.push(String::from(label));
                index
            }
        };
        self.palette.brush(index)
    }

    /// Assigns colors to every MOA label in `records`, in record order.
    pub fn assign_all(&mut self, records: &[AssetRecord]) {
        for record in records {
            self.assign(&record.moa);
        }
    }

    /// Returns the brush for `label`, or the gray fallback if unassigned.
    pub fn brush(&self, label: &str) -> Brush {
        match self.index_of.get(label) {
            Some(&index) => self.palette.brush(index),
            None => Brush::Solid(UNASSIGNED),
        }
    }

    /// Assigned labels, in assignment order.
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Builds legend entries for `records`, in first-seen label order.
    ///
    /// Labels are assigned colors as they are encountered, so the legend is
    /// stable for a given record order; every entry has `count >= 1` by
    /// construction.
    pub fn legend_entries(&mut self, records: &[AssetRecord]) -> Vec<MoaLegendEntry> {
        let mut entries: Vec<MoaLegendEntry> = Vec::new();
        let mut index_of: HashMap<&str, usize> = HashMap::new();
        for record in records {
            let fill = self.assign(&record.moa);
            match index_of.get(record.moa.as_str()) {
                Some(&index) => entries[index].count += 1,
                None => {
                    index_of.insert(record.moa.as_str(), entries.len());
                    entries.push(MoaLegendEntry {
                        label: record.moa.clone(),
                        fill,
                        count: 1,
                    });
                }
            }
        }
        entries
    }
}

/// One legend row: a label, its swatch brush, and its record count.
#[derive(Clone, Debug, PartialEq)]
pub struct MoaLegendEntry {
    /// MOA label.
    pub label: String,
    /// Swatch fill.
    pub fill: Brush,
    /// Number of records carrying this label.
    pub count: usize,
}
