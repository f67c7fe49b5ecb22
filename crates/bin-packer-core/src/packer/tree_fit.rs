//! Tree-backed family: first-fit placement through a capacity tree.

use super::Packer;
use crate::category::Categories;
use crate::tree::CapacityTree;

/// Size categories for Refined First Fit: items route to the first
/// threshold at least their size and never cross categories.
pub const REFINED_FIT_THRESHOLDS: [f64; 4] = [1.0 / 3.0, 2.0 / 5.0, 1.0 / 2.0, 1.0];

/// First Fit: every item lands in the earliest-created bin that still
/// fits, located through one capacity tree sized to the item count
/// (the worst case opens one bin per item).
#[derive(Debug)]
pub struct FirstFit {
    tree: CapacityTree,
}

impl FirstFit {
    pub fn new(expected_items: usize) -> Self {
        Self {
            tree: CapacityTree::new(expected_items),
        }
    }
}

impl Packer for FirstFit {
    fn pack(&mut self, size: f64) {
        self.tree.pack(size);
    }

    fn bins_used(&self) -> usize {
        self.tree.used_bins()
    }
}

/// Refined First Fit: First Fit within four size categories, each
/// owning an independent pool of unit-capacity bins.
#[derive(Debug)]
pub struct RefinedFirstFit {
    categories: Categories,
    trees: Vec<CapacityTree>,
}

impl RefinedFirstFit {
    /// Online construction: per-category item counts are unknown, so
    /// every tree is conservatively sized to the total item count.
    pub fn new(expected_items: usize) -> Self {
        Self::from_counts(&[expected_items; 4])
    }

    /// Offline construction: one pre-pass counts the items per
    /// category and each tree is sized exactly.
    pub fn sized_for(items: &[f64]) -> Self {
        let categories = Categories::new(REFINED_FIT_THRESHOLDS);
        let counts = categories.counts(items);
        let mut trees = Vec::with_capacity(counts.len());
        for &count in &counts {
            trees.push(CapacityTree::new(count));
        }
        Self { categories, trees }
    }

    fn from_counts(counts: &[usize; 4]) -> Self {
        Self {
            categories: Categories::new(REFINED_FIT_THRESHOLDS),
            trees: counts.iter().map(|&c| CapacityTree::new(c)).collect(),
        }
    }
}

impl Packer for RefinedFirstFit {
    fn pack(&mut self, size: f64) {
        let class = self
            .categories
            .index_of(size)
            .expect("categories cover (0, 1]");
        self.trees[class].pack(size);
    }

    fn bins_used(&self) -> usize {
        self.trees.iter().map(CapacityTree::used_bins).sum()
    }
}
