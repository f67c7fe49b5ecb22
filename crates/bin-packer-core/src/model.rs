use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, PackMode};

/// Outcome of packing one item sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackReport {
    /// Algorithm that produced the packing.
    pub algorithm: Algorithm,
    /// Online or offline model.
    pub mode: PackMode,
    /// Number of items packed.
    pub items: usize,
    /// Bins the heuristic used.
    pub bins_used: usize,
    /// Sum of all item sizes.
    pub total_size: f64,
    /// Bins a perfect packing would need at minimum (⌈total_size⌉).
    pub lower_bound: usize,
    /// total_size / bins_used (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl PackReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        mode: PackMode,
        items: usize,
        bins_used: usize,
        total_size: f64,
    ) -> Self {
        let occupancy = if bins_used > 0 {
            total_size / bins_used as f64
        } else {
            0.0
        };
        Self {
            algorithm,
            mode,
            items,
            bins_used,
            total_size,
            lower_bound: total_size.ceil() as usize,
            occupancy,
        }
    }

    /// Returns a human-readable summary of the packing.
    pub fn summary(&self) -> String {
        format!(
            "{} ({:?}): {} items into {} bins (lower bound {}), occupancy {:.2}%",
            self.algorithm,
            self.mode,
            self.items,
            self.bins_used,
            self.lower_bound,
            self.occupancy * 100.0,
        )
    }

    /// Bins used beyond the theoretical lower bound.
    pub fn overhead(&self) -> usize {
        self.bins_used.saturating_sub(self.lower_bound)
    }
}
