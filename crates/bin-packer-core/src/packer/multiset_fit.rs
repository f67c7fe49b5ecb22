//! Multiset-backed family: bins tracked as an ordered multiset of
//! residual capacities.

use super::Packer;
use crate::multiset::ResidualMultiset;

/// Best Fit: the smallest residual that still fits, to keep bins as
/// full as possible.
#[derive(Debug, Default)]
pub struct BestFit {
    bins: ResidualMultiset,
}

impl BestFit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Packer for BestFit {
    fn pack(&mut self, size: f64) {
        match self.bins.take_first_at_least(size) {
            Some(residual) => self.bins.insert(residual - size),
            None => self.bins.insert(1.0 - size),
        }
    }

    fn bins_used(&self) -> usize {
        self.bins.len()
    }
}

/// Worst Fit: the largest residual, if it fits, to keep residuals
/// balanced across bins.
#[derive(Debug, Default)]
pub struct WorstFit {
    bins: ResidualMultiset,
}

impl WorstFit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Packer for WorstFit {
    fn pack(&mut self, size: f64) {
        match self.bins.max() {
            Some(max) if max >= size => {
                self.bins.remove(max);
                self.bins.insert(max - size);
            }
            _ => self.bins.insert(1.0 - size),
        }
    }

    fn bins_used(&self) -> usize {
        self.bins.len()
    }
}

/// Almost-Worst Fit: the second-largest residual first, falling back
/// to the largest, then to a new bin. Keeping the single emptiest bin
/// in reserve avoids the fragmentation patterns pure Worst Fit shows
/// on adversarial sequences.
#[derive(Debug, Default)]
pub struct AlmostWorstFit {
    bins: ResidualMultiset,
}

impl AlmostWorstFit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Packer for AlmostWorstFit {
    fn pack(&mut self, size: f64) {
        if let Some(second) = self.bins.second_max() {
            if second >= size {
                self.bins.remove(second);
                self.bins.insert(second - size);
                return;
            }
        }
        match self.bins.max() {
            Some(max) if max >= size => {
                self.bins.remove(max);
                self.bins.insert(max - size);
            }
            _ => self.bins.insert(1.0 - size),
        }
    }

    fn bins_used(&self) -> usize {
        self.bins.len()
    }
}
