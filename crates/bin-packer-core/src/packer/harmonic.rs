//! Class-bucket family: one open bin per harmonic size class.

use super::Packer;
use crate::category::Categories;

/// Upper bound of the shared class A, items in (1/2, 59/95].
const CLASS_A_MAX: f64 = 59.0 / 95.0;
/// Bounds of the shared class B, items in (1/3, 37/96].
const CLASS_B_MIN: f64 = 1.0 / 3.0;
const CLASS_B_MAX: f64 = 37.0 / 96.0;

/// Harmonic-k: items are routed to the first harmonic threshold that
/// holds them, and each class runs Next Fit on its own single open
/// bin. Class residuals start at zero, so the first item of a class
/// always opens a bin.
#[derive(Debug)]
pub struct HarmonicK {
    categories: Categories,
    residuals: Vec<f64>,
    bins: usize,
}

impl HarmonicK {
    pub fn new(classes: usize) -> Self {
        let categories = Categories::harmonic(classes);
        let residuals = vec![0.0; categories.len()];
        Self {
            categories,
            residuals,
            bins: 0,
        }
    }
}

impl Packer for HarmonicK {
    fn pack(&mut self, size: f64) {
        if let Some(class) = self.categories.index_of(size) {
            if size > self.residuals[class] {
                self.residuals[class] = 1.0 - size;
                self.bins += 1;
            } else {
                self.residuals[class] -= size;
            }
        }
    }

    fn bins_used(&self) -> usize {
        self.bins
    }
}

/// Bin configurations shared between the two merged classes of
/// Refined Harmonic. Every bin opened through this protocol is in
/// exactly one configuration, so the open-bin total is the plain sum
/// of the counters.
///
/// The transitions form a pure state machine: one call per incoming
/// item of the matching class, no other inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SharedClassCounters {
    /// Bins holding one unpaired A item.
    pub na: usize,
    /// Bins holding one unpaired B item awaiting a partner.
    pub nb: usize,
    /// Closed bins holding one A and one B item.
    pub nab: usize,
    /// Closed bins holding two B items.
    pub nbb: usize,
    /// The single half-open bin holding one B item mid-pairing (0 or 1).
    pub nbp: usize,
    /// Bins opened through the unpaired-B path; throttles nbb growth.
    pub nc: usize,
}

impl SharedClassCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// An A item pairs with a waiting B bin when one exists, closing
    /// a mixed bin; otherwise it opens an A-only bin.
    pub fn record_a(&mut self) {
        if self.nb > 0 {
            self.nb -= 1;
            self.nab += 1;
        } else {
            self.na += 1;
        }
    }

    /// A B item completes the half-open bin if one is pending, opens
    /// the half-bin while the nbb <= 3*nc throttle holds, consumes a
    /// waiting A-only bin next, and opens a fresh B-only bin last.
    /// The order of these checks is part of the algorithm's tuning;
    /// do not rearrange it.
    pub fn record_b(&mut self) {
        if self.nbp == 1 {
            self.nbp = 0;
            self.nbb += 1;
        } else if self.nbb <= 3 * self.nc {
            self.nbp = 1;
        } else if self.na > 0 {
            self.na -= 1;
            self.nab += 1;
            self.nc += 1;
        } else {
            self.nb += 1;
            self.nc += 1;
        }
    }

    /// Bins opened by the sharing protocol.
    pub fn bins(&self) -> usize {
        self.na + self.nb + self.nab + self.nbb + self.nbp
    }
}

/// Refined Harmonic (tuned for k = 20): two adjacent size classes
/// share partially-filled bins through `SharedClassCounters`; every
/// other item falls through to ordinary Harmonic-k buckets.
#[derive(Debug)]
pub struct RefinedHarmonic {
    counters: SharedClassCounters,
    fallback: HarmonicK,
}

impl RefinedHarmonic {
    pub fn new(classes: usize) -> Self {
        Self {
            counters: SharedClassCounters::new(),
            fallback: HarmonicK::new(classes),
        }
    }

    pub fn counters(&self) -> &SharedClassCounters {
        &self.counters
    }
}

impl Packer for RefinedHarmonic {
    fn pack(&mut self, size: f64) {
        if size > 0.5 && size <= CLASS_A_MAX {
            self.counters.record_a();
        } else if size > CLASS_B_MIN && size <= CLASS_B_MAX {
            self.counters.record_b();
        } else {
            self.fallback.pack(size);
        }
    }

    fn bins_used(&self) -> usize {
        self.counters.bins() + self.fallback.bins_used()
    }
}
