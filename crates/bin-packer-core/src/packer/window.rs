//! Bounded-window family: only the most recently opened bins are
//! reachable, modeling bounded-memory online packing.

use super::Packer;

/// Next Fit: a single current bin. Once an item does not fit, the bin
/// closes for good and a fresh one opens.
#[derive(Debug, Default)]
pub struct NextFit {
    residual: f64,
    bins: usize,
}

impl NextFit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Packer for NextFit {
    fn pack(&mut self, size: f64) {
        // The initial residual of 0 forces the first item to open a bin.
        if self.residual < size {
            self.bins += 1;
            self.residual = 1.0;
        }
        self.residual -= size;
    }

    fn bins_used(&self) -> usize {
        self.bins
    }
}

/// Next-k-Fit: First Fit restricted to the trailing `window` bins.
///
/// Every opened bin stays in the vector, but bins older than the
/// window are permanently unreachable. The scan runs in opening order
/// within the window, so `window == 1` matches NextFit exactly.
#[derive(Debug)]
pub struct NextKFit {
    window: usize,
    bins: Vec<f64>,
}

impl NextKFit {
    pub fn new(window: usize) -> Self {
        debug_assert!(window >= 1, "window must cover at least one bin");
        Self {
            window,
            bins: Vec::new(),
        }
    }
}

impl Packer for NextKFit {
    fn pack(&mut self, size: f64) {
        let start = self.bins.len().saturating_sub(self.window);
        for i in start..self.bins.len() {
            if self.bins[i] >= size {
                self.bins[i] -= size;
                return;
            }
        }
        self.bins.push(1.0 - size);
    }

    fn bins_used(&self) -> usize {
        self.bins.len()
    }
}
