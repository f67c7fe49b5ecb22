//! Size-class partitioning of (0, 1] by ordered thresholds.

/// Ascending cut points; an item belongs to the first class whose
/// threshold is at least its size.
#[derive(Debug, Clone)]
pub struct Categories {
    thresholds: Vec<f64>,
}

impl Categories {
    pub fn new(thresholds: impl Into<Vec<f64>>) -> Self {
        let thresholds = thresholds.into();
        debug_assert!(
            thresholds.windows(2).all(|w| w[0] < w[1]),
            "thresholds must be strictly ascending"
        );
        Self { thresholds }
    }

    /// The harmonic partition for class count `k`: thresholds
    /// 1/(k-1), 1/(k-2), ..., 1/1.
    pub fn harmonic(k: usize) -> Self {
        debug_assert!(k >= 2, "harmonic partition needs at least 2 classes");
        Self {
            thresholds: (1..k).rev().map(|i| 1.0 / i as f64).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn threshold(&self, class: usize) -> f64 {
        self.thresholds[class]
    }

    /// Class index for `size`: the first threshold >= size, or `None`
    /// when size exceeds every threshold.
    pub fn index_of(&self, size: f64) -> Option<usize> {
        self.thresholds.iter().position(|&t| size <= t)
    }

    /// Items per class, in one pass. Items beyond the last threshold
    /// are not counted.
    pub fn counts(&self, items: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.thresholds.len()];
        for &size in items {
            if let Some(class) = self.index_of(size) {
                counts[class] += 1;
            }
        }
        counts
    }
}
