use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packing heuristics, grouped by the capacity-tracking strategy they
/// are built on:
///   - bounded window (NextFit, NextKFit): only the trailing bins are reachable
///   - capacity tree (FirstFit, RefinedFirstFit): leftmost-feasible-bin search
///   - residual multiset (BestFit, WorstFit, AlmostWorstFit): ordered residuals
///   - class buckets (HarmonicK, RefinedHarmonic): one open bin per size class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Only the most recently opened bin is ever considered.
    NextFit,
    /// First Fit restricted to the `window` most recently opened bins.
    NextKFit,
    /// Earliest-created bin with enough residual capacity.
    FirstFit,
    /// First Fit within four size categories, each with its own bin pool.
    RefinedFirstFit,
    /// Smallest residual that still fits.
    BestFit,
    /// Largest residual, if it fits.
    WorstFit,
    /// Second-largest residual first; falls back to the largest.
    AlmostWorstFit,
    /// Next Fit independently within `classes - 1` harmonic size classes.
    HarmonicK,
    /// Harmonic with a bin-sharing protocol for two adjacent size classes.
    RefinedHarmonic,
}

impl Algorithm {
    /// All algorithms, in the order the comparison harness runs them.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::NextFit,
        Algorithm::NextKFit,
        Algorithm::FirstFit,
        Algorithm::BestFit,
        Algorithm::WorstFit,
        Algorithm::AlmostWorstFit,
        Algorithm::RefinedFirstFit,
        Algorithm::HarmonicK,
        Algorithm::RefinedHarmonic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NextFit => "next_fit",
            Algorithm::NextKFit => "next_k_fit",
            Algorithm::FirstFit => "first_fit",
            Algorithm::RefinedFirstFit => "refined_first_fit",
            Algorithm::BestFit => "best_fit",
            Algorithm::WorstFit => "worst_fit",
            Algorithm::AlmostWorstFit => "almost_worst_fit",
            Algorithm::HarmonicK => "harmonic_k",
            Algorithm::RefinedHarmonic => "refined_harmonic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nf" | "nextfit" | "next_fit" => Ok(Self::NextFit),
            "nkf" | "nextkfit" | "next_k_fit" => Ok(Self::NextKFit),
            "ff" | "firstfit" | "first_fit" => Ok(Self::FirstFit),
            "rff" | "refinedfirstfit" | "refined_first_fit" => Ok(Self::RefinedFirstFit),
            "bf" | "bestfit" | "best_fit" => Ok(Self::BestFit),
            "wf" | "worstfit" | "worst_fit" => Ok(Self::WorstFit),
            "awf" | "almostworstfit" | "almost_worst_fit" => Ok(Self::AlmostWorstFit),
            "hk" | "harmonic" | "harmonic_k" => Ok(Self::HarmonicK),
            "rh" | "refinedharmonic" | "refined_harmonic" => Ok(Self::RefinedHarmonic),
            _ => Err(()),
        }
    }
}

/// Online consumes the sequence in the given order with no lookahead;
/// offline packs a descending-sorted copy and may pre-count items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackMode {
    Online,
    Offline,
}

impl FromStr for PackMode {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Which heuristic packs the items.
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    /// Window size for NextKFit; 1 degenerates to NextFit.
    #[serde(default = "default_window")]
    pub window: usize,
    /// Class count k for HarmonicK / RefinedHarmonic (k - 1 thresholds).
    #[serde(default = "default_classes")]
    pub classes: usize,
    /// Online or offline packing model.
    #[serde(default = "default_mode")]
    pub mode: PackMode,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            window: default_window(),
            classes: default_classes(),
            mode: default_mode(),
        }
    }
}

impl PackConfig {
    /// Validates the configuration parameters.
    ///
    /// Fails fast on a zero window or a harmonic class count below 2;
    /// with a single class the threshold list would be empty and every
    /// item would be silently dropped.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if self.window == 0 {
            return Err(PackError::InvalidWindow(self.window));
        }
        if self.classes < 2 {
            return Err(PackError::InvalidClassCount(self.classes));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackConfig`.
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::new()
    }
}

fn default_algorithm() -> Algorithm {
    Algorithm::FirstFit
}
fn default_window() -> usize {
    2
}
fn default_classes() -> usize {
    20
}
fn default_mode() -> PackMode {
    PackMode::Online
}

/// Builder for `PackConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackConfigBuilder {
    cfg: PackConfig,
}

impl PackConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackConfig::default(),
        }
    }
    pub fn algorithm(mut self, v: Algorithm) -> Self {
        self.cfg.algorithm = v;
        self
    }
    pub fn window(mut self, v: usize) -> Self {
        self.cfg.window = v;
        self
    }
    pub fn classes(mut self, v: usize) -> Self {
        self.cfg.classes = v;
        self
    }
    pub fn mode(mut self, v: PackMode) -> Self {
        self.cfg.mode = v;
        self
    }
    pub fn build(self) -> PackConfig {
        self.cfg
    }
}
