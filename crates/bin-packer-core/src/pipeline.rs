use tracing::{debug, instrument};

use crate::config::{Algorithm, PackConfig, PackMode};
use crate::error::{PackError, Result};
use crate::model::PackReport;
use crate::packer::{
    Packer, harmonic::HarmonicK, harmonic::RefinedHarmonic, multiset_fit::AlmostWorstFit,
    multiset_fit::BestFit, multiset_fit::WorstFit, tree_fit::FirstFit, tree_fit::RefinedFirstFit,
    window::NextFit, window::NextKFit,
};

/// Packs `items` with the configured heuristic and returns the full
/// report.
///
/// Validates the configuration and every item size first (fail fast;
/// packing is cumulative and cannot be rolled back once an item is
/// counted). Online mode consumes the sequence as given; offline mode
/// packs a descending-sorted copy, and Refined First Fit additionally
/// sizes its category trees from an exact pre-count.
#[instrument(skip_all, fields(algorithm = %cfg.algorithm, items = items.len()))]
pub fn pack(items: &[f64], cfg: &PackConfig) -> Result<PackReport> {
    cfg.validate()?;
    validate_items(items)?;

    let bins_used = match cfg.mode {
        PackMode::Online => run(items, cfg),
        PackMode::Offline => {
            let mut sorted = items.to_vec();
            sorted.sort_unstable_by(|a, b| b.total_cmp(a));
            run(&sorted, cfg)
        }
    };
    debug!(bins_used, "packing finished");

    let total_size: f64 = items.iter().sum();
    Ok(PackReport::new(
        cfg.algorithm,
        cfg.mode,
        items.len(),
        bins_used,
        total_size,
    ))
}

/// Packs `items` and returns only the bin count.
pub fn pack_count(items: &[f64], cfg: &PackConfig) -> Result<usize> {
    pack(items, cfg).map(|report| report.bins_used)
}

/// Builds the packer an online run of `cfg` would use, sized for
/// `expected_items`. Offline-only pre-sizing never applies here, so
/// sessions built on top of this stay single-pass.
pub fn packer_for(cfg: &PackConfig, expected_items: usize) -> Result<Box<dyn Packer>> {
    cfg.validate()?;
    Ok(build(cfg, expected_items, None))
}

fn run(items: &[f64], cfg: &PackConfig) -> usize {
    let exact = matches!(cfg.mode, PackMode::Offline).then_some(items);
    let mut packer = build(cfg, items.len(), exact);
    for &size in items {
        packer.pack(size);
    }
    packer.bins_used()
}

/// `presized` carries the full sequence when an offline pre-pass may
/// size structures exactly; only Refined First Fit uses it.
fn build(cfg: &PackConfig, expected_items: usize, presized: Option<&[f64]>) -> Box<dyn Packer> {
    match cfg.algorithm {
        Algorithm::NextFit => Box::new(NextFit::new()),
        Algorithm::NextKFit => Box::new(NextKFit::new(cfg.window)),
        Algorithm::FirstFit => Box::new(FirstFit::new(expected_items)),
        Algorithm::RefinedFirstFit => match presized {
            Some(items) => Box::new(RefinedFirstFit::sized_for(items)),
            None => Box::new(RefinedFirstFit::new(expected_items)),
        },
        Algorithm::BestFit => Box::new(BestFit::new()),
        Algorithm::WorstFit => Box::new(WorstFit::new()),
        Algorithm::AlmostWorstFit => Box::new(AlmostWorstFit::new()),
        Algorithm::HarmonicK => Box::new(HarmonicK::new(cfg.classes)),
        Algorithm::RefinedHarmonic => Box::new(RefinedHarmonic::new(cfg.classes)),
    }
}

pub(crate) fn validate_items(items: &[f64]) -> Result<()> {
    for (index, &size) in items.iter().enumerate() {
        validate_item(index, size)?;
    }
    Ok(())
}

pub(crate) fn validate_item(index: usize, size: f64) -> Result<()> {
    if size > 0.0 && size <= 1.0 {
        Ok(())
    } else {
        Err(PackError::InvalidItemSize { index, size })
    }
}
