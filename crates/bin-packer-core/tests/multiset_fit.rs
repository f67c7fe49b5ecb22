use bin_packer_core::config::{Algorithm, PackConfig};
use bin_packer_core::pipeline::pack_count;

fn count(algorithm: Algorithm, items: &[f64]) -> usize {
    let cfg = PackConfig {
        algorithm,
        ..Default::default()
    };
    pack_count(items, &cfg).unwrap()
}

#[test]
fn best_fit_prefers_the_tightest_bin() {
    // 0.5 + 0.5 close one bin; 0.2 + 0.3 close the other exactly.
    assert_eq!(count(Algorithm::BestFit, &[0.2, 0.3, 0.5, 0.5]), 2);
}

#[test]
fn best_fit_leaves_loose_bins_for_later_items() {
    // Best Fit closes both bins with exact fits; Worst Fit burns the
    // 0.5 of headroom on the 0.4 and needs a third bin.
    let items = [0.5, 0.6, 0.4, 0.5];
    assert_eq!(count(Algorithm::BestFit, &items), 2);
    assert_eq!(count(Algorithm::WorstFit, &items), 3);
}

#[test]
fn worst_fit_spreads_small_items_over_the_emptiest_bin() {
    assert_eq!(count(Algorithm::WorstFit, &[0.9, 0.1, 0.9, 0.1]), 2);
}

#[test]
fn worst_fit_opens_a_bin_when_the_largest_residual_is_too_small() {
    assert_eq!(count(Algorithm::WorstFit, &[0.4, 0.4, 0.4]), 2);
}

#[test]
fn almost_worst_fit_keeps_the_emptiest_bin_in_reserve() {
    // After [0.9, 0.8, 0.3, 0.15] the 0.15 lands in the second-largest
    // residual, preserving the 0.7 bin for the closing 0.65. Worst Fit
    // spends that headroom early and pays an extra bin.
    let items = [0.9, 0.8, 0.3, 0.15, 0.65];
    assert_eq!(count(Algorithm::AlmostWorstFit, &items), 3);
    assert_eq!(count(Algorithm::WorstFit, &items), 4);
}

#[test]
fn almost_worst_fit_falls_through_with_fewer_than_two_bins() {
    // With a single open bin the largest-or-new rule applies.
    assert_eq!(count(Algorithm::AlmostWorstFit, &[0.3, 0.3]), 1);
    assert_eq!(count(Algorithm::AlmostWorstFit, &[0.3, 0.9]), 2);
}

#[test]
fn equal_residuals_are_distinct_bins() {
    assert_eq!(count(Algorithm::BestFit, &[0.5, 0.5, 0.5, 0.5]), 2);
    assert_eq!(count(Algorithm::WorstFit, &[0.5, 0.5, 0.5, 0.5]), 2);
    assert_eq!(count(Algorithm::AlmostWorstFit, &[0.5, 0.5, 0.5, 0.5]), 2);
}

#[test]
fn exact_fits_close_bins_completely() {
    let items = [0.7, 0.3, 0.6, 0.4];
    assert_eq!(count(Algorithm::BestFit, &items), 2);
}
