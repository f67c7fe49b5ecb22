use bin_packer_core::config::{Algorithm, PackConfig};
use bin_packer_core::packer::Packer;
use bin_packer_core::packer::window::{NextFit, NextKFit};
use bin_packer_core::pipeline::pack_count;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn workload(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| 1.0 - rng.gen_range(0.0..1.0)).collect()
}

fn count(algorithm: Algorithm, window: usize, items: &[f64]) -> usize {
    let cfg = PackConfig {
        algorithm,
        window,
        ..Default::default()
    };
    pack_count(items, &cfg).unwrap()
}

#[test]
fn next_fit_closes_bins_for_good() {
    // Two halves fill the first bin exactly; the third opens a new one.
    assert_eq!(count(Algorithm::NextFit, 2, &[0.5, 0.5, 0.5]), 2);
}

#[test]
fn next_fit_never_revisits_a_closed_bin() {
    // 0.3 would fit the first bin, but it was closed by the 0.9.
    assert_eq!(count(Algorithm::NextFit, 2, &[0.6, 0.9, 0.3]), 3);
}

#[test]
fn next_k_fit_reaches_only_the_trailing_window() {
    let mut packer = NextKFit::new(2);
    for &size in &[0.6, 0.6, 0.6] {
        packer.pack(size);
    }
    assert_eq!(packer.bins_used(), 3);
    // 0.3 lands in the second bin, the oldest still inside the window.
    packer.pack(0.3);
    assert_eq!(packer.bins_used(), 3);
    packer.pack(0.35);
    assert_eq!(packer.bins_used(), 3);
    // Every reachable bin is now too full.
    packer.pack(0.4);
    assert_eq!(packer.bins_used(), 4);
}

#[test]
fn next_k_fit_forgets_bins_older_than_the_window() {
    // With the whole history visible this would be 2 bins; a window of
    // one cannot see the half-empty first bin anymore.
    assert_eq!(count(Algorithm::NextKFit, 1, &[0.5, 0.9, 0.4]), 3);
    assert_eq!(count(Algorithm::FirstFit, 1, &[0.5, 0.9, 0.4]), 2);
}

#[test]
fn window_of_one_matches_next_fit() {
    for seed in [7, 21, 1999] {
        let items = workload(seed, 1_000);
        assert_eq!(
            count(Algorithm::NextKFit, 1, &items),
            count(Algorithm::NextFit, 1, &items),
        );
    }
}

#[test]
fn unbounded_window_matches_first_fit() {
    for seed in [3, 12, 400] {
        let items = workload(seed, 500);
        assert_eq!(
            count(Algorithm::NextKFit, items.len(), &items),
            count(Algorithm::FirstFit, 1, &items),
        );
    }
}

#[test]
fn wider_windows_never_pack_worse_on_these_workloads() {
    let items = workload(42, 2_000);
    let k1 = count(Algorithm::NextKFit, 1, &items);
    let k10 = count(Algorithm::NextKFit, 10, &items);
    let k100 = count(Algorithm::NextKFit, 100, &items);
    assert!(k10 <= k1);
    assert!(k100 <= k10);
    let mut nf = NextFit::new();
    for &size in &items {
        nf.pack(size);
    }
    assert_eq!(nf.bins_used(), k1);
}
