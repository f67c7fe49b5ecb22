//! Core library for one-dimensional bin packing.
//!
//! - Algorithms: Next Fit / Next-k-Fit (bounded window), First Fit /
//!   Refined First Fit (capacity tree), Best / Worst / Almost-Worst Fit
//!   (ordered residual multiset), Harmonic-k / Refined Harmonic (class
//!   buckets)
//! - Pipeline: `pack` takes a sequence of item sizes in (0, 1] and
//!   returns the bin count plus packing statistics
//! - Models: online (one pass, no lookahead, irrevocable placement) and
//!   offline (packs a descending-sorted copy)
//!
//! Quick example:
//! ```
//! use bin_packer_core::{Algorithm, PackConfig, pack};
//!
//! let items = [0.5, 0.3, 0.8, 0.2];
//! let cfg = PackConfig {
//!     algorithm: Algorithm::BestFit,
//!     ..Default::default()
//! };
//! let report = pack(&items, &cfg).unwrap();
//! assert_eq!(report.bins_used, 2);
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod model;
pub mod multiset;
pub mod packer;
pub mod pipeline;
pub mod session;
pub mod tree;

pub use config::*;
pub use error::*;
pub use model::*;
pub use pipeline::{pack, pack_count, packer_for};
pub use session::PackSession;

/// Convenience prelude for common types and functions.
/// Importing `bin_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::category::Categories;
    pub use crate::config::{Algorithm, PackConfig, PackConfigBuilder, PackMode};
    pub use crate::error::{PackError, Result};
    pub use crate::model::PackReport;
    pub use crate::multiset::ResidualMultiset;
    pub use crate::packer::Packer;
    pub use crate::pipeline::{pack, pack_count, packer_for};
    pub use crate::session::PackSession;
    pub use crate::tree::CapacityTree;
}
