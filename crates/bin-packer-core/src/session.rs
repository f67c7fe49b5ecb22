use crate::config::{PackConfig, PackMode};
use crate::error::{PackError, Result};
use crate::model::PackReport;
use crate::packer::Packer;
use crate::pipeline::{packer_for, validate_item};

/// Incremental online packing: feed items one at a time and read the
/// running bin count between pushes.
///
/// `expected_items` pre-sizes the tree-backed algorithms; it must be
/// an upper bound on the number of items pushed.
pub struct PackSession {
    cfg: PackConfig,
    packer: Box<dyn Packer>,
    items: usize,
    total_size: f64,
}

impl PackSession {
    /// Offline mode is rejected: an offline packer inspects the whole
    /// sequence before the first placement, which a session cannot
    /// provide.
    pub fn new(cfg: PackConfig, expected_items: usize) -> Result<Self> {
        if matches!(cfg.mode, PackMode::Offline) {
            return Err(PackError::OfflineSession);
        }
        let packer = packer_for(&cfg, expected_items)?;
        Ok(Self {
            cfg,
            packer,
            items: 0,
            total_size: 0.0,
        })
    }

    /// Validates and packs one item. Placement is irrevocable.
    pub fn push(&mut self, size: f64) -> Result<()> {
        validate_item(self.items, size)?;
        self.packer.pack(size);
        self.items += 1;
        self.total_size += size;
        Ok(())
    }

    pub fn bins_used(&self) -> usize {
        self.packer.bins_used()
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn finish(self) -> PackReport {
        PackReport::new(
            self.cfg.algorithm,
            self.cfg.mode,
            self.items,
            self.packer.bins_used(),
            self.total_size,
        )
    }
}
