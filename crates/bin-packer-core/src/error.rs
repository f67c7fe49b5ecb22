use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("item {index} has size {size}; item sizes must be in (0, 1]")]
    InvalidItemSize { index: usize, size: f64 },
    #[error("next-k-fit window must cover at least one bin, got {0}")]
    InvalidWindow(usize),
    #[error("harmonic class count must be at least 2, got {0}")]
    InvalidClassCount(usize),
    #[error("offline packing needs the full item sequence up front; use pack instead of a session")]
    OfflineSession,
}

pub type Result<T> = std::result::Result<T, PackError>;
