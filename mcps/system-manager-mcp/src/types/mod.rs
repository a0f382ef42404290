//! Collected system data and its text rendering

mod disk;
mod host;
mod process;

pub use disk::*;
pub use host::*;
pub use process::*;

const BYTES_PER_MB: u64 = 1024 * 1024;
const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// Whole megabytes, rounded down
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Whole gigabytes, rounded down
pub fn bytes_to_gb(bytes: u64) -> u64 {
    bytes / BYTES_PER_GB
}
