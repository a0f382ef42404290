//! System information collection modules
//!
//! Every collector queries the OS afresh on each call.

pub mod disk;
pub mod host;
pub mod process;
