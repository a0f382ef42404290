//! Disk information types

use std::fmt;

use super::bytes_to_gb;

/// Network filesystems, matched case-insensitively
const NETWORK_FILESYSTEMS: &[&str] = &[
    "nfs", "nfs4", "cifs", "smb", "smbfs", "smb3", "sshfs", "fuse.sshfs", "9p", "afs", "ncpfs",
    "glusterfs", "ceph", "davfs", "fuse.rclone",
];

const RAM_FILESYSTEMS: &[&str] = &["tmpfs", "ramfs"];

/// How a volume is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeType {
    Fixed,
    Removable,
    Network,
    Ram,
}

impl VolumeType {
    pub fn classify(file_system: &str, is_removable: bool) -> Self {
        let fs = file_system.to_ascii_lowercase();
        if NETWORK_FILESYSTEMS.contains(&fs.as_str()) {
            VolumeType::Network
        } else if RAM_FILESYSTEMS.contains(&fs.as_str()) {
            VolumeType::Ram
        } else if is_removable {
            VolumeType::Removable
        } else {
            VolumeType::Fixed
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VolumeType::Fixed => "Fixed",
            VolumeType::Removable => "Removable",
            VolumeType::Network => "Network",
            VolumeType::Ram => "Ram",
        })
    }
}

/// One mounted volume
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub mount_point: String,
    /// Device or volume name reported by the OS
    pub device: String,
    pub volume_type: VolumeType,
    /// Filesystem type (e.g., "ext4", "ntfs", "apfs")
    pub file_system: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl Volume {
    /// A volume reporting no capacity is not ready
    pub fn is_ready(&self) -> bool {
        self.total_bytes > 0
    }

    /// Free space, never more than the total
    pub fn free_bytes(&self) -> u64 {
        self.available_bytes.min(self.total_bytes)
    }

    /// `(1 - free/total) * 100`, within 0..=100
    pub fn used_percent(&self) -> f64 {
        if !self.is_ready() {
            return 0.0;
        }
        (1.0 - self.free_bytes() as f64 / self.total_bytes as f64) * 100.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.device.is_empty() {
            writeln!(f, "Drive: {}", self.mount_point)?;
        } else {
            writeln!(f, "Drive: {} ({})", self.mount_point, self.device)?;
        }
        writeln!(f, "  Type: {}", self.volume_type)?;
        writeln!(f, "  File system: {}", self.file_system)?;
        writeln!(f, "  Total size: {} GB", bytes_to_gb(self.total_bytes))?;
        writeln!(f, "  Free space: {} GB", bytes_to_gb(self.free_bytes()))?;
        writeln!(f, "  Used: {:.2}%", self.used_percent())
    }
}

/// Ready volumes, in OS enumeration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiskReport {
    pub volumes: Vec<Volume>,
}

impl DiskReport {
    /// Keep only ready volumes
    pub fn from_volumes(volumes: impl IntoIterator<Item = Volume>) -> Self {
        Self {
            volumes: volumes.into_iter().filter(Volume::is_ready).collect(),
        }
    }
}

impl fmt::Display for DiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Disk Information ===")?;
        for volume in &self.volumes {
            writeln!(f)?;
            write!(f, "{}", volume)?;
        }
        Ok(())
    }
}
