//! Disk information collection

use sysinfo::Disks;

use crate::types::{DiskReport, Volume, VolumeType};

/// Get information about every ready volume
pub fn get_disk_info() -> DiskReport {
    let disks = Disks::new_with_refreshed_list();

    DiskReport::from_volumes(disks.iter().map(|disk| {
        let file_system = disk.file_system().to_string_lossy().to_string();

        Volume {
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            device: disk.name().to_string_lossy().to_string(),
            volume_type: VolumeType::classify(&file_system, disk.is_removable()),
            file_system,
            total_bytes: disk.total_space(),
            available_bytes: disk.available_space(),
        }
    }))
}
