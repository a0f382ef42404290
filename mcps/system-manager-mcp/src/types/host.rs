//! Host information types

use std::fmt;
use std::time::Duration;

use super::bytes_to_mb;

/// Snapshot of the host and the server process
#[derive(Debug, Clone, PartialEq)]
pub struct HostInfo {
    /// OS name and version, including the kernel version when known
    pub os_version: String,
    /// Logical processor count
    pub processor_count: usize,
    /// Time since the server process started
    pub uptime: Duration,
    pub machine_name: String,
    pub user_name: String,
    /// Resident memory of the server process in bytes
    pub process_memory_bytes: u64,
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== System Information ===")?;
        writeln!(f, "Operating system: {}", self.os_version)?;
        writeln!(f, "Processors: {}", self.processor_count)?;
        writeln!(f, "System uptime: {}", format_uptime(self.uptime))?;
        writeln!(f, "Machine name: {}", self.machine_name)?;
        writeln!(f, "User name: {}", self.user_name)?;
        writeln!(
            f,
            "Process memory: {} MB",
            bytes_to_mb(self.process_memory_bytes)
        )
    }
}

/// Format as `[d.]hh:mm:ss.fff`
pub fn format_uptime(uptime: Duration) -> String {
    let total_secs = uptime.as_secs();
    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let millis = uptime.subsec_millis();

    if days > 0 {
        format!(
            "{}.{:02}:{:02}:{:02}.{:03}",
            days, hours, minutes, secs, millis
        )
    } else {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO), "00:00:00.000");
        assert_eq!(format_uptime(Duration::from_millis(61_005)), "00:01:01.005");
        assert_eq!(
            format_uptime(Duration::from_secs(2 * 86400 + 3 * 3600 + 4 * 60 + 5)),
            "2.03:04:05.000"
        );
    }

    #[test]
    fn test_display() {
        let info = HostInfo {
            os_version: "Linux 24.04 Ubuntu (kernel 6.8.0)".to_string(),
            processor_count: 8,
            uptime: Duration::from_secs(90),
            machine_name: "build-box".to_string(),
            user_name: "ci".to_string(),
            process_memory_bytes: 5 * 1024 * 1024 + 1,
        };

        let text = info.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "=== System Information ===",
                "Operating system: Linux 24.04 Ubuntu (kernel 6.8.0)",
                "Processors: 8",
                "System uptime: 00:01:30.000",
                "Machine name: build-box",
                "User name: ci",
                "Process memory: 5 MB",
            ]
        );
    }
}
