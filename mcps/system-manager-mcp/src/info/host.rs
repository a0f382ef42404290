//! Host information collection

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use mcp_common::{unavailable, ToolResult};
use sysinfo::{
    CpuRefreshKind, Pid, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System, Users,
};

use crate::types::HostInfo;

const UNKNOWN: &str = "unknown";

/// Origin of the uptime tick counter
static TICK_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Start the uptime tick counter; later calls are no-ops
pub fn start_tick_counter() {
    TICK_ORIGIN.get_or_init(Instant::now);
}

/// Time elapsed on the tick counter
///
/// This is process-relative, not time since boot.
pub fn tick_uptime() -> Duration {
    TICK_ORIGIN.get_or_init(Instant::now).elapsed()
}

/// Get host, user and server-process information
pub fn get_host_info() -> ToolResult<HostInfo> {
    let pid = sysinfo::get_current_pid().map_err(unavailable)?;

    let mut sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::everything(),
    );

    let processor_count = sys.cpus().len();
    if processor_count == 0 {
        return Err(unavailable("processor information is not available"));
    }

    let process = sys
        .process(pid)
        .ok_or_else(|| unavailable(format!("current process {} is not visible", pid)))?;

    Ok(HostInfo {
        os_version: os_version(),
        processor_count,
        uptime: tick_uptime(),
        machine_name: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
        user_name: user_name(&sys, pid),
        process_memory_bytes: process.memory(),
    })
}

fn os_version() -> String {
    let name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| UNKNOWN.to_string());

    match System::kernel_version() {
        Some(kernel) => format!("{} (kernel {})", name, kernel),
        None => name,
    }
}

/// Owner of the process, falling back to the login environment
fn user_name(sys: &System, pid: Pid) -> String {
    let users = Users::new_with_refreshed_list();

    sys.process(pid)
        .and_then(|process| process.user_id())
        .and_then(|uid| users.get_user_by_id(uid))
        .map(|user| user.name().to_string())
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("USERNAME").ok())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
