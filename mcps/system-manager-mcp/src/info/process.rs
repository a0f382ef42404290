//! Process enumeration

use sysinfo::{Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System, ThreadKind};

use crate::types::{ProcessEntry, ProcessTable};

/// Enumerate processes and keep the `top` largest by resident memory
pub fn list_processes(top: i64) -> ProcessTable {
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::new().with_memory(),
    );

    let entries: Vec<ProcessEntry> = sys
        .processes()
        .iter()
        // Linux also reports each userland thread as a process
        .filter(|(_, process)| !matches!(process.thread_kind(), Some(ThreadKind::Userland)))
        .map(|(pid, process)| ProcessEntry {
            pid: pid.as_u32(),
            name: process.name().to_string_lossy().to_string(),
            memory_bytes: readable_memory(process),
        })
        .collect();

    tracing::debug!(count = entries.len(), top, "Enumerated processes");
    ProcessTable::top_by_memory(entries, top)
}

/// Exited processes still listed have no readable memory
fn readable_memory(process: &Process) -> Option<u64> {
    match process.status() {
        ProcessStatus::Zombie | ProcessStatus::Dead => None,
        _ => Some(process.memory()),
    }
}
