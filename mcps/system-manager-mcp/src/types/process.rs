//! Process table types

use std::fmt;

use super::bytes_to_mb;

/// One enumerated process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    /// Resident memory in bytes; `None` when it could not be read
    pub memory_bytes: Option<u64>,
}

impl ProcessEntry {
    /// Memory used for ranking; unreadable counts as zero
    pub fn sort_key(&self) -> u64 {
        self.memory_bytes.unwrap_or(0)
    }
}

/// Processes ranked by resident memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    /// Row count the caller asked for
    pub requested: i64,
    /// At most `requested` entries, largest memory first
    pub entries: Vec<ProcessEntry>,
}

impl ProcessTable {
    /// Rank `entries` by memory (ties by ascending PID) and keep the first `top`
    ///
    /// A negative `top` keeps nothing; a `top` beyond the entry count keeps all.
    pub fn top_by_memory(mut entries: Vec<ProcessEntry>, top: i64) -> Self {
        entries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()).then(a.pid.cmp(&b.pid)));
        entries.truncate(usize::try_from(top).unwrap_or(0));

        Self {
            requested: top,
            entries,
        }
    }

    /// Entries that render as rows; unreadable ones are skipped
    pub fn rows(&self) -> impl Iterator<Item = (&ProcessEntry, u64)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.memory_bytes.map(|bytes| (entry, bytes)))
    }
}

impl fmt::Display for ProcessTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Top {} processes (by memory) ===", self.requested)?;
        writeln!(f, "{:<8} {:<30} {:<15}", "PID", "Name", "Memory(MB)")?;
        writeln!(f, "{}", "-".repeat(60))?;

        for (entry, bytes) in self.rows() {
            writeln!(
                f,
                "{:<8} {:<30} {:<15}",
                entry.pid,
                entry.name,
                bytes_to_mb(bytes)
            )?;
        }
        Ok(())
    }
}
