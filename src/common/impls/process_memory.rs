use std::fs;
use crate::cache::traits::memory_probe::MemoryProbe;
use crate::common::structs::process_memory::ProcessMemory;

impl ProcessMemory {
    /// Extracts `VmRSS` (reported in kB) from a `/proc/<pid>/status` dump.
    pub fn parse_status(status: &str) -> Option<u64> {
        let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
        let kilobytes = line.split_whitespace().nth(1)?.parse::<u64>().ok()?;
        kilobytes.checked_mul(1024)
    }
}

impl MemoryProbe for ProcessMemory {
    /// Resident set size; zero where `/proc` is unavailable.
    fn current_usage(&self) -> u64 {
        fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| Self::parse_status(&status))
            .unwrap_or(0)
    }
}
