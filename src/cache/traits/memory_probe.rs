#[cfg_attr(test, mockall::automock)]
pub trait MemoryProbe: Send + Sync {
    /// Bytes currently used by this process.
    fn current_usage(&self) -> u64;
}
