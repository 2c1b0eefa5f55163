/// How a write treats an entry that may already be live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Write only when no live entry exists (`create`).
    Insert,
    /// Write only when a live entry exists (`update`).
    Replace,
    /// Always write (`set`).
    Upsert,
}
