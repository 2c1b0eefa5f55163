#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemory;
