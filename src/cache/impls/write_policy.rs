use crate::cache::enums::write_policy::WritePolicy;

impl WritePolicy {
    /// Whether a write may proceed given that a live entry does (not) exist.
    pub fn permits(&self, exists: bool) -> bool {
        match self {
            WritePolicy::Insert => !exists,
            WritePolicy::Replace => exists,
            WritePolicy::Upsert => true,
        }
    }
}
