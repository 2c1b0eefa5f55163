use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which flavour of memcache client the remote engine speaks.
///
/// - `memcache`: daemon style, ASCII protocol. Stats are summed over all
///   servers. Conditional writes are emulated with a lookup first.
/// - `memcached`: native-extension style, binary protocol. Stats come from
///   the first registered server. Conditional writes are atomic.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum RemoteDialect {
    memcache,
    #[default]
    memcached,
}
