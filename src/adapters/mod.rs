// Adapters layer: concrete implementations of the domain ports (local filesystem, http).

pub mod http;
pub mod storage;
