mod eval_cache;
mod eviction;
mod main;

pub use eval_cache::EvalCache;
pub(crate) use eviction::evict_lowest;
pub use main::{Bound, ProbeResult, TranspositionTable};
