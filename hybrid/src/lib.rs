//! Chooses a move from one of three sources: the local search, a remote
//! move suggester, or a reference UCI engine. Whatever the source, a move
//! that is not in the legal list is never returned.

mod config;
mod error;
mod hybrid;

pub mod custom;
pub mod reference;

pub use config::{EngineMode, FallbackPolicy, HybridConfig, ProviderConfig, ReferenceSettings};
pub use error::HybridError;
pub use hybrid::{EngineSource, HybridAI, MoveChoice};
