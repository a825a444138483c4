//! Cache Module
//!
//! Keyed read-through cache for spacecraft id lookups.

mod keyed;
mod stats;


// Re-export public types
pub use keyed::KeyedCache;
pub use stats::CacheStats;
