//! Lookup observation hooks.
//!
//! Observers are notified before every id lookup and never influence the
//! outcome. The stock implementation logs a warning when a caller asks
//! for a negative id, which the service rejects right after.

use tracing::warn;

// == Observer Trait ==
/// Receives a notification before each lookup by id.
///
/// Implementations must not fail and must not assume an id is present:
/// callers may observe a lookup whose id could not be determined.
pub trait LookupObserver: Send + Sync {
    /// Called with the id about to be looked up, if one is known.
    fn before_id_lookup(&self, id: Option<i64>);
}

// == Negative Id Logger ==
/// Logs a warning whenever a negative spacecraft id is requested.
#[derive(Debug, Default)]
pub struct NegativeIdLogger;

impl LookupObserver for NegativeIdLogger {
    fn before_id_lookup(&self, id: Option<i64>) {
        if let Some(id) = id {
            if id < 0 {
                warn!("A ship with a negative ship id was requested: {}", id);
            }
        }
    }
}
