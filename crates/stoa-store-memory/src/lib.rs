//! In-process session store backend.
//!
//! A keyed map behind a `tokio::sync::RwLock`. Every operation is one
//! read-modify-write under the lock with no awaits inside the critical
//! section; concurrent requests for the same session race benignly
//! (last write wins on the activity timestamp).

mod store;
mod sweep;

pub use store::MemoryStore;
pub use sweep::Sweeper;

#[cfg(test)]
mod tests;
