//! Authentication stub for the demo dashboard.
//!
//! This module provides:
//! - `SessionStore`: the single signed-in user, with simulated login latency
//! - `SessionStorage`: the durable record the session is mirrored to
//!
//! There is no real authentication; any non-empty email with a long
//! enough password is accepted.

pub mod session;
pub mod storage;

pub use session::{Session, SessionStore};
pub use storage::{FileStorage, KeyringStorage, MemoryStorage, SessionStorage, StorageBackend};
