//! AirAware core: the mock session store, the navigation shell and the
//! sample air-quality data behind the dashboard demo.

pub mod aqi;
pub mod auth;
pub mod config;
pub mod error;
pub mod nav;
pub mod notify;

pub use auth::{Session, SessionStore};
pub use config::Config;
pub use error::StorageError;
pub use nav::{Access, NavShell, Route};
pub use notify::{Notification, NotificationLevel, Notifier};
