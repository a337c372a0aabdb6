use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::storage::SessionStorage;
use crate::error::StorageError;
use crate::notify::Notifier;

/// Simulated round-trip time for login and signup (in milliseconds)
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Shortest password accepted by login and signup
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Length of generated session ids
const SESSION_ID_LENGTH: usize = 7;

const SESSION_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The signed-in user, as held in memory and mirrored to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Session {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Avatar initials: first letter of each word of the name, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Random opaque id of lowercase base-36 characters
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SESSION_ID_LENGTH)
        .map(|_| SESSION_ID_ALPHABET[rng.gen_range(0..SESSION_ID_ALPHABET.len())] as char)
        .collect()
}

/// Part of an email address before the first `@`, or the whole string
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Owner of the single in-memory session.
///
/// Starts out loading; `initialize` restores a previously stored session
/// once. Login and signup wait out a simulated network delay before
/// deciding, and report their outcome only through the returned bool and
/// the notifier.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    notifier: Notifier,
    latency: Duration,
    user: Option<Session>,
    loading: bool,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>, notifier: Notifier) -> Self {
        Self {
            storage,
            notifier,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            user: None,
            loading: true,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Restore the stored session, if any. Only the first call reads storage.
    pub fn initialize(&mut self) {
        if !self.loading {
            debug!("Session store already initialized");
            return;
        }

        self.user = self.restore();
        self.loading = false;
        info!(authenticated = self.user.is_some(), "Session store initialized");
    }

    fn restore(&self) -> Option<Session> {
        let contents = match self.storage.get() {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Discarding unparseable stored session");
                if let Err(e) = self.storage.delete() {
                    warn!(error = %e, "Failed to remove unparseable stored session");
                }
                None
            }
        }
    }

    pub fn user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        if email.is_empty() || !password_long_enough(password) {
            info!("Login rejected");
            self.notifier.error("Invalid credentials");
            return false;
        }

        let session = Session::new(generate_session_id(), email_local_part(email), email);
        if let Err(e) = self.establish(session) {
            warn!(error = %e, "Failed to persist session");
            self.notifier.error("Login failed");
            return false;
        }

        info!("Login successful");
        self.notifier.success("Login successful!");
        true
    }

    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        if name.is_empty() || email.is_empty() || !password_long_enough(password) {
            info!("Signup rejected");
            self.notifier.error("Invalid details provided");
            return false;
        }

        let session = Session::new(generate_session_id(), name, email);
        if let Err(e) = self.establish(session) {
            warn!(error = %e, "Failed to persist session");
            self.notifier.error("Signup failed");
            return false;
        }

        info!("Signup successful");
        self.notifier.success("Account created successfully!");
        true
    }

    /// Drop the session from memory and storage. Always succeeds.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.storage.delete() {
            warn!(error = %e, "Failed to remove stored session");
        }
        info!("Logged out");
        self.notifier.info("Logged out");
    }

    /// Persist first so a storage failure leaves memory untouched
    fn establish(&mut self, session: Session) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(&session)?;
        self.storage.set(&contents)?;
        self.user = Some(session);
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryStorage;
    use crate::notify::{Notification, NotificationLevel, NotificationReceiver};

    fn store_with(storage: &MemoryStorage) -> (SessionStore, NotificationReceiver) {
        let (notifier, rx) = Notifier::channel();
        let mut store = SessionStore::new(Box::new(storage.clone()), notifier)
            .with_latency(Duration::ZERO);
        store.initialize();
        (store, rx)
    }

    fn drain(rx: &mut NotificationReceiver) -> Vec<Notification> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _contents: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn delete(&self) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    // -------------------------------------------------------------------------
    // Login
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_login_derives_name_from_email() {
        let storage = MemoryStorage::default();
        let (mut store, mut rx) = store_with(&storage);

        assert!(store.login("a@b.com", "123456").await);

        let user = store.user().expect("session after login");
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert!(store.is_authenticated());
        assert!(storage.get().unwrap().is_some());

        let notes = drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Success);
        assert_eq!(notes[0].message, "Login successful!");
    }

    #[tokio::test]
    async fn test_login_name_uses_first_at_sign() {
        let (mut store, _rx) = store_with(&MemoryStorage::default());
        assert!(store.login("first@second@host", "abcdef").await);
        assert_eq!(store.user().unwrap().name, "first");
    }

    #[tokio::test]
    async fn test_login_without_at_sign_uses_whole_email() {
        let (mut store, _rx) = store_with(&MemoryStorage::default());
        assert!(store.login("localonly", "abcdef").await);
        assert_eq!(store.user().unwrap().name, "localonly");
    }

    #[tokio::test]
    async fn test_login_short_password_rejected() {
        let storage = MemoryStorage::default();
        let (mut store, mut rx) = store_with(&storage);

        for password in ["", "1", "12345"] {
            assert!(!store.login("a@b.com", password).await);
        }
        assert!(store.user().is_none());
        assert!(storage.get().unwrap().is_none());

        let notes = drain(&mut rx);
        assert_eq!(notes.len(), 3);
        assert!(notes
            .iter()
            .all(|n| n.level == NotificationLevel::Error && n.message == "Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_empty_email_rejected() {
        let (mut store, _rx) = store_with(&MemoryStorage::default());
        assert!(!store.login("", "123456").await);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let (mut store, _rx) = store_with(&MemoryStorage::default());
        assert!(store.login("a@b.com", "123456").await);
        let before = store.user().cloned();

        assert!(!store.login("a@b.com", "123").await);
        assert_eq!(store.user().cloned(), before);
    }

    #[tokio::test]
    async fn test_password_length_counts_characters() {
        let (mut store, _rx) = store_with(&MemoryStorage::default());
        // Six characters, twelve bytes
        assert!(!store.login("a@b.com", "ééééé").await);
        assert!(store.login("a@b.com", "éééééé").await);
    }

    #[tokio::test]
    async fn test_login_persist_failure_leaves_state_untouched() {
        let (notifier, mut rx) = Notifier::channel();
        let mut store = SessionStore::new(Box::new(ReadOnlyStorage), notifier)
            .with_latency(Duration::ZERO);
        store.initialize();

        assert!(!store.login("a@b.com", "123456").await);
        assert!(!store.is_authenticated());

        let notes = drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Login failed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_simulated_latency() {
        let (notifier, _rx) = Notifier::channel();
        let mut store = SessionStore::new(Box::new(MemoryStorage::default()), notifier);
        store.initialize();

        let start = tokio::time::Instant::now();
        assert!(store.login("a@b.com", "123456").await);
        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_LATENCY_MS));
    }

    // -------------------------------------------------------------------------
    // Signup
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_signup_uses_supplied_name() {
        let storage = MemoryStorage::default();
        let (mut store, mut rx) = store_with(&storage);

        assert!(store.signup("Jane", "j@x.com", "abcdef").await);
        let user = store.user().unwrap();
        assert_eq!(user.name, "Jane");
        assert_eq!(user.email, "j@x.com");
        assert_eq!(user.id.len(), SESSION_ID_LENGTH);
        assert!(storage.get().unwrap().is_some());

        let notes = drain(&mut rx);
        assert_eq!(notes[0].message, "Account created successfully!");
    }

    #[tokio::test]
    async fn test_signup_rejects_missing_fields() {
        let (mut store, mut rx) = store_with(&MemoryStorage::default());

        assert!(!store.signup("", "j@x.com", "abcdef").await);
        assert!(!store.signup("Jane", "", "abcdef").await);
        assert!(!store.signup("Jane", "j@x.com", "abc").await);
        assert!(store.user().is_none());

        let notes = drain(&mut rx);
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(|n| n.message == "Invalid details provided"));
    }

    #[tokio::test]
    async fn test_signup_fails_when_record_cannot_be_written() {
        let (notifier, mut rx) = Notifier::channel();
        let mut store = SessionStore::new(Box::new(ReadOnlyStorage), notifier)
            .with_latency(Duration::ZERO);
        store.initialize();

        assert!(!store.signup("Jane", "j@x.com", "abcdef").await);
        assert!(!store.is_authenticated());

        let notes = drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Error);
        assert_eq!(notes[0].message, "Signup failed");
    }

    // -------------------------------------------------------------------------
    // Logout
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::default();
        let (mut store, mut rx) = store_with(&storage);

        assert!(store.signup("Jane", "j@x.com", "abcdef").await);
        store.logout();

        assert!(!store.is_authenticated());
        assert!(storage.get().unwrap().is_none());

        let last = drain(&mut rx).pop().unwrap();
        assert_eq!(last.level, NotificationLevel::Info);
        assert_eq!(last.message, "Logged out");
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryStorage::default();
        let (mut store, _rx) = store_with(&storage);

        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(storage.get().unwrap().is_none());
    }

    #[test]
    fn test_logout_storage_failure_still_clears_memory() {
        let mut store = SessionStore::new(Box::new(ReadOnlyStorage), Notifier::disabled());
        store.initialize();
        store.user = Some(Session::new("abc1234", "a", "a@b.com"));

        store.logout();
        assert!(!store.is_authenticated());
    }

    // -------------------------------------------------------------------------
    // Initialize
    // -------------------------------------------------------------------------

    #[test]
    fn test_loading_until_initialized() {
        let mut store = SessionStore::new(Box::new(MemoryStorage::default()), Notifier::disabled());
        assert!(store.is_loading());
        store.initialize();
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_initialize_restores_identical_session() {
        let storage = MemoryStorage::default();
        let (mut first, _rx) = store_with(&storage);
        assert!(first.login("a@b.com", "123456").await);
        let original = first.user().cloned().unwrap();
        drop(first);

        // New process, same storage
        let (restarted, _rx) = store_with(&storage);
        assert_eq!(restarted.user(), Some(&original));
    }

    #[test]
    fn test_initialize_discards_corrupt_record() {
        let storage = MemoryStorage::with_contents("{not json");
        let (store, _rx) = store_with(&storage);

        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
        assert!(storage.get().unwrap().is_none());
    }

    #[test]
    fn test_initialize_reads_storage_once() {
        let storage = MemoryStorage::with_contents(
            r#"{"id":"abc1234","name":"a","email":"a@b.com"}"#,
        );
        let (mut store, _rx) = store_with(&storage);
        assert_eq!(store.user().unwrap().id, "abc1234");

        storage
            .set(r#"{"id":"zzz9999","name":"z","email":"z@b.com"}"#)
            .unwrap();
        store.initialize();
        assert_eq!(store.user().unwrap().id, "abc1234");
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    #[test]
    fn test_generate_session_id_format() {
        let id = generate_session_id();
        assert_eq!(id.len(), SESSION_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_session_initials() {
        assert_eq!(Session::new("1", "jane doe", "j@x.com").initials(), "JD");
        assert_eq!(Session::new("1", "a", "a@b.com").initials(), "A");
        assert_eq!(Session::new("1", "Jane  Doe", "j@x.com").initials(), "JD");
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("a@b.com"), "a");
        assert_eq!(email_local_part("@b.com"), "");
        assert_eq!(email_local_part("plain"), "plain");
    }
}
