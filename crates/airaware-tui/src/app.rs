//! Application state management for AirAware.
//!
//! `App` owns the session store and the navigation shell, tracks the
//! current view, the login/signup form and the transient notifications
//! shown in the status bar.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use airaware_core::aqi::Metric;
use airaware_core::nav::{AuthView, LayoutMode};
use airaware_core::notify::NotificationReceiver;
use airaware_core::{Access, Config, NavShell, Notification, Notifier, Route, SessionStore};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for name input
const MAX_NAME_LENGTH: usize = 50;

/// Maximum length for email input
const MAX_EMAIL_LENGTH: usize = 64;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// How long each notification stays in the status bar
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Environment variable used to pre-fill the email field
const EMAIL_ENV_VAR: &str = "AIRAWARE_EMAIL";

/// Maximum length for the location search query
const MAX_QUERY_LENGTH: usize = 48;

/// How long a location search appears to run
const SEARCH_DURATION: Duration = Duration::from_secs(1);

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Which of the two auth forms a route shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::Login => Some(AuthMode::Login),
            Route::Signup => Some(AuthMode::Signup),
            _ => None,
        }
    }

    fn fields(&self) -> &'static [FormField] {
        match self {
            AuthMode::Login => &[FormField::Email, FormField::Password, FormField::Button],
            AuthMode::Signup => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::Button,
            ],
        }
    }
}

/// Auth form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    Button,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    focus: Option<FormField>,
}

impl AuthForm {
    pub fn focus(&self, mode: AuthMode) -> FormField {
        self.focus
            .filter(|f| mode.fields().contains(f))
            .unwrap_or(mode.fields()[0])
    }

    pub fn focus_next(&mut self, mode: AuthMode) {
        self.step_focus(mode, 1);
    }

    pub fn focus_prev(&mut self, mode: AuthMode) {
        self.step_focus(mode, mode.fields().len() - 1);
    }

    fn step_focus(&mut self, mode: AuthMode, step: usize) {
        let fields = mode.fields();
        let current = self.focus(mode);
        let index = fields.iter().position(|&f| f == current).unwrap_or(0);
        self.focus = Some(fields[(index + step) % fields.len()]);
    }

    /// Start the form over, keeping the email the user already typed
    pub fn reset(&mut self, mode: AuthMode) {
        self.name.clear();
        self.password.clear();
        self.focus = Some(if self.email.is_empty() || mode == AuthMode::Signup {
            mode.fields()[0]
        } else {
            FormField::Password
        });
    }

    pub fn push_char(&mut self, mode: AuthMode, c: char) {
        match self.focus(mode) {
            FormField::Name => {
                if can_add_char(self.name.chars().count(), MAX_NAME_LENGTH, c) {
                    self.name.push(c);
                }
            }
            FormField::Email => {
                if can_add_char(self.email.chars().count(), MAX_EMAIL_LENGTH, c) {
                    self.email.push(c);
                }
            }
            FormField::Password => {
                if can_add_char(self.password.chars().count(), MAX_PASSWORD_LENGTH, c) {
                    self.password.push(c);
                }
            }
            FormField::Button => {}
        }
    }

    pub fn pop_char(&mut self, mode: AuthMode) {
        match self.focus(mode) {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Email => {
                self.email.pop();
            }
            FormField::Password => {
                self.password.pop();
            }
            FormField::Button => {}
        }
    }
}

// ============================================================================
// Location Search
// ============================================================================

/// Dashboard location search. Submitting only shows a busy state for a
/// moment; the dashboard always shows the same location.
#[derive(Debug, Default)]
pub struct LocationSearch {
    pub query: String,
    pub editing: bool,
    started_at: Option<Instant>,
}

impl LocationSearch {
    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn push_char(&mut self, c: char) {
        if can_add_char(self.query.chars().count(), MAX_QUERY_LENGTH, c) {
            self.query.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Start a search. Ignored while one is already running.
    pub fn submit(&mut self, now: Instant) {
        self.editing = false;
        if self.is_searching() {
            return;
        }
        debug!(query = %self.query, "Location search");
        self.started_at = Some(now);
    }

    pub fn is_searching(&self) -> bool {
        self.started_at.is_some()
    }

    /// Finish the search once its time is up
    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.started_at {
            if now.duration_since(started) >= SEARCH_DURATION {
                self.started_at = None;
            }
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Notifications waiting for, or currently occupying, the status bar
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Notification>,
    current: Option<(Notification, Instant)>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Expire the visible toast and promote the next one
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.current {
            if now.duration_since(shown_at) < TOAST_DURATION {
                return;
            }
            self.current = None;
        }
        if let Some(next) = self.queue.pop_front() {
            self.current = Some((next, now));
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    pub store: SessionStore,
    pub shell: NavShell,

    pub state: AppState,
    pub route: Route,
    pub viewport_width: u16,

    pub form: AuthForm,
    /// Auth operation submitted but not yet run
    pub pending: Option<AuthMode>,

    pub search: LocationSearch,
    /// Series drawn on the dashboard charts
    pub metric: Metric,

    pub toasts: Toasts,
    notifications: NotificationReceiver,
}

impl App {
    pub fn new(config: Config) -> Self {
        let email = initial_email(std::env::var(EMAIL_ENV_VAR).ok(), &config);
        Self::with_email(config, email)
    }

    fn with_email(config: Config, email: String) -> Self {
        debug!(storage = ?config.storage, latency_ms = config.simulated_latency_ms, "App::new()");

        let (notifier, notifications) = Notifier::channel();
        let store =
            SessionStore::new(config.open_storage(), notifier).with_latency(config.latency());

        Self {
            config,
            store,
            shell: NavShell::new(),
            state: AppState::Normal,
            route: Route::Home,
            viewport_width: u16::MAX,
            form: AuthForm {
                email,
                ..Default::default()
            },
            pending: None,
            search: LocationSearch::default(),
            metric: Metric::default(),
            toasts: Toasts::default(),
            notifications,
        }
    }

    /// Restore any stored session. Must run before the first frame.
    pub fn initialize(&mut self) {
        self.store.initialize();
        self.enforce_access();
    }

    pub fn auth_view(&self) -> AuthView<'_> {
        AuthView::of(&self.store)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_width(self.viewport_width)
    }

    pub fn auth_mode(&self) -> Option<AuthMode> {
        AuthMode::for_route(self.route)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Open a view by path, as given on the command line
    pub fn open_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    pub fn navigate(&mut self, route: Route) {
        self.shell.close_menu();
        if route == self.route {
            return;
        }
        debug!(from = self.route.path(), to = route.path(), "Navigating");
        self.route = route;
        if let Some(mode) = self.auth_mode() {
            self.form.reset(mode);
        }
        self.enforce_access();
    }

    /// Apply the shell's access decision to the current route
    fn enforce_access(&mut self) {
        if let Access::Redirect(target) = NavShell::guard(self.route, self.auth_view()) {
            info!(from = self.route.path(), to = target.path(), "Redirecting");
            self.route = target;
            if let Some(mode) = self.auth_mode() {
                self.form.reset(mode);
            }
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Queue the current form for submission. Ignored while one is pending.
    pub fn submit_auth(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.auth_mode();
    }

    /// Run the queued auth operation, waiting out the simulated latency
    pub async fn process_pending(&mut self) {
        let Some(mode) = self.pending else {
            return;
        };

        let succeeded = match mode {
            AuthMode::Login => self.store.login(&self.form.email, &self.form.password).await,
            AuthMode::Signup => {
                self.store
                    .signup(&self.form.name, &self.form.email, &self.form.password)
                    .await
            }
        };
        self.pending = None;

        if succeeded {
            self.form.password.clear();
            self.remember_email();
            self.navigate(Route::Dashboard);
        }
    }

    fn remember_email(&mut self) {
        if self.config.last_email.as_deref() == Some(self.form.email.as_str()) {
            return;
        }
        self.config.last_email = Some(self.form.email.clone());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }
    }

    pub fn logout(&mut self) {
        self.shell.close_menu();
        self.store.logout();
        self.enforce_access();
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Move delivered notifications into the toast queue and expire old ones
    pub fn check_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.toasts.push(notification);
        }
        self.toasts.tick(Instant::now());
    }

    /// Advance everything that expires on its own
    pub fn tick(&mut self) {
        self.check_notifications();
        self.search.tick(Instant::now());
    }
}

/// Email to pre-fill: the environment wins over the last one used
fn initial_email(from_env: Option<String>, config: &Config) -> String {
    from_env
        .filter(|email| !email.is_empty())
        .or_else(|| config.last_email.clone())
        .unwrap_or_default()
}

#[cfg(test)]
impl App {
    /// Initialized app with in-memory storage and no simulated latency.
    /// The email is fixed so the environment cannot change it.
    pub fn in_memory() -> Self {
        let config = Config {
            storage: airaware_core::auth::StorageBackend::Memory,
            simulated_latency_ms: 0,
            last_email: Some("a@b.com".to_string()),
        };
        let mut app = App::with_email(config, "a@b.com".to_string());
        app.initialize();
        app
    }
}

// ============================================================================
// Input Validation
// ============================================================================

/// Check if a character is valid for text input (printable, non-control)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a character may be appended to a field of the given length
pub fn can_add_char(current_len: usize, max_len: usize, c: char) -> bool {
    current_len < max_len && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use airaware_core::NotificationLevel;

    fn note(message: &str) -> Notification {
        Notification {
            level: NotificationLevel::Info,
            message: message.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[test]
    fn test_dashboard_redirects_to_login_when_signed_out() {
        let mut app = App::in_memory();
        app.navigate(Route::Dashboard);
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.form.focus(AuthMode::Login), FormField::Password);
    }

    #[test]
    fn test_navigate_closes_mobile_menu() {
        let mut app = App::in_memory();
        app.shell.toggle_menu();
        app.navigate(Route::About);
        assert!(!app.shell.is_menu_open());
        assert_eq!(app.route, Route::About);
    }

    #[tokio::test]
    async fn test_login_flow_lands_on_dashboard() {
        let mut app = App::in_memory();
        app.navigate(Route::Login);
        app.form.password = "123456".to_string();

        app.submit_auth();
        assert_eq!(app.pending, Some(AuthMode::Login));
        app.process_pending().await;

        assert!(app.pending.is_none());
        assert!(app.store.is_authenticated());
        assert_eq!(app.route, Route::Dashboard);
        assert!(app.form.password.is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_stays_on_form() {
        let mut app = App::in_memory();
        app.navigate(Route::Login);
        app.form.password = "123".to_string();

        app.submit_auth();
        app.process_pending().await;

        assert!(!app.store.is_authenticated());
        assert_eq!(app.route, Route::Login);
        app.check_notifications();
        assert_eq!(
            app.toasts.current().map(|n| n.message.as_str()),
            Some("Invalid credentials")
        );
    }

    #[tokio::test]
    async fn test_logout_on_dashboard_redirects() {
        let mut app = App::in_memory();
        app.navigate(Route::Signup);
        app.form.name = "Jane".to_string();
        app.form.password = "abcdef".to_string();
        app.submit_auth();
        app.process_pending().await;
        assert_eq!(app.route, Route::Dashboard);

        app.logout();
        assert!(!app.store.is_authenticated());
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_open_path_applies_access_guard() {
        let mut app = App::in_memory();
        app.open_path("/dashboard");
        assert_eq!(app.route, Route::Login);

        app.open_path("/about");
        assert_eq!(app.route, Route::About);

        app.open_path("/no-such-page");
        assert_eq!(app.route, Route::NotFound);
    }

    #[tokio::test]
    async fn test_open_path_reaches_dashboard_when_signed_in() {
        let mut app = App::in_memory();
        app.navigate(Route::Login);
        app.form.password = "123456".to_string();
        app.submit_auth();
        app.process_pending().await;
        app.navigate(Route::Home);

        app.open_path("/dashboard");
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_submit_ignored_outside_auth_forms() {
        let mut app = App::in_memory();
        app.submit_auth();
        assert!(app.pending.is_none());
    }

    // -------------------------------------------------------------------------
    // Form
    // -------------------------------------------------------------------------

    #[test]
    fn test_form_focus_cycles_per_mode() {
        let mut form = AuthForm::default();
        assert_eq!(form.focus(AuthMode::Signup), FormField::Name);
        form.focus_next(AuthMode::Signup);
        assert_eq!(form.focus(AuthMode::Signup), FormField::Email);
        form.focus_prev(AuthMode::Signup);
        form.focus_prev(AuthMode::Signup);
        assert_eq!(form.focus(AuthMode::Signup), FormField::Button);

        // Name is not part of the login form
        let mut form = AuthForm::default();
        assert_eq!(form.focus(AuthMode::Login), FormField::Email);
        form.focus_prev(AuthMode::Login);
        assert_eq!(form.focus(AuthMode::Login), FormField::Button);
    }

    #[test]
    fn test_form_edits_focused_field() {
        let mut form = AuthForm::default();
        form.push_char(AuthMode::Login, 'a');
        form.focus_next(AuthMode::Login);
        form.push_char(AuthMode::Login, 'x');
        form.push_char(AuthMode::Login, 'y');
        form.pop_char(AuthMode::Login);
        assert_eq!(form.email, "a");
        assert_eq!(form.password, "x");
    }

    #[test]
    fn test_can_add_char() {
        assert!(can_add_char(0, MAX_PASSWORD_LENGTH, 'a'));
        assert!(can_add_char(127, MAX_PASSWORD_LENGTH, '!'));
        assert!(!can_add_char(128, MAX_PASSWORD_LENGTH, 'a'));
        // Control characters rejected
        assert!(!can_add_char(0, MAX_NAME_LENGTH, '\x00'));
        assert!(!can_add_char(0, MAX_EMAIL_LENGTH, '\n'));
        assert!(!can_add_char(0, MAX_EMAIL_LENGTH, '\t'));
    }

    #[test]
    fn test_initial_email_prefers_environment() {
        let config = Config {
            last_email: Some("last@b.com".to_string()),
            ..Config::default()
        };
        assert_eq!(initial_email(Some("env@b.com".to_string()), &config), "env@b.com");
        assert_eq!(initial_email(Some(String::new()), &config), "last@b.com");
        assert_eq!(initial_email(None, &config), "last@b.com");
        assert_eq!(initial_email(None, &Config::default()), "");
    }

    #[test]
    fn test_in_memory_app_uses_fixed_email() {
        let app = App::in_memory();
        assert_eq!(app.form.email, "a@b.com");
    }

    // -------------------------------------------------------------------------
    // Location search
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_runs_for_a_second() {
        let mut search = LocationSearch::default();
        let start = Instant::now();
        search.start_editing();
        for c in "Paris".chars() {
            search.push_char(c);
        }
        search.submit(start);
        assert!(!search.editing);
        assert!(search.is_searching());

        search.tick(start + Duration::from_millis(500));
        assert!(search.is_searching());

        search.tick(start + SEARCH_DURATION);
        assert!(!search.is_searching());
        assert_eq!(search.query, "Paris");
    }

    #[test]
    fn test_search_submit_ignored_while_running() {
        let mut search = LocationSearch::default();
        let start = Instant::now();
        search.submit(start);

        // A second submit does not restart the clock
        search.submit(start + Duration::from_millis(900));
        search.tick(start + SEARCH_DURATION);
        assert!(!search.is_searching());
    }

    // -------------------------------------------------------------------------
    // Toasts
    // -------------------------------------------------------------------------

    #[test]
    fn test_toasts_show_in_order_and_expire() {
        let mut toasts = Toasts::default();
        let start = Instant::now();
        toasts.push(note("first"));
        toasts.push(note("second"));

        toasts.tick(start);
        assert_eq!(toasts.current().unwrap().message, "first");

        toasts.tick(start + Duration::from_secs(1));
        assert_eq!(toasts.current().unwrap().message, "first");

        toasts.tick(start + TOAST_DURATION);
        assert_eq!(toasts.current().unwrap().message, "second");

        toasts.tick(start + TOAST_DURATION * 2);
        assert!(toasts.current().is_none());
    }
}
