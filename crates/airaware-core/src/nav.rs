//! Navigation shell: which views exist, what the header offers, and who
//! may see the dashboard.
//!
//! Everything here is a pure function of the current route, the session
//! store state and the viewport width, except the mobile-menu flag which
//! `NavShell` keeps as local UI state.

use crate::auth::{Session, SessionStore};

/// Viewports narrower than this (in terminal columns) use the compact layout
pub const COMPACT_BREAKPOINT: u16 = 80;

/// Initials shown when the user has no usable name
const FALLBACK_INITIALS: &str = "U";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    About,
    Login,
    Signup,
    NotFound,
}

/// Header links, in display order
pub const PRIMARY_NAV: [Route; 3] = [Route::Home, Route::Dashboard, Route::About];

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/dashboard" => Route::Dashboard,
            "/about" => Route::About,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::About => "/about",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::About => "About",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::NotFound => "Not Found",
        }
    }

    /// Only the dashboard requires a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Inline links and account area
    Wide,
    /// Menu toggle only; links and account area live in the mobile menu
    Compact,
}

impl LayoutMode {
    pub fn from_width(width: u16) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

/// Snapshot of the session store the shell decides on
#[derive(Debug, Clone, Copy)]
pub struct AuthView<'a> {
    pub loading: bool,
    pub user: Option<&'a Session>,
}

impl<'a> AuthView<'a> {
    pub fn of(store: &'a SessionStore) -> Self {
        Self {
            loading: store.is_loading(),
            user: store.user(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountArea {
    /// Signed in: avatar, name, Profile and Log out entries
    UserMenu { name: String, initials: String },
    /// Signed out: Login and Sign Up buttons
    Guest,
}

impl AccountArea {
    fn for_user(user: Option<&Session>) -> Self {
        match user {
            Some(session) => {
                let initials = session.initials();
                AccountArea::UserMenu {
                    name: session.name.clone(),
                    initials: if initials.is_empty() {
                        FALLBACK_INITIALS.to_string()
                    } else {
                        initials
                    },
                }
            }
            None => AccountArea::Guest,
        }
    }
}

/// What the header should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView {
    pub layout: LayoutMode,
    pub links: Vec<NavLink>,
    pub account: Option<AccountArea>,
    /// `Some(open)` when the menu toggle is shown
    pub menu_toggle: Option<bool>,
}

/// Access decision for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    /// Session store still initializing; show a placeholder
    Pending,
    Redirect(Route),
}

#[derive(Debug, Default)]
pub struct NavShell {
    mobile_menu_open: bool,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Navigating anywhere closes the mobile menu
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn view(&self, route: Route, auth: AuthView<'_>, width: u16) -> ShellView {
        let layout = LayoutMode::from_width(width);
        let expanded = match layout {
            LayoutMode::Wide => true,
            LayoutMode::Compact => self.mobile_menu_open,
        };

        let links = if expanded {
            PRIMARY_NAV
                .iter()
                .map(|&r| NavLink {
                    route: r,
                    active: r == route,
                })
                .collect()
        } else {
            Vec::new()
        };

        ShellView {
            layout,
            links,
            account: expanded.then(|| AccountArea::for_user(auth.user)),
            menu_toggle: match layout {
                LayoutMode::Wide => None,
                LayoutMode::Compact => Some(self.mobile_menu_open),
            },
        }
    }

    pub fn guard(route: Route, auth: AuthView<'_>) -> Access {
        if !route.is_protected() {
            return Access::Render;
        }
        if auth.loading {
            Access::Pending
        } else if auth.is_authenticated() {
            Access::Render
        } else {
            Access::Redirect(Route::Login)
        }
    }
}
