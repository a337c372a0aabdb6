//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use airaware_core::nav::{LayoutMode, PRIMARY_NAV};
use airaware_core::Route;

use crate::app::{App, AppState, AuthMode, FormField};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Nothing is accepted while an auth request is in flight
    if app.pending.is_some() {
        return false;
    }

    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    if app.route == Route::Dashboard && app.search.editing {
        handle_search_input(app, key);
        return false;
    }

    if let Some(mode) = app.auth_mode() {
        if handle_form_input(app, mode, key) {
            return false;
        }
    }

    handle_global_input(app, key);
    false
}

/// Keys for the login/signup forms. Returns false when the key was not
/// consumed, so the global shortcuts can handle it.
fn handle_form_input(app: &mut App, mode: AuthMode, key: KeyEvent) -> bool {
    let on_button = app.form.focus(mode) == FormField::Button;

    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Home);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.form.focus_next(mode);
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.form.focus_prev(mode);
        }
        KeyCode::Enter => {
            if on_button {
                app.submit_auth();
            } else {
                app.form.focus_next(mode);
            }
        }
        KeyCode::Backspace => {
            app.form.pop_char(mode);
        }
        KeyCode::Char(c) if !on_button => {
            app.form.push_char(mode, c);
        }
        _ => return false,
    }
    true
}

/// Keys while the dashboard search box has focus
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.search.stop_editing(),
        KeyCode::Enter => app.search.submit(Instant::now()),
        KeyCode::Backspace => app.search.pop_char(),
        KeyCode::Char(c) => app.search.push_char(c),
        _ => {}
    }
}

fn handle_global_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(&route) = PRIMARY_NAV.get(index) {
                app.navigate(route);
            }
        }
        KeyCode::Char('l') => {
            app.navigate(Route::Login);
        }
        KeyCode::Char('s') => {
            app.navigate(Route::Signup);
        }
        KeyCode::Char('o') => {
            if app.store.is_authenticated() {
                app.logout();
            }
        }
        KeyCode::Char('/') if app.route == Route::Dashboard => {
            app.search.start_editing();
        }
        KeyCode::Char('f') if app.route == Route::Dashboard => {
            app.metric = app.metric.next();
        }
        KeyCode::Char('m') => {
            if app.layout_mode() == LayoutMode::Compact {
                app.shell.toggle_menu();
            }
        }
        KeyCode::Esc => {
            app.shell.close_menu();
        }
        _ => {}
    }
}
