//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Header, status bar and overlays around the current view
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `views`: Per-route content (home, about, dashboard, auth forms)

pub mod input;
pub mod render;
pub mod styles;
pub mod views;
