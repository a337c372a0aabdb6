use chrono::{Datelike, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use airaware_core::nav::{AccountArea, LayoutMode, NavLink, ShellView};
use airaware_core::{Access, NavShell, Route};

use crate::app::{App, AppState};

use super::styles;
use super::views::{about, auth, dashboard, home};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    let shell = app
        .shell
        .view(app.route, app.auth_view(), frame.area().width);

    render_header(frame, &shell, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if shell.layout == LayoutMode::Compact && app.shell.is_menu_open() {
        render_mobile_menu(frame, &shell, chunks[1]);
    }

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

/// Keyboard shortcut shown next to a primary navigation link
fn nav_key(route: Route) -> char {
    match route {
        Route::Home => '1',
        Route::Dashboard => '2',
        Route::About => '3',
        _ => ' ',
    }
}

fn link_spans(links: &[NavLink]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(
            format!("[{}] {}", nav_key(link.route), link.route.title()),
            styles::nav_style(link.active),
        ));
    }
    spans
}

fn account_spans(account: &AccountArea) -> Vec<Span<'static>> {
    match account {
        AccountArea::UserMenu { name, initials } => vec![
            Span::styled(format!("({}) ", initials), styles::title_style()),
            Span::styled(name.clone(), styles::list_item_style()),
            // Display only, there is no profile view
            Span::styled("  Profile", styles::muted_style()),
            Span::styled("  [o] Log out", styles::muted_style()),
        ],
        AccountArea::Guest => vec![
            Span::styled("[l] Login", styles::muted_style()),
            Span::raw("  "),
            Span::styled("[s] Sign Up", styles::highlight_style()),
        ],
    }
}

fn render_header(frame: &mut Frame, shell: &ShellView, area: Rect) {
    let title = "  ◉ AirAware";

    let mut left = vec![Span::styled(title, styles::title_style())];
    let right = match shell.menu_toggle {
        Some(open) => {
            let label = if open { "[m] ✕ Close" } else { "[m] ☰ Menu" };
            vec![Span::styled(label, styles::highlight_style())]
        }
        None => {
            left.push(Span::raw("    "));
            left.extend(link_spans(&shell.links));
            shell.account.as_ref().map(account_spans).unwrap_or_default()
        }
    };

    let used: usize = left
        .iter()
        .chain(right.iter())
        .map(|s| s.content.chars().count())
        .sum();
    let padding = (area.width as usize).saturating_sub(used + 2);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(right);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_mobile_menu(frame: &mut Frame, shell: &ShellView, area: Rect) {
    let height = (shell.links.len() as u16 + 5).min(area.height);
    let menu_area = Rect::new(area.x, area.y, area.width, height);
    frame.render_widget(Clear, menu_area);

    let mut lines: Vec<Line> = shell
        .links
        .iter()
        .map(|link| {
            let marker = if link.active { "▸ " } else { "  " };
            Line::from(Span::styled(
                format!(" {}[{}] {}", marker, nav_key(link.route), link.route.title()),
                styles::nav_style(link.active),
            ))
        })
        .collect();

    lines.push(Line::from(Span::styled(
        " ─".repeat((area.width / 2).saturating_sub(2) as usize),
        styles::muted_style(),
    )));

    if let Some(ref account) = shell.account {
        let mut spans = vec![Span::raw("   ")];
        spans.extend(account_spans(account));
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match NavShell::guard(app.route, app.auth_view()) {
        Access::Render => {}
        // Redirects are applied by the app before drawing
        Access::Pending | Access::Redirect(_) => {
            render_placeholder(frame, area, "Loading...");
            return;
        }
    }

    match app.route {
        Route::Home => home::render(frame, app, area),
        Route::Dashboard => dashboard::render(frame, app, area),
        Route::About => about::render(frame, area),
        Route::Login | Route::Signup => auth::render(frame, app, area),
        Route::NotFound => render_placeholder(frame, area, "404 - Page not found"),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let inner = centered_rect_fixed(message.len() as u16 + 4, 3, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("  {}", message),
        styles::muted_style(),
    )));
    frame.render_widget(paragraph, inner);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[?] help | [q]uit";

    let left = match app.toasts.current() {
        Some(notification) => Span::styled(
            format!(" {} ", notification.message),
            styles::notification_style(notification.level),
        ),
        None => Span::styled(
            format!(" © {} AirAware. Final Year Project. ", Local::now().year()),
            styles::muted_style(),
        ),
    };

    let right_text = format!(" {} ", shortcuts);
    let padding_len = (area.width as usize)
        .saturating_sub(left.content.chars().count())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        left,
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(48, 26, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  ◉ AirAware", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("  1/2/3     ", "Home / Dashboard / About"),
        help_line("  m         ", "Toggle menu (narrow terminals)"),
        Line::from(""),
        Line::from(Span::styled(" Account", styles::highlight_style())),
        help_line("  l         ", "Log in"),
        help_line("  s         ", "Sign up"),
        help_line("  o         ", "Log out"),
        Line::from(""),
        Line::from(Span::styled(" Forms", styles::highlight_style())),
        help_line("  Tab/↑/↓   ", "Move between fields"),
        help_line("  Enter     ", "Next field / submit"),
        help_line("  Esc       ", "Back to home"),
        Line::from(""),
        Line::from(Span::styled(" Dashboard", styles::highlight_style())),
        help_line("  /         ", "Search for a location"),
        help_line("  f         ", "Switch chart: AQI / PM2.5 / PM10"),
        Line::from(""),
        help_line("  q         ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("     Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
