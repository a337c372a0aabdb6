use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use airaware_core::auth::session::MIN_PASSWORD_LENGTH;

use crate::app::{App, AuthMode, FormField};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

/// Visible width of a text field
const FIELD_WIDTH: usize = 24;

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    // Show the tail of long values so the cursor stays visible
    let shown: String = {
        let count = value.chars().count();
        value.chars().skip(count.saturating_sub(FIELD_WIDTH)).collect()
    };
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::styled(format!("   {:>9}: [", label), styles::muted_style()),
        Span::styled(format!("{:<width$}{}", shown, cursor, width = FIELD_WIDTH), style),
        Span::styled("]", styles::muted_style()),
    ])
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(mode) = app.auth_mode() else {
        return;
    };
    let focus = app.form.focus(mode);
    let pending = app.pending == Some(mode);

    let (title, button, busy, switch_hint) = match mode {
        AuthMode::Login => (
            "Log in to AirAware",
            "Login",
            "Signing in...",
            "No account yet? Tab to the button, then [s] to sign up",
        ),
        AuthMode::Signup => (
            "Create an account",
            "Sign Up",
            "Creating account...",
            "Have an account? Tab to the button, then [l] to log in",
        ),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}", title), styles::title_style())),
        Line::from(""),
    ];

    if mode == AuthMode::Signup {
        lines.push(field_line("Name", &app.form.name, focus == FormField::Name));
    }
    lines.push(field_line("Email", &app.form.email, focus == FormField::Email));
    let masked = "*".repeat(app.form.password.chars().count());
    lines.push(field_line("Password", &masked, focus == FormField::Password));

    lines.push(Line::from(""));
    if pending {
        lines.push(Line::from(Span::styled(
            format!("             {}", busy),
            styles::highlight_style(),
        )));
    } else if focus == FormField::Button {
        lines.push(Line::from(vec![
            Span::raw("             ["),
            Span::styled(format!(" ▶ {} ◀ ", button), styles::selected_style()),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("             ["),
            Span::styled(format!("   {}   ", button), styles::list_item_style()),
            Span::raw("]"),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("   Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        styles::muted_style(),
    )));
    lines.push(Line::from(Span::styled(format!("   {}", switch_hint), styles::muted_style())));

    let height = lines.len() as u16 + 2;
    let form_area = centered_rect_fixed(64, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(!pending))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), form_area);
}
