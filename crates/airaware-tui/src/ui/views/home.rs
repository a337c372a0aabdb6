use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use airaware_core::aqi::AqiCategory;

use crate::app::App;
use crate::ui::styles;

const FEATURES: [(&str, &str); 4] = [
    ("AI Predictions", "Forecasts of pollution levels for the days ahead."),
    ("Health Alerts", "Warnings when air quality reaches unhealthy levels."),
    ("Real-time Data", "Up-to-date readings for your location."),
    ("Recommendations", "Personalized advice based on current conditions."),
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  AI-Powered ", styles::title_style()),
            Span::styled("Real-time Air Quality", styles::heading_style()),
        ]),
        Line::from(Span::styled(
            "  Monitor, predict and understand the air you breathe.",
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("  Key Features", styles::heading_style())),
    ];

    for (name, desc) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<18}", name), styles::highlight_style()),
            Span::styled(desc, styles::list_item_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Understanding Air Quality",
        styles::heading_style(),
    )));
    lines.push(Line::from(Span::styled(
        "  Air Quality Index (AQI) Levels",
        styles::muted_style(),
    )));
    for category in AqiCategory::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    ● {} ({})", category.label(), category.range()),
                styles::aqi_style(category),
            ),
            Span::styled(format!("  {}", category.description()), styles::muted_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Ready to monitor your air quality?",
        styles::heading_style(),
    )));
    let call_to_action = if app.store.is_authenticated() {
        "  Press [2] to open your dashboard."
    } else {
        "  Press [s] to create an account or [l] to log in."
    };
    lines.push(Line::from(Span::styled(call_to_action, styles::success_style())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
