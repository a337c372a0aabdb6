use ratatui::style::{Color, Modifier, Style};

use airaware_core::aqi::{AqiCategory, Metric};
use airaware_core::NotificationLevel;

// Color palette
pub const PRIMARY: Color = Color::Rgb(56, 132, 220);
pub const SECONDARY: Color = Color::Rgb(72, 176, 152);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

// AQI band colors
pub const AQI_GOOD: Color = Color::Rgb(0, 178, 80);
pub const AQI_MODERATE: Color = Color::Rgb(230, 190, 0);
pub const AQI_UNHEALTHY: Color = Color::Rgb(230, 110, 0);
pub const AQI_HAZARDOUS: Color = Color::Rgb(150, 0, 80);

// Chart series colors
pub const SERIES_AQI: Color = Color::Rgb(14, 165, 233);
pub const SERIES_PM25: Color = Color::Rgb(16, 185, 129);
pub const SERIES_PM10: Color = Color::Rgb(99, 102, 241);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn nav_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn aqi_color(category: AqiCategory) -> Color {
    match category {
        AqiCategory::Good => AQI_GOOD,
        AqiCategory::Moderate => AQI_MODERATE,
        AqiCategory::Unhealthy => AQI_UNHEALTHY,
        AqiCategory::Hazardous => AQI_HAZARDOUS,
    }
}

pub fn aqi_style(category: AqiCategory) -> Style {
    Style::default()
        .fg(aqi_color(category))
        .add_modifier(Modifier::BOLD)
}

pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Aqi => SERIES_AQI,
        Metric::Pm25 => SERIES_PM25,
        Metric::Pm10 => SERIES_PM10,
    }
}

pub fn notification_style(level: NotificationLevel) -> Style {
    match level {
        NotificationLevel::Success => success_style(),
        NotificationLevel::Error => error_style(),
        NotificationLevel::Info => highlight_style(),
    }
}
