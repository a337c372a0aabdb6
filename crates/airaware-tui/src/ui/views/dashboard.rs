use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph, Sparkline, Wrap},
    Frame,
};

use airaware_core::aqi::{
    self, Metric, CURRENT_CONDITIONS, FORECAST, HEALTH_RECOMMENDATIONS, HOURLY_READINGS,
    POLLUTANT_READINGS, POLLUTION_SOURCES,
};

use crate::app::App;
use crate::ui::styles;

fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false))
        .title(Span::styled(format!(" {} ", title), styles::heading_style()))
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Location search
            Constraint::Length(4), // Conditions
            Constraint::Min(8),    // Charts
            Constraint::Length(7), // Sources, readings, recommendations
        ])
        .split(area);

    render_greeting(frame, app, rows[0]);
    render_search(frame, app, rows[1]);
    render_conditions(frame, rows[2]);
    render_charts(frame, app.metric, rows[3]);
    render_details(frame, rows[4]);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let search = &app.search;
    let field = if search.query.is_empty() && !search.editing {
        Span::styled("Search for a location...", styles::muted_style())
    } else {
        let cursor = if search.editing { "▌" } else { "" };
        Span::styled(format!("{}{}", search.query, cursor), styles::list_item_style())
    };
    let button = if search.is_searching() {
        Span::styled("  Searching...", styles::highlight_style())
    } else if search.editing {
        Span::styled("  [Enter] Search  [Esc] Cancel", styles::muted_style())
    } else {
        Span::styled("  [/] Search", styles::muted_style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(search.editing));
    let line = Line::from(vec![Span::raw(" "), field, button]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Tab strip for the metric switcher, active tab highlighted
fn metric_tabs(active: Metric) -> Line<'static> {
    let mut spans = vec![Span::styled(" [f] ", styles::muted_style())];
    for (i, metric) in Metric::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(metric.label(), styles::nav_style(*metric == active)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let name = app.store.user().map(|u| u.name.as_str()).unwrap_or("there");
    let line = Line::from(vec![
        Span::styled(" Air Quality Dashboard", styles::title_style()),
        Span::styled(format!("  Welcome back, {}.", name), styles::list_item_style()),
        Span::styled(
            format!("  Updated {}", Local::now().format("%b %d, %Y %H:%M")),
            styles::muted_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_conditions(frame: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let category = CURRENT_CONDITIONS.category();
    let values = [
        ("Current Location", CURRENT_CONDITIONS.location.to_string(), styles::list_item_style()),
        ("Temperature", format!("{}°C", CURRENT_CONDITIONS.temperature_c), styles::list_item_style()),
        ("Humidity", format!("{}%", CURRENT_CONDITIONS.humidity_pct), styles::list_item_style()),
        ("Wind Speed", format!("{} km/h", CURRENT_CONDITIONS.wind_kmh), styles::list_item_style()),
        (
            "AQI",
            format!("{} {}", CURRENT_CONDITIONS.aqi, category.label()),
            styles::aqi_style(category),
        ),
    ];

    for ((title, value, style), cell) in values.into_iter().zip(cells.iter()) {
        let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", value), style)))
            .block(card(title));
        frame.render_widget(paragraph, *cell);
    }
}

fn render_charts(frame: &mut Frame, metric: Metric, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(columns[0]);

    let category = CURRENT_CONDITIONS.category();
    let status = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", category.label()), styles::aqi_style(category)),
            Span::styled(
                format!("Live air quality status for {}", CURRENT_CONDITIONS.location),
                styles::muted_style(),
            ),
        ]),
        Line::from(Span::styled(format!(" {}", category.description()), styles::muted_style())),
    ];
    frame.render_widget(
        Paragraph::new(status)
            .block(card("Current Air Quality"))
            .wrap(Wrap { trim: true }),
        left[0],
    );

    let hourly: Vec<u64> = HOURLY_READINGS
        .iter()
        .map(|r| u64::from(metric.hourly(r)))
        .collect();
    let peak = aqi::peak_reading(metric);
    let first = HOURLY_READINGS.first().map(|r| r.time).unwrap_or_default();
    let last = HOURLY_READINGS.last().map(|r| r.time).unwrap_or_default();
    let sparkline = Sparkline::default()
        .block(card(&format!(
            "{} today {}-{} (peak {} at {})",
            metric.label(),
            first,
            last,
            metric.hourly(peak),
            peak.time
        )))
        .data(&hourly)
        .style(Style::default().fg(styles::metric_color(metric)));
    frame.render_widget(sparkline, left[1]);

    let forecast: Vec<(&str, u64)> = FORECAST
        .iter()
        .map(|day| (day.day, u64::from(metric.forecast(day))))
        .collect();
    let chart = BarChart::default()
        .block(card("Air Quality Forecast - next 7 days").title_bottom(metric_tabs(metric)))
        .data(forecast.as_slice())
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(styles::metric_color(metric)))
        .value_style(styles::selected_style());
    frame.render_widget(chart, columns[1]);
}

fn render_details(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(22),
            Constraint::Percentage(46),
        ])
        .split(area);

    let sources_block = card("Pollution Sources");
    let inner = sources_block.inner(columns[0]);
    frame.render_widget(sources_block, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); POLLUTION_SOURCES.len()])
        .split(inner);
    for ((name, pct), row) in POLLUTION_SOURCES.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(styles::SECONDARY).bg(styles::HIGHLIGHT))
            .percent(*pct as u16)
            .label(format!("{} {}%", name, pct));
        frame.render_widget(gauge, *row);
    }

    let readings: Vec<Line> = POLLUTANT_READINGS
        .iter()
        .map(|reading| {
            Line::from(vec![
                Span::styled(format!(" {:<11}", reading.name), styles::muted_style()),
                Span::styled(
                    format!("{} {}", reading.value, reading.unit),
                    styles::list_item_style(),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(readings).block(card("Pollutants")), columns[1]);

    let tips: Vec<Line> = HEALTH_RECOMMENDATIONS
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled(" • ", styles::highlight_style()),
                Span::styled(*tip, styles::list_item_style()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(tips)
            .block(card("Health Recommendations"))
            .wrap(Wrap { trim: true }),
        columns[2],
    );
}
