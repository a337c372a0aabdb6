use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::styles;

const FRONTEND_STACK: [&str; 4] = [
    "Rust with ratatui",
    "Responsive layout for narrow and wide terminals",
    "Charts for data visualization",
    "User authentication system",
];

const BACKEND_STACK: [&str; 4] = [
    "Machine learning models for prediction",
    "Data processing pipelines",
    "API integration with weather services",
    "Cloud-based infrastructure",
];

const PARAMETERS: [(&str, &str); 4] = [
    ("Ozone (O₃)", "Formed when pollutants react in sunlight; irritates the airways."),
    ("Nitrogen Dioxide (NO₂)", "Mostly from vehicle exhaust and power plants."),
    ("Sulfur Dioxide (SO₂)", "Released by burning fossil fuels containing sulfur."),
    ("Carbon Monoxide (CO)", "Colorless gas from incomplete combustion."),
];

const MODEL_INPUTS: [&str; 5] = [
    "Historical air quality measurements from monitoring stations",
    "Weather data including temperature, humidity, wind patterns",
    "Traffic density information for urban areas",
    "Seasonal and temporal patterns that affect pollution levels",
    "Special events data (such as wildfires, construction activities)",
];

fn bullets(items: &[&'static str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", styles::highlight_style()),
                Span::styled(*item, styles::list_item_style()),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut left = vec![
        Line::from(Span::styled(" About AirAware", styles::title_style())),
        Line::from(""),
        Line::from(Span::styled(" Technology Stack", styles::heading_style())),
        Line::from(Span::styled("  Frontend", styles::highlight_style())),
    ];
    left.extend(bullets(&FRONTEND_STACK));
    left.push(Line::from(Span::styled("  Backend & AI", styles::highlight_style())));
    left.extend(bullets(&BACKEND_STACK));
    left.push(Line::from(""));
    left.push(Line::from(Span::styled(" Air Quality Parameters", styles::heading_style())));
    for (name, desc) in PARAMETERS {
        left.push(Line::from(Span::styled(format!("  {}", name), styles::highlight_style())));
        left.push(Line::from(Span::styled(format!("    {}", desc), styles::muted_style())));
    }

    let mut right = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(" AI Model Information", styles::heading_style())),
        Line::from(Span::styled("  The model is trained on:", styles::muted_style())),
    ];
    right.extend(bullets(&MODEL_INPUTS));
    right.extend([
        Line::from(""),
        Line::from(Span::styled(" About the Developer", styles::heading_style())),
        Line::from(Span::styled("  Student Name", styles::list_item_style())),
        Line::from(Span::styled("  Bachelor of Science, Computer Science", styles::muted_style())),
        Line::from(Span::styled("  University Name, Class of 2023", styles::muted_style())),
        Line::from(""),
        Line::from(Span::styled(" Contact Information", styles::heading_style())),
        Line::from(Span::styled("  email@university.edu", styles::list_item_style())),
        Line::from(Span::styled("  Department of Computer Science", styles::muted_style())),
    ]);

    let block = || Block::default().borders(Borders::NONE);
    frame.render_widget(
        Paragraph::new(left).block(block()).wrap(Wrap { trim: false }),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(right).block(block()).wrap(Wrap { trim: false }),
        columns[1],
    );
}
