use std::f64::consts::{FRAC_PI_2, TAU};

use ecohabit_core::{AnalyticsReport, DistributionSlice, NoticeKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{App, View};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bar: Color,
    info: Color,
    warning: Color,
}

const THEME: Theme = Theme {
    primary: Color::Green,
    muted: Color::DarkGray,
    text: Color::White,
    bar: Color::Rgb(46, 139, 87), // seagreen
    info: Color::Cyan,
    warning: Color::Yellow,
};

const SLICE_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Rgb(255, 127, 14),
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Rgb(140, 86, 75),
];

// Donut ring, in chart units (outer radius 1.0).
const DONUT_INNER: f64 = 0.70;
const RADIAL_STEP: f64 = 0.03;
const ANGLE_STEP: f64 = 0.01;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("Eco-Activity Analyzer")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let show_analytics = app.view == View::Analytics && app.report.is_some();
    if show_analytics {
        if let Some(report) = &app.report {
            draw_analytics(f, report, main_chunks[1]);
        }
    } else {
        draw_tracker(f, app, main_chunks[1]);
    }

    let keys = record_keys(app.categories.len());
    let help = match app.view {
        View::Tracker => format!("j/k: Navigate | Enter/{}: Record | a: Analytics | r: Reset | q: Exit", keys),
        View::Analytics => format!("{}: Record | r: Reset | Esc: Back | q: Exit", keys),
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    draw_notice(f, app, size);
}

fn draw_tracker(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .enumerate()
        .map(|(i, label)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(THEME.muted)),
                Span::styled(label.clone(), Style::default().fg(THEME.text)),
                Span::styled(
                    format!("  ({})", app.count(label)),
                    Style::default().fg(THEME.primary),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Habits ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(THEME.muted).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn draw_analytics(f: &mut Frame, report: &AnalyticsReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary
            Constraint::Min(10),   // Charts
        ])
        .split(area);

    let summary = Paragraph::new(report.summary_text.as_str())
        .block(
            Block::default()
                .title(" Eco Summary ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, chunks[0]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(chunks[1]);

    draw_frequency_chart(f, report, chart_chunks[0]);
    draw_distribution(f, &report.distribution, chart_chunks[1]);
}

fn draw_frequency_chart(f: &mut Frame, report: &AnalyticsReport, area: Rect) {
    let n = report.frequency.len().max(1) as u16;
    let bar_gap = 1;
    let bar_width = (area.width.saturating_sub(2) / n).saturating_sub(bar_gap).max(3);

    let bars: Vec<Bar> = report
        .frequency
        .iter()
        .map(|p| {
            Bar::default()
                .label(truncate_label(&p.label, bar_width as usize))
                .value(p.count)
                .style(Style::default().fg(THEME.bar))
                .text_value(p.count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Eco-Friendly Activities Tracker ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn draw_distribution(f: &mut Frame, slices: &[DistributionSlice], area: Rect) {
    let block = Block::default()
        .title(" Eco-Activity Distribution ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted));

    // No slices means nothing to draw; the summary already covers this case.
    if slices.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(slices.len() as u16),
        ])
        .split(inner);

    let rings = donut_points(slices);
    let (x_bounds, y_bounds) = donut_bounds(chunks[0]);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (i, coords) in rings.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: slice_color(i),
                });
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(i))),
                Span::raw(s.label.clone()),
                Span::styled(
                    format!("  {}", s.percent_display()),
                    Style::default().fg(THEME.muted),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}

fn draw_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => THEME.info,
        NoticeKind::Warning => THEME.warning,
    };

    let popup = centered_rect(50, 5, area);
    let body = Paragraph::new(vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("Enter: OK", Style::default().fg(THEME.muted))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", notice.title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// Digit keys that record a category; only 1-9 have a key.
fn record_keys(categories: usize) -> String {
    match categories.min(9) {
        0 | 1 => "1".to_string(),
        n => format!("1-{}", n),
    }
}

fn slice_color(i: usize) -> Color {
    SLICE_COLORS[i % SLICE_COLORS.len()]
}

/// Ring points for each slice, starting at 12 o'clock and running counter-clockwise.
fn donut_points(slices: &[DistributionSlice]) -> Vec<Vec<(f64, f64)>> {
    let mut start = FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.percent / 100.0 * TAU;
            let mut coords = Vec::new();
            let mut angle = start;
            while angle < start + sweep {
                let mut r = DONUT_INNER;
                while r <= 1.0 {
                    coords.push((r * angle.cos(), r * angle.sin()));
                    r += RADIAL_STEP;
                }
                angle += ANGLE_STEP;
            }
            start += sweep;
            coords
        })
        .collect()
}

/// Canvas bounds that keep the ring round; a terminal cell is about twice as tall as wide.
fn donut_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let half_height = 1.1;
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));
    let half_width = (half_height * width / (2.0 * height)).max(half_height);
    ([-half_width, half_width], [-half_height, half_height])
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Cuts `label` to `width` display columns, ending in "…" when shortened.
fn truncate_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
