use std::io::{self, IsTerminal};

use crossterm::style::Stylize;
use ecohabit_core::{AnalyticsReport, AnalyticsService};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const BAR_WIDTH: u64 = 30;

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "Habit")]
    habit: String,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Frequency")]
    bar: String,
}

#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Habit")]
    habit: String,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Share")]
    share: String,
}

/// Maps a 1-based category number to its label; anything else passes through.
pub fn resolve_habit(arg: &str, categories: &[String]) -> String {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= categories.len() => categories[n - 1].clone(),
        _ => arg.to_string(),
    }
}

/// Records each habit in order; the first unknown one aborts the replay.
pub fn replay(service: &mut AnalyticsService, habits: &[String]) -> ecohabit_core::Result<()> {
    let categories = service.categories();
    for habit in habits {
        service.record(&resolve_habit(habit, &categories))?;
    }
    Ok(())
}

pub fn print_report(report: &AnalyticsReport) {
    print!("{}", render_report(report, io::stdout().is_terminal()));
}

/// Summary text plus the frequency and distribution tables.
/// `color` adds terminal styling and is meant for tty output only.
pub fn render_report(report: &AnalyticsReport, color: bool) -> String {
    let mut out = format!("{}\n\n", report.summary_text);

    let max = report.frequency.iter().map(|p| p.count).max().unwrap_or(0);
    let rows: Vec<FrequencyRow> = report
        .frequency
        .iter()
        .map(|p| FrequencyRow {
            habit: p.label.clone(),
            count: p.count,
            bar: text_bar(p.count, max),
        })
        .collect();

    out.push_str(&heading("Eco-Friendly Activities Tracker", color));
    out.push_str(&styled_table(Table::new(rows), color));

    out.push('\n');
    out.push_str(&heading("Eco-Activity Distribution", color));
    if report.distribution.is_empty() {
        out.push_str("No recorded habits to display in the distribution chart!\n");
        return out;
    }

    let rows: Vec<DistributionRow> = report
        .distribution
        .iter()
        .map(|s| DistributionRow {
            habit: s.label.clone(),
            count: s.count,
            share: s.percent_display(),
        })
        .collect();
    out.push_str(&styled_table(Table::new(rows), color));
    out
}

fn heading(title: &str, color: bool) -> String {
    if color {
        format!("{}\n", title.cyan().bold())
    } else {
        format!("{}\n", title)
    }
}

fn styled_table(mut table: Table, color: bool) -> String {
    table.with(Style::modern());
    if color {
        table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    }
    format!("{}\n", table)
}

fn text_bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len as usize)
}
