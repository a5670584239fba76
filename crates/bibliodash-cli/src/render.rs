//! Terminal rendering of dashboard views

use std::io::{self, Write};

use comfy_table::{
    Cell, CellAlignment, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

use bibliodash_analytics::TrendSeries;
use bibliodash_analytics::view::{ArticlePanel, ChartData, MetricCard};
use bibliodash_core::fmt_num;

/// Table with the house style and a cyan header row
pub fn new_table<S: AsRef<str>>(headers: &[S]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.as_ref()).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    table
}

fn number(n: u64) -> Cell {
    Cell::new(fmt_num(n)).set_alignment(CellAlignment::Right)
}

/// Print a key-value summary table on stderr
pub fn print_summary(title: &str, rows: &[(&str, String)]) {
    let mut table = new_table(&[title, "Value"]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    eprintln!("\n{table}");
}

pub fn metrics_table(cards: &[MetricCard]) -> Table {
    let mut table = new_table(&["Topic", "Total", "Growth"]);
    for card in cards {
        let color = if card.positive { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(&card.topic),
            Cell::new(&card.total_display).set_alignment(CellAlignment::Right),
            Cell::new(&card.growth_label).fg(color),
        ]);
    }
    table
}

pub fn trend_table(trend: &TrendSeries) -> Table {
    let headers: Vec<String> = std::iter::once("Topic".to_string())
        .chain(trend.years.iter().map(|y| y.to_string()))
        .collect();
    let mut table = new_table(&headers);
    for series in &trend.series {
        let mut row = vec![Cell::new(&series.topic)];
        row.extend(series.counts.iter().map(|&c| number(c)));
        table.add_row(row);
    }
    table
}

/// Single-dataset bar chart as a two column table
pub fn chart_table(chart: &ChartData) -> Table {
    let Some(dataset) = chart.datasets.first() else {
        return new_table(&["Topic"]);
    };
    let mut table = new_table(&["Topic", dataset.label.as_str()]);
    for (label, &value) in chart.labels.iter().zip(&dataset.data) {
        table.add_row(vec![Cell::new(label), number(value)]);
    }
    table
}

/// Article cards followed by the ranked keywords
pub fn write_panel(out: &mut impl Write, panel: &ArticlePanel) -> io::Result<()> {
    if let Some(message) = panel.empty_articles_message {
        writeln!(out, "{message}")?;
    }
    for card in &panel.articles {
        writeln!(out, "[{}] {}", card.year, card.title)?;
        if !card.url.is_empty() {
            writeln!(out, "       {}", card.url)?;
        }
        writeln!(out, "       {}", card.abstract_text)?;
        if !card.keywords_top3.is_empty() {
            writeln!(out, "       #{}", card.keywords_top3.join(" #"))?;
        }
        writeln!(out)?;
    }

    match panel.empty_keywords_message {
        Some(message) => writeln!(out, "{message}"),
        None => writeln!(out, "Top keywords: {}", panel.keywords.join(", ")),
    }
}
