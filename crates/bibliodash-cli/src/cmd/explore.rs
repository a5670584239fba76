//! Explore subcommand - line-driven dashboard session
//!
//! Each input line is one UI event; the handler's refreshed view is printed
//! after it.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use bibliodash_analytics::Dashboard;
use bibliodash_analytics::view::metric_cards;

use super::open_dashboard;
use crate::config::Config;
use crate::render::{chart_table, metrics_table, trend_table, write_panel};

const HELP: &str = "\
Commands:
  topic <name>        select a topic
  year <all|YYYY>     filter articles by year
  search <text>       filter articles by title/keyword (empty clears)
  volume <all|YYYY>   year of the volume chart
  show                print the whole dashboard
  topics              list topics
  help                this text
  quit                leave";

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Event<'a> {
    Topic(&'a str),
    Year(&'a str),
    Search(&'a str),
    Volume(&'a str),
    Show,
    Topics,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_event(line: &str) -> Option<Event<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    Some(match command.to_ascii_lowercase().as_str() {
        "topic" => Event::Topic(rest),
        "year" => Event::Year(rest),
        "search" => Event::Search(rest),
        "volume" => Event::Volume(rest),
        "show" => Event::Show,
        "topics" => Event::Topics,
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        _ => Event::Unknown(command),
    })
}

fn show(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    let years = dashboard.settings().years;
    let selection = dashboard.selection();
    writeln!(out, "{}", metrics_table(&metric_cards(&dashboard.metrics(), years)))?;
    writeln!(out, "{}", trend_table(&dashboard.trend()))?;
    writeln!(out, "{}", chart_table(&dashboard.volume_chart()))?;
    writeln!(
        out,
        "Topic: {} | Year: {} | Search: {:?}\n",
        selection.topic, selection.year_filter, selection.search_query
    )?;
    write_panel(out, &dashboard.article_panel())
}

/// Run events from `input` until EOF or `quit`.
pub fn run_session(
    dashboard: &mut Dashboard,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(event) = parse_event(&line) else {
            continue;
        };
        log::debug!("event: {event:?}");

        match event {
            Event::Topic(name) => {
                let panel = dashboard.on_topic_selected(name);
                write_panel(out, &panel)?;
            }
            Event::Year(raw) => {
                let panel = dashboard.on_year_filter_changed(raw);
                write_panel(out, &panel)?;
            }
            Event::Search(text) => {
                let panel = dashboard.on_search_changed(text);
                write_panel(out, &panel)?;
            }
            Event::Volume(raw) => {
                let chart = dashboard.on_volume_year_changed(raw);
                writeln!(out, "{}", chart_table(&chart))?;
            }
            Event::Show => show(dashboard, out)?,
            Event::Topics => {
                let current = &dashboard.selection().topic;
                for topic in dashboard.dataset().topics() {
                    let marker = if topic == current.as_str() { "*" } else { " " };
                    writeln!(out, "{marker} {topic}")?;
                }
            }
            Event::Help => writeln!(out, "{HELP}")?,
            Event::Quit => break,
            Event::Unknown(command) => writeln!(out, "Unknown command {command:?}, try help")?,
        }
        out.flush()?;
    }
    Ok(())
}

pub fn run(config: &Config) -> Result<()> {
    let mut dashboard = open_dashboard(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&dashboard, &mut out)?;
    writeln!(out, "\nType help for commands.")?;
    out.flush()?;

    run_session(&mut dashboard, io::stdin().lock(), &mut out)?;
    Ok(())
}
