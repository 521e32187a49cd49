use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use icsgen_core::{Calendar, DocumentSink, FileSink, GlobalConfig, NewEvent, WriterSink};
use serde::Deserialize;

#[derive(Args)]
pub struct BuildArgs {
    /// TOML file with one [[events]] table per event
    pub events: PathBuf,

    /// Directory to write the calendar to (defaults to output_dir from config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name without extension (defaults to "calendar")
    #[arg(short, long)]
    pub name: Option<String>,

    /// File extension, including the dot (defaults to ".ics")
    #[arg(long)]
    pub ext: Option<String>,

    /// Use CRLF line endings
    #[arg(long)]
    pub crlf: bool,

    /// Write the calendar to stdout instead of a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Debug, Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<NewEvent>,
}

fn read_events(path: &Path) -> Result<Vec<NewEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let file: EventsFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse events file at {}", path.display()))?;

    Ok(file.events)
}

/// Build a calendar from every event in `events`, stopping at the first invalid one.
fn build_calendar(cfg: &GlobalConfig, events: &[NewEvent], crlf: bool) -> Result<Calendar> {
    let mut calendar = Calendar::with_config(super::calendar_config(cfg, crlf));

    for (i, event) in events.iter().enumerate() {
        calendar.add_event(event).with_context(|| {
            format!(
                "Event #{} ({}) is invalid",
                i + 1,
                event.subject.as_deref().unwrap_or("no subject")
            )
        })?;
    }

    Ok(calendar)
}

pub fn run(cfg: &GlobalConfig, args: BuildArgs) -> Result<()> {
    let events = read_events(&args.events)?;
    let calendar = build_calendar(cfg, &events, args.crlf)?;

    if args.stdout {
        let mut sink = WriterSink(std::io::stdout().lock());
        deliver(&calendar, &mut sink, &args)?;
        return Ok(());
    }

    let dir = args.output_dir.clone().unwrap_or_else(|| cfg.output_path());
    let mut sink = FileSink::new(dir);
    deliver(&calendar, &mut sink, &args)?;

    if let Some(path) = sink.written() {
        println!("Wrote {} events to {}", calendar.len(), path.display());
    }

    Ok(())
}

fn deliver(calendar: &Calendar, sink: &mut dyn DocumentSink, args: &BuildArgs) -> Result<()> {
    calendar
        .deliver(sink, args.name.as_deref(), args.ext.as_deref())
        .with_context(|| format!("Nothing written from {}", args.events.display()))?;
    Ok(())
}
