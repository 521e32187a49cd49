use anyhow::{Context, Result};
use clap::Args;
use icsgen_core::{Calendar, EventTime, GlobalConfig, NewEvent, Recurrence, RecurrenceRule};

#[derive(Args)]
pub struct EventArgs {
    /// Event title
    #[arg(long)]
    pub subject: String,

    /// Event description
    #[arg(long)]
    pub description: String,

    /// Event location
    #[arg(short, long)]
    pub location: String,

    /// Start (e.g. "2025-03-20", "2025-03-20T15:00", "03/20/2025")
    #[arg(short, long)]
    pub begin: String,

    /// End, same formats as --begin
    #[arg(short, long)]
    pub stop: String,

    /// All-day event; --stop is the last included day
    #[arg(long)]
    pub all_day: bool,

    /// Repeat frequency: YEARLY, MONTHLY, WEEKLY or DAILY
    #[arg(long)]
    pub freq: Option<String>,

    /// Last date of the repetition
    #[arg(long)]
    pub until: Option<String>,

    /// Repeat every N periods
    #[arg(long)]
    pub interval: Option<String>,

    /// Number of occurrences
    #[arg(long)]
    pub count: Option<String>,

    /// Complete RRULE line, used as is
    #[arg(long, conflicts_with_all = ["freq", "until", "interval", "count"])]
    pub rrule: Option<String>,

    /// Use CRLF line endings
    #[arg(long)]
    pub crlf: bool,
}

impl EventArgs {
    fn recurrence(&self) -> Option<Recurrence> {
        if let Some(line) = &self.rrule {
            return Some(Recurrence::Raw(line.clone()));
        }

        if self.freq.is_none()
            && self.until.is_none()
            && self.interval.is_none()
            && self.count.is_none()
        {
            return None;
        }

        Some(Recurrence::Rule(RecurrenceRule {
            frequency: self.freq.clone(),
            until: self.until.clone(),
            interval: self.interval.clone(),
            count: self.count.clone(),
        }))
    }

    fn to_new_event(&self) -> Result<NewEvent> {
        let begin: EventTime = self
            .begin
            .parse()
            .with_context(|| format!("Could not parse --begin \"{}\"", self.begin))?;
        let stop: EventTime = self
            .stop
            .parse()
            .with_context(|| format!("Could not parse --stop \"{}\"", self.stop))?;

        let mut event = NewEvent::new(&self.subject, &self.description, &self.location, begin, stop)
            .all_day(self.all_day);
        event.recurrence = self.recurrence();

        Ok(event)
    }
}

pub fn run(cfg: &GlobalConfig, args: EventArgs) -> Result<()> {
    let mut calendar = Calendar::with_config(super::calendar_config(cfg, args.crlf));
    calendar.add_event(&args.to_new_event()?)?;

    println!("{}", calendar.calendar());

    Ok(())
}
