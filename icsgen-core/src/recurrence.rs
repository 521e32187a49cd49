//! RRULE construction and validation.
//!
//! Only the rule line is produced; occurrences are never expanded.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::{IcsError, IcsResult};
use crate::event::EventTime;

/// Recurrence of an event: a ready-made rule line, or the parts of one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recurrence {
    /// A complete line such as `RRULE:FREQ=DAILY;BYDAY=MO`, emitted verbatim.
    Raw(String),
    Rule(RecurrenceRule),
}

impl Recurrence {
    /// Render the line that goes into the VEVENT.
    pub fn to_rrule_line(&self) -> IcsResult<String> {
        match self {
            Recurrence::Raw(line) => Ok(line.clone()),
            Recurrence::Rule(rule) => Ok(rule.validate()?.to_rrule_line()),
        }
    }
}

impl From<RecurrenceRule> for Recurrence {
    fn from(rule: RecurrenceRule) -> Self {
        Recurrence::Rule(rule)
    }
}

impl From<String> for Recurrence {
    fn from(line: String) -> Self {
        Recurrence::Raw(line)
    }
}

impl From<&str> for Recurrence {
    fn from(line: &str) -> Self {
        Recurrence::Raw(line.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Frequency::Yearly => "YEARLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Daily => "DAILY",
        }
    }

    /// Case-sensitive: only the upper-case names are recognized.
    pub fn from_ics_str(s: &str) -> Option<Self> {
        match s {
            "YEARLY" => Some(Frequency::Yearly),
            "MONTHLY" => Some(Frequency::Monthly),
            "WEEKLY" => Some(Frequency::Weekly),
            "DAILY" => Some(Frequency::Daily),
            _ => None,
        }
    }
}

/// Unvalidated rule parts, as they arrive from a caller or a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecurrenceRule {
    #[serde(default, alias = "freq")]
    pub frequency: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub until: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub count: Option<String>,
}

impl RecurrenceRule {
    pub fn new(frequency: impl Into<String>) -> Self {
        RecurrenceRule {
            frequency: Some(frequency.into()),
            ..Default::default()
        }
    }

    pub fn until(mut self, until: impl ToString) -> Self {
        self.until = Some(until.to_string());
        self
    }

    pub fn interval(mut self, interval: impl ToString) -> Self {
        self.interval = Some(interval.to_string());
        self
    }

    pub fn count(mut self, count: impl ToString) -> Self {
        self.count = Some(count.to_string());
        self
    }

    /// Check every part, in the order frequency, until, interval, count.
    pub fn validate(&self) -> IcsResult<ValidRule> {
        let frequency = self
            .frequency
            .as_deref()
            .and_then(Frequency::from_ics_str)
            .ok_or_else(|| {
                IcsError::InvalidRecurrenceFrequency(self.frequency.clone().unwrap_or_default())
            })?;

        let until = self
            .until
            .as_deref()
            .map(|s| {
                s.parse::<EventTime>()
                    .map(|t| t.utc_date())
                    .map_err(|_| IcsError::InvalidRecurrenceUntil(s.to_string()))
            })
            .transpose()?;

        let interval = self
            .interval
            .as_deref()
            .map(|s| parse_integer(s).ok_or_else(|| IcsError::InvalidRecurrenceInterval(s.into())))
            .transpose()?;

        let count = self
            .count
            .as_deref()
            .map(|s| parse_integer(s).ok_or_else(|| IcsError::InvalidRecurrenceCount(s.into())))
            .transpose()?;

        Ok(ValidRule {
            frequency,
            until,
            interval,
            count,
        })
    }
}

/// A rule whose parts have all been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRule {
    pub frequency: Frequency,
    pub until: Option<NaiveDate>,
    pub interval: Option<u32>,
    pub count: Option<u32>,
}

impl ValidRule {
    /// `RRULE:FREQ=<F>[;UNTIL=<date>T000000Z][;INTERVAL=<n>][;COUNT=<n>]`
    pub fn to_rrule_line(&self) -> String {
        let mut line = format!("RRULE:FREQ={}", self.frequency.as_ics_str());

        if let Some(until) = self.until {
            line.push_str(&format!(";UNTIL={}T000000Z", until.format("%Y%m%d")));
        }
        if let Some(interval) = self.interval {
            line.push_str(&format!(";INTERVAL={interval}"));
        }
        if let Some(count) = self.count {
            line.push_str(&format!(";COUNT={count}"));
        }

        line
    }
}

fn parse_integer(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

/// Accept `interval = 2` as well as `interval = "2"` in config files.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(Option::<RawValue>::deserialize(deserializer)?.map(|value| match value {
        RawValue::Int(n) => n.to_string(),
        RawValue::Float(f) => f.to_string(),
        RawValue::Text(s) => s,
    }))
}
