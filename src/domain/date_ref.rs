//! Entry date parsing for the command line

use crate::error::{MoodjourError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against a base day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// Today if it matches, otherwise the most recent past occurrence
    Weekday(Weekday),
    /// Most recent occurrence strictly before today
    LastWeekday(Weekday),
    Specific(NaiveDate),
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

impl DateReference {
    /// Parse `today`, `yesterday`, weekday names (optionally prefixed with
    /// `last`), `DD-MM-YYYY` or `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MoodjourError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(invalid);
        }

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
            .map(DateReference::Specific)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::Specific(date) => *date,
        }
    }
}

/// Days from the most recent `target` weekday (inclusive of today) to today
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    let target = target.num_days_from_monday();
    i64::from((current + 7 - target) % 7)
}
