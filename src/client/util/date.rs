//! Locale-aware date formatting. Every rendered date goes through [`LongDate`].
//!
//! Instants are stored in UTC and shown in the [`DisplayZone`], which is the browser's
//! time zone unless configured otherwise. Calendar days and `datetime-local` input are
//! read in the same zone.

use std::{fmt::Write, str::FromStr};

use chrono::{
    DateTime, FixedOffset, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};

use crate::client::config::Config;

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Time zone dates are shown and entered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayZone {
    /// The zone of the machine running the app.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// `date` as a wall-clock time in this zone.
    pub fn to_zone(&self, date: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => date.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => date.with_timezone(offset),
        }
    }

    /// Calendar day `date` falls on in this zone.
    pub fn day_of(&self, date: &DateTime<Utc>) -> NaiveDate {
        self.to_zone(date).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.day_of(&Utc::now())
    }

    /// Instant a wall-clock time in this zone refers to.
    ///
    /// Ambiguous times resolve to the earlier instant; times skipped by a clock change
    /// have none.
    pub fn from_wall_clock(&self, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
        let resolved = match self {
            Self::Local => Local.from_local_datetime(&wall).earliest()?.fixed_offset(),
            Self::Fixed(offset) => offset.from_local_datetime(&wall).earliest()?,
        };
        Some(resolved.with_timezone(&Utc))
    }

    /// First instant of `day` in this zone.
    pub fn day_start(&self, day: NaiveDate) -> Option<DateTime<Utc>> {
        self.from_wall_clock(day.and_time(NaiveTime::MIN))
    }

    /// Reads a `datetime-local` value (`2025-06-05T20:30`) as a time in this zone.
    ///
    /// Values carrying their own offset are taken as they are.
    pub fn read_input(&self, raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .and_then(|wall| self.from_wall_clock(wall))
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    /// Accepts `local`, `utc` or an offset such as `+02:00`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::utc()),
            other => FixedOffset::from_str(other)
                .map(Self::Fixed)
                .map_err(|_| format!("unknown time zone {:?}", raw)),
        }
    }
}

/// Formatter for the long, human readable form of a date, e.g. "jueves, 5 de junio de 2025".
#[derive(Clone, Debug, PartialEq)]
pub struct LongDate {
    locale: Locale,
    pattern: String,
    zone: DisplayZone,
}

impl LongDate {
    pub fn new(locale: Locale, pattern: &str) -> Self {
        Self {
            locale,
            pattern: pattern.to_string(),
            zone: DisplayZone::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.date_locale, &config.date_pattern).in_zone(config.time_zone)
    }

    pub fn in_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    /// Long form of `date`.
    pub fn format(&self, date: &DateTime<Utc>) -> String {
        self.format_with(date, &self.pattern)
    }

    /// Long form of a calendar day.
    pub fn format_day(&self, day: NaiveDate) -> String {
        self.format_day_with(day, &self.pattern)
    }

    /// A calendar day formatted with another pattern. Days are not shifted between zones.
    pub fn format_day_with(&self, day: NaiveDate, pattern: &str) -> String {
        self.render(&day.and_time(NaiveTime::MIN).and_utc().fixed_offset(), pattern)
    }

    /// `date` formatted with another pattern in the same locale.
    ///
    /// Falls back to an ISO date when the pattern holds an unknown specifier.
    pub fn format_with(&self, date: &DateTime<Utc>, pattern: &str) -> String {
        self.render(&self.zone.to_zone(date), pattern)
    }

    /// Hour and minute of `date`.
    pub fn time(&self, date: &DateTime<Utc>) -> String {
        self.zone.to_zone(date).format("%H:%M").to_string()
    }

    fn render(&self, date: &DateTime<FixedOffset>, pattern: &str) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format_localized(pattern, self.locale)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}
