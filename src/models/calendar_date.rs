use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A date with no time-of-day component.
///
/// Equality and ordering are by calendar day. All arithmetic returns a new
/// value; there is no in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

// "YYYY-MM-DD" optionally followed by a time part ("T09:00:00Z", " 09:00")
const ISO_PREFIX: &str = r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ].*)?\s*$";

fn iso_prefix() -> AppResult<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISO_PREFIX).ok())
        .as_ref()
        .ok_or_else(|| AppError::Other("internal regex compile failure".into()))
}

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse `YYYY-MM-DD`, discarding any trailing time-of-day part.
    ///
    /// Two inputs on the same calendar day always parse to equal values,
    /// whatever their time component says.
    pub fn parse(input: &str) -> AppResult<Self> {
        let caps = iso_prefix()?
            .captures(input)
            .ok_or_else(|| AppError::InvalidDate(input.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidDate(input.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidDate(input.to_string()))?;
        let day: u32 = caps[3]
            .parse()
            .map_err(|_| AppError::InvalidDate(input.to_string()))?;

        Self::from_ymd(year, month, day).ok_or_else(|| AppError::InvalidDate(input.to_string()))
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Shift by whole days. Saturates at the limits of the representable range.
    pub fn add_days(self, days: i64) -> Self {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
        } else {
            self.0.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
        };
        Self(shifted)
    }

    /// Whole days from `other` to `self` (`self - other`).
    pub fn diff_days(self, other: CalendarDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Monday = 0 … Sunday = 6
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn monday_on_or_before(self) -> Self {
        self.add_days(-(self.weekday_index() as i64))
    }

    pub fn first_of_month(self) -> Self {
        self.add_days(-(self.day() as i64 - 1))
    }

    pub fn last_of_month(self) -> Self {
        let first = self.first_of_month();
        let next_first = if first.month() == 12 {
            CalendarDate::from_ymd(first.year() + 1, 1, 1)
        } else {
            CalendarDate::from_ymd(first.year(), first.month() + 1, 1)
        };
        match next_first {
            Some(d) => d.add_days(-1),
            None => Self(NaiveDate::MAX),
        }
    }

    /// Same day-of-month `months` away, clamped to the target month's length.
    pub fn add_months(self, months: i32) -> Self {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let (year, month) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);
        match CalendarDate::from_ymd(year, month, 1) {
            Some(first) => {
                let last = first.last_of_month().day();
                first.add_days(self.day().min(last) as i64 - 1)
            }
            None => self,
        }
    }

    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
