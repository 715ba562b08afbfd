//! Birth-date window for a configured age range
//!
//! The window is bounded by two dates sharing a fixed month/day anchor, then
//! clipped to the interval in which the statistics engine's age metric
//! (365.25-day years, truncated) stays inside the configured range.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use rand::Rng;

use crate::config::AgeRange;
use crate::error::{EmployeeStatsError, Result};
use crate::models::employee::MILLIS_PER_YEAR;
use crate::utils::log_warning;

const YEAR_MILLIS: i64 = MILLIS_PER_YEAR as i64;

/// Calendar day both window bounds are anchored at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeWindowAnchor {
    month: u32,
    day: u32,
}

impl AgeWindowAnchor {
    /// Create an anchor; `day` may exceed the length of short months and is
    /// then clamped to the month's last day.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EmployeeStatsError::invalid_config(format!(
                "invalid anchor day {month:02}-{day:02}"
            )));
        }
        Ok(Self { month, day })
    }

    /// Anchor month, 1-based
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Anchor day of month, 1-based
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Midnight UTC of the anchor day in `year`
    fn in_year(self, year: i32) -> Result<DateTime<Utc>> {
        (1..=self.day)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, self.month, day))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| out_of_range(year))
    }
}

impl Default for AgeWindowAnchor {
    /// 25 November
    fn default() -> Self {
        Self { month: 11, day: 25 }
    }
}

/// Closed interval of admissible birth instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl AgeWindow {
    /// Compute the window for `range` as seen at `now`
    pub fn for_range(
        range: &AgeRange,
        anchor: AgeWindowAnchor,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        range.validate()?;
        let admissible = Self::admissible(range, now)?;
        let anchored = Self::anchored(range, anchor, now)?;

        let start = anchored.start.max(admissible.start);
        let end = anchored.end.min(admissible.end);
        if start <= end {
            Ok(Self { start, end })
        } else {
            log_warning(&format!(
                "Anchor {:02}-{:02} leaves no birth dates for ages {}..={} at {now}; \
                 using the unanchored window",
                anchor.month, anchor.day, range.min, range.max
            ));
            Ok(admissible)
        }
    }

    /// Birth instants whose truncated 365.25-day age lies in `range`
    fn admissible(range: &AgeRange, now: DateTime<Utc>) -> Result<Self> {
        let now_ms = now.timestamp_millis();
        let youngest = i64::from(range.min)
            .checked_mul(YEAR_MILLIS)
            .and_then(|ms| now_ms.checked_sub(ms));
        let oldest = (i64::from(range.max) + 1)
            .checked_mul(YEAR_MILLIS)
            .and_then(|ms| now_ms.checked_sub(ms))
            .map(|ms| ms + 1);

        match (oldest, youngest) {
            (Some(start), Some(end)) => Ok(Self {
                start: from_millis(start, range)?,
                end: from_millis(end, range)?,
            }),
            _ => Err(age_overflow(range)),
        }
    }

    /// Anchor dates `max - min` years apart, the later one being the most
    /// recent anchor not after `now - min` calendar years
    fn anchored(range: &AgeRange, anchor: AgeWindowAnchor, now: DateTime<Utc>) -> Result<Self> {
        let min_months = u32::try_from(range.min)
            .ok()
            .and_then(|years| years.checked_mul(12))
            .ok_or_else(|| age_overflow(range))?;
        let youngest_birthday = now
            .checked_sub_months(Months::new(min_months))
            .ok_or_else(|| age_overflow(range))?;

        let mut end = anchor.in_year(youngest_birthday.year())?;
        if end > youngest_birthday {
            end = anchor.in_year(youngest_birthday.year() - 1)?;
        }
        let start_year = end
            .year()
            .checked_sub(range.max - range.min)
            .ok_or_else(|| age_overflow(range))?;
        let start = anchor.in_year(start_year)?;

        Ok(Self { start, end })
    }

    /// Earliest admissible birth instant
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Latest admissible birth instant
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` lies in the window
    #[must_use]
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Draw a birth instant uniformly, millisecond resolution
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let span = self.end.signed_duration_since(self.start).num_milliseconds();
        let offset = rng.random_range(0..=span);
        self.start + Duration::milliseconds(offset)
    }
}

fn from_millis(ms: i64, range: &AgeRange) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| age_overflow(range))
}

fn age_overflow(range: &AgeRange) -> EmployeeStatsError {
    EmployeeStatsError::invalid_config(format!(
        "age range {}..={} is outside the representable calendar",
        range.min, range.max
    ))
}

fn out_of_range(year: i32) -> EmployeeStatsError {
    EmployeeStatsError::invalid_config(format!("year {year} is outside the representable calendar"))
}
