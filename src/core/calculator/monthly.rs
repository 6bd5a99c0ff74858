//! Per-person monthly totals over the fixed roster.

use crate::core::calculator::daily::work_seconds;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::staff::{ROSTER, StaffProfile};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month, `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let d = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        if s.len() != 7 {
            return Err(AppError::InvalidMonth(s.to_string()));
        }
        Ok(Self::of(d))
    }

    pub fn of(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(crate::utils::date::today())
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && d.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonFilter {
    All,
    One(&'static StaffProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub person_id: &'static str,
    pub display_name: &'static str,
    pub total_work_seconds: i64,
    pub record_count: usize,
}

/// One entry per roster member in scope, even when they have no records.
pub fn monthly_summary(
    records: &[AttendanceRecord],
    filter: PersonFilter,
    month: YearMonth,
) -> Vec<MonthlySummary> {
    ROSTER
        .iter()
        .filter(|s| match filter {
            PersonFilter::All => true,
            PersonFilter::One(p) => p.person_id == s.person_id,
        })
        .map(|s| {
            let (total, count) = records
                .iter()
                .filter(|r| r.person_id == s.person_id && month.contains(r.date))
                .fold((0i64, 0usize), |(t, c), r| (t + work_seconds(r), c + 1));

            MonthlySummary {
                person_id: s.person_id,
                display_name: s.display_name,
                total_work_seconds: total,
                record_count: count,
            }
        })
        .collect()
}
