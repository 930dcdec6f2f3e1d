use chrono::{Datelike, Month};
use derive_more::Display;
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::clock::Clock;
use crate::dataset::{is_covered, COVERED_YEAR};

/// The displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}-{:02}", year, "month.number_from_month()")]
pub struct MonthIndex {
    pub month: Month,
    pub year: i32,
}

impl MonthIndex {
    pub fn new(month: Month, year: i32) -> Self {
        MonthIndex { month, year }
    }

    /// The current month if today lies in the covered year, January of the
    /// covered year otherwise.
    pub fn initial<C: Clock + ?Sized>(clock: &C) -> Self {
        let today = clock.today();
        if is_covered(today.year()) {
            MonthIndex::from(today)
        } else {
            MonthIndex::new(Month::January, COVERED_YEAR)
        }
    }

    pub fn next(&self) -> Self {
        let next_month = self.month.succ();

        MonthIndex {
            month: next_month,
            year: if next_month == Month::January {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn prev(&self) -> Self {
        let prev_month = self.month.pred();

        MonthIndex {
            month: prev_month,
            year: if prev_month == Month::December {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    fn from_ordinal(ordinal: i64) -> Self {
        let month0 = ordinal.rem_euclid(12) as u32;
        MonthIndex {
            month: Month::from_u32(month0 + 1).unwrap_or(Month::January),
            year: ordinal.div_euclid(12) as i32,
        }
    }

    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month.number_from_month() as i64 - 1
    }
}

impl<T: Datelike> From<T> for MonthIndex {
    fn from(date: T) -> Self {
        MonthIndex::new(
            Month::from_u32(date.month()).unwrap_or(Month::January),
            date.year(),
        )
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        MonthIndex::from_ordinal(self.ordinal() + rhs as i64)
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        MonthIndex::from_ordinal(self.ordinal() - rhs as i64)
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}
