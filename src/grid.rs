//! Month grid construction.
//!
//! A month is laid out Sunday first in at most six weeks of seven slots.
//! Slots before the first and after the last day of the month are blank.

use chrono::{Datelike, Month, NaiveDate};

use crate::clock::Clock;
use crate::dataset::{self, CalendarEvent};
use crate::error::{Error, ErrorKind, Result};
use crate::lunar;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
const SLOTS: usize = COLUMNS * ROWS;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: u32,
    pub month: Month,
    pub year: i32,
    /// 0 (Sunday) to 6 (Saturday)
    pub day_of_week: u32,
    pub events: Vec<CalendarEvent>,
    pub is_today: bool,
    pub lunar_month: Option<&'static str>,
}

impl DayCell {
    pub fn is_sunday(&self) -> bool {
        self.day_of_week == 0
    }

    pub fn has_holiday(&self) -> bool {
        self.events.iter().any(|e| e.is_holiday)
    }

    /// Sundays and holidays are printed in red.
    pub fn is_red(&self) -> bool {
        self.is_sunday() || self.has_holiday()
    }
}

pub type Week = [Option<DayCell>; COLUMNS];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    month: Month,
    year: i32,
    weeks: Vec<Week>,
}

fn first_of_month(month: Month, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).ok_or_else(|| {
        Error::new(
            ErrorKind::DateOutOfRange,
            &format!("{} {} cannot be represented", month.name(), year),
        )
    })
}

pub fn days_of_month(month: Month, year: i32) -> Result<u32> {
    let begin = first_of_month(month, year)?;
    let end = if month == Month::December {
        first_of_month(Month::January, year + 1)?
    } else {
        first_of_month(month.succ(), year)?
    };

    Ok(end.signed_duration_since(begin).num_days() as u32)
}

/// Weekday of the first of the month, 0 (Sunday) to 6 (Saturday).
pub fn first_weekday(month: Month, year: i32) -> Result<u32> {
    Ok(first_of_month(month, year)?.weekday().num_days_from_sunday())
}

pub fn build_month_grid<C: Clock + ?Sized>(month: Month, year: i32, clock: &C) -> Result<MonthGrid> {
    let offset = first_weekday(month, year)?;
    let num_days = days_of_month(month, year)?;
    let today = clock.today();

    let is_today = |day: u32| {
        today.year() == year && today.month() == month.number_from_month() && today.day() == day
    };

    let mut slots: Vec<Option<DayCell>> = Vec::with_capacity(SLOTS);
    slots.extend(std::iter::repeat_with(|| None).take(offset as usize));
    slots.extend((1..=num_days).map(|day| {
        Some(DayCell {
            date: day,
            month,
            year,
            day_of_week: (offset + day - 1) % COLUMNS as u32,
            events: dataset::event_for(month, day, year).into_iter().copied().collect(),
            is_today: is_today(day),
            lunar_month: lunar::lunar_month_name(month, day, year),
        })
    }));
    // Never more than six weeks, a month needs at most 6 + 31 slots.
    slots.resize(SLOTS, None);

    let weeks = slots
        .chunks(COLUMNS)
        .filter(|week| week.iter().any(Option::is_some))
        .map(|chunk| {
            let mut week = Week::default();
            week.clone_from_slice(chunk);
            week
        })
        .collect::<Vec<Week>>();

    log::debug!(
        "Built grid for {} {}: {} weeks, offset {}",
        month.name(),
        year,
        weeks.len(),
        offset
    );

    Ok(MonthGrid { month, year, weeks })
}

impl MonthGrid {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == day)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.is_today)
    }

    pub fn num_days(&self) -> u32 {
        self.cells().count() as u32
    }

    /// Week and column of `day`.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|slot| matches!(slot, Some(cell) if cell.date == day))
                .map(|col| (row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use num_traits::FromPrimitive;

    fn months() -> impl Iterator<Item = Month> {
        (1..=12).filter_map(Month::from_u32)
    }

    fn clock(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn days_of_month_handles_leap_years() {
        assert_eq!(days_of_month(Month::February, 2026).unwrap(), 28);
        assert_eq!(days_of_month(Month::February, 2024).unwrap(), 29);
        assert_eq!(days_of_month(Month::February, 1900).unwrap(), 28);
        assert_eq!(days_of_month(Month::February, 2000).unwrap(), 29);
        assert_eq!(days_of_month(Month::December, 2026).unwrap(), 31);
        assert_eq!(days_of_month(Month::April, 2026).unwrap(), 30);
    }

    #[test]
    fn january_2026() {
        let grid = build_month_grid(Month::January, 2026, &clock(2025, 6, 1)).unwrap();
        assert_eq!(first_weekday(Month::January, 2026).unwrap(), 4);

        let first_row = &grid.weeks()[0];
        assert!(first_row[..4].iter().all(Option::is_none));
        let first = first_row[4].as_ref().unwrap();
        assert_eq!(first.date, 1);
        assert_eq!(first.day_of_week, 4);

        let sankranti = grid.cell(15).unwrap();
        assert_eq!(sankranti.events.len(), 1);
        assert_eq!(sankranti.events[0].title, "मकर संक्रांत");
        assert!(sankranti.events[0].is_holiday);
        assert!(sankranti.is_red());

        assert_eq!(grid.cell(18).unwrap().lunar_month, Some("पौष"));
        assert_eq!(grid.cell(19).unwrap().lunar_month, Some("माघ"));
        assert!(grid.today().is_none());
        assert_eq!(grid.weeks().len(), 5);
    }

    #[test]
    fn grid_invariants_hold_for_many_years() {
        let clock = clock(2026, 1, 1);
        for year in (1890..=2110).step_by(7).chain([2026]) {
            for month in months() {
                let grid = build_month_grid(month, year, &clock).unwrap();
                let offset = first_weekday(month, year).unwrap() as usize;

                assert_eq!(grid.num_days(), days_of_month(month, year).unwrap());
                assert_eq!(grid.position_of(1), Some((0, offset)));
                assert!(grid.weeks().len() <= ROWS);
                assert!(grid.weeks().len() >= 4);
                for week in grid.weeks() {
                    assert!(week.iter().any(Option::is_some));
                    for (col, slot) in week.iter().enumerate() {
                        if let Some(cell) = slot {
                            let date = NaiveDate::from_ymd_opt(
                                year,
                                month.number_from_month(),
                                cell.date,
                            )
                            .unwrap();
                            assert_eq!(cell.day_of_week as usize, col);
                            assert_eq!(
                                col as u32,
                                date.weekday().num_days_from_sunday(),
                                "{} {:?}",
                                date,
                                month
                            );
                        }
                    }
                }
                let days: Vec<u32> = grid.cells().map(|c| c.date).collect();
                assert_eq!(days, (1..=grid.num_days()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn weekdays_agree_with_chrono() {
        let grid = build_month_grid(Month::August, 2026, &clock(2026, 1, 1)).unwrap();
        for cell in grid.cells() {
            let date = NaiveDate::from_ymd_opt(2026, 8, cell.date).unwrap();
            assert_eq!(cell.day_of_week, date.weekday().num_days_from_sunday());
        }
    }

    #[test]
    fn february_2026_fits_four_weeks() {
        let grid = build_month_grid(Month::February, 2026, &clock(2026, 1, 1)).unwrap();
        assert_eq!(grid.weeks().len(), 4);
        assert_eq!(grid.position_of(28), Some((3, 6)));
    }

    #[test]
    fn august_2026_needs_six_weeks() {
        let grid = build_month_grid(Month::August, 2026, &clock(2026, 1, 1)).unwrap();
        assert_eq!(first_weekday(Month::August, 2026).unwrap(), 6);
        assert_eq!(grid.weeks().len(), 6);
        assert_eq!(grid.position_of(31), Some((5, 1)));
    }

    #[test]
    fn exactly_one_today() {
        let grid = build_month_grid(Month::March, 2026, &clock(2026, 3, 19)).unwrap();
        let today: Vec<_> = grid.cells().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, 19);
    }

    #[test]
    fn today_requires_matching_year_and_month() {
        let other_year = build_month_grid(Month::March, 2025, &clock(2026, 3, 19)).unwrap();
        assert!(other_year.today().is_none());

        let other_month = build_month_grid(Month::April, 2026, &clock(2026, 3, 19)).unwrap();
        assert!(other_month.today().is_none());
    }

    #[test]
    fn uncovered_year_has_no_annotations() {
        let grid = build_month_grid(Month::January, 2027, &clock(2026, 1, 1)).unwrap();
        assert!(grid.cells().all(|c| c.events.is_empty() && c.lunar_month.is_none()));
    }

    #[test]
    fn unrepresentable_year_is_an_error() {
        let err = build_month_grid(Month::January, i32::MAX, &clock(2026, 1, 1)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DateOutOfRange));
    }
}
