use chrono::{Datelike, Duration, Month, NaiveDate};

use crate::clock::Clock;
use crate::error::{Error, ErrorKind, Result};
use crate::grid::{build_month_grid, DayCell, MonthGrid};
use crate::navigation::MonthIndex;
use crate::selection::Selection;

/// State of one viewing session: the displayed month, the day under the
/// cursor and the selected day.
pub struct Session {
    clock: Box<dyn Clock>,
    displayed: MonthIndex,
    grid: MonthGrid,
    cursor: u32,
    selection: Selection,
}

impl Session {
    pub fn new(clock: Box<dyn Clock>) -> Result<Self> {
        let displayed = MonthIndex::initial(&*clock);
        Session::starting_at(clock, displayed)
    }

    pub fn starting_at(clock: Box<dyn Clock>, displayed: MonthIndex) -> Result<Self> {
        let grid = build_month_grid(displayed.month, displayed.year, &*clock)?;
        let cursor = grid.today().map_or(1, |cell| cell.date);

        Ok(Session {
            clock,
            displayed,
            grid,
            cursor,
            selection: Selection::default(),
        })
    }

    pub fn displayed(&self) -> MonthIndex {
        self.displayed
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn cursor_cell(&self) -> Option<&DayCell> {
        self.grid.cell(self.cursor)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Rebuilds the grid with a fresh reading of the clock.
    pub fn refresh(&mut self) -> Result<()> {
        self.grid = build_month_grid(self.displayed.month, self.displayed.year, &*self.clock)?;
        Ok(())
    }

    pub fn show(&mut self, month: MonthIndex) -> Result<()> {
        let grid = build_month_grid(month.month, month.year, &*self.clock)?;
        log::debug!("Showing {}", month);

        self.cursor = grid
            .today()
            .map_or(self.cursor.min(grid.num_days()), |cell| cell.date);
        self.displayed = month;
        self.grid = grid;
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<()> {
        self.show(self.displayed.next())
    }

    pub fn prev_month(&mut self) -> Result<()> {
        self.show(self.displayed.prev())
    }

    pub fn shift_months(&mut self, n: i64) -> Result<()> {
        let target = if n >= 0 {
            self.displayed + n as u32
        } else {
            self.displayed - n.unsigned_abs() as u32
        };
        self.show(target)
    }

    pub fn goto_today(&mut self) -> Result<()> {
        let today = self.clock.today();
        self.show(MonthIndex::from(today))?;
        self.cursor = today.day();
        Ok(())
    }

    fn cursor_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.displayed.year,
            self.displayed.month.number_from_month(),
            self.cursor,
        )
        .ok_or_else(|| Error::from(ErrorKind::DateOutOfRange))
    }

    /// Moves the cursor by `days`, crossing into neighbouring months.
    pub fn move_cursor(&mut self, days: i64) -> Result<()> {
        let target = self
            .cursor_date()?
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| Error::from(ErrorKind::DateOutOfRange))?;

        let month = MonthIndex::from(target);
        if month != self.displayed {
            self.show(month)?;
        }
        self.cursor = target.day();
        Ok(())
    }

    pub fn set_cursor(&mut self, day: u32) -> Result<()> {
        if self.grid.cell(day).is_none() {
            return Err(Error::new(
                ErrorKind::CommandParse,
                &format!("{} has no day {}", self.displayed, day),
            ));
        }
        self.cursor = day;
        Ok(())
    }

    pub fn select_cursor(&mut self) {
        if let Some(cell) = self.grid.cell(self.cursor) {
            self.selection.select(cell.clone());
        }
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    pub fn month(&self) -> Month {
        self.displayed.month
    }

    pub fn year(&self) -> i32 {
        self.displayed.year
    }
}
