//! दिनदर्शिका: a Marathi calendar for 2026.
//!
//! The library builds month grids annotated with the festivals, holidays and
//! lunar months (मास) of 2026. The `dk` binary shows them in the terminal.

pub mod clock;
pub mod command;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod grid;
pub mod lunar;
pub mod navigation;
pub mod numerals;
pub mod render;
pub mod selection;
pub mod session;
pub mod ui;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dataset::{event_for, CalendarEvent};
pub use error::{Error, ErrorKind, Result};
pub use grid::{build_month_grid, DayCell, MonthGrid};
pub use lunar::lunar_month_name;
pub use navigation::MonthIndex;
pub use numerals::to_local_digits;
pub use selection::Selection;
