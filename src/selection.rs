use crate::dataset::CalendarEvent;
use crate::grid::DayCell;

/// The day shown in the detail view.
///
/// The cell is kept as built by the grid, so the detail view always shows the
/// events the grid showed, without querying the event table again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    current: Option<DayCell>,
}

impl Selection {
    pub fn select(&mut self, cell: DayCell) {
        log::debug!(
            "Selected {} {} {}",
            cell.date,
            cell.month.name(),
            cell.year
        );
        self.current = Some(cell);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&DayCell> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.current
            .as_ref()
            .map(|cell| cell.events.as_slice())
            .unwrap_or(&[])
    }
}
