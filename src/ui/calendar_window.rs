use unsegen::base::*;
use unsegen::widget::*;

use crate::grid::{DayCell, COLUMNS, ROWS};
use crate::lunar::{month_info, WEEKDAYS};
use crate::render::{self, CELL_WIDTH};

use super::Context;

/// Grid of the displayed month with the day cursor.
pub struct CalendarWindow<'a> {
    context: &'a Context,
}

impl<'a> CalendarWindow<'a> {
    // title, lunar span, weekday header
    const HEADER_ROWS: usize = 3;
    // blank line and the cursor day's label
    const FOOTER_ROWS: usize = 3;

    pub fn new(context: &'a Context) -> Self {
        CalendarWindow { context }
    }

    fn cell_style(&self, cell: &DayCell) -> StyleModifier {
        let style = &self.context.style;
        let mut modifier = StyleModifier::new();

        if cell.is_red() {
            modifier = style.red_day.on_top_of(modifier);
        }
        if cell.is_today {
            modifier = style.today_day.on_top_of(modifier);
        }
        if cell.date == self.context.session().cursor() {
            modifier = style.focus_day.on_top_of(modifier);
        }

        modifier
    }
}

impl Widget for CalendarWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(COLUMNS * CELL_WIDTH + 1),
            height: RowDemand::at_least(Self::HEADER_ROWS + ROWS + Self::FOOTER_ROWS),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let session = self.context.session();
        let grid = session.grid();
        let theme = &self.context.theme;
        let style = &self.context.style;

        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(style.month_header);
        cursor.write(&render::month_title(grid.month(), grid.year()));
        cursor.fill_and_wrap_line();

        cursor.set_style_modifier(StyleModifier::new());
        if theme.show_lunar_month && crate::dataset::is_covered(grid.year()) {
            cursor.write(month_info(grid.month()).marathi_name);
        }
        cursor.fill_and_wrap_line();

        for (idx, day) in WEEKDAYS.iter().enumerate() {
            cursor.set_style_modifier(if idx == 0 {
                style.red_day
            } else {
                style.weekday_header
            });
            cursor.write(&format!("{:>width$}", day, width = CELL_WIDTH));
        }
        cursor.fill_and_wrap_line();

        for week in grid.weeks() {
            for slot in week.iter() {
                let (modifier, focused) = match slot {
                    Some(cell) => (
                        self.cell_style(cell),
                        cell.date == session.cursor(),
                    ),
                    None => (StyleModifier::new(), false),
                };
                cursor.set_style_modifier(modifier);
                cursor.write(&render::cell_text(slot.as_ref(), theme, focused));
            }
            cursor.set_style_modifier(StyleModifier::new());
            cursor.fill_and_wrap_line();
        }

        cursor.fill_and_wrap_line();

        if let Some(cell) = session.cursor_cell() {
            if let Some(lunar) = cell.lunar_month {
                cursor.write(lunar);
                cursor.fill_and_wrap_line();
            }
            if theme.show_event_labels {
                if let Some(event) = cell.events.first() {
                    cursor.set_style_modifier(if event.is_holiday {
                        style.holiday_badge
                    } else {
                        StyleModifier::new()
                    });
                    cursor.write(event.short_title());
                }
            }
        }
    }
}
