//! Plain text presentation of grids, festival lists and day details.
//!
//! The interactive UI and `--show` both print these lines.

use chrono::Month;
use itertools::Itertools;

use crate::config::Theme;
use crate::dataset::{self, is_covered, CalendarEvent, COVERED_YEAR};
use crate::grid::{DayCell, MonthGrid, Week};
use crate::lunar::{month_info, WEEKDAYS};
use crate::numerals::to_local_digits;

pub const CELL_WIDTH: usize = 5;

pub const NO_FESTIVALS: &str = "या महिन्यात विशेष सण नाहीत";
pub const NO_EVENTS: &str = "आज विशेष काही नाही";
pub const HOLIDAY_BADGE: &str = "सुट्टी";
pub const SPECIAL_BADGE: &str = "विशेष";
pub const FESTIVALS_HEADING: &str = "विशेष सण व उत्सव";

pub fn app_title(year: i32) -> String {
    format!("माझा कॅलेंडर {}", to_local_digits(&year))
}

pub fn month_title(month: Month, year: i32) -> String {
    format!("{} {}", month_info(month).name, to_local_digits(&year))
}

/// Shown instead of the festival list for years without data.
pub fn uncovered_notice(year: i32) -> String {
    format!(
        "{} सालची माहिती उपलब्ध आहे (Viewing {})",
        to_local_digits(&COVERED_YEAR),
        year
    )
}

pub fn badge(event: &CalendarEvent) -> &'static str {
    if event.is_holiday {
        HOLIDAY_BADGE
    } else {
        SPECIAL_BADGE
    }
}

pub fn weekday_header() -> String {
    WEEKDAYS
        .iter()
        .map(|day| format!("{:>width$}", day, width = CELL_WIDTH))
        .join("")
}

/// Fixed width text of a single grid slot.
pub fn cell_text(slot: Option<&DayCell>, theme: &Theme, focused: bool) -> String {
    match slot {
        None => " ".repeat(CELL_WIDTH),
        Some(cell) => {
            let today = if cell.is_today { theme.today_char } else { ' ' };
            let mark = match theme.focus_char {
                Some(c) if focused => c,
                _ if cell.has_holiday() => '!',
                _ => ' ',
            };
            format!("{}{:>3}{}", today, to_local_digits(&cell.date), mark)
        }
    }
}

pub fn week_line(week: &Week, theme: &Theme, focus: Option<u32>) -> String {
    week.iter()
        .map(|slot| {
            let focused = matches!((slot, focus), (Some(cell), Some(day)) if cell.date == day);
            cell_text(slot.as_ref(), theme, focused)
        })
        .join("")
}

pub fn month_lines(grid: &MonthGrid, theme: &Theme, focus: Option<u32>) -> Vec<String> {
    let mut lines = vec![month_title(grid.month(), grid.year())];
    if theme.show_lunar_month && is_covered(grid.year()) {
        lines.push(month_info(grid.month()).marathi_name.to_owned());
    }
    lines.push(weekday_header());
    lines.extend(grid.weeks().iter().map(|week| week_line(week, theme, focus)));
    lines
}

pub fn render_month(grid: &MonthGrid, theme: &Theme) -> String {
    month_lines(grid, theme, None).join("\n")
}

pub fn festival_lines(month: Month, year: i32) -> Vec<String> {
    if !is_covered(year) {
        return vec![uncovered_notice(year)];
    }

    let festivals = dataset::festivals_of_month(month, year);
    if festivals.is_empty() {
        return vec![NO_FESTIVALS.to_owned()];
    }

    festivals
        .iter()
        .map(|festival| {
            format!(
                "{:>3}  {} ({})",
                to_local_digits(&festival.day),
                festival.event.title,
                badge(festival.event)
            )
        })
        .collect()
}

pub fn render_festivals(month: Month, year: i32) -> String {
    festival_lines(month, year).join("\n")
}

pub fn detail_lines(cell: &DayCell) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {}",
            to_local_digits(&cell.date),
            month_info(cell.month).name
        ),
        format!("{} ({})", to_local_digits(&cell.year), cell.year),
    ];

    if let Some(lunar) = cell.lunar_month {
        lines.push(format!("{} मास", lunar));
    }

    lines.push(String::new());

    if cell.events.is_empty() {
        lines.push(NO_EVENTS.to_owned());
        lines.push("(No special events)".to_owned());
    }

    for event in cell.events.iter() {
        lines.push(format!("[{}] {}", badge(event), event.title));
        if let Some(description) = event.description {
            lines.push(format!("    {}", description));
        }
    }

    lines
}

pub fn render_detail(cell: &DayCell) -> String {
    detail_lines(cell).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::grid::build_month_grid;
    use chrono::NaiveDate;

    fn grid(month: Month, year: i32, today: (i32, u32, u32)) -> MonthGrid {
        let clock = FixedClock(NaiveDate::from_ymd_opt(today.0, today.1, today.2).unwrap());
        build_month_grid(month, year, &clock).unwrap()
    }

    #[test]
    fn title() {
        assert_eq!(app_title(2026), "माझा कॅलेंडर २०२६");
        assert_eq!(month_title(Month::January, 2026), "जानेवारी २०२६");
    }

    #[test]
    fn january_grid_text() {
        let grid = grid(Month::January, 2026, (2026, 1, 2));
        let text = render_month(&grid, &Theme::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "जानेवारी २०२६");
        assert_eq!(lines[1], "पौष / माघ");
        // Thursday the first, today is Friday the second
        assert_eq!(lines[3], format!("{}{}", " ".repeat(4 * CELL_WIDTH), "   १ *  २    ३ "));
        assert_eq!(lines.len(), 3 + 5);
        assert!(lines[5].contains(" १५!"));
    }

    #[test]
    fn lunar_line_is_hidden_for_other_years() {
        let grid = grid(Month::January, 2027, (2026, 1, 2));
        let text = render_month(&grid, &Theme::default());
        assert!(!text.contains("पौष"));
        assert!(text.lines().nth(1).unwrap().contains("रवि"));
    }

    #[test]
    fn focus_char_marks_the_cursor() {
        let theme = Theme {
            focus_char: Some('<'),
            ..Theme::default()
        };
        let grid = grid(Month::January, 2026, (2025, 1, 1));
        let line = week_line(&grid.weeks()[1], &theme, Some(5));
        assert!(line.contains("  ५<"));
    }

    #[test]
    fn festival_list() {
        let lines = festival_lines(Month::January, 2026);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[7], " १५  मकर संक्रांत (सुट्टी)");
        assert!(lines[0].starts_with("  १  नवीन वर्ष"));
    }

    #[test]
    fn festival_list_for_uncovered_year() {
        assert_eq!(
            render_festivals(Month::May, 2030),
            "२०२६ सालची माहिती उपलब्ध आहे (Viewing 2030)"
        );
    }

    #[test]
    fn detail_of_holiday() {
        let grid = grid(Month::January, 2026, (2025, 1, 1));
        let lines = detail_lines(grid.cell(15).unwrap());
        assert_eq!(lines[0], "१५ जानेवारी");
        assert_eq!(lines[1], "२०२६ (2026)");
        assert_eq!(lines[2], "पौष मास");
        assert_eq!(lines[4], "[सुट्टी] मकर संक्रांत");
    }

    #[test]
    fn detail_with_description() {
        let grid = grid(Month::January, 2026, (2025, 1, 1));
        let text = render_detail(grid.cell(24).unwrap());
        assert!(text.contains("[विशेष] अंगारकी संकष्ट चतुर्थी"));
        assert!(text.ends_with("    चन्द्रोदय ०९:१६"));
    }

    #[test]
    fn detail_without_events() {
        let grid = grid(Month::January, 2027, (2025, 1, 1));
        let lines = detail_lines(grid.cell(15).unwrap());
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], NO_EVENTS);
    }
}
