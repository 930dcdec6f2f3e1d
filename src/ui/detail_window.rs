use unsegen::base::*;
use unsegen::input::{OperationResult, Scrollable};
use unsegen::widget::*;

use crate::dataset::festivals_of_month;
use crate::render;

use super::Context;

/// Detail of the selected day, or the festivals of the displayed month when
/// no day is selected.
pub struct DetailWindow<'a> {
    context: &'a Context,
}

impl<'a> DetailWindow<'a> {
    pub fn new(context: &'a Context) -> Self {
        DetailWindow { context }
    }

    fn detail_lines(&self, lines: Vec<String>) -> Vec<(String, StyleModifier)> {
        let style = &self.context.style;
        let holiday = format!("[{}]", render::HOLIDAY_BADGE);
        let special = format!("[{}]", render::SPECIAL_BADGE);

        let mut event_no = 0;
        let mut styled: Vec<(String, StyleModifier)> = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let badge = if line.starts_with(&holiday) {
                    Some(style.holiday_badge)
                } else if line.starts_with(&special) {
                    Some(style.special_badge)
                } else {
                    None
                };
                let modifier = match badge {
                    _ if idx == 0 => style.month_header,
                    Some(badge) => {
                        let focused = event_no == self.context.eventlist_index;
                        event_no += 1;
                        if focused {
                            StyleModifier::new().invert(true).on_top_of(badge)
                        } else {
                            badge
                        }
                    }
                    None => StyleModifier::new(),
                };
                (line, modifier)
            })
            .collect();

        styled.push((String::new(), StyleModifier::new()));
        styled.push(("Esc: बंद करा".to_owned(), StyleModifier::new()));
        styled
    }

    fn festival_lines(&self) -> Vec<(String, StyleModifier)> {
        let style = &self.context.style;
        let session = self.context.session();
        let festivals = festivals_of_month(session.month(), session.year());

        let mut styled = vec![
            (render::FESTIVALS_HEADING.to_owned(), style.month_header),
            (String::new(), StyleModifier::new()),
        ];

        styled.extend(
            render::festival_lines(session.month(), session.year())
                .into_iter()
                .enumerate()
                .map(|(idx, line)| {
                    let mut modifier = match festivals.get(idx) {
                        Some(festival) if festival.event.is_holiday => style.holiday_badge,
                        _ => StyleModifier::new(),
                    };
                    if !festivals.is_empty() && idx == self.context.eventlist_index {
                        modifier = StyleModifier::new().invert(true).on_top_of(modifier);
                    }
                    (line, modifier)
                }),
        );
        styled
    }
}

impl Widget for DetailWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(20),
            height: RowDemand::at_least(10),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let lines = match self.context.session().selection().current() {
            Some(cell) => self.detail_lines(render::detail_lines(cell)),
            None => self.festival_lines(),
        };

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);
        for (line, modifier) in lines {
            cursor.set_style_modifier(modifier);
            cursor.write(&line);
            cursor.fill_and_wrap_line();
        }
    }
}

pub struct DetailWindowBehaviour<'a>(pub &'a mut Context, pub usize);

impl Scrollable for DetailWindowBehaviour<'_> {
    fn scroll_backwards(&mut self) -> OperationResult {
        if self.0.eventlist_index > 0 {
            self.0.eventlist_index -= 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn scroll_forwards(&mut self) -> OperationResult {
        if self.0.eventlist_index + 1 < self.1 {
            self.0.eventlist_index += 1;
            Ok(())
        } else {
            Err(())
        }
    }
}
