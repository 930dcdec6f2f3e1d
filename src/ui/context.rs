use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

use crate::config::Theme;
use crate::error::Result;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Command,
}

#[derive(Clone, Debug)]
pub struct Style {
    pub month_header: StyleModifier,
    pub weekday_header: StyleModifier,
    pub red_day: StyleModifier,
    pub focus_day: StyleModifier,
    pub today_day: StyleModifier,
    pub holiday_badge: StyleModifier,
    pub special_badge: StyleModifier,
    pub error: StyleModifier,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            month_header: StyleModifier::new().fg_color(Color::Yellow),
            weekday_header: StyleModifier::new().fg_color(Color::Yellow),
            red_day: StyleModifier::new().fg_color(Color::Red),
            focus_day: StyleModifier::new().bg_color(Color::Blue),
            today_day: StyleModifier::new().invert(true),
            holiday_badge: StyleModifier::new().fg_color(Color::Red),
            special_badge: StyleModifier::new().fg_color(Color::Yellow),
            error: StyleModifier::new().fg_color(Color::LightRed),
        }
    }
}

pub struct Context {
    pub mode: Mode,
    pub theme: Theme,
    pub style: Style,
    pub eventlist_index: usize,
    pub last_error_message: Option<String>,
    pub quit: bool,
    session: Session,
    command_line: PromptLine,
}

impl Context {
    pub fn new(session: Session, theme: Theme) -> Self {
        Context {
            mode: Mode::Normal,
            theme,
            style: Style::default(),
            eventlist_index: 0,
            last_error_message: None,
            quit: false,
            session,
            command_line: PromptLine::with_prompt(":".to_owned()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn command_line(&self) -> &PromptLine {
        &self.command_line
    }

    pub fn command_line_mut(&mut self) -> &mut PromptLine {
        &mut self.command_line
    }

    /// Runs `op` on the session and keeps its error for the bottom bar.
    pub fn apply<F>(&mut self, op: F)
    where
        F: FnOnce(&mut Session) -> Result<()>,
    {
        let before = self.session.displayed();
        match op(&mut self.session) {
            Ok(()) => self.last_error_message = None,
            Err(e) => self.report_error(e.to_string()),
        }
        if self.session.displayed() != before {
            self.eventlist_index = 0;
        }
    }

    pub fn report_error(&mut self, message: String) {
        log::warn!("{}", message);
        self.last_error_message = Some(message);
    }

    /// Number of entries in the list next to the grid.
    pub fn num_list_entries(&self) -> usize {
        let selection = self.session.selection();
        if selection.is_active() {
            selection.events().len()
        } else {
            crate::dataset::festivals_of_month(self.session.month(), self.session.year()).len()
        }
    }

    /// Handles `Esc`: leaves command mode, or else closes the selected day.
    pub fn escape(&mut self) {
        match self.mode {
            Mode::Command => self.mode = Mode::Normal,
            Mode::Normal => {
                self.session.dismiss();
                self.last_error_message = None;
                self.eventlist_index = 0;
            }
        }
    }

    pub fn select_cursor(&mut self) {
        self.session.select_cursor();
        self.eventlist_index = 0;
    }

    /// Tick handler. Keeps a pending error message on screen.
    pub fn update(&mut self) {
        if let Err(e) = self.session.refresh() {
            self.report_error(e.to_string());
        }
    }
}
