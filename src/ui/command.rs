use unsegen::input::*;

use super::context::{Context, Mode};
use crate::command::{run_command, Flow};

pub struct CommandParser<'a> {
    context: &'a mut Context,
}

impl<'a> CommandParser<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        CommandParser { context }
    }

    fn run(&mut self, cmd: &str) {
        let before = self.context.session().displayed();

        match run_command(self.context.session_mut(), cmd) {
            Ok(Flow::Quit) => self.context.quit = true,
            Ok(Flow::Continue) => self.context.last_error_message = None,
            Err(e) => self.context.report_error(format!("{}", e)),
        }
        // The bottom bar only shows errors outside of command mode.
        self.context.mode = Mode::Normal;

        if self.context.session().displayed() != before {
            self.context.eventlist_index = 0;
        }
    }
}

impl Behavior for CommandParser<'_> {
    fn input(mut self, input: Input) -> Option<Input> {
        if let Event::Key(key) = input.event {
            match key {
                Key::Char('\n') => {
                    let cmd = self.context.command_line_mut().finish_line().to_owned();
                    log::debug!("Running command '{}'", cmd);
                    self.run(&cmd);
                    None
                }
                _ => Some(input),
            }
        } else {
            Some(input)
        }
    }
}
