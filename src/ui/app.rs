use crate::events::{Dispatcher, Event};
use crate::render;
use crate::session::Session;

use super::{CalendarWindow, Context, DetailWindow, DetailWindowBehaviour, Mode};

use unsegen::base::{StyleModifier, Terminal};
use unsegen::input::{
    EditBehavior, Input, Key, Navigatable, NavigateBehavior, OperationResult, ScrollBehavior,
};
use unsegen::widget::*;

use super::command::CommandParser;

/// A single line of text.
struct Line {
    text: String,
    style: StyleModifier,
}

impl Widget for Line {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(self.text.chars().count()),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: unsegen::base::Window, _hints: RenderingHints) {
        let mut cursor = unsegen::base::Cursor::new(&mut window);
        cursor.set_style_modifier(self.style);
        cursor.write(&self.text);
    }
}

const KEY_HINTS: &str = "h/l दिवस  j/k आठवडा  n/p महिना  t आज  Enter निवडा  : आज्ञा  q बाहेर";

pub struct App {
    context: Context,
}

impl App {
    pub fn new(context: Context) -> App {
        App { context }
    }

    fn title_bar(&self) -> Line {
        Line {
            text: render::app_title(self.context.session().year()),
            style: self.context.style.month_header,
        }
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        let layout = VLayout::new().widget(self.title_bar()).widget(
            HLayout::new()
                .widget(CalendarWindow::new(&self.context))
                .widget(DetailWindow::new(&self.context)),
        );

        match (&self.context.mode, &self.context.last_error_message) {
            (Mode::Command, _) => layout.widget(self.context.command_line().as_widget()),
            (Mode::Normal, Some(msg)) => layout.widget(Line {
                text: msg.clone(),
                style: self.context.style.error,
            }),
            (Mode::Normal, None) => layout.widget(Line {
                text: KEY_HINTS.to_owned(),
                style: StyleModifier::new(),
            }),
        }
    }

    fn handle_input(&mut self, input: Input) {
        if input.matches(Key::Esc) {
            self.context.escape();
            return;
        }

        match self.context.mode {
            Mode::Normal => {
                let num_entries = self.context.num_list_entries();
                let context = &mut self.context;

                let _leftover = input
                    .chain((Key::Char('q'), || context.quit = true))
                    .chain((Key::Char(':'), || context.mode = Mode::Command))
                    .chain((Key::Char('n'), || context.apply(Session::next_month)))
                    .chain((Key::Char('p'), || context.apply(Session::prev_month)))
                    .chain((Key::Char('t'), || context.apply(Session::goto_today)))
                    .chain((Key::Char('\n'), || context.select_cursor()))
                    .chain(
                        NavigateBehavior::new(&mut CursorBehaviour(context))
                            .down_on(Key::Char('j'))
                            .up_on(Key::Char('k'))
                            .left_on(Key::Char('h'))
                            .right_on(Key::Char('l')),
                    )
                    .chain(
                        ScrollBehavior::new(&mut DetailWindowBehaviour(context, num_entries))
                            .forwards_on(Key::Char(']'))
                            .backwards_on(Key::Char('[')),
                    )
                    .finish();
            }
            Mode::Command => {
                let _leftover = input
                    .chain(
                        EditBehavior::new(self.context.command_line_mut())
                            .delete_forwards_on(Key::Delete)
                            .delete_backwards_on(Key::Backspace)
                            .left_on(Key::Left)
                            .right_on(Key::Right),
                    )
                    .chain(
                        ScrollBehavior::new(self.context.command_line_mut())
                            .backwards_on(Key::Up)
                            .forwards_on(Key::Down),
                    )
                    .chain(CommandParser::new(&mut self.context))
                    .finish();
            }
        }
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        while !self.context.quit {
            // Handle events
            match dispatcher.next()? {
                Event::Update => self.context.update(),
                Event::Input(input) => self.handle_input(input),
            }

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        log::info!("Leaving at {}", self.context.session().displayed());
        Ok(())
    }
}

struct CursorBehaviour<'a>(&'a mut Context);

impl Navigatable for CursorBehaviour<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.0.apply(|s| s.move_cursor(7));
        Ok(())
    }

    fn move_left(&mut self) -> OperationResult {
        self.0.apply(|s| s.move_cursor(-1));
        Ok(())
    }

    fn move_right(&mut self) -> OperationResult {
        self.0.apply(|s| s.move_cursor(1));
        Ok(())
    }

    fn move_up(&mut self) -> OperationResult {
        self.0.apply(|s| s.move_cursor(-7));
        Ok(())
    }
}
