pub mod app;
mod calendar_window;
mod command;
mod context;
mod detail_window;

pub use app::App;
pub use calendar_window::CalendarWindow;
pub use context::{Context, Mode, Style};
pub use detail_window::{DetailWindow, DetailWindowBehaviour};
