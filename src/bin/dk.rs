extern crate dindarshika as lib;

use chrono::NaiveDate;
use flexi_logger::{FileSpec, Logger};
use lib::clock::{Clock, FixedClock, SystemClock};
use lib::events::Dispatcher;
use lib::navigation::MonthIndex;
use lib::session::Session;
use lib::ui::{App, Context};
use nix::sys::termios;
use num_traits::FromPrimitive;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dk",
    about = "दिनदर्शिका - Marathi calendar 2026 for the terminal."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the month and its festivals non-interactively"
    )]
    pub show: bool,

    #[structopt(short = "m", long = "month", help = "month to show (1-12)")]
    pub month: Option<u32>,

    #[structopt(short = "y", long = "year", help = "year to show")]
    pub year: Option<i32>,

    #[structopt(
        long = "today",
        help = "pretend today is this date (YYYY-MM-DD)",
        parse(try_from_str = parse_date)
    )]
    pub today: Option<NaiveDate>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn start_month(args: &Args, clock: &dyn Clock) -> Result<MonthIndex, Box<dyn std::error::Error>> {
    let initial = MonthIndex::initial(clock);
    let month = match args.month {
        Some(m) => chrono::Month::from_u32(m)
            .ok_or_else(|| format!("invalid month {}, expected 1-12", m))?,
        None => initial.month,
    };
    let year = args.year.unwrap_or(initial.year);
    Ok(MonthIndex::new(month, year))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file.clone())?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let clock: Box<dyn Clock> = match args.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let start = start_month(&args, &*clock)?;
    let session = Session::starting_at(clock, start)?;

    if args.show {
        let grid = session.grid();
        println!("{}", lib::render::app_title(grid.year()));
        println!();
        println!("{}", lib::render::render_month(grid, &config.theme));
        println!();
        println!("{}", lib::render::FESTIVALS_HEADING);
        println!("{}", lib::render::render_festivals(grid.month(), grid.year()));
        return Ok(());
    }

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDIN)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &attr);
        }

        println!("dk ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);
    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(Context::new(session, config.theme.clone()));

    app.run(dispatcher, term)
}
