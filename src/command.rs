//! Commands typed after `:`.
//!
//! A command is an optional repeat count, a name and an optional argument,
//! e.g. `3gm`, `today`, `goto 2026-03` or `select १५`.

use nom::{
    character::complete::{alpha1, char, digit1, space0, space1},
    combinator::{all_consuming, map_res, opt, rest},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};
use num_traits::FromPrimitive;

use crate::error::{Error, ErrorKind, Result};
use crate::navigation::MonthIndex;
use crate::numerals::from_local_digits;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type ActionResult = Result<Flow>;

pub enum Action {
    Arg(fn(&mut Session, &str) -> ActionResult),
    NoArg(fn(&mut Session) -> ActionResult),
    Repeatable(fn(&mut Session, u32) -> ActionResult),
}

const COMMANDS: &[(&str, Action)] = &[
    (
        "gm",
        Action::Repeatable(|s, n| {
            s.shift_months(n as i64)?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "gM",
        Action::Repeatable(|s, n| {
            s.shift_months(-(n as i64))?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "gd",
        Action::Repeatable(|s, n| {
            s.move_cursor(n as i64)?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "gD",
        Action::Repeatable(|s, n| {
            s.move_cursor(-(n as i64))?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "today",
        Action::NoArg(|s| {
            s.goto_today()?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "goto",
        Action::Arg(|s, arg| {
            s.show(parse_month(arg)?)?;
            Ok(Flow::Continue)
        }),
    ),
    (
        "select",
        Action::Arg(|s, arg| {
            let day = parse_number::<u32>(arg)?;
            s.set_cursor(day)?;
            s.select_cursor();
            Ok(Flow::Continue)
        }),
    ),
    (
        "dismiss",
        Action::NoArg(|s| {
            s.dismiss();
            Ok(Flow::Continue)
        }),
    ),
    ("q", Action::NoArg(|_| Ok(Flow::Quit))),
    ("quit", Action::NoArg(|_| Ok(Flow::Quit))),
];

fn command_line(input: &str) -> IResult<&str, (Option<u32>, &str, Option<&str>)> {
    all_consuming(delimited(
        space0,
        tuple((
            opt(map_res(digit1, str::parse::<u32>)),
            alpha1,
            opt(preceded(space1, rest)),
        )),
        space0,
    ))(input)
}

fn year_month(input: &str) -> IResult<&str, (i32, u32)> {
    all_consuming(separated_pair(
        map_res(digit1, str::parse::<i32>),
        char('-'),
        map_res(digit1, str::parse::<u32>),
    ))(input)
}

fn parse_number<T: std::str::FromStr>(arg: &str) -> Result<T> {
    let ascii = from_local_digits(arg.trim());
    let (_, digits) = all_consuming(digit1::<_, nom::error::Error<&str>>)(ascii.as_str())?;
    digits
        .parse()
        .map_err(|_| Error::new(ErrorKind::CommandParse, &format!("invalid number '{}'", arg)))
}

/// Parses `YYYY-MM`, in ASCII or Marathi digits.
pub fn parse_month(arg: &str) -> Result<MonthIndex> {
    let ascii = from_local_digits(arg.trim());
    let (_, (year, month)) = year_month(&ascii)?;
    let month = chrono::Month::from_u32(month).ok_or_else(|| {
        Error::new(
            ErrorKind::CommandParse,
            &format!("no month {} in '{}'", month, arg),
        )
    })?;
    Ok(MonthIndex::new(month, year))
}

pub fn run_command(session: &mut Session, cmd: &str) -> ActionResult {
    let (_, (repeat, name, arg)) = command_line(cmd)?;
    let arg = arg.map(str::trim).filter(|a| !a.is_empty());

    let action = COMMANDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, action)| action)
        .ok_or_else(|| {
            Error::new(ErrorKind::CommandParse, &format!("unknown command '{}'", name))
        })?;

    let unexpected = |what: &str| {
        Err(Error::new(
            ErrorKind::CommandParse,
            &format!("'{}' {}", name, what),
        ))
    };

    match (action, repeat, arg) {
        (Action::Repeatable(a), repeat, None) => a(session, repeat.unwrap_or(1)),
        (Action::NoArg(a), None, None) => a(session),
        (Action::Arg(a), None, Some(arg)) => a(session, arg),
        (Action::Arg(_), None, None) => unexpected("needs an argument"),
        (_, Some(_), _) => unexpected("cannot be repeated"),
        (_, None, Some(_)) => unexpected("takes no argument"),
    }
}
