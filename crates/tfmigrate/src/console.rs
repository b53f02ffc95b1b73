use crate::prelude::{eprintln, println};
use colored::{Color, Colorize};

/// What kind of line is being shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Success,
    Warning,
    Error,
    Query,
    Status,
}

/// Display colour for a disposition.
pub fn color(disposition: Disposition) -> Color {
    match disposition {
        Disposition::Success => Color::Green,
        Disposition::Warning => Color::Yellow,
        Disposition::Error => Color::Red,
        Disposition::Query => Color::Blue,
        Disposition::Status => Color::White,
    }
}

/// Print a line in the colour of its disposition. Errors go to stderr.
pub fn message(text: impl AsRef<str>, disposition: Disposition) {
    let line = text.as_ref().color(color(disposition));
    match disposition {
        Disposition::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn status(text: impl AsRef<str>) {
    message(text, Disposition::Status);
}

pub fn success(text: impl AsRef<str>) {
    message(text, Disposition::Success);
}

pub fn warning(text: impl AsRef<str>) {
    message(text, Disposition::Warning);
}

pub fn error(text: impl AsRef<str>) {
    message(text, Disposition::Error);
}

pub fn query(text: impl AsRef<str>) {
    message(text, Disposition::Query);
}
