use std::fmt;
use unicode_width::UnicodeWidthStr;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

const BANNER_WIDTH: usize = 55;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Errors always go to stderr so report output on stdout stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Star-framed title with the text centred on its display width.
pub fn banner(title: &str) -> String {
    let rule = "*".repeat(BANNER_WIDTH);
    let pad = BANNER_WIDTH.saturating_sub(title.width()) / 2;
    format!("{rule}\n{}{title}\n{rule}\n", " ".repeat(pad))
}

/// Title followed by a dashed underline of the same display width.
pub fn underlined(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(title.width()))
}
