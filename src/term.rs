//! Colored terminal output.
//!
//! Thin helpers over `anstyle` for single-line status messages. Errors and
//! warnings go to stderr, everything else to stdout. Setting `NO_COLOR`
//! disables styling.

use anstyle::{AnsiColor, Color, Style};

/// Status colors used by the `print_*` helpers.
pub const ERROR: Style = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red)));
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
pub const INFO: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
pub const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// Wrap `text` in the escape codes for `style`.
///
/// Returns `text` unchanged when color is disabled.
pub fn paint(text: &str, style: Style) -> String {
    if color_enabled() {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}

/// Print `text` in the given foreground color.
pub fn print_color(text: &str, color: AnsiColor) {
    println!("{}", paint(text, Style::new().fg_color(Some(Color::Ansi(color)))));
}

pub fn print_error(text: &str) {
    eprintln!("{}", paint(text, ERROR));
}

pub fn print_warning(text: &str) {
    eprintln!("{}", paint(text, WARNING));
}

pub fn print_info(text: &str) {
    println!("{}", paint(text, INFO));
}

pub fn print_success(text: &str) {
    println!("{}", paint(text, SUCCESS));
}
