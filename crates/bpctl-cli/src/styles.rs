use std::io::IsTerminal;

use anstyle::{AnsiColor, Color, Style};

pub const HEADER: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const USAGE: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const LITERAL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

pub const ERROR: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)))
    .bold();

pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

pub fn get_clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADER)
        .usage(USAGE)
        .literal(LITERAL)
        .placeholder(LITERAL)
}

/// Formats a failure the way it is shown on stderr: ` !    <message>`.
///
/// Multi-line messages are folded so the failure is always one line.
pub fn error_line(message: &str, color: bool) -> String {
    let message = single_line(message);
    if color {
        format!("{} !{}    {}", ERROR.render(), ERROR.render_reset(), message)
    } else {
        format!(" !    {message}")
    }
}

fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn warning_line(message: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", WARNING.render(), message, WARNING.render_reset())
    } else {
        message.to_string()
    }
}

pub fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}
