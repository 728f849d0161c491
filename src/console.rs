//! Terminal output for the menu.
//!
//! Every status line carries a bracketed label (`[OK]`, `[WARN]`, ...).
//! ANSI colors are used only when stdout is a TTY and `NO_COLOR` is unset,
//! or when forced through [`Console::with_colors`].

use std::io::{self, IsTerminal, Write};

/// ANSI SGR parameters used by the console.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Style {
    fn sgr(self) -> u8 {
        match self {
            Style::Bold => 1,
            Style::Dim => 2,
            Style::Red => 31,
            Style::Green => 32,
            Style::Yellow => 33,
            Style::Blue => 34,
            Style::Magenta => 35,
            Style::Cyan => 36,
            Style::Gray => 90,
        }
    }
}

/// Kind of status line, which fixes its label, color and stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Ok,
    Warn,
    Error,
    Step,
}

impl Level {
    fn tag(self) -> (&'static str, Style) {
        match self {
            Level::Info => ("INFO", Style::Blue),
            Level::Ok => ("OK", Style::Green),
            Level::Warn => ("WARN", Style::Yellow),
            Level::Error => ("ERROR", Style::Red),
            Level::Step => ("STEP", Style::Cyan),
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Styled writer for stdout/stderr.
#[derive(Debug)]
pub struct Console {
    colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Detects color support from the environment.
    pub fn new() -> Self {
        Self::with_colors(std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal())
    }

    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
        }
    }

    /// Wraps `text` in the given styles, or returns it unchanged without colors.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let params = styles
            .iter()
            .map(|s| s.sgr().to_string())
            .collect::<Vec<_>>()
            .join(";");
        format!("\x1b[{}m{}{}", params, text, RESET)
    }

    /// Renders `[TAG]` in bold and the given color.
    pub fn label(&self, tag: &str, color: Style) -> String {
        format!("[{}]", self.style(tag, &[color, Style::Bold]))
    }

    fn line(&self, level: Level, message: &str) -> String {
        let (tag, color) = level.tag();
        format!("{} {}", self.label(tag, color), message)
    }

    fn emit(&self, level: Level, message: &str) {
        let line = self.line(level, message);
        if level == Level::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Ok, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Goes to stderr, unlike the other levels.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    pub fn step(&self, message: &str) {
        self.emit(Level::Step, message);
    }

    /// Blank line, then a bold magenta heading.
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.style(title, &[Style::Magenta, Style::Bold]));
    }

    /// Dim gray text for secondary menu entries.
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Prints a prompt without a newline and flushes.
    pub fn prompt(&self, message: &str) {
        print!("{} ", self.style(message, &[Style::Cyan]));
        let _ = io::stdout().flush();
    }

    /// Prints a result, indenting every line of it.
    pub fn item(&self, text: &str) {
        for line in text.lines() {
            println!("  {}", line);
        }
    }
}
