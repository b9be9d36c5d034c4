use colored::Colorize;
use std::{
    fmt,
    io::{self, Write},
};

use crate::config::Config;

const RULE_WIDTH: usize = 40;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Prompt,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_output,
        }
    }
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Prompt => ">",
        MessageKind::Section | MessageKind::Separator => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => {
            let rule = "=".repeat(RULE_WIDTH);
            format!("{rule}\n{:^width$}\n{rule}", text.trim(), width = RULE_WIDTH)
        }
        MessageKind::Separator => "-".repeat(RULE_WIDTH),
        _ => format!("{} {}", icon(kind), text),
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Prompt => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => formatted,
    }
}

/// Styled writer for everything the shell shows the user.
pub struct Output<W> {
    writer: W,
    prefs: OutputPreferences,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, prefs: OutputPreferences) -> Self {
        Self { writer, prefs }
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = apply_style(kind, message, &self.prefs);
        match kind {
            MessageKind::Section => writeln!(self.writer, "\n{formatted}")?,
            _ => writeln!(self.writer, "{formatted}")?,
        }
        self.writer.flush()
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn prompt(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Prompt, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    pub fn separator(&mut self) -> io::Result<()> {
        self.print(MessageKind::Separator, "")
    }

    /// Writes text verbatim, e.g. a pre-rendered table.
    pub fn plain(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
