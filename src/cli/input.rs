//! Line sources the shell reads from: a line editor for terminals, buffered
//! stdin for scripts, and a scripted queue for tests.

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use rustyline::{error::ReadlineError, DefaultEditor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("end of input")]
    Eof,
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

/// Supplies one line of user input per prompt.
pub trait InputSource {
    /// Returns the next line without its terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Whether the source renders `prompt` itself. When it does not, the
    /// shell prints the prompt through its own output.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Reads lines from any buffered reader, typically locked stdin.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<String, InputError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(strip_terminator(buffer))
    }
}

/// Interactive input through `rustyline`, with history for the session.
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> Result<Self, InputError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(line)
            }
            Err(ReadlineError::Eof) => Err(InputError::Eof),
            Err(ReadlineError::Interrupted) => Err(InputError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptStep {
    Line(String),
    Interrupt,
}

/// Pre-recorded answers, consumed in order. Running out reads as end of
/// input, so a test script that forgets to exit still terminates.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().then(lines)
    }

    /// Queues more answers after the current ones.
    pub fn then<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps
            .extend(lines.into_iter().map(|line| ScriptStep::Line(line.into())));
        self
    }

    /// Queues a Ctrl-C: the next read after the current answers fails with
    /// [`InputError::Interrupted`].
    pub fn interrupt(mut self) -> Self {
        self.steps.push_back(ScriptStep::Interrupt);
        self
    }

    /// Every prompt that was asked, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        match self.steps.pop_front() {
            Some(ScriptStep::Line(line)) => Ok(line),
            Some(ScriptStep::Interrupt) => Err(InputError::Interrupted),
            None => Err(InputError::Eof),
        }
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
