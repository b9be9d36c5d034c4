use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{ExpenseError, Result},
    ledger::{Expense, RecordError},
};

/// Lazy iterator over the raw rows of the store, split on `\n`.
///
/// Rows are bytes so one row that is not UTF-8 cannot fail the whole scan.
pub type StoreLines = io::Split<BufReader<File>>;

/// A stored line that could not be parsed and was left out of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number within the store.
    pub line_number: usize,
    pub reason: RecordError,
}

/// Outcome of reading the whole store under the skip-and-warn policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<SkippedRow>,
}

/// Line-oriented store of `date,amount,category,note` records.
///
/// Every operation opens the file, does its work and drops the handle before
/// returning; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty store (and its parent directory) unless one exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| ExpenseError::store(parent, err))?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.error(err))?;
        tracing::debug!(path = %self.path.display(), "created empty expense store");
        Ok(())
    }

    /// Appends one record as a single write. A previous line missing its
    /// terminator is closed first so records never run together.
    pub fn append(&self, expense: &Expense) -> Result<()> {
        let mut line = String::new();
        if self.needs_terminator()? {
            line.push('\n');
        }
        line.push_str(&expense.to_line());
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.error(err))?;
        file.write_all(line.as_bytes())
            .map_err(|err| self.error(err))?;
        file.flush().map_err(|err| self.error(err))?;
        tracing::debug!(path = %self.path.display(), "appended expense");
        Ok(())
    }

    /// Reopens the store and yields its rows from the start.
    pub fn lines(&self) -> Result<StoreLines> {
        let file = File::open(&self.path).map_err(|err| self.error(err))?;
        Ok(BufReader::new(file).split(b'\n'))
    }

    /// Parses every line, skipping blank lines silently and malformed ones
    /// with a warning.
    pub fn load(&self) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        for (index, row) in self.lines()?.enumerate() {
            let row = row.map_err(|err| self.error(err))?;
            let parsed = match std::str::from_utf8(&row) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => Expense::parse_line(line),
                Err(_) => Err(RecordError::Encoding),
            };
            match parsed {
                Ok(expense) => report.expenses.push(expense),
                Err(reason) => {
                    let line_number = index + 1;
                    tracing::warn!(
                        path = %self.path.display(),
                        line_number,
                        %reason,
                        "skipping malformed expense row"
                    );
                    report.skipped.push(SkippedRow {
                        line_number,
                        reason,
                    });
                }
            }
        }
        tracing::debug!(
            records = report.expenses.len(),
            skipped = report.skipped.len(),
            "scanned expense store"
        );
        Ok(report)
    }

    /// True when the store holds no non-blank lines.
    pub fn is_empty(&self) -> Result<bool> {
        for row in self.lines()? {
            let row = row.map_err(|err| self.error(err))?;
            let blank = std::str::from_utf8(&row).is_ok_and(|line| line.trim().is_empty());
            if !blank {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn needs_terminator(&self) -> Result<bool> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(self.error(err)),
        };
        let len = file.metadata().map_err(|err| self.error(err))?.len();
        if len == 0 {
            return Ok(false);
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|err| self.error(err))?;
        Ok(last[0] != b'\n')
    }

    fn error(&self, source: io::Error) -> ExpenseError {
        ExpenseError::store(&self.path, source)
    }
}
