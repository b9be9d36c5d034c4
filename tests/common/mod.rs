use std::path::PathBuf;

use expense_tracker::cli::{
    input::ScriptedInput,
    output::{Output, OutputPreferences},
    Session,
};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::TextStore;
use tempfile::TempDir;

/// An isolated store inside its own temporary directory.
pub struct TestEnv {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("expenses.csv")
    }

    pub fn service(&self) -> ExpenseService {
        ExpenseService::new(TextStore::new(self.store_path()))
    }

    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("read store")
    }

    /// Runs a full session over scripted answers and returns everything it printed.
    pub fn run_session(&self, answers: &[&str]) -> String {
        self.run_script(ScriptedInput::new(answers.iter().copied()))
    }

    pub fn run_script(&self, input: ScriptedInput) -> String {
        let output = Output::new(Vec::new(), OutputPreferences { plain_mode: true });
        let mut session = Session::new(self.service(), input, output);
        session.run().expect("session runs to completion");
        let (_, bytes) = session.into_parts();
        String::from_utf8(bytes).expect("utf8 output")
    }
}
