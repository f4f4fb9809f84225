//! Prompter over stdin/stderr.

use std::io::{self, BufRead, Write};

use catalogue_app::Prompter;

pub(crate) struct TerminalPrompter {
    /// Answer every confirmation with yes (`--yes`).
    assume_yes: bool,
}

impl TerminalPrompter {
    pub(crate) fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, question: &str) -> Option<String> {
        eprint!("{question} ");
        if io::stderr().flush().is_err() {
            return None;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.prompt(&format!("{question} [y/N]"))
            .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
