//! Interactive primitives the controller needs from its front end.

/// Prompt, confirm and alert, as offered by whichever front end drives the
/// controller. The terminal asks the user; the web front end answers from
/// the submitted form.
pub trait Prompter {
    /// Ask for a line of input. `None` means the user cancelled.
    fn prompt(&mut self, question: &str) -> Option<String>;

    fn confirm(&mut self, question: &str) -> bool;

    fn alert(&mut self, message: &str);
}

/// A prompter with its answers decided up front.
///
/// Alerts are collected instead of shown so the caller can render them.
#[derive(Debug, Clone, Default)]
pub struct PresetPrompter {
    pub answer: Option<String>,
    pub confirmed: bool,
    pub alerts: Vec<String>,
}

impl PresetPrompter {
    #[must_use]
    pub fn answering(answer: Option<String>) -> Self {
        Self { answer, ..Self::default() }
    }

    #[must_use]
    pub fn confirming(confirmed: bool) -> Self {
        Self { confirmed, ..Self::default() }
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Prompter for PresetPrompter {
    fn prompt(&mut self, _question: &str) -> Option<String> {
        self.answer.take()
    }

    fn confirm(&mut self, _question: &str) -> bool {
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
