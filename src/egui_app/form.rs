/**
 * Submission Form
 *
 * A sender name shared by every row and a dynamic list of rows, each a
 * message with an API delay. Submitting validates every row, turns them into
 * `Submission`s stamped with the same client time, and resets the rows.
 */

use chrono::Utc;

use crate::shared::{SharedError, Submission};

/// Delay given to new rows
pub const DEFAULT_SLEEP_MS: u64 = 1000;

/// Increment of the delay field
pub const SLEEP_STEP_MS: u64 = 100;

/// Largest delay a row accepts (ten minutes)
pub const MAX_SLEEP_MS: u64 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub message: String,
    pub sleep_ms: u64,
}

impl Default for FormRow {
    fn default() -> Self {
        Self {
            message: String::new(),
            sleep_ms: DEFAULT_SLEEP_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    pub sender: String,
    pub rows: Vec<FormRow>,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            sender: String::new(),
            rows: vec![FormRow::default()],
        }
    }
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sender(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            ..Self::default()
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(FormRow::default());
    }

    /// Remove the row at `index`; out-of-range indices are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Check every row, returning the first problem found
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.rows.iter().any(|row| row.message.trim().is_empty()) {
            return Err(SharedError::validation("message", "Missing message"));
        }
        if self.rows.iter().any(|row| row.sleep_ms > MAX_SLEEP_MS) {
            return Err(SharedError::validation(
                "sleepMs",
                format!("API delay must be at most {} ms", MAX_SLEEP_MS),
            ));
        }
        Ok(())
    }

    /// Validate, build one submission per row and reset the rows
    ///
    /// The sender name is kept. On a validation error the form is left
    /// untouched.
    pub fn submit(&mut self) -> Result<Vec<Submission>, SharedError> {
        self.validate()?;

        let now = Utc::now();
        let submissions = self
            .rows
            .iter()
            .map(|row| Submission::at(self.sender.clone(), row.message.clone(), row.sleep_ms, now))
            .collect();

        self.rows = vec![FormRow::default()];
        Ok(submissions)
    }
}
