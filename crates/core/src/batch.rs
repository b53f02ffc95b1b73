//! Batch control
//!
//! Pure decision logic for walking a list of samples: how a user's answer
//! changes the run, and a tally of what happened to each sample.

use crate::error::Error;

/// Whether the user is asked before each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    ConfirmEach,
    ProcessAll,
}

/// Answer to "migrate this sample?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Process,
    ProcessAll,
    Skip,
    Stop,
}

impl Decision {
    /// `y` / `a` / `n` / `q`, case-insensitive.
    pub fn from_key(key: char) -> Option<Decision> {
        match key.to_ascii_lowercase() {
            'y' => Some(Decision::Process),
            'a' => Some(Decision::ProcessAll),
            'n' => Some(Decision::Skip),
            'q' => Some(Decision::Stop),
            _ => None,
        }
    }

    /// First non-blank character of an input line.
    pub fn from_line(line: &str) -> Option<Decision> {
        line.trim().chars().next().and_then(Decision::from_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Process,
    Skip,
}

/// Apply a decision to the current mode.
///
/// `Stop` ends the batch with [`Error::UserCancelled`].
pub fn resolve(mode: Mode, decision: Decision) -> Result<(Action, Mode), Error> {
    match decision {
        Decision::Process => Ok((Action::Process, mode)),
        Decision::ProcessAll => Ok((Action::Process, Mode::ProcessAll)),
        Decision::Skip => Ok((Action::Skip, mode)),
        Decision::Stop => Err(Error::UserCancelled),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    Migrated { files: usize },
    Skipped,
    Failed { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub cancelled: bool,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &SampleOutcome) {
        match outcome {
            SampleOutcome::Migrated { .. } => self.migrated += 1,
            SampleOutcome::Skipped => self.skipped += 1,
            SampleOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.migrated + self.skipped + self.failed
    }

    /// Nothing failed and the run was not cancelled.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && !self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_decisions() {
        assert_eq!(Decision::from_key('y'), Some(Decision::Process));
        assert_eq!(Decision::from_key('Y'), Some(Decision::Process));
        assert_eq!(Decision::from_key('A'), Some(Decision::ProcessAll));
        assert_eq!(Decision::from_key('n'), Some(Decision::Skip));
        assert_eq!(Decision::from_key('q'), Some(Decision::Stop));
        assert_eq!(Decision::from_key('x'), None);
    }

    #[test]
    fn test_from_line_uses_first_character() {
        assert_eq!(Decision::from_line("  yes\n"), Some(Decision::Process));
        assert_eq!(Decision::from_line("No"), Some(Decision::Skip));
        assert_eq!(Decision::from_line("\n"), None);
    }

    #[test]
    fn test_process_all_switches_mode() {
        let (action, mode) = resolve(Mode::ConfirmEach, Decision::ProcessAll).unwrap();
        assert_eq!(action, Action::Process);
        assert_eq!(mode, Mode::ProcessAll);
    }

    #[test]
    fn test_skip_keeps_mode() {
        let (action, mode) = resolve(Mode::ConfirmEach, Decision::Skip).unwrap();
        assert_eq!(action, Action::Skip);
        assert_eq!(mode, Mode::ConfirmEach);
    }

    #[test]
    fn test_stop_is_a_fatal_cancellation() {
        let err = resolve(Mode::ConfirmEach, Decision::Stop).unwrap_err();
        assert!(matches!(err, Error::UserCancelled));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_summary_tally() {
        let mut summary = BatchSummary::default();
        summary.record(&SampleOutcome::Migrated { files: 3 });
        summary.record(&SampleOutcome::Skipped);
        summary.record(&SampleOutcome::Failed {
            reason: "Model response was empty".into(),
        });

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.migrated, 1);
        assert!(!summary.is_clean());
    }
}
