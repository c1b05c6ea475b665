//! Write-time checks for transitions.
//!
//! All checks run on every write and their failures are accumulated with
//! `Validation`, so a caller sees every problem with a transition at once.

use super::error::TransitionViolation;
use crate::config::HistoryConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Checked = Validation<(), NonEmptyVec<TransitionViolation>>;

fn check_target(to: &str, config: &HistoryConfig) -> Checked {
    if config.reject_empty_to && to.is_empty() {
        Validation::fail(TransitionViolation::EmptyTarget)
    } else {
        Validation::success(())
    }
}

fn check_note(note: &str, config: &HistoryConfig) -> Checked {
    let length = note.chars().count();
    if length > config.max_note_chars {
        Validation::fail(TransitionViolation::NoteTooLong {
            length,
            max: config.max_note_chars,
        })
    } else {
        Validation::success(())
    }
}

/// Run every check, collecting all violations.
pub(crate) fn validate_transition(to: &str, note: &str, config: &HistoryConfig) -> Checked {
    Validation::all_vec(vec![check_target(to, config), check_note(note, config)]).map(|_| ())
}

/// Flatten a validation outcome into the violations it carries.
pub(crate) fn violations(checked: Checked) -> Vec<TransitionViolation> {
    match checked {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
