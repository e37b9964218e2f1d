//! # Open Shift Form State
//!
//! Local state of the open-shift dialog, kept free of Yew handles so every
//! transition can be exercised without a browser.
//!
//! The component owns one `OpenShiftFormState` and replaces it wholesale on
//! each transition. Results of the async handler are applied with
//! [`OpenShiftFormState::settled`], which rebuilds the state from the amount
//! that was actually submitted rather than from a snapshot captured before
//! the await.

use shared::{parse_opening_amount, OpeningAmountError};

/// Which branch of the dialog is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    ShiftAlreadyOpen,
    OpeningForm,
}

impl ModalView {
    pub fn from_flags(show: bool, is_open: bool) -> Self {
        match (show, is_open) {
            (false, _) => ModalView::Hidden,
            (true, true) => ModalView::ShiftAlreadyOpen,
            (true, false) => ModalView::OpeningForm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenShiftFormState {
    /// Raw text of the amount input
    pub amount_input: String,
    /// True while the open-shift handler is pending
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl OpenShiftFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(&self, input: String) -> Self {
        Self {
            amount_input: input,
            ..self.clone()
        }
    }

    /// State to show when the dialog is opened again.
    ///
    /// A submission still in flight survives the reopen, so a second call to
    /// the handler can't start until the first one settles.
    pub fn reopened(&self) -> Self {
        if self.is_submitting {
            self.clone()
        } else {
            Self::new()
        }
    }

    /// Whether closing the dialog is allowed right now
    pub fn can_dismiss(&self) -> bool {
        !self.is_submitting
    }

    /// Attempt a submission.
    ///
    /// Returns the next state and, when the handler should be invoked, the
    /// parsed amount. An empty input or a submission already in flight is
    /// ignored without an error message.
    pub fn submit(&self) -> (Self, Option<f64>) {
        if self.is_submitting {
            return (self.clone(), None);
        }

        match parse_opening_amount(&self.amount_input) {
            Ok(amount) => (
                Self {
                    amount_input: self.amount_input.clone(),
                    is_submitting: true,
                    error: None,
                },
                Some(amount),
            ),
            Err(OpeningAmountError::Empty) => (self.clone(), None),
            Err(e) => (
                Self {
                    error: Some(e.to_string()),
                    ..self.clone()
                },
                None,
            ),
        }
    }

    /// State after the handler for `submitted_input` resolved.
    pub fn settled(submitted_input: String, result: &Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::new(),
            Err(e) => Self {
                amount_input: submitted_input,
                is_submitting: false,
                error: Some(format!("Failed to open shift: {}", e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_view_branches() {
        assert_eq!(ModalView::from_flags(false, false), ModalView::Hidden);
        assert_eq!(ModalView::from_flags(false, true), ModalView::Hidden);
        assert_eq!(ModalView::from_flags(true, true), ModalView::ShiftAlreadyOpen);
        assert_eq!(ModalView::from_flags(true, false), ModalView::OpeningForm);
    }

    #[test]
    fn test_empty_amount_does_not_submit() {
        let state = OpenShiftFormState::new();
        let (next, amount) = state.submit();
        assert_eq!(amount, None);
        assert_eq!(next, state);

        let (next, amount) = state.with_amount("   ".to_string()).submit();
        assert_eq!(amount, None);
        assert!(!next.is_submitting);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_valid_amount_starts_submission() {
        let state = OpenShiftFormState::new().with_amount("250.75".to_string());
        let (next, amount) = state.submit();
        assert_eq!(amount, Some(250.75));
        assert!(next.is_submitting);
        assert_eq!(next.amount_input, "250.75");
    }

    #[test]
    fn test_zero_amount_is_submitted() {
        let (next, amount) = OpenShiftFormState::new().with_amount("0".to_string()).submit();
        assert_eq!(amount, Some(0.0));
        assert!(next.is_submitting);
    }

    #[test]
    fn test_pending_submission_blocks_resubmit() {
        let (pending, _) = OpenShiftFormState::new().with_amount("10".to_string()).submit();
        let (next, amount) = pending.submit();
        assert_eq!(amount, None);
        assert_eq!(next, pending);
    }

    #[test]
    fn test_invalid_amount_shows_error_without_submitting() {
        let state = OpenShiftFormState::new().with_amount("-20".to_string());
        let (next, amount) = state.submit();
        assert_eq!(amount, None);
        assert!(!next.is_submitting);
        assert_eq!(next.error.as_deref(), Some("Opening amount cannot be negative"));
        assert_eq!(next.amount_input, "-20");
    }

    #[test]
    fn test_new_submission_clears_previous_error() {
        let state = OpenShiftFormState {
            amount_input: "15".to_string(),
            is_submitting: false,
            error: Some("Failed to open shift: timeout".to_string()),
        };
        let (next, amount) = state.submit();
        assert_eq!(amount, Some(15.0));
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_reopen_while_pending_keeps_submission() {
        let (pending, amount) = OpenShiftFormState::new().with_amount("10".to_string()).submit();
        assert_eq!(amount, Some(10.0));
        assert!(!pending.can_dismiss());

        // Dialog hidden and shown again before the handler resolved
        let reopened = pending.reopened();
        assert_eq!(reopened, pending);

        let (next, amount) = reopened.with_amount("20".to_string()).submit();
        assert_eq!(amount, None);
        assert!(next.is_submitting);
    }

    #[test]
    fn test_reopen_after_settle_starts_fresh() {
        let failed = OpenShiftFormState::settled("10".to_string(), &Err("timeout".to_string()));
        assert!(failed.can_dismiss());
        assert_eq!(failed.reopened(), OpenShiftFormState::new());
    }

    #[test]
    fn test_success_clears_input_and_loading() {
        let next = OpenShiftFormState::settled("100".to_string(), &Ok(()));
        assert_eq!(next, OpenShiftFormState::new());
    }

    #[test]
    fn test_failure_keeps_input_and_reports_error() {
        let next = OpenShiftFormState::settled(
            "100".to_string(),
            &Err("Register already has an open shift".to_string()),
        );
        assert!(!next.is_submitting);
        assert_eq!(next.amount_input, "100");
        assert_eq!(
            next.error.as_deref(),
            Some("Failed to open shift: Register already has an open shift")
        );
    }
}
