//! State behind the rendered panel.

use crate::gateway::FeedbackCategory;

use super::IdentifierMode;

/// Which screen the panel is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStage {
    /// Collecting a draft.
    Asking,
    /// Showing the post-submission confirmation.
    Concluded,
}

impl Default for FeedbackStage {
    fn default() -> Self {
        Self::Asking
    }
}

/// The in-progress, unsubmitted feedback entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    /// Free-form feedback text.
    pub text: String,
    /// Selected classification, if any.
    pub category: Option<FeedbackCategory>,
    /// Identifier input, for example an e-mail address.
    pub identifier: String,
}

impl FeedbackDraft {
    /// Clear what the conclusion screen resets; the identifier is kept.
    pub(crate) fn clear_entry(&mut self) {
        self.text.clear();
        self.category = None;
    }
}

/// Mutable widget state the render and submit paths share.
#[derive(Clone, Debug, Default)]
pub(crate) struct ModalState {
    /// Whether the panel is visible.
    pub open: bool,
    /// Current display stage.
    pub stage: FeedbackStage,
    /// Draft under edit.
    pub draft: FeedbackDraft,
    /// True while a submission is in flight.
    pub submitting: bool,
    /// Inline error from the last submission, if any.
    pub last_error: Option<String>,
    /// Whether to focus the text area on the next frame.
    pub focus_text_requested: bool,
}

impl ModalState {
    /// Submit predicate: text present, category chosen, identifier present
    /// when required, and nothing already in flight.
    pub(crate) fn can_submit(&self, mode: IdentifierMode) -> bool {
        if self.submitting {
            return false;
        }
        if self.draft.text.is_empty() || self.draft.category.is_none() {
            return false;
        }
        mode != IdentifierMode::Required || !self.draft.identifier.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> ModalState {
        ModalState {
            draft: FeedbackDraft {
                text: "More keyboard shortcuts please".to_string(),
                category: Some(FeedbackCategory::Feature),
                identifier: String::new(),
            },
            ..ModalState::default()
        }
    }

    #[test]
    fn empty_text_blocks_submission() {
        let mut state = filled_state();
        state.draft.text.clear();
        assert!(!state.can_submit(IdentifierMode::Hidden));
    }

    #[test]
    fn missing_category_blocks_submission() {
        let mut state = filled_state();
        state.draft.category = None;
        assert!(!state.can_submit(IdentifierMode::Hidden));
    }

    #[test]
    fn whitespace_only_text_still_counts_as_present() {
        let mut state = filled_state();
        state.draft.text = "   ".to_string();
        assert!(state.can_submit(IdentifierMode::Hidden));
    }

    #[test]
    fn in_flight_submission_blocks_another() {
        let mut state = filled_state();
        state.submitting = true;
        assert!(!state.can_submit(IdentifierMode::Hidden));
    }

    #[test]
    fn required_identifier_must_be_non_empty() {
        let mut state = filled_state();
        assert!(!state.can_submit(IdentifierMode::Required));
        state.draft.identifier = "gia@example.com".to_string();
        assert!(state.can_submit(IdentifierMode::Required));
    }

    #[test]
    fn optional_identifier_may_stay_empty() {
        let state = filled_state();
        assert!(state.can_submit(IdentifierMode::Optional));
        assert!(state.can_submit(IdentifierMode::Hidden));
    }

    #[test]
    fn clear_entry_keeps_the_identifier() {
        let mut draft = FeedbackDraft {
            text: "hello".to_string(),
            category: Some(FeedbackCategory::Bug),
            identifier: "gia@example.com".to_string(),
        };
        draft.clear_entry();
        assert!(draft.text.is_empty());
        assert!(draft.category.is_none());
        assert_eq!(draft.identifier, "gia@example.com");
    }
}
