//! Submission flow: footer action, background handoff, completion handling.

use std::sync::mpsc::TryRecvError;

use crate::gateway::FeedbackSubmission;

use super::FeedbackModal;
use super::state::FeedbackStage;

impl FeedbackModal {
    /// Run the footer action: submit the draft while asking, or reset the
    /// form from the conclusion screen. Also bound to command+Enter inside
    /// the text area.
    pub fn trigger_submit(&mut self) {
        match self.state.stage {
            FeedbackStage::Concluded => self.dismiss_conclusion(),
            FeedbackStage::Asking => self.begin_submit(),
        }
    }

    /// Leave the conclusion screen: text and category are cleared, the
    /// identifier survives, and the panel asks again.
    pub fn dismiss_conclusion(&mut self) {
        self.state.draft.clear_entry();
        self.state.stage = FeedbackStage::Asking;
        self.state.focus_text_requested = true;
    }

    fn begin_submit(&mut self) {
        if !self.state.can_submit(self.identifier_mode) {
            return;
        }
        let Some(category) = self.state.draft.category else {
            return;
        };
        let identifier = &self.state.draft.identifier;
        let submission = FeedbackSubmission {
            project_id: self.project_id.clone(),
            text: self.state.draft.text.clone(),
            category,
            identifier: (!identifier.is_empty()).then(|| identifier.clone()),
            page_path: self.page_path.clone(),
        };
        self.state.submitting = true;
        self.state.last_error = None;
        self.jobs.begin(self.gateway.clone(), submission);
    }

    /// Apply finished submissions. Runs from [`show`](Self::show) before the
    /// visibility check, so completions land even while the panel is hidden.
    pub fn poll_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            self.jobs.clear();
            self.state.submitting = false;
            match message.result {
                Ok(receipt) if receipt.accepted() => {
                    self.state.last_error = None;
                    self.state.stage = FeedbackStage::Concluded;
                    self.notify_feedback_added();
                }
                Ok(receipt) => {
                    // A refusal still concludes and notifies; only transport
                    // failures keep the form open.
                    tracing::warn!(
                        status = receipt.status,
                        "feedback gateway refused submission: {}",
                        receipt.status_text
                    );
                    self.state.last_error = Some(self.strings.error.clone());
                    self.state.stage = FeedbackStage::Concluded;
                    self.notify_feedback_added();
                }
                Err(err) => {
                    tracing::warn!("feedback submission failed: {err}");
                    self.state.last_error = Some(self.strings.error.clone());
                }
            }
        }
    }
}
