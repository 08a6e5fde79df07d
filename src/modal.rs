//! The feedback modal widget.
//!
//! [`FeedbackModal`] owns its draft, its resolved colors and strings, and the
//! background submission job. The host constructs it once, opens it from any
//! affordance, and calls [`FeedbackModal::show`] every frame.

mod jobs;
mod render;
mod state;
mod submit;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::gateway::{FeedbackCategory, FeedbackGateway, HttpGateway};
use crate::strings::{FeedbackStrings, FeedbackStringsOverride, resolve_strings};
use crate::theme::{FeedbackColors, FeedbackColorsOverride, resolve_colors};

use jobs::SubmitJobs;
use state::ModalState;

pub use state::{FeedbackDraft, FeedbackStage};

/// Whether and how the identifier field is collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierMode {
    /// No identifier field is shown.
    Hidden,
    /// The field is shown and may be left empty.
    Optional,
    /// The field is shown and must be non-empty to submit.
    Required,
}

impl Default for IdentifierMode {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Modal feedback panel owned by the host application.
///
/// ```no_run
/// use egui_feedback::FeedbackModal;
///
/// let modal = FeedbackModal::new("my-project", || {})
///     .page_path("/settings");
/// // each frame: modal.show(ctx);
/// ```
pub struct FeedbackModal {
    project_id: String,
    page_path: String,
    prefill_identifier: Option<String>,
    identifier_mode: IdentifierMode,
    identifier_placeholder: Option<String>,
    colors: FeedbackColors,
    strings: FeedbackStrings,
    gateway: Arc<dyn FeedbackGateway>,
    state: ModalState,
    jobs: SubmitJobs,
    on_close: Box<dyn FnMut()>,
    on_feedback_added: Option<Box<dyn FnMut()>>,
}

impl FeedbackModal {
    /// Widget for `project_id`; `on_close` runs whenever the user dismisses
    /// the panel.
    pub fn new(project_id: impl Into<String>, on_close: impl FnMut() + 'static) -> Self {
        Self {
            project_id: project_id.into(),
            page_path: "/".to_string(),
            prefill_identifier: None,
            identifier_mode: IdentifierMode::default(),
            identifier_placeholder: None,
            colors: resolve_colors(None),
            strings: resolve_strings(None),
            gateway: Arc::new(HttpGateway::default()),
            state: ModalState::default(),
            jobs: SubmitJobs::new(),
            on_close: Box::new(on_close),
            on_feedback_added: None,
        }
    }

    /// Page or screen identifier attached to submissions, `/` by default.
    pub fn page_path(mut self, path: impl Into<String>) -> Self {
        self.page_path = path.into();
        self
    }

    /// Prefill the identifier field on every open.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.prefill_identifier = Some(identifier.into());
        self
    }

    /// Collect an identifier in the given mode, hidden by default.
    pub fn identifier_mode(mut self, mode: IdentifierMode) -> Self {
        self.identifier_mode = mode;
        self
    }

    /// Placeholder for the identifier field, taking precedence over the
    /// string set.
    pub fn identifier_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.identifier_placeholder = Some(placeholder.into());
        self
    }

    /// Lay partial color overrides over the default palette.
    pub fn colors(mut self, overrides: FeedbackColorsOverride) -> Self {
        self.colors = resolve_colors(Some(&overrides));
        self
    }

    /// Lay partial string overrides over the default text set.
    pub fn strings(mut self, overrides: FeedbackStringsOverride) -> Self {
        self.strings = resolve_strings(Some(&overrides));
        self
    }

    /// Replace the default HTTP gateway.
    pub fn gateway(mut self, gateway: Arc<dyn FeedbackGateway>) -> Self {
        self.gateway = gateway;
        self
    }

    /// Callback invoked once per concluded submission.
    pub fn on_feedback_added(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_feedback_added = Some(Box::new(callback));
        self
    }

    /// Open the panel with a fresh draft.
    pub fn open(&mut self) {
        self.state.open = true;
        self.state.stage = FeedbackStage::Asking;
        self.state.draft = FeedbackDraft {
            identifier: self.prefill_identifier.clone().unwrap_or_default(),
            ..FeedbackDraft::default()
        };
        self.state.last_error = None;
        self.state.submitting = self.jobs.in_progress();
        self.state.focus_text_requested = true;
    }

    /// Hide the panel and notify the host. The draft stays as typed; the
    /// next [`open`](Self::open) starts fresh.
    pub fn close(&mut self) {
        self.state.open = false;
        (self.on_close)();
    }

    /// Whether the panel is currently shown.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Current display stage.
    pub fn stage(&self) -> FeedbackStage {
        self.state.stage
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Inline error from the last refused or failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    /// Read the draft under edit.
    pub fn draft(&self) -> &FeedbackDraft {
        &self.state.draft
    }

    /// Edit the draft directly; the rendered fields bind to the same data.
    pub fn draft_mut(&mut self) -> &mut FeedbackDraft {
        &mut self.state.draft
    }

    /// Select a category. The latest choice wins and focus returns to the
    /// text area.
    pub fn select_category(&mut self, category: FeedbackCategory) {
        self.state.draft.category = Some(category);
        self.state.focus_text_requested = true;
    }

    /// Whether the footer action would submit right now.
    pub fn can_submit(&self) -> bool {
        self.state.stage == FeedbackStage::Asking && self.state.can_submit(self.identifier_mode)
    }

    fn notify_feedback_added(&mut self) {
        if let Some(callback) = self.on_feedback_added.as_mut() {
            callback();
        }
    }
}
