mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use egui_feedback::{
    FeedbackCategory, FeedbackGateway, FeedbackModal, FeedbackStage, IdentifierMode,
};
use support::{ScriptedGateway, wait_for_calls, wait_for_settle};

struct FlowHarness {
    modal: FeedbackModal,
    closes: Rc<Cell<usize>>,
    additions: Rc<Cell<usize>>,
}

impl FlowHarness {
    fn new(gateway: Arc<dyn FeedbackGateway>) -> Self {
        let closes = Rc::new(Cell::new(0));
        let additions = Rc::new(Cell::new(0));
        let close_counter = Rc::clone(&closes);
        let added_counter = Rc::clone(&additions);
        let modal = FeedbackModal::new("widget-tests", move || {
            close_counter.set(close_counter.get() + 1);
        })
        .page_path("/tests")
        .on_feedback_added(move || {
            added_counter.set(added_counter.get() + 1);
        })
        .gateway(gateway);
        Self {
            modal,
            closes,
            additions,
        }
    }

    fn open_with_draft(&mut self, text: &str, category: FeedbackCategory) {
        self.modal.open();
        self.modal.draft_mut().text = text.to_string();
        self.modal.select_category(category);
    }
}

#[test]
fn incomplete_drafts_never_reach_the_gateway() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut h = FlowHarness::new(gateway.clone());

    h.modal.open();
    h.modal.trigger_submit();
    assert!(!h.modal.is_submitting());
    assert_eq!(gateway.call_count(), 0);

    h.modal.draft_mut().text = "text but no category".to_string();
    h.modal.trigger_submit();
    assert_eq!(gateway.call_count(), 0);

    h.modal.draft_mut().text.clear();
    h.modal.select_category(FeedbackCategory::Bug);
    h.modal.trigger_submit();
    assert_eq!(gateway.call_count(), 0);
    assert_eq!(h.modal.stage(), FeedbackStage::Asking);
}

#[test]
fn required_identifier_gates_submission() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut modal = FeedbackModal::new("widget-tests", || {})
        .identifier_mode(IdentifierMode::Required)
        .gateway(gateway.clone());

    modal.open();
    modal.draft_mut().text = "needs an identifier".to_string();
    modal.select_category(FeedbackCategory::Feature);
    modal.trigger_submit();
    assert_eq!(gateway.call_count(), 0);

    modal.draft_mut().identifier = "gia@example.com".to_string();
    modal.trigger_submit();
    wait_for_settle(&mut modal);
    assert_eq!(gateway.call_count(), 1);
}

#[test]
fn complete_draft_is_submitted_exactly_once_as_typed() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut modal = FeedbackModal::new("widget-tests", || {})
        .page_path("/tests")
        .identifier("gia@example.com")
        .gateway(gateway.clone());

    modal.open();
    modal.draft_mut().text = "  spacing kept as typed  ".to_string();
    modal.select_category(FeedbackCategory::Feature);
    modal.trigger_submit();
    assert!(modal.is_submitting());
    wait_for_settle(&mut modal);

    let submissions = gateway.submissions();
    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert_eq!(submission.project_id, "widget-tests");
    assert_eq!(submission.text, "  spacing kept as typed  ");
    assert_eq!(submission.category, FeedbackCategory::Feature);
    assert_eq!(submission.identifier.as_deref(), Some("gia@example.com"));
    assert_eq!(submission.page_path, "/tests");
}

#[test]
fn accepted_receipt_concludes_and_notifies_once() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("the export flow is great", FeedbackCategory::Feature);
    h.modal.trigger_submit();
    wait_for_settle(&mut h.modal);

    assert_eq!(h.modal.stage(), FeedbackStage::Concluded);
    assert_eq!(h.additions.get(), 1);
    assert_eq!(h.closes.get(), 0);
    assert!(h.modal.last_error().is_none());
    // The conclusion screen shows over the untouched draft until dismissed.
    assert_eq!(h.modal.draft().text, "the export flow is great");
}

#[test]
fn refused_receipt_still_concludes_but_shows_the_error() {
    let gateway = ScriptedGateway::replying(404, "Not Found");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("lost in the void", FeedbackCategory::Other);
    h.modal.trigger_submit();
    wait_for_settle(&mut h.modal);

    assert_eq!(h.modal.stage(), FeedbackStage::Concluded);
    assert_eq!(h.additions.get(), 1);
    assert!(h.modal.last_error().is_some());
    assert_eq!(gateway.call_count(), 1);
}

#[test]
fn transport_failure_keeps_the_form_open_for_a_retry() {
    let gateway = ScriptedGateway::failing("connection refused");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("please keep my words", FeedbackCategory::Bug);
    h.modal.trigger_submit();
    wait_for_settle(&mut h.modal);

    assert_eq!(h.modal.stage(), FeedbackStage::Asking);
    assert_eq!(h.additions.get(), 0);
    assert!(h.modal.last_error().is_some());
    assert_eq!(h.modal.draft().text, "please keep my words");
    assert_eq!(h.modal.draft().category, Some(FeedbackCategory::Bug));

    h.modal.trigger_submit();
    wait_for_settle(&mut h.modal);
    assert_eq!(gateway.call_count(), 2);
    assert_eq!(h.modal.stage(), FeedbackStage::Asking);
}

#[test]
fn conclusion_reset_clears_entry_without_another_call() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut modal = FeedbackModal::new("widget-tests", || {})
        .identifier("gia@example.com")
        .gateway(gateway.clone());
    modal.open();
    modal.draft_mut().text = "first round".to_string();
    modal.select_category(FeedbackCategory::Feature);
    modal.trigger_submit();
    wait_for_settle(&mut modal);
    assert_eq!(modal.stage(), FeedbackStage::Concluded);

    modal.trigger_submit();
    assert_eq!(modal.stage(), FeedbackStage::Asking);
    assert!(modal.draft().text.is_empty());
    assert!(modal.draft().category.is_none());
    assert_eq!(modal.draft().identifier, "gia@example.com");
    assert_eq!(gateway.call_count(), 1);
    assert!(!modal.is_submitting());
}

#[test]
fn in_flight_submission_blocks_a_second_trigger() {
    let (gateway, release) = ScriptedGateway::gated(200, "OK");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("patience", FeedbackCategory::Other);
    h.modal.trigger_submit();
    wait_for_calls(&gateway, 1);
    assert!(h.modal.is_submitting());
    assert!(!h.modal.can_submit());

    h.modal.trigger_submit();
    assert_eq!(gateway.call_count(), 1);

    release.send(()).expect("release gated gateway");
    wait_for_settle(&mut h.modal);
    assert_eq!(h.modal.stage(), FeedbackStage::Concluded);
    assert_eq!(h.additions.get(), 1);
    assert_eq!(gateway.call_count(), 1);
}

#[test]
fn completion_lands_even_after_the_panel_closes() {
    let (gateway, release) = ScriptedGateway::gated(200, "OK");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("closing early", FeedbackCategory::Feature);
    h.modal.trigger_submit();
    wait_for_calls(&gateway, 1);

    h.modal.close();
    assert!(!h.modal.is_open());
    assert_eq!(h.closes.get(), 1);

    release.send(()).expect("release gated gateway");
    wait_for_settle(&mut h.modal);
    assert_eq!(h.modal.stage(), FeedbackStage::Concluded);
    assert_eq!(h.additions.get(), 1);
    assert!(!h.modal.is_open());
}

#[test]
fn reopening_after_a_conclusion_starts_fresh() {
    let gateway = ScriptedGateway::replying(200, "OK");
    let mut h = FlowHarness::new(gateway.clone());
    h.open_with_draft("round one", FeedbackCategory::Bug);
    h.modal.trigger_submit();
    wait_for_settle(&mut h.modal);
    h.modal.close();

    h.modal.open();
    assert_eq!(h.modal.stage(), FeedbackStage::Asking);
    assert!(h.modal.draft().text.is_empty());
    assert!(h.modal.draft().category.is_none());
    assert!(h.modal.last_error().is_none());
}
