use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use egui_feedback::{
    FeedbackGateway, FeedbackModal, FeedbackSubmission, GatewayError, GatewayReceipt,
};

enum ScriptedOutcome {
    Reply(u16, &'static str),
    Fail(&'static str),
}

/// In-process gateway with a scripted outcome; records every submission.
pub struct ScriptedGateway {
    outcome: ScriptedOutcome,
    gate: Option<Mutex<Receiver<()>>>,
    submissions: Mutex<Vec<FeedbackSubmission>>,
}

impl ScriptedGateway {
    pub fn replying(status: u16, status_text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            outcome: ScriptedOutcome::Reply(status, status_text),
            gate: None,
            submissions: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            outcome: ScriptedOutcome::Fail(message),
            gate: None,
            submissions: Mutex::new(Vec::new()),
        })
    }

    /// Like `replying`, but every submission blocks until the returned
    /// sender releases it (or is dropped).
    pub fn gated(status: u16, status_text: &'static str) -> (Arc<Self>, Sender<()>) {
        let (release_tx, release_rx) = channel();
        let gateway = Arc::new(Self {
            outcome: ScriptedOutcome::Reply(status, status_text),
            gate: Some(Mutex::new(release_rx)),
            submissions: Mutex::new(Vec::new()),
        });
        (gateway, release_tx)
    }

    pub fn submissions(&self) -> Vec<FeedbackSubmission> {
        self.submissions.lock().expect("submissions lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.submissions.lock().expect("submissions lock").len()
    }
}

impl FeedbackGateway for ScriptedGateway {
    fn submit(&self, submission: &FeedbackSubmission) -> Result<GatewayReceipt, GatewayError> {
        self.submissions
            .lock()
            .expect("submissions lock")
            .push(submission.clone());
        if let Some(gate) = &self.gate {
            let _ = gate.lock().expect("gate lock").recv();
        }
        match self.outcome {
            ScriptedOutcome::Reply(status, status_text) => Ok(GatewayReceipt {
                status,
                status_text: status_text.to_string(),
            }),
            ScriptedOutcome::Fail(message) => Err(GatewayError::Transport(message.to_string())),
        }
    }
}

/// Poll until the in-flight submission settles.
pub fn wait_for_settle(modal: &mut FeedbackModal) {
    for _ in 0..200 {
        modal.poll_jobs();
        if !modal.is_submitting() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("submission did not settle in time");
}

/// Poll until the background thread has reached the gateway.
pub fn wait_for_calls(gateway: &ScriptedGateway, expected: usize) {
    for _ in 0..200 {
        if gateway.call_count() == expected {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("gateway never saw {expected} calls");
}
