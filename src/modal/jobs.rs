//! Background delivery of submissions.
//!
//! One channel, one job at a time. The spawned thread owns the submission
//! and a gateway handle; the UI thread drains completions in
//! [`FeedbackModal::poll_jobs`](super::FeedbackModal::poll_jobs).

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::gateway::{FeedbackGateway, FeedbackSubmission, GatewayError, GatewayReceipt};

/// Completion of one background submission.
pub(crate) struct SubmitMessage {
    pub(crate) result: Result<GatewayReceipt, GatewayError>,
}

pub(crate) struct SubmitJobs {
    message_tx: Sender<SubmitMessage>,
    message_rx: Receiver<SubmitMessage>,
    in_progress: bool,
}

impl SubmitJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            message_tx,
            message_rx,
            in_progress: false,
        }
    }

    pub(crate) fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Spawn one delivery; refused while another is still in flight.
    pub(crate) fn begin(
        &mut self,
        gateway: Arc<dyn FeedbackGateway>,
        submission: FeedbackSubmission,
    ) {
        if self.in_progress {
            return;
        }
        self.in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = gateway.submit(&submission);
            let _ = tx.send(SubmitMessage { result });
        });
    }

    pub(crate) fn try_recv(&self) -> Result<SubmitMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(crate) fn clear(&mut self) {
        self.in_progress = false;
    }
}
