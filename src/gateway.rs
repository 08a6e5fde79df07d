//! Remote gateway contract for delivering submitted feedback.
//!
//! The widget treats the gateway like the network it rides on: any HTTP
//! response, acceptance or refusal, is a [`GatewayReceipt`]; only the failure
//! to obtain a response at all is a [`GatewayError`].

use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;

/// Submission endpoint used when the host does not supply one.
pub const DEFAULT_ENDPOINT: &str =
    "https://feedback-gateway.eguiwidgets.workers.dev/api/feedback";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Receipt bodies are drained for connection reuse but never interpreted.
const MAX_DRAIN_BYTES: u64 = 64 * 1024;

/// Feedback classification chosen by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackCategory {
    /// A feature request or idea.
    Feature,
    /// A bug report.
    Bug,
    /// Anything else.
    Other,
}

impl FeedbackCategory {
    /// All categories, in display order.
    pub fn all() -> [FeedbackCategory; 3] {
        [Self::Feature, Self::Bug, Self::Other]
    }

    /// Label the gateway expects on the wire.
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Feature => "FEATURE",
            Self::Bug => "BUG",
            Self::Other => "OTHER",
        }
    }
}

/// One completed feedback entry handed to the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    /// Opaque project the feedback is filed under.
    pub project_id: String,
    /// Free-form feedback text, passed through untouched.
    pub text: String,
    /// Chosen classification.
    pub category: FeedbackCategory,
    /// Identifier volunteered by the user, absent when left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Host page or screen the feedback was filed from.
    pub page_path: String,
}

/// Outcome reported by the gateway for a delivered submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayReceipt {
    /// HTTP status code.
    pub status: u16,
    /// Status text accompanying the code.
    pub status_text: String,
}

impl GatewayReceipt {
    /// Whether the gateway accepted the submission.
    pub fn accepted(&self) -> bool {
        self.status == 200
    }
}

/// Failure to get any response out of the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request could not be sent or no response arrived.
    #[error("HTTP error: {0}")]
    Transport(String),
}

/// Delivery seam between the widget and the submission service.
///
/// Implementations are invoked on a background thread, one call per
/// submission. Return a receipt for any HTTP response the service gives and
/// an error only when no response was obtained.
pub trait FeedbackGateway: Send + Sync {
    /// Deliver one submission and report the service's receipt.
    fn submit(&self, submission: &FeedbackSubmission) -> Result<GatewayReceipt, GatewayError>;
}

/// Gateway client that POSTs submissions as JSON.
pub struct HttpGateway {
    endpoint: String,
}

impl HttpGateway {
    /// Client for a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client delivers to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl FeedbackGateway for HttpGateway {
    fn submit(&self, submission: &FeedbackSubmission) -> Result<GatewayReceipt, GatewayError> {
        let request = agent()
            .post(&self.endpoint)
            .set("Accept", "application/json");
        match request.send_json(submission) {
            Ok(response) => Ok(receipt_from(response)),
            Err(ureq::Error::Status(_, response)) => Ok(receipt_from(response)),
            Err(ureq::Error::Transport(err)) => Err(GatewayError::Transport(err.to_string())),
        }
    }
}

/// Shared HTTP agent so every submission gets the same timeouts.
fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build()
    })
}

fn receipt_from(response: ureq::Response) -> GatewayReceipt {
    let receipt = GatewayReceipt {
        status: response.status(),
        status_text: response.status_text().to_string(),
    };
    drain_body(response);
    receipt
}

/// Read and discard the response body so the connection can be reused.
fn drain_body(response: ureq::Response) {
    let mut reader = response.into_reader().take(MAX_DRAIN_BYTES);
    let _ = std::io::copy(&mut reader, &mut std::io::sink());
}
