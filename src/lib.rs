//! Embeddable feedback widget for egui applications.
//!
//! Hosts keep a [`FeedbackModal`] next to their own state, call
//! [`FeedbackModal::show`] every frame, and open it from whatever affordance
//! they like. Submissions are delivered to a remote gateway on a background
//! thread; see [`gateway`] for the wire contract.
/// Application directory helpers for the demo host.
pub mod app_dirs;
/// Demo host configuration.
pub mod config;
/// Gateway contract and HTTP submission client.
pub mod gateway;
/// Log setup for the demo host.
pub mod logging;
/// The feedback modal widget.
pub mod modal;
/// Display strings and their override merge.
pub mod strings;
/// Widget colors and their override merge.
pub mod theme;

pub use gateway::{
    FeedbackCategory, FeedbackGateway, FeedbackSubmission, GatewayError, GatewayReceipt,
    HttpGateway,
};
pub use modal::{FeedbackDraft, FeedbackModal, FeedbackStage, IdentifierMode};
pub use strings::{FeedbackStrings, FeedbackStringsOverride, resolve_strings};
pub use theme::{CategoryColors, FeedbackColors, FeedbackColorsOverride, resolve_colors};
