//! Display strings and the override merge.
//!
//! Same shape as the color side: [`FeedbackStrings`] is the complete text
//! set, [`FeedbackStringsOverride`] carries only what the embedder wants to
//! change, and [`resolve_strings`] merges the two at construction time.

use crate::gateway::FeedbackCategory;

/// Complete text set for the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackStrings {
    /// Panel title.
    pub title: String,
    /// Label of the feature category button.
    pub category_feature: String,
    /// Label of the bug category button.
    pub category_bug: String,
    /// Label of the other category button.
    pub category_other: String,
    /// Placeholder inside the free-text area.
    pub text_placeholder: String,
    /// Placeholder inside the identifier field.
    pub identifier_placeholder: String,
    /// Footer button label while a draft is being edited.
    pub send: String,
    /// Notice shown while a submission is in flight.
    pub sending: String,
    /// Confirmation shown after a submission concludes.
    pub concluded: String,
    /// Footer button label on the conclusion screen.
    pub concluded_action: String,
    /// Inline error shown when a submission goes wrong.
    pub error: String,
}

impl Default for FeedbackStrings {
    fn default() -> Self {
        Self {
            title: "Give Feedback!".to_string(),
            category_feature: "Feature".to_string(),
            category_bug: "Bug".to_string(),
            category_other: "Other".to_string(),
            text_placeholder: "I really ...".to_string(),
            identifier_placeholder: "Your e-mail".to_string(),
            send: "Send Feedback".to_string(),
            sending: "Sending…".to_string(),
            concluded: "Thanks for your feedback!".to_string(),
            concluded_action: "Send more".to_string(),
            error: "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl FeedbackStrings {
    /// Label shown on one category's button.
    pub fn category_label(&self, category: FeedbackCategory) -> &str {
        match category {
            FeedbackCategory::Feature => &self.category_feature,
            FeedbackCategory::Bug => &self.category_bug,
            FeedbackCategory::Other => &self.category_other,
        }
    }
}

/// Partial text set supplied by the embedder; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackStringsOverride {
    /// Panel title.
    pub title: Option<String>,
    /// Label of the feature category button.
    pub category_feature: Option<String>,
    /// Label of the bug category button.
    pub category_bug: Option<String>,
    /// Label of the other category button.
    pub category_other: Option<String>,
    /// Placeholder inside the free-text area.
    pub text_placeholder: Option<String>,
    /// Placeholder inside the identifier field.
    pub identifier_placeholder: Option<String>,
    /// Footer button label while a draft is being edited.
    pub send: Option<String>,
    /// Notice shown while a submission is in flight.
    pub sending: Option<String>,
    /// Confirmation shown after a submission concludes.
    pub concluded: Option<String>,
    /// Footer button label on the conclusion screen.
    pub concluded_action: Option<String>,
    /// Inline error shown when a submission goes wrong.
    pub error: Option<String>,
}

/// Lay embedder overrides over the default text set, key by key.
pub fn resolve_strings(overrides: Option<&FeedbackStringsOverride>) -> FeedbackStrings {
    let mut strings = FeedbackStrings::default();
    let Some(overrides) = overrides else {
        return strings;
    };
    if let Some(value) = &overrides.title {
        strings.title = value.clone();
    }
    if let Some(value) = &overrides.category_feature {
        strings.category_feature = value.clone();
    }
    if let Some(value) = &overrides.category_bug {
        strings.category_bug = value.clone();
    }
    if let Some(value) = &overrides.category_other {
        strings.category_other = value.clone();
    }
    if let Some(value) = &overrides.text_placeholder {
        strings.text_placeholder = value.clone();
    }
    if let Some(value) = &overrides.identifier_placeholder {
        strings.identifier_placeholder = value.clone();
    }
    if let Some(value) = &overrides.send {
        strings.send = value.clone();
    }
    if let Some(value) = &overrides.sending {
        strings.sending = value.clone();
    }
    if let Some(value) = &overrides.concluded {
        strings.concluded = value.clone();
    }
    if let Some(value) = &overrides.concluded_action {
        strings.concluded_action = value.clone();
    }
    if let Some(value) = &overrides.error {
        strings.error = value.clone();
    }
    strings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_yields_the_default_text_set() {
        assert_eq!(resolve_strings(None), FeedbackStrings::default());
        assert_eq!(
            resolve_strings(Some(&FeedbackStringsOverride::default())),
            FeedbackStrings::default()
        );
    }

    #[test]
    fn single_key_override_leaves_the_rest_alone() {
        let overrides = FeedbackStringsOverride {
            title: Some("Tell us everything".to_string()),
            ..FeedbackStringsOverride::default()
        };
        let strings = resolve_strings(Some(&overrides));
        assert_eq!(strings.title, "Tell us everything");
        assert_eq!(strings.send, FeedbackStrings::default().send);
        assert_eq!(strings.concluded, FeedbackStrings::default().concluded);
    }

    #[test]
    fn every_key_can_be_overridden() {
        let overrides = FeedbackStringsOverride {
            title: Some("t".to_string()),
            category_feature: Some("f".to_string()),
            category_bug: Some("b".to_string()),
            category_other: Some("o".to_string()),
            text_placeholder: Some("tp".to_string()),
            identifier_placeholder: Some("ip".to_string()),
            send: Some("s".to_string()),
            sending: Some("sg".to_string()),
            concluded: Some("c".to_string()),
            concluded_action: Some("ca".to_string()),
            error: Some("e".to_string()),
        };
        let strings = resolve_strings(Some(&overrides));
        assert_eq!(strings.title, "t");
        assert_eq!(strings.category_feature, "f");
        assert_eq!(strings.category_bug, "b");
        assert_eq!(strings.category_other, "o");
        assert_eq!(strings.text_placeholder, "tp");
        assert_eq!(strings.identifier_placeholder, "ip");
        assert_eq!(strings.send, "s");
        assert_eq!(strings.sending, "sg");
        assert_eq!(strings.concluded, "c");
        assert_eq!(strings.concluded_action, "ca");
        assert_eq!(strings.error, "e");
    }

    #[test]
    fn category_labels_follow_the_resolved_set() {
        let overrides = FeedbackStringsOverride {
            category_bug: Some("Broken".to_string()),
            ..FeedbackStringsOverride::default()
        };
        let strings = resolve_strings(Some(&overrides));
        assert_eq!(strings.category_label(FeedbackCategory::Bug), "Broken");
        assert_eq!(strings.category_label(FeedbackCategory::Feature), "Feature");
    }
}
