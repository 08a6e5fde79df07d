//! Widget colors and the override merge.
//!
//! [`FeedbackColors`] is the complete palette the panel draws with.
//! Embedders hand in a [`FeedbackColorsOverride`] carrying only the keys they
//! care about; [`resolve_colors`] lays those over the defaults once, at
//! construction time.

use egui::Color32;

use crate::gateway::FeedbackCategory;

/// Fill pair for one category button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryColors {
    /// Fill while the category is not selected.
    pub idle: Color32,
    /// Fill while the category is selected.
    pub active: Color32,
}

/// Complete palette for the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackColors {
    /// Panel background.
    pub panel_fill: Color32,
    /// Title text.
    pub title_text: Color32,
    /// Body and label text.
    pub body_text: Color32,
    /// Secondary text such as the sending notice.
    pub muted_text: Color32,
    /// Inline error text.
    pub error_text: Color32,
    /// Footer button fill while the draft is submittable.
    pub send_fill: Color32,
    /// Footer button label.
    pub send_text: Color32,
    /// Footer button fill while the draft is not submittable.
    pub disabled_fill: Color32,
    /// Feature button fills.
    pub feature: CategoryColors,
    /// Bug button fills.
    pub bug: CategoryColors,
    /// Other button fills.
    pub other: CategoryColors,
}

impl Default for FeedbackColors {
    fn default() -> Self {
        Self {
            panel_fill: Color32::WHITE,
            title_text: Color32::BLACK,
            body_text: Color32::from_rgb(51, 51, 51),
            muted_text: Color32::from_rgb(136, 136, 136),
            error_text: Color32::from_rgb(205, 63, 63),
            send_fill: Color32::from_rgb(13, 166, 125),
            send_text: Color32::WHITE,
            disabled_fill: Color32::from_rgba_unmultiplied(51, 51, 51, 51),
            feature: CategoryColors {
                idle: Color32::from_rgb(225, 242, 236),
                active: Color32::from_rgb(13, 166, 125),
            },
            bug: CategoryColors {
                idle: Color32::from_rgb(249, 229, 227),
                active: Color32::from_rgb(214, 80, 74),
            },
            other: CategoryColors {
                idle: Color32::from_rgb(228, 234, 244),
                active: Color32::from_rgb(74, 111, 189),
            },
        }
    }
}

impl FeedbackColors {
    /// Fill pair of one category's button.
    pub fn category(&self, category: FeedbackCategory) -> CategoryColors {
        match category {
            FeedbackCategory::Feature => self.feature,
            FeedbackCategory::Bug => self.bug,
            FeedbackCategory::Other => self.other,
        }
    }
}

/// Partial palette supplied by the embedder; `None` keeps the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackColorsOverride {
    /// Panel background.
    pub panel_fill: Option<Color32>,
    /// Title text.
    pub title_text: Option<Color32>,
    /// Body and label text.
    pub body_text: Option<Color32>,
    /// Secondary text such as the sending notice.
    pub muted_text: Option<Color32>,
    /// Inline error text.
    pub error_text: Option<Color32>,
    /// Footer button fill while the draft is submittable.
    pub send_fill: Option<Color32>,
    /// Footer button label.
    pub send_text: Option<Color32>,
    /// Footer button fill while the draft is not submittable.
    pub disabled_fill: Option<Color32>,
    /// Feature button fills, replaced as a pair.
    pub feature: Option<CategoryColors>,
    /// Bug button fills, replaced as a pair.
    pub bug: Option<CategoryColors>,
    /// Other button fills, replaced as a pair.
    pub other: Option<CategoryColors>,
}

/// Lay embedder overrides over the default palette, key by key.
///
/// Category pairs are replaced wholesale when supplied, never merged field by
/// field.
pub fn resolve_colors(overrides: Option<&FeedbackColorsOverride>) -> FeedbackColors {
    let mut colors = FeedbackColors::default();
    let Some(overrides) = overrides else {
        return colors;
    };
    if let Some(value) = overrides.panel_fill {
        colors.panel_fill = value;
    }
    if let Some(value) = overrides.title_text {
        colors.title_text = value;
    }
    if let Some(value) = overrides.body_text {
        colors.body_text = value;
    }
    if let Some(value) = overrides.muted_text {
        colors.muted_text = value;
    }
    if let Some(value) = overrides.error_text {
        colors.error_text = value;
    }
    if let Some(value) = overrides.send_fill {
        colors.send_fill = value;
    }
    if let Some(value) = overrides.send_text {
        colors.send_text = value;
    }
    if let Some(value) = overrides.disabled_fill {
        colors.disabled_fill = value;
    }
    if let Some(value) = overrides.feature {
        colors.feature = value;
    }
    if let Some(value) = overrides.bug {
        colors.bug = value;
    }
    if let Some(value) = overrides.other {
        colors.other = value;
    }
    colors
}
