//! Panel rendering.

use std::time::Duration;

use egui::{Align2, Button, Color32, Id, Key, Order, RichText, TextEdit};

use crate::gateway::FeedbackCategory;

use super::state::FeedbackStage;
use super::{FeedbackModal, IdentifierMode};

/// Fixed id of the free-text area so focus can be restored to it after
/// category clicks.
const TEXT_INPUT_ID: &str = "feedback_text_input";

const PANEL_WIDTH: f32 = 300.0;
const BACKDROP_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

impl FeedbackModal {
    /// Render the panel. Call once per frame; while hidden this only drains
    /// finished submissions.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.poll_jobs();
        if self.state.submitting {
            // Keep frames coming while a submission is in flight so the
            // completion poll runs even in an idle host.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if !self.state.open {
            return;
        }

        render_backdrop(ctx);

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.close();
            return;
        }

        let title = RichText::new(self.strings.title.clone()).color(self.colors.title_text);
        let frame = egui::Frame::window(&ctx.style()).fill(self.colors.panel_fill);
        let mut open = true;
        egui::Window::new(title)
            .id(Id::new("feedback_modal"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(Order::Tooltip)
            .collapsible(false)
            .resizable(false)
            .default_width(PANEL_WIDTH)
            .frame(frame)
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_body(ui);
            });

        if !open {
            self.close();
        }
    }

    fn render_body(&mut self, ui: &mut egui::Ui) {
        ui.set_min_width(PANEL_WIDTH);
        match self.state.stage {
            FeedbackStage::Concluded => self.render_conclusion(ui),
            FeedbackStage::Asking => self.render_form(ui),
        }
    }

    fn render_conclusion(&mut self, ui: &mut egui::Ui) {
        let colors = self.colors;
        ui.add_space(6.0);
        ui.label(RichText::new(self.strings.concluded.clone()).color(colors.body_text));
        if let Some(error) = self.state.last_error.clone() {
            ui.add_space(6.0);
            ui.label(RichText::new(error).color(colors.error_text));
        }
        ui.add_space(10.0);
        let action = Button::new(
            RichText::new(self.strings.concluded_action.clone()).color(colors.send_text),
        )
        .fill(colors.send_fill);
        if ui.add(action).clicked() {
            self.trigger_submit();
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let colors = self.colors;
        let strings = self.strings.clone();

        ui.add_space(4.0);
        let mut selected_category = None;
        ui.horizontal(|ui| {
            for category in FeedbackCategory::all() {
                let selected = self.state.draft.category == Some(category);
                let pair = colors.category(category);
                let fill = if selected { pair.active } else { pair.idle };
                let text_color = if selected {
                    colors.send_text
                } else {
                    colors.body_text
                };
                let label = RichText::new(strings.category_label(category)).color(text_color);
                if ui.add(Button::new(label).fill(fill)).clicked() {
                    selected_category = Some(category);
                }
            }
        });
        if let Some(category) = selected_category {
            self.select_category(category);
        }

        ui.add_space(8.0);
        let text_response = ui.add(
            TextEdit::multiline(&mut self.state.draft.text)
                .id(Id::new(TEXT_INPUT_ID))
                .hint_text(strings.text_placeholder.clone())
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .lock_focus(true),
        );
        if self.state.focus_text_requested && !text_response.has_focus() {
            text_response.request_focus();
            self.state.focus_text_requested = false;
        }
        let keyboard_submit = text_response.has_focus()
            && ui.input(|i| i.modifiers.command && i.key_pressed(Key::Enter));

        if self.identifier_mode != IdentifierMode::Hidden {
            ui.add_space(6.0);
            let placeholder = self
                .identifier_placeholder
                .clone()
                .unwrap_or_else(|| strings.identifier_placeholder.clone());
            ui.add(
                TextEdit::singleline(&mut self.state.draft.identifier)
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY),
            );
        }

        ui.add_space(10.0);
        if let Some(error) = self.state.last_error.clone() {
            ui.label(RichText::new(error).color(colors.error_text));
            ui.add_space(4.0);
        }
        if self.state.submitting {
            ui.label(RichText::new(strings.sending.clone()).color(colors.muted_text));
            ui.add_space(4.0);
        }

        // The footer stays clickable either way; an unsatisfied predicate
        // only dims the fill and makes the click a no-op.
        let fill = if self.state.can_submit(self.identifier_mode) {
            colors.send_fill
        } else {
            colors.disabled_fill
        };
        let send = Button::new(RichText::new(strings.send.clone()).color(colors.send_text))
            .fill(fill);
        let send_clicked = ui
            .add_sized(egui::vec2(ui.available_width(), 28.0), send)
            .clicked();
        if send_clicked || keyboard_submit {
            self.trigger_submit();
        }
    }
}

/// Dim the host and swallow pointer input behind the panel.
fn render_backdrop(ctx: &egui::Context) {
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        Order::Tooltip,
        Id::new("feedback_modal_backdrop_paint"),
    ));
    painter.rect_filled(rect, 0.0, BACKDROP_COLOR);

    egui::Area::new(Id::new("feedback_modal_backdrop_blocker"))
        .order(Order::Tooltip)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(rect, egui::Sense::click_and_drag());
        });
}
