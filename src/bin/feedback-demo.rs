//! Demo host embedding the feedback widget.
//!
//! A stand-in application page with one "Give feedback" button and an event
//! log fed by the widget callbacks. Configuration comes from
//! `.feedback-demo/config.toml` when present.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use eframe::egui;
use egui_feedback::config::{self, DemoConfig};
use egui_feedback::{FeedbackModal, HttpGateway, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default demo config: {err}");
            DemoConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(760.0, 520.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Feedback demo",
        native_options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(config)))),
    )?;
    Ok(())
}

struct DemoApp {
    modal: FeedbackModal,
    events: Rc<RefCell<Vec<String>>>,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let close_events = Rc::clone(&events);
        let added_events = Rc::clone(&events);

        let gateway = match config.endpoint.clone() {
            Some(endpoint) => HttpGateway::new(endpoint),
            None => HttpGateway::default(),
        };
        tracing::info!("Submitting feedback to {}", gateway.endpoint());

        let mut modal = FeedbackModal::new(config.project_id.clone(), move || {
            close_events.borrow_mut().push("panel closed".to_string());
        })
        .identifier_mode(config.identifier_mode)
        .page_path(config.page_path.clone())
        .gateway(Arc::new(gateway))
        .on_feedback_added(move || {
            added_events.borrow_mut().push("feedback added".to_string());
        });
        if let Some(identifier) = config.identifier.clone() {
            modal = modal.identifier(identifier);
        }
        if let Some(placeholder) = config.identifier_placeholder.clone() {
            modal = modal.identifier_placeholder(placeholder);
        }

        Self { modal, events }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("demo_status_bar").show(ctx, |ui| {
            let events = self.events.borrow();
            ui.horizontal(|ui| {
                ui.label(format!("{} widget events", events.len()));
                if let Some(latest) = events.last() {
                    ui.separator();
                    ui.label(latest.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Host application");
            ui.add_space(8.0);
            ui.label("This page stands in for the application embedding the widget.");
            ui.add_space(12.0);
            if ui.button("Give feedback").clicked() {
                self.modal.open();
            }
            ui.add_space(16.0);
            for event in self.events.borrow().iter().rev().take(8) {
                ui.label(event.as_str());
            }
        });

        self.modal.show(ctx);
    }
}
