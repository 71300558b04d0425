//! The calculator screen: room count, room cards, results

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use mortar_app::config::Config;
use mortar_store::FormStore;
use mortar_types::{RoomField, RoomResult};
use tracing::warn;

/// Main application state
pub struct MortarApp {
    /// Form state
    store: FormStore,
    /// Room count entry as typed (may hold text the store rejected)
    count_input: String,
    /// Message for a rejected room count
    count_error: Option<String>,
}

impl MortarApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            Config::default()
        });

        let store = match config.max_rooms {
            Some(max) => FormStore::with_max_rooms(max),
            None => FormStore::new(),
        };

        Self {
            store,
            count_input: String::new(),
            count_error: None,
        }
    }

    fn render_count_entry(&mut self, ui: &mut Ui) {
        ui.label("Number of Rooms");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.count_input)
                .hint_text("e.g. 3")
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            self.count_error = match self.store.set_room_count(&self.count_input) {
                Ok(_) => None,
                Err(e) => Some(e.to_string()),
            };
        }

        if let Some(ref message) = self.count_error {
            ui.label(RichText::new(message).color(Color32::LIGHT_RED));
        }
    }

    fn render_rooms(&mut self, ui: &mut Ui) {
        // Edits are collected first; the store is read while rendering
        let mut edits: Vec<(usize, RoomField, String)> = Vec::new();

        for (index, room) in self.store.rooms().iter().enumerate() {
            ui.push_id(index, |ui| {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("Room {}", index + 1)).strong().size(16.0));

                    for field in RoomField::ALL {
                        let mut value = room.get(field).to_string();
                        ui.label(field.label());
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY),
                        );
                        if response.changed() {
                            edits.push((index, field, value));
                        }
                    }
                });
            });
        }

        for (index, field, value) in edits {
            if let Err(e) = self.store.set_field(index, field, &value) {
                warn!(error = %e, "room edit dropped");
            }
        }
    }

    fn render_results(ui: &mut Ui, results: &[RoomResult]) {
        ui.label(RichText::new("Results:").strong().size(18.0));

        for result in results {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(format!("Room Name: {}", result.name));
                ui.label(format!("Room Size: {}", result.size));
                ui.label(format!("Wall Volume: {} m³", result.wall_volume));
                ui.label(format!("Cement Quantity: {} bags", result.cement_quantity));
                ui.label(format!("Sand Quantity: {} m³", result.sand_quantity));
            });
        }
    }
}

impl eframe::App for MortarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_count_entry(ui);
                ui.add_space(8.0);

                self.render_rooms(ui);
                ui.add_space(8.0);

                if ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new("Calculate"))
                    .clicked()
                {
                    self.store.calculate();
                }

                if self.store.has_results() {
                    ui.add_space(16.0);
                    Self::render_results(ui, self.store.results());
                }
            });
        });
    }
}
