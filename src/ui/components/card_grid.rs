use crate::models::Pokemon;
use crate::ui::{type_color, INFO_COLOR};
use eframe::egui;

const CARD_WIDTH: f32 = 150.0;
const SPRITE_SIZE: f32 = 96.0;

#[derive(Debug)]
pub enum CardGridEvent {
    Opened(usize),
}

pub struct CardGrid;

impl CardGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, items: &[Pokemon]) -> Option<CardGridEvent> {
        let mut event = None;

        egui::ScrollArea::vertical()
            .id_source("card_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    for (index, pokemon) in items.iter().enumerate() {
                        if Self::card(ui, pokemon).clicked() {
                            event = Some(CardGridEvent::Opened(index));
                        }
                    }
                });
            });

        event
    }

    fn card(ui: &mut egui::Ui, pokemon: &Pokemon) -> egui::Response {
        let fill = pokemon.primary_type().map(type_color).unwrap_or(INFO_COLOR);
        let border = pokemon.secondary_type().map(type_color).unwrap_or(INFO_COLOR);

        let frame = egui::Frame::none()
            .fill(fill.gamma_multiply(0.35))
            .stroke(egui::Stroke::new(2.0, border))
            .rounding(8.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(&pokemon.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(pokemon.id_label());
                        });
                    });

                    match &pokemon.sprite_front {
                        Some(url) => {
                            ui.add(egui::Image::new(url.as_str()).fit_to_exact_size(egui::vec2(SPRITE_SIZE, SPRITE_SIZE)));
                        }
                        None => {
                            ui.add_sized([SPRITE_SIZE, SPRITE_SIZE], egui::Label::new("?"));
                        }
                    }

                    ui.horizontal(|ui| {
                        for type_name in &pokemon.types {
                            type_pill(ui, type_name);
                        }
                    });

                    ui.small(format!("Height: {}", pokemon.height_label()));
                    ui.small(format!("Weight: {}", pokemon.weight_label()));
                });
            });

        frame
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

pub fn type_pill(ui: &mut egui::Ui, type_name: &str) {
    egui::Frame::none()
        .fill(type_color(type_name))
        .stroke(egui::Stroke::new(1.0, INFO_COLOR))
        .rounding(6.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(type_name).small().color(egui::Color32::WHITE));
        });
}
