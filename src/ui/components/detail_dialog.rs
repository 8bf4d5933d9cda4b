use crate::models::Pokemon;
use crate::ui::components::card_grid::type_pill;
use crate::ui::components::stats_chart::StatsChart;
use eframe::egui;

#[derive(Debug)]
pub enum DetailDialogEvent {
    Previous,
    Next,
    Close,
}

pub struct DetailDialog {
    stats_chart: StatsChart,
}

impl DetailDialog {
    pub fn new() -> Self {
        Self {
            stats_chart: StatsChart::new(),
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        pokemon: &Pokemon,
        has_prev: bool,
        has_next: bool,
    ) -> Option<DetailDialogEvent> {
        let mut event = None;
        let mut open = true;

        egui::Window::new(format!("{} {}", pokemon.name, pokemon.id_label()))
            .id(egui::Id::new("pokemon_detail"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(url) = &pokemon.sprite_front {
                        ui.add(egui::Image::new(url.as_str()).fit_to_exact_size(egui::vec2(128.0, 128.0)));
                    }
                    if let Some(url) = &pokemon.sprite_back {
                        if pokemon.sprite_front.as_ref() != Some(url) {
                            ui.add(egui::Image::new(url.as_str()).fit_to_exact_size(egui::vec2(128.0, 128.0)));
                        }
                    }
                });

                ui.horizontal(|ui| {
                    for type_name in &pokemon.types {
                        type_pill(ui, type_name);
                    }
                    ui.separator();
                    ui.label(format!("Height: {}", pokemon.height_label()));
                    ui.label(format!("Weight: {}", pokemon.weight_label()));
                });

                ui.separator();

                ui.horizontal_wrapped(|ui| {
                    ui.strong("Abilities:");
                    ui.label(join_or_missing(&pokemon.abilities));
                });

                egui::CollapsingHeader::new("📊 Stats")
                    .default_open(true)
                    .show(ui, |ui| {
                        self.stats_chart.show(ui, &pokemon.stats);
                    });

                egui::CollapsingHeader::new("🥋 Moves")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(150.0)
                            .show(ui, |ui| {
                                ui.label(join_or_missing(&pokemon.moves));
                            });
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.add_enabled(has_prev, egui::Button::new("◀")).clicked() {
                        event = Some(DetailDialogEvent::Previous);
                    }
                    if ui.add_enabled(has_next, egui::Button::new("▶")).clicked() {
                        event = Some(DetailDialogEvent::Next);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            event = Some(DetailDialogEvent::Close);
                        }
                    });
                });
            });

        if !open {
            event = Some(DetailDialogEvent::Close);
        }

        event
    }
}

fn join_or_missing(names: &[String]) -> String {
    if names.is_empty() {
        crate::models::MISSING.to_string()
    } else {
        names.join(", ")
    }
}
