use eframe::egui;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, status_message: &str, is_loading: bool, record_count: usize) {
        ui.horizontal(|ui| {
            if is_loading {
                ui.spinner();
            }
            ui.label(status_message);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} Pokémon on this page", record_count));
            });
        });
    }
}
