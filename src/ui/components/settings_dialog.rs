use crate::config::Config;
use eframe::egui;

#[derive(Debug)]
pub enum SettingsDialogEvent {
    Apply(Config),
    Close,
}

/// Edits a draft copy of the config; nothing changes until Apply.
pub struct SettingsDialog {
    draft: Option<Config>,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self { draft: None }
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &Config) -> Option<SettingsDialogEvent> {
        let mut event = None;
        let draft = self.draft.get_or_insert_with(|| config.clone());

        egui::Window::new("Settings")
            .default_width(420.0)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Data Source");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("API URL:");
                    ui.text_edit_singleline(&mut draft.api_base_url);
                });

                ui.horizontal(|ui| {
                    ui.label("Request timeout (s):");
                    ui.add(egui::DragValue::new(&mut draft.request_timeout_secs).clamp_range(1..=120));
                });

                let mut limit_records = draft.max_records.is_some();
                ui.horizontal(|ui| {
                    ui.checkbox(&mut limit_records, "Limit records to");
                    let mut max = draft.max_records.unwrap_or(1025);
                    ui.add_enabled(limit_records, egui::DragValue::new(&mut max).clamp_range(1..=100_000));
                    draft.max_records = limit_records.then_some(max);
                });

                ui.add_space(8.0);
                ui.heading("Pagination");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Cards per page:");
                    ui.add(egui::DragValue::new(&mut draft.page_size).clamp_range(1..=100));
                });

                ui.horizontal(|ui| {
                    ui.label("Page window size:");
                    ui.add(egui::DragValue::new(&mut draft.inner_circle_size).clamp_range(1..=15));
                });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        event = Some(SettingsDialogEvent::Apply(draft.clone().sanitized()));
                    }
                    if ui.button("Reset to defaults").clicked() {
                        *draft = Config::default();
                    }
                    if ui.button("Close").clicked() {
                        event = Some(SettingsDialogEvent::Close);
                    }
                });
            });

        if event.is_some() {
            self.draft = None;
        }

        event
    }
}
