use eframe::egui;

#[derive(Debug)]
pub enum MenuBarEvent {
    ShowSettings,
    Quit,
    Reload,
}

pub struct MenuBar;

impl MenuBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        current_page: u32,
        total_pages: u32,
        loading_page: Option<u32>,
    ) -> Option<MenuBarEvent> {
        let mut event = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Settings...").clicked() {
                    event = Some(MenuBarEvent::ShowSettings);
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    event = Some(MenuBarEvent::Quit);
                }
            });

            ui.separator();

            if ui.button("🔄 Reload").clicked() {
                event = Some(MenuBarEvent::Reload);
            }

            ui.separator();
            ui.label(format!("Page {} of {}", current_page, total_pages));
            if let Some(page) = loading_page {
                ui.separator();
                ui.label(format!("Loading page {}...", page));
            }
        });

        event
    }
}
