use crate::pagination::{EntryLabel, PageClick, PageWindowEntry};
use eframe::egui;

#[derive(Debug)]
pub enum PaginationEvent {
    Reload,
    Navigate(PageClick),
}

pub struct PaginationControls;

impl PaginationControls {
    pub fn new() -> Self {
        Self
    }

    /// Draw `entries` in order. Nothing is clickable while a page is loading.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        entries: &[PageWindowEntry],
        is_loading: bool,
    ) -> Option<PaginationEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            if ui.add_enabled(!is_loading, egui::Button::new("🔄 Reload")).clicked() {
                event = Some(PaginationEvent::Reload);
            }

            ui.separator();

            for entry in entries {
                let clickable = !is_loading && !entry.disabled && entry.target_page.is_some();
                let text = egui::RichText::new(entry.label.to_string());
                let text = if entry.active { text.strong() } else { text };

                let response = ui.add_enabled(clickable, egui::SelectableLabel::new(entry.active, text));
                let response = match (entry.label, entry.target_page) {
                    (EntryLabel::Previous, Some(page)) | (EntryLabel::Next, Some(page)) => {
                        response.on_hover_text(format!("Page {}", page))
                    }
                    _ => response,
                };

                if response.clicked() {
                    event = Some(PaginationEvent::Navigate(entry.click()));
                }
            }

            if is_loading {
                ui.spinner();
            }
        });

        ui.separator();

        event
    }
}
