use crate::models::Stat;
use crate::ui::CHART_COLOR;
use eframe::egui;

const CHART_HEIGHT: f32 = 160.0;
const LABEL_HEIGHT: f32 = 16.0;
const BAR_GAP: f32 = 8.0;

/// Vertical bar chart of base stats; hovering a bar shows its full name and value.
pub struct StatsChart;

impl StatsChart {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, stats: &[Stat]) {
        if stats.is_empty() {
            ui.label("No stats available");
            return;
        }

        let width = ui.available_width().max(120.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT + LABEL_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let plot = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.max.y - LABEL_HEIGHT));
        painter.line_segment(
            [plot.left_bottom(), plot.right_bottom()],
            egui::Stroke::new(1.0, CHART_COLOR),
        );

        let max_value = axis_max(stats);
        let slot = plot.width() / stats.len() as f32;

        for (i, stat) in stats.iter().enumerate() {
            let value = stat.base_stat.unwrap_or(0);
            let height = plot.height() * value as f32 / max_value as f32;
            let left = plot.left() + slot * i as f32 + BAR_GAP / 2.0;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left, plot.bottom() - height),
                egui::pos2(left + (slot - BAR_GAP).max(1.0), plot.bottom()),
            );
            painter.rect_filled(bar, 2.0, CHART_COLOR);
            painter.text(
                egui::pos2(bar.center().x, plot.bottom() + 2.0),
                egui::Align2::CENTER_TOP,
                stat.short_label(),
                egui::FontId::monospace(10.0),
                ui.visuals().text_color(),
            );

            let value_text = match stat.base_stat {
                Some(v) => v.to_string(),
                None => crate::models::MISSING.to_string(),
            };
            ui.interact(bar, ui.id().with(("stat_bar", i)), egui::Sense::hover())
                .on_hover_text(format!("{}\nValue: {}", stat.title(), value_text));
        }
    }
}

/// Top of the value axis: the largest stat rounded up to the next 50, at least 50.
fn axis_max(stats: &[Stat]) -> u32 {
    let largest = stats.iter().filter_map(|s| s.base_stat).max().unwrap_or(0);
    largest.div_ceil(50).max(1) * 50
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, value: Option<u32>) -> Stat {
        Stat {
            name: name.to_string(),
            base_stat: value,
        }
    }

    #[test]
    fn test_axis_max_rounds_up() {
        assert_eq!(axis_max(&[stat("hp", Some(45)), stat("attack", Some(130))]), 150);
        assert_eq!(axis_max(&[stat("hp", Some(100))]), 100);
    }

    #[test]
    fn test_axis_max_never_zero() {
        assert_eq!(axis_max(&[stat("hp", None)]), 50);
        assert_eq!(axis_max(&[]), 50);
    }
}
