use eframe::egui;
use egui::Color32;

/// Card-friendly text sizes; page numbers use monospace so the control doesn't jitter.
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(13.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(13.0, egui::FontFamily::Monospace)
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(18.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(10.0, egui::FontFamily::Proportional)
    );

    ctx.set_style(style);
}

pub const UNKNOWN_TYPE_COLOR: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);
pub const INFO_COLOR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const CHART_COLOR: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Background colour for a Pokémon type name.
pub fn type_color(type_name: &str) -> Color32 {
    match type_name.to_ascii_lowercase().as_str() {
        "bug" => Color32::from_rgb(0xA6, 0xB9, 0x1A),
        "dark" => Color32::from_rgb(0x70, 0x57, 0x46),
        "dragon" => Color32::from_rgb(0x6F, 0x35, 0xFC),
        "electric" => Color32::from_rgb(0xF7, 0xD0, 0x2C),
        "fairy" => Color32::from_rgb(0xD6, 0x85, 0xAD),
        "fighting" => Color32::from_rgb(0xC2, 0x2E, 0x28),
        "fire" => Color32::from_rgb(0xEE, 0x81, 0x30),
        "flying" => Color32::from_rgb(0xA9, 0x8F, 0xF3),
        "ghost" => Color32::from_rgb(0x73, 0x57, 0x97),
        "grass" => Color32::from_rgb(0x7A, 0xC7, 0x4C),
        "ground" => Color32::from_rgb(0xE2, 0xBF, 0x65),
        "ice" => Color32::from_rgb(0x96, 0xD9, 0xD6),
        "normal" => Color32::from_rgb(0xA8, 0xA7, 0x7A),
        "poison" => Color32::from_rgb(0xA3, 0x3E, 0xA1),
        "psychic" => Color32::from_rgb(0xF9, 0x55, 0x87),
        "rock" => Color32::from_rgb(0xB6, 0xA1, 0x36),
        "steel" => Color32::from_rgb(0xB7, 0xB7, 0xCE),
        "water" => Color32::from_rgb(0x63, 0x90, 0xF0),
        _ => UNKNOWN_TYPE_COLOR,
    }
}
