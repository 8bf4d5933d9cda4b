pub mod components;
mod styles;

pub use styles::{setup_styles, type_color, CHART_COLOR, INFO_COLOR};
