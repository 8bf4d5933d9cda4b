mod card_grid;
mod detail_dialog;
mod menu_bar;
mod pagination;
mod settings_dialog;
mod stats_chart;
mod status_bar;

pub use card_grid::{CardGrid, CardGridEvent};
pub use detail_dialog::{DetailDialog, DetailDialogEvent};
pub use menu_bar::{MenuBar, MenuBarEvent};
pub use pagination::{PaginationControls, PaginationEvent};
pub use settings_dialog::{SettingsDialog, SettingsDialogEvent};
pub use status_bar::StatusBar;
