mod controller;
mod window;

pub use controller::{DataSource, NavState, NavigationController};
pub use window::{total_pages, EntryLabel, PageClick, PageWindowEntry};
