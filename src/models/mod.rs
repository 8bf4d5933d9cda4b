mod page;
mod pokemon;

pub use page::PageData;
pub use pokemon::{Pokemon, Stat, MISSING};
