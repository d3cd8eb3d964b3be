pub mod columns;
mod dataset;
mod derive;
mod detail;
mod options;
mod record;
mod types;

pub use dataset::{load_platforms, platform_names};
pub use derive::*;
pub use detail::{DetailEntry, DetailSection, detail_sections, display_label, find_platform};
pub use options::*;
pub use record::*;
pub use types::*;
