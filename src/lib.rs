// Weekgrid Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::day::{Day, Week};
pub use models::event::OriginalEvent;
pub use models::placement::{Placement, OVERFLOW_ROW};
pub use models::segment::EventSegment;
pub use services::layout::{layout_week, LayoutConfig, LayoutError};
