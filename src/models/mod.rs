// Module exports for models

pub mod day;
pub mod event;
pub mod placement;
pub mod segment;
