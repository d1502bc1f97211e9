pub mod resolution;
pub mod ui;
