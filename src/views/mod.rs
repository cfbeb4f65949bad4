pub mod chart;
pub mod components;
pub mod layout;
pub mod lesson;
pub mod quiz;
pub mod reflection;
pub mod resources;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
