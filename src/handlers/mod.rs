pub mod lesson;
pub mod quiz;
pub mod reflection;
