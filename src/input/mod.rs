//! Input processing module
//! Handles file detection, document reading, and input management

pub mod file_detector;
pub mod reader;
pub mod manager;

pub use manager::InputManager;
