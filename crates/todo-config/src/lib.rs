//! Configuration and file management for todo-lander
//!
//! This crate provides:
//! - Local and global file locations (`Locations`)
//! - Application configuration (AppConfig)
//! - Session persistence for the todo list

pub mod app_config;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use paths::{cache_dir, Locations};
pub use session::Session;
