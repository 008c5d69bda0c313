//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages)
//! - `services/` - Pure operations (file I/O, gutter sizing, status line)
//! - `infrastructure/` - External integrations (FLTK buffer, platform, error, logging)
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, FontChoice, Message, ThemeMode};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
