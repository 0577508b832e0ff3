//! Health Chat Relay Library
//!
//! A terminal chat client and a one-hop proxy endpoint that relays health
//! questions to an external question-answering backend.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::{ApiResponse, Conversation, Message, Sender, Source};
pub use services::BackendClient;
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
