//! Terminal chat client
//!
//! Conversation state machine, event pump, key handling and rendering for
//! the health chat UI.

pub mod app;
pub mod client;
pub mod event;
pub mod handler;
pub mod render;

pub use app::App;
pub use client::ProxyClient;
