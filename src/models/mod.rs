//! Data models module
//!
//! Defines the wire types shared between the chat client, the proxy endpoint
//! and the backend, plus the client-side conversation history.

pub mod api;
pub mod chat;

pub use api::{ApiResponse, BackendAnswer, ChatRequest, Source};
pub use chat::{Conversation, Message, Sender};
