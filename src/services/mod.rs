//! Business service modules
//!
//! Contains the HTTP client for the question-answering backend

pub mod client;

pub use client::BackendClient;
