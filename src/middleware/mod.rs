//! Middleware module
//!
//! Request-scoped concerns layered around the handlers

pub mod logging;
