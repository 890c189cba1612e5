//! Non-visual application logic: configuration, the backend API client,
//! and the session state store.

pub mod api;
pub mod config;
pub mod session;

pub use session::{SessionStore, User};
