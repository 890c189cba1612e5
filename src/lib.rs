//! Galería - photo discovery board frontend
//!
//! The authentication widget of the app: a session state store persisted
//! in tab-scoped storage, a login/registration modal, and the logged-in
//! user menu. Built with Leptos and WebAssembly; all identity checks live
//! in the backend this client calls.

pub mod app;
pub mod core;
pub mod ui;
