//! Authentication UI module
//!
//! This module provides the auth context and the login/registration
//! widget for the Galería frontend.

mod context;
mod login_form;
mod register_form;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::UserMenu;
