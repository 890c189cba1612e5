//! User menu component
//!
//! Header widget owning the auth modal. Shows a neutral placeholder
//! while the session is hydrating, a sign-in button when anonymous, and
//! a dropdown with the user's identity and sign-out when authenticated.

use leptos::prelude::*;

use super::context::use_auth_context;
use super::login_form::LoginForm;
use super::register_form::RegisterForm;
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    // Dropdown open state
    let menu_open = RwSignal::new(false);
    // Auth modal state
    let show_modal = RwSignal::new(false);
    let show_register = RwSignal::new(false);

    let close_modal = Callback::new(move |_: ()| {
        show_modal.set(false);
        show_register.set(false);
    });

    let handle_logout = move |_| {
        menu_open.set(false);
        auth.logout();
    };

    view! {
        <div class="relative">
            {move || {
                if auth.loading.get() {
                    // Neutral placeholder; neither branch may render yet.
                    view! {
                        <button class="px-3 py-1.5 text-sm font-medium text-theme-secondary rounded-lg border border-theme" disabled=true>
                            "Cargando..."
                        </button>
                    }.into_any()
                } else if let Some(user) = auth.current_user.get() {
                    // User dropdown
                    view! {
                        <div class="relative">
                            <button
                                class="flex items-center gap-2 px-3 py-1.5 rounded-lg hover:bg-theme-secondary transition-colors"
                                on:click=move |_| menu_open.update(|v| *v = !*v)
                            >
                                <Icon name=icons::USER class="h-4 w-4" />
                                <span class="text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                    {user.username.clone()}
                                </span>
                                <div class="flex items-center justify-center h-4 w-4 text-theme-tertiary transition-transform duration-200" class=("rotate-180", move || menu_open.get())>
                                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                </div>
                            </button>

                            // Dropdown menu
                            {move || {
                                if menu_open.get() {
                                    let user = user.clone();
                                    Some(view! {
                                        <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                                            // User info header
                                            <div class="px-4 py-3 border-b border-theme">
                                                <p class="text-sm font-medium text-theme-primary truncate">
                                                    {user.username.clone()}
                                                </p>
                                                <p class="text-xs text-theme-tertiary truncate">
                                                    {user.email.clone()}
                                                </p>
                                            </div>

                                            // Logout
                                            <div class="py-1">
                                                <button
                                                    class="w-full px-4 py-2 text-sm text-left text-red-500
                                                           hover:bg-red-50 transition-colors
                                                           flex items-center gap-2"
                                                    on:click=handle_logout
                                                >
                                                    <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                    "Cerrar Sesión"
                                                </button>
                                            </div>
                                        </div>
                                    })
                                } else {
                                    None
                                }
                            }}
                        </div>
                    }.into_any()
                } else {
                    // Sign-in button opening the auth modal
                    view! {
                        <button
                            class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary
                                   hover:bg-accent-primary-hover rounded-lg transition-colors"
                            on:click=move |_| show_modal.set(true)
                        >
                            "Iniciar Sesión"
                        </button>
                    }.into_any()
                }
            }}

            // Auth modal, toggling between login and registration
            {move || {
                if show_modal.get() {
                    if show_register.get() {
                        Some(view! {
                            <RegisterForm
                                modal=true
                                on_close=close_modal
                                on_success=close_modal
                                on_login_click=Callback::new(move |_: ()| show_register.set(false))
                            />
                        }.into_any())
                    } else {
                        Some(view! {
                            <LoginForm
                                modal=true
                                on_close=close_modal
                                on_success=close_modal
                                on_register_click=Callback::new(move |_: ()| show_register.set(true))
                            />
                        }.into_any())
                    }
                } else {
                    None
                }
            }}
        </div>
    }
}
