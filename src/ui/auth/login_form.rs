//! Login form component
//!
//! A modal/inline form for signing in with a username or email.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::api;
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the register form
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
    /// Whether to show as a modal or inline form
    #[prop(default = false)]
    modal: bool,
    /// Callback to close modal (if modal=true)
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation and request state
    let identifier_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let validate_identifier = move || {
        if identifier.get().trim().is_empty() {
            identifier_error.set(Some("Ingresa tu usuario o email".to_string()));
            false
        } else {
            identifier_error.set(None);
            true
        }
    };

    let validate_password = move || {
        if password.get().is_empty() {
            password_error.set(Some("Ingresa tu contraseña".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        error.set(None);
        success.set(None);

        let identifier_valid = validate_identifier();
        let password_valid = validate_password();
        if !identifier_valid || !password_valid {
            return;
        }

        let identifier_val = identifier.get();
        let password_val = password.get();
        submitting.set(true);

        spawn_local(async move {
            match api::login(&identifier_val, &password_val).await {
                Ok(user) => {
                    if auth.login(user) {
                        submitting.set(false);
                        success.set(Some("¡Inicio de sesión exitoso!".to_string()));

                        // Let the success message show briefly before closing.
                        #[cfg(target_arch = "wasm32")]
                        gloo_timers::future::TimeoutFuture::new(1_000).await;

                        if let Some(callback) = on_success {
                            callback.run(());
                        }
                    } else {
                        submitting.set(false);
                        error.set(Some("Error al procesar los datos del usuario".to_string()));
                    }
                }
                Err(err) => {
                    submitting.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    let form_content = view! {
        <form on:submit=on_submit class="space-y-6">
            // Header
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    "Iniciar Sesión"
                </h2>
            </div>

            // Global error message
            {move || {
                error.get().map(|message| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{message}</p>
                        </div>
                    }
                })
            }}

            // Success message
            {move || {
                success.get().map(|message| {
                    view! {
                        <div class="p-3 bg-green-100 border border-green-300 rounded-lg">
                            <p class="text-sm text-green-700">{message}</p>
                        </div>
                    }
                })
            }}

            // Username or email field
            <div>
                <label for="username_or_email" class="block text-sm font-medium text-theme-primary mb-1">
                    "Usuario o Email"
                </label>
                <input
                    type="text"
                    id="username_or_email"
                    name="username_or_email"
                    autocomplete="username"
                    placeholder="usuario@ejemplo.com"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || identifier_error.get().is_some()
                    prop:value=move || identifier.get()
                    on:input=move |ev| {
                        identifier.set(event_target_value(&ev));
                        identifier_error.set(None);
                    }
                    on:blur=move |_| { validate_identifier(); }
                />
                {move || {
                    identifier_error.get().map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{message}</p>
                        }
                    })
                }}
            </div>

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                    "Contraseña"
                </label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="••••••"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || password_error.get().is_some()
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { validate_password(); }
                />
                {move || {
                    password_error.get().map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{message}</p>
                        }
                    })
                }}
            </div>

            // Submit button
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-medium rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || submitting.get()
            >
                {move || {
                    if submitting.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                "Procesando..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Iniciar Sesión"</span> }.into_any()
                    }
                }}
            </button>

            // Register link
            <div class="text-center text-sm text-theme-secondary">
                "¿No tienes cuenta? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_register_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Crear una"
                </button>
            </div>
        </form>
    };

    if modal {
        view! {
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                // Backdrop
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    on:click=move |_| {
                        if let Some(callback) = on_close.as_ref() {
                            callback.run(());
                        }
                    }
                ></div>

                // Modal content
                <div class="relative w-full max-w-md bg-theme-primary rounded-xl shadow-xl p-6 border border-theme">
                    // Close button
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-theme-tertiary hover:text-theme-secondary"
                        on:click=move |_| {
                            if let Some(callback) = on_close.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        <Icon name=icons::X class="h-5 w-5" />
                    </button>

                    {form_content}
                </div>
            </div>
        }.into_any()
    } else {
        view! {
            <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                {form_content}
            </div>
        }.into_any()
    }
}
