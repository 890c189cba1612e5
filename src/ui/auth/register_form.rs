//! Register form component
//!
//! A modal/inline form for creating an account with username, email,
//! full name and password. The username is checked for availability
//! against the backend while the user fills in the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::api;
use crate::ui::icon::{Icon, icons};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
    /// Whether to show as a modal or inline form
    #[prop(default = false)]
    modal: bool,
    /// Callback to close modal (if modal=true)
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation and request state
    let username_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let validate_username = move || {
        let value = username.get();
        if value.is_empty() {
            username_error.set(Some("El nombre de usuario es obligatorio".to_string()));
            false
        } else if value.len() < 3 {
            username_error.set(Some(
                "El nombre de usuario debe tener al menos 3 caracteres".to_string(),
            ));
            false
        } else if value.len() > 50 {
            username_error.set(Some(
                "El nombre de usuario debe tener como máximo 50 caracteres".to_string(),
            ));
            false
        } else {
            username_error.set(None);
            true
        }
    };

    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("El email es obligatorio".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Ingresa un email válido".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("La contraseña es obligatoria".to_string()));
            false
        } else if value.len() < 6 {
            password_error.set(Some("Mínimo 6 caracteres".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    // Ask the backend whether the username is still free. Transport
    // errors are ignored here; registration itself will report them.
    let check_availability = move || {
        let value = username.get();
        if value.len() < 3 {
            return;
        }

        spawn_local(async move {
            match api::check_username(&value).await {
                Ok(false) => {
                    username_error.set(Some(
                        "Este nombre de usuario ya está en uso".to_string(),
                    ));
                }
                Ok(true) => {
                    username_error.set(None);
                }
                Err(err) => {
                    leptos::logging::error!("Error checking username: {err}");
                }
            }
        });
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        error.set(None);
        success.set(None);

        let username_valid = validate_username();
        let email_valid = validate_email();
        let password_valid = validate_password();
        if !username_valid || !email_valid || !password_valid {
            return;
        }

        let request = api::RegisterRequest {
            username: username.get(),
            email: email.get(),
            full_name: full_name.get(),
            password: password.get(),
        };
        submitting.set(true);

        spawn_local(async move {
            match api::register(&request).await {
                Ok(user) => {
                    if auth.login(user) {
                        submitting.set(false);
                        success.set(Some("¡Cuenta creada exitosamente!".to_string()));

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
                    "Crear Cuenta"
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

            // Username field
            <div>
                <label for="new-username" class="block text-sm font-medium text-theme-primary mb-1">
                    "Nombre de Usuario"
                </label>
                <input
                    type="text"
                    id="new-username"
                    name="username"
                    autocomplete="username"
                    placeholder="usuario123"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || username_error.get().is_some()
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        username.set(event_target_value(&ev));
                        username_error.set(None);
                    }
                    on:blur=move |_| {
                        if validate_username() {
                            check_availability();
                        }
                    }
                />
                <p class="mt-1 text-xs text-theme-tertiary">
                    "Será tu identificador único en la plataforma"
                </p>
                {move || {
                    username_error.get().map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{message}</p>
                        }
                    })
                }}
            </div>

            // Email field
            <div>
                <label for="new-email" class="block text-sm font-medium text-theme-primary mb-1">
                    "Email"
                </label>
                <input
                    type="email"
                    id="new-email"
                    name="email"
                    autocomplete="email"
                    placeholder="usuario@ejemplo.com"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { validate_email(); }
                />
                {move || {
                    email_error.get().map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{message}</p>
                        }
                    })
                }}
            </div>

            // Full name field (optional)
            <div>
                <label for="full-name" class="block text-sm font-medium text-theme-primary mb-1">
                    "Nombre Completo"
                </label>
                <input
                    type="text"
                    id="full-name"
                    name="full_name"
                    autocomplete="name"
                    placeholder="Juan Pérez"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    prop:value=move || full_name.get()
                    on:input=move |ev| {
                        full_name.set(event_target_value(&ev));
                    }
                />
            </div>

            // Password field
            <div>
                <label for="new-password" class="block text-sm font-medium text-theme-primary mb-1">
                    "Contraseña"
                </label>
                <input
                    type="password"
                    id="new-password"
                    name="password"
                    autocomplete="new-password"
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
                <p class="mt-1 text-xs text-theme-tertiary">
                    "Mínimo 6 caracteres"
                </p>
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
                        view! { <span class="block">"Crear Cuenta"</span> }.into_any()
                    }
                }}
            </button>

            // Login link
            <div class="text-center text-sm text-theme-secondary">
                "¿Ya tienes cuenta? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Iniciar sesión"
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
