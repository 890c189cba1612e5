use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::ui::auth::{UserMenu, provide_auth_context};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session state for the whole tree; hydrates from sessionStorage.
    let _auth = provide_auth_context();

    view! {
        // sets the document title
        <Title text="Galería"/>

        <header class="flex items-center justify-between px-4 py-2 bg-theme-primary border-b border-theme">
            <span class="text-lg font-bold text-theme-primary">"Galería"</span>
            <UserMenu />
        </header>
    }
}
