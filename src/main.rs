#[cfg(target_arch = "wasm32")]
fn main() {
    use galeria::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Client-side rendered app; nothing to run natively.
}
