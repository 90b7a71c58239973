//! Browser entry point; build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if let Err(err) = console_log::init_with_level(level) {
            leptos::logging::warn!("console logger unavailable: {err}");
        }
        leptos::mount::mount_to_body(tictactoe_client::app::App);
    }
}
