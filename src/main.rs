#[cfg(feature = "serve")]
#[tokio::main]
async fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    if let Err(err) = portfolio_site::serve::run().await {
        tracing::error!(error = %err, "server exited");
        std::process::exit(1);
    }
}

#[cfg(all(feature = "csr", not(feature = "serve")))]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("couldn't install console logger: {err}");
    }

    leptos::mount::mount_to_body(App);
}

#[cfg(not(any(feature = "csr", feature = "serve")))]
pub fn main() {
    // nothing to run natively without a feature
    // build with `csr` for the browser bundle or `serve` for the static server
}
