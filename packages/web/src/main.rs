use dioxus::prelude::*;

use signin::FormConfig;
use views::{SignIn, Welcome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    SignIn {},
    #[route("/welcome")]
    Welcome {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FORM_CONFIG: &str = include_str!("../assets/phone_auth.toml");

/// Read the bundled `phone_auth.toml`, falling back to defaults.
fn load_config() -> FormConfig {
    FormConfig::from_toml(FORM_CONFIG).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", FormConfig::filename(), e);
        FormConfig::default()
    })
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The verification endpoint is served by the backend behind the same origin.
    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
