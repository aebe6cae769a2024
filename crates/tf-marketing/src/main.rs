//! Terafence Marketing Site
//!
//! Serves the Leptos pages and the contact server function over axum.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tf_core::{ContactConfig, HttpContactEndpoint};
    use tf_marketing::app::App;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tf_marketing=debug,tf_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let contact = ContactConfig::default();
    let endpoint = HttpContactEndpoint::new(&contact)?;
    tracing::info!("Contact inquiries will be posted to {}", endpoint.url());

    // Pages and server functions both see the endpoint through context
    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(endpoint.clone()),
            App,
        )
        .fallback(leptos_axum::file_and_error_handler(App))
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// The browser bundle starts from `tf_marketing::hydrate` instead
#[cfg(not(feature = "ssr"))]
fn main() {}
