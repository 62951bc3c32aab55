#![recursion_limit = "4096"]
#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use estatefront::app::*;
    use estatefront::core::transport::ReqwestTransport;
    use estatefront::core::{ContentClient, HeaderSection, SiteConfig};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid site configuration: {e}");
        return Err(e.into());
    }
    tracing::info!(
        "Config loaded: api={}, site={}, popup={}, email_required={}",
        config.api_url,
        config.site_identifier,
        config.popup_enabled,
        config.email_required
    );

    // The site still starts when the API is down; sections show their error state
    let probe = ContentClient::from_config(&config, ReqwestTransport::new());
    match probe.fetch_section::<HeaderSection>().await {
        Ok(header) => tracing::info!("Content API reachable, serving {}", header.property_name),
        Err(e) => tracing::warn!("Content API probe failed: {e}"),
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
