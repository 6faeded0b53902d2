use std::{error::Error, sync::Arc};

#[cfg(not(debug_assertions))]
use axum::http::{header, HeaderValue};
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use git_const::git_short_hash;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use meridian_app::{shell, App};
use tracing::instrument;

#[instrument(skip(options, req))]
async fn leptos_handler(
    Extension(options): Extension<Arc<LeptosOptions>>,
    req: Request<Body>,
) -> Response {
    let handler = leptos_axum::render_app_to_stream({
        let options = options.as_ref().clone();
        move || shell(options.clone())
    });
    handler(req).await.into_response()
}

/// Builds the axum router that serves the leptos app and the
/// cargo-leptos JS/WASM bundle.
pub(crate) async fn create_leptos_app() -> Result<Router, Box<dyn Error>> {
    use tower_http::services::ServeDir;

    let conf = get_configuration(None)?;
    let mut leptos_options = conf.leptos_options;
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;

    // URL path and filesystem path of the bundle cargo-leptos emits
    let bundle_path = format!("/{site_root}/{pkg_dir}");
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");

    // Bust browser caches across deploys by keying the pkg dir on the
    // git hash the binary was built from.
    let git_hash = git_short_hash!();
    leptos_options.site_pkg_dir = Arc::from(["pkg/", git_hash].concat());

    let bundle_service = ServeDir::new(&bundle_filepath);
    #[cfg(not(debug_assertions))]
    let bundle_service = tower_http::set_header::SetResponseHeader::appending(
        bundle_service,
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400, immutable"),
    );
    tracing::info!("Serving pkg dir: {bundle_filepath}");

    let routes = generate_route_list(App);

    Ok(Router::new()
        .nest_service(
            &["/", &leptos_options.site_pkg_dir].concat(),
            bundle_service.clone(),
        )
        .nest_service(&bundle_path, bundle_service)
        .leptos_routes_with_handler(routes, get(leptos_handler))
        .layer(Extension(Arc::new(leptos_options.clone())))
        .with_state(leptos_options))
}
