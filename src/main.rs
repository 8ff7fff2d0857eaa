#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use nextstack_portfolio::{app::*, config::BASE_PATH};
    use tower_http::{
        services::{ServeDir, ServeFile},
        trace::TraceLayer,
    };

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("couldn't load leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // the page links its bundle and favicon under the base path
    let site_root = leptos_options.site_root.to_string();
    let pkg_dir = format!("{site_root}/{}", leptos_options.site_pkg_dir);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .nest_service(&format!("{BASE_PATH}/pkg"), ServeDir::new(pkg_dir))
        .route_service(
            &format!("{BASE_PATH}/favicon.svg"),
            ServeFile::new(format!("{site_root}/favicon.svg")),
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("couldn't bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with an error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
