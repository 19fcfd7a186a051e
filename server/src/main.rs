use anyhow::Context as _;
use leptos::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    // The only fallible moment in this code base: refuse to serve a site
    // whose identity records are malformed.
    app::config::validate().context("invalid site configuration")?;

    let conf = get_configuration(None).context("could not load leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes(&ctx, routes, app_fn)
        // Also resolves /profile.png and friends out of the site root.
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    // run our app with hyper
    // `axum::Server` is a re-export of `hyper::Server`
    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited")?;
    Ok(())
}
