use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use loading_app::domain::{LoadingIndicator as IndicatorModel, ViewNode};
use loading_app::AppContext;
use loading_errors::AppError;
use loading_ui::pages::GetLoadingTreeFn;
use loading_ui::palette::PaletteMeta;
use loading_ui::App;
use std::collections::HashMap;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to load design tokens: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GetLoadingTreeFn>();
    tracing::info!("Registered server function: GetLoadingTreeFn");

    let app = Router::new()
        .merge(api_routes(app_context.clone()))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_app_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_app_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

/// Components read the `Palette` directly; server functions take the
/// whole `AppContext`.
fn provide_app_context(ctx: AppContext) {
    provide_context(ctx.palette);
    provide_context(ctx);
}

/// Plain JSON routes that sit beside the Leptos app.
fn api_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/loading-indicator.json",
        get(move |query: Query<HashMap<String, String>>| {
            let ctx = ctx.clone();
            async move { loading_tree_json(ctx, query.0) }
        }),
    )
}

/// `?<token>=#RRGGBB` previews the tree against other token values without
/// touching the server palette. Blank values keep the server's color.
fn loading_tree_json(
    ctx: AppContext,
    query: HashMap<String, String>,
) -> Result<Json<ViewNode>, AppError> {
    let palette = ctx
        .palette
        .with_overrides(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    if palette != ctx.palette {
        tracing::debug!("Previewing loading tree with ui_950 = {}", palette.ui_950);
    }

    Ok(Json(IndicatorModel::render().resolve(&palette)))
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        html, body { height: 100%; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: #0a0a0a;
            color: #e5e5e5;
        }
        .container { display: flex; flex-direction: column; min-height: 100%; }
        .page--full-bleed { display: flex; flex: 1 1 auto; min-height: 100vh; }
        .activity-indicator {
            border-style: solid;
            border-color: transparent;
            border-top-color: currentColor;
            border-right-color: currentColor;
            border-radius: 50%;
            animation: activity-spin 0.8s linear infinite;
        }
        @keyframes activity-spin { to { transform: rotate(360deg); } }
        @media (prefers-reduced-motion: reduce) {
            .activity-indicator { animation-duration: 2.4s; }
        }
        .tree { display: flex; flex-direction: column; flex: 1 1 auto; padding: 1.5rem; gap: 1rem; }
        .tree__title { font-size: 1.25rem; }
        .tree__json { background: #171717; border-radius: 8px; padding: 1rem; overflow-x: auto; }
        .error { background: #2a0d0c; border: 2px solid #c11007; border-radius: 8px; padding: 1.25rem; }
        .error__title { color: #c11007; font-weight: 700; margin-bottom: 0.5rem; }
        .error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: #c11007; color: #fff; border: none; border-radius: 4px; cursor: pointer; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <PaletteMeta/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
