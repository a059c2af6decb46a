use crate::components::{ErrorDisplay, LoadingIndicator};
use leptos::prelude::*;
use loading_app::domain::ViewNode;
use server_fn::ServerFnError;

/// Palette-resolved render tree, for hosts that draw the indicator
/// themselves instead of embedding the HTML.
#[server(GetLoadingTreeFn, "/api", endpoint = "loading_tree")]
pub async fn get_loading_tree() -> Result<ViewNode, ServerFnError> {
    use loading_app::domain::LoadingIndicator as IndicatorModel;
    use loading_app::AppContext;

    let palette = match use_context::<AppContext>() {
        Some(ctx) => ctx.palette,
        None => {
            tracing::info!("get_loading_tree: No AppContext, using default palette");
            Default::default()
        }
    };

    Ok(IndicatorModel::render().resolve(&palette))
}

#[component]
pub fn TreePage() -> impl IntoView {
    let tree = Resource::new(|| (), |_| get_loading_tree());

    view! {
        <section class="tree">
            <h1 class="tree__title">"Loading indicator render tree"</h1>
            <Suspense fallback=move || view! { <LoadingIndicator/> }>
                {move || {
                    tree.get().map(|result| match result {
                        Ok(node) => {
                            let json = serde_json::to_string_pretty(&node)
                                .unwrap_or_else(|e| format!("unserializable tree: {e}"));
                            view! { <pre class="tree__json">{json}</pre> }.into_any()
                        }
                        Err(e) => view! {
                            <ErrorDisplay
                                message=e.to_string()
                                on_retry=Callback::new(move |_| tree.refetch())
                            />
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
