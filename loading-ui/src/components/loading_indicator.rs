use leptos::prelude::*;
use loading_app::domain::{LoadingIndicator as IndicatorModel, Palette, ViewNode};

/// Full-bleed loading screen. Mount it wherever a placeholder is needed;
/// the background follows the `Palette` in context, if any.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let palette = use_context::<Palette>().unwrap_or_default();
    render_node(&IndicatorModel::render(), &palette)
}

fn render_node(node: &ViewNode, palette: &Palette) -> AnyView {
    match node {
        ViewNode::Container { style, children } => {
            let children = children
                .iter()
                .map(|child| render_node(child, palette))
                .collect::<Vec<_>>();

            view! {
                <div class="loading-indicator" style=style.to_css(palette)>
                    {children}
                </div>
            }
            .into_any()
        }
        ViewNode::ActivityIndicator { style } => view! {
            <div
                class=format!("activity-indicator activity-indicator--{}", style.size.name())
                role="progressbar"
                aria-busy="true"
                aria-label="Loading"
                style=style.to_css(palette)
            ></div>
        }
        .into_any(),
    }
}
