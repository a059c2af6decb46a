use crate::components::LoadingIndicator;
use leptos::prelude::*;

/// The indicator on its own, filling the viewport.
#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="page page--full-bleed">
            <LoadingIndicator/>
        </div>
    }
}
