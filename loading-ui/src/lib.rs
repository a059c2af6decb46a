pub mod components;
pub mod pages;
pub mod palette;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{LoadingPage, TreePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Loading"/>
        <Meta name="description" content="Full-screen loading indicator"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=LoadingPage/>
                    <Route path=path!("/tree") view=TreePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let palette = palette::palette_from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(palette);
        view! { <App/> }
    });
}
