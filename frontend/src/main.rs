//! Admin page for browsing the human-detection history.

mod api;
mod components;
mod config;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
