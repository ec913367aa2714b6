use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("p-6", "space-y-2")}>
            <h2 class="text-xl font-bold">{ t::TITLE }</h2>
            <Link<Route> to={Route::History} classes={classes!("text-blue-500", "underline")}>
                { t::BACK_TO_HISTORY }
            </Link<Route>>
        </main>
    }
}
