use std::{cell::RefCell, rc::Rc};

use human_detect_shared::{FetchOutcome, FetchRequest, FilterCriteria, HistoryBrowser};
use yew::{functional::UseForceUpdateHandle, prelude::*};
use yew_hooks::prelude::use_mount;

use crate::{
    api::fetch_history,
    components::{
        filter_form::FilterForm, history_table::HistoryTable, loading_spinner::LoadingSpinner,
        pagination::PaginationBar,
    },
    i18n::current::history_page as t,
};

type SharedBrowser = Rc<RefCell<HistoryBrowser>>;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Run one fetch issued by the browser and hand the result back to it.
///
/// Requests are never cancelled; the browser drops answers that are no
/// longer the latest.
fn run_fetch(browser: SharedBrowser, redraw: UseForceUpdateHandle, request: FetchRequest) {
    redraw.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_history(&request.query).await;
        let outcome = browser.borrow_mut().apply(request.ticket, result);
        match outcome {
            FetchOutcome::Applied => {},
            FetchOutcome::Discarded => return,
            FetchOutcome::Alert(message) => alert(&message),
            FetchOutcome::Logged(message) => {
                web_sys::console::error_1(&message.into());
            },
        }
        redraw.force_update();
    });
}

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let browser = use_mut_ref(HistoryBrowser::default);
    let redraw = use_force_update();

    {
        let browser = browser.clone();
        let redraw = redraw.clone();
        use_mount(move || {
            set_document_title(t::DOCUMENT_TITLE);
            let request = browser.borrow_mut().mount();
            run_fetch(browser, redraw, request);
        });
    }

    let on_criteria_change = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |criteria: FilterCriteria| {
            browser.borrow_mut().set_criteria(criteria);
            redraw.force_update();
        })
    };

    let on_submit = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let request = browser.borrow_mut().submit();
            run_fetch(browser.clone(), redraw.clone(), request);
        })
    };

    let on_prev = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let request = browser.borrow_mut().prev();
            if let Some(request) = request {
                run_fetch(browser.clone(), redraw.clone(), request);
            }
        })
    };

    let on_next = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let request = browser.borrow_mut().next();
            if let Some(request) = request {
                run_fetch(browser.clone(), redraw.clone(), request);
            }
        })
    };

    let on_go_to_input = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: i64| {
            browser.borrow_mut().set_go_to_value(value);
            redraw.force_update();
        })
    };

    let on_go_to = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let request = browser.borrow_mut().go_to();
            if let Some(request) = request {
                run_fetch(browser.clone(), redraw.clone(), request);
            }
        })
    };

    let view = browser.borrow().clone();

    html! {
        <div class={classes!("min-h-screen", "p-6")}>
            <main>
                <h1 class={classes!("mb-4", "flex", "items-center", "gap-3", "text-2xl", "font-bold")}>
                    { t::TITLE }
                    if view.is_fetching() {
                        <LoadingSpinner />
                    }
                </h1>

                <FilterForm
                    criteria={view.criteria().clone()}
                    on_change={on_criteria_change}
                    on_submit={on_submit}
                />

                <HistoryTable records={view.records().to_vec()} />

                <PaginationBar
                    current_page={view.page().index}
                    last_page={view.last_page()}
                    prev_disabled={!view.prev_enabled()}
                    next_disabled={!view.next_enabled()}
                    go_to_value={view.go_to_value()}
                    on_prev={on_prev}
                    on_next={on_next}
                    on_go_to_input={on_go_to_input}
                    on_go_to={on_go_to}
                />
            </main>
        </div>
    }
}
