use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_two};

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub current_page: u64,
    pub last_page: u64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub go_to_value: i64,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_go_to_input: Callback<i64>,
    pub on_go_to: Callback<()>,
}

/// Prev / Next buttons, the "Page i of n" label and a go-to box.
///
/// Enablement is decided by the caller; this component only renders it.
#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "h-9",
        "px-3",
        "rounded",
        "text-sm",
        "font-semibold",
        "transition-colors",
        "duration-200",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );
    let nav_btn_classes = classes!(base_btn_classes.clone(), "bg-gray-300", "text-gray-700");
    let go_btn_classes =
        classes!(base_btn_classes, "bg-blue-500", "text-white", "hover:bg-blue-600");

    let prev_onclick = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };

    let next_onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let go_to_oninput = {
        let on_go_to_input = props.on_go_to_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // 与 number input 一致：空值按 0 处理，之后被范围检查拒绝
            on_go_to_input.emit(input.value().trim().parse::<i64>().unwrap_or(0));
        })
    };

    let go_onclick = {
        let on_go_to = props.on_go_to.clone();
        Callback::from(move |_: MouseEvent| on_go_to.emit(()))
    };

    html! {
        <nav
            class={classes!("flex", "items-center", "justify-between", "mt-6")}
            aria-label={t::ARIA_NAV}
        >
            <div class={classes!("flex", "items-center", "gap-2")}>
                <button
                    type="button"
                    class={nav_btn_classes.clone()}
                    disabled={props.prev_disabled}
                    onclick={prev_onclick}
                >
                    { t::PREV }
                </button>
                <button
                    type="button"
                    class={nav_btn_classes}
                    disabled={props.next_disabled}
                    onclick={next_onclick}
                >
                    { t::NEXT }
                </button>
                <span class="text-gray-700">
                    { fill_two(t::PAGE_OF_TEMPLATE, props.current_page, props.last_page) }
                </span>
            </div>
            <div class={classes!("flex", "items-center", "gap-2")}>
                <input
                    type="number"
                    min="1"
                    class={classes!("border", "rounded", "p-2", "w-20", "text-center")}
                    aria-label={t::GO_TO_ARIA}
                    value={props.go_to_value.to_string()}
                    oninput={go_to_oninput}
                />
                <button type="button" class={go_btn_classes} onclick={go_onclick}>
                    { t::GO }
                </button>
            </div>
        </nav>
    }
}
