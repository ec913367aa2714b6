use yew::prelude::*;

use crate::i18n::current::loading_spinner as t;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(20)]
    pub size_px: u32,
}

/// Inline activity marker shown while a history request is outstanding.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size_px);

    html! {
        <span
            class={classes!("inline-flex", "items-center", "gap-2", "text-sm", "text-gray-500")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <span
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-gray-300",
                    "border-t-blue-500",
                    "animate-spin"
                )}
            />
            <span class={classes!("sr-only")}>{ t::LABEL }</span>
        </span>
    }
}
