use human_detect_shared::{parse_count_input, FilterCriteria, TIME_FORMAT_HINT};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::current::filter_form as t;

#[derive(Properties, PartialEq)]
pub struct FilterFormProps {
    pub criteria: FilterCriteria,
    pub on_change: Callback<FilterCriteria>,
    pub on_submit: Callback<()>,
}

#[derive(Clone, Copy)]
enum Field {
    QueryId,
    TimeMin,
    TimeMax,
    HumansMin,
    HumansMax,
}

impl Field {
    fn apply(self, criteria: &mut FilterCriteria, raw: String) {
        match self {
            Field::QueryId => criteria.query_id = raw,
            Field::TimeMin => criteria.time_min = raw,
            Field::TimeMax => criteria.time_max = raw,
            Field::HumansMin => criteria.num_humans_min = parse_count_input(&raw),
            Field::HumansMax => criteria.num_humans_max = parse_count_input(&raw),
        }
    }
}

#[function_component(FilterForm)]
pub fn filter_form(props: &FilterFormProps) -> Html {
    let input_for = |field: Field| {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = criteria.clone();
            field.apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let count_value =
        |value: Option<i64>| value.map(|n| n.to_string()).unwrap_or_default();
    let label_classes = classes!("font-medium");
    let input_classes = classes!("border", "rounded", "p-2", "text-black");

    html! {
        <form {onsubmit} class={classes!("mb-6", "grid", "grid-cols-2", "gap-4")}>
            <label class={classes!("flex", "flex-col", "gap-1")}>
                <span class={label_classes.clone()}>{ t::SEARCH_LABEL }</span>
                <input
                    type="text"
                    class={input_classes.clone()}
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={props.criteria.query_id.clone()}
                    oninput={input_for(Field::QueryId)}
                />
            </label>
            <div class={classes!("grid", "grid-cols-2", "gap-4")}>
                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class={label_classes.clone()}>{ t::TIME_MIN_LABEL }</span>
                    <input
                        type="text"
                        class={input_classes.clone()}
                        placeholder={TIME_FORMAT_HINT}
                        value={props.criteria.time_min.clone()}
                        oninput={input_for(Field::TimeMin)}
                    />
                </label>
                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class={label_classes.clone()}>{ t::TIME_MAX_LABEL }</span>
                    <input
                        type="text"
                        class={input_classes.clone()}
                        placeholder={TIME_FORMAT_HINT}
                        value={props.criteria.time_max.clone()}
                        oninput={input_for(Field::TimeMax)}
                    />
                </label>
                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class={label_classes.clone()}>{ t::HUMANS_MIN_LABEL }</span>
                    <input
                        type="number"
                        class={input_classes.clone()}
                        value={count_value(props.criteria.num_humans_min)}
                        oninput={input_for(Field::HumansMin)}
                    />
                </label>
                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class={label_classes}>{ t::HUMANS_MAX_LABEL }</span>
                    <input
                        type="number"
                        class={input_classes}
                        value={count_value(props.criteria.num_humans_max)}
                        oninput={input_for(Field::HumansMax)}
                    />
                </label>
            </div>
            <button
                type="submit"
                class={classes!(
                    "col-start-2",
                    "h-10",
                    "w-1/2",
                    "rounded",
                    "bg-blue-500",
                    "px-4",
                    "py-2",
                    "text-white",
                    "hover:bg-blue-600"
                )}
            >
                { t::SUBMIT }
            </button>
        </form>
    }
}
