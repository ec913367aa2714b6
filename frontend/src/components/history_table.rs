use human_detect_shared::HistoryRecord;
use yew::prelude::*;

use crate::i18n::current::history_table as t;

const COLUMN_COUNT: &str = "5";

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub records: Vec<HistoryRecord>,
}

#[function_component(HistoryTable)]
pub fn history_table(props: &HistoryTableProps) -> Html {
    let cell = classes!("px-4", "py-2", "border");

    let rows = if props.records.is_empty() {
        html! {
            <tr>
                <td colspan={COLUMN_COUNT} class={classes!("text-center", "py-4")}>
                    { t::EMPTY }
                </td>
            </tr>
        }
    } else {
        props
            .records
            .iter()
            .map(|record| {
                html! {
                    <tr key={record.query_id.to_string()} class="text-center">
                        <td class={cell.clone()}>{ record.query_id }</td>
                        <td class={cell.clone()}>{ record.time.clone() }</td>
                        <td class={cell.clone()}>{ record.query_image_file.clone() }</td>
                        <td class={cell.clone()}>{ record.result_image_file.clone() }</td>
                        <td class={cell.clone()}>{ record.num_humans }</td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class={classes!("overflow-x-auto", "overflow-y-auto")}>
            <table class={classes!("min-w-full", "border", "border-gray-200")}>
                <thead>
                    <tr>
                        <th class={cell.clone()}>{ t::COL_ID }</th>
                        <th class={cell.clone()}>{ t::COL_TIME }</th>
                        <th class={cell.clone()}>{ t::COL_QUERY_IMAGE }</th>
                        <th class={cell.clone()}>{ t::COL_RESULT_IMAGE }</th>
                        <th class={cell}>{ t::COL_HUMANS }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </div>
    }
}
