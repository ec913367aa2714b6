//! Terminal rendering of history pages.

use anyhow::Result;
use human_detect_shared::{HistoryRecord, HistoryResponse, PageState};

use crate::cli::OutputFormat;

const HEADERS: [&str; 5] =
    ["ID", "Time", "Query Image File", "Result Image File", "Number of Detected Humans"];
const EMPTY: &str = "No records found.";

/// Render a page (or a merged walk when `page` is `None`).
pub fn render(
    response: &HistoryResponse,
    page: Option<PageState>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Table => Ok(with_footer(render_table(&response.records), response, page)),
        OutputFormat::Vertical => {
            Ok(with_footer(render_vertical(&response.records), response, page))
        },
    }
}

fn cells(record: &HistoryRecord) -> [String; 5] {
    [
        record.query_id.to_string(),
        record.time.clone(),
        record.query_image_file.clone(),
        record.result_image_file.clone(),
        record.num_humans.to_string(),
    ]
}

/// Bordered table; an empty page prints one centered "No records found." row.
pub fn render_table(records: &[HistoryRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(cells).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{separator}+");
    let line = |values: Vec<&str>| {
        let body = values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!(" {value:<width$} "))
            .collect::<Vec<_>>()
            .join("|");
        format!("|{body}|")
    };

    let mut out = vec![separator.clone(), line(HEADERS.to_vec()), separator.clone()];
    if rows.is_empty() {
        let inner = separator.len() - 2;
        out.push(format!("|{:^inner$}|", EMPTY));
    } else {
        for row in &rows {
            out.push(line(row.iter().map(String::as_str).collect()));
        }
    }
    out.push(separator);
    out.join("\n")
}

/// One labelled block per record.
pub fn render_vertical(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return EMPTY.to_string();
    }
    let label_width = HEADERS.iter().map(|h| h.len()).max().unwrap_or(0);
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut block = vec![format!("*************** {}. row ***************", i + 1)];
            for (header, value) in HEADERS.iter().zip(cells(record)) {
                block.push(format!("{header:>label_width$}: {value}"));
            }
            block.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn with_footer(body: String, response: &HistoryResponse, page: Option<PageState>) -> String {
    let footer = match page {
        Some(page) => format!(
            "Page {} of {} ({} matching records)",
            page.index,
            page.last_page(response.total),
            response.total
        ),
        None => format!("{} of {} matching records", response.records.len(), response.total),
    };
    format!("{body}\n{footer}")
}
