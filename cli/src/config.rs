//! Saved queries and how they merge with flags.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use human_detect_shared::{FilterCriteria, HistoryQuery, PageState, PAGE_SIZE};
use serde::Deserialize;

use crate::cli::HistoryArgs;

/// Saved history query, e.g. `invoke_history_config.json`.
///
/// Every key is optional; `search_query_id` is accepted for `query_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryFile {
    /// See [`FilterCriteria::query_id`].
    #[serde(default, alias = "search_query_id")]
    pub query_id: Option<String>,
    /// See [`FilterCriteria::time_min`].
    #[serde(default)]
    pub time_min: Option<String>,
    /// See [`FilterCriteria::time_max`].
    #[serde(default)]
    pub time_max: Option<String>,
    /// See [`FilterCriteria::num_humans_min`].
    #[serde(default)]
    pub num_humans_min: Option<i64>,
    /// See [`FilterCriteria::num_humans_max`].
    #[serde(default)]
    pub num_humans_max: Option<i64>,
    /// 1-based page index.
    #[serde(default)]
    pub page_index: Option<u64>,
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<u64>,
}

/// Read and decode a saved query.
pub fn load_history_file(path: &Path) -> Result<HistoryFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Combine flags with the optional file. Flags win; missing pages fall back
/// to the first page of [`PAGE_SIZE`] rows.
pub fn resolve_query(args: &HistoryArgs, file: HistoryFile) -> HistoryQuery {
    let criteria = FilterCriteria {
        query_id: args.query_id.clone().or(file.query_id).unwrap_or_default(),
        time_min: args.time_min.clone().or(file.time_min).unwrap_or_default(),
        time_max: args.time_max.clone().or(file.time_max).unwrap_or_default(),
        num_humans_min: args.num_humans_min.or(file.num_humans_min),
        num_humans_max: args.num_humans_max.or(file.num_humans_max),
    };

    let mut page = PageState::with_size(args.page_size.or(file.page_size).unwrap_or(PAGE_SIZE));
    page.index = args.page.or(file.page_index).unwrap_or(1).max(1);

    HistoryQuery::new(criteria, page)
}

/// Resolve the query for `args`, reading `--config` when given.
pub fn load_query(args: &HistoryArgs) -> Result<HistoryQuery> {
    let file = match args.config.as_deref() {
        Some(path) => load_history_file(path)?,
        None => HistoryFile::default(),
    };
    Ok(resolve_query(args, file))
}
