//! Wire models of `GET /history`.

use serde::{Deserialize, Serialize};

// 单条检测历史（一次图片检测请求的结果）
/// One detection request and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Service-assigned id.
    pub query_id: i64,
    /// Request time, `YYYY-MM-DD_HH-MM-SS`.
    pub time: String,
    /// Stored path of the submitted image.
    pub query_image_file: String,
    /// Stored path of the annotated image.
    pub result_image_file: String,
    /// Humans detected in the image.
    pub num_humans: i64,
}

/// One page of history plus the number of records matching the filters
/// across every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Matching records across every page.
    pub total: u64,
    /// Rows of the requested page.
    pub records: Vec<HistoryRecord>,
}

impl HistoryResponse {
    /// True when this page carries no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One validation problem reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message.
    pub msg: String,
}

/// Body of a non-2xx response from the history service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Problems in the order the service listed them.
    #[serde(default)]
    pub detail: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// All `detail[].msg` values, one per line.
    pub fn message(&self) -> String {
        self.detail
            .iter()
            .map(|item| item.msg.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
