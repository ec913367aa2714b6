//! Types and state shared by the human-detection history frontend and CLI.
//!
//! Everything here is I/O free so it builds for both `wasm32` and native
//! targets.

pub mod browser;
pub mod error;
pub mod filter;
pub mod history;
pub mod pagination;

pub use browser::{FetchOutcome, FetchPhase, FetchRequest, HistoryBrowser};
pub use error::HistoryError;
pub use filter::{parse_count_input, FilterCriteria, HistoryQuery, TIME_FORMAT_HINT};
pub use history::{ErrorDetail, ErrorResponse, HistoryRecord, HistoryResponse};
pub use pagination::{last_page, PageState, PAGE_SIZE};
