//! Filter inputs and the query string they become.

use serde::{Deserialize, Serialize};

use crate::pagination::PageState;

/// Placeholder shown in the time inputs; the service rejects anything else
/// with a 422.
pub const TIME_FORMAT_HINT: &str = "YYYY-MM-DD_HH-MM-SS";

/// The five filter inputs of the history page. Empty strings and `None`
/// mean "unfiltered"; nothing else is checked before the values reach the
/// service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact query id, as typed.
    #[serde(default, alias = "search_query_id")]
    pub query_id: String,
    /// Earliest timestamp, inclusive.
    #[serde(default)]
    pub time_min: String,
    /// Latest timestamp, inclusive.
    #[serde(default)]
    pub time_max: String,
    /// Fewest detected humans.
    #[serde(default)]
    pub num_humans_min: Option<i64>,
    /// Most detected humans.
    #[serde(default)]
    pub num_humans_max: Option<i64>,
}

impl FilterCriteria {
    /// No input holds a value.
    pub fn is_unfiltered(&self) -> bool {
        self.query_id.is_empty()
            && self.time_min.is_empty()
            && self.time_max.is_empty()
            && self.num_humans_min.is_none()
            && self.num_humans_max.is_none()
    }
}

/// Read a number input the way the page always has: an optional sign and
/// the leading digits are kept, anything after them is dropped (`"2.5"` is 2,
/// `"1e3"` is 1). Text with no leading digits clears the filter.
pub fn parse_count_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse::<i64>().ok()
}

/// Everything one `GET /history` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Filters sent as-is.
    pub criteria: FilterCriteria,
    /// Requested page.
    pub page: PageState,
}

impl HistoryQuery {
    /// Bundle filters and page.
    pub fn new(criteria: FilterCriteria, page: PageState) -> Self {
        Self {
            criteria,
            page,
        }
    }

    /// All seven parameters, always present, in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let count = |value: Option<i64>| value.map(|n| n.to_string()).unwrap_or_default();
        vec![
            ("query_id", self.criteria.query_id.clone()),
            ("time_min", self.criteria.time_min.clone()),
            ("time_max", self.criteria.time_max.clone()),
            ("num_humans_min", count(self.criteria.num_humans_min)),
            ("num_humans_max", count(self.criteria.num_humans_max)),
            ("page_index", self.page.index.to_string()),
            ("page_size", self.page.size.to_string()),
        ]
    }

    /// [`HistoryQuery::query_pairs`] percent-encoded and joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
