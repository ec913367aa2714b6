//! State owned by the history page: filters, page cursor and the last page
//! the service returned.
//!
//! The browser never performs I/O. Each trigger (mount, submit, navigation)
//! hands back a [`FetchRequest`]; the caller runs it and feeds the result to
//! [`HistoryBrowser::apply`]. Requests are numbered, and only the most recent
//! one may change state, so a slow response can never overwrite a newer page.

use crate::{
    error::HistoryError,
    filter::{FilterCriteria, HistoryQuery},
    history::{HistoryRecord, HistoryResponse},
    pagination::PageState,
};

/// Whether the latest request is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// The latest ticket has not been answered yet.
    Fetching,
}

/// A fetch the caller must run on behalf of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Pass back to [`HistoryBrowser::apply`] with the result.
    pub ticket: u64,
    /// Filters and page to send.
    pub query: HistoryQuery,
}

/// What the caller should do after a response was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was replaced; re-render.
    Applied,
    /// A newer request is outstanding; the response was dropped.
    Discarded,
    /// Show this text in a blocking notification. Prior records stay.
    Alert(String),
    /// Write this text to the developer log only. Prior records stay.
    Logged(String),
}

/// Filters, page cursor, go-to input and the last applied page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBrowser {
    criteria: FilterCriteria,
    page: PageState,
    go_to_value: i64,
    results: HistoryResponse,
    phase: FetchPhase,
    issued: u64,
}

impl Default for HistoryBrowser {
    fn default() -> Self {
        Self::new(PageState::first())
    }
}

impl HistoryBrowser {
    /// Empty browser positioned at `page`; nothing is fetched until
    /// [`HistoryBrowser::mount`].
    pub fn new(page: PageState) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page,
            go_to_value: 1,
            results: HistoryResponse::default(),
            phase: FetchPhase::Idle,
            issued: 0,
        }
    }

    /// Filters as currently typed, submitted or not.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Page of the latest request.
    pub fn page(&self) -> PageState {
        self.page
    }

    /// Current content of the go-to input.
    pub fn go_to_value(&self) -> i64 {
        self.go_to_value
    }

    /// Rows of the last applied page.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.results.records
    }

    /// Matching records across all pages, as last reported.
    pub fn total(&self) -> u64 {
        self.results.total
    }

    /// Loading state.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Shorthand for `phase() == FetchPhase::Fetching`.
    pub fn is_fetching(&self) -> bool {
        self.phase == FetchPhase::Fetching
    }

    /// Highest page index for the last reported total; zero when empty.
    pub fn last_page(&self) -> u64 {
        self.page.last_page(self.results.total)
    }

    /// `Prev` is usable.
    pub fn prev_enabled(&self) -> bool {
        self.page.can_prev()
    }

    /// `Next` is usable.
    pub fn next_enabled(&self) -> bool {
        self.page.can_next(self.results.total)
    }

    /// Form edits are held until the next fetch; they do not trigger one.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Hold the go-to input; only [`HistoryBrowser::go_to`] acts on it.
    pub fn set_go_to_value(&mut self, value: i64) {
        self.go_to_value = value;
    }

    /// Initial load with whatever filters are held.
    pub fn mount(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Filter submission always restarts from page 1.
    pub fn submit(&mut self) -> FetchRequest {
        self.page.index = 1;
        self.go_to_value = 1;
        self.issue()
    }

    /// Step back one page, if there is one.
    pub fn prev(&mut self) -> Option<FetchRequest> {
        if !self.prev_enabled() {
            return None;
        }
        self.page.index -= 1;
        Some(self.issue())
    }

    /// Step forward one page, if there is one.
    pub fn next(&mut self) -> Option<FetchRequest> {
        if !self.next_enabled() {
            return None;
        }
        self.page.index += 1;
        Some(self.issue())
    }

    /// Jump to the page typed into the go-to input. Out-of-range targets are
    /// ignored without feedback.
    pub fn go_to(&mut self) -> Option<FetchRequest> {
        let target = self.go_to_value;
        if !self.page.accepts_go_to(target, self.results.total) {
            tracing::debug!(requested = target, last_page = self.last_page(), "go-to page ignored");
            return None;
        }
        // accepts_go_to guarantees 1..=last_page
        self.page.index = target.unsigned_abs();
        Some(self.issue())
    }

    /// Feed back the result of the request numbered `ticket`.
    ///
    /// Only the most recently issued ticket is applied; errors leave the
    /// previous records in place.
    pub fn apply(
        &mut self,
        ticket: u64,
        result: Result<HistoryResponse, HistoryError>,
    ) -> FetchOutcome {
        if ticket != self.issued {
            tracing::debug!(ticket, latest = self.issued, "discarding superseded history response");
            return FetchOutcome::Discarded;
        }
        self.phase = FetchPhase::Idle;

        match result {
            Ok(page) => {
                self.results = page;
                FetchOutcome::Applied
            },
            Err(HistoryError::Api {
                status,
                message,
            }) => {
                tracing::warn!(status, "history service rejected the request");
                FetchOutcome::Alert(message)
            },
            Err(err) => FetchOutcome::Logged(format!("Error while calling the API: {err}")),
        }
    }

    fn issue(&mut self) -> FetchRequest {
        self.issued += 1;
        self.phase = FetchPhase::Fetching;
        let query = HistoryQuery::new(self.criteria.clone(), self.page);
        tracing::debug!(ticket = self.issued, page_index = self.page.index, "history fetch issued");
        FetchRequest {
            ticket: self.issued,
            query,
        }
    }
}
