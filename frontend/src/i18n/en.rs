pub mod history_page {
    pub const TITLE: &str = "History";
    pub const DOCUMENT_TITLE: &str = "History · Human Detector";
}

pub mod filter_form {
    pub const SEARCH_LABEL: &str = "Search";
    pub const SEARCH_PLACEHOLDER: &str = "query_id";
    pub const TIME_MIN_LABEL: &str = "From Time";
    pub const TIME_MAX_LABEL: &str = "To Time";
    pub const HUMANS_MIN_LABEL: &str = "Min number of humans";
    pub const HUMANS_MAX_LABEL: &str = "Max number of humans";
    pub const SUBMIT: &str = "Search";
}

pub mod history_table {
    pub const COL_ID: &str = "ID";
    pub const COL_TIME: &str = "Time";
    pub const COL_QUERY_IMAGE: &str = "Query Image File";
    pub const COL_RESULT_IMAGE: &str = "Result Image File";
    pub const COL_HUMANS: &str = "Number of Detected Humans";
    pub const EMPTY: &str = "No records found.";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREV: &str = "Prev";
    pub const NEXT: &str = "Next";
    pub const PAGE_OF_TEMPLATE: &str = "Page {} of {}";
    pub const GO: &str = "Go";
    pub const GO_TO_ARIA: &str = "Page number";
}

pub mod loading_spinner {
    pub const LABEL: &str = "Loading...";
}

pub mod not_found {
    pub const TITLE: &str = "Page not found";
    pub const BACK_TO_HISTORY: &str = "Back to history";
}
