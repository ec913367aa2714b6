// Reusable components live here.

pub mod filter_form;
pub mod history_table;
pub mod loading_spinner;
pub mod pagination;
