pub mod history;
pub mod not_found;

pub use history::HistoryPage;
