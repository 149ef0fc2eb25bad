//! Deduplicated, recency-ordered clipboard history.
mod store;

#[cfg(test)]
mod tests;

pub use store::HistoryStore;
