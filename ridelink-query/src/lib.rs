pub mod pipeline;
pub mod searchable;

pub use pipeline::{Applied, FetchTicket, PagedQuery, PageFetcher, Searchable, SortSpec};
