pub mod linkedin;
pub mod rank;
pub mod types;

pub use linkedin::Fetcher;
pub use rank::rank;
pub use types::{JobListing, SearchCriteria};
