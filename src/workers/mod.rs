pub mod core;
pub mod refresher;
pub mod searcher;
pub mod sequence;

pub use self::core::{DashboardUpdate, EventSender, UpdateSender};
pub use refresher::DashboardRefresher;
pub use searcher::{SearchWorker, searchable_query};
pub use sequence::LatestOnly;
