pub mod filter;
pub mod models;
pub mod page;
pub mod provider;
pub mod session;
pub mod views;

pub use filter::filter_posts;
pub use models::PostRecord;
pub use page::{HomePage, PageComposer, POSTS_PER_PAGE};
pub use provider::PostProvider;
pub use session::{SearchObserver, SearchSession, SearchView};
pub use views::{PageHandle, ViewStore};
