// QuickFetch - server-rendered post list with search and an echo API
//
// Posts are fetched once per page view from a remote JSON source (fail-soft,
// optionally cached), then filtered by a per-view search session.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
