// HTTP server setup (Axum + server-side rendering)
pub mod app;
pub mod render;
pub mod routes;
pub mod static_files;

pub use app::*;
