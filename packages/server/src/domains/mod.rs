pub mod echo;
pub mod posts;
