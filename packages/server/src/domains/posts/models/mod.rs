pub mod post;

pub use post::PostRecord;
