// HTTP routes
pub mod echo;
pub mod health;
pub mod home;
pub mod posts;

pub use echo::*;
pub use health::*;
pub use home::*;
pub use posts::*;
