pub mod common;
pub mod electricity;
pub mod health;
pub mod housing;
pub mod info;

pub use electricity::post_electricity;
pub use health::health;
pub use housing::post_housing;
pub use info::service_info;
