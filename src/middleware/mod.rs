pub mod extract;
pub mod user_id;

pub use extract::{AppJson, AppPath};
pub use user_id::CallerId;
