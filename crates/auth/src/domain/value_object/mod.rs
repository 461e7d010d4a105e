//! Value Objects

pub mod account_id;
pub mod user_name;

pub use account_id::AccountId;
pub use user_name::{UserName, UserNameError};
