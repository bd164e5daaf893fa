//! User domain entities.

pub mod admin;
pub mod client;
pub mod record;
pub mod role;
pub mod status;

pub use admin::AdminUser;
pub use client::{
    ClientAccount, ClientUser, DEFAULT_AVAILABLE_TOKENS, DEFAULT_MONTHLY_ALLOWANCE,
    DEFAULT_STORAGE_LIMIT_GB,
};
pub use record::UserRecord;
pub use role::AdminRole;
pub use status::AccountStatus;
