//! Client user entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::AccountStatus;

/// Default token balance applied when a client row carries no value.
pub const DEFAULT_AVAILABLE_TOKENS: i64 = 5000;
/// Default monthly token allowance.
pub const DEFAULT_MONTHLY_ALLOWANCE: i64 = 5000;
/// Default storage quota in gigabytes.
pub const DEFAULT_STORAGE_LIMIT_GB: i64 = 10;

/// The normalized client principal returned by authentication.
///
/// All subscription/token fields are concrete; missing values in the
/// backing row have already been defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientUser {
    /// Unique client identifier.
    pub id: String,
    /// Contact name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Company name.
    pub company: String,
    /// Account status.
    pub status: AccountStatus,
    /// Subscription plan identifier (e.g. `"professional"`).
    pub subscription_plan: String,
    /// Subscription billing status (e.g. `"active"`).
    pub subscription_status: String,
    /// Remaining AI-analysis tokens.
    pub available_tokens: i64,
    /// Monthly token allowance.
    pub monthly_allowance: i64,
    /// Storage quota in gigabytes.
    pub storage_limit_gb: i64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A raw row from the remote `clients` table.
///
/// The token/quota columns are nullable; [`ClientAccount::into_user`]
/// applies the platform defaults. The stored password is plaintext in
/// the current schema (see the password verifier strategy).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientAccount {
    /// Unique client identifier.
    pub id: String,
    /// Contact name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Company name.
    pub company: String,
    /// Stored password (plaintext, demo-grade).
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Account status.
    pub status: AccountStatus,
    /// Subscription plan identifier.
    pub subscription_plan: String,
    /// Subscription billing status.
    pub subscription_status: String,
    /// Remaining AI-analysis tokens, if set.
    pub available_tokens: Option<i64>,
    /// Monthly token allowance, if set.
    pub monthly_allowance: Option<i64>,
    /// Storage quota in gigabytes, if set.
    pub storage_limit_gb: Option<i64>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl ClientAccount {
    /// Normalize the row into a [`ClientUser`], defaulting any missing
    /// token/quota values.
    pub fn into_user(self) -> ClientUser {
        ClientUser {
            id: self.id,
            name: self.name,
            email: self.email,
            company: self.company,
            status: self.status,
            subscription_plan: self.subscription_plan,
            subscription_status: self.subscription_status,
            available_tokens: self.available_tokens.unwrap_or(DEFAULT_AVAILABLE_TOKENS),
            monthly_allowance: self.monthly_allowance.unwrap_or(DEFAULT_MONTHLY_ALLOWANCE),
            storage_limit_gb: self.storage_limit_gb.unwrap_or(DEFAULT_STORAGE_LIMIT_GB),
            created_at: self.created_at,
        }
    }
}
