use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Public user profile, as persisted and as returned to callers.
/// Credential material lives in [`Credential`], never here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub user_id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    pub user_id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 8, max = 64))]
    pub password: String,
}

impl RegisterUser {
    /// Splits the request into the profile to persist, dropping the password.
    pub fn into_profile(self) -> User {
        User {
            user_id: self.user_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
        }
    }
}

/// Kept in its own store file so password hashes never travel with profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// `by` is a full snapshot of the author at post time; later profile edits
/// do not propagate into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub tweet_id: Uuid,
    pub content: String,
    pub by: User,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTweet {
    pub tweet_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub content: String,
    #[validate(nested)]
    pub by: User,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl CreateTweet {
    pub fn into_tweet(self, now: DateTime<Utc>) -> Tweet {
        Tweet {
            tweet_id: self.tweet_id,
            content: self.content,
            by: self.by,
            created: self.created.unwrap_or(now),
            updated: None,
        }
    }
}
